use crate::model::list::TaskList;
use crate::model::task::Task;

/// Serialize the whole forest to file content (one task per line, `\n`
/// terminated).
pub fn serialize_list(list: &TaskList) -> String {
    let lines = serialize_tasks(&list.tasks);
    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Serialize a slice of tasks (and their subtrees) to lines, pre-order.
pub fn serialize_tasks(tasks: &[Task]) -> Vec<String> {
    let mut lines = Vec::new();
    for task in tasks {
        serialize_task(task, &mut lines);
    }
    lines
}

fn serialize_task(task: &Task, lines: &mut Vec<String>) {
    let mut line = String::new();

    // Both prefixes are emitted when both are set, in the order the parser
    // reads them, so encode is the exact inverse of decode.
    if let Some(date) = &task.done {
        line.push_str("x ");
        line.push_str(date);
        line.push(' ');
    }
    if let Some(p) = task.priority {
        line.push('(');
        line.push(p.to_ascii_uppercase());
        line.push_str(") ");
    }

    line.push_str(&" ".repeat(task.depth));
    line.push_str(&task.text);
    lines.push(line);

    for sub in &task.subtasks {
        serialize_task(sub, lines);
    }
}
