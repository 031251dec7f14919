use crate::model::task::Task;
use crate::parse::parse_line;

/// The whole todo file in memory: an ordered forest of top-level tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    pub tasks: Vec<Task>,
}

impl TaskList {
    /// Rebuild the forest from raw file lines.
    ///
    /// Nesting is reconstructed from relative indentation depth alone, using
    /// a stack of sibling counters (one per open level). Any depth increase
    /// opens exactly one new level, however large the raw jump; a decrease
    /// closes levels down to the raw depth. Irregular indentation therefore
    /// still parses — it is read as "one level deeper/shallower", not
    /// rejected. Blank lines contribute nothing and do not move the depth.
    pub fn from_lines<'a, I>(lines: I) -> TaskList
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut list = TaskList::default();
        // counts[i] = 1-based position of the open task at level i
        let mut counts: Vec<usize> = Vec::new();

        for line in lines {
            let line = line.trim_end();
            if line.trim().is_empty() {
                continue;
            }
            let task = parse_line(line);

            let last_depth = counts.len() as isize - 1;
            if task.depth as isize > last_depth {
                counts.push(1);
            } else {
                // Same depth keeps the stack; shallower truncates it first.
                counts.truncate(task.depth + 1);
                if let Some(top) = counts.last_mut() {
                    *top += 1;
                }
            }

            // All counters but the last form the parent path. The counters
            // track positions of tasks appended by this very loop, so the
            // path always resolves.
            let parent: Vec<usize> = counts[..counts.len() - 1].iter().map(|c| c - 1).collect();
            list.push_at(&parent, task);
        }

        list
    }

    /// Append `task` as the last child of the node at the given index path
    /// (top-level when the path is empty).
    fn push_at(&mut self, path: &[usize], task: Task) {
        let mut siblings = &mut self.tasks;
        for &i in path {
            siblings = &mut siblings[i].subtasks;
        }
        siblings.push(task);
    }

    /// Recompute every task's dotted-decimal address from current structure.
    /// Must run after load and after every structural mutation — addresses
    /// are a view, never stored in the file.
    pub fn assign_addrs(&mut self) {
        for (i, task) in self.tasks.iter_mut().enumerate() {
            assign_addr(task, (i + 1).to_string());
        }
    }

    /// All tasks in document (pre-order) order.
    pub fn all_tasks(&self) -> Vec<&Task> {
        let mut out = Vec::new();
        for task in &self.tasks {
            collect_preorder(task, &mut out);
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

fn assign_addr(task: &mut Task, addr: String) {
    for (i, sub) in task.subtasks.iter_mut().enumerate() {
        assign_addr(sub, format!("{}.{}", addr, i + 1));
    }
    task.addr = addr;
}

fn collect_preorder<'a>(task: &'a Task, out: &mut Vec<&'a Task>) {
    out.push(task);
    for sub in &task.subtasks {
        collect_preorder(sub, out);
    }
}
