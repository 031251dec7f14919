use chrono::Local;

use crate::model::list::TaskList;
use crate::model::task::Task;

/// Error type for task operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("no such task: {0}")]
    InvalidAddress(String),
    #[error("invalid priority '{0}': expected a single letter A-Z")]
    BadPriority(String),
}

// ---------------------------------------------------------------------------
// Address resolution
// ---------------------------------------------------------------------------

/// Split a dotted-decimal address into 0-based indices.
/// Every segment must be a 1-based integer.
fn parse_addr(addr: &str) -> Result<Vec<usize>, TaskError> {
    addr.split('.')
        .map(|seg| {
            seg.parse::<usize>()
                .ok()
                .filter(|&n| n >= 1)
                .map(|n| n - 1)
                .ok_or_else(|| TaskError::InvalidAddress(addr.to_string()))
        })
        .collect()
}

/// Look up the task at a dotted-decimal address like `2.1.3`.
pub fn resolve<'a>(list: &'a TaskList, addr: &str) -> Result<&'a Task, TaskError> {
    let path = parse_addr(addr)?;
    let mut siblings = &list.tasks;
    let mut found = None;
    for &i in &path {
        let task = siblings
            .get(i)
            .ok_or_else(|| TaskError::InvalidAddress(addr.to_string()))?;
        siblings = &task.subtasks;
        found = Some(task);
    }
    found.ok_or_else(|| TaskError::InvalidAddress(addr.to_string()))
}

/// Mutable variant of [`resolve`].
pub fn resolve_mut<'a>(list: &'a mut TaskList, addr: &str) -> Result<&'a mut Task, TaskError> {
    let path = parse_addr(addr)?;
    let Some((&first, rest)) = path.split_first() else {
        return Err(TaskError::InvalidAddress(addr.to_string()));
    };
    let mut task = list
        .tasks
        .get_mut(first)
        .ok_or_else(|| TaskError::InvalidAddress(addr.to_string()))?;
    for &i in rest {
        task = task
            .subtasks
            .get_mut(i)
            .ok_or_else(|| TaskError::InvalidAddress(addr.to_string()))?;
    }
    Ok(task)
}

// ---------------------------------------------------------------------------
// Structural mutations
// ---------------------------------------------------------------------------

/// Append a task: to the top level when `addr` is empty, otherwise as the
/// last child of the task at `addr`. The lookup fails before any mutation.
pub fn add_task(list: &mut TaskList, task: Task, addr: &str) -> Result<(), TaskError> {
    if addr.is_empty() {
        list.tasks.push(task);
        return Ok(());
    }
    let parent = resolve_mut(list, addr)?;
    parent.subtasks.push(task);
    Ok(())
}

/// Remove the task at `addr` together with its whole subtree, returning it.
/// The index path identifies the owning parent exactly, so removal is by
/// position, never by comparing task contents (siblings may be identical).
pub fn delete_task(list: &mut TaskList, addr: &str) -> Result<Task, TaskError> {
    let path = parse_addr(addr)?;
    let Some((&last, parents)) = path.split_last() else {
        return Err(TaskError::InvalidAddress(addr.to_string()));
    };

    let siblings = if parents.is_empty() {
        &mut list.tasks
    } else {
        let mut task = list
            .tasks
            .get_mut(parents[0])
            .ok_or_else(|| TaskError::InvalidAddress(addr.to_string()))?;
        for &i in &parents[1..] {
            task = task
                .subtasks
                .get_mut(i)
                .ok_or_else(|| TaskError::InvalidAddress(addr.to_string()))?;
        }
        &mut task.subtasks
    };

    if last >= siblings.len() {
        return Err(TaskError::InvalidAddress(addr.to_string()));
    }
    Ok(siblings.remove(last))
}

// ---------------------------------------------------------------------------
// Field mutations
// ---------------------------------------------------------------------------

/// Mark a task done as of today, and every not-yet-done descendant with it.
/// A descendant that is already done keeps its original date — completion
/// dates are never overwritten or cleared.
pub fn set_done(task: &mut Task) {
    let today = Local::now().format("%Y-%m-%d").to_string();
    mark_done(task, &today);
}

fn mark_done(task: &mut Task, date: &str) {
    if task.done.is_none() {
        task.done = Some(date.to_string());
    }
    for sub in &mut task.subtasks {
        mark_done(sub, date);
    }
}

/// Set a task's priority. With `recursive`, every descendant gets the same
/// letter unconditionally.
pub fn set_priority(task: &mut Task, priority: char, recursive: bool) {
    task.priority = Some(priority);
    if recursive {
        for sub in &mut task.subtasks {
            set_priority(sub, priority, true);
        }
    }
}

/// Validate a priority argument: first character must be a letter.
pub fn parse_priority_arg(arg: &str) -> Result<char, TaskError> {
    arg.chars()
        .next()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .ok_or_else(|| TaskError::BadPriority(arg.to_string()))
}

pub fn append_text(task: &mut Task, text: &str) {
    task.text.push(' ');
    task.text.push_str(text);
}

pub fn replace_text(task: &mut Task, text: &str) {
    task.text = text.to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> TaskList {
        let mut list = TaskList::from_lines([
            "one",
            "two",
            " two.a",
            " two.b",
            "  two.b.i",
            " two.c",
            "three",
        ]);
        list.assign_addrs();
        list
    }

    #[test]
    fn test_resolve_top_level() {
        let list = sample_list();
        assert_eq!(resolve(&list, "3").unwrap().text, "three");
    }

    #[test]
    fn test_resolve_nested() {
        let list = sample_list();
        assert_eq!(resolve(&list, "2.2.1").unwrap().text, "two.b.i");
    }

    #[test]
    fn test_resolve_out_of_range() {
        let list = sample_list();
        assert!(matches!(
            resolve(&list, "4"),
            Err(TaskError::InvalidAddress(_))
        ));
        assert!(matches!(
            resolve(&list, "2.9"),
            Err(TaskError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_resolve_non_numeric_and_zero() {
        let list = sample_list();
        assert!(resolve(&list, "x").is_err());
        assert!(resolve(&list, "").is_err());
        assert!(resolve(&list, "1.").is_err());
        assert!(resolve(&list, "0").is_err());
    }

    #[test]
    fn test_add_top_level() {
        let mut list = sample_list();
        add_task(&mut list, Task::new("four".to_string()), "").unwrap();
        list.assign_addrs();
        assert_eq!(list.tasks[3].text, "four");
        assert_eq!(list.tasks[3].addr, "4");
    }

    #[test]
    fn test_add_subtask_appends_last() {
        let mut list = sample_list();
        let before = resolve(&list, "2").unwrap().subtasks.len();
        add_task(&mut list, Task::new("two.d".to_string()), "2").unwrap();
        list.assign_addrs();
        let parent = resolve(&list, "2").unwrap();
        assert_eq!(parent.subtasks.len(), before + 1);
        assert_eq!(parent.subtasks[before].addr, format!("2.{}", before + 1));
    }

    #[test]
    fn test_add_to_missing_parent_is_rejected() {
        let mut list = sample_list();
        let err = add_task(&mut list, Task::new("x".to_string()), "9");
        assert!(err.is_err());
        assert_eq!(list.tasks.len(), 3);
    }

    #[test]
    fn test_delete_middle_child_compacts_addresses() {
        let mut list = sample_list();
        let removed = delete_task(&mut list, "2.2").unwrap();
        assert_eq!(removed.text, "two.b");
        // subtree goes with it
        assert_eq!(removed.subtasks.len(), 1);
        list.assign_addrs();
        let parent = resolve(&list, "2").unwrap();
        assert_eq!(parent.subtasks.len(), 2);
        assert_eq!(parent.subtasks[0].addr, "2.1");
        assert_eq!(parent.subtasks[1].addr, "2.2");
        assert_eq!(parent.subtasks[1].text, "two.c");
    }

    #[test]
    fn test_delete_top_level() {
        let mut list = sample_list();
        delete_task(&mut list, "1").unwrap();
        list.assign_addrs();
        assert_eq!(list.tasks[0].text, "two");
        assert_eq!(list.tasks[0].addr, "1");
    }

    #[test]
    fn test_delete_invalid_address_leaves_list_untouched() {
        let mut list = sample_list();
        assert!(delete_task(&mut list, "2.9").is_err());
        assert_eq!(sample_list(), list);
    }

    #[test]
    fn test_set_done_keeps_existing_child_date() {
        // done prefixes come before the indent, the way the codec writes them
        let mut list = TaskList::from_lines([
            "parent",
            " child one",
            "x 2020-01-01  child two",
            " child three",
        ]);
        set_done(&mut list.tasks[0]);
        let parent = &list.tasks[0];
        let date = parent.done.clone().unwrap();
        assert_ne!(date, "2020-01-01");
        assert_eq!(parent.subtasks[0].done.as_ref(), Some(&date));
        assert_eq!(parent.subtasks[1].done.as_deref(), Some("2020-01-01"));
        assert_eq!(parent.subtasks[2].done.as_ref(), Some(&date));
    }

    #[test]
    fn test_set_priority_non_recursive() {
        let mut list = sample_list();
        let task = resolve_mut(&mut list, "2").unwrap();
        set_priority(task, 'A', false);
        assert_eq!(task.priority, Some('A'));
        assert_eq!(task.subtasks[0].priority, None);
    }

    #[test]
    fn test_set_priority_recursive_overwrites_descendants() {
        let mut list = sample_list();
        let task = resolve_mut(&mut list, "2").unwrap();
        task.subtasks[0].priority = Some('Z');
        set_priority(task, 'B', true);
        assert_eq!(task.priority, Some('B'));
        assert_eq!(task.subtasks[0].priority, Some('B'));
        assert_eq!(task.subtasks[1].subtasks[0].priority, Some('B'));
    }

    #[test]
    fn test_parse_priority_arg() {
        assert_eq!(parse_priority_arg("a").unwrap(), 'A');
        assert_eq!(parse_priority_arg("B").unwrap(), 'B');
        // Only the first character counts, as long as it is a letter
        assert_eq!(parse_priority_arg("crit").unwrap(), 'C');
        assert!(matches!(
            parse_priority_arg(""),
            Err(TaskError::BadPriority(_))
        ));
        assert!(matches!(
            parse_priority_arg("1"),
            Err(TaskError::BadPriority(_))
        ));
    }

    #[test]
    fn test_append_and_replace_text() {
        let mut task = Task::new("buy milk".to_string());
        append_text(&mut task, "and eggs");
        assert_eq!(task.text, "buy milk and eggs");
        replace_text(&mut task, "buy oat milk");
        assert_eq!(task.text, "buy oat milk");
    }
}
