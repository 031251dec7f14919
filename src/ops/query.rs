use crate::model::list::TaskList;
use crate::model::task::Task;

/// Filter and render configuration for a listing. Defaults match the bare
/// `ls` command: everything shown, colored, numbered and indented, no
/// priority column, no filters.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Show all subtasks; when off, only the first subtask at each level
    pub show_all: bool,
    pub with_color: bool,
    pub with_done: bool,
    pub with_indent: bool,
    pub with_number: bool,
    /// Show the priority column
    pub with_priority: bool,
    /// Keep only tasks with exactly this priority letter
    pub priority_filter: Option<char>,
    /// Literal, case-sensitive substring terms; a task must contain all
    pub terms: Vec<String>,
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions {
            show_all: true,
            with_color: true,
            with_done: true,
            with_indent: true,
            with_number: true,
            with_priority: false,
            priority_filter: None,
            terms: Vec::new(),
        }
    }
}

/// Run the listing pipeline: flatten in document order, filter, then sort.
///
/// Sort is a stable partition — prioritized tasks come first, ordered by
/// ascending letter (ties keep document order), then the rest untouched.
/// Sibling order in the tree itself is never changed by listing.
pub fn run_query<'a>(list: &'a TaskList, opts: &ListOptions) -> Vec<&'a Task> {
    let hits = list.all_tasks().into_iter().filter(|t| survives(t, opts));

    let (mut prioritized, unprioritized): (Vec<&Task>, Vec<&Task>) =
        hits.partition(|t| t.priority.is_some());
    prioritized.sort_by_key(|t| t.priority);
    prioritized.extend(unprioritized);
    prioritized
}

fn survives(task: &Task, opts: &ListOptions) -> bool {
    if !opts.terms.iter().all(|term| task.text.contains(term.as_str())) {
        return false;
    }
    if !opts.with_done && task.is_done() {
        return false;
    }
    if let Some(p) = opts.priority_filter
        && task.priority != Some(p.to_ascii_uppercase())
    {
        return false;
    }
    if !opts.show_all && !is_first_child(&task.addr) {
        return false;
    }
    true
}

/// True for top-level tasks and for the first subtask at any level.
fn is_first_child(addr: &str) -> bool {
    match addr.rsplit_once('.') {
        None => true,
        Some((_, last)) => last == "1",
    }
}
