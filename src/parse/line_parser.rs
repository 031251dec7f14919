use std::sync::LazyLock;

use regex::Regex;

use crate::model::task::Task;

static DONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^x (\d{4}-\d{2}-\d{2}) ").expect("valid regex"));
static PRIORITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(([A-Za-z])\) ").expect("valid regex"));

/// Parse one raw line into a task.
///
/// Grammar, left to right, every piece optional:
/// `["x " DATE " "] ["(" LETTER ")" " "] SPACES* TEXT`
///
/// Never fails: a prefix that doesn't match is simply absent and its
/// characters stay part of the text. Callers skip blank lines — a
/// whitespace-only line decodes to an empty task at depth 0.
pub fn parse_line(line: &str) -> Task {
    let mut rest = line;

    let done = DONE_RE.captures(rest).map(|caps| {
        let date = caps[1].to_string();
        // "x " + date + " "
        rest = &rest[3 + date.len()..];
        date
    });

    let priority = PRIORITY_RE.captures(rest).and_then(|caps| {
        rest = &rest[4..];
        caps[1].chars().next().map(|c| c.to_ascii_uppercase())
    });

    let depth = if rest.trim().is_empty() {
        0
    } else {
        count_indent(rest)
    };

    let mut task = Task::new(rest.trim().to_string());
    task.done = done;
    task.priority = priority;
    task.depth = depth;
    task
}

/// Count leading spaces
fn count_indent(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}
