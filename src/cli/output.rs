use std::collections::HashMap;

use serde::Serialize;

use crate::model::list::TaskList;
use crate::model::task::Task;
use crate::ops::query::ListOptions;

pub const RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub addr: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<char>,
}

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        addr: task.addr.clone(),
        text: task.text.clone(),
        done: task.done.clone(),
        priority: task.priority,
    }
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// Map a color name (as used in config.toml) to its escape code.
fn color_code(name: &str) -> Option<&'static str> {
    match name {
        "black" => Some("\x1b[0;30m"),
        "red" => Some("\x1b[0;31m"),
        "green" => Some("\x1b[0;32m"),
        "brown" => Some("\x1b[0;33m"),
        "blue" => Some("\x1b[0;34m"),
        "purple" => Some("\x1b[0;35m"),
        "cyan" => Some("\x1b[0;36m"),
        "light-grey" => Some("\x1b[0;37m"),
        "grey" => Some("\x1b[1;30m"),
        "bright-red" => Some("\x1b[1;31m"),
        "bright-green" => Some("\x1b[1;32m"),
        "yellow" => Some("\x1b[1;33m"),
        "bright-blue" => Some("\x1b[1;34m"),
        "bright-purple" => Some("\x1b[1;35m"),
        "bright-cyan" => Some("\x1b[1;36m"),
        "white" => Some("\x1b[1;37m"),
        "default" => Some(RESET),
        _ => None,
    }
}

/// Escape code for a priority tier. Config overrides win; unknown color
/// names fall through to the built-in table (A bright red, B bright blue,
/// everything else plain).
pub fn priority_color(priority: Option<char>, overrides: &HashMap<String, String>) -> &'static str {
    let Some(p) = priority else {
        return RESET;
    };
    if let Some(name) = overrides.get(&p.to_string())
        && let Some(code) = color_code(name)
    {
        return code;
    }
    match p {
        'A' => "\x1b[1;31m",
        'B' => "\x1b[1;34m",
        _ => RESET,
    }
}

// ---------------------------------------------------------------------------
// Line rendering
// ---------------------------------------------------------------------------

/// Width of the number column: the widest address over ALL tasks, so the
/// column stays aligned whatever subset a filter keeps.
pub fn addr_width(list: &TaskList) -> usize {
    list.all_tasks()
        .iter()
        .map(|t| t.addr.len())
        .max()
        .unwrap_or(0)
}

/// Render one listing line from the enabled fields:
/// ` NUM:` `x DATE` `(P)` indent text, optionally color-wrapped.
pub fn render_line(
    task: &Task,
    opts: &ListOptions,
    num_width: usize,
    colors: &HashMap<String, String>,
) -> String {
    let mut line = String::new();

    if opts.with_number {
        line.push_str(&format!(" {:>width$}:", task.addr, width = num_width));
    }
    if opts.with_done
        && let Some(date) = &task.done
    {
        line.push_str(&format!("x {}", date));
    }
    if opts.with_priority {
        let pri = task
            .priority
            .map(|p| format!("({})", p))
            .unwrap_or_default();
        line.push_str(&format!("{:>3}", pri));
    }
    if opts.with_indent {
        line.push_str(&" ".repeat(task.depth));
    }
    line.push(' ');
    line.push_str(&task.text);

    if opts.with_color {
        format!("{}{}{}", priority_color(task.priority, colors), line, RESET)
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_line;

    fn no_color_opts() -> ListOptions {
        ListOptions {
            with_color: false,
            ..ListOptions::default()
        }
    }

    fn with_addr(line: &str, addr: &str) -> Task {
        let mut task = parse_line(line);
        task.addr = addr.to_string();
        task
    }

    #[test]
    fn test_render_number_column_right_aligned() {
        let task = with_addr("buy milk", "2");
        let line = render_line(&task, &no_color_opts(), 3, &HashMap::new());
        assert_eq!(line, "   2: buy milk");
    }

    #[test]
    fn test_render_done_marker() {
        let task = with_addr("x 2020-01-01 shipped", "1");
        let line = render_line(&task, &no_color_opts(), 1, &HashMap::new());
        assert_eq!(line, " 1:x 2020-01-01 shipped");
    }

    #[test]
    fn test_render_priority_column() {
        let mut opts = no_color_opts();
        opts.with_priority = true;
        let task = with_addr("(A) urgent", "1");
        assert_eq!(
            render_line(&task, &opts, 1, &HashMap::new()),
            " 1:(A) urgent"
        );
        let plain = with_addr("later", "2");
        assert_eq!(render_line(&plain, &opts, 1, &HashMap::new()), " 2:    later");
    }

    #[test]
    fn test_render_indent_and_bare_text() {
        let opts = ListOptions {
            with_color: false,
            with_number: false,
            ..ListOptions::default()
        };
        let task = with_addr("  get eggs", "1.1");
        assert_eq!(render_line(&task, &opts, 3, &HashMap::new()), "   get eggs");
    }

    #[test]
    fn test_render_color_wrap() {
        let opts = ListOptions::default();
        let task = with_addr("(A) urgent", "1");
        let line = render_line(&task, &opts, 1, &HashMap::new());
        assert!(line.starts_with("\x1b[1;31m"));
        assert!(line.ends_with(RESET));
    }

    #[test]
    fn test_color_override_from_config() {
        let mut overrides = HashMap::new();
        overrides.insert("A".to_string(), "yellow".to_string());
        assert_eq!(priority_color(Some('A'), &overrides), "\x1b[1;33m");
        // unknown name falls back to the built-in table
        overrides.insert("B".to_string(), "chartreuse".to_string());
        assert_eq!(priority_color(Some('B'), &overrides), "\x1b[1;34m");
    }

    #[test]
    fn test_no_priority_defaults_to_reset() {
        assert_eq!(priority_color(None, &HashMap::new()), RESET);
        assert_eq!(priority_color(Some('Q'), &HashMap::new()), RESET);
    }

    #[test]
    fn test_addr_width_covers_all_tasks() {
        let mut list = TaskList::from_lines(["one", " sub", "  subsub"]);
        list.assign_addrs();
        // widest is "1.1.1"
        assert_eq!(addr_width(&list), 5);
    }
}
