use std::error::Error;

use crate::cli::commands::{Cli, Commands, LsArgs};
use crate::cli::output;
use crate::io::todo_io;
use crate::model::config::Config;
use crate::model::list::TaskList;
use crate::ops::query::{self, ListOptions};
use crate::ops::task_ops;
use crate::parse::parse_line;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Load, apply the one command of this invocation, and save (for mutating
/// commands). Addresses are recomputed right after load — they only exist
/// in memory.
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = todo_io::load_config()?;
    let path = todo_io::todo_file_path(&config, cli.file.as_deref())?;
    let mut list = todo_io::load_tasks(&path)?;
    list.assign_addrs();

    match cli.command {
        Commands::Add(args) => {
            let task = parse_line(&args.text.join(" "));
            task_ops::add_task(&mut list, task, "")?;
            todo_io::save_tasks(&path, &list)?;
        }
        Commands::Addsub(args) => {
            // The new subtask sits one space-level below its parent
            let parent_depth = task_ops::resolve(&list, &args.addr)?.depth;
            let mut task = parse_line(&args.text.join(" "));
            task.depth = parent_depth + 1;
            task_ops::add_task(&mut list, task, &args.addr)?;
            todo_io::save_tasks(&path, &list)?;
        }
        Commands::Append(args) => {
            let task = task_ops::resolve_mut(&mut list, &args.addr)?;
            task_ops::append_text(task, &args.text.join(" "));
            todo_io::save_tasks(&path, &list)?;
        }
        Commands::Replace(args) => {
            let task = task_ops::resolve_mut(&mut list, &args.addr)?;
            task_ops::replace_text(task, &args.text.join(" "));
            todo_io::save_tasks(&path, &list)?;
        }
        Commands::Del(args) => {
            task_ops::delete_task(&mut list, &args.addr)?;
            todo_io::save_tasks(&path, &list)?;
        }
        Commands::Done(args) => {
            let task = task_ops::resolve_mut(&mut list, &args.addr)?;
            task_ops::set_done(task);
            todo_io::save_tasks(&path, &list)?;
        }
        Commands::Pri(args) => {
            let priority = task_ops::parse_priority_arg(&args.priority)?;
            let task = task_ops::resolve_mut(&mut list, &args.addr)?;
            task_ops::set_priority(task, priority, args.recursive);
            todo_io::save_tasks(&path, &list)?;
        }
        Commands::Ls(args) => cmd_ls(&list, args, &config, cli.json)?,
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

fn cmd_ls(list: &TaskList, args: LsArgs, config: &Config, json: bool) -> Result<(), Box<dyn Error>> {
    let mut terms = args.terms;
    let mut priority_filter = None;
    let mut with_priority = false;

    match args.priority {
        None => {}
        Some(None) => with_priority = true,
        Some(Some(value)) => {
            with_priority = true;
            if value.chars().count() == 1 {
                priority_filter = Some(task_ops::parse_priority_arg(&value)?);
            } else {
                // A longer value was a search term, not a letter
                terms.insert(0, value);
            }
        }
    }
    if args.no_priority {
        with_priority = false;
    }

    let opts = ListOptions {
        show_all: !args.first_only,
        with_color: !args.no_color,
        with_done: !args.no_done,
        with_indent: !args.no_indent,
        with_number: !args.no_numbers,
        with_priority,
        priority_filter,
        terms,
    };

    let hits = query::run_query(list, &opts);

    if json {
        let items: Vec<output::TaskJson> = hits.iter().map(|t| output::task_to_json(t)).collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    let width = output::addr_width(list);
    for task in hits {
        println!("{}", output::render_line(task, &opts, width, &config.colors));
    }
    Ok(())
}
