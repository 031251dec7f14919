use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tl",
    about = "a hierarchical todo list that lives in a plain text file",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use a different todo file
    #[arg(short = 'f', long = "file", global = true, value_name = "PATH")]
    pub file: Option<String>,

    /// Output as JSON (listing only)
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new top-level task
    Add(AddArgs),
    /// Add a subtask under an existing task
    Addsub(AddsubArgs),
    /// Append text to the end of a task
    Append(EditArgs),
    /// Replace a task's text
    Replace(EditArgs),
    /// Delete a task and all of its subtasks
    #[command(alias = "rm")]
    Del(AddrArgs),
    /// Mark a task done, along with its unfinished subtasks
    #[command(alias = "do")]
    Done(AddrArgs),
    /// Set a task's priority
    Pri(PriArgs),
    /// List tasks
    #[command(alias = "list")]
    Ls(LsArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text (words are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct AddsubArgs {
    /// Parent task address, e.g. 2 or 3.1
    pub addr: String,
    /// Subtask text
    #[arg(required = true)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task address
    pub addr: String,
    /// Text
    #[arg(required = true)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct AddrArgs {
    /// Task address
    pub addr: String,
}

#[derive(Args)]
pub struct PriArgs {
    /// Also set the priority on every subtask, recursively
    #[arg(short = 'R')]
    pub recursive: bool,
    /// Task address
    pub addr: String,
    /// Priority letter A-Z
    pub priority: String,
}

#[derive(Args)]
pub struct LsArgs {
    /// Show all subtasks [default]
    #[arg(short = 'a')]
    pub all: bool,
    /// Show only the first subtask at each level
    #[arg(short = 'A')]
    pub first_only: bool,
    /// Color output by priority [default]
    #[arg(short = 'c')]
    pub color: bool,
    /// No color
    #[arg(short = 'C')]
    pub no_color: bool,
    /// Include done tasks [default]
    #[arg(short = 'd')]
    pub done: bool,
    /// Hide done tasks
    #[arg(short = 'D')]
    pub no_done: bool,
    /// Indent subtasks [default]
    #[arg(short = 'i')]
    pub indent: bool,
    /// No indentation
    #[arg(short = 'I')]
    pub no_indent: bool,
    /// Prepend task numbers [default]
    #[arg(short = 'n')]
    pub numbers: bool,
    /// No task numbers
    #[arg(short = 'N')]
    pub no_numbers: bool,
    /// Show the priority column, optionally filtering to one letter
    #[arg(short = 'p', value_name = "LETTER", num_args = 0..=1)]
    pub priority: Option<Option<String>>,
    /// Hide the priority column [default]
    #[arg(short = 'P')]
    pub no_priority: bool,
    /// Search terms; only tasks containing every term are listed
    pub terms: Vec<String>,
}
