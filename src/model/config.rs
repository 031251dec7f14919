use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from `~/.todo/config.toml`. Every field is optional; a
/// missing file means all defaults. The core never reads process-wide state —
/// this struct is loaded once and passed in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Path to the todo file (default: `~/.todo/todo.txt`)
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Priority color overrides: letter → color name, e.g. `A = "yellow"`.
    /// See `cli::output` for the recognized color names.
    #[serde(default)]
    pub colors: HashMap<String, String>,
}
