use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::config::Config;
use crate::model::list::TaskList;
use crate::parse::serialize_list;

/// Error type for todo file I/O
#[derive(Debug, thiserror::Error)]
pub enum TodoIoError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ConfigParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not locate a home directory")]
    NoHomeDir,
}

/// The per-user todo directory, `~/.todo/`.
pub fn todo_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".todo"))
}

/// Resolve the todo file path: CLI override first, then the configured
/// path, then `~/.todo/todo.txt`.
pub fn todo_file_path(config: &Config, cli_override: Option<&str>) -> Result<PathBuf, TodoIoError> {
    if let Some(path) = cli_override {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = &config.file {
        return Ok(path.clone());
    }
    todo_dir()
        .map(|dir| dir.join("todo.txt"))
        .ok_or(TodoIoError::NoHomeDir)
}

/// Read the config from `~/.todo/config.toml`. A missing file (or a missing
/// home directory) is not an error — it just means all defaults.
pub fn load_config() -> Result<Config, TodoIoError> {
    let Some(path) = todo_dir().map(|dir| dir.join("config.toml")) else {
        return Ok(Config::default());
    };
    if !path.is_file() {
        return Ok(Config::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| TodoIoError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| TodoIoError::ConfigParseError { path, source: e })
}

/// Load the todo file into a task forest. A nonexistent file is an empty
/// list, not an error.
pub fn load_tasks(path: &Path) -> Result<TaskList, TodoIoError> {
    if !path.is_file() {
        return Ok(TaskList::default());
    }
    let text = fs::read_to_string(path).map_err(|e| TodoIoError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(TaskList::from_lines(text.lines()))
}

/// Serialize the forest and replace the todo file via temp file + rename,
/// so a failed write can't leave a truncated file behind.
pub fn save_tasks(path: &Path, list: &TaskList) -> Result<(), TodoIoError> {
    let content = serialize_list(list);
    atomic_write(path, content.as_bytes()).map_err(|e| TodoIoError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
