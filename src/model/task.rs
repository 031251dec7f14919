/// A single todo entry with its subtasks.
#[derive(Debug, Clone)]
pub struct Task {
    /// Completion date as `YYYY-MM-DD`; present iff the task is done.
    /// Stored as written — the codec never rejects an odd-looking date.
    pub done: Option<String>,
    /// Priority letter `A`–`Z` (always stored uppercase)
    pub priority: Option<char>,
    /// Free-form task text, trimmed of surrounding whitespace
    pub text: String,
    /// Leading-space count from the source line; drives nesting on load and
    /// is re-emitted verbatim on save
    pub depth: usize,
    /// Subtasks in append order. Order is semantically significant: it
    /// defines addressing and render order.
    pub subtasks: Vec<Task>,
    /// Dotted-decimal address like `2.1.3`. A view, not data: recomputed on
    /// every load and after every structural mutation, never persisted.
    pub addr: String,
}

impl Task {
    /// Create a bare task with the given text, not yet placed in a list
    pub fn new(text: String) -> Self {
        Task {
            done: None,
            priority: None,
            text,
            depth: 0,
            subtasks: Vec::new(),
            addr: String::new(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.done.is_some()
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        // addr is transient and excluded on purpose
        self.done == other.done
            && self.priority == other.priority
            && self.text == other.text
            && self.depth == other.depth
            && self.subtasks == other.subtasks
    }
}

impl Eq for Task {}
