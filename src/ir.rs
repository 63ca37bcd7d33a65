//! Session command representation.
//!
//! The parser turns each input line into a `Command`; the session controller
//! consumes it. Values stay as raw text here because each applet decides how
//! its own keys are parsed (sequence, integer, engineering value, pair).

/// One line of session input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `key = value`: edit an input.
    Set { key: String, value: String },
    /// `toggle <what>`: flip a visibility switch.
    Toggle(String),
    /// Restore default inputs.
    Reset,
    /// Re-render without changing inputs.
    Show,
    /// Write the current figure to disk.
    Save,
    /// List editable keys.
    Help,
    /// End the session.
    Quit,
}

impl Command {
    /// Whether handling this command changes applet inputs.
    pub fn is_edit(&self) -> bool {
        matches!(self, Command::Set { .. } | Command::Toggle(_) | Command::Reset)
    }
}
