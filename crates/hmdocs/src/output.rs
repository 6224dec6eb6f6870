//! Styled terminal output for command progress and results.
//!
//! Everything goes to stderr so `hmdocs render` and `hmdocs nav` can keep
//! stdout for their payload.

use console::{Style, Term};

pub(crate) struct Output {
    term: Term,
    success: Style,
    warning: Style,
    error: Style,
    action: Style,
    hint: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            action: Style::new().cyan(),
            hint: Style::new().dim(),
        }
    }

    pub(crate) fn info(&self, msg: &str) {
        self.line(msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(&self.success.apply_to(msg).to_string());
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.line(&self.warning.apply_to(msg).to_string());
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(&self.error.apply_to(msg).to_string());
    }

    /// One indented line per processed item, e.g. `   Removed de-DE`.
    pub(crate) fn step(&self, action: &str, subject: &str) {
        self.line(&format!("   {} {subject}", self.action.apply_to(action)));
    }

    /// Follow-up advice shown after a command finishes.
    pub(crate) fn hint(&self, msg: &str) {
        self.line(&self.hint.apply_to(msg).to_string());
    }

    fn line(&self, msg: &str) {
        // Terminal write failures are not worth failing a command over.
        let _ = self.term.write_line(msg);
    }
}
