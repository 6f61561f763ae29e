//! Plain UI state read by the egui renderer.

use crate::prediction::ResultDisplay;

/// Number of status messages kept for the footer tooltip.
pub const STATUS_LOG_LIMIT: usize = 50;

/// Severity of a status message; drives the badge color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBarState {
    pub text: String,
    pub tone: StatusTone,
    /// Rolling status log entries, oldest first.
    pub log: Vec<String>,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self {
            text: "Waiting for features".into(),
            tone: StatusTone::Idle,
            log: Vec::new(),
        }
    }

    pub fn set(&mut self, text: String, tone: StatusTone) {
        self.log.push(text.clone());
        if self.log.len() > STATUS_LOG_LIMIT {
            let excess = self.log.len() - STATUS_LOG_LIMIT;
            self.log.drain(..excess);
        }
        self.text = text;
        self.tone = tone;
    }

    /// Concatenate log entries into a single displayable string.
    pub fn log_text(&self) -> String {
        self.log.join("\n")
    }
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self::idle()
    }
}

/// Everything the view shows that is not part of the form itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// The `prob`/`pred-default`/`pred-thr`/`thr` fields.
    pub results: ResultDisplay,
    /// Pending blocking alert text.
    pub alert: Option<String>,
    pub status: StatusBarState,
    /// Editable copy of the server URL in the top bar.
    pub server_url_input: String,
}
