#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use std::time::Duration;

/// Maximum number of status messages retained; older entries are evicted.
pub const STATUS_LOG_CAPACITY: usize = 5;

/// Cadence of the backend liveness poll.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Severity of a status message, used for per-row styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "status-box__message--info",
            Self::Success => "status-box__message--success",
            Self::Warning => "status-box__message--warning",
            Self::Error => "status-box__message--error",
        }
    }
}

/// A single entry in the status log.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    /// Monotonically increasing, unique within the process.
    pub id: u64,
    pub text: String,
    pub severity: Severity,
    /// Milliseconds since the Unix epoch; `0.0` outside the browser.
    pub created_at: f64,
}

/// Current backend liveness as reported by the most recent poll tick.
///
/// Overwritten on every tick; no history is kept beyond the message log.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LivenessStatus {
    /// No poll has completed yet.
    #[default]
    Checking,
    /// The backend answered with a status string.
    Reported(String),
    /// The poll request failed or returned an unusable body.
    Unreachable,
}

impl LivenessStatus {
    pub fn label(&self) -> &str {
        match self {
            Self::Checking => "Checking...",
            Self::Reported(status) => status,
            Self::Unreachable => "Error",
        }
    }

    /// Whether the backend reported itself healthy.
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Reported(status) if status == "healthy")
    }
}

/// Bounded, newest-first log of recent notifications plus the current
/// liveness indicator.
///
/// Widgets receive this as an `RwSignal<StatusLogState>` context rather
/// than reporting into an ambient global.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusLogState {
    messages: Vec<StatusMessage>,
    next_id: u64,
    liveness: LivenessStatus,
}

impl StatusLogState {
    /// Prepend a message and evict anything beyond the capacity.
    /// Returns the id assigned to the new entry.
    pub fn report(&mut self, text: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        self.messages.insert(
            0,
            StatusMessage {
                id: self.next_id,
                text: text.into(),
                severity,
                created_at: now_ms(),
            },
        );
        self.messages.truncate(STATUS_LOG_CAPACITY);
        self.next_id
    }

    /// Drop all retained messages. The liveness indicator is unaffected.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Record the outcome of one liveness poll tick.
    ///
    /// Routine poll results never append to the message log; only the
    /// current-status indicator is overwritten.
    pub fn apply_poll(&mut self, result: Option<String>) {
        self.liveness = match result {
            Some(status) => LivenessStatus::Reported(status),
            None => LivenessStatus::Unreachable,
        };
    }

    /// Retained messages, newest first.
    pub fn messages(&self) -> &[StatusMessage] {
        &self.messages
    }

    pub fn liveness(&self) -> &LivenessStatus {
        &self.liveness
    }
}

fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
