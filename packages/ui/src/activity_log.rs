//! In-app log of record changes and storage problems.
//!
//! Each entry is tagged with the record it concerns, when there is one, so the
//! panel can split the log into changes made to the list and failures to
//! persist it.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn is_problem(self) -> bool {
        matches!(self, LogLevel::Warning | LogLevel::Error)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub record_id: Option<u64>,
    pub message: String,
}

/// Which slice of the log the panel shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivityView {
    #[default]
    All,
    /// Successful adds, edits and deletes.
    Changes,
    /// Not-found records and failed writes.
    Problems,
}

impl ActivityView {
    pub const ALL: [ActivityView; 3] = [
        ActivityView::All,
        ActivityView::Changes,
        ActivityView::Problems,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityView::All => "All",
            ActivityView::Changes => "Changes",
            ActivityView::Problems => "Problems",
        }
    }

    pub fn matches(self, entry: &LogEntry) -> bool {
        match self {
            ActivityView::All => true,
            ActivityView::Changes => entry.level == LogLevel::Success && entry.record_id.is_some(),
            ActivityView::Problems => entry.level.is_problem(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
    pub view: ActivityView,
}

impl ActivityLog {
    /// Append an entry. A problem opens the panel on the problems view.
    pub fn push(&mut self, entry: LogEntry) {
        if entry.level.is_problem() {
            self.visible = true;
            self.view = ActivityView::Problems;
        }
        self.entries.push(entry);
    }

    pub fn has_problems(&self) -> bool {
        self.entries.iter().any(|e| e.level.is_problem())
    }

    pub fn count(&self, view: ActivityView) -> usize {
        self.entries.iter().filter(|e| view.matches(e)).count()
    }

    /// Entries in the current view, newest first.
    pub fn shown(&self) -> Vec<LogEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| self.view.matches(e))
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.view = ActivityView::All;
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

/// Append to the activity log and mirror the message to `tracing`.
pub fn log_activity(
    log: &mut Signal<ActivityLog>,
    level: LogLevel,
    record_id: Option<u64>,
    message: &str,
) {
    match level {
        LogLevel::Info | LogLevel::Success => tracing::info!(?record_id, "{message}"),
        LogLevel::Warning => tracing::warn!(?record_id, "{message}"),
        LogLevel::Error => tracing::error!(?record_id, "{message}"),
    }
    log.write().push(LogEntry {
        timestamp: current_time(),
        level,
        record_id,
        message: message.to_string(),
    });
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: LogLevel, record_id: Option<u64>, message: &str) -> LogEntry {
        LogEntry {
            timestamp: "12:00:00".to_string(),
            level,
            record_id,
            message: message.to_string(),
        }
    }

    fn sample() -> ActivityLog {
        let mut log = ActivityLog::default();
        log.push(entry(LogLevel::Success, Some(1), "Added record 1"));
        log.push(entry(LogLevel::Info, Some(2), "record 2 was already gone"));
        log.push(entry(LogLevel::Success, Some(1), "Updated record 1"));
        log
    }

    #[test]
    fn test_changes_view_keeps_successful_record_changes() {
        let mut log = sample();
        log.view = ActivityView::Changes;
        let messages: Vec<String> = log.shown().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["Updated record 1", "Added record 1"]);
        assert_eq!(log.count(ActivityView::All), 3);
        assert_eq!(log.count(ActivityView::Problems), 0);
    }

    #[test]
    fn test_success_only_stays_hidden() {
        let log = sample();
        assert!(!log.visible);
        assert!(!log.has_problems());
    }

    #[test]
    fn test_storage_failure_opens_problems_view() {
        let mut log = sample();
        log.push(entry(LogLevel::Error, None, "Could not add record: quota exceeded"));

        assert!(log.visible);
        assert_eq!(log.view, ActivityView::Problems);
        let shown = log.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].level, LogLevel::Error);
    }

    #[test]
    fn test_clear_resets_view() {
        let mut log = sample();
        log.push(entry(LogLevel::Warning, Some(9), "Could not save changes: no record with id 9"));
        log.clear();
        assert!(log.entries.is_empty());
        assert_eq!(log.view, ActivityView::All);
    }

    #[test]
    fn test_native_clock_format() {
        let time = current_time();
        assert_eq!(time.len(), 8);
        assert_eq!(time.as_bytes()[2], b':');
        assert_eq!(time.as_bytes()[5], b':');
    }
}
