//! This crate contains all shared UI for the workspace.

pub mod views;

mod repo;
pub use repo::{load_settings, make_gate, make_manager, AppGate, AppManager, PlatformJar, PlatformStore, Settings};

mod session;
pub use session::{alert, use_gate, use_session, use_settings, SessionProvider};

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, ActivityView, LogEntry, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod login_form;
pub use login_form::LoginForm;

mod add_record_dialog;
pub use add_record_dialog::AddRecordDialog;

mod filter_bar;
pub use filter_bar::FilterBar;

mod table_pagination;
pub use table_pagination::TablePagination;

mod record_table;
pub use record_table::RecordTable;
