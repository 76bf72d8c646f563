//! Custom widget components

mod confirm_dialog;
mod header;
mod log_view;
pub mod modal;
mod status_bar;

pub use confirm_dialog::ShutdownDialog;
pub use header::DashboardHeader;
pub use log_view::EventLog;
pub use status_bar::StatusBar;
