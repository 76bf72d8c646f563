//! psmon-tui - Terminal UI for the privacy suite monitor
//!
//! Creates an [`psmon_app::Engine`] and adds the ratatui dashboard: rendering,
//! terminal input and widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
