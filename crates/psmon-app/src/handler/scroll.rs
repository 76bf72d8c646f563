//! Scroll message handlers
//!
//! Handles paging and the auto-scroll preference of the event log.

use crate::state::AppState;

use super::UpdateResult;

/// Flip auto-scroll. Turning it on does not move the viewport; the next
/// event-list replacement does.
pub fn handle_toggle_auto_scroll(state: &mut AppState) -> UpdateResult {
    let enabled = !state.log_view_state.auto_scroll;
    state.log_view_state.set_auto_scroll(enabled);
    UpdateResult::none()
}

/// Handle page up message
pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.log_view_state.page_up();
    UpdateResult::none()
}

/// Handle page down message
pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.log_view_state.page_down();
    UpdateResult::none()
}
