//! Filter, selection and expansion handlers for the event log

use psmon_core::{CategoryFilter, LevelFilter};

use crate::state::AppState;

use super::{poll::reconcile_selection, UpdateResult};

// ─────────────────────────────────────────────────────────────────────────────
// Filters
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_set_category_filter(state: &mut AppState, category: CategoryFilter) -> UpdateResult {
    state.filter.category = category;
    after_filter_change(state);
    UpdateResult::none()
}

pub fn handle_set_level_filter(state: &mut AppState, level: LevelFilter) -> UpdateResult {
    state.filter.level = level;
    after_filter_change(state);
    UpdateResult::none()
}

pub fn handle_reset_filters(state: &mut AppState) -> UpdateResult {
    state.filter.reset();
    after_filter_change(state);
    UpdateResult::none()
}

fn after_filter_change(state: &mut AppState) {
    reconcile_selection(state);
    if state.log_view_state.auto_scroll {
        state.log_view_state.on_content_replaced();
    } else {
        state.log_view_state.request_reveal();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Selection
// ─────────────────────────────────────────────────────────────────────────────

fn select_visible(state: &mut AppState, index: usize) {
    state.selected = state.visible_events().get(index).map(|e| e.key());
    state.log_view_state.request_reveal();
}

pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    let len = state.visible_events().len();
    if len == 0 {
        return UpdateResult::none();
    }
    let index = match state.selected_visible_index() {
        Some(i) => i.saturating_sub(1),
        None => len - 1,
    };
    state.log_view_state.set_auto_scroll(false);
    select_visible(state, index);
    UpdateResult::none()
}

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    let len = state.visible_events().len();
    if len == 0 {
        return UpdateResult::none();
    }
    let index = match state.selected_visible_index() {
        Some(i) => (i + 1).min(len - 1),
        None => 0,
    };
    // Moving off the last row stops following; landing on it does not resume.
    if index + 1 < len {
        state.log_view_state.set_auto_scroll(false);
    }
    select_visible(state, index);
    UpdateResult::none()
}

pub fn handle_select_first(state: &mut AppState) -> UpdateResult {
    state.log_view_state.scroll_to_top();
    select_visible(state, 0);
    UpdateResult::none()
}

/// Jump to the newest row and resume following.
pub fn handle_select_last(state: &mut AppState) -> UpdateResult {
    let len = state.visible_events().len();
    state.log_view_state.scroll_to_bottom();
    if len > 0 {
        select_visible(state, len - 1);
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Expansion
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_toggle_expand(state: &mut AppState) -> UpdateResult {
    let Some(key) = state.selected else {
        return UpdateResult::none();
    };
    if let Some(event) = state.events.iter().find(|e| e.key() == key) {
        if state.collapse.toggle(event) {
            state.log_view_state.request_reveal();
        }
    }
    UpdateResult::none()
}

pub fn handle_collapse_all(state: &mut AppState) -> UpdateResult {
    state.collapse.collapse_all();
    UpdateResult::none()
}
