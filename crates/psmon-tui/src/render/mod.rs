//! Main render/view function (View in TEA pattern)


use psmon_app::state::{AppState, UiMode};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::palette;
use crate::widgets::{DashboardHeader, EventLog, ShutdownDialog, StatusBar};

/// Render the complete UI (View in TEA)
///
/// Only the log view state is written: the widget records the rendered line
/// counts and resolves pending follow or reveal requests into an offset.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    let header = DashboardHeader::new(
        state.snapshot.as_ref(),
        &state.connection,
        &state.kill_switch,
        &state.exit_country,
        &state.health,
    );
    frame.render_widget(header, areas.header);

    let visible = psmon_core::visible(&state.events, state.filter.category, state.filter.level);
    let event_log = EventLog::new(&visible, state.events.len(), &state.collapse)
        .filter(state.filter)
        .selected(state.selected);
    frame.render_stateful_widget(event_log, areas.events, &mut state.log_view_state);

    frame.render_widget(StatusBar::new(state), areas.status);

    if state.ui_mode == UiMode::ConfirmShutdown {
        frame.render_widget(ShutdownDialog, area);
    }
}
