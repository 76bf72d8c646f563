//! Scrollable event log with expandable detail rows

use psmon_app::collapse::CollapseState;
use psmon_app::log_view_state::LogViewState;
use psmon_core::{Event, EventDetails, EventKey, FilterState};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

use crate::theme::{palette, styles as theme};

/// Row and detail styling constants
pub mod styles;

#[cfg(test)]
mod tests;

/// Event log widget.
///
/// Takes the already-filtered events; `total` is the unfiltered count so the
/// widget can tell "nothing yet" apart from "nothing matches".
pub struct EventLog<'a> {
    events: &'a [&'a Event],
    total: usize,
    filter: FilterState,
    collapse: &'a CollapseState,
    selected: Option<EventKey>,
    title: &'a str,
}

impl<'a> EventLog<'a> {
    pub fn new(events: &'a [&'a Event], total: usize, collapse: &'a CollapseState) -> Self {
        Self {
            events,
            total,
            filter: FilterState::default(),
            collapse,
            selected: None,
            title: "Events",
        }
    }

    pub fn filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    pub fn selected(mut self, key: Option<EventKey>) -> Self {
        self.selected = key;
        self
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    fn is_expanded(&self, event: &Event) -> bool {
        event.has_details() && self.collapse.is_expanded(event.key())
    }

    /// Title with filter indicators and the visible/total count
    fn build_title(&self) -> String {
        let mut indicators = Vec::new();
        if self.filter.is_active() {
            if self.filter.category != FilterState::default().category {
                indicators.push(self.filter.category.display_name());
            }
            if self.filter.level != FilterState::default().level {
                indicators.push(self.filter.level.display_name());
            }
        }

        let count = if self.events.len() == self.total {
            format!("{}", self.total)
        } else {
            format!("{} of {}", self.events.len(), self.total)
        };

        if indicators.is_empty() {
            format!(" {} ({}) ", self.title, count)
        } else {
            format!(" {} [{}] ({}) ", self.title, indicators.join(" | "), count)
        }
    }

    fn format_row(&self, event: &Event) -> Line<'static> {
        let (icon_style, message_style) = theme::level_styles(event.level);
        let marker = match (event.has_details(), self.is_expanded(event)) {
            (false, _) => " ",
            (true, false) => styles::MARKER_COLLAPSED,
            (true, true) => styles::MARKER_EXPANDED,
        };

        let spans = vec![
            Span::styled(marker, styles::EXPAND_MARKER),
            Span::raw(" "),
            Span::styled(event.timestamp.clone(), styles::TIMESTAMP),
            Span::raw(" "),
            Span::styled(theme::level_icon(event.level), icon_style),
            Span::raw(" "),
            Span::styled(
                format!("[{}]", event.category.as_str()),
                theme::category_style(event.category),
            ),
            Span::raw(" "),
            Span::styled(event.message.clone(), message_style),
        ];

        if self.selected == Some(event.key()) {
            let selected = theme::focused_selected();
            Line::from(
                spans
                    .into_iter()
                    .map(|s| s.style(selected))
                    .collect::<Vec<_>>(),
            )
            .style(selected)
        } else {
            Line::from(spans)
        }
    }

    /// Label/value lines shown under an expanded row
    fn detail_lines(details: &EventDetails) -> Vec<Line<'static>> {
        details
            .fields()
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::raw(styles::INDENT),
                    Span::styled("│ ", styles::DETAIL_GUIDE),
                    Span::styled(format!("{label}: "), styles::DETAIL_LABEL),
                    Span::styled(value, styles::DETAIL_VALUE),
                ])
            })
            .collect()
    }

    /// Every line of the log in order, plus the `[start, end)` line span of
    /// the selected row.
    fn build_lines(&self) -> (Vec<Line<'static>>, Option<(usize, usize)>) {
        let mut lines = Vec::new();
        let mut selected_span = None;

        for event in self.events {
            let start = lines.len();
            lines.push(self.format_row(event));
            if self.is_expanded(event) {
                if let Some(details) = &event.details {
                    lines.extend(Self::detail_lines(details));
                }
            }
            if self.selected == Some(event.key()) {
                selected_span = Some((start, lines.len()));
            }
        }
        (lines, selected_span)
    }

    /// Centered placeholder for the empty and no-match states
    fn render_placeholder(&self, area: Rect, buf: &mut Buffer, message: Vec<Line<'static>>) {
        let block = theme::glass_block(false).title(self.build_title());
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(message)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        self.render_placeholder(
            area,
            buf,
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No events yet",
                    theme::text_muted().add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Events appear here as the proxy reports them",
                    theme::text_muted(),
                )),
            ],
        );
    }

    fn render_no_matches(&self, area: Rect, buf: &mut Buffer) {
        self.render_placeholder(
            area,
            buf,
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No events match current filter",
                    theme::status_yellow().add_modifier(Modifier::ITALIC),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press r to reset filters",
                    theme::text_muted(),
                )),
            ],
        );
    }
}

impl<'a> StatefulWidget for EventLog<'a> {
    type State = LogViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if self.total == 0 {
            state.update_content_size(0, 0, None);
            self.render_empty(area, buf);
            return;
        }
        if self.events.is_empty() {
            state.update_content_size(0, 0, None);
            self.render_no_matches(area, buf);
            return;
        }

        let block = theme::glass_block(true).title(self.build_title());
        let inner = block.inner(area);
        block.render(area, buf);

        let (lines, selected_span) = self.build_lines();
        let total_lines = lines.len();
        let visible_lines = inner.height as usize;

        // Applies pending follow/reveal, so offset is final after this
        state.update_content_size(total_lines, visible_lines, selected_span);

        let window: Vec<Line> = lines
            .into_iter()
            .skip(state.offset)
            .take(visible_lines)
            .collect();
        Paragraph::new(window).render(inner, buf);

        if total_lines > visible_lines {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(palette::BORDER_DIM));

            let mut scrollbar_state = ScrollbarState::new(total_lines).position(state.offset);
            scrollbar.render(area, buf, &mut scrollbar_state);
        }
    }
}
