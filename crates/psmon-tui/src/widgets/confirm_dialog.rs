//! Shutdown confirmation dialog

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::styles;

use super::modal;

const DIALOG_WIDTH: u16 = 46;
const DIALOG_HEIGHT: u16 = 8;

/// Asks whether to stop the privacy proxy.
///
/// Draws over the whole frame: the background is dimmed and the dialog
/// centered with a drop shadow.
pub struct ShutdownDialog;

impl Widget for ShutdownDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal::dim_background(buf, area);

        let dialog = modal::centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        Clear.render(dialog, buf);
        modal::render_shadow(buf, dialog);

        let block = styles::modal_block(" Shutdown ").title_alignment(Alignment::Center);
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        let rows = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Question
            Constraint::Length(1), // Consequence
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new("Stop the privacy proxy?")
            .alignment(Alignment::Center)
            .style(styles::status_yellow().add_modifier(Modifier::BOLD))
            .render(rows[1], buf);

        Paragraph::new("Protection ends until it is restarted.")
            .alignment(Alignment::Center)
            .style(styles::text_primary())
            .render(rows[2], buf);

        let buttons = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled("y", styles::status_green().add_modifier(Modifier::BOLD)),
            Span::styled("] Yes  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled("n", styles::status_red().add_modifier(Modifier::BOLD)),
            Span::styled("] No", styles::text_muted()),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(rows[4], buf);
    }
}
