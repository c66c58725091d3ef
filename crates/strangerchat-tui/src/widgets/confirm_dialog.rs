//! Confirmation dialog widget for quitting mid-chat

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Confirmation dialog widget
pub struct ConfirmDialog<'a> {
    peer_name: &'a str,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(peer_name: &'a str) -> Self {
        Self { peer_name }
    }

    /// Calculate centered modal rect
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = Self::centered_rect(50, 8, area);

        // Clear the area behind the modal
        Clear.render(modal_area, buf);

        let block = styles::modal_block(" Quit? ").title_alignment(Alignment::Center);
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Message
            Constraint::Length(1), // Warning
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(format!("You are chatting with {}.", self.peer_name))
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette::STATUS_YELLOW))
            .render(chunks[1], buf);

        Paragraph::new("Quitting ends the chat.")
            .alignment(Alignment::Center)
            .style(styles::text_primary())
            .render(chunks[2], buf);

        let buttons = Line::from(vec![
            Span::styled("[", styles::text_muted()),
            Span::styled(
                "y",
                Style::default()
                    .fg(palette::STATUS_GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("] Quit  ", styles::text_muted()),
            Span::styled("[", styles::text_muted()),
            Span::styled(
                "n",
                Style::default()
                    .fg(palette::STATUS_RED)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("] Keep chatting", styles::text_muted()),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[4], buf);
    }
}
