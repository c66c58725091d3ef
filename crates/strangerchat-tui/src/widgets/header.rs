//! Header bar widget
//!
//! App title, connection status, peer name and the session countdown.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use strangerchat_app::session::Session;

use crate::theme::{palette, styles};

/// Main header showing app title, status and countdown
pub struct MainHeader<'a> {
    session: &'a Session,
}

impl<'a> MainHeader<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (icon, label, status_style) = styles::status_indicator(self.session.status);

        let mut left_spans = vec![
            Span::raw(" "),
            Span::styled(icon, status_style),
            Span::raw(" "),
            Span::styled("Stranger Chat", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(label, styles::text_secondary()),
        ];
        if let Some(peer) = &self.session.peer {
            left_spans.push(Span::styled(" · ", styles::text_muted()));
            left_spans.push(Span::styled(peer.name.clone(), styles::text_primary()));
            if peer.is_agent() {
                left_spans.push(Span::styled(" (AI)", styles::text_muted()));
            }
        }
        let left_line = Line::from(left_spans);
        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        // Countdown pill, right aligned
        if self.session.is_connected() {
            let pill = Line::from(Span::styled(
                format!(" ⏱ {} ", self.session.countdown_display()),
                styles::focused_selected(),
            ));
            let pill_width = pill.width() as u16;
            let left_width = left_line.width() as u16;
            if left_width + pill_width + 1 <= inner.width {
                let x = inner.x + inner.width - pill_width - 1;
                buf.set_line(x, inner.y, &pill, pill_width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use strangerchat_core::Peer;

    #[test]
    fn test_header_renders_title_and_idle_status() {
        let mut term = TestTerminal::new();
        let session = Session::new();

        term.render_widget(MainHeader::new(&session), term.area());

        assert!(term.buffer_contains("Stranger Chat"));
        assert!(term.buffer_contains("Idle"));
        assert!(!term.buffer_contains("⏱"));
    }

    #[test]
    fn test_header_shows_peer_and_countdown_when_connected() {
        let mut term = TestTerminal::new();
        let mut session = Session::new();
        session.begin_search(300);
        session.connect(Peer::human("user3", "Jordan"));
        session.remaining_secs = 125;

        term.render_widget(MainHeader::new(&session), term.area());

        assert!(term.buffer_contains("Connected"));
        assert!(term.buffer_contains("Jordan"));
        assert!(term.buffer_contains("2:05"));
    }

    #[test]
    fn test_header_marks_agent_peer() {
        let mut term = TestTerminal::new();
        let mut session = Session::new();
        session.begin_search(300);
        session.connect(Peer::agent("ai1", "AI Companion"));

        term.render_widget(MainHeader::new(&session), term.area());

        assert!(term.buffer_contains("(AI)"));
    }
}
