//! Status bar widget
//!
//! Keybinding hints for the current status and how many strangers are free.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use strangerchat_app::state::AppState;
use strangerchat_core::ConnectionStatus;

use crate::theme::styles;

/// Status bar widget showing keybindings for the current state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn bindings(&self) -> Vec<(&'static str, &'static str)> {
        let session = &self.state.session;
        match session.status {
            ConnectionStatus::Idle => vec![("Enter", "Find stranger"), ("q", "Quit")],
            ConnectionStatus::Searching => vec![("Esc", "Cancel"), ("q", "Quit")],
            ConnectionStatus::Connected => {
                let call = if session.call.is_outgoing() {
                    ("^V", "Cancel call")
                } else {
                    ("^V", "Call")
                };
                vec![
                    ("Enter", "Send"),
                    call,
                    ("^N", "Next"),
                    ("Esc", "Leave"),
                    ("^Q", "Quit"),
                ]
            }
        }
    }

    fn availability(&self) -> Span<'static> {
        let total = self.state.pool.entries().len();
        let free = total - self.state.pool.unavailable_count();
        Span::styled(format!("{}/{} strangers free ", free, total), styles::text_muted())
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.bindings() {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key, styles::keybinding()));
            spans.push(Span::styled(format!("] {}  ", label), styles::text_muted()));
        }
        let hints = Line::from(spans);
        buf.set_line(area.x, area.y, &hints, area.width);

        let right = Line::from(self.availability());
        let right_width = right.width() as u16;
        if hints.width() as u16 + right_width <= area.width {
            let x = area.x + area.width - right_width;
            buf.set_line(x, area.y, &right, right_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use strangerchat_core::{CallOrigin, CallState, Peer};

    fn render(state: &AppState) -> TestTerminal {
        let mut term = TestTerminal::with_size(100, 1);
        term.render_widget(StatusBar::new(state), term.area());
        term
    }

    #[test]
    fn test_idle_hints() {
        let state = AppState::new();
        let term = render(&state);
        assert!(term.buffer_contains("Find stranger"));
        assert!(term.buffer_contains("4/4 strangers free"));
    }

    #[test]
    fn test_connected_hints() {
        let mut state = AppState::new();
        state.session.begin_search(300);
        state.pool.claim("user1");
        state.session.connect(Peer::human("user1", "Alex"));

        let term = render(&state);
        assert!(term.buffer_contains("Send"));
        assert!(term.buffer_contains("] Call"));
        assert!(term.buffer_contains("3/4 strangers free"));
    }

    #[test]
    fn test_outgoing_call_hint() {
        let mut state = AppState::new();
        state.session.begin_search(300);
        state.session.connect(Peer::human("user1", "Alex"));
        state.session.call = CallState::Requested { by: CallOrigin::Me };

        let term = render(&state);
        assert!(term.buffer_contains("Cancel call"));
    }
}
