//! Chat transcript widget
//!
//! Renders the transcript bottom-anchored: when the messages do not fit,
//! the oldest wrapped lines scroll off the top. Idle and searching states
//! get a centered placeholder instead.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use strangerchat_app::session::Session;
use strangerchat_core::{ChatMessage, ConnectionStatus, Sender};

use crate::theme::{palette, styles};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Label for peer lines once the session is over
const FORMER_PEER: &str = "Stranger";

pub struct Transcript<'a> {
    session: &'a Session,
    spinner_frame: usize,
}

impl<'a> Transcript<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            spinner_frame: 0,
        }
    }

    pub fn spinner_frame(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    fn sender_label(&self, message: &ChatMessage) -> (String, Style) {
        match message.sender {
            Sender::Me => (
                "You".to_string(),
                Style::default()
                    .fg(palette::MESSAGE_ME)
                    .add_modifier(Modifier::BOLD),
            ),
            Sender::Peer => {
                let color = if self.session.peer_is_agent() {
                    palette::MESSAGE_AGENT
                } else {
                    palette::MESSAGE_PEER
                };
                let name = match &self.session.peer {
                    Some(peer) => peer.name.clone(),
                    None => FORMER_PEER.to_string(),
                };
                (name, Style::default().fg(color).add_modifier(Modifier::BOLD))
            }
        }
    }

    /// Wrap every message to `width`, continuation lines indented under the text
    fn message_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for message in &self.session.transcript {
            let (name, name_style) = self.sender_label(message);
            let prefix_width = message.time.width() + 1 + name.width() + 2;
            let text_width = width.saturating_sub(prefix_width).max(8);

            for (i, chunk) in wrap_text(&message.text, text_width).into_iter().enumerate() {
                if i == 0 {
                    lines.push(Line::from(vec![
                        Span::styled(message.time.clone(), styles::text_muted()),
                        Span::raw(" "),
                        Span::styled(name.clone(), name_style),
                        Span::styled(": ", styles::text_muted()),
                        Span::styled(chunk, styles::text_primary()),
                    ]));
                } else {
                    lines.push(Line::from(vec![
                        Span::raw(" ".repeat(prefix_width)),
                        Span::styled(chunk, styles::text_primary()),
                    ]));
                }
            }
        }
        lines
    }

    fn placeholder(&self) -> Option<Line<'static>> {
        match self.session.status {
            ConnectionStatus::Searching => {
                let frame = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
                Some(Line::from(vec![
                    Span::styled(frame, styles::keybinding()),
                    Span::styled(" Looking for a stranger...", styles::text_secondary()),
                ]))
            }
            ConnectionStatus::Idle if self.session.transcript.is_empty() => Some(Line::from(vec![
                Span::styled("Press ", styles::text_muted()),
                Span::styled("Enter", styles::keybinding()),
                Span::styled(" to meet a stranger", styles::text_muted()),
            ])),
            _ => None,
        }
    }
}

impl Widget for Transcript<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.session.is_connected())
            .title(" Chat ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if let Some(line) = self.placeholder() {
            let y = inner.y + inner.height / 2;
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .render(Rect::new(inner.x, y, inner.width, 1), buf);
            return;
        }

        let mut lines = self.message_lines(inner.width as usize);
        if self.session.is_idle() {
            lines.push(Line::from(Span::styled(
                "Session ended. Press Enter to find someone new.",
                styles::text_muted(),
            )));
        }

        // Keep the newest lines visible
        let visible = inner.height as usize;
        let skip = lines.len().saturating_sub(visible);
        for (row, line) in lines.iter().skip(skip).enumerate() {
            buf.set_line(inner.x, inner.y + row as u16, line, inner.width);
        }
    }
}

/// Word-wrap `text` to `width` display columns, splitting words that are
/// wider than a whole line
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for c in word.chars() {
            let char_width = c.width().unwrap_or(0);
            if current_width > 0 && current_width + char_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(c);
            current_width += char_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use strangerchat_core::Peer;

    /// Message with a fixed time label
    fn at_noon(sender: Sender, text: &str) -> ChatMessage {
        ChatMessage {
            text: text.to_string(),
            sender,
            time: "12:00".to_string(),
        }
    }

    fn connected_session() -> Session {
        let mut session = Session::new();
        session.begin_search(300);
        session.connect(Peer::human("user2", "Taylor"));
        session
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        assert_eq!(wrap_text("hello there world", 11), vec!["hello there", "world"]);
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_idle_placeholder() {
        let mut term = TestTerminal::new();
        let session = Session::new();

        term.render_widget(Transcript::new(&session), term.area());

        assert!(term.buffer_contains("to meet a stranger"));
    }

    #[test]
    fn test_searching_placeholder() {
        let mut term = TestTerminal::new();
        let mut session = Session::new();
        session.begin_search(300);

        term.render_widget(Transcript::new(&session).spinner_frame(3), term.area());

        assert!(term.buffer_contains("Looking for a stranger"));
        assert!(term.buffer_contains("⠸"));
    }

    #[test]
    fn test_messages_render_with_sender_labels() {
        let mut term = TestTerminal::new();
        let mut session = connected_session();
        session.push_message(at_noon(Sender::Peer, "Hi there! I'm Taylor."));
        session.push_message(at_noon(Sender::Me, "hey"));

        term.render_widget(Transcript::new(&session), term.area());

        assert!(term.buffer_contains("12:00 Taylor: Hi there! I'm Taylor."));
        assert!(term.buffer_contains("12:00 You: hey"));
    }

    #[test]
    fn test_newest_messages_stay_visible() {
        let mut term = TestTerminal::with_size(40, 6);
        let mut session = connected_session();
        for i in 0..20 {
            session.push_message(at_noon(Sender::Me, &format!("message {}", i)));
        }

        term.render_widget(Transcript::new(&session), term.area());

        assert!(term.buffer_contains("message 19"));
        assert!(!term.buffer_contains("message 0 "));
    }

    #[test]
    fn test_ended_session_keeps_transcript() {
        let mut term = TestTerminal::new();
        let mut session = connected_session();
        session.push_message(at_noon(Sender::Peer, "bye"));
        session.teardown();

        term.render_widget(Transcript::new(&session), term.area());

        assert!(term.buffer_contains("Stranger: bye"));
        assert!(term.buffer_contains("Session ended"));
    }
}
