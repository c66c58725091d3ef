//! Video call negotiation banner

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use strangerchat_core::{CallOrigin, CallState};

use crate::theme::{palette, styles};

pub struct CallBanner<'a> {
    call: CallState,
    peer_name: &'a str,
}

impl<'a> CallBanner<'a> {
    pub fn new(call: CallState, peer_name: &'a str) -> Self {
        Self { call, peer_name }
    }

    fn hint(key: &'static str, label: &'static str) -> [Span<'static>; 3] {
        [
            Span::styled(format!("  [{}", key), styles::text_muted()),
            Span::styled("] ", styles::text_muted()),
            Span::styled(label, styles::keybinding()),
        ]
    }

    fn content(&self) -> Line<'static> {
        let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
        let mut spans = Vec::new();
        match self.call {
            CallState::Idle => {}
            CallState::Requested {
                by: CallOrigin::Me,
            } => {
                spans.push(Span::styled(
                    format!("☎ Calling {}...", self.peer_name),
                    bold(palette::STATUS_YELLOW),
                ));
                spans.extend(Self::hint("Ctrl+V", "Cancel"));
            }
            CallState::Requested {
                by: CallOrigin::Peer,
            } => {
                spans.push(Span::styled(
                    format!("☎ {} wants to video chat", self.peer_name),
                    bold(palette::STATUS_YELLOW),
                ));
                spans.extend(Self::hint("Ctrl+A", "Accept"));
                spans.extend(Self::hint("Ctrl+R", "Decline"));
            }
            CallState::Active => {
                spans.push(Span::styled(
                    format!("● On a video call with {}", self.peer_name),
                    bold(palette::STATUS_GREEN),
                ));
                spans.extend(Self::hint("Ctrl+E", "Hang up"));
            }
        }
        Line::from(spans)
    }
}

impl Widget for CallBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || self.call.is_idle() {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::call_style(self.call))
            .title(" Video call ");
        Paragraph::new(self.content()).block(block).render(area, buf);
    }
}
