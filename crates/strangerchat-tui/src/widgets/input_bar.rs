//! Message compose box

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{palette, styles};

pub struct InputBar<'a> {
    input: &'a str,
    enabled: bool,
}

impl<'a> InputBar<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            enabled: false,
        }
    }

    /// Typing only goes anywhere while connected
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Longest suffix of `text` that fits in `width` columns
fn visible_tail(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

impl Widget for InputBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.enabled)
            .title(" Message ")
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 3 {
            return;
        }

        let line = if !self.enabled {
            Line::from(Span::styled(" Connect to start chatting", styles::text_muted()))
        } else if self.input.is_empty() {
            Line::from(vec![
                Span::styled("> ", styles::accent()),
                Span::styled("Type a message", styles::text_muted()),
            ])
        } else {
            // Leave room for the prompt and the cursor
            let room = inner.width as usize - 3;
            Line::from(vec![
                Span::styled("> ", styles::accent()),
                Span::styled(visible_tail(self.input, room), styles::text_primary()),
                Span::styled("▏", styles::accent()),
            ])
        };
        buf.set_line(inner.x, inner.y, &line, inner.width);
    }
}
