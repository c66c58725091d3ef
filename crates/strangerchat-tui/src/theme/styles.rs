//! Semantic style builders for the chat TUI.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use strangerchat_core::{CallState, ConnectionStatus};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for the countdown pill
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_inactive())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Indicator mapping ---

/// Status indicator for the header and status bar.
///
/// Returns `(icon_char, label, Style)` for the given connection status.
pub fn status_indicator(status: ConnectionStatus) -> (&'static str, &'static str, Style) {
    match status {
        ConnectionStatus::Connected => (
            "●",
            "Connected",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        ConnectionStatus::Searching => (
            "◌",
            "Searching",
            Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::BOLD),
        ),
        ConnectionStatus::Idle => ("○", "Idle", Style::default().fg(palette::TEXT_MUTED)),
    }
}

/// Border color of the call banner
pub fn call_style(call: CallState) -> Style {
    match call {
        CallState::Idle => border_inactive(),
        CallState::Requested { .. } => Style::default().fg(palette::STATUS_YELLOW),
        CallState::Active => Style::default().fg(palette::STATUS_GREEN),
    }
}
