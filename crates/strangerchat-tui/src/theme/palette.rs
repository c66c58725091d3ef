//! Color palette for the chat TUI.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds
pub const POPUP_BG: Color = Color::DarkGray; // Modal/popup backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Connected / call active
pub const STATUS_RED: Color = Color::Red; // Decline / hang up
pub const STATUS_YELLOW: Color = Color::Yellow; // Searching / pending call

// --- Transcript ---
pub const MESSAGE_ME: Color = Color::Cyan;
pub const MESSAGE_PEER: Color = Color::Magenta;
pub const MESSAGE_AGENT: Color = Color::Blue;
