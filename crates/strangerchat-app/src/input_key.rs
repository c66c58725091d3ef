//! Abstract input key event, independent of terminal library.
//!
//! `strangerchat-app` never depends on crossterm; the TUI converts its key
//! events into [`InputKey`] at the boundary, and the headless runner never
//! produces keys at all.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (letters, digits, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
    /// Backspace key
    Backspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }
}
