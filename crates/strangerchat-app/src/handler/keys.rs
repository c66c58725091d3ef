//! Key event handlers for different UI modes

use strangerchat_core::ConnectionStatus;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::Normal => match state.session.status {
            ConnectionStatus::Idle => handle_key_idle(key),
            ConnectionStatus::Searching => handle_key_searching(key),
            ConnectionStatus::Connected => handle_key_connected(state, key),
        },
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        // 'q' allows double-tap "qq" as quick quit shortcut
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        _ => None,
    }
}

fn handle_key_idle(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char('f') => Some(Message::FindMatch),
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        _ => None,
    }
}

fn handle_key_searching(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::EndSession),
        InputKey::Char('q') => Some(Message::RequestQuit),
        _ => None,
    }
}

/// Connected: plain keys edit the compose buffer, Ctrl chords drive the call
fn handle_key_connected(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char(c) => Some(Message::InputChar(c)),
        InputKey::Backspace => Some(Message::InputBackspace),
        InputKey::CharCtrl('u') => Some(Message::InputClear),
        InputKey::Enter => Some(Message::SubmitInput),

        InputKey::CharCtrl('v') => {
            if state.session.call.is_outgoing() {
                Some(Message::CancelCallRequest)
            } else {
                Some(Message::RequestCall)
            }
        }
        InputKey::CharCtrl('a') => Some(Message::AcceptCall),
        InputKey::CharCtrl('r') => Some(Message::RejectCall),
        InputKey::CharCtrl('e') => Some(Message::EndCall),

        InputKey::CharCtrl('n') => Some(Message::FindMatch),
        InputKey::Esc => Some(Message::EndSession),
        InputKey::CharCtrl('q') => Some(Message::RequestQuit),
        _ => None,
    }
}
