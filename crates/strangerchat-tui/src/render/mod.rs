//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use strangerchat_app::state::{AppState, UiMode};

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function; it never modifies state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let session = &state.session;
    let show_banner = session.is_connected() && !session.call.is_idle();
    let areas = layout::create(area, show_banner);

    frame.render_widget(widgets::MainHeader::new(session), areas.header);
    frame.render_widget(
        widgets::Transcript::new(session).spinner_frame(state.spinner_frame),
        areas.transcript,
    );
    if show_banner {
        frame.render_widget(
            widgets::CallBanner::new(session.call, session.peer_name()),
            areas.call_banner,
        );
    }
    frame.render_widget(
        widgets::InputBar::new(&state.input).enabled(session.is_connected()),
        areas.input,
    );
    frame.render_widget(widgets::StatusBar::new(state), areas.status_bar);

    // Render modal overlays based on UI mode
    match state.ui_mode {
        UiMode::ConfirmDialog => {
            frame.render_widget(widgets::ConfirmDialog::new(session.peer_name()), area);
        }
        UiMode::Normal => {}
    }
}
