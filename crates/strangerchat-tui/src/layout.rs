//! Screen layout definitions for the TUI
//!
//! Header on top, transcript in the middle, then an optional call banner,
//! the compose box and a one-line status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, connection status and countdown
    pub header: Rect,

    /// Chat transcript (or the idle/searching placeholder)
    pub transcript: Rect,

    /// Call negotiation banner; zero height when no call is in progress
    pub call_banner: Rect,

    /// Message compose box
    pub input: Rect,

    /// Keybinding hints
    pub status_bar: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_call_banner` - Reserve room for the call banner
pub fn create(area: Rect, show_call_banner: bool) -> ScreenAreas {
    let banner_height = if show_call_banner { 3 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(3),             // Header (glass container)
        Constraint::Min(3),                // Transcript
        Constraint::Length(banner_height), // Call banner
        Constraint::Length(3),             // Compose box
        Constraint::Length(1),             // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        transcript: chunks[1],
        call_banner: chunks[2],
        input: chunks[3],
        status_bar: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_without_banner() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.call_banner.height, 0);
        assert_eq!(layout.input.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.transcript.height, 17); // 24 - 3 - 3 - 1
        assert_eq!(layout.transcript.y, 3);
    }

    #[test]
    fn test_create_layout_with_banner() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, true);

        assert_eq!(layout.call_banner.height, 3);
        assert_eq!(layout.transcript.height, 14);
        assert_eq!(layout.status_bar.y, 23);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        for banner in [false, true] {
            let layout = create(area, banner);
            let total = layout.header.height
                + layout.transcript.height
                + layout.call_banner.height
                + layout.input.height
                + layout.status_bar.height;
            assert_eq!(total, area.height);
        }
    }
}
