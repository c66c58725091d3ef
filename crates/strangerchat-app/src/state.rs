//! Application state (Model in TEA pattern)

use strangerchat_core::PeerPool;

use crate::config::Settings;
use crate::random::{RandomSource, ThreadRandom};
use crate::session::Session;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Chat screen (idle, searching, or connected)
    #[default]
    Normal,

    /// Quit confirmation while connected
    ConfirmDialog,
}

/// Process lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub ui_mode: UiMode,

    /// The one matchmaking session
    pub session: Session,

    /// Human peers and their availability
    pub pool: PeerPool,

    /// Compose buffer for the next chat message
    pub input: String,

    pub settings: Settings,

    /// Draws for every random branch
    pub rng: Box<dyn RandomSource>,

    /// Searching animation frame, advanced on Tick
    pub spinner_frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State with default settings and an entropy-seeded random source
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), Box::new(ThreadRandom::new()))
    }

    pub fn with_settings(settings: Settings, rng: Box<dyn RandomSource>) -> Self {
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            session: Session::new(),
            pool: PeerPool::new(),
            input: String::new(),
            settings,
            rng,
            spinner_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Quit, asking first when a chat would be cut off
    pub fn request_quit(&mut self) {
        if self.settings.behavior.confirm_quit && self.session.is_connected() {
            self.ui_mode = UiMode::ConfirmDialog;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn cancel_quit(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}
