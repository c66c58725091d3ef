//! Main TUI runner - entry point and event loop
//!
//! Creates an Engine, then alternates between draining its message channel,
//! rendering and polling the terminal until the user quits.

use strangerchat_app::config::Settings;
use strangerchat_app::{Engine, RandomSource};
use strangerchat_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application
///
/// Must be called inside a multi-threaded tokio runtime. Terminal polling
/// blocks, so it runs under `block_in_place` to keep timers firing.
pub async fn run(settings: Settings, rng: Box<dyn RandomSource>) -> Result<()> {
    info!(
        "Starting TUI: session_length={}s confirm_quit={}",
        settings.timing.session_length_secs, settings.behavior.confirm_quit
    );

    let mut term = terminal::init();

    let mut engine = Engine::new(settings, rng);

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();

    terminal::restore();

    result
}

/// Main event loop
fn run_loop(term: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Timer events and signals
        engine.drain_pending_messages();

        if engine.should_quit() {
            break;
        }

        // Render
        term.draw(|frame| render::view(frame, &engine.state))?;

        // Handle terminal events
        if let Some(message) = tokio::task::block_in_place(event::poll)? {
            engine.process_message(message);
        }
    }

    info!("TUI loop finished");
    Ok(())
}
