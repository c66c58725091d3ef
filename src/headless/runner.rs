//! Headless mode runner - main event loop without TUI
//!
//! Reads line commands from stdin, feeds them to the Engine and writes each
//! engine event to stdout as NDJSON.

use tokio::sync::{broadcast, mpsc};
use tracing::{error, info, warn};

use strangerchat_app::config::Settings;
use strangerchat_app::{message::Message, Engine, EngineEvent, RandomSource};
use strangerchat_core::prelude::*;

use super::HeadlessEvent;

/// One parsed stdin line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Blank line
    Empty,
    /// A recognised command
    Run(Message),
    /// Anything else, with a description for the error event
    Invalid(String),
}

/// Parse one stdin line into a command
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    let message = match word {
        "" => return Command::Empty,
        "find" | "next" => Message::FindMatch,
        "say" if rest.is_empty() => return Command::Invalid("usage: say <text>".to_string()),
        "say" => Message::SendMessage {
            text: rest.to_string(),
        },
        "call" => Message::RequestCall,
        "cancel" => Message::CancelCallRequest,
        "accept" => Message::AcceptCall,
        "reject" => Message::RejectCall,
        "hangup" => Message::EndCall,
        "end" => Message::EndSession,
        "q" | "quit" => Message::Quit,
        other => return Command::Invalid(format!("Unknown command: {}", other)),
    };
    Command::Run(message)
}

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(settings: Settings, rng: Box<dyn RandomSource>) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Stranger Chat starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    // Create engine (handles all shared initialization)
    let mut engine = Engine::new(settings, rng);
    let mut events = engine.subscribe();

    // Spawn headless-specific stdin reader
    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(stdin_tx);
    });

    // Main event loop
    let result = headless_event_loop(&mut engine, &mut events).await;
    if let Err(e) = &result {
        HeadlessEvent::from_error(e).emit();
    }

    // Shutdown
    engine.shutdown();

    info!("Stranger Chat headless mode exiting");
    result
}

/// Main headless event loop
async fn headless_event_loop(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
) -> Result<()> {
    loop {
        // Check for shutdown
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        // Wait for next message
        match engine.msg_rx.recv().await {
            Some(msg) => {
                engine.process_message(msg);
                emit_engine_events(events);
            }
            None => {
                error!("Message channel closed");
                return Err(Error::ChannelClosed);
            }
        }
    }

    Ok(())
}

/// Write every event the engine produced since the last call
fn emit_engine_events(events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(headless) = HeadlessEvent::from_engine_event(&event) {
                    headless.emit();
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output skipped {} engine events", skipped);
                HeadlessEvent::error(format!("{} events were dropped", skipped), false).emit();
            }
            Err(_) => break,
        }
    }
}

/// Spawn stdin reader task that sends commands to message channel (blocking version)
///
/// End of input does not stop the simulation; timers keep firing until a
/// `quit` command or a signal arrives.
fn spawn_stdin_reader_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => match parse_command(&line) {
                Command::Empty => {}
                Command::Run(msg) => {
                    let quit = msg == Message::Quit;
                    info!("Stdin: {:?}", msg);
                    if msg_tx.blocking_send(msg).is_err() {
                        break;
                    }
                    if quit {
                        break;
                    }
                }
                Command::Invalid(reason) => {
                    warn!("Rejected stdin command: {}", line.trim());
                    HeadlessEvent::error(reason, false).emit();
                }
            },
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}
