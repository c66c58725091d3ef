//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the unified message channel, the pending
//! simulation timers and the event broadcaster. Both front ends feed it
//! messages and drain its channel; neither touches timers directly.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use strangerchat_core::{CallState, ConnectionStatus, Peer};

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::process;
use crate::random::RandomSource;
use crate::session::SessionEpoch;
use crate::signals;
use crate::state::AppState;
use crate::timers::TimerSet;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    status: ConnectionStatus,
    peer: Option<Peer>,
    transcript_len: usize,
    call: CallState,
    epoch: SessionEpoch,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            status: state.session.status,
            peer: state.session.peer.clone(),
            transcript_len: state.session.transcript.len(),
            call: state.session.call,
            epoch: state.session.epoch,
        }
    }
}

/// Orchestration engine for Stranger Chat.
///
/// Encapsulates all shared state between TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - Pending simulation timers
/// - Event broadcasting for external consumers
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, stdin reader).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Timers scheduled by `update()`
    timers: TimerSet,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,

    /// OS signal listener, aborted on shutdown
    signal_task: JoinHandle<()>,
}

impl Engine {
    /// Create a new Engine.
    ///
    /// Must be called inside a tokio runtime: it spawns the signal handler.
    pub fn new(settings: Settings, rng: Box<dyn RandomSource>) -> Self {
        let state = AppState::with_settings(settings, rng);

        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

        let signal_task = signals::spawn_signal_handler(msg_tx.clone());

        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            timers: TimerSet::new(),
            event_tx,
            signal_task,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle.
    ///
    /// Emits EngineEvents based on state changes detected by comparing
    /// before/after snapshots.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &mut self.timers, &self.msg_tx);

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Number of simulation timers still waiting to fire
    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Stop all timers and tell subscribers the engine is going away
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        self.timers.cancel_all();
        self.signal_task.abort();

        if let Some(peer) = self.state.session.human_peer() {
            let id = peer.id.clone();
            self.state.pool.release(&id);
        }
    }

    /// Emit EngineEvents based on state changes after processing.
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        // A live session was torn down (possibly followed by a new search)
        let ended = pre.status != ConnectionStatus::Idle
            && (post.status == ConnectionStatus::Idle || pre.epoch != post.epoch);
        if ended {
            self.emit(EngineEvent::SessionEnded {
                peer: pre.peer.clone(),
            });
        }

        if pre.status != post.status {
            self.emit(EngineEvent::StatusChanged {
                from: pre.status,
                to: post.status,
            });
        }

        if post.status == ConnectionStatus::Connected
            && (pre.status != ConnectionStatus::Connected || pre.peer != post.peer)
        {
            if let Some(peer) = &post.peer {
                self.emit(EngineEvent::Matched { peer: peer.clone() });
            }
        }

        if post.transcript_len > pre.transcript_len {
            for message in &self.state.session.transcript[pre.transcript_len..post.transcript_len]
            {
                self.emit(EngineEvent::MessageAppended {
                    message: message.clone(),
                });
            }
        }

        if pre.call != post.call {
            self.emit(EngineEvent::CallChanged {
                from: pre.call,
                to: post.call,
            });
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() returns Err only if there are no receivers.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::TimerEvent;
    use crate::random::ScriptedRandom;
    use std::time::Duration;
    use strangerchat_core::CallOrigin;

    fn test_engine(draws: impl IntoIterator<Item = f64>) -> Engine {
        Engine::new(Settings::default(), Box::new(ScriptedRandom::new(draws)))
    }

    /// Wait for the next message and process it
    async fn step(engine: &mut Engine) -> Message {
        let msg = engine.msg_rx.recv().await.expect("channel open");
        engine.process_message(msg.clone());
        msg
    }

    fn drain_events(rx: &mut broadcast::Receiver<EngineEvent>) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_engine_new_creates_idle_state() {
        let engine = test_engine([]);
        assert!(engine.state.session.is_idle());
        assert!(!engine.should_quit());
        assert_eq!(engine.pending_timers(), 0);
    }

    #[tokio::test]
    async fn test_engine_drain_empty_channel() {
        let mut engine = test_engine([]);
        assert_eq!(engine.drain_pending_messages(), 0);
    }

    #[tokio::test]
    async fn test_engine_process_quit_message() {
        let mut engine = test_engine([]);
        engine.process_message(Message::Quit);
        assert!(engine.should_quit());
    }

    #[tokio::test(start_paused = true)]
    async fn test_match_flow_emits_events() {
        let mut engine = test_engine([0.0]);
        let mut events = engine.subscribe();

        engine.process_message(Message::FindMatch);
        assert_eq!(
            drain_events(&mut events),
            vec![EngineEvent::StatusChanged {
                from: ConnectionStatus::Idle,
                to: ConnectionStatus::Searching,
            }]
        );

        let msg = step(&mut engine).await;
        assert!(matches!(
            msg,
            Message::Timer {
                event: TimerEvent::MatchResolved,
                ..
            }
        ));
        let matched = drain_events(&mut events);
        assert_eq!(
            matched,
            vec![
                EngineEvent::StatusChanged {
                    from: ConnectionStatus::Searching,
                    to: ConnectionStatus::Connected,
                },
                EngineEvent::Matched {
                    peer: Peer::human("user1", "Alex"),
                },
            ]
        );

        // Greeting and the first countdown tick are both due one second later
        while engine.state.session.transcript.is_empty() {
            step(&mut engine).await;
        }
        let greeting = drain_events(&mut events);
        assert_eq!(greeting.len(), 1);
        assert_eq!(greeting[0].event_type(), "message");
    }

    #[tokio::test(start_paused = true)]
    async fn test_end_session_cancels_pending_timers() {
        let mut engine = test_engine([0.0]);
        engine.process_message(Message::FindMatch);
        step(&mut engine).await;
        assert!(engine.pending_timers() > 0);

        let mut events = engine.subscribe();
        engine.process_message(Message::EndSession);

        assert_eq!(engine.pending_timers(), 0);
        assert_eq!(engine.state.pool.unavailable_count(), 0);
        let ended = drain_events(&mut events);
        assert_eq!(
            ended[0],
            EngineEvent::SessionEnded {
                peer: Some(Peer::human("user1", "Alex")),
            }
        );

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(engine.drain_pending_messages(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_call_request_resolves_through_timer() {
        let mut engine = test_engine([0.0]);
        engine.process_message(Message::FindMatch);
        step(&mut engine).await; // matched

        let mut events = engine.subscribe();
        engine.process_message(Message::RequestCall);
        assert_eq!(
            drain_events(&mut events),
            vec![EngineEvent::CallChanged {
                from: CallState::Idle,
                to: CallState::Requested { by: CallOrigin::Me },
            }]
        );

        // Countdown ticks arrive first; keep stepping until the call settles
        while engine.state.session.call.is_outgoing() {
            step(&mut engine).await;
        }
        // Fallback draw 0.0 always accepts
        assert_eq!(engine.state.session.call, CallState::Active);
    }

    #[tokio::test]
    async fn test_shutdown_emits_event() {
        let mut engine = test_engine([]);
        let mut events = engine.subscribe();

        engine.shutdown();

        assert_eq!(events.try_recv().ok(), Some(EngineEvent::Shutdown));
    }

    #[tokio::test]
    async fn test_no_subscribers_no_error() {
        let mut engine = test_engine([]);
        engine.process_message(Message::FindMatch);
        assert!(engine.state.session.is_searching());
    }
}
