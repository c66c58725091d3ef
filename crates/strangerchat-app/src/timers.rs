//! Pending simulation timers
//!
//! Each scheduled timer is a tokio task that sleeps and then sends
//! `Message::Timer` back into the engine's channel. The set keeps the
//! handles so a session teardown can abort everything still pending.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::handler::TimerRequest;
use crate::message::Message;

#[derive(Debug, Default)]
pub struct TimerSet {
    handles: Vec<JoinHandle<()>>,
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a timer that delivers `request` after its delay
    pub fn schedule(&mut self, request: TimerRequest, msg_tx: mpsc::Sender<Message>) {
        self.handles.retain(|h| !h.is_finished());

        let handle = tokio::spawn(async move {
            tokio::time::sleep(request.delay).await;
            let msg = Message::Timer {
                epoch: request.epoch,
                event: request.event,
            };
            if msg_tx.send(msg).await.is_err() {
                tracing::debug!("Timer {:?} fired after the engine stopped", request.event);
            }
        });
        self.handles.push(handle);
    }

    /// Abort every pending timer
    pub fn cancel_all(&mut self) {
        let count = self.handles.len();
        for handle in self.handles.drain(..) {
            handle.abort();
        }
        if count > 0 {
            tracing::debug!("Cancelled {} timer(s)", count);
        }
    }

    /// Number of timers that have not fired yet
    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::TimerEvent;
    use crate::session::SessionEpoch;
    use std::time::Duration;

    fn request(ms: u64, event: TimerEvent) -> TimerRequest {
        TimerRequest {
            delay: Duration::from_millis(ms),
            epoch: SessionEpoch::default(),
            event,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_delay() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut timers = TimerSet::new();

        timers.schedule(request(1000, TimerEvent::GreetingDue), tx);

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(rx.try_recv().is_err());

        let msg = rx.recv().await.expect("timer message");
        assert_eq!(
            msg,
            Message::Timer {
                epoch: SessionEpoch::default(),
                event: TimerEvent::GreetingDue,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_aborts_pending_timers() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut timers = TimerSet::new();
        timers.schedule(request(500, TimerEvent::ReplyDue), tx.clone());
        timers.schedule(request(800, TimerEvent::CallResponseDue), tx);
        assert_eq!(timers.pending(), 2);

        timers.cancel_all();
        assert_eq!(timers.pending(), 0);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }
}
