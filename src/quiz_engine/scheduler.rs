//! Timed feedback-then-advance on top of [`Session`].
//!
//! After an answer or skip the feedback stays up for [`FEEDBACK_DURATION`],
//! then a spawned task redeems the round's [`AdvanceTicket`]. Tickets are
//! issued and timers armed under the session lock. Starting a new session
//! aborts the pending task, and a stale ticket is never armed. A task that
//! still fires is refused by the session's generation check.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, MutexGuard};
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use crate::quiz_engine::{
    models::{DifficultyMode, GameStatus},
    session::{AdvanceTicket, Session},
};

/// How long feedback is shown before the next round starts.
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(2500);

#[derive(Clone)]
pub struct FeedbackScheduler {
    session: Arc<Mutex<Session>>,
    delay: Duration,
    pending: Arc<Mutex<Option<JoinHandle<bool>>>>,
}

impl FeedbackScheduler {
    pub fn new(session: Session) -> Self {
        Self::with_delay(session, FEEDBACK_DURATION)
    }

    pub fn with_delay(session: Session, delay: Duration) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            delay,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Lock the session for reading state or for transitions that need no timer.
    pub async fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().await
    }

    /// Start a new session, cancelling any advance still pending.
    #[instrument(level = "debug", skip(self))]
    pub async fn select_mode(&self, mode: DifficultyMode) {
        let mut session = self.session.lock().await;
        if let Some(handle) = self.pending.lock().await.take() {
            handle.abort();
        }
        session.select_mode(mode);
    }

    /// Submit an answer; schedules the advance if the answer was accepted.
    pub async fn answer(&self, selection: &str) -> bool {
        let mut session = self.session.lock().await;
        match session.submit_answer(selection) {
            Some(ticket) => {
                self.arm(ticket).await;
                true
            }
            None => false,
        }
    }

    /// Skip the question; schedules the advance if the skip was accepted.
    pub async fn skip(&self) -> bool {
        let mut session = self.session.lock().await;
        match session.skip() {
            Some(ticket) => {
                self.arm(ticket).await;
                true
            }
            None => false,
        }
    }

    /// Redeem `ticket` once the feedback delay has elapsed.
    ///
    /// A ticket that no longer matches the live round is dropped without
    /// touching the advance already pending for it. Returns whether a timer
    /// was started.
    pub async fn schedule_advance(&self, ticket: AdvanceTicket) -> bool {
        let session = self.session.lock().await;
        let live = session.status() == GameStatus::Feedback
            && session.generation() == ticket.generation
            && session.round_index() == ticket.round_index;
        if !live {
            debug!(target: "session", ?ticket, generation = session.generation(), "Not scheduling stale ticket");
            return false;
        }
        self.arm(ticket).await;
        true
    }

    // Callers hold the session lock, so restarts and schedules are ordered.
    async fn arm(&self, ticket: AdvanceTicket) {
        let session = Arc::clone(&self.session);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let advanced = session.lock().await.advance(ticket);
            debug!(target: "session", ?ticket, advanced, "Feedback timer fired");
            advanced
        });
        if let Some(previous) = self.pending.lock().await.replace(handle) {
            previous.abort();
        }
    }

    /// Wait for the pending advance, if any. `Some(true)` if it moved the game on.
    pub async fn wait_pending(&self) -> Option<bool> {
        let handle = self.pending.lock().await.take()?;
        handle.await.ok()
    }
}
