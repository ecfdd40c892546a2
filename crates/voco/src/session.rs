//! Dictation session lifecycle around one engine.

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::engine::Engine;
use crate::event::{RecognizerEvent, SessionEvent};
use crate::host::NoticeLevel;

const STARTED_MESSAGE: &str = "Dictation session started. Speak into the microphone";
const ENDED_MESSAGE: &str = "Dictation session ended";

/// One dictation session: a listening flag gating one [`Engine`].
///
/// The recognizer transport keeps running underneath; this type only
/// decides whether its utterances reach the engine, and tells the user
/// when that changes.
pub struct DictationSession {
    session_id: String,
    engine: Engine,
    listening: bool,
    started_at: Option<u64>,
    ended_at: Option<u64>,
}

impl DictationSession {
    pub fn new(engine: Engine) -> Self {
        Self {
            session_id: Uuid::new_v4().to_string(),
            engine,
            listening: false,
            started_at: None,
            ended_at: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.session_id
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn started_at(&self) -> Option<u64> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<u64> {
        self.ended_at
    }

    /// Starts listening. Idempotent; the user is notified only on an
    /// actual transition.
    pub async fn start(&mut self) {
        if self.listening {
            return;
        }
        self.listening = true;
        self.started_at = Some(now_secs());
        self.ended_at = None;
        tracing::info!(id = %self.session_id, "dictation session started");
        self.engine
            .host()
            .notify(NoticeLevel::Info, STARTED_MESSAGE)
            .await;
    }

    /// Stops listening. Idempotent; already-dispatched effects stand.
    pub async fn stop(&mut self) {
        if !self.listening {
            return;
        }
        self.listening = false;
        self.ended_at = Some(now_secs());
        tracing::info!(id = %self.session_id, "dictation session ended");
        self.engine
            .host()
            .notify(NoticeLevel::Info, ENDED_MESSAGE)
            .await;
    }

    pub async fn toggle(&mut self) {
        if self.listening {
            self.stop().await;
        } else {
            self.start().await;
        }
    }

    /// Routes one recognizer-side event.
    pub async fn handle(&mut self, event: RecognizerEvent) {
        match event {
            RecognizerEvent::Recognized(event) => {
                if !self.listening {
                    tracing::debug!("dropping recognition event while not listening");
                    return;
                }
                self.engine.handle_event(event).await;
            }
            RecognizerEvent::Session(event) => self.handle_session_event(event),
        }
    }

    /// Transport lifecycle changes only adjust the listening flag; the
    /// start/stop notifications belong to explicit user transitions.
    fn handle_session_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Started(recognizer_id) => {
                tracing::info!(%recognizer_id, "recognizer session started");
            }
            SessionEvent::Stopped(recognizer_id) => {
                tracing::info!(%recognizer_id, "recognizer session stopped");
                self.listening = false;
            }
            SessionEvent::Cancelled(details) => {
                tracing::warn!(
                    details = details.as_deref().unwrap_or("none"),
                    "recognizer session cancelled"
                );
                self.listening = false;
            }
        }
    }

    /// Consumes recognizer events until the channel closes, handling
    /// them one at a time so no two effects ever overlap.
    pub async fn run(mut self, mut events: mpsc::Receiver<RecognizerEvent>) {
        while let Some(event) = events.recv().await {
            self.handle(event).await;
        }
        tracing::debug!(id = %self.session_id, "recognizer channel closed");
    }
}

fn now_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
