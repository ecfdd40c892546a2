//! Voice command interpretation engine.
//!
//! Turns finalized speech-recognition output into editor actions:
//! - Phrase normalization and command/function lookup tables
//! - Typed intent conversion and a sequential dispatcher
//! - Spoken-number parsing and breakpoint bookkeeping
//! - A `Host` capability seam the embedding editor implements
//!
//! The crate owns no recognizer transport and no editor UI; both sit
//! behind the boundary types in [`event`] and [`host`].

pub mod breakpoints;
pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod host;
pub mod intent;
pub mod keys;
pub mod number;
pub mod session;

// Re-export main types
pub use breakpoints::{BreakpointRegistry, Toggle};
pub use command::{normalize, BuiltinAction, CommandTables, Resolved};
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{HostError, HostResult};
pub use event::{RawIntent, RecognitionEvent, RecognizerEvent, SessionEvent};
pub use host::{Host, NoticeLevel, SharedHost};
pub use intent::{Intent, IntentKind, IntentMatch};
pub use keys::{key_code, KeyCode};
pub use number::parse_number;
pub use session::DictationSession;
