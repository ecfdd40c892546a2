//! Wire-level records crossing the recognizer boundary.

use serde::{Deserialize, Serialize};

/// One finalized utterance, as delivered by the recognizer.
///
/// Ephemeral: consumed synchronously by the engine, never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionEvent {
    /// Literal recognized text, when the utterance produced any.
    #[serde(default)]
    pub text: Option<String>,
    /// Structured pattern matches, in recognizer order.
    #[serde(default)]
    pub intent_matches: Vec<RawIntent>,
}

/// A structured match exactly as the recognizer delivers it.
///
/// Every slot is optional on the wire and the recognizer populates
/// whichever ones the matched pattern named. Which slots actually mean
/// something for a given `id` is decided once, at conversion into the
/// typed [`Intent`](crate::intent::Intent); everything else is ignored
/// there.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIntent {
    /// Intent identifier, e.g. `Voice.Positioning`.
    pub id: String,
    /// Full utterance text the match was taken from.
    pub text: String,
    #[serde(default)]
    pub text_insertion: Option<String>,
    #[serde(default)]
    pub num_new_lines: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub line_number: Option<String>,
    #[serde(default)]
    pub breakpoint_line: Option<String>,
    #[serde(default)]
    pub dialog_text: Option<String>,
    #[serde(default)]
    pub terminal_phrase: Option<String>,
    #[serde(default)]
    pub key_name: Option<String>,
}

/// Recognizer transport lifecycle notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum SessionEvent {
    /// Transport came up; carries the recognizer's own session id.
    Started(String),
    /// Transport shut down cleanly.
    Stopped(String),
    /// Transport aborted, with error details when the recognizer has any.
    Cancelled(Option<String>),
}

/// Everything the recognizer side can push into the session loop.
#[derive(Debug, Clone)]
pub enum RecognizerEvent {
    Recognized(RecognitionEvent),
    Session(SessionEvent),
}
