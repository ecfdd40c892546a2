//! Typed intents, converted once from the loose wire records.

use crate::event::RawIntent;

/// Closed set of intent identifiers the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    InsertText,
    InsertComment,
    CommentAtLine,
    InsertNewLine,
    CreateFile,
    Positioning,
    Debugging,
    Dialog,
    Terminal,
    PressKey,
}

impl IntentKind {
    /// Maps a wire intent id. Unknown ids are outside the closed set.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "Voice.InsertText" => Some(Self::InsertText),
            "Voice.InsertComment" => Some(Self::InsertComment),
            "Voice.InsertComment.LineNumber" => Some(Self::CommentAtLine),
            "Voice.InsertNewLine" => Some(Self::InsertNewLine),
            "Voice.CreateFile" => Some(Self::CreateFile),
            "Voice.Positioning" => Some(Self::Positioning),
            "Voice.Debugging" => Some(Self::Debugging),
            "Voice.Dialog" => Some(Self::Dialog),
            "Voice.Terminal" => Some(Self::Terminal),
            "Voice.PressKey" => Some(Self::PressKey),
            _ => None,
        }
    }
}

/// One fully-typed intent. Each variant carries exactly the payload its
/// kind defines; everything else on the wire record was dropped at
/// conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Insert the given text at the cursor.
    InsertText(String),
    /// Insert the given text at the cursor, prefixed as a comment.
    InsertComment(String),
    /// Move to a line and comment it. The recognizer sends the line as
    /// a number word, so it is recovered from the utterance instead of
    /// the slot.
    CommentAtLine,
    /// Insert a run of newlines; carries the spoken count phrase.
    InsertNewLines(String),
    /// Create and open a file; carries the spoken name.
    CreateFile(String),
    /// Move the cursor to a line recovered from the utterance.
    MoveToLine,
    /// Toggle a breakpoint on a line recovered from the utterance.
    ToggleBreakpoint,
    /// Show an info notification with the given text.
    ShowMessage(String),
    /// Send one line to the active terminal.
    TerminalCommand(String),
    /// Simulate a keystroke; carries the spoken key name.
    PressKey(String),
}

/// A typed intent plus the utterance it was matched in.
///
/// The utterance stays around because the line-addressed variants parse
/// their number out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentMatch {
    pub utterance: String,
    pub intent: Intent,
}

impl IntentMatch {
    /// Converts a wire record into a typed match.
    ///
    /// The record's kind decides which slot is required and which are
    /// ignored. Unknown ids and records missing their required slot are
    /// dropped with a debug log; an empty slot counts as absent.
    pub fn from_raw(raw: RawIntent) -> Option<Self> {
        let Some(kind) = IntentKind::from_id(&raw.id) else {
            tracing::debug!(id = %raw.id, "dropping match with unknown intent id");
            return None;
        };

        let intent = match kind {
            IntentKind::InsertText => field(raw.text_insertion).map(Intent::InsertText),
            IntentKind::InsertComment => field(raw.text_insertion).map(Intent::InsertComment),
            IntentKind::CommentAtLine => field(raw.line_number).map(|_| Intent::CommentAtLine),
            IntentKind::InsertNewLine => field(raw.num_new_lines).map(Intent::InsertNewLines),
            IntentKind::CreateFile => field(raw.file_name).map(Intent::CreateFile),
            IntentKind::Positioning => field(raw.line_number).map(|_| Intent::MoveToLine),
            IntentKind::Debugging => field(raw.breakpoint_line).map(|_| Intent::ToggleBreakpoint),
            IntentKind::Dialog => field(raw.dialog_text).map(Intent::ShowMessage),
            IntentKind::Terminal => field(raw.terminal_phrase).map(Intent::TerminalCommand),
            IntentKind::PressKey => field(raw.key_name).map(Intent::PressKey),
        };

        let Some(intent) = intent else {
            tracing::debug!(id = %raw.id, "dropping match missing its required slot");
            return None;
        };

        Some(Self {
            utterance: raw.text,
            intent,
        })
    }
}

fn field(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, text: &str) -> RawIntent {
        RawIntent {
            id: id.to_string(),
            text: text.to_string(),
            ..RawIntent::default()
        }
    }

    #[test]
    fn converts_payload_variants() {
        let mut record = raw("Voice.InsertText", "Insert text hello world");
        record.text_insertion = Some("hello world".to_string());

        let m = IntentMatch::from_raw(record).unwrap();
        assert_eq!(m.intent, Intent::InsertText("hello world".to_string()));
        assert_eq!(m.utterance, "Insert text hello world");
    }

    #[test]
    fn line_variants_gate_on_the_slot_but_carry_none() {
        let mut record = raw("Voice.Positioning", "Go to line twelve");
        record.line_number = Some("twelve".to_string());
        let m = IntentMatch::from_raw(record).unwrap();
        assert_eq!(m.intent, Intent::MoveToLine);

        let mut record = raw("Voice.Debugging", "Toggle breakpoint on line 4");
        record.breakpoint_line = Some("4".to_string());
        let m = IntentMatch::from_raw(record).unwrap();
        assert_eq!(m.intent, Intent::ToggleBreakpoint);

        let mut record = raw("Voice.InsertComment.LineNumber", "Comment line nine");
        record.line_number = Some("nine".to_string());
        let m = IntentMatch::from_raw(record).unwrap();
        assert_eq!(m.intent, Intent::CommentAtLine);
    }

    #[test]
    fn unknown_ids_are_dropped() {
        let mut record = raw("Voice.OrderPizza", "Order a pizza");
        record.dialog_text = Some("margherita".to_string());
        assert_eq!(IntentMatch::from_raw(record), None);
    }

    #[test]
    fn missing_required_slot_drops_the_match() {
        let record = raw("Voice.CreateFile", "Create new file notes");
        assert_eq!(IntentMatch::from_raw(record), None);
    }

    #[test]
    fn empty_slot_counts_as_absent() {
        let mut record = raw("Voice.Dialog", "Show message");
        record.dialog_text = Some(String::new());
        assert_eq!(IntentMatch::from_raw(record), None);
    }

    #[test]
    fn foreign_slots_are_ignored() {
        let mut record = raw("Voice.Dialog", "Show message hello");
        record.dialog_text = Some("hello".to_string());
        record.key_name = Some("enter".to_string());
        record.file_name = Some("notes".to_string());

        let m = IntentMatch::from_raw(record).unwrap();
        assert_eq!(m.intent, Intent::ShowMessage("hello".to_string()));
    }
}
