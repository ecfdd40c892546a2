//! Turns recognition events into editor effects.

use std::time::Duration;

use crate::breakpoints::{BreakpointRegistry, Toggle};
use crate::command::normalize;
use crate::command::tables::{BuiltinAction, CommandTables, Resolved};
use crate::config::EngineConfig;
use crate::error::{HostError, HostResult};
use crate::event::RecognitionEvent;
use crate::host::{NoticeLevel, SharedHost};
use crate::intent::{Intent, IntentMatch};
use crate::keys::{key_code, KeyCode};
use crate::number::parse_number;

/// Phrase whose command-table entry comments the current line.
const COMMENT_PHRASE: &str = "comment";
/// Command that moves keyboard focus onto the notification toasts.
const FOCUS_NOTIFICATIONS_COMMAND: &str = "notifications.focusToasts";

const DELETE_ACTION: &str = "Delete File";
const CANCEL_ACTION: &str = "Cancel";

/// The interpretation engine: resolves literal phrases against the
/// command tables and dispatches typed intents, one effect at a time.
///
/// Holds no editor state beyond the breakpoint registry; everything
/// else happens through the injected [`Host`](crate::host::Host).
pub struct Engine {
    host: SharedHost,
    config: EngineConfig,
    tables: CommandTables,
    breakpoints: BreakpointRegistry,
}

impl Engine {
    /// Engine with the stock command tables.
    pub fn new(host: SharedHost, config: EngineConfig) -> Self {
        Self::with_tables(host, config, CommandTables::builtin())
    }

    /// Engine with caller-supplied tables.
    pub fn with_tables(host: SharedHost, config: EngineConfig, tables: CommandTables) -> Self {
        Self {
            host,
            config,
            tables,
            breakpoints: BreakpointRegistry::new(),
        }
    }

    pub fn breakpoints(&self) -> &BreakpointRegistry {
        &self.breakpoints
    }

    pub(crate) fn host(&self) -> &SharedHost {
        &self.host
    }

    /// Handles one finalized utterance.
    ///
    /// The literal path and the match path are independent; both may
    /// fire for the same event. Matches run in recognizer order, each
    /// awaited before the next.
    pub async fn handle_event(&mut self, event: RecognitionEvent) {
        if let Some(text) = event.text.as_deref().filter(|text| !text.is_empty()) {
            self.handle_phrase(text).await;
        }

        for raw in event.intent_matches {
            if let Some(intent_match) = IntentMatch::from_raw(raw) {
                self.dispatch(&intent_match).await;
            }
        }
    }

    /// Runs the literal-phrase path: normalize, resolve, act once.
    pub async fn handle_phrase(&mut self, raw: &str) {
        let phrase = normalize(raw);
        match self.tables.resolve(&phrase) {
            Some(Resolved::Command(id)) => {
                tracing::info!(command = id, %phrase, "running mapped command");
                self.settle("executing command", self.host.execute_command(id).await)
                    .await;
            }
            Some(Resolved::Builtin(action)) => self.run_builtin(action).await,
            None => tracing::debug!(%phrase, "phrase matched no table entry"),
        }
    }

    /// Dispatches one typed intent to its effect.
    pub async fn dispatch(&mut self, intent_match: &IntentMatch) {
        tracing::debug!(intent = ?intent_match.intent, "dispatching intent");
        match &intent_match.intent {
            Intent::InsertText(text) => self.insert(text).await,
            Intent::InsertComment(text) => {
                let comment = format!("{}{text}", self.config.comment_prefix);
                self.insert(&comment).await;
            }
            Intent::CommentAtLine => self.comment_at_spoken_line(&intent_match.utterance).await,
            Intent::InsertNewLines(count) => self.insert_newlines(count).await,
            Intent::CreateFile(name) => self.create_file(name).await,
            Intent::MoveToLine => {
                self.move_to_spoken_line(&intent_match.utterance).await;
            }
            Intent::ToggleBreakpoint => {
                self.toggle_spoken_breakpoint(&intent_match.utterance).await;
            }
            Intent::ShowMessage(text) => self.host.notify(NoticeLevel::Info, text).await,
            Intent::TerminalCommand(line) => self.send_to_terminal(line).await,
            Intent::PressKey(name) => self.press_key(name).await,
        }
    }

    async fn run_builtin(&mut self, action: BuiltinAction) {
        tracing::info!(?action, "running builtin action");
        match action {
            BuiltinAction::SaveCurrentFile => {
                self.settle("saving file", self.host.save_active_file().await)
                    .await;
            }
            BuiltinAction::InsertNewLine => self.insert("\n").await,
            BuiltinAction::RemoveAllBreakpoints => self.remove_all_breakpoints().await,
            BuiltinAction::RunCurrentFile => self.run_current_file().await,
            BuiltinAction::DeleteCurrentFile => self.delete_current_file().await,
        }
    }

    async fn insert(&self, text: &str) {
        self.settle("inserting text", self.host.insert_text(text).await)
            .await;
    }

    async fn insert_newlines(&self, count: &str) {
        let Some(count) = parse_number(count) else {
            tracing::debug!(phrase = count, "newline count did not parse");
            return;
        };
        if count == 0 {
            return;
        }
        self.insert(&"\n".repeat(count as usize)).await;
    }

    async fn create_file(&self, name: &str) {
        let file_name = format!("{}.{}", name.replace(' ', "-"), self.config.file_extension);
        let root = self.host.workspace_root().await.unwrap_or_default();
        let path = root.join(&file_name);

        if self.host.file_exists(&path).await {
            self.host
                .notify(NoticeLevel::Error, &format!("{file_name} already exists"))
                .await;
            return;
        }

        match self.host.create_file(&path).await {
            Ok(()) => {
                self.settle("opening file", self.host.open_file(&path).await)
                    .await;
            }
            result => self.settle("creating file", result).await,
        }
    }

    /// Moves to the line spoken in the utterance. Returns whether a
    /// usable line number was found.
    async fn move_to_spoken_line(&self, utterance: &str) -> bool {
        let Some(line) = parse_number(utterance) else {
            tracing::debug!(utterance, "no line number in utterance");
            return false;
        };
        if line == 0 {
            return false;
        }

        let target = line - 1;
        let reveal = target.saturating_add(self.config.reveal_margin);
        self.settle("moving cursor", self.host.move_cursor(target, reveal).await)
            .await;
        true
    }

    async fn comment_at_spoken_line(&self, utterance: &str) {
        if !self.move_to_spoken_line(utterance).await {
            return;
        }

        let Some(comment) = self.tables.command(COMMENT_PHRASE) else {
            tracing::debug!("command table has no comment entry");
            return;
        };
        self.settle("commenting line", self.host.execute_command(comment).await)
            .await;
    }

    async fn toggle_spoken_breakpoint(&mut self, utterance: &str) {
        let Some(line) = parse_number(utterance) else {
            tracing::debug!(utterance, "no breakpoint line in utterance");
            return;
        };
        if line == 0 {
            return;
        }

        // Registry and host move together; a rejected host call rolls
        // the registry back.
        let outcome = self.breakpoints.toggle(line);
        let result = match outcome {
            Toggle::Added => self.host.add_breakpoint(line - 1).await,
            Toggle::Removed => self.host.remove_breakpoint(line - 1).await,
        };
        if result.is_err() {
            self.breakpoints.revert(line, outcome);
        }
        self.settle("toggling breakpoint", result).await;
    }

    async fn remove_all_breakpoints(&mut self) {
        let result = self.host.clear_breakpoints().await;
        if result.is_ok() {
            self.breakpoints.clear();
        }
        self.settle("removing breakpoints", result).await;
    }

    async fn run_current_file(&self) {
        match self.host.execute_command(&self.config.runner_command).await {
            Ok(()) => {}
            Err(HostError::Inactive(what)) => {
                tracing::debug!("runner skipped, no active {what}");
            }
            Err(HostError::Failed(message)) => {
                self.host.notify(NoticeLevel::Warning, &message).await;
            }
        }
    }

    async fn delete_current_file(&self) {
        let Some(path) = self.host.active_file().await else {
            tracing::debug!("delete requested with no active file");
            return;
        };
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let prompt = format!("Are you sure you want to delete {file_name}?");
        let (choice, ()) = tokio::join!(
            self.host.ask(&prompt, &[DELETE_ACTION, CANCEL_ACTION]),
            self.focus_confirmation()
        );

        if choice.as_deref() != Some(DELETE_ACTION) {
            return;
        }

        match self.host.delete_file(&path).await {
            Ok(()) => {
                self.host
                    .notify(NoticeLevel::Info, &format!("{file_name} was deleted"))
                    .await;
            }
            Err(err) => tracing::warn!(%err, "delete failed"),
        }
    }

    /// Best-effort focus assist for the delete confirmation: give the
    /// toast time to render, focus the notification area and tab onto
    /// its buttons so a spoken "press enter" confirms the dialog.
    async fn focus_confirmation(&self) {
        let delay = Duration::from_millis(self.config.notification_delay_ms);

        tokio::time::sleep(delay).await;
        if let Err(err) = self.host.execute_command(FOCUS_NOTIFICATIONS_COMMAND).await {
            tracing::debug!(%err, "focus assist failed");
        }
        tokio::time::sleep(delay).await;
        if let Err(err) = self.host.send_key(KeyCode::TAB).await {
            tracing::debug!(%err, "focus assist failed");
        }
    }

    async fn send_to_terminal(&self, line: &str) {
        if !self.host.terminal_active().await {
            tracing::debug!("no active terminal, dropping line");
            return;
        }
        self.settle("writing to terminal", self.host.send_to_terminal(line).await)
            .await;
    }

    async fn press_key(&self, name: &str) {
        let Some(key) = key_code(name) else {
            tracing::debug!(name, "unknown key name");
            return;
        };
        self.settle("pressing key", self.host.send_key(key).await)
            .await;
    }

    /// Applies the engine's error policy to a finished host call:
    /// missing context is a quiet skip, a real failure becomes an
    /// error notification. Never propagates.
    async fn settle(&self, action: &str, result: HostResult<()>) {
        match result {
            Ok(()) => {}
            Err(HostError::Inactive(what)) => {
                tracing::debug!(action, "skipped, no active {what}");
            }
            Err(HostError::Failed(message)) => {
                self.host
                    .notify(NoticeLevel::Error, &format!("Error {action}: {message}"))
                    .await;
            }
        }
    }
}
