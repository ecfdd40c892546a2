//! Capability seam between the engine and the hosting editor.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::HostResult;
use crate::keys::KeyCode;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Everything the engine may ask the hosting editor to do.
///
/// The engine owns no editor state of its own: buffers, selections,
/// files, terminals and debugger markers all live behind this trait.
/// Implementations decide what "active" means; absence is reported as
/// [`HostError::Inactive`](crate::error::HostError::Inactive), which
/// the engine treats as a silent no-op.
#[async_trait::async_trait]
pub trait Host: Send + Sync {
    /// Inserts text at the cursor of the active editor, then saves.
    async fn insert_text(&self, text: &str) -> HostResult<()>;
    /// Saves the active document.
    async fn save_active_file(&self) -> HostResult<()>;
    /// Path of the active document, if an editor is open.
    async fn active_file(&self) -> Option<PathBuf>;
    /// Moves the cursor to a 0-based line, column 0, scrolling so the
    /// range through `reveal_through` is visible.
    async fn move_cursor(&self, line: u32, reveal_through: u32) -> HostResult<()>;

    /// Root of the current workspace, if one is open.
    async fn workspace_root(&self) -> Option<PathBuf>;
    async fn file_exists(&self, path: &Path) -> bool;
    /// Creates an empty file.
    async fn create_file(&self, path: &Path) -> HostResult<()>;
    /// Opens a file in an editor.
    async fn open_file(&self, path: &Path) -> HostResult<()>;
    async fn delete_file(&self, path: &Path) -> HostResult<()>;

    /// Places a breakpoint on a 0-based line of the active document.
    async fn add_breakpoint(&self, line: u32) -> HostResult<()>;
    /// Removes the breakpoint on a 0-based line.
    async fn remove_breakpoint(&self, line: u32) -> HostResult<()>;
    /// Removes every breakpoint the editor knows about.
    async fn clear_breakpoints(&self) -> HostResult<()>;

    /// Shows a notification.
    async fn notify(&self, level: NoticeLevel, message: &str);
    /// Shows an info notification with action buttons and resolves to
    /// the chosen label, or `None` when dismissed.
    async fn ask(&self, message: &str, actions: &[&str]) -> Option<String>;

    /// Whether a terminal is currently active.
    async fn terminal_active(&self) -> bool;
    /// Sends one line to the active terminal, submitting it.
    async fn send_to_terminal(&self, line: &str) -> HostResult<()>;

    /// Executes an editor command by id.
    async fn execute_command(&self, id: &str) -> HostResult<()>;
    /// Simulates a keystroke at the OS level.
    async fn send_key(&self, key: KeyCode) -> HostResult<()>;
}

pub type SharedHost = Arc<dyn Host>;
