use serde::{Deserialize, Serialize};

/// Tunable knobs of the interpretation engine.
///
/// Explicitly constructed and handed to the engine; nothing here is read
/// from ambient globals or persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Line-comment token prefixed to text inserted by the comment intents.
    pub comment_prefix: String,
    /// Extension appended to files created by voice, without the dot.
    pub file_extension: String,
    /// Extra lines revealed past the target when the cursor jumps.
    pub reveal_margin: u32,
    /// Best-effort wait for a notification to render before keyboard focus
    /// is moved onto it, in milliseconds.
    pub notification_delay_ms: u64,
    /// Command identifier executed by the "run code" phrase.
    pub runner_command: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            comment_prefix: "// ".to_string(),
            file_extension: "txt".to_string(),
            reveal_margin: 10,
            notification_delay_ms: 500,
            runner_command: "code-runner.run".to_string(),
        }
    }
}
