#[derive(Debug, Clone, thiserror::Error)]
pub enum HostError {
    /// The editor context the effect needs is missing: no open editor, no
    /// visible terminal, no workspace. Dispatched effects treat this as a
    /// silent no-op.
    #[error("no active {0}")]
    Inactive(&'static str),

    /// The capability call itself failed. Surfaced to the user as a
    /// notification; never fatal to the engine.
    #[error("{0}")]
    Failed(String),
}

/// Result type alias using [`HostError`].
pub type HostResult<T> = std::result::Result<T, HostError>;
