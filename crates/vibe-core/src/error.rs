use thiserror::Error;

/// Failures the engine can report to its caller. None of these are
/// fatal: the frame loop keeps drawing the last good state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown parameter `{0}`")]
    UnknownParam(String),
    #[error("unknown mood `{0}`")]
    UnknownMood(String),
    #[error("unknown palette `{0}`")]
    UnknownPalette(String),
    #[error("image export failed: {0}")]
    ExportFailed(String),
}
