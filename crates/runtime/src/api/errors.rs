//! Unified error types surfaced by the runtime API.
use std::path::PathBuf;

use thiserror::Error;

use game_core::EngineError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("runtime requires a game before building")]
    MissingGame,

    #[error("runtime command channel closed")]
    CommandChannelClosed,

    #[error("runtime command buffer is full")]
    CommandBufferFull,

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("failed to read config {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse runtime config")]
    ConfigParse(#[source] ron::error::SpannedError),

    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },
}
