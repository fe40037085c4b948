//! Error types for configuration and frame decoding.
//!
//! Planning itself never fails: every query against the battlefield is
//! total, and placement requests are best-effort by contract.

use thiserror::Error;

/// Result type alias using [`AlgoError`].
pub type Result<T> = std::result::Result<T, AlgoError>;

/// Top-level error type for the planning core.
#[derive(Debug, Error)]
pub enum AlgoError {
    /// Configuration file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Failed to read a configuration file.
    #[error("Failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// Failed to parse RON configuration.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] ron::error::SpannedError),

    /// Action frame was not valid JSON.
    #[error("Failed to parse action frame: {0}")]
    FrameParse(#[from] serde_json::Error),

    /// Unit catalogue is missing an entry the planner relies on.
    #[error("Unit catalogue incomplete: expected {expected} unit kinds, got {found}")]
    IncompleteCatalog {
        /// Number of unit kinds the planner knows about.
        expected: usize,
        /// Number of entries supplied.
        found: usize,
    },
}
