//! # World Error Types
//!
//! Errors raised while configuring or constructing a world.
//!
//! Queries against a finished grid never fail: out-of-range coordinates
//! answer `None`, exhausted sampling budgets answer `None` or a fallback.

use thiserror::Error;

/// Errors that can occur while setting up world synthesis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// Width or height was zero, or too large to address with `i32` coordinates.
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// A configuration value is outside its legal range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration text is not valid TOML for `WorldConfig`.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),

    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    ConfigIo(String),
}

/// Result type for world setup.
pub type WorldResult<T> = Result<T, WorldError>;
