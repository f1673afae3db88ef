//! Layout error types.

use thiserror::Error;

/// Errors raised while validating content blocks.
///
/// These are programming errors: queues are built internally, so validation
/// fails fast at build time and never inside the layout loop.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A block's cells occupy a different number of columns than its half
    /// provides.
    #[error("Content block occupies {actual} columns in a half {expected} wide")]
    MalformedBlock {
        /// Columns the half provides.
        expected: usize,
        /// Columns the block occupies.
        actual: usize,
    },

    /// A chart block was placed in the left queue.
    #[error("Chart blocks may only appear in the right queue")]
    MisplacedChart,
}

impl LayoutError {
    /// Returns the error code for log output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedBlock { .. } | Self::MisplacedChart => "MALFORMED_BLOCK",
        }
    }
}
