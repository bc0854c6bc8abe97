//! Error types for folio-tui.

use std::io;
use thiserror::Error;

use folio_core::error::AppError;

/// TUI-specific error type.
#[derive(Error, Debug)]
pub enum TuiError {
    /// Terminal I/O error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Content or configuration could not be loaded.
    #[error("{0}")]
    Core(#[from] AppError),
}

/// Result type alias for TUI operations.
pub type TuiResult<T> = Result<T, TuiError>;
