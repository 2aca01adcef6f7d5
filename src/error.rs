//! Error types for loan validation and loading

use thiserror::Error;

/// Errors raised when loan inputs are rejected or cannot be loaded
#[derive(Debug, Error)]
pub enum LoanError {
    #[error("principal must be a non-negative finite amount, got {0}")]
    InvalidPrincipal(f64),

    #[error("annual interest rate must be a non-negative finite percentage, got {0}")]
    InvalidRate(f64),

    #[error("loan term must be between 1 and 100 years, got {0}")]
    InvalidTerm(u32),

    #[error("extra payment must be a non-negative finite amount, got {0}")]
    InvalidExtraPayment(f64),

    #[error("unknown extra payment mode '{0}' (expected 'one-time' or 'monthly')")]
    UnknownMode(String),

    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<LoanError>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LoanError>;
