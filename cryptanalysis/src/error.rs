//! Error types for cryptanalysis operations

use thiserror::Error;
use vigenere::CipherError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Insufficient data: need at least {needed} symbols, got {available}")]
    InsufficientData { needed: usize, available: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid reference distribution: {0}")]
    InvalidReference(String),

    #[error(transparent)]
    Cipher(#[from] CipherError),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
