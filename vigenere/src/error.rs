//! Error types for the Vigenère cipher

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Key must contain at least one alphabetic character")]
    EmptyKey,

    #[error("Symbol {0} is outside the 26-letter alphabet")]
    InvalidSymbol(u8),
}

pub type Result<T> = std::result::Result<T, CipherError>;
