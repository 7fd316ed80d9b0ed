//! The 26-letter alphabet and the normalizer
//!
//! Letters `A..=Z` map to the indices `0..26`; all cipher and statistics
//! arithmetic happens on those indices modulo 26.

use std::fmt;

use crate::error::{CipherError, Result};

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// Returns the alphabet index of an ASCII letter, folding lowercase to uppercase.
///
/// Any other character yields `None`.
pub fn index_of(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Returns the uppercase letter for an alphabet index, reduced modulo 26.
#[inline]
pub fn letter(index: u8) -> char {
    (b'A' + index % ALPHABET_SIZE as u8) as char
}

/// Text reduced to its alphabetic symbols, stored as alphabet indices.
///
/// Order is preserved and the length is exactly the number of ASCII letters
/// in the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedText(Vec<u8>);

impl NormalizedText {
    /// Strips everything that is not an ASCII letter and case-folds the rest.
    ///
    /// Total function: never fails, unknown characters are simply dropped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vigenere::NormalizedText;
    ///
    /// let text = NormalizedText::normalize("Hello, World!");
    /// assert_eq!(text.to_string(), "HELLOWORLD");
    /// ```
    pub fn normalize(raw: &str) -> Self {
        Self(raw.chars().filter_map(index_of).collect())
    }

    /// Wraps symbols that are already alphabet indices.
    pub fn from_indices(indices: Vec<u8>) -> Result<Self> {
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= ALPHABET_SIZE) {
            return Err(CipherError::InvalidSymbol(bad));
        }
        Ok(Self(indices))
    }

    /// Wraps indices produced by modulo-26 arithmetic.
    pub(crate) fn from_valid(indices: Vec<u8>) -> Self {
        debug_assert!(indices.iter().all(|&i| (i as usize) < ALPHABET_SIZE));
        Self(indices)
    }

    /// The alphabet indices, in text order.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of letters kept from the raw input.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &i in &self.0 {
            write!(f, "{}", letter(i))?;
        }
        Ok(())
    }
}

impl AsRef<[u8]> for NormalizedText {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
