//! Vigenère keys

use std::fmt;
use std::str::FromStr;

use crate::alphabet::{index_of, letter, ALPHABET_SIZE};
use crate::error::{CipherError, Result};

/// A non-empty sequence of shifts, one alphabet index per key letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key(Vec<u8>);

impl Key {
    /// Builds a key from shifts in `0..26`.
    pub fn from_shifts(shifts: Vec<u8>) -> Result<Self> {
        if shifts.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        if let Some(&bad) = shifts.iter().find(|&&s| s as usize >= ALPHABET_SIZE) {
            return Err(CipherError::InvalidSymbol(bad));
        }
        Ok(Self(shifts))
    }

    /// Shift of every key letter, `A` being 0.
    pub fn shifts(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shift applied at position `i` of the keystream.
    #[inline]
    pub fn shift_at(&self, i: usize) -> u8 {
        self.0[i % self.0.len()]
    }
}

impl FromStr for Key {
    type Err = CipherError;

    /// Parses a key the same way text is normalized: letters are case-folded,
    /// everything else is ignored.
    fn from_str(s: &str) -> Result<Self> {
        Self::from_shifts(s.chars().filter_map(index_of).collect())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &s in &self.0 {
            write!(f, "{}", letter(s))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key() {
        let key: Key = "my key".parse().unwrap();
        assert_eq!(key.shifts(), &[12, 24, 10, 4, 24]);
        assert_eq!(key.to_string(), "MYKEY");
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!("".parse::<Key>(), Err(CipherError::EmptyKey));
        assert_eq!("42!".parse::<Key>(), Err(CipherError::EmptyKey));
        assert_eq!(Key::from_shifts(vec![]), Err(CipherError::EmptyKey));
    }

    #[test]
    fn test_shift_out_of_range() {
        assert_eq!(
            Key::from_shifts(vec![1, 26]),
            Err(CipherError::InvalidSymbol(26))
        );
    }

    #[test]
    fn test_shift_at_cycles() {
        let key: Key = "KEY".parse().unwrap();
        assert_eq!(key.shift_at(0), 10);
        assert_eq!(key.shift_at(3), 10);
        assert_eq!(key.shift_at(5), 24);
    }
}
