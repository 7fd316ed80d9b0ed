//! Reference letter distributions

use vigenere::{letter, ALPHABET_SIZE};

use crate::error::{AnalysisError, Result};

/// English letter frequencies for frequency analysis
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_SIZE] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228,
    0.02015, 0.06094, 0.06966, 0.00153, 0.00772, 0.04025,
    0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987,
    0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
    0.01974, 0.00074,
];

/// French letter frequencies for frequency analysis
pub const FRENCH_FREQUENCIES: [f64; ALPHABET_SIZE] = [
    0.0811, 0.0081, 0.0338, 0.0428, 0.1769, 0.0113,
    0.0119, 0.0074, 0.0724, 0.0018, 0.0002, 0.0599,
    0.0229, 0.0768, 0.0520, 0.0292, 0.0083, 0.0643,
    0.0887, 0.0744, 0.0523, 0.0128, 0.0006, 0.0053,
    0.0026, 0.0012,
];

/// German letter frequencies for frequency analysis
pub const GERMAN_FREQUENCIES: [f64; ALPHABET_SIZE] = [
    0.0558, 0.0196, 0.0316, 0.0498, 0.1693, 0.0149,
    0.0302, 0.0498, 0.0802, 0.0024, 0.0132, 0.0360,
    0.0255, 0.1053, 0.0224, 0.0067, 0.0002, 0.0689,
    0.0642, 0.0579, 0.0383, 0.0084, 0.0178, 0.0005,
    0.0005, 0.0121,
];

/// Expected relative letter frequencies of a plaintext language.
///
/// Entries are non-negative and finite with a positive total. They are not
/// required to sum exactly to 1: published tables are rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceDistribution([f64; ALPHABET_SIZE]);

impl ReferenceDistribution {
    pub fn new(frequencies: [f64; ALPHABET_SIZE]) -> Result<Self> {
        for (i, &f) in frequencies.iter().enumerate() {
            if !f.is_finite() || f < 0.0 {
                return Err(AnalysisError::InvalidReference(format!(
                    "frequency of '{}' is {f}",
                    letter(i as u8)
                )));
            }
        }
        if frequencies.iter().sum::<f64>() <= 0.0 {
            return Err(AnalysisError::InvalidReference(
                "frequencies sum to zero".to_string(),
            ));
        }
        Ok(Self(frequencies))
    }

    pub fn english() -> Self {
        Self(ENGLISH_FREQUENCIES)
    }

    pub fn french() -> Self {
        Self(FRENCH_FREQUENCIES)
    }

    pub fn german() -> Self {
        Self(GERMAN_FREQUENCIES)
    }

    /// Expected frequency of `symbol` in plaintext.
    #[inline]
    pub fn frequency(&self, symbol: usize) -> f64 {
        self.0[symbol]
    }
}
