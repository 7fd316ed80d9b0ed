//! Letter statistics over strided views
//!
//! Index of coincidence separates monoalphabetic subsequences from
//! polyalphabetic ones; chi-squared measures how well a subsequence matches a
//! reference language once a Caesar rotation is undone.

use vigenere::{NormalizedText, ALPHABET_SIZE};

use crate::error::{AnalysisError, Result};
use crate::frequencies::ReferenceDistribution;
use crate::serie::Serie;

/// Occurrence count of each alphabet symbol.
pub type Occurrences = [usize; ALPHABET_SIZE];

/// Counts how many times each symbol appears in the view.
pub fn count_occurrences(serie: &Serie<'_>) -> Occurrences {
    let mut occurrences: Occurrences = [0; ALPHABET_SIZE];
    for symbol in serie.iter() {
        occurrences[symbol as usize] += 1;
    }
    occurrences
}

/// `Σ n_i (n_i - 1) / (N (N - 1))` over the view.
///
/// Needs at least two symbols.
pub fn index_of_coincidence(serie: &Serie<'_>) -> Result<f64> {
    let total = serie.len();
    if total < 2 {
        return Err(AnalysisError::InsufficientData {
            needed: 2,
            available: total,
        });
    }

    let occurrences = count_occurrences(serie);
    let numerator: usize = occurrences
        .iter()
        .map(|&n| n * n.saturating_sub(1))
        .sum();

    Ok(numerator as f64 / (total * (total - 1)) as f64)
}

/// Mean index of coincidence of the `stride` columns of `text`.
///
/// Peaks when `stride` is the key length (or a multiple of it) because every
/// column is then a single Caesar shift of plaintext.
pub fn average_index_of_coincidence(text: &NormalizedText, stride: usize) -> Result<f64> {
    if stride == 0 {
        return Err(AnalysisError::InvalidParameter(
            "stride must be at least 1".to_string(),
        ));
    }

    let mut sum = 0.0;
    for serie in Serie::columns(text, stride) {
        sum += index_of_coincidence(&serie?)?;
    }
    Ok(sum / stride as f64)
}

/// Chi-squared distance between the view and the reference rotated by `rotation`.
///
/// `rotation` is the shift that turned plaintext into ciphertext, so the
/// expected count of ciphertext symbol `i` is
/// `N * reference[(i - rotation) mod 26]`. A bucket expected to be empty
/// contributes nothing when it is empty and makes the fit impossible
/// (`+inf`) when it is not.
pub fn chi_squared(
    serie: &Serie<'_>,
    reference: &ReferenceDistribution,
    rotation: usize,
) -> Result<f64> {
    let total = serie.len();
    if total == 0 {
        return Err(AnalysisError::InsufficientData {
            needed: 1,
            available: 0,
        });
    }

    let occurrences = count_occurrences(serie);
    let rotation = rotation % ALPHABET_SIZE;

    let mut chi = 0.0;
    for (symbol, &observed) in occurrences.iter().enumerate() {
        let plain = (symbol + ALPHABET_SIZE - rotation) % ALPHABET_SIZE;
        let expected = total as f64 * reference.frequency(plain);

        if expected > 0.0 {
            let diff = observed as f64 - expected;
            chi += diff * diff / expected;
        } else if observed > 0 {
            return Ok(f64::INFINITY);
        }
    }

    Ok(chi)
}
