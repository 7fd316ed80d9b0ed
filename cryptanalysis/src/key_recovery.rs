//! Key character recovery by chi-squared frequency matching

use log::{debug, info};
use vigenere::{letter, Key, NormalizedText, ALPHABET_SIZE};

use crate::candidate::{Goal, Ranked, TopTwo};
use crate::config::{AnalyzerConfig, Verbosity};
use crate::error::{AnalysisError, Result};
use crate::frequencies::ReferenceDistribution;
use crate::serie::Serie;
use crate::statistics::chi_squared;

/// A recovered key together with the ranking behind each of its letters.
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveredKey {
    pub key: Key,
    /// Best and runner-up rotation for every key position.
    pub positions: Vec<Ranked<u8>>,
}

impl RecoveredKey {
    /// The key built from every position's runner-up rotation.
    pub fn alternative_key(&self) -> Option<Key> {
        let shifts = self
            .positions
            .iter()
            .map(|p| p.runner_up.map(|r| r.candidate))
            .collect::<Option<Vec<u8>>>()?;
        Key::from_shifts(shifts).ok()
    }
}

/// Finds the Caesar rotation of one column: the one with the lowest chi-squared.
pub fn recover_rotation(serie: &Serie<'_>, reference: &ReferenceDistribution) -> Result<Ranked<u8>> {
    let mut top = TopTwo::new(Goal::Minimize);
    for rotation in 0..ALPHABET_SIZE {
        top.offer(rotation as u8, chi_squared(serie, reference, rotation)?);
    }
    top.into_ranked().ok_or(AnalysisError::InsufficientData {
        needed: 1,
        available: serie.len(),
    })
}

/// Recovers one key character per position `0..key_length`, each independently.
pub fn recover_key(
    text: &NormalizedText,
    key_length: usize,
    reference: &ReferenceDistribution,
    config: &AnalyzerConfig,
) -> Result<RecoveredKey> {
    if key_length == 0 {
        return Err(AnalysisError::InvalidParameter(
            "key length must be at least 1".to_string(),
        ));
    }
    if key_length > text.len() {
        return Err(AnalysisError::InsufficientData {
            needed: key_length,
            available: text.len(),
        });
    }

    let mut positions = Vec::with_capacity(key_length);
    for serie in Serie::columns(text, key_length) {
        let serie = serie?;
        if config.verbosity >= Verbosity::Candidates {
            debug_rotations(&serie, reference)?;
        }
        positions.push(recover_rotation(&serie, reference)?);
    }

    let key = Key::from_shifts(positions.iter().map(|p| p.best.candidate).collect())?;
    let recovered = RecoveredKey { key, positions };

    if config.verbosity >= Verbosity::Summary {
        match recovered.alternative_key() {
            Some(alt) => info!("Found key \"{}\" (alternative \"{alt}\")", recovered.key),
            None => info!("Found key \"{}\"", recovered.key),
        }
    }

    Ok(recovered)
}

fn debug_rotations(serie: &Serie<'_>, reference: &ReferenceDistribution) -> Result<()> {
    let mut line = Vec::with_capacity(ALPHABET_SIZE);
    for rotation in 0..ALPHABET_SIZE {
        let chi = chi_squared(serie, reference, rotation)?;
        line.push(format!("{}: {chi:.2}", letter(rotation as u8)));
    }
    debug!("Substring offset {}: {}", serie.offset(), line.join(" "));
    Ok(())
}
