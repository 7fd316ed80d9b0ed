//! Key length estimation from the index of coincidence

use log::{debug, info, trace};
use vigenere::{letter, NormalizedText};

use crate::candidate::{CandidateScore, Goal, Ranked, TopTwo};
use crate::config::{AnalyzerConfig, Verbosity};
use crate::error::{AnalysisError, Result};
use crate::serie::Serie;
use crate::statistics::{average_index_of_coincidence, count_occurrences};

/// Outcome of a key length search.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyLengthEstimate {
    /// The length the analysis proceeds with.
    pub length: usize,
    /// Highest and second-highest average IC.
    pub ranking: Ranked<usize>,
    /// Average IC of every candidate, in ascending length order.
    pub scores: Vec<CandidateScore<usize>>,
}

/// Number of candidate lengths tried for a text of `text_len` symbols:
/// `min(max_key_length, max(1, text_len / min_column_length))`.
pub fn candidate_count(text_len: usize, config: &AnalyzerConfig) -> usize {
    (text_len / config.min_column_length)
        .max(1)
        .min(config.max_key_length)
}

/// Picks the key length whose columns look most like plaintext.
///
/// Lengths `1..=candidate_count` are scored by average index of
/// coincidence and the highest wins, the shortest on ties. With
/// `shorter_key_tolerance` set, the shortest length scoring within that
/// fraction of the best is returned instead.
pub fn guess_key_length(text: &NormalizedText, config: &AnalyzerConfig) -> Result<KeyLengthEstimate> {
    config.validate()?;

    let needed = config.min_text_length();
    if text.len() < needed {
        return Err(AnalysisError::InsufficientData {
            needed,
            available: text.len(),
        });
    }

    let tests = candidate_count(text.len(), config);
    let mut top = TopTwo::new(Goal::Maximize);
    let mut scores = Vec::with_capacity(tests);

    for f in 1..=tests {
        if config.verbosity >= Verbosity::Counts {
            trace_counts(text, f)?;
        }
        let ic = average_index_of_coincidence(text, f)?;
        if config.verbosity >= Verbosity::Candidates {
            debug!("f = {f}; ic = {ic:.5}");
        }
        top.offer(f, ic);
        scores.push(CandidateScore {
            candidate: f,
            score: ic,
        });
    }

    let ranking = top.into_ranked().ok_or(AnalysisError::InsufficientData {
        needed,
        available: text.len(),
    })?;

    let length = match config.shorter_key_tolerance {
        Some(tolerance) => {
            let threshold = ranking.best.score * (1.0 - tolerance);
            scores
                .iter()
                .find(|s| s.score >= threshold)
                .map_or(ranking.best.candidate, |s| s.candidate)
        }
        None => ranking.best.candidate,
    };

    if config.verbosity >= Verbosity::Summary {
        match &ranking.runner_up {
            Some(alt) => info!(
                "Found key length {} ({:.5}, alternative is {}, {:.5})",
                ranking.best.candidate, ranking.best.score, alt.candidate, alt.score
            ),
            None => info!(
                "Found key length {} ({:.5}, no alternative)",
                ranking.best.candidate, ranking.best.score
            ),
        }
        if length != ranking.best.candidate {
            info!("Preferring shorter key length {length}");
        }
    }

    Ok(KeyLengthEstimate {
        length,
        ranking,
        scores,
    })
}

fn trace_counts(text: &NormalizedText, stride: usize) -> Result<()> {
    for serie in Serie::columns(text, stride) {
        let serie = serie?;
        let counts = count_occurrences(&serie)
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(i, n)| format!("{}: {n}", letter(i as u8)))
            .collect::<Vec<_>>()
            .join("; ");
        trace!("f = {stride}, offset {}: {counts}", serie.offset());
    }
    Ok(())
}
