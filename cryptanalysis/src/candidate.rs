//! Best and runner-up selection over scored candidates
//!
//! Candidate sets are small (at most 26 rotations or a handful of key
//! lengths), so a single linear scan keeping the two best entries replaces a
//! priority queue.

/// A candidate (key length or rotation) with its fitness score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateScore<T> {
    pub candidate: T,
    pub score: f64,
}

/// Direction in which a score improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    /// Higher is better (index of coincidence)
    Maximize,
    /// Lower is better (chi-squared)
    Minimize,
}

impl Goal {
    /// True when `a` is strictly better than `b`.
    #[inline]
    fn prefers(self, a: f64, b: f64) -> bool {
        match self {
            Goal::Maximize => a > b,
            Goal::Minimize => a < b,
        }
    }
}

/// The winner of a scan and the candidate that came closest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<T> {
    pub best: CandidateScore<T>,
    pub runner_up: Option<CandidateScore<T>>,
}

/// Tracks the two best candidates seen so far.
///
/// Ties keep the earlier candidate, so results follow generation order.
#[derive(Debug, Clone)]
pub struct TopTwo<T> {
    goal: Goal,
    best: Option<CandidateScore<T>>,
    runner_up: Option<CandidateScore<T>>,
}

impl<T> TopTwo<T> {
    pub fn new(goal: Goal) -> Self {
        Self {
            goal,
            best: None,
            runner_up: None,
        }
    }

    pub fn offer(&mut self, candidate: T, score: f64) {
        let entry = CandidateScore { candidate, score };

        match self.best.take() {
            None => self.best = Some(entry),
            Some(best) if self.goal.prefers(score, best.score) => {
                self.runner_up = Some(best);
                self.best = Some(entry);
            }
            Some(best) => {
                self.best = Some(best);
                let beats_runner_up = self
                    .runner_up
                    .as_ref()
                    .map_or(true, |r| self.goal.prefers(score, r.score));
                if beats_runner_up {
                    self.runner_up = Some(entry);
                }
            }
        }
    }

    pub fn best(&self) -> Option<&CandidateScore<T>> {
        self.best.as_ref()
    }

    pub fn runner_up(&self) -> Option<&CandidateScore<T>> {
        self.runner_up.as_ref()
    }

    /// `None` if nothing was offered.
    pub fn into_ranked(self) -> Option<Ranked<T>> {
        let runner_up = self.runner_up;
        self.best.map(|best| Ranked { best, runner_up })
    }
}
