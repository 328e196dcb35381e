use super::Candidate;

/// Which leader slot a candidate was recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Rank {
    Alpha,
    Beta,
    Delta,
}

#[derive(Debug, Clone)]
struct Slot {
    score: f64,
    candidate: Option<Candidate>,
}

impl Slot {
    fn empty() -> Self {
        Self {
            score: f64::INFINITY,
            candidate: None,
        }
    }

    fn coordinates_or<'a>(&'a self, fallback: &'a [f64]) -> &'a [f64] {
        self.candidate
            .as_ref()
            .map_or(fallback, Candidate::coordinates)
    }

    fn record(&mut self, score: f64, candidate: &Candidate) {
        self.score = score;
        self.candidate = Some(candidate.clone());
    }
}

/// The alpha, beta, and delta leaders of one search run.
///
/// Scores are goal-transformed, so smaller is always better, and start at
/// `+inf` so the first comparable score fills alpha. Each slot holds its own
/// copy of the candidate; the population keeps moving after a leader is
/// recorded.
#[derive(Debug, Clone)]
pub(super) struct Leaders {
    alpha: Slot,
    beta: Slot,
    delta: Slot,
}

impl Leaders {
    pub(super) fn new() -> Self {
        Self {
            alpha: Slot::empty(),
            beta: Slot::empty(),
            delta: Slot::empty(),
        }
    }

    /// Offers one scored candidate to the leader slots.
    ///
    /// Candidates must be offered one at a time in population order. The
    /// guards are strict: a score equal to the alpha or beta score fills no
    /// slot, and a slot filled earlier in the scan is not displaced by a later
    /// candidate that only beats a lower slot. The result is not necessarily
    /// the true top three of the population.
    pub(super) fn consider(&mut self, score: f64, candidate: &Candidate) -> Option<Rank> {
        let alpha = self.alpha.score;
        let beta = self.beta.score;

        if score < alpha {
            self.alpha.record(score, candidate);
            Some(Rank::Alpha)
        } else if score < beta && score > alpha {
            self.beta.record(score, candidate);
            Some(Rank::Beta)
        } else if score < self.delta.score && score > alpha && score > beta {
            self.delta.record(score, candidate);
            Some(Rank::Delta)
        } else {
            None
        }
    }

    /// Returns the alpha candidate and its transformed score.
    pub(super) fn alpha(&self) -> Option<(&Candidate, f64)> {
        self.alpha
            .candidate
            .as_ref()
            .map(|candidate| (candidate, self.alpha.score))
    }

    /// Returns the alpha, beta, and delta positions that steer the pack.
    ///
    /// A slot that has never been filled is stood in for by alpha.
    pub(super) fn guides(&self) -> Option<[&[f64]; 3]> {
        let alpha = self.alpha.candidate.as_ref()?.coordinates();
        Some([
            alpha,
            self.beta.coordinates_or(alpha),
            self.delta.coordinates_or(alpha),
        ])
    }
}
