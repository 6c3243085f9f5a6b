//! Multi-shot measurement sampling.
//!
//! Sampling simulates repeated projective measurement of the whole register
//! in the computational basis. The state is only read, never collapsed, so
//! every call draws independently from the same Born-rule distribution.
//!
//! Algorithm:
//!   1. Every index with a non-zero amplitude becomes a candidate outcome
//!      with weight `|amplitude|²`. Zero amplitudes are not candidates.
//!   2. Draw `shots` indices from the candidates by weighted choice.
//!      Weights are normalized by the distribution, not by us, so an
//!      unnormalized state skews the frequencies accordingly.
//!   3. Tally hits per label. Candidates start at 0, so every non-zero
//!      amplitude appears in the result even if it was never drawn.

use num_complex::Complex64;
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use tracing::{debug, instrument};

use crate::counts::Counts;
use crate::error::{SimError, SimResult};

/// A candidate measurement outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome<'a> {
    /// Basis label.
    pub label: &'a str,
    /// Born-rule weight `|amplitude|²`.
    pub weight: f64,
}

/// Collect the candidate outcomes of a state: labels with non-zero amplitude.
///
/// `labels[i]` names `amplitudes[i]`; slices of different lengths are
/// rejected with [`SimError::LabelMismatch`].
pub fn candidates<'a>(
    amplitudes: &[Complex64],
    labels: &'a [String],
) -> SimResult<Vec<Outcome<'a>>> {
    if amplitudes.len() != labels.len() {
        return Err(SimError::LabelMismatch {
            amplitudes: amplitudes.len(),
            labels: labels.len(),
        });
    }
    Ok(amplitudes
        .iter()
        .zip(labels)
        .filter(|(amp, _)| **amp != Complex64::new(0.0, 0.0))
        .map(|(amp, label)| Outcome {
            label: label.as_str(),
            weight: amp.norm_sqr(),
        })
        .collect())
}

/// Draws shot tallies from a state vector.
#[derive(Debug, Clone, Copy)]
pub struct Sampler {
    max_shots: usize,
}

impl Sampler {
    /// Create a sampler accepting at most `max_shots` per call.
    pub fn new(max_shots: usize) -> Self {
        Self { max_shots }
    }

    /// Maximum shots per call.
    pub fn max_shots(&self) -> usize {
        self.max_shots
    }

    /// Sample `shots` measurements of the state using `rng`.
    ///
    /// Seeding `rng` makes the tally reproducible:
    /// ```rust,ignore
    /// use rand::SeedableRng;
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let counts = sampler.sample(&amps, &labels, 1000, &mut rng)?;
    /// ```
    #[instrument(skip(self, amplitudes, labels, rng))]
    pub fn sample<R: Rng + ?Sized>(
        &self,
        amplitudes: &[Complex64],
        labels: &[String],
        shots: usize,
        rng: &mut R,
    ) -> SimResult<Counts> {
        if shots > self.max_shots {
            return Err(SimError::InvalidShotCount {
                shots,
                max_shots: self.max_shots,
            });
        }

        let outcomes = candidates(amplitudes, labels)?;
        let mut counts = Counts::new();
        for outcome in &outcomes {
            counts.seed(outcome.label);
        }
        debug!(candidates = outcomes.len(), shots, "sampling register");

        if shots == 0 {
            return Ok(counts);
        }

        let dist = WeightedIndex::<f64>::new(outcomes.iter().map(|o| o.weight))?;
        let mut hits = vec![0usize; outcomes.len()];
        for _ in 0..shots {
            hits[dist.sample(rng)] += 1;
        }
        for (outcome, n) in outcomes.iter().zip(hits) {
            counts.insert(outcome.label, n);
        }
        Ok(counts)
    }
}
