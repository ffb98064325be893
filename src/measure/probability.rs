//! Probability measures over finite outcome spaces

use crate::io::error::{ProbabilityError, Result};
use crate::space::event::Event;
use crate::space::outcome::{OutcomeId, OutcomeSpace};
use rand::Rng;
use tracing::trace;

/// Non-negative weight per outcome of a fixed outcome space
///
/// The number of weights is captured from the space at construction and
/// every weight starts at zero. Weights are not checked when set; use
/// [`ProbabilityMeasure::is_valid`] once they are all in place.
#[derive(Clone, Debug)]
pub struct ProbabilityMeasure<'a> {
    omega: &'a OutcomeSpace,
    weights: Vec<f64>,
}

impl<'a> ProbabilityMeasure<'a> {
    /// Create a measure assigning zero mass to every outcome
    pub fn new(omega: &'a OutcomeSpace) -> Self {
        Self {
            omega,
            weights: vec![0.0; omega.len()],
        }
    }

    /// Create the measure giving every outcome equal mass
    pub fn uniform(omega: &'a OutcomeSpace) -> Self {
        let n = omega.len();
        let mass = if n == 0 { 0.0 } else { 1.0 / n as f64 };
        Self {
            omega,
            weights: vec![mass; n],
        }
    }

    /// Create a measure from weights listed in identifier order
    ///
    /// Missing trailing weights stay at zero.
    ///
    /// # Errors
    ///
    /// Returns `OutcomeOutOfRange` if more weights than outcomes are given
    pub fn from_weights(omega: &'a OutcomeSpace, weights: &[f64]) -> Result<Self> {
        let mut measure = Self::new(omega);
        for (id, &p) in weights.iter().enumerate() {
            measure.set_atomic_probability(id, p)?;
        }
        Ok(measure)
    }

    /// Space the measure was built over
    pub const fn outcome_space(&self) -> &'a OutcomeSpace {
        self.omega
    }

    /// Number of outcomes carrying a weight
    pub const fn size(&self) -> usize {
        self.weights.len()
    }

    /// Overwrite the mass of a single outcome
    ///
    /// # Errors
    ///
    /// Returns `OutcomeOutOfRange` if `id` is outside the captured space
    pub fn set_atomic_probability(&mut self, id: OutcomeId, p: f64) -> Result<()> {
        let space_size = self.weights.len();
        let weight = self
            .weights
            .get_mut(id)
            .ok_or(ProbabilityError::OutcomeOutOfRange { id, space_size })?;
        *weight = p;
        Ok(())
    }

    /// Mass of a single outcome; zero outside the space
    pub fn atomic_probability(&self, id: OutcomeId) -> f64 {
        self.weights.get(id).copied().unwrap_or(0.0)
    }

    /// Sum of all weights
    pub fn total_mass(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Test the measure axioms within tolerance `eps`
    ///
    /// Every weight must be at least `-eps` and the weights must sum to one
    /// within `eps`.
    pub fn is_valid(&self, eps: f64) -> bool {
        if self.weights.len() != self.omega.len() {
            return false;
        }
        if let Some(id) = self.weights.iter().position(|&p| p < -eps) {
            trace!(id, "negative atomic probability");
            return false;
        }
        (self.total_mass() - 1.0).abs() <= eps
    }

    /// Mass of an event
    ///
    /// Only outcomes below both the event length and the space size count.
    pub fn probability(&self, event: &Event) -> f64 {
        let n = event.size().min(self.omega.len());
        event
            .outcomes()
            .take_while(|&id| id < n)
            .map(|id| self.atomic_probability(id))
            .sum()
    }

    /// Mass of `event` relative to `given`
    ///
    /// Returns `None` when `given` has zero mass.
    pub fn conditional_probability(&self, event: &Event, given: &Event) -> Option<f64> {
        let denominator = self.probability(given);
        if denominator <= 0.0 {
            return None;
        }
        Some(self.probability(&Event::intersect(event, given)) / denominator)
    }

    /// Draw one outcome with chance proportional to its weight
    ///
    /// Negative weights are treated as zero. Returns `None` when no outcome
    /// has positive weight.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<OutcomeId> {
        let total: f64 = self.weights.iter().map(|&p| p.max(0.0)).sum();
        if total <= 0.0 || !total.is_finite() {
            return None;
        }

        let target = rng.random::<f64>() * total;
        let mut cumulative = 0.0;
        let mut last_positive = None;
        for (id, &p) in self.weights.iter().enumerate() {
            if p <= 0.0 {
                continue;
            }
            cumulative += p;
            last_positive = Some(id);
            if target < cumulative {
                return Some(id);
            }
        }
        // Rounding can leave target just above the final cumulative sum
        last_positive
    }
}
