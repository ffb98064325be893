//! Real-valued random variables on finite outcome spaces

use crate::algebra::sigma::SigmaAlgebra;
use crate::io::error::{ProbabilityError, Result};
use crate::measure::probability::ProbabilityMeasure;
use crate::space::event::Event;
use crate::space::outcome::{OutcomeId, OutcomeSpace};
use std::collections::HashMap;

/// Real value per outcome, paired with the measure that weighs the outcomes
///
/// The value vector may be shorter than the space. Outcomes past its end have
/// no value; [`DiscreteRandomVariable::expected_value`] refuses such partial
/// variables while [`DiscreteRandomVariable::partial_expected_value`] simply
/// leaves them out.
#[derive(Clone, Debug)]
pub struct DiscreteRandomVariable<'a> {
    omega: &'a OutcomeSpace,
    measure: &'a ProbabilityMeasure<'a>,
    values: Vec<f64>,
}

impl<'a> DiscreteRandomVariable<'a> {
    /// Create a variable from values listed in identifier order
    ///
    /// The variable lives on the space the measure was built over.
    pub const fn new(measure: &'a ProbabilityMeasure<'a>, values: Vec<f64>) -> Self {
        Self {
            omega: measure.outcome_space(),
            measure,
            values,
        }
    }

    /// Space the variable is defined on
    pub const fn outcome_space(&self) -> &'a OutcomeSpace {
        self.omega
    }

    /// Value taken at outcome `id`, if one was given
    pub fn value(&self, id: OutcomeId) -> Option<f64> {
        self.values.get(id).copied()
    }

    /// Measure weighing the outcomes
    pub const fn measure(&self) -> &'a ProbabilityMeasure<'a> {
        self.measure
    }

    /// Test if every outcome of the space has a value
    pub fn covers_space(&self) -> bool {
        self.values.len() >= self.omega.len()
    }

    /// Expectation over the outcomes that have a value
    ///
    /// Outcomes without a value contribute nothing.
    pub fn partial_expected_value(&self) -> f64 {
        self.weighted_sum(|x| x)
    }

    /// Expectation `E[X]`
    ///
    /// # Errors
    ///
    /// Returns `PartialCoverage` if some outcome of the space has no value
    pub fn expected_value(&self) -> Result<f64> {
        self.require_coverage()?;
        Ok(self.weighted_sum(|x| x))
    }

    /// Variance `E[(X - E[X])^2]`
    ///
    /// # Errors
    ///
    /// Returns `PartialCoverage` if some outcome of the space has no value
    pub fn variance(&self) -> Result<f64> {
        let mean = self.expected_value()?;
        Ok(self.weighted_sum(|x| (x - mean).powi(2)))
    }

    /// Test if every level set `{X = x}` belongs to `algebra`
    ///
    /// # Errors
    ///
    /// Returns `PartialCoverage` if some outcome of the space has no value
    pub fn is_measurable(&self, algebra: &SigmaAlgebra<'_>) -> Result<bool> {
        self.require_coverage()?;
        Ok(self
            .level_sets()
            .iter()
            .all(|level_set| algebra.contains(level_set)))
    }

    /// Events `{X = x}` for each distinct value `x`, in order of first appearance
    pub fn level_sets(&self) -> Vec<Event> {
        let n = self.omega.len();
        let mut slots: HashMap<u64, usize> = HashMap::new();
        let mut members: Vec<Vec<OutcomeId>> = Vec::new();

        for (id, &value) in self.values.iter().enumerate().take(n) {
            // -0.0 and 0.0 are the same value
            let key = if value == 0.0 { 0.0_f64 } else { value }.to_bits();
            let slot = *slots.entry(key).or_insert_with(|| {
                members.push(Vec::new());
                members.len() - 1
            });
            if let Some(ids) = members.get_mut(slot) {
                ids.push(id);
            }
        }

        members
            .into_iter()
            .map(|ids| Event::from_outcomes(n, ids))
            .collect()
    }

    fn require_coverage(&self) -> Result<()> {
        if self.covers_space() {
            Ok(())
        } else {
            Err(ProbabilityError::PartialCoverage {
                defined: self.values.len(),
                space_size: self.omega.len(),
            })
        }
    }

    fn weighted_sum(&self, f: impl Fn(f64) -> f64) -> f64 {
        self.values
            .iter()
            .enumerate()
            .take(self.omega.len())
            .map(|(id, &x)| f(x) * self.measure.atomic_probability(id))
            .sum()
    }
}
