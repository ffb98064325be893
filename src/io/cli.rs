//! Command-line interface for building and inspecting finite probability spaces

use crate::algebra::sigma::SigmaAlgebra;
use crate::io::configuration::{
    DEFAULT_SAMPLE_COUNT, DEFAULT_SEED, DEFAULT_TOLERANCE, LIST_SEPARATOR,
};
use crate::io::error::{ProbabilityError, Result, invalid_parameter};
use crate::measure::probability::ProbabilityMeasure;
use crate::measure::variable::DiscreteRandomVariable;
use crate::space::event::Event;
use crate::space::outcome::OutcomeSpace;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt::Write;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "sigmaspace")]
#[command(
    author,
    version,
    about = "Explore finite probability spaces, measures and sigma-algebras"
)]
/// Command-line arguments shared by every subcommand
pub struct Cli {
    /// Outcome labels in identifier order; labels are trimmed, blank ones
    /// skipped and repeated ones merged
    #[arg(short, long, required = true, value_delimiter = LIST_SEPARATOR)]
    pub outcomes: Vec<String>,

    /// Tolerance used when validating a measure
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Emit debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Operations offered by the command-line host
///
/// Events are written as comma-separated outcome labels; an empty string is
/// the empty event.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the smallest sigma-algebra containing the given events
    Generate {
        /// Seed event, may be repeated
        #[arg(short, long = "generator")]
        generators: Vec<String>,
    },

    /// Check whether a family of events is a sigma-algebra
    Check {
        /// Member of the family, may be repeated
        #[arg(short, long = "event")]
        events: Vec<String>,
    },

    /// Compute the probability of an event
    Probability {
        /// Atomic probabilities in outcome order
        #[arg(short, long, value_delimiter = LIST_SEPARATOR)]
        weights: Vec<f64>,

        /// Event to measure
        #[arg(short, long)]
        event: String,
    },

    /// Compute the expectation and variance of a random variable
    Expect {
        /// Atomic probabilities in outcome order
        #[arg(short, long, value_delimiter = LIST_SEPARATOR)]
        weights: Vec<f64>,

        /// Value of the variable at each outcome, in outcome order
        #[arg(short = 'x', long, value_delimiter = LIST_SEPARATOR, allow_hyphen_values = true)]
        values: Vec<f64>,
    },

    /// Draw outcomes from a measure and report empirical frequencies
    Sample {
        /// Atomic probabilities in outcome order
        #[arg(short, long, value_delimiter = LIST_SEPARATOR)]
        weights: Vec<f64>,

        /// Number of draws
        #[arg(short, long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        count: usize,

        /// Random seed for reproducible draws
        #[arg(short, long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
}

impl Cli {
    /// Execute the selected command and print its report
    ///
    /// # Errors
    ///
    /// Returns an error if an argument names an unknown outcome, lists too
    /// many weights, or asks for an algebra with too many atoms
    // Allow print for the command's result on stdout
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        let report = self.render()?;
        print!("{report}");
        Ok(())
    }

    /// Execute the selected command and return its report
    ///
    /// # Errors
    ///
    /// Same conditions as [`Cli::run`]
    pub fn render(&self) -> Result<String> {
        let omega = OutcomeSpace::from_labels(
            self.outcomes
                .iter()
                .map(String::as_str)
                .map(str::trim)
                .filter(|label| !label.is_empty()),
        );
        info!(outcomes = omega.len(), "outcome space ready");

        match &self.command {
            Command::Generate { generators } => render_generate(&omega, generators),
            Command::Check { events } => render_check(&omega, events),
            Command::Probability { weights, event } => {
                let measure = self.measure(&omega, weights)?;
                let event = parse_event(&omega, event)?;
                Ok(format!(
                    "P({}) = {}\n",
                    format_event(&omega, &event),
                    measure.probability(&event)
                ))
            }
            Command::Expect { weights, values } => {
                let measure = self.measure(&omega, weights)?;
                let variable = DiscreteRandomVariable::new(&measure, values.clone());
                Ok(format!(
                    "E[X] = {}\nVar[X] = {}\n",
                    variable.expected_value()?,
                    variable.variance()?
                ))
            }
            Command::Sample {
                weights,
                count,
                seed,
            } => {
                let measure = self.measure(&omega, weights)?;
                render_sample(&omega, &measure, *count, *seed)
            }
        }
    }

    fn measure<'a>(
        &self,
        omega: &'a OutcomeSpace,
        weights: &[f64],
    ) -> Result<ProbabilityMeasure<'a>> {
        let measure = ProbabilityMeasure::from_weights(omega, weights)?;
        if !measure.is_valid(self.tolerance) {
            warn!(
                total = measure.total_mass(),
                tolerance = self.tolerance,
                "weights do not form a probability measure"
            );
        }
        Ok(measure)
    }
}

/// Resolve a comma-separated list of labels into an event over `omega`
///
/// Blank items are skipped, so an empty string is the empty event.
///
/// # Errors
///
/// Returns `UnknownOutcome` for a label that is not registered
pub fn parse_event(omega: &OutcomeSpace, text: &str) -> Result<Event> {
    let ids = text
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(|label| {
            omega
                .id_of(label)
                .ok_or_else(|| ProbabilityError::UnknownOutcome {
                    label: label.to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Event::from_outcomes(omega.len(), ids))
}

/// Write an event as a braced list of its outcome labels
pub fn format_event(omega: &OutcomeSpace, event: &Event) -> String {
    let labels: Vec<&str> = event
        .outcomes()
        .map(|id| omega.label(id).unwrap_or("?"))
        .collect();
    format!("{{{}}}", labels.join(", "))
}

fn parse_events(omega: &OutcomeSpace, texts: &[String]) -> Result<Vec<Event>> {
    texts.iter().map(|text| parse_event(omega, text)).collect()
}

fn render_generate(omega: &OutcomeSpace, generators: &[String]) -> Result<String> {
    let generators = parse_events(omega, generators)?;
    let algebra = SigmaAlgebra::generate(omega, &generators)?;
    let atoms = algebra.atoms();

    let mut report = String::new();
    let _ = writeln!(report, "atoms ({}):", atoms.len());
    for atom in &atoms {
        let _ = writeln!(report, "  {}", format_event(omega, atom));
    }
    let _ = writeln!(report, "events ({}):", algebra.len());
    for event in algebra.events() {
        let _ = writeln!(report, "  {}", format_event(omega, event));
    }
    let _ = writeln!(
        report,
        "sigma-algebra: {}",
        if algebra.is_sigma_algebra() { "yes" } else { "no" }
    );
    Ok(report)
}

fn render_check(omega: &OutcomeSpace, events: &[String]) -> Result<String> {
    let family = SigmaAlgebra::new(omega, parse_events(omega, events)?);
    Ok(match family.check() {
        None => "sigma-algebra: yes\n".to_string(),
        Some(violation) => format!("sigma-algebra: no ({violation})\n"),
    })
}

fn render_sample(
    omega: &OutcomeSpace,
    measure: &ProbabilityMeasure<'_>,
    count: usize,
    seed: u64,
) -> Result<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tallies = vec![0_usize; omega.len()];
    for _ in 0..count {
        let id = measure.sample(&mut rng).ok_or_else(|| {
            invalid_parameter("weights", &measure.total_mass(), &"no outcome has positive weight")
        })?;
        if let Some(tally) = tallies.get_mut(id) {
            *tally += 1;
        }
    }

    let mut report = String::new();
    let _ = writeln!(report, "outcome\tprobability\tfrequency");
    for (id, tally) in tallies.iter().enumerate() {
        let frequency = if count == 0 {
            0.0
        } else {
            *tally as f64 / count as f64
        };
        let _ = writeln!(
            report,
            "{}\t{}\t{frequency}",
            omega.label(id).unwrap_or("?"),
            measure.atomic_probability(id)
        );
    }
    Ok(report)
}
