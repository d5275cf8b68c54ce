//! Outcome simulator — Monte Carlo verification of a fitted vector.
//!
//! Each trial draws one uniform value and resolves it against the
//! cumulative probability walk over the catalog, in catalog order
//! (inverse-CDF sampling). The simulator is a black-box verifier: it
//! runs whatever vector it is given, well-formed or not, and reports
//! what actually happened.

use crate::{
    error::{CalibError, CalibResult},
    rng::UniformSource,
    scenario::Scenario,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated results of one simulation run.
///
/// `missed_trials` counts draws the cumulative walk never reached —
/// possible when the vector sums short of 1 (or of the drawn value,
/// through floating drift). Those trials pay out nothing but still
/// cost a play: the house keeps the stake. The invariant
/// `Σ tally + missed_trials == trials` holds unconditionally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationReport {
    pub trials: u64,
    pub tally: BTreeMap<u64, u64>,
    pub missed_trials: u64,
    pub total_spent: f64,
    pub total_payout: f64,
    pub realized_return_rate: f64,
}

/// Run `trials` independent plays of the scenario under the given
/// probability vector, drawing from `rng`.
///
/// Validation fails fast: zero trials and a vector/catalog length
/// mismatch are rejected before any draw. A vector that does not sum
/// to ≈1 still runs — the realized rate simply diverges, which is the
/// point of an independent verifier.
pub fn simulate(
    scenario: &Scenario,
    probabilities: &[f64],
    trials: u64,
    rng: &mut impl UniformSource,
) -> CalibResult<SimulationReport> {
    if trials == 0 {
        return Err(CalibError::NonPositiveTrials);
    }
    if probabilities.len() != scenario.prizes.len() {
        return Err(CalibError::LengthMismatch {
            prizes: scenario.prizes.len(),
            probabilities: probabilities.len(),
        });
    }

    let mut tally: BTreeMap<u64, u64> = scenario.prizes.iter().map(|&p| (p, 0)).collect();
    let mut total_spent = 0.0;
    let mut total_payout = 0.0;
    let mut missed_trials = 0u64;

    for _ in 0..trials {
        total_spent += scenario.cost;

        let u = rng.next_uniform();
        let mut cumulative = 0.0;
        let mut won = None;
        for (&prize, &probability) in scenario.prizes.iter().zip(probabilities) {
            cumulative += probability;
            if u <= cumulative {
                won = Some(prize);
                break;
            }
        }

        match won {
            Some(prize) => {
                total_payout += prize as f64;
                // Catalog entries are pre-seeded, but duplicate prize
                // values share one tally bucket.
                *tally.entry(prize).or_insert(0) += 1;
            }
            None => missed_trials += 1,
        }
    }

    if missed_trials > 0 {
        log::warn!(
            "{missed_trials} of {trials} trials resolved to no prize \
             (cumulative probability fell short of the draw)"
        );
    }

    Ok(SimulationReport {
        trials,
        tally,
        missed_trials,
        total_spent,
        total_payout,
        realized_return_rate: total_payout / total_spent,
    })
}
