//! Distribution fitter — solves for per-prize win probabilities.
//!
//! Projected gradient descent on (Σ pᵢxᵢ − target)² with an ad-hoc
//! simplex projection: clamp every entry to [0,1], then renormalize
//! by the sum. The clamp-then-renormalize order is part of the
//! contract — reordering it changes the numerical trajectory.
//!
//! This is a best-effort heuristic, not a guaranteed-converging
//! optimizer. Large prize values at a coarse learning rate can make
//! the loop oscillate without ever reaching tolerance; callers see
//! that through `FitOutcome::converged` rather than an error.

use crate::{
    error::{CalibError, CalibResult},
    scenario::Scenario,
};
use serde::{Deserialize, Serialize};

/// Fitter hyperparameters. Injectable so callers can probe
/// convergence at different prize scales; the defaults suit catalogs
/// of small payout values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FitterParams {
    pub learning_rate: f64,
    pub epsilon: f64,
    pub max_iterations: u32,
}

impl Default for FitterParams {
    fn default() -> Self {
        Self {
            learning_rate: 1e-3,
            epsilon: 1e-4,
            max_iterations: 10_000,
        }
    }
}

/// The fitted vector plus everything a caller needs to judge it.
/// Non-convergence is a soft condition: the best-effort vector is
/// still returned, and both achieved and target EV are reported so
/// divergence is always visible.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FitOutcome {
    pub probabilities: Vec<f64>,
    pub expected_value: f64,
    pub target_ev: f64,
    pub converged: bool,
    pub iterations: u32,
}

/// Dot product of a probability vector with the prize catalog:
/// the single-play average payout.
pub fn expected_value(probabilities: &[f64], prizes: &[u64]) -> f64 {
    probabilities
        .iter()
        .zip(prizes)
        .map(|(p, &x)| p * x as f64)
        .sum()
}

/// Fit a probability vector over the scenario's catalog whose expected
/// value approximates `scenario.target_ev()`.
///
/// Pure and deterministic: identical inputs produce bit-identical
/// output. The only failure modes are invalid input and a zero-sum
/// renormalization (every entry clamped to zero in one step).
pub fn fit(scenario: &Scenario, params: FitterParams) -> CalibResult<FitOutcome> {
    if scenario.prizes.is_empty() {
        return Err(CalibError::EmptyCatalog);
    }
    if !(scenario.cost > 0.0) {
        return Err(CalibError::NonPositiveCost {
            cost: scenario.cost,
        });
    }

    let target = scenario.target_ev();
    let count = scenario.prizes.len();
    let mut probabilities = vec![1.0 / count as f64; count];

    let mut converged = false;
    let mut iterations = 0u32;

    for step in 0..params.max_iterations {
        let ev = expected_value(&probabilities, &scenario.prizes);
        if (ev - target).abs() < params.epsilon {
            converged = true;
            iterations = step;
            break;
        }

        let error = ev - target;
        for (p, &prize) in probabilities.iter_mut().zip(&scenario.prizes) {
            let gradient = error * prize as f64;
            *p -= params.learning_rate * gradient;
            *p = p.clamp(0.0, 1.0);
        }

        let sum: f64 = probabilities.iter().sum();
        if sum <= 0.0 {
            return Err(CalibError::Degenerate {
                reason: format!(
                    "all probabilities clamped to zero at iteration {step} (sum = {sum})"
                ),
            });
        }
        for p in probabilities.iter_mut() {
            *p /= sum;
        }
        iterations = step + 1;
    }

    let achieved = expected_value(&probabilities, &scenario.prizes);
    if !converged && (achieved - target).abs() < params.epsilon {
        // The last refinement step landed inside tolerance after its
        // early-exit check had already run.
        converged = true;
    }

    if !converged {
        log::warn!(
            "fitter exhausted {} iterations without converging: ev={achieved:.6}, target={target:.6}",
            params.max_iterations
        );
    }

    Ok(FitOutcome {
        probabilities,
        expected_value: achieved,
        target_ev: target,
        converged,
        iterations,
    })
}
