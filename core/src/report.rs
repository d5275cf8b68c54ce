//! The structured result handed back to the entry point.
//!
//! The core never prints. It returns a report — scenario echo, fitted
//! probability table, EV versus target, simulation tally and realized
//! rate — and leaves rendering to the caller.

use crate::{
    error::CalibResult,
    fitter::{self, FitOutcome, FitterParams},
    rng::UniformSource,
    scenario::Scenario,
    simulator::{self, SimulationReport},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalibrationReport {
    pub scenario: Scenario,
    pub fit: FitOutcome,
    pub simulation: SimulationReport,
}

/// Fit the scenario's probability vector, then verify it empirically.
/// Fitter output feeds the simulator; data flows one way.
pub fn run_scenario(
    scenario: &Scenario,
    params: FitterParams,
    trials: u64,
    rng: &mut impl UniformSource,
) -> CalibResult<CalibrationReport> {
    let fit = fitter::fit(scenario, params)?;
    log::info!(
        "fitted {} prizes: ev={:.6}, target={:.6}, converged={} ({} iterations)",
        scenario.prizes.len(),
        fit.expected_value,
        fit.target_ev,
        fit.converged,
        fit.iterations,
    );

    let simulation = simulator::simulate(scenario, &fit.probabilities, trials, rng)?;
    log::info!(
        "simulated {trials} trials: realized rate {:.6} (target {:.6})",
        simulation.realized_return_rate,
        scenario.return_rate,
    );

    Ok(CalibrationReport {
        scenario: scenario.clone(),
        fit,
        simulation,
    })
}
