//! payout-core — prize payout probability calibration.
//!
//! Two components, composed linearly:
//!   1. Fitter:    (cost, prizes, return rate) → probability vector
//!                 whose expected value approximates cost × rate.
//!   2. Simulator: draws independent trials from that vector and
//!                 tabulates win counts and the realized return rate.
//!
//! RULES:
//!   - Fitting is pure and deterministic — no randomness, no I/O.
//!   - All simulator randomness flows through the UniformSource
//!     capability; nothing here touches a platform RNG.
//!   - The core returns structured reports and never prints.

pub mod error;
pub mod fitter;
pub mod report;
pub mod rng;
pub mod scenario;
pub mod simulator;

pub use error::{CalibError, CalibResult};
pub use fitter::{fit, expected_value, FitOutcome, FitterParams};
pub use report::{run_scenario, CalibrationReport};
pub use rng::{DrawRng, UniformSource};
pub use scenario::Scenario;
pub use simulator::{simulate, SimulationReport};
