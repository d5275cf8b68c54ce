//! Scenario parameters — the immutable inputs to one calibration run.

use crate::error::{CalibError, CalibResult};
use serde::{Deserialize, Serialize};

/// One calibration scenario: cost per play, the ordered prize catalog,
/// and the long-run fraction of stake the game should return.
///
/// Catalog order is load-bearing: it defines the stable index shared
/// with the fitted probability vector and the sampling walk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub cost: f64,
    pub prizes: Vec<u64>,
    pub return_rate: f64,
}

impl Scenario {
    /// Validate and construct. Fails fast on an empty catalog or a
    /// non-positive cost — no partial results downstream.
    pub fn new(cost: f64, prizes: Vec<u64>, return_rate: f64) -> CalibResult<Self> {
        if prizes.is_empty() {
            return Err(CalibError::EmptyCatalog);
        }
        if !(cost > 0.0) {
            return Err(CalibError::NonPositiveCost { cost });
        }
        Ok(Self {
            cost,
            prizes,
            return_rate,
        })
    }

    /// The expected value one play should approach: cost × return rate.
    pub fn target_ev(&self) -> f64 {
        self.cost * self.return_rate
    }
}
