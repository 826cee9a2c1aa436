/*
    reliability-bench, structural reliability benchmark problems
    Copyright (C) 2018-onwards Christopher Rabotin <christopher.rabotin@gmail.com>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use crate::errors::InvalidSimulationSnafu;
use crate::ReliabilityError;
use serde_derive::{Deserialize, Serialize};
use snafu::ensure;
use statrs::distribution::{ContinuousCDF, Normal};
use std::fmt;

/// The outcome of a Monte Carlo probability simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Estimate of the event probability, i.e. the fraction of realizations
    pub probability_estimate: f64,
    /// Variance of the probability estimator
    pub variance_estimate: f64,
    /// Number of outer iterations performed
    pub outer_sampling: usize,
    /// Number of points drawn per outer iteration
    pub block_size: usize,
    /// Number of points for which the event was realized
    pub realizations: usize,
}

impl SimulationResult {
    pub(crate) fn new(block_size: usize) -> Self {
        Self {
            probability_estimate: 0.0,
            variance_estimate: 0.0,
            outer_sampling: 0,
            block_size,
            realizations: 0,
        }
    }

    /// Accounts for one more outer iteration which realized the event `block_realizations` times.
    pub(crate) fn update(&mut self, block_realizations: usize) {
        self.outer_sampling += 1;
        self.realizations += block_realizations;

        let n = self.sample_size() as f64;
        let pf = self.realizations as f64 / n;
        self.probability_estimate = pf;
        // Unbiased sample variance of the indicator, divided by the sample size
        self.variance_estimate = if n > 1.0 {
            pf * (1.0 - pf) / (n - 1.0)
        } else {
            0.0
        };
    }

    /// Total number of points drawn
    pub fn sample_size(&self) -> usize {
        self.outer_sampling * self.block_size
    }

    pub fn standard_deviation(&self) -> f64 {
        self.variance_estimate.sqrt()
    }

    /// Coefficient of variation of the estimator, zero while no realization has been observed.
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.probability_estimate > 0.0 {
            self.standard_deviation() / self.probability_estimate
        } else {
            0.0
        }
    }

    /// Length of the two sided confidence interval of the estimate at the given level, e.g. 0.95
    pub fn confidence_length(&self, level: f64) -> Result<f64, ReliabilityError> {
        ensure!(
            level > 0.0 && level < 1.0,
            InvalidSimulationSnafu {
                reason: format!("confidence level must be within (0, 1), got {level}")
            }
        );
        let std_norm = Normal::new(0.0, 1.0).map_err(|e| ReliabilityError::InvalidSimulation {
            reason: e.to_string(),
        })?;
        let z = std_norm.inverse_cdf(0.5 * (1.0 + level));
        Ok(2.0 * z * self.standard_deviation())
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "probabilityEstimate={:.6e} varianceEstimate={:.6e} standard deviation={:.2e} coefficient of variation={:.2e} outerSampling={} blockSize={}",
            self.probability_estimate,
            self.variance_estimate,
            self.standard_deviation(),
            self.coefficient_of_variation(),
            self.outer_sampling,
            self.block_size
        )
    }
}
