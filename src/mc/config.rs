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
use crate::io::ConfigRepr;
use crate::ReliabilityError;
use serde_derive::{Deserialize, Serialize};
use snafu::ensure;
use std::fmt;
use typed_builder::TypedBuilder;

/// Settings of a Monte Carlo probability simulation.
///
/// Each outer iteration draws `block_size` input points. The simulation stops after
/// `maximum_outer_sampling` iterations, or as soon as the coefficient of variation of the
/// estimator is below `maximum_coefficient_of_variation`, or as soon as its standard deviation
/// is below `maximum_standard_deviation` (zero disables that criterion).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
#[serde(default)]
pub struct SimulationConfig {
    #[builder(default = 1000)]
    pub maximum_outer_sampling: usize,
    #[builder(default = 1)]
    pub block_size: usize,
    #[builder(default = 0.1)]
    pub maximum_coefficient_of_variation: f64,
    #[builder(default = 0.0)]
    pub maximum_standard_deviation: f64,
    /// Seed of the [64bit PCG random number generator](https://www.pcg-random.org/index.html)
    #[builder(default = 0)]
    pub seed: u64,
    /// Set to show a progress bar while sampling
    #[builder(default = false)]
    pub progress: bool,
}

impl SimulationConfig {
    /// Settings used to check the reference probability of every benchmark problem:
    /// at most 10^5 outer samples of one point each, and a 5% coefficient of variation.
    pub fn benchmark() -> Self {
        Self::builder()
            .maximum_outer_sampling(100_000)
            .maximum_coefficient_of_variation(0.05)
            .build()
    }

    /// Maximum number of points this simulation may draw
    pub fn maximum_sample_size(&self) -> usize {
        self.maximum_outer_sampling * self.block_size
    }

    pub fn validate(&self) -> Result<(), ReliabilityError> {
        ensure!(
            self.maximum_outer_sampling > 0,
            InvalidSimulationSnafu {
                reason: "maximum outer sampling must be at least one"
            }
        );
        ensure!(
            self.block_size > 0,
            InvalidSimulationSnafu {
                reason: "block size must be at least one"
            }
        );
        ensure!(
            self.maximum_coefficient_of_variation.is_finite()
                && self.maximum_coefficient_of_variation >= 0.0,
            InvalidSimulationSnafu {
                reason: format!(
                    "maximum coefficient of variation must be non-negative, got {}",
                    self.maximum_coefficient_of_variation
                )
            }
        );
        ensure!(
            self.maximum_standard_deviation.is_finite() && self.maximum_standard_deviation >= 0.0,
            InvalidSimulationSnafu {
                reason: format!(
                    "maximum standard deviation must be non-negative, got {}",
                    self.maximum_standard_deviation
                )
            }
        );
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ConfigRepr for SimulationConfig {}

impl fmt::Display for SimulationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max outer sampling: {}, block size: {}, max CoV: {}, max std dev: {}, seed: {}",
            self.maximum_outer_sampling,
            self.block_size,
            self.maximum_coefficient_of_variation,
            self.maximum_standard_deviation,
            self.seed
        )
    }
}
