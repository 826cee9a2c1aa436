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

use super::Pcg64Mcg;
use crate::distributions::{JointDistribution, Point};
use rand_distr::Distribution;

/// Draws independent input points from a joint distribution with a seeded random number generator.
///
/// Points are always drawn sequentially: the generator is not thread safe, and drawing in order is
/// what makes a seeded experiment reproducible.
pub struct MonteCarloExperiment {
    distribution: JointDistribution,
    seed: u64,
    rng: Pcg64Mcg,
}

impl MonteCarloExperiment {
    pub fn new(distribution: JointDistribution, seed: u64) -> Self {
        Self {
            distribution,
            seed,
            rng: Pcg64Mcg::new(seed.into()),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn distribution(&self) -> &JointDistribution {
        &self.distribution
    }

    /// Generates the next `size` points of this experiment.
    #[must_use = "Generated points of a Monte Carlo experiment must be used"]
    pub fn generate(&mut self, size: usize) -> Vec<Point> {
        // Forcing the borrow as specified in the `sample_iter` docs.
        (&self.distribution)
            .sample_iter(&mut self.rng)
            .take(size)
            .collect::<Vec<Point>>()
    }

    /// Resets the generator to its seed, the next points will be the first ones again.
    pub fn reset(&mut self) {
        self.rng = Pcg64Mcg::new(self.seed.into());
    }
}
