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

use super::{standard_normal, ReliabilityProblem};
use crate::distributions::{JointDistribution, Marginal};
use crate::function::LimitStateFunction;
use crate::ReliabilityError;
use std::f64::consts::SQRT_2;

pub const NAME: &str = "Four-branch serial system";

/// Reference probability of failure with the default parameters
pub const PROBABILITY: f64 = 0.0022;

/// The four-branch serial system with two independent standard normal inputs.
pub fn four_branch_serial_system() -> Result<ReliabilityProblem, ReliabilityError> {
    four_branch_serial_system_with(0.0, standard_normal::<2>()?)
}

/// The four-branch serial system: the system fails as soon as any of its four branches fails.
pub fn four_branch_serial_system_with(
    threshold: f64,
    marginals: [Marginal; 2],
) -> Result<ReliabilityProblem, ReliabilityError> {
    let g = LimitStateFunction::new(
        NAME,
        vec!["x1", "x2"],
        "min(3 + 0.1 * (x1 - x2)^2 - (x1 + x2) / sqrt(2), 3 + 0.1 * (x1 - x2)^2 + (x1 + x2) / sqrt(2), (x1 - x2) + 7 / sqrt(2), (x2 - x1) + 7 / sqrt(2))",
        |x| {
            let (x1, x2) = (x[0], x[1]);
            let quad = 3.0 + 0.1 * (x1 - x2).powi(2);
            let lin = 7.0 / SQRT_2;
            (quad - (x1 + x2) / SQRT_2)
                .min(quad + (x1 + x2) / SQRT_2)
                .min((x1 - x2) + lin)
                .min((x2 - x1) + lin)
        },
    );
    let distribution = JointDistribution::from_marginals(marginals.to_vec())?;
    ReliabilityProblem::from_parts(NAME, distribution, g, threshold, PROBABILITY)
}
