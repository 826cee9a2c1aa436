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

use super::ReliabilityProblem;
use crate::distributions::{JointDistribution, Marginal};
use crate::function::LimitStateFunction;
use crate::ReliabilityError;
use std::f64::consts::PI;

pub const NAME: &str = "Axial stressed beam";

/// Reference probability of failure with the default parameters
pub const PROBABILITY: f64 = 0.029198194624830955;

/// Cross section area of the beam of diameter 20 mm, divided by π
const AREA_OVER_PI: f64 = 100.0;

/// The axial stressed beam with its default parameters: a yield strength R ~ LogNormal(300, 30) MPa
/// and a traction load F ~ Normal(75000, 5000) N, on a beam of diameter 20 mm.
pub fn axial_stressed_beam() -> Result<ReliabilityProblem, ReliabilityError> {
    axial_stressed_beam_with(
        0.0,
        Marginal::log_normal(300.0, 30.0)?,
        Marginal::normal(75_000.0, 5_000.0)?,
    )
}

/// The axial stressed beam, failing when `R - F / (100 π) <= threshold`.
///
/// The reference probability is the one of the default parameters.
pub fn axial_stressed_beam_with(
    threshold: f64,
    strength: Marginal,
    load: Marginal,
) -> Result<ReliabilityProblem, ReliabilityError> {
    let g = LimitStateFunction::new(NAME, vec!["R", "F"], "R - F / (pi_ * 100.0)", |x| {
        x[0] - x[1] / (PI * AREA_OVER_PI)
    });
    let distribution = JointDistribution::new(vec!["R", "F"], vec![strength, load])?;
    ReliabilityProblem::from_parts(NAME, distribution, g, threshold, PROBABILITY)
}
