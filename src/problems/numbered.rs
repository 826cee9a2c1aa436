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

//! Each problem has a constructor with its default parameters and a `_with` constructor taking the
//! failure threshold and the marginals of its inputs. In both cases, the reference probability is
//! the one of the default parameters.

use super::{standard_normal, ReliabilityProblem};
use crate::distributions::{JointDistribution, Marginal};
use crate::function::LimitStateFunction;
use crate::ReliabilityError;
use std::f64::consts::SQRT_2;

pub const RP22_PROBABILITY: f64 = 4.21e-3;
pub const RP24_PROBABILITY: f64 = 2.86e-3;
pub const RP25_PROBABILITY: f64 = 4.15e-5;
pub const RP35_PROBABILITY: f64 = 3.47e-3;
pub const RP53_PROBABILITY: f64 = 3.13e-2;
pub const RP55_PROBABILITY: f64 = 0.56;
pub const RP57_PROBABILITY: f64 = 2.753582466985108e-02;
pub const RP60_PROBABILITY: f64 = 4.6e-02;
pub const RP77_PROBABILITY: f64 = 2.557210361992321e-07;

fn build<const N: usize, F>(
    name: &str,
    formula: &str,
    func: F,
    threshold: f64,
    marginals: [Marginal; N],
    probability: f64,
) -> Result<ReliabilityProblem, ReliabilityError>
where
    F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
{
    let distribution = JointDistribution::from_marginals(marginals.to_vec())?;
    let g = LimitStateFunction::new(
        name,
        distribution.description().to_vec(),
        formula,
        func,
    );
    ReliabilityProblem::from_parts(name, distribution, g, threshold, probability)
}

/// RP22: a parabolic limit state in two standard normal variables.
pub fn rp22() -> Result<ReliabilityProblem, ReliabilityError> {
    rp22_with(0.0, standard_normal::<2>()?)
}

pub fn rp22_with(
    threshold: f64,
    marginals: [Marginal; 2],
) -> Result<ReliabilityProblem, ReliabilityError> {
    build(
        "RP22",
        "2.5 - (x1 + x2) / sqrt(2) + 0.1 * (x1 - x2)^2",
        |x| 2.5 - (x[0] + x[1]) / SQRT_2 + 0.1 * (x[0] - x[1]).powi(2),
        threshold,
        marginals,
        RP22_PROBABILITY,
    )
}

/// RP24: a quartic limit state in two normal variables of mean 10 and standard deviation 3.
pub fn rp24() -> Result<ReliabilityProblem, ReliabilityError> {
    rp24_with(0.0, [Marginal::normal(10.0, 3.0)?; 2])
}

pub fn rp24_with(
    threshold: f64,
    marginals: [Marginal; 2],
) -> Result<ReliabilityProblem, ReliabilityError> {
    build(
        "RP24",
        "2.5 - 0.2357 * (x1 - x2) + 0.00463 * (x1 + x2 - 20)^4",
        |x| 2.5 - 0.2357 * (x[0] - x[1]) + 0.00463 * (x[0] + x[1] - 20.0).powi(4),
        threshold,
        marginals,
        RP24_PROBABILITY,
    )
}

/// RP25: a parallel system of two branches in two standard normal variables.
pub fn rp25() -> Result<ReliabilityProblem, ReliabilityError> {
    rp25_with(0.0, standard_normal::<2>()?)
}

pub fn rp25_with(
    threshold: f64,
    marginals: [Marginal; 2],
) -> Result<ReliabilityProblem, ReliabilityError> {
    build(
        "RP25",
        "max(x1^2 - 8 * x2 + 16, -16 * x1 + x2 + 32)",
        |x| {
            let g1 = x[0].powi(2) - 8.0 * x[1] + 16.0;
            let g2 = -16.0 * x[0] + x[1] + 32.0;
            g1.max(g2)
        },
        threshold,
        marginals,
        RP25_PROBABILITY,
    )
}

/// RP35: a series system of two branches in two standard normal variables.
pub fn rp35() -> Result<ReliabilityProblem, ReliabilityError> {
    rp35_with(0.0, standard_normal::<2>()?)
}

pub fn rp35_with(
    threshold: f64,
    marginals: [Marginal; 2],
) -> Result<ReliabilityProblem, ReliabilityError> {
    build(
        "RP35",
        "min(2 - x2 + exp(-0.1 * x1^2) + (0.2 * x1)^4, 4.5 - x1 * x2)",
        |x| {
            let g1 = 2.0 - x[1] + (-0.1 * x[0].powi(2)).exp() + (0.2 * x[0]).powi(4);
            let g2 = 4.5 - x[0] * x[1];
            g1.min(g2)
        },
        threshold,
        marginals,
        RP35_PROBABILITY,
    )
}

/// RP53: an oscillating limit state, x1 ~ N(1.5, 1) and x2 ~ N(2.5, 1).
pub fn rp53() -> Result<ReliabilityProblem, ReliabilityError> {
    rp53_with(
        0.0,
        [Marginal::normal(1.5, 1.0)?, Marginal::normal(2.5, 1.0)?],
    )
}

pub fn rp53_with(
    threshold: f64,
    marginals: [Marginal; 2],
) -> Result<ReliabilityProblem, ReliabilityError> {
    build(
        "RP53",
        "sin(5 * x1 / 2) + 2 - (x1^2 + 4) * (x2 - 1) / 20",
        |x| (2.5 * x[0]).sin() + 2.0 - (x[0].powi(2) + 4.0) * (x[1] - 1.0) / 20.0,
        threshold,
        marginals,
        RP53_PROBABILITY,
    )
}

/// RP55: a four branches series system in two uniform variables on [-1; 1].
pub fn rp55() -> Result<ReliabilityProblem, ReliabilityError> {
    rp55_with(0.0, [Marginal::uniform(-1.0, 1.0)?; 2])
}

pub fn rp55_with(
    threshold: f64,
    marginals: [Marginal; 2],
) -> Result<ReliabilityProblem, ReliabilityError> {
    build(
        "RP55",
        "min(0.2 + 0.6 * (x1 - x2)^4 - (x1 - x2) / sqrt(2), 0.2 + 0.6 * (x1 - x2)^4 + (x1 - x2) / sqrt(2), (x1 - x2) + 5 / sqrt(2) - 2.2, (x2 - x1) + 5 / sqrt(2) - 2.2)",
        |x| {
            let d = x[0] - x[1];
            let quartic = 0.2 + 0.6 * d.powi(4);
            let offset = 5.0 / SQRT_2 - 2.2;
            (quartic - d / SQRT_2)
                .min(quartic + d / SQRT_2)
                .min(d + offset)
                .min(-d + offset)
        },
        threshold,
        marginals,
        RP55_PROBABILITY,
    )
}

/// RP57: a series-parallel system in two standard normal variables.
pub fn rp57() -> Result<ReliabilityProblem, ReliabilityError> {
    rp57_with(0.0, standard_normal::<2>()?)
}

pub fn rp57_with(
    threshold: f64,
    marginals: [Marginal; 2],
) -> Result<ReliabilityProblem, ReliabilityError> {
    build(
        "RP57",
        "var g1 := -x1^2 + x2^3 + 3; var g2 := 2 - x1 - 8 * x2; var g3 := (x1 + 3)^2 + (x2 + 3)^2 - 4; gsys := min(max(g1, g2), g3)",
        |x| {
            let (x1, x2) = (x[0], x[1]);
            let g1 = -x1.powi(2) + x2.powi(3) + 3.0;
            let g2 = 2.0 - x1 - 8.0 * x2;
            let g3 = (x1 + 3.0).powi(2) + (x2 + 3.0).powi(2) - 4.0;
            g1.max(g2).min(g3)
        },
        threshold,
        marginals,
        RP57_PROBABILITY,
    )
}

/// RP60: a series-parallel system in five log-normal variables.
pub fn rp60() -> Result<ReliabilityProblem, ReliabilityError> {
    rp60_with(
        0.0,
        [
            Marginal::log_normal(2200.0, 220.0)?,
            Marginal::log_normal(2100.0, 210.0)?,
            Marginal::log_normal(2300.0, 230.0)?,
            Marginal::log_normal(2000.0, 200.0)?,
            Marginal::log_normal(1200.0, 480.0)?,
        ],
    )
}

pub fn rp60_with(
    threshold: f64,
    marginals: [Marginal; 5],
) -> Result<ReliabilityProblem, ReliabilityError> {
    build(
        "RP60",
        "var g1 := x1 - x5; var g2 := x2 - x5 / 2; var g3 := x3 - x5 / 2; var g4 := x4 - x5 / 2; var g5 := x2 - x5; var g6 := x3 - x5; var g7 := x4 - x5; gsys := min(g1, max(min(g2, g3, g4), max(g7, min(g5, g6))))",
        |x| {
            let half = 0.5 * x[4];
            let g1 = x[0] - x[4];
            let g2 = x[1] - half;
            let g3 = x[2] - half;
            let g4 = x[3] - half;
            let g5 = x[1] - x[4];
            let g6 = x[2] - x[4];
            let g7 = x[3] - x[4];
            g1.min(g2.min(g3).min(g4).max(g7.max(g5.min(g6))))
        },
        threshold,
        marginals,
        RP60_PROBABILITY,
    )
}

/// RP77: a piecewise linear limit state, x1 ~ N(10, 0.5), x2 ~ N(0, 1) and x3 ~ N(4, 1).
pub fn rp77() -> Result<ReliabilityProblem, ReliabilityError> {
    rp77_with(
        0.0,
        [
            Marginal::normal(10.0, 0.5)?,
            Marginal::normal(0.0, 1.0)?,
            Marginal::normal(4.0, 1.0)?,
        ],
    )
}

pub fn rp77_with(
    threshold: f64,
    marginals: [Marginal; 3],
) -> Result<ReliabilityProblem, ReliabilityError> {
    build(
        "RP77",
        "if(x3 <= 5, x1 - x2 - x3, x3 - x2)",
        |x| {
            if x[2] <= 5.0 {
                x[0] - x[1] - x[2]
            } else {
                x[2] - x[1]
            }
        },
        threshold,
        marginals,
        RP77_PROBABILITY,
    )
}

#[cfg(test)]
mod ut_numbered {
    use super::*;

    #[test]
    fn series_parallel_branches() {
        let rp57 = rp57().unwrap();
        // g1 = 3, g2 = 2, g3 = 14
        assert_eq!(rp57.function().call(&[0.0, 0.0]).unwrap(), 3.0);
        // g3 drives the system near (-3, -3)
        assert_eq!(rp57.function().call(&[-3.0, -3.0]).unwrap(), -4.0);

        let rp60 = rp60().unwrap();
        // Only the first branch fails when x1 is below x5
        let y = rp60
            .function()
            .call(&[1000.0, 2100.0, 2300.0, 2000.0, 1200.0])
            .unwrap();
        assert_eq!(y, -200.0);
        // The second branch needs one of x2..x4 below x5 / 2 and x4 below x5
        let y = rp60
            .function()
            .call(&[2200.0, 500.0, 2300.0, 1000.0, 1200.0])
            .unwrap();
        assert_eq!(y, -100.0);
    }

    #[test]
    fn piecewise_rp77() {
        let rp77 = rp77().unwrap();
        assert_eq!(rp77.function().call(&[10.0, 0.0, 4.0]).unwrap(), 6.0);
        assert_eq!(rp77.function().call(&[10.0, 1.0, 6.0]).unwrap(), 5.0);
        assert_eq!(rp77.distribution().description(), &["x1", "x2", "x3"]);
    }

    #[test]
    fn parameterized() {
        let shifted = rp22_with(1.0, [Marginal::normal(0.0, 1.0).unwrap(); 2]).unwrap();
        assert_eq!(shifted.event().threshold(), 1.0);
        assert_eq!(shifted.probability(), RP22_PROBABILITY);
        assert!(rp24_with(0.0, [Marginal::normal(10.0, 3.0).unwrap(); 2]).is_ok());
    }
}
