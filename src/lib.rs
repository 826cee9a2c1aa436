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

/*! # reliability-bench

A catalog of structural reliability benchmark problems. Each problem pairs a limit-state function
with the joint distribution of its random inputs and a reference probability of failure, and the
crate provides the plain Monte Carlo simulation used to check every reference probability.

```
use reliability_bench::mc::SimulationConfig;
use reliability_bench::problems::BenchmarkProblem;
use reliability_bench::validation::validate;

let problem = BenchmarkProblem::RP57.problem().unwrap();
let report = validate(&problem, &SimulationConfig::benchmark()).unwrap();
assert!(report.passed());
```
*/

/// Marginal laws and their independent composition into the input distribution of a problem.
pub mod distributions;

/// Limit-state functions.
pub mod function;

/// Failure events, i.e. a limit-state function compared to a threshold.
pub mod event;

/// The catalog of reliability benchmark problems.
pub mod problems;

/// Monte Carlo estimation of the probability of an event.
pub mod mc;

/// Comparison of Monte Carlo estimates with the reference probabilities.
pub mod validation;

/// YAML configuration
pub mod io;

mod errors;
/// Functions which may fail return this error, the library does not panic.
pub use self::errors::ReliabilityError;

#[macro_use]
extern crate log;
extern crate nalgebra as na;

/// Re-export nalgebra
pub mod linalg {
    pub use na::base::*;
}

pub use self::distributions::{JointDistribution, Marginal, Point};
pub use self::event::{ComparisonOperator, ThresholdEvent};
pub use self::function::LimitStateFunction;
pub use self::problems::{BenchmarkProblem, ReliabilityProblem};
