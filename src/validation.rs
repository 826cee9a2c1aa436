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

use crate::errors::ConfigSnafu;
use crate::io::ConfigRepr;
use crate::mc::{ProbabilitySimulation, SimulationConfig, SimulationResult};
use crate::problems::{BenchmarkProblem, ReliabilityProblem};
use crate::ReliabilityError;
use serde_derive::{Deserialize, Serialize};
use snafu::ResultExt;
use std::fmt;
use std::path::Path;

/// Number of significant digits of a double, used when the estimate is exact.
const MAX_CORRECT_DIGITS: f64 = 17.0;

/// Outcome of the comparison between a Monte Carlo estimate and the reference probability of a problem.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Name of the problem
    pub problem: String,
    /// Reference probability of failure
    pub exact: f64,
    pub result: SimulationResult,
    /// Absolute tolerance on the estimate, 1 / sqrt(sample size)
    pub tolerance: f64,
}

impl ValidationReport {
    pub fn new(problem: &ReliabilityProblem, result: SimulationResult) -> Self {
        let tolerance = 1.0 / (result.sample_size() as f64).sqrt();
        Self {
            problem: problem.name().to_string(),
            exact: problem.probability(),
            result,
            tolerance,
        }
    }

    pub fn computed(&self) -> f64 {
        self.result.probability_estimate
    }

    pub fn absolute_error(&self) -> f64 {
        (self.computed() - self.exact).abs()
    }

    /// Returns whether the estimate is within the tolerance of the reference probability
    pub fn passed(&self) -> bool {
        self.absolute_error() <= self.tolerance
    }

    /// Number of correct significant digits of the estimate, i.e. -log10(|computed - exact| / |exact|).
    ///
    /// Clamped to [0; 17], the upper bound being reached by an exact estimate.
    pub fn correct_digits(&self) -> f64 {
        log_relative_error(self.exact, self.computed())
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: exact_pf = {:e}, computed_pf = {:e}, sample size = {}, |error| = {:.3e} (tol. {:.3e}), {:.1} correct digits: {}",
            self.problem,
            self.exact,
            self.computed(),
            self.result.sample_size(),
            self.absolute_error(),
            self.tolerance,
            self.correct_digits(),
            if self.passed() { "PASS" } else { "FAIL" }
        )
    }
}

/// Returns the number of correct significant digits of `computed` with respect to `exact`.
pub fn log_relative_error(exact: f64, computed: f64) -> f64 {
    let abs_error = (computed - exact).abs();
    if abs_error == 0.0 {
        return MAX_CORRECT_DIGITS;
    }
    let rel_error = if exact == 0.0 {
        abs_error
    } else {
        abs_error / exact.abs()
    };
    (-rel_error.log10()).clamp(0.0, MAX_CORRECT_DIGITS)
}

/// Runs a Monte Carlo simulation of the failure event of this problem and compares the estimate
/// with its reference probability.
pub fn validate(
    problem: &ReliabilityProblem,
    config: &SimulationConfig,
) -> Result<ValidationReport, ReliabilityError> {
    let mut sim = ProbabilitySimulation::new(problem.event().clone(), config.clone());
    sim.scenario = problem.name().to_string();

    let result = sim.run()?;
    let report = ValidationReport::new(problem, result);
    if report.passed() {
        info!("{report}");
    } else {
        warn!("{report}");
    }
    Ok(report)
}

/// A benchmark problem of the catalog and the settings used to validate it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkCase {
    pub problem: BenchmarkProblem,
    #[serde(default = "SimulationConfig::benchmark")]
    pub simulation: SimulationConfig,
}

impl BenchmarkCase {
    /// Validates this case with the benchmark settings.
    pub fn new(problem: BenchmarkProblem) -> Self {
        Self {
            problem,
            simulation: SimulationConfig::benchmark(),
        }
    }

    /// Every problem of the catalog with the benchmark settings
    pub fn catalog() -> Vec<Self> {
        BenchmarkProblem::all().into_iter().map(Self::new).collect()
    }

    /// Loads a list of cases from a YAML file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Vec<Self>, ReliabilityError> {
        Self::load_many(path).context(ConfigSnafu)
    }

    pub fn run(&self) -> Result<ValidationReport, ReliabilityError> {
        validate(&self.problem.problem()?, &self.simulation)
    }
}

impl ConfigRepr for BenchmarkCase {}
