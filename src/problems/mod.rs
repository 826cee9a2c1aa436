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

use crate::distributions::{JointDistribution, Marginal};
use crate::event::{ComparisonOperator, ThresholdEvent};
use crate::function::LimitStateFunction;
use crate::ReliabilityError;
use enum_iterator::Sequence;
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The axial stressed beam, a two variables resistance minus stress problem.
pub mod axial_beam;
pub use axial_beam::{axial_stressed_beam, axial_stressed_beam_with};

/// The four-branch serial system.
pub mod four_branch;
pub use four_branch::{four_branch_serial_system, four_branch_serial_system_with};

/// Problems of the reliability problems repository, named after their number.
pub mod numbered;
pub use numbered::*;

/// A reliability benchmark problem: a failure event and its reference probability.
///
/// The failure event is `g(X) <= threshold` where `g` is the limit-state function and `X` the
/// random input vector. A problem is immutable once built.
#[derive(Clone, Debug)]
pub struct ReliabilityProblem {
    name: String,
    event: ThresholdEvent,
    probability: f64,
}

impl ReliabilityProblem {
    pub fn new<S: Into<String>>(name: S, event: ThresholdEvent, probability: f64) -> Self {
        let name = name.into();
        debug!("built reliability problem {name} with pf = {probability:e}");
        Self {
            name,
            event,
            probability,
        }
    }

    /// Builds a problem whose failure event is `g(X) <= threshold`.
    pub(crate) fn from_parts(
        name: &str,
        distribution: JointDistribution,
        function: LimitStateFunction,
        threshold: f64,
        probability: f64,
    ) -> Result<Self, ReliabilityError> {
        let event = ThresholdEvent::new(
            distribution,
            function,
            ComparisonOperator::LessOrEqual,
            threshold,
        )?;
        Ok(Self::new(name, event, probability))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference probability of failure
    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn event(&self) -> &ThresholdEvent {
        &self.event
    }

    /// Limit-state function of the failure event
    pub fn function(&self) -> &LimitStateFunction {
        self.event.function()
    }

    /// Input distribution of the failure event
    pub fn distribution(&self) -> &JointDistribution {
        self.event.distribution()
    }

    pub fn dimension(&self) -> usize {
        self.event.dimension()
    }
}

impl fmt::Display for ReliabilityProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name = {}", self.name)?;
        writeln!(f, "function = {}", self.function())?;
        writeln!(f, "distribution = {}", self.distribution())?;
        writeln!(
            f,
            "event = g(X) {} {}",
            self.event.operator(),
            self.event.threshold()
        )?;
        write!(f, "probability = {:e}", self.probability)
    }
}

/// Every benchmark problem of the catalog, with its default parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
pub enum BenchmarkProblem {
    AxialStressedBeam,
    RP22,
    RP24,
    RP25,
    RP35,
    RP53,
    RP55,
    RP57,
    RP60,
    RP77,
    FourBranchSerialSystem,
}

impl BenchmarkProblem {
    /// Returns all of the problems of the catalog.
    pub fn all() -> Vec<Self> {
        enum_iterator::all::<Self>().collect()
    }

    /// Builds this problem with its default parameters.
    pub fn problem(&self) -> Result<ReliabilityProblem, ReliabilityError> {
        match self {
            Self::AxialStressedBeam => axial_stressed_beam(),
            Self::RP22 => rp22(),
            Self::RP24 => rp24(),
            Self::RP25 => rp25(),
            Self::RP35 => rp35(),
            Self::RP53 => rp53(),
            Self::RP55 => rp55(),
            Self::RP57 => rp57(),
            Self::RP60 => rp60(),
            Self::RP77 => rp77(),
            Self::FourBranchSerialSystem => four_branch_serial_system(),
        }
    }

    /// Reference probability of failure with the default parameters
    pub fn reference_probability(&self) -> f64 {
        match self {
            Self::AxialStressedBeam => axial_beam::PROBABILITY,
            Self::RP22 => RP22_PROBABILITY,
            Self::RP24 => RP24_PROBABILITY,
            Self::RP25 => RP25_PROBABILITY,
            Self::RP35 => RP35_PROBABILITY,
            Self::RP53 => RP53_PROBABILITY,
            Self::RP55 => RP55_PROBABILITY,
            Self::RP57 => RP57_PROBABILITY,
            Self::RP60 => RP60_PROBABILITY,
            Self::RP77 => RP77_PROBABILITY,
            Self::FourBranchSerialSystem => four_branch::PROBABILITY,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AxialStressedBeam => axial_beam::NAME,
            Self::RP22 => "RP22",
            Self::RP24 => "RP24",
            Self::RP25 => "RP25",
            Self::RP35 => "RP35",
            Self::RP53 => "RP53",
            Self::RP55 => "RP55",
            Self::RP57 => "RP57",
            Self::RP60 => "RP60",
            Self::RP77 => "RP77",
            Self::FourBranchSerialSystem => four_branch::NAME,
        }
    }
}

impl fmt::Display for BenchmarkProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for BenchmarkProblem {
    type Err = String;

    /// Matches the problem name, or its variant name, ignoring case and spacing
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let simplify = |name: &str| {
            name.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase()
        };
        let wanted = simplify(s);
        enum_iterator::all::<Self>()
            .find(|problem| {
                simplify(problem.name()) == wanted
                    || simplify(format!("{problem:?}").as_str()) == wanted
            })
            .ok_or_else(|| format!("unknown benchmark problem `{s}`"))
    }
}

/// Returns `N` standard normal marginals.
pub(crate) fn standard_normal<const N: usize>() -> Result<[Marginal; N], ReliabilityError> {
    Ok([Marginal::normal(0.0, 1.0)?; N])
}
