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

use crate::distributions::{JointDistribution, Point};
use crate::errors::DimensionMismatchSnafu;
use crate::function::LimitStateFunction;
use crate::ReliabilityError;
use serde_derive::{Deserialize, Serialize};
use snafu::ensure;
use std::fmt;

/// Comparison between the output of the limit-state function and the threshold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOperator {
    Less,
    #[default]
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl ComparisonOperator {
    pub fn compare(&self, a: f64, b: f64) -> bool {
        match self {
            Self::Less => a < b,
            Self::LessOrEqual => a <= b,
            Self::Greater => a > b,
            Self::GreaterOrEqual => a >= b,
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
        };
        write!(f, "{symbol}")
    }
}

/// The failure event `g(X) op threshold`, where X follows the antecedent distribution.
#[derive(Clone, Debug)]
pub struct ThresholdEvent {
    distribution: JointDistribution,
    function: LimitStateFunction,
    operator: ComparisonOperator,
    threshold: f64,
}

impl ThresholdEvent {
    pub fn new(
        distribution: JointDistribution,
        function: LimitStateFunction,
        operator: ComparisonOperator,
        threshold: f64,
    ) -> Result<Self, ReliabilityError> {
        ensure!(
            distribution.dimension() == function.input_dimension(),
            DimensionMismatchSnafu {
                action: "composing a function with its input distribution",
                expected: function.input_dimension(),
                got: distribution.dimension()
            }
        );
        Ok(Self {
            distribution,
            function,
            operator,
            threshold,
        })
    }

    /// The input distribution of the event
    pub fn distribution(&self) -> &JointDistribution {
        &self.distribution
    }

    pub fn function(&self) -> &LimitStateFunction {
        &self.function
    }

    pub fn operator(&self) -> ComparisonOperator {
        self.operator
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn dimension(&self) -> usize {
        self.distribution.dimension()
    }

    /// Returns whether the event is realized at this input point.
    pub fn is_realized(&self, x: &Point) -> Result<bool, ReliabilityError> {
        let y = self.function.call(x.as_slice())?;
        Ok(self.operator.compare(y, self.threshold))
    }
}

impl fmt::Display for ThresholdEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(X) {} {} with X ~ {}",
            self.function.name(),
            self.operator,
            self.threshold,
            self.distribution
        )
    }
}
