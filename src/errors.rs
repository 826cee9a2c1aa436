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

use crate::io::ConfigError;
use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ReliabilityError {
    /// A vector did not have the length the operation expects.
    #[snafu(display("{action} expects dimension {expected} but got {got}"))]
    DimensionMismatch {
        action: &'static str,
        expected: usize,
        got: usize,
    },
    /// The parameters of a marginal law are not admissible.
    #[snafu(display("invalid {law} marginal: {reason}"))]
    InvalidMarginal { law: &'static str, reason: String },
    /// A joint distribution needs at least one marginal.
    #[snafu(display("cannot build a joint distribution without any marginal"))]
    EmptyDistribution,
    /// The limit-state function returned NaN.
    #[snafu(display("function {function} returned a non finite value at {input:?}"))]
    NonFiniteOutput { function: String, input: Vec<f64> },
    /// The simulation settings cannot be used.
    #[snafu(display("invalid simulation settings: {reason}"))]
    InvalidSimulation { reason: String },
    /// Loading of a YAML configuration failed.
    #[snafu(display("configuration error: {source}"))]
    Config { source: ConfigError },
}

impl PartialEq for ReliabilityError {
    /// Errors match on their variant only
    fn eq(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}
