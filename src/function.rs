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

use crate::distributions::Point;
use crate::errors::{DimensionMismatchSnafu, NonFiniteOutputSnafu};
use crate::ReliabilityError;
use snafu::ensure;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

type Formula = dyn Fn(&[f64]) -> f64 + Send + Sync;

/// A scalar limit-state (performance) function of named inputs.
///
/// The closure is shared, so cloning a function is cheap and clones share the evaluation counter.
#[derive(Clone)]
pub struct LimitStateFunction {
    name: String,
    inputs: Vec<String>,
    formula: String,
    func: Arc<Formula>,
    calls: Arc<AtomicUsize>,
}

impl LimitStateFunction {
    /// Creates a new limit-state function.
    ///
    /// The `formula` is only a human readable description of what `func` computes.
    pub fn new<N, S, F>(name: N, inputs: Vec<S>, formula: &str, func: F) -> Self
    where
        N: Into<String>,
        S: Into<String>,
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            inputs: inputs.into_iter().map(|s| s.into()).collect(),
            formula: formula.to_string(),
            func: Arc::new(func),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_names(&self) -> &[String] {
        &self.inputs
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn input_dimension(&self) -> usize {
        self.inputs.len()
    }

    pub fn output_dimension(&self) -> usize {
        1
    }

    /// Number of times this function (or any of its clones) was evaluated
    pub fn calls_number(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Evaluates the function on a slice of inputs.
    pub fn call(&self, x: &[f64]) -> Result<f64, ReliabilityError> {
        ensure!(
            x.len() == self.input_dimension(),
            DimensionMismatchSnafu {
                action: "evaluating a limit-state function",
                expected: self.input_dimension(),
                got: x.len()
            }
        );
        self.calls.fetch_add(1, Ordering::Relaxed);
        let y = (self.func)(x);
        ensure!(
            !y.is_nan(),
            NonFiniteOutputSnafu {
                function: self.name.clone(),
                input: x.to_vec()
            }
        );
        Ok(y)
    }

    /// Evaluates the function at the provided point, returning a one dimensional point.
    pub fn evaluate(&self, x: &Point) -> Result<Point, ReliabilityError> {
        let y = self.call(x.as_slice())?;
        Ok(Point::from_element(1, y))
    }
}

impl fmt::Debug for LimitStateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LimitStateFunction")
            .field("name", &self.name)
            .field("inputs", &self.inputs)
            .field("formula", &self.formula)
            .field("calls", &self.calls_number())
            .finish()
    }
}

impl fmt::Display for LimitStateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]->[{}]", self.inputs.join(","), self.formula)
    }
}
