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

use super::{Marginal, MarginalSampler, Point};
use crate::errors::{DimensionMismatchSnafu, EmptyDistributionSnafu};
use crate::ReliabilityError;
use rand::Rng;
use rand_distr::Distribution;
use snafu::ensure;
use std::fmt;

/// A joint distribution of independent named marginals, i.e. the composition of the marginals with the independent copula.
#[derive(Clone, Debug)]
pub struct JointDistribution {
    names: Vec<String>,
    marginals: Vec<Marginal>,
    samplers: Vec<MarginalSampler>,
}

impl JointDistribution {
    /// Creates a new joint distribution, there must be exactly one name per marginal.
    pub fn new<S: Into<String>>(
        names: Vec<S>,
        marginals: Vec<Marginal>,
    ) -> Result<Self, ReliabilityError> {
        ensure!(!marginals.is_empty(), EmptyDistributionSnafu);
        ensure!(
            names.len() == marginals.len(),
            DimensionMismatchSnafu {
                action: "naming the marginals of a joint distribution",
                expected: marginals.len(),
                got: names.len()
            }
        );

        let samplers = marginals
            .iter()
            .map(|marginal| marginal.sampler())
            .collect::<Result<Vec<MarginalSampler>, ReliabilityError>>()?;

        Ok(Self {
            names: names.into_iter().map(|name| name.into()).collect(),
            marginals,
            samplers,
        })
    }

    /// Creates a joint distribution named x1, x2, ..., xn.
    pub fn from_marginals(marginals: Vec<Marginal>) -> Result<Self, ReliabilityError> {
        let names = (1..=marginals.len())
            .map(|i| format!("x{i}"))
            .collect::<Vec<String>>();
        Self::new(names, marginals)
    }

    pub fn dimension(&self) -> usize {
        self.marginals.len()
    }

    /// Names of the input variables, in order
    pub fn description(&self) -> &[String] {
        &self.names
    }

    pub fn marginals(&self) -> &[Marginal] {
        &self.marginals
    }

    pub fn marginal(&self, i: usize) -> Option<&Marginal> {
        self.marginals.get(i)
    }

    pub fn mean(&self) -> Point {
        Point::from_iterator(self.dimension(), self.marginals.iter().map(|m| m.mean()))
    }

    pub fn std_dev(&self) -> Point {
        Point::from_iterator(self.dimension(), self.marginals.iter().map(|m| m.std_dev()))
    }
}

impl Distribution<Point> for JointDistribution {
    /// Draws each component in the order of the marginals
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let mut point = Point::zeros(self.dimension());
        for (i, sampler) in self.samplers.iter().enumerate() {
            point[i] = sampler.sample(rng);
        }
        point
    }
}

impl fmt::Display for JointDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self
            .names
            .iter()
            .zip(&self.marginals)
            .map(|(name, marginal)| format!("{name}: {marginal}"))
            .collect::<Vec<String>>();
        write!(f, "ComposedDistribution([{}], IndependentCopula)", parts.join(", "))
    }
}
