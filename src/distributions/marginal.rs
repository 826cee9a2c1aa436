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

use crate::errors::InvalidMarginalSnafu;
use crate::ReliabilityError;
use rand::Rng;
use rand_distr::{Distribution, LogNormal, Normal, Uniform};
use serde_derive::{Deserialize, Serialize};
use snafu::ensure;
use std::fmt;

/// A univariate law of one input variable of a reliability problem.
///
/// All the laws are parameterized by the moments of the variable itself. In particular, the
/// log-normal marginal takes the mean and standard deviation of the variable, _not_ of its logarithm.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "law")]
pub enum Marginal {
    Normal { mean: f64, std_dev: f64 },
    LogNormal { mean: f64, std_dev: f64 },
    Uniform { lower: f64, upper: f64 },
}

impl Marginal {
    /// Initializes a new normal marginal, the standard deviation must be strictly positive.
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self, ReliabilityError> {
        let me = Self::Normal { mean, std_dev };
        me.check()?;
        Ok(me)
    }

    /// Initializes a new log-normal marginal from the mean and standard deviation of the variable.
    pub fn log_normal(mean: f64, std_dev: f64) -> Result<Self, ReliabilityError> {
        let me = Self::LogNormal { mean, std_dev };
        me.check()?;
        Ok(me)
    }

    /// Initializes a new uniform marginal on [lower; upper).
    pub fn uniform(lower: f64, upper: f64) -> Result<Self, ReliabilityError> {
        let me = Self::Uniform { lower, upper };
        me.check()?;
        Ok(me)
    }

    /// Name of the law, as used in the serialized representation
    pub fn law(&self) -> &'static str {
        match self {
            Self::Normal { .. } => "Normal",
            Self::LogNormal { .. } => "LogNormal",
            Self::Uniform { .. } => "Uniform",
        }
    }

    pub fn mean(&self) -> f64 {
        match *self {
            Self::Normal { mean, .. } | Self::LogNormal { mean, .. } => mean,
            Self::Uniform { lower, upper } => 0.5 * (lower + upper),
        }
    }

    pub fn std_dev(&self) -> f64 {
        match *self {
            Self::Normal { std_dev, .. } | Self::LogNormal { std_dev, .. } => std_dev,
            Self::Uniform { lower, upper } => (upper - lower) / 12.0_f64.sqrt(),
        }
    }

    /// Returns the (mu, sigma) parameters of the underlying normal of a log-normal marginal.
    ///
    /// sigma_ln² = ln(1 + (σ/μ)²) and mu_ln = ln(μ) - sigma_ln²/2
    pub fn log_parameters(&self) -> Option<(f64, f64)> {
        match *self {
            Self::LogNormal { mean, std_dev } => Some(log_normal_parameters(mean, std_dev)),
            _ => None,
        }
    }

    /// Checks that the parameters of this law are admissible.
    pub fn check(&self) -> Result<(), ReliabilityError> {
        let law = self.law();
        match *self {
            Self::Normal { mean, std_dev } | Self::LogNormal { mean, std_dev } => {
                ensure!(
                    mean.is_finite() && std_dev.is_finite(),
                    InvalidMarginalSnafu {
                        law,
                        reason: format!("parameters must be finite, got {mean} and {std_dev}")
                    }
                );
                ensure!(
                    std_dev > 0.0,
                    InvalidMarginalSnafu {
                        law,
                        reason: format!("standard deviation must be positive, got {std_dev}")
                    }
                );
                if matches!(self, Self::LogNormal { .. }) {
                    ensure!(
                        mean > 0.0,
                        InvalidMarginalSnafu {
                            law,
                            reason: format!("mean must be positive, got {mean}")
                        }
                    );
                }
            }
            Self::Uniform { lower, upper } => {
                ensure!(
                    lower.is_finite() && upper.is_finite() && lower < upper,
                    InvalidMarginalSnafu {
                        law,
                        reason: format!("bounds must be finite and ordered, got [{lower}; {upper})")
                    }
                );
            }
        }
        Ok(())
    }

    /// Builds the sampler of this marginal, checking its parameters first.
    pub fn sampler(&self) -> Result<MarginalSampler, ReliabilityError> {
        self.check()?;
        let law = self.law();
        match *self {
            Self::Normal { mean, std_dev } => Normal::new(mean, std_dev)
                .map(MarginalSampler::Normal)
                .map_err(|e| ReliabilityError::InvalidMarginal {
                    law,
                    reason: e.to_string(),
                }),
            Self::LogNormal { mean, std_dev } => {
                let (mu, sigma) = log_normal_parameters(mean, std_dev);
                LogNormal::new(mu, sigma)
                    .map(MarginalSampler::LogNormal)
                    .map_err(|e| ReliabilityError::InvalidMarginal {
                        law,
                        reason: e.to_string(),
                    })
            }
            Self::Uniform { lower, upper } => {
                Ok(MarginalSampler::Uniform(Uniform::new(lower, upper)))
            }
        }
    }
}

fn log_normal_parameters(mean: f64, std_dev: f64) -> (f64, f64) {
    let sigma_ln_sq = (1.0 + (std_dev / mean).powi(2)).ln();
    (mean.ln() - 0.5 * sigma_ln_sq, sigma_ln_sq.sqrt())
}

impl fmt::Display for Marginal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal { mean, std_dev } => write!(f, "Normal(mu = {mean}, sigma = {std_dev})"),
            Self::LogNormal { mean, std_dev } => {
                write!(f, "LogNormalMuSigma(mu = {mean}, sigma = {std_dev})")
            }
            Self::Uniform { lower, upper } => write!(f, "Uniform(a = {lower}, b = {upper})"),
        }
    }
}

/// The random number distribution backing a marginal.
#[derive(Clone, Debug)]
pub enum MarginalSampler {
    Normal(Normal<f64>),
    LogNormal(LogNormal<f64>),
    Uniform(Uniform<f64>),
}

impl Distribution<f64> for MarginalSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            Self::Normal(d) => d.sample(rng),
            Self::LogNormal(d) => d.sample(rng),
            Self::Uniform(d) => d.sample(rng),
        }
    }
}
