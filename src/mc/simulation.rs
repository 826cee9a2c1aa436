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
extern crate indicatif;

use super::rayon::prelude::*;
use super::{MonteCarloExperiment, SimulationConfig, SimulationResult};
use crate::event::ThresholdEvent;
use crate::ReliabilityError;
use hifitime::Unit;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::time::Instant as StdInstant;

/// Estimates the probability of an event by plain Monte Carlo sampling of its input distribution.
///
/// Input points are drawn sequentially from a seeded generator, so a run is reproducible, and the
/// event is evaluated on each block of points on the rayon thread pool.
pub struct ProbabilitySimulation {
    /// Event whose probability is estimated
    pub event: ThresholdEvent,
    /// Sampling and stopping settings
    pub config: SimulationConfig,
    /// Name of this run, will be reflected in the progress bar and in the logs
    pub scenario: String,
}

impl ProbabilitySimulation {
    pub fn new(event: ThresholdEvent, config: SimulationConfig) -> Self {
        let scenario = event.function().name().to_string();
        Self {
            event,
            config,
            scenario,
        }
    }

    // Just the template for the progress bar
    fn progress_bar(&self) -> ProgressBar {
        if !self.config.progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new(self.config.maximum_outer_sampling as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:100.cyan/blue} {pos:>7}/{len:7} {msg}")
        {
            pb.set_style(style.progress_chars("##-"));
        }
        pb.set_message(format!("{}", self));
        pb
    }

    /// Runs the simulation until one of the stopping criteria of the configuration is met.
    #[must_use = "Monte Carlo result must be used"]
    pub fn run(&self) -> Result<SimulationResult, ReliabilityError> {
        self.config.validate()?;

        let mut experiment =
            MonteCarloExperiment::new(self.event.distribution().clone(), self.config.seed);
        let pb = self.progress_bar();
        let mut result = SimulationResult::new(self.config.block_size);
        let mut converged = false;

        let start = StdInstant::now();
        while result.outer_sampling < self.config.maximum_outer_sampling {
            // Generate the block first (must be done separately because the rng is not thread safe)
            let block = experiment.generate(self.config.block_size);
            let outcomes = block
                .par_iter()
                .map(|x| self.event.is_realized(x))
                .collect::<Result<Vec<bool>, ReliabilityError>>()?;

            result.update(outcomes.iter().filter(|realized| **realized).count());
            pb.inc(1);

            let cov = result.coefficient_of_variation();
            let std_dev = result.standard_deviation();
            if (cov > 0.0 && cov <= self.config.maximum_coefficient_of_variation)
                || (std_dev > 0.0 && std_dev <= self.config.maximum_standard_deviation)
            {
                converged = true;
                break;
            }
        }
        pb.finish_and_clear();

        let clock_time = StdInstant::now() - start;
        info!(
            "{}: sampled {} points in {}",
            self.scenario,
            result.sample_size(),
            clock_time.as_secs_f64() * Unit::Second
        );
        info!("{}: {}", self.scenario, result);
        if !converged {
            warn!(
                "{}: reached the maximum outer sampling of {} with a coefficient of variation of {:.3e}",
                self.scenario,
                self.config.maximum_outer_sampling,
                result.coefficient_of_variation()
            );
        }

        Ok(result)
    }
}

impl fmt::Display for ProbabilitySimulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Monte Carlo probability simulation - seed: {}",
            self.scenario, self.config.seed
        )
    }
}
