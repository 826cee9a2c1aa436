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

extern crate rand;
extern crate rand_distr;
extern crate rand_pcg;
extern crate rayon;

pub use rand_pcg::Pcg64Mcg;

mod config;
pub use config::SimulationConfig;

mod experiment;
pub use experiment::MonteCarloExperiment;

mod simulation;
pub use simulation::ProbabilitySimulation;

mod results;
pub use results::SimulationResult;
