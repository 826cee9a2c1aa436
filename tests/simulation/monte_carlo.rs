use approx::assert_abs_diff_eq;
use reliability_bench::distributions::{JointDistribution, Marginal};
use reliability_bench::event::{ComparisonOperator, ThresholdEvent};
use reliability_bench::function::LimitStateFunction;
use reliability_bench::mc::{MonteCarloExperiment, ProbabilitySimulation, SimulationConfig};
use rstest::*;
use statrs::distribution::{ContinuousCDF, Normal};

/// R - S with R ~ N(5, 1) and S ~ N(2, 1), the exact probability is Φ(-3 / √2)
#[fixture]
fn linear_event() -> ThresholdEvent {
    let dist = JointDistribution::new(
        vec!["R", "S"],
        vec![
            Marginal::normal(5.0, 1.0).unwrap(),
            Marginal::normal(2.0, 1.0).unwrap(),
        ],
    )
    .unwrap();
    let g = LimitStateFunction::new("R-S", vec!["R", "S"], "R - S", |x| x[0] - x[1]);
    ThresholdEvent::new(dist, g, ComparisonOperator::LessOrEqual, 0.0).unwrap()
}

fn exact_linear_pf() -> f64 {
    Normal::new(0.0, 1.0)
        .unwrap()
        .cdf(-3.0 / 2.0_f64.sqrt())
}

#[rstest]
#[case(1)]
#[case(10)]
#[case(1000)]
fn block_sizes(linear_event: ThresholdEvent, #[case] block_size: usize) {
    let _ = pretty_env_logger::try_init();

    let cfg = SimulationConfig::builder()
        .maximum_outer_sampling(1_000_000 / block_size)
        .block_size(block_size)
        .maximum_coefficient_of_variation(0.05)
        .build();
    let rslt = ProbabilitySimulation::new(linear_event, cfg).run().unwrap();
    println!("{rslt}");

    assert!(rslt.coefficient_of_variation() <= 0.05);
    assert_eq!(rslt.block_size, block_size);
    assert_abs_diff_eq!(
        rslt.probability_estimate,
        exact_linear_pf(),
        epsilon = 5.0 * rslt.standard_deviation()
    );
    // The exact probability lies within the 99.99% confidence interval
    let half_length = 0.5 * rslt.confidence_length(0.9999).unwrap();
    assert!((rslt.probability_estimate - exact_linear_pf()).abs() <= half_length);
}

#[rstest]
fn upper_tail_event(linear_event: ThresholdEvent) {
    // Complement of the failure event
    let safe = ThresholdEvent::new(
        linear_event.distribution().clone(),
        linear_event.function().clone(),
        ComparisonOperator::Greater,
        0.0,
    )
    .unwrap();
    let cfg = SimulationConfig::builder()
        .maximum_outer_sampling(100)
        .block_size(100)
        .maximum_coefficient_of_variation(0.0)
        .build();
    let rslt = ProbabilitySimulation::new(safe, cfg).run().unwrap();
    assert_eq!(rslt.sample_size(), 10_000);
    assert_abs_diff_eq!(
        rslt.probability_estimate,
        1.0 - exact_linear_pf(),
        epsilon = 5.0 * rslt.standard_deviation()
    );
}

#[rstest]
fn experiment_matches_simulation(linear_event: ThresholdEvent) {
    let cfg = SimulationConfig::builder()
        .maximum_outer_sampling(50)
        .block_size(20)
        .seed(99)
        .maximum_coefficient_of_variation(0.0)
        .build();

    // Replay the input points of the simulation
    let mut experiment = MonteCarloExperiment::new(linear_event.distribution().clone(), 99);
    let realizations = experiment
        .generate(1000)
        .iter()
        .filter(|x| linear_event.is_realized(x).unwrap())
        .count();

    let rslt = ProbabilitySimulation::new(linear_event, cfg).run().unwrap();
    assert_eq!(rslt.realizations, realizations);
}
