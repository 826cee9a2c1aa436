use reliability_bench::io::ConfigRepr;
use reliability_bench::mc::SimulationConfig;
use reliability_bench::problems::BenchmarkProblem;
use reliability_bench::validation::BenchmarkCase;
use reliability_bench::ReliabilityError;
use std::path::PathBuf;

fn data_path(file: &str) -> PathBuf {
    let manifest_dir =
        PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap_or(".".to_string()));
    manifest_dir.join("data").join(file)
}

#[test]
fn load_benchmark_cases() {
    let _ = pretty_env_logger::try_init();

    let cases = BenchmarkCase::from_yaml(data_path("benchmark.yaml")).unwrap();
    assert_eq!(cases.len(), 3);
    assert_eq!(cases[0].problem, BenchmarkProblem::AxialStressedBeam);
    assert_eq!(cases[0].simulation, SimulationConfig::benchmark());
    assert_eq!(cases[1].simulation.block_size, 10);
    assert_eq!(cases[1].simulation.seed, 2021);

    for case in &cases {
        let report = case.run().unwrap();
        println!("{report}");
        assert!(report.passed());
        assert!(report.result.sample_size() <= case.simulation.maximum_sample_size());
    }
}

#[test]
fn invalid_yaml() {
    let err = BenchmarkCase::loads_many("- problem: RP1000\n").unwrap_err();
    println!("{err}");
    let err = BenchmarkCase::from_yaml(data_path("missing.yaml")).unwrap_err();
    assert!(matches!(err, ReliabilityError::Config { .. }));
}

#[test]
fn invalid_settings_are_reported() {
    let case = BenchmarkCase {
        problem: BenchmarkProblem::RP22,
        simulation: SimulationConfig::builder().block_size(0).build(),
    };
    assert!(matches!(
        case.run(),
        Err(ReliabilityError::InvalidSimulation { .. })
    ));
}
