use approx::assert_abs_diff_eq;
use reliability_bench::mc::SimulationConfig;
use reliability_bench::problems::BenchmarkProblem;
use reliability_bench::validation::{validate, BenchmarkCase};
use rstest::*;

use crate::{monte_carlo_use_case, use_case_tolerance};

#[rstest]
#[case(BenchmarkProblem::AxialStressedBeam)]
#[case(BenchmarkProblem::RP22)]
#[case(BenchmarkProblem::RP24)]
#[case(BenchmarkProblem::RP25)]
#[case(BenchmarkProblem::RP35)]
#[case(BenchmarkProblem::RP53)]
#[case(BenchmarkProblem::RP55)]
#[case(BenchmarkProblem::RP57)]
#[case(BenchmarkProblem::RP60)]
#[case(BenchmarkProblem::RP77)]
#[case(BenchmarkProblem::FourBranchSerialSystem)]
fn catalog_use_case(#[case] bench: BenchmarkProblem) {
    let problem = bench.problem().unwrap();
    println!("{problem}");
    let result = monte_carlo_use_case(&problem);
    assert!(result.sample_size() <= 100_000);
    assert_abs_diff_eq!(
        result.probability_estimate,
        problem.probability(),
        epsilon = use_case_tolerance(&result)
    );
}

#[test]
fn catalog_is_complete() {
    let all = BenchmarkProblem::all();
    assert_eq!(all.len(), 11);
    let names = all.iter().map(|p| p.name()).collect::<Vec<&str>>();
    assert!(names.contains(&"RP57"));
    assert!(names.contains(&"Axial stressed beam"));
    assert!(names.contains(&"Four-branch serial system"));
}

#[test]
fn validation_reports() {
    let _ = pretty_env_logger::try_init();

    for case in BenchmarkCase::catalog() {
        let report = case.run().unwrap();
        println!("{report}");
        assert!(report.passed(), "{report}");
        assert_eq!(report.problem, case.problem.name());
        assert_eq!(report.exact, case.problem.reference_probability());
    }
}

#[test]
fn rare_event_is_not_observed() {
    // RP77 has a failure probability of 2.6e-7, the simulation uses its whole budget
    let problem = BenchmarkProblem::RP77.problem().unwrap();
    let report = validate(&problem, &SimulationConfig::benchmark()).unwrap();
    assert_eq!(report.result.outer_sampling, 100_000);
    assert!(report.result.realizations <= 1);
    assert!(report.passed());
    assert_eq!(problem.function().calls_number(), 100_000);
}
