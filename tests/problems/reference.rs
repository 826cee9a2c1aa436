use approx::{assert_abs_diff_eq, assert_relative_eq};
use reliability_bench::problems::BenchmarkProblem;
use reliability_bench::Point;
use rstest::*;
use std::f64::consts::SQRT_2;

#[rstest]
#[case(BenchmarkProblem::RP22, 4.21e-3)]
#[case(BenchmarkProblem::RP24, 2.86e-3)]
#[case(BenchmarkProblem::RP25, 4.15e-5)]
#[case(BenchmarkProblem::RP35, 3.47e-3)]
#[case(BenchmarkProblem::RP53, 3.13e-2)]
#[case(BenchmarkProblem::RP55, 0.56)]
#[case(BenchmarkProblem::FourBranchSerialSystem, 0.0022)]
fn reference_probability(#[case] bench: BenchmarkProblem, #[case] pf: f64) {
    let problem = bench.problem().unwrap();
    assert_relative_eq!(problem.probability(), pf, max_relative = 1e-15);
    assert_relative_eq!(bench.reference_probability(), pf, max_relative = 1e-15);
}

#[rstest]
// 2.5 - (x1 + x2) / sqrt(2) + 0.1 (x1 - x2)^2
#[case(BenchmarkProblem::RP22, [0.0, 0.0], 2.5)]
#[case(BenchmarkProblem::RP22, [1.0, -1.0], 2.9)]
// 2.5 - 0.2357 (x1 - x2) + 0.00463 (x1 + x2 - 20)^4
#[case(BenchmarkProblem::RP24, [10.0, 10.0], 2.5)]
#[case(BenchmarkProblem::RP24, [12.0, 10.0], 2.10268)]
// max(16, 32) then max(17, -15)
#[case(BenchmarkProblem::RP25, [0.0, 0.0], 32.0)]
#[case(BenchmarkProblem::RP25, [3.0, 1.0], 17.0)]
// min(3, 4.5) then min(0, 4.5)
#[case(BenchmarkProblem::RP35, [0.0, 0.0], 3.0)]
#[case(BenchmarkProblem::RP35, [0.0, 3.0], 0.0)]
#[case(BenchmarkProblem::RP53, [0.0, 1.0], 2.0)]
#[case(BenchmarkProblem::RP53, [0.0, -4.0], 3.0)]
// the quartic branches are the smallest for these two points
#[case(BenchmarkProblem::RP55, [0.0, 0.0], 0.2)]
#[case(BenchmarkProblem::RP55, [1.0, 0.0], 0.8 - 1.0 / SQRT_2)]
#[case(BenchmarkProblem::FourBranchSerialSystem, [0.0, 0.0], 3.0)]
#[case(BenchmarkProblem::FourBranchSerialSystem, [1.0, 1.0], 3.0 - SQRT_2)]
fn reference_function(#[case] bench: BenchmarkProblem, #[case] x: [f64; 2], #[case] g: f64) {
    let problem = bench.problem().unwrap();
    let function = problem.event().function();
    let y = function.evaluate(&Point::from_row_slice(&x)).unwrap();
    assert_eq!(y.len(), 1);
    assert_abs_diff_eq!(y[0], g, epsilon = 1e-12);
}
