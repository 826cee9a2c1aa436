use approx::{assert_abs_diff_eq, assert_relative_eq};
use reliability_bench::problems::rp57;
use reliability_bench::Point;

use crate::{monte_carlo_use_case, use_case_tolerance};

#[test]
fn rp57_reference() {
    let problem = rp57().unwrap();
    println!("{problem}");

    // Check probability
    let pf = problem.probability();
    assert_relative_eq!(pf, 2.753582466985108e-02, max_relative = 1e-15);

    // Check function
    let event = problem.event();
    let function = event.function();
    let x = Point::zeros(2);
    let y = function.evaluate(&x).unwrap();
    assert_eq!(y.len(), 1);
    assert_abs_diff_eq!(y[0], 3.0);
}

#[test]
fn rp57_use_case() {
    let problem = rp57().unwrap();
    let result = monte_carlo_use_case(&problem);
    assert_abs_diff_eq!(
        result.probability_estimate,
        problem.probability(),
        epsilon = use_case_tolerance(&result)
    );
}
