use approx::{assert_abs_diff_eq, assert_relative_eq};
use reliability_bench::problems::rp60;
use reliability_bench::Point;

use crate::{monte_carlo_use_case, use_case_tolerance};

#[test]
fn rp60_reference() {
    let problem = rp60().unwrap();
    println!("{problem}");

    // Check probability
    let pf = problem.probability();
    assert_relative_eq!(pf, 4.6e-02, max_relative = 1e-15);

    // Check function
    let event = problem.event();
    let function = event.function();
    let x = Point::zeros(5);
    let y = function.evaluate(&x).unwrap();
    assert_eq!(y.len(), 1);
    assert_abs_diff_eq!(y[0], 0.0);
}

#[test]
fn rp60_use_case() {
    let problem = rp60().unwrap();
    let result = monte_carlo_use_case(&problem);
    assert_abs_diff_eq!(
        result.probability_estimate,
        problem.probability(),
        epsilon = use_case_tolerance(&result)
    );
}
