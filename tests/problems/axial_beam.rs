use approx::{assert_abs_diff_eq, assert_relative_eq};
use reliability_bench::problems::axial_stressed_beam;

use crate::{monte_carlo_use_case, use_case_tolerance};

#[test]
fn axial_stressed_beam_reference() {
    let problem = axial_stressed_beam().unwrap();
    println!("pf = {}", problem.probability());
    assert_relative_eq!(
        problem.probability(),
        0.029198194624830955,
        max_relative = 1e-15
    );
    assert_eq!(problem.name(), "Axial stressed beam");
    assert_eq!(problem.distribution().description(), &["R", "F"]);
}

#[test]
fn axial_stressed_beam_use_case() {
    let problem = axial_stressed_beam().unwrap();
    let result = monte_carlo_use_case(&problem);
    assert_abs_diff_eq!(
        result.probability_estimate,
        problem.probability(),
        epsilon = use_case_tolerance(&result)
    );
}
