use plcore::error::PlError;
use plcore::sampler::{SampleOptions, Sampler};

#[test]
fn constant_expression_over_small_domain() {
    let mut sampler = Sampler::new("3");
    let points = sampler
        .sample_over(-2.0, 2.0, SampleOptions::default())
        .unwrap();
    assert_eq!(
        points,
        vec![(-2.0, 3.0), (-1.0, 3.0), (0.0, 3.0), (1.0, 3.0), (2.0, 3.0)]
    );
}

#[test]
fn labeled_expression_matches_unlabeled() {
    let mut plain = Sampler::new("3");
    let mut labeled = Sampler::new("y=3");
    let options = SampleOptions::default();
    assert_eq!(
        plain.sample_over(-2.0, 2.0, options).unwrap(),
        labeled.sample_over(-2.0, 2.0, options).unwrap()
    );
}

#[test]
fn linear_expression() {
    let mut sampler = Sampler::new("x+2");
    let points = sampler
        .sample_over(-5.0, 5.0, SampleOptions::default())
        .unwrap();
    let expected: Vec<(f64, f64)> = (-5..=5).map(|x| (f64::from(x), f64::from(x) + 2.0)).collect();
    assert_eq!(points, expected);
}

#[test]
fn quadratic_expression_with_label_and_caret() {
    let mut sampler = Sampler::new("y=x^2-4");
    assert_eq!(sampler.expression(), "y=x^2-4");
    assert_eq!(sampler.normalized(), "y=x**2-4");

    let points = sampler
        .sample_over(-5.0, 5.0, SampleOptions::default())
        .unwrap();
    let expected: Vec<(f64, f64)> = (-5..=5)
        .map(|x| (f64::from(x), f64::from(x).powi(2) - 4.0))
        .collect();
    assert_eq!(points, expected);
}

#[test]
fn default_domain_spans_minus_500_to_500_inclusive() {
    let mut sampler = Sampler::new("3");
    let points = sampler.sample().unwrap();
    assert_eq!(points.len(), 1001);
    assert_eq!(points[0].0, -500.0);
    assert_eq!(points[1000].0, 500.0);
    assert_eq!(points.last().unwrap().0, 500.0);
}

#[test]
fn zero_n_is_ignored_not_honored() {
    let mut sampler = Sampler::new("x**2+4");
    let points = sampler
        .sample_over(-5.0, 5.0, SampleOptions::points(0))
        .unwrap();
    // Falls back to unit step: 11 points, not 0.
    assert_eq!(points.len(), 11);
}

#[test]
fn explicit_n_yields_exactly_n_points() {
    let mut sampler = Sampler::new("x**2+4");
    let points = sampler
        .sample_over(-5.0, 5.0, SampleOptions::points(21))
        .unwrap();
    assert_eq!(points.len(), 21);
    assert_eq!(points[0].0, -5.0);
}

#[test]
fn smooth_yields_500_points() {
    let mut sampler = Sampler::new("x**2+4");
    let points = sampler
        .sample_over(-5.0, 5.0, SampleOptions::smooth())
        .unwrap();
    assert_eq!(points.len(), 500);
}

#[test]
fn very_smooth_yields_5000_points() {
    let mut sampler = Sampler::new("x**2+4");
    let points = sampler
        .sample_over(-5.0, 5.0, SampleOptions::very_smooth())
        .unwrap();
    assert_eq!(points.len(), 5000);
}

#[test]
fn n_wins_over_smooth() {
    let mut sampler = Sampler::new("x**2+4");
    let options = SampleOptions {
        n: Some(7),
        smooth: true,
        ..SampleOptions::default()
    };
    let points = sampler.sample_over(-5.0, 5.0, options).unwrap();
    assert_eq!(points.len(), 7);
}

#[test]
fn smooth_wins_over_very_smooth() {
    let mut sampler = Sampler::new("x**2+4");
    let options = SampleOptions {
        smooth: true,
        very_smooth: true,
        ..SampleOptions::default()
    };
    let points = sampler.sample_over(-5.0, 5.0, options).unwrap();
    assert_eq!(points.len(), 500);
}

#[test]
fn unknown_symbol_aborts_with_no_output() {
    let mut sampler = Sampler::new("a+2");
    let result = sampler.sample_over(-2.0, 2.0, SampleOptions::default());
    assert!(matches!(result, Err(PlError::Evaluation { .. })));
}

#[test]
fn reassigning_the_expression_renormalizes() {
    let mut sampler = Sampler::new("x^2");
    assert_eq!(sampler.normalized(), "x**2");

    sampler.set_expression("x^3+1");
    assert_eq!(sampler.expression(), "x^3+1");
    assert_eq!(sampler.normalized(), "x**3+1");

    let points = sampler
        .sample_over(0.0, 2.0, SampleOptions::default())
        .unwrap();
    assert_eq!(points, vec![(0.0, 1.0), (1.0, 2.0), (2.0, 9.0)]);
}

#[test]
fn one_point_request_samples_only_x_min() {
    // n == 1 makes the step infinite; documented to produce the single
    // sample at x_min.
    let mut sampler = Sampler::new("x+1");
    let points = sampler
        .sample_over(-5.0, 5.0, SampleOptions::points(1))
        .unwrap();
    assert_eq!(points, vec![(-5.0, -4.0)]);
}
