use raphson::root_finding::config::NewtonCfg;
use raphson::root_finding::newton::{newton, NewtonError};
use raphson::root_finding::report::{DerivativeSource, ToleranceSatisfied};
use raphson::root_finding::tolerances::StoppingCriterion;

type TestResult = Result<(), NewtonError>;

#[test]
fn finds_sqrt_2_with_analytic_derivative() -> TestResult {
    let f  = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;
    let tol = 1e-12;

    let cfg = NewtonCfg::new()
        .set_tol(tol)?
        .set_max_iter(50)?;

    let res = newton(f, Some(df), 1.0, cfg)?;

    assert_eq!(res.tolerance_satisfied(), ToleranceSatisfied::AbsFxReached);
    assert_eq!(res.derivative(), DerivativeSource::Analytic);
    assert!((res.root() - 2.0_f64.sqrt()).abs() <= tol);
    assert!(res.f_root().abs() < tol);
    assert_eq!(res.iterates()[0], 1.0);
    assert_eq!(res.iterations(), res.iterates().len() - 1);
    Ok(())
}

#[test]
fn finds_sqrt_2_with_fd_derivative() -> TestResult {
    let f   = |x: f64| x * x - 2.0;
    let tol = 1e-12;

    let cfg = NewtonCfg::new()
        .set_tol(tol)?
        .set_max_iter(60)?;

    let res = newton(f, None::<fn(f64)->f64>, 1.0, cfg)?;

    assert_eq!(res.tolerance_satisfied(), ToleranceSatisfied::AbsFxReached);
    assert_eq!(res.derivative(), DerivativeSource::FiniteDifference);
    assert!((res.root() - 2.0_f64.sqrt()).abs() <= tol);
    Ok(())
}

#[test]
fn evaluation_counts() -> TestResult {
    let f  = |x: f64| x * x - 4.0;
    let df = |x: f64| 2.0 * x;
    let cfg = NewtonCfg::new().set_tol(1e-7)?;

    // f(x0), then f'(x) and f(x_next) per step
    let res = newton(f, Some(df), 3.0, cfg)?;
    assert_eq!(res.evaluations(), 1 + 2 * res.iterations());

    // finite differences spend two f calls per derivative
    let res = newton(f, None::<fn(f64)->f64>, 3.0, cfg)?;
    assert_eq!(res.evaluations(), 1 + 3 * res.iterations());
    Ok(())
}

#[test]
fn step_size_criterion_reports_step_size() -> TestResult {
    let f  = |x: f64| x * x - 4.0;
    let df = |x: f64| 2.0 * x;

    let cfg = NewtonCfg::new()
        .set_tol(1e-6)?
        .set_criterion(StoppingCriterion::StepSize);

    let res = newton(f, Some(df), 3.0, cfg)?;
    assert_eq!(res.tolerance_satisfied(), ToleranceSatisfied::StepSizeReached);
    assert!((res.root() - 2.0).abs() < 1e-9);

    let xs = res.iterates();
    let n  = xs.len();
    assert!((xs[n - 1] - xs[n - 2]).abs() < 1e-6);
    Ok(())
}

#[test]
fn step_size_criterion_still_bounded_by_max_iter() -> TestResult {
    let f  = |x: f64| x * x * x;
    let df = |x: f64| 3.0 * x * x;

    let cfg = NewtonCfg::new().set_criterion(StoppingCriterion::StepSize);
    let err = newton(f, Some(df), 1000.0, cfg).unwrap_err();
    assert!(matches!(err, NewtonError::NotConverged { max_iter: 20, .. }));
    Ok(())
}

#[test]
fn default_config_converges_on_linear() -> TestResult {
    let f  = |x: f64| 2.0 * x - 6.0;
    let df = |_x: f64| 2.0;

    let res = newton(f, Some(df), 10.0, NewtonCfg::default())?;
    assert_eq!(res.iterates(), &[10.0, 3.0]);
    assert_eq!(res.f_root(), 0.0);
    Ok(())
}

#[test]
fn fd_zero_slope_is_zero_derivative() {
    let f   = |x: f64| x * x;
    let err = newton(f, None::<fn(f64)->f64>, 0.0, NewtonCfg::new()).unwrap_err();
    assert_eq!(err, NewtonError::ZeroDerivative { x: 0.0, iteration: 0 });
}

#[test]
fn negative_zero_derivative_is_zero_derivative() {
    let err = newton(|_x: f64| 1.0, Some(|_x: f64| -0.0), 4.0, NewtonCfg::new()).unwrap_err();
    assert!(matches!(err, NewtonError::ZeroDerivative { x, iteration: 0 } if x == 4.0));
}

#[test]
fn fd_step_unrepresentable_near_huge_x() -> TestResult {
    let x0 = f64::MAX;
    let f  = |x: f64| x;

    let cfg = NewtonCfg::new().set_max_iter(2)?;

    let err = newton(f, None::<fn(f64)->f64>, x0, cfg).unwrap_err();
    assert!(matches!(err, NewtonError::FiniteDifferenceStepUnrepresentable { x, h: _ } if x == x0));
    Ok(())
}

#[test]
fn huge_budget_is_not_preallocated() -> TestResult {
    let f  = |x: f64| x * x - 4.0;
    let df = |x: f64| 2.0 * x;

    let cfg = NewtonCfg::new().set_max_iter(usize::MAX)?;
    let res = newton(f, Some(df), 3.0, cfg)?;
    assert!((res.root() - 2.0).abs() < 1e-6);
    Ok(())
}

#[test]
fn invalid_guess_nan_rejected() {
    let f   = |x: f64| x;
    let cfg = NewtonCfg::new();
    let err = newton(f, None::<fn(f64)->f64>, f64::NAN, cfg).unwrap_err();
    assert!(matches!(err, NewtonError::InvalidGuess { x0 } if x0.is_nan()));
}

#[test]
fn parent_iterate_reproduces_newton_update_on_final_step() -> TestResult {
    let f  = |x: f64| x * x - 2.0;
    let df = |x: f64| 2.0 * x;

    let cfg = NewtonCfg::new()
        .set_tol(1e-12)?
        .set_max_iter(50)?;

    let res = newton(f, Some(df), 1.0, cfg)?;

    let xs = res.iterates();
    let x_prev = xs[xs.len() - 2];
    let x_newton = x_prev - f(x_prev) / df(x_prev);
    assert_eq!(x_newton, res.root());
    Ok(())
}

#[test]
fn stateful_closures_are_accepted() -> TestResult {
    let mut seen = Vec::new();
    let f = |x: f64| { seen.push(x); x * x - 9.0 };

    let res = newton(f, Some(|x: f64| 2.0 * x), 4.0, NewtonCfg::new())?;
    assert!((res.root() - 3.0).abs() < 1e-6);
    assert_eq!(seen.len(), res.iterates().len());
    Ok(())
}

#[cfg(feature = "serde")]
#[test]
fn report_serializes_iterates() -> TestResult {
    let f  = |x: f64| x - 1.0;
    let df = |_x: f64| 1.0;
    let res = newton(f, Some(df), 5.0, NewtonCfg::new())?;

    let json = serde_json::to_value(&res).unwrap();
    assert_eq!(json["iterates"], serde_json::json!([5.0, 1.0]));
    assert_eq!(json["tolerance_satisfied"], "AbsFxReached");
    Ok(())
}
