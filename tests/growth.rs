//! 투자 성장 계산 회귀 테스트.
use financial_planner::investment::{
    project, project_with, InvestmentPlan, ProjectionStrategy, Roi,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn plan(initial: f64, monthly: f64, years: u32, rate: f64) -> InvestmentPlan {
    InvestmentPlan {
        initial_investment: initial,
        monthly_contribution: monthly,
        years,
        annual_return_percent: rate,
    }
}

#[test]
fn reference_plan_rounds_to_known_value() {
    // 10000 원금, 월 500, 10년, 7%
    let res = project(&plan(10_000.0, 500.0, 10, 7.0)).expect("projection");
    assert_eq!(res.rounded_future_value, 107_144.0);
    assert_close("fv", res.future_value, 107_143.848_172_072_25, 1e-12);
    assert_eq!(res.total_contributions, 70_000.0);
    assert_close("roi", res.roi.percent().unwrap(), 53.062_640_245_817_49, 1e-10);
}

#[test]
fn one_year_point_matches_first_series_entry() {
    let one = project(&plan(10_000.0, 500.0, 1, 7.0)).unwrap();
    let ten = project(&plan(10_000.0, 500.0, 10, 7.0)).unwrap();
    assert_eq!(one.rounded_future_value, 16_955.0);
    assert_eq!(ten.series[0].value.to_bits(), one.future_value.to_bits());
}

#[test]
fn zero_years_keeps_principal_and_empty_series() {
    let res = project(&plan(10_000.0, 500.0, 0, 7.0)).unwrap();
    assert_eq!(res.future_value, 10_000.0);
    assert_eq!(res.rounded_future_value, 10_000.0);
    assert!(res.series.is_empty());
}

#[test]
fn nothing_invested_guards_roi() {
    for rate in [-20.0, 0.0, 7.0, 250.0] {
        let res = project(&plan(0.0, 0.0, 8, rate)).unwrap();
        assert_eq!(res.future_value, 0.0);
        assert_eq!(res.roi, Roi::Undefined);
    }
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let p = plan(1_234.5, 321.0, 17, 6.3);
    for strategy in [ProjectionStrategy::Recompute, ProjectionStrategy::Incremental] {
        let a = project_with(&p, strategy).unwrap();
        let b = project_with(&p, strategy).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn higher_return_grows_more() {
    for years in [1, 5, 30] {
        let mut prev = f64::NEG_INFINITY;
        for rate in [-10.0, -1.0, 0.0, 0.5, 3.0, 7.0, 12.0] {
            let fv = project(&plan(5_000.0, 200.0, years, rate)).unwrap().future_value;
            assert!(fv > prev, "years={years} rate={rate} fv={fv} prev={prev}");
            prev = fv;
        }
    }
}

#[test]
fn series_has_one_point_per_year() {
    for strategy in [ProjectionStrategy::Recompute, ProjectionStrategy::Incremental] {
        let res = project_with(&plan(100.0, 10.0, 25, 4.0), strategy).unwrap();
        assert_eq!(res.series.len(), 25);
        for (i, point) in res.series.iter().enumerate() {
            assert_eq!(point.year, i as u32 + 1);
        }
        assert_eq!(
            res.series.last().unwrap().value.to_bits(),
            res.future_value.to_bits()
        );
    }
}

#[test]
fn negative_return_loses_money() {
    let res = project(&plan(1_000.0, 100.0, 5, -5.0)).unwrap();
    assert!(res.future_value < res.total_contributions);
    assert_eq!(res.total_contributions, 7_000.0);
    assert_eq!(res.rounded_future_value, 6_075.0);
    let roi = res.roi.percent().unwrap();
    assert!(roi < 0.0);
    assert_close("roi", roi, -13.217_509_419_298_286, 1e-10);
}

#[test]
fn zero_rate_is_plain_sum() {
    let res = project(&plan(1_000.0, 50.0, 3, 0.0)).unwrap();
    assert_eq!(res.future_value, 2_800.0);
    assert_eq!(res.roi, Roi::Percent(0.0));
}

#[test]
fn negative_contribution_is_accepted() {
    let res = project(&plan(10_000.0, -100.0, 2, 5.0)).unwrap();
    assert!(res.future_value < 10_000.0);
    assert_eq!(res.total_contributions, 7_600.0);
}
