//! 대시보드 스냅샷, 저축 예측, 모의 결제 통합 테스트.
use financial_planner::{
    dashboard::{DashboardInputs, DashboardView},
    investment::{ProjectionStrategy, COMPARATIVE_PLANS},
    payment::{initiate_payment, PaymentError, UpiId},
    planning::{expenses, predict_savings, IncomeType, EXPENSE_BREAKDOWN},
};

#[test]
fn default_dashboard_matches_reference_screen() {
    let view = DashboardView::compute(&DashboardInputs::default(), ProjectionStrategy::Recompute)
        .expect("view");
    assert!(view.advice.starts_with("Focus on maximizing your 401(k)"));
    assert_eq!(view.savings.potential_savings, 3300.0);
    let rate = view.savings.savings_rate_percent.unwrap();
    assert_eq!(format!("{rate:.2}"), "38.82");
    assert_eq!(expenses::total(view.expenses), 5200.0);
    assert_eq!(view.projection.rounded_future_value, 107_144.0);
    assert_eq!(view.projection.roi.to_string(), "53.06%");
}

#[test]
fn savings_ignore_entered_expense_figure() {
    let inputs = DashboardInputs {
        monthly_expenses: 100.0,
        ..DashboardInputs::default()
    };
    let view = DashboardView::compute(&inputs, ProjectionStrategy::default()).unwrap();
    assert_eq!(
        view.savings,
        predict_savings(inputs.monthly_income, &EXPENSE_BREAKDOWN)
    );
}

#[test]
fn income_type_switches_suggestions_and_advice() {
    let inputs = DashboardInputs {
        income_type: IncomeType::Business,
        ..DashboardInputs::default()
    };
    let view = DashboardView::compute(&inputs, ProjectionStrategy::default()).unwrap();
    let names: Vec<&str> = view.suggestions.iter().map(|s| s.name).collect();
    assert_eq!(names, ["SEP IRA", "Real Estate", "Business Reinvestment"]);
    assert!(view.advice.contains("Solo 401(k)"));
}

#[test]
fn comparisons_follow_plan_returns() {
    let view = DashboardView::compute(&DashboardInputs::default(), ProjectionStrategy::default())
        .unwrap();
    for (cmp, plan) in view.comparisons.iter().zip(COMPARATIVE_PLANS) {
        assert_eq!(cmp.plan.name, plan.name);
    }
    // Balanced(7%)는 기본 계획과 같은 수익률
    assert_eq!(view.comparisons[1].projection, view.projection);
}

#[test]
fn mock_payment_flow() {
    assert_eq!(UpiId::parse(""), Err(PaymentError::Empty));
    let id = UpiId::parse("merchant@okaxis").unwrap();
    let receipt = initiate_payment(&id);
    assert_eq!(
        receipt.notification.description,
        "Payment sent to UPI ID: merchant@okaxis"
    );
}

#[test]
fn snapshot_serializes_to_json() {
    let json = serde_json::to_value(DashboardInputs::default()).unwrap();
    assert_eq!(json["income_type"], "salaried");
    assert_eq!(json["plan"]["years"], 10);
}
