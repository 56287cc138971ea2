//! 대시보드 입력 스냅샷과 계산 결과 묶음.
//!
//! 입력이 바뀔 때마다 `DashboardInputs`를 새로 만들고 `DashboardView::compute`를
//! 다시 호출한다. 공유 가변 상태는 두지 않는다.

use serde::{Deserialize, Serialize};

use crate::config::DefaultsConfig;
use crate::investment::growth::{
    project_with, GrowthError, InvestmentPlan, Projection, ProjectionStrategy,
};
use crate::investment::suggestions::{
    compare_plans, suggestions_for, InvestmentSuggestion, PlanComparison,
};
use crate::notification::Notification;
use crate::planning::expenses::{ExpenseCategory, EXPENSE_BREAKDOWN};
use crate::planning::income::{advice_for, IncomeType};
use crate::planning::savings::{predict_savings, SavingsPrediction};

/// 사용자 입력 전체의 불변 스냅샷.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardInputs {
    pub income_type: IncomeType,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub plan: InvestmentPlan,
}

impl Default for DashboardInputs {
    fn default() -> Self {
        Self {
            income_type: IncomeType::Salaried,
            monthly_income: 8500.0,
            monthly_expenses: 5200.0,
            plan: InvestmentPlan::default(),
        }
    }
}

impl From<&DefaultsConfig> for DashboardInputs {
    fn from(cfg: &DefaultsConfig) -> Self {
        Self {
            income_type: cfg.income_type,
            monthly_income: cfg.monthly_income,
            monthly_expenses: cfg.monthly_expenses,
            plan: InvestmentPlan {
                initial_investment: cfg.initial_investment,
                monthly_contribution: cfg.monthly_contribution,
                years: cfg.years,
                annual_return_percent: cfg.annual_return_percent,
            },
        }
    }
}

impl DashboardInputs {
    /// "Enter" 버튼을 눌렀을 때의 확인 알림.
    pub fn submit(&self) -> Notification {
        Notification::financial_info_updated(
            self.income_type,
            self.monthly_income,
            self.monthly_expenses,
        )
    }
}

/// 한 스냅샷에서 계산한 화면 데이터.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub advice: &'static str,
    pub savings: SavingsPrediction,
    pub expenses: &'static [ExpenseCategory],
    pub projection: Projection,
    pub suggestions: &'static [InvestmentSuggestion],
    pub comparisons: Vec<PlanComparison>,
}

impl DashboardView {
    pub fn compute(
        inputs: &DashboardInputs,
        strategy: ProjectionStrategy,
    ) -> Result<Self, GrowthError> {
        Ok(Self {
            advice: advice_for(inputs.income_type),
            savings: predict_savings(inputs.monthly_income, &EXPENSE_BREAKDOWN),
            expenses: &EXPENSE_BREAKDOWN,
            projection: project_with(&inputs.plan, strategy)?,
            suggestions: suggestions_for(inputs.income_type),
            comparisons: compare_plans(&inputs.plan, strategy)?,
        })
    }
}
