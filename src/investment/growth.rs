//! 월 복리 기반 투자 성장 계산기.
//!
//! 매월 적립금을 먼저 더한 뒤 한 달치 이자를 적용한다(월초 적립 모델).
//! 연산 순서를 바꾸면 반올림 결과가 달라지므로 순서를 유지해야 한다.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// 성장 계산 입력 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrowthError {
    /// 입력값 오류
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// 계산할 수 있는 최대 투자 기간 [년]. 화면 쪽 상한(`projection.max_years`)은 이보다 작게 둔다.
pub const MAX_YEARS: u32 = 1_000;

/// 투자 계획 입력. 값이 바뀔 때마다 새로 만든다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPlan {
    /// 초기 투자금
    pub initial_investment: f64,
    /// 월 적립금
    pub monthly_contribution: f64,
    /// 투자 기간 [년]
    pub years: u32,
    /// 연 기대수익률 [%] (7 → 7%)
    pub annual_return_percent: f64,
}

impl Default for InvestmentPlan {
    fn default() -> Self {
        Self {
            initial_investment: 10_000.0,
            monthly_contribution: 500.0,
            years: 10,
            annual_return_percent: 7.0,
        }
    }
}

impl InvestmentPlan {
    /// 월 이율. `연수익률 / 12 / 100` 순서로 계산한다.
    pub fn monthly_rate(&self) -> f64 {
        self.annual_return_percent / 12.0 / 100.0
    }

    /// 원금 + 총 적립금.
    pub fn total_contributions(&self) -> f64 {
        self.initial_investment + self.monthly_contribution * f64::from(self.years) * 12.0
    }

    /// 수익률만 바꾼 새 계획을 반환한다.
    pub fn with_return(self, annual_return_percent: f64) -> Self {
        Self {
            annual_return_percent,
            ..self
        }
    }

    fn validate(&self) -> Result<(), GrowthError> {
        let fields = [
            ("initial investment", self.initial_investment),
            ("monthly contribution", self.monthly_contribution),
            ("annual return", self.annual_return_percent),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(GrowthError::InvalidInput(format!(
                    "{name} must be a finite number"
                )));
            }
        }
        if self.initial_investment < 0.0 {
            return Err(GrowthError::InvalidInput(
                "initial investment must not be negative".into(),
            ));
        }
        if self.years > MAX_YEARS {
            return Err(GrowthError::InvalidInput(format!(
                "years must be at most {MAX_YEARS}, got {}",
                self.years
            )));
        }
        Ok(())
    }
}

/// 사용자가 입력한 기간 값을 정수 연수로 변환한다.
/// 음수, 소수, 비유한 값은 거부한다.
pub fn parse_years(raw: f64) -> Result<u32, GrowthError> {
    if !raw.is_finite() || raw < 0.0 {
        return Err(GrowthError::InvalidInput(
            "years must be a non-negative whole number".into(),
        ));
    }
    if raw.fract() != 0.0 {
        return Err(GrowthError::InvalidInput(format!(
            "years must be a whole number, got {raw}"
        )));
    }
    if raw > f64::from(u32::MAX) {
        return Err(GrowthError::InvalidInput(format!("years out of range: {raw}")));
    }
    Ok(raw as u32)
}

/// 투자 수익률(ROI). 총 납입액이 0이면 정의되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "percent", rename_all = "snake_case")]
pub enum Roi {
    Percent(f64),
    Undefined,
}

impl Roi {
    fn from_totals(future_value: f64, total_contributions: f64) -> Self {
        if total_contributions == 0.0 {
            Roi::Undefined
        } else {
            Roi::Percent((future_value - total_contributions) / total_contributions * 100.0)
        }
    }

    pub fn percent(&self) -> Option<f64> {
        match self {
            Roi::Percent(p) => Some(*p),
            Roi::Undefined => None,
        }
    }
}

impl fmt::Display for Roi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Roi::Percent(p) => write!(f, "{}", crate::money::percent(*p)),
            Roi::Undefined => write!(f, "n/a"),
        }
    }
}

/// 연도별 예측값 생성 방식.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionStrategy {
    /// 각 연도마다 처음부터 다시 계산한다. O(years²)
    Recompute,
    /// 한 번의 루프에서 연말 값을 기록한다.
    #[default]
    Incremental,
}

/// 연도별 예측 지점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: u32,
    /// 해당 연도 말 평가액(반올림 전)
    pub value: f64,
}

impl ProjectionPoint {
    pub fn rounded_value(&self) -> f64 {
        round_half_up(self.value)
    }
}

/// 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// 최종 평가액(반올림 전)
    pub future_value: f64,
    /// 표시용 평가액(정수 단위 반올림)
    pub rounded_future_value: f64,
    pub total_contributions: f64,
    pub roi: Roi,
    pub series: Vec<ProjectionPoint>,
}

/// 기본 방식으로 투자 성장을 계산한다.
pub fn project(plan: &InvestmentPlan) -> Result<Projection, GrowthError> {
    project_with(plan, ProjectionStrategy::default())
}

/// 지정한 방식으로 투자 성장을 계산한다.
pub fn project_with(
    plan: &InvestmentPlan,
    strategy: ProjectionStrategy,
) -> Result<Projection, GrowthError> {
    plan.validate()?;
    let future_value = future_value_after_months(plan, u64::from(plan.years) * 12);
    let total_contributions = plan.total_contributions();
    let series = match strategy {
        ProjectionStrategy::Recompute => recompute_series(plan),
        ProjectionStrategy::Incremental => incremental_series(plan),
    };
    let roi = Roi::from_totals(future_value, total_contributions);
    debug!(
        years = plan.years,
        ?strategy,
        future_value,
        %roi,
        "projection computed"
    );
    Ok(Projection {
        future_value,
        rounded_future_value: round_half_up(future_value),
        total_contributions,
        roi,
        series,
    })
}

/// `months` 개월 동안 적립 후 이자를 적용한 평가액.
pub fn future_value_after_months(plan: &InvestmentPlan, months: u64) -> f64 {
    let growth = 1.0 + plan.monthly_rate();
    let mut value = plan.initial_investment;
    for _ in 0..months {
        value = (value + plan.monthly_contribution) * growth;
    }
    value
}

fn recompute_series(plan: &InvestmentPlan) -> Vec<ProjectionPoint> {
    (1..=plan.years)
        .map(|year| ProjectionPoint {
            year,
            value: future_value_after_months(plan, u64::from(year) * 12),
        })
        .collect()
}

fn incremental_series(plan: &InvestmentPlan) -> Vec<ProjectionPoint> {
    let growth = 1.0 + plan.monthly_rate();
    let mut value = plan.initial_investment;
    let mut series = Vec::new();
    for year in 1..=plan.years {
        for _ in 0..12 {
            value = (value + plan.monthly_contribution) * growth;
        }
        series.push(ProjectionPoint { year, value });
    }
    series
}

/// 0.5는 +∞ 방향으로 올리는 반올림 (-2.5 → -2, 2.5 → 3).
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(initial: f64, monthly: f64, years: u32, rate: f64) -> InvestmentPlan {
        InvestmentPlan {
            initial_investment: initial,
            monthly_contribution: monthly,
            years,
            annual_return_percent: rate,
        }
    }

    #[test]
    fn monthly_rate_matches_reference_order() {
        let p = plan(0.0, 0.0, 1, 7.0);
        assert_eq!(p.monthly_rate(), 7.0 / 12.0 / 100.0);
    }

    #[test]
    fn zero_years_returns_principal() {
        let res = project(&plan(2_500.0, 100.0, 0, 7.0)).unwrap();
        assert_eq!(res.future_value, 2_500.0);
        assert!(res.series.is_empty());
        assert_eq!(res.total_contributions, 2_500.0);
        assert_eq!(res.roi, Roi::Percent(0.0));
    }

    #[test]
    fn contribution_is_added_before_interest() {
        // 1개월: (0 + 100) * 1.01
        let res = future_value_after_months(&plan(0.0, 100.0, 1, 12.0), 1);
        assert!((res - 101.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_contributions_is_undefined_roi() {
        let res = project(&plan(0.0, 0.0, 5, 9.0)).unwrap();
        assert_eq!(res.future_value, 0.0);
        assert_eq!(res.roi, Roi::Undefined);
        assert_eq!(res.roi.to_string(), "n/a");
    }

    #[test]
    fn strategies_are_bit_identical() {
        let p = plan(10_000.0, 500.0, 30, 7.0);
        let a = project_with(&p, ProjectionStrategy::Recompute).unwrap();
        let b = project_with(&p, ProjectionStrategy::Incremental).unwrap();
        assert_eq!(a.series.len(), b.series.len());
        for (x, y) in a.series.iter().zip(b.series.iter()) {
            assert_eq!(x.year, y.year);
            assert_eq!(x.value.to_bits(), y.value.to_bits());
        }
        let last = b.series.last().unwrap();
        assert_eq!(last.value.to_bits(), b.future_value.to_bits());
    }

    #[test]
    fn rejects_non_finite_and_negative_principal() {
        assert!(project(&plan(f64::NAN, 0.0, 1, 5.0)).is_err());
        assert!(project(&plan(0.0, f64::INFINITY, 1, 5.0)).is_err());
        assert!(project(&plan(-1.0, 0.0, 1, 5.0)).is_err());
    }

    #[test]
    fn rejects_years_beyond_limit() {
        assert!(project(&plan(1_000.0, 10.0, u32::MAX, 5.0)).is_err());
        assert!(project(&plan(1_000.0, 10.0, MAX_YEARS + 1, 5.0)).is_err());
        let long = plan(1_000.0, 10.0, MAX_YEARS, 1.0);
        let res = project_with(&long, ProjectionStrategy::Incremental).unwrap();
        assert_eq!(res.series.len(), MAX_YEARS as usize);
    }

    #[test]
    fn roi_display_rounds_exact_halves_up() {
        assert_eq!(Roi::Percent(0.125).to_string(), "0.13%");
        assert_eq!(Roi::Percent(53.062_640_245_817_49).to_string(), "53.06%");
    }

    #[test]
    fn parse_years_policy() {
        assert_eq!(parse_years(0.0), Ok(0));
        assert_eq!(parse_years(12.0), Ok(12));
        assert!(parse_years(2.5).is_err());
        assert!(parse_years(-1.0).is_err());
        assert!(parse_years(f64::NAN).is_err());
    }

    #[test]
    fn round_half_up_matches_reference_rounding() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(107_143.848), 107_144.0);
        assert_eq!(round_half_up(0.499_999_999_999_999_94), 0.0);
    }
}
