use serde::Serialize;

use crate::planning::expenses::{self, ExpenseCategory};

/// 저축 예측 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsPrediction {
    /// 월 예상 저축액
    pub potential_savings: f64,
    /// 저축률 [%]. 소득이 0이면 None.
    pub savings_rate_percent: Option<f64>,
}

/// 월 소득과 지출 내역으로 저축 가능액을 예측한다.
///
/// 지출은 입력한 월 지출 금액이 아니라 지출 내역 합계를 사용한다.
pub fn predict_savings(monthly_income: f64, breakdown: &[ExpenseCategory]) -> SavingsPrediction {
    let potential_savings = monthly_income - expenses::total(breakdown);
    let savings_rate_percent = if monthly_income != 0.0 {
        Some(potential_savings / monthly_income * 100.0)
    } else {
        None
    };
    SavingsPrediction {
        potential_savings,
        savings_rate_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::expenses::EXPENSE_BREAKDOWN;

    #[test]
    fn default_income_prediction() {
        let p = predict_savings(8500.0, &EXPENSE_BREAKDOWN);
        assert_eq!(p.potential_savings, 3300.0);
        let rate = p.savings_rate_percent.unwrap();
        assert!((rate - 38.823_529_411_764_7).abs() < 1e-9);
    }

    #[test]
    fn zero_income_has_no_rate() {
        let p = predict_savings(0.0, &EXPENSE_BREAKDOWN);
        assert_eq!(p.potential_savings, -5200.0);
        assert_eq!(p.savings_rate_percent, None);
    }

    #[test]
    fn deficit_gives_negative_rate() {
        let p = predict_savings(4000.0, &EXPENSE_BREAKDOWN);
        assert!(p.savings_rate_percent.unwrap() < 0.0);
    }
}
