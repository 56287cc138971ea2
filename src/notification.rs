use serde::Serialize;
use std::fmt;

use crate::money;
use crate::planning::income::IncomeType;

/// 사용자 동작 후 잠깐 띄우는 알림.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    /// 소득/지출 입력 확인 알림.
    pub fn financial_info_updated(
        income_type: IncomeType,
        monthly_income: f64,
        monthly_expenses: f64,
    ) -> Self {
        Self {
            title: "Financial Information Updated".to_string(),
            description: format!(
                "Income Type: {income_type}, Monthly Income: {}, Monthly Expenses: {}",
                money::plain(monthly_income),
                money::plain(monthly_expenses)
            ),
        }
    }

    /// 모의 UPI 결제 알림.
    pub fn upi_payment_initiated(upi_id: &str) -> Self {
        Self {
            title: "UPI Payment Initiated".to_string(),
            description: format!("Payment sent to UPI ID: {upi_id}"),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn financial_info_text() {
        let n = Notification::financial_info_updated(IncomeType::Salaried, 8500.0, 5200.0);
        assert_eq!(n.title, "Financial Information Updated");
        assert_eq!(
            n.description,
            "Income Type: salaried, Monthly Income: $8500, Monthly Expenses: $5200"
        );
    }

    #[test]
    fn upi_text() {
        let n = Notification::upi_payment_initiated("alice@okbank");
        assert_eq!(
            n.to_string(),
            "UPI Payment Initiated: Payment sent to UPI ID: alice@okbank"
        );
    }
}
