use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 소득 유형.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeType {
    #[default]
    Salaried,
    Business,
    Investor,
}

impl IncomeType {
    pub const ALL: [IncomeType; 3] = [
        IncomeType::Salaried,
        IncomeType::Business,
        IncomeType::Investor,
    ];

    /// 알림 문구 등에 쓰는 코드 값.
    pub fn as_code(&self) -> &'static str {
        match self {
            IncomeType::Salaried => "salaried",
            IncomeType::Business => "business",
            IncomeType::Investor => "investor",
        }
    }

    /// 화면 표시용 이름.
    pub fn label(&self) -> &'static str {
        match self {
            IncomeType::Salaried => "Salaried",
            IncomeType::Business => "Business Owner",
            IncomeType::Investor => "Investor",
        }
    }
}

impl fmt::Display for IncomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for IncomeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "salaried" => Ok(IncomeType::Salaried),
            "business" | "business-owner" | "business_owner" => Ok(IncomeType::Business),
            "investor" => Ok(IncomeType::Investor),
            other => Err(format!(
                "unknown income type '{other}' (expected salaried, business or investor)"
            )),
        }
    }
}

/// 소득 유형별 재무 조언.
pub fn advice_for(income_type: IncomeType) -> &'static str {
    match income_type {
        IncomeType::Salaried => {
            "Focus on maximizing your 401(k) contributions and consider opening a Roth IRA \
             for tax-free growth. Aim to save at least 20% of your income."
        }
        IncomeType::Business => {
            "Look into SEP IRA or Solo 401(k) options for tax-advantaged retirement savings. \
             Consider reinvesting profits for business growth and diversifying your personal \
             investments."
        }
        IncomeType::Investor => {
            "Maintain a diversified portfolio across various asset classes. Consider \
             tax-efficient investment strategies and regularly rebalance your portfolio to \
             maintain your target asset allocation."
        }
    }
}

/// 권장 저축률 [%]
pub const RECOMMENDED_SAVINGS_RATE_PERCENT: u8 = 20;

/// 권장 자산 배분 [%]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendedAllocation {
    pub stocks: u8,
    pub bonds: u8,
    pub cash: u8,
}

pub const RECOMMENDED_ALLOCATION: RecommendedAllocation = RecommendedAllocation {
    stocks: 60,
    bonds: 30,
    cash: 10,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("Salaried".parse::<IncomeType>(), Ok(IncomeType::Salaried));
        assert_eq!(" business-owner ".parse::<IncomeType>(), Ok(IncomeType::Business));
        assert_eq!("INVESTOR".parse::<IncomeType>(), Ok(IncomeType::Investor));
        assert!("retired".parse::<IncomeType>().is_err());
    }

    #[test]
    fn advice_is_distinct_per_type() {
        assert!(advice_for(IncomeType::Salaried).contains("Roth IRA"));
        assert!(advice_for(IncomeType::Business).starts_with("Look into SEP IRA"));
        assert!(advice_for(IncomeType::Investor).ends_with("target asset allocation."));
    }
}
