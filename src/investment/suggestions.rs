use serde::Serialize;

use crate::investment::growth::{
    project_with, GrowthError, InvestmentPlan, Projection, ProjectionStrategy,
};
use crate::planning::income::IncomeType;

/// 소득 유형별 추천 투자 상품.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InvestmentSuggestion {
    pub name: &'static str,
    pub risk: &'static str,
    pub expected_return: &'static str,
    pub duration: &'static str,
}

const SALARIED: [InvestmentSuggestion; 3] = [
    InvestmentSuggestion {
        name: "Index Fund",
        risk: "Low",
        expected_return: "7-10%",
        duration: "5+ years",
    },
    InvestmentSuggestion {
        name: "401(k)",
        risk: "Moderate",
        expected_return: "8-12%",
        duration: "Until retirement",
    },
    InvestmentSuggestion {
        name: "Roth IRA",
        risk: "Varies",
        expected_return: "7-10%",
        duration: "Until retirement",
    },
];

const BUSINESS: [InvestmentSuggestion; 3] = [
    InvestmentSuggestion {
        name: "SEP IRA",
        risk: "Moderate",
        expected_return: "8-12%",
        duration: "Until retirement",
    },
    InvestmentSuggestion {
        name: "Real Estate",
        risk: "High",
        expected_return: "8-15%",
        duration: "5-10+ years",
    },
    InvestmentSuggestion {
        name: "Business Reinvestment",
        risk: "High",
        expected_return: "Varies",
        duration: "Ongoing",
    },
];

const INVESTOR: [InvestmentSuggestion; 3] = [
    InvestmentSuggestion {
        name: "Dividend Stocks",
        risk: "Moderate",
        expected_return: "4-6%",
        duration: "5+ years",
    },
    InvestmentSuggestion {
        name: "REITs",
        risk: "Moderate",
        expected_return: "5-10%",
        duration: "5+ years",
    },
    InvestmentSuggestion {
        name: "Corporate Bonds",
        risk: "Low",
        expected_return: "3-5%",
        duration: "1-10 years",
    },
];

/// 소득 유형에 맞는 추천 목록을 반환한다.
pub fn suggestions_for(income_type: IncomeType) -> &'static [InvestmentSuggestion] {
    match income_type {
        IncomeType::Salaried => &SALARIED,
        IncomeType::Business => &BUSINESS,
        IncomeType::Investor => &INVESTOR,
    }
}

/// 자산 배분 비교안. 비중은 % 단위.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllocationPlan {
    pub name: &'static str,
    pub stocks: u8,
    pub bonds: u8,
    pub cash: u8,
    pub expected_return_percent: f64,
}

pub const COMPARATIVE_PLANS: [AllocationPlan; 3] = [
    AllocationPlan {
        name: "Conservative",
        stocks: 40,
        bonds: 50,
        cash: 10,
        expected_return_percent: 5.0,
    },
    AllocationPlan {
        name: "Balanced",
        stocks: 60,
        bonds: 30,
        cash: 10,
        expected_return_percent: 7.0,
    },
    AllocationPlan {
        name: "Aggressive",
        stocks: 80,
        bonds: 15,
        cash: 5,
        expected_return_percent: 9.0,
    },
];

/// 비교안 하나에 대한 예측 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanComparison {
    pub plan: AllocationPlan,
    pub projection: Projection,
}

/// 같은 원금/적립금/기간으로 각 배분안의 기대수익률을 적용해 비교한다.
pub fn compare_plans(
    base: &InvestmentPlan,
    strategy: ProjectionStrategy,
) -> Result<Vec<PlanComparison>, GrowthError> {
    COMPARATIVE_PLANS
        .iter()
        .map(|plan| {
            let projection =
                project_with(&base.with_return(plan.expected_return_percent), strategy)?;
            Ok(PlanComparison {
                plan: *plan,
                projection,
            })
        })
        .collect()
}
