use serde::Serialize;

/// 지출 성격.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExpenseKind {
    Essential,
    Discretionary,
}

/// 지출 항목 (월 금액).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpenseCategory {
    pub name: &'static str,
    pub amount: f64,
    pub kind: ExpenseKind,
}

/// 대시보드에 표시하는 고정 지출 내역.
pub const EXPENSE_BREAKDOWN: [ExpenseCategory; 5] = [
    ExpenseCategory {
        name: "Housing",
        amount: 1820.0,
        kind: ExpenseKind::Essential,
    },
    ExpenseCategory {
        name: "Transportation",
        amount: 780.0,
        kind: ExpenseKind::Essential,
    },
    ExpenseCategory {
        name: "Food",
        amount: 1040.0,
        kind: ExpenseKind::Essential,
    },
    ExpenseCategory {
        name: "Utilities",
        amount: 520.0,
        kind: ExpenseKind::Essential,
    },
    ExpenseCategory {
        name: "Entertainment",
        amount: 1040.0,
        kind: ExpenseKind::Discretionary,
    },
];

pub fn total(categories: &[ExpenseCategory]) -> f64 {
    categories.iter().map(|c| c.amount).sum()
}

pub fn total_by_kind(categories: &[ExpenseCategory], kind: ExpenseKind) -> f64 {
    categories
        .iter()
        .filter(|c| c.kind == kind)
        .map(|c| c.amount)
        .sum()
}

/// 항목별 비중 [%]. 합계가 0이면 모두 0으로 본다.
pub fn shares(categories: &[ExpenseCategory]) -> Vec<(&'static str, f64)> {
    let sum = total(categories);
    categories
        .iter()
        .map(|c| {
            let share = if sum != 0.0 { c.amount / sum * 100.0 } else { 0.0 };
            (c.name, share)
        })
        .collect()
}
