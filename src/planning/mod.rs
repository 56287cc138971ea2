//! 소득/지출/저축 계획 모듈 모음.

pub mod expenses;
pub mod income;
pub mod savings;

pub use expenses::{ExpenseCategory, ExpenseKind, EXPENSE_BREAKDOWN};
pub use income::{advice_for, IncomeType};
pub use savings::{predict_savings, SavingsPrediction};
