use std::io::{self, BufRead, Write};

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Table};

use crate::app::AppError;
use crate::config::Config;
use crate::dashboard::DashboardInputs;
use crate::investment::growth::{
    self, project_with, InvestmentPlan, Projection, ProjectionStrategy,
};
use crate::investment::suggestions::{
    compare_plans, suggestions_for, InvestmentSuggestion, PlanComparison,
};
use crate::money;
use crate::payment::{self, UpiId};
use crate::planning::expenses::{self, ExpenseCategory, ExpenseKind, EXPENSE_BREAKDOWN};
use crate::planning::income::{
    advice_for, IncomeType, RECOMMENDED_ALLOCATION, RECOMMENDED_SAVINGS_RATE_PERCENT,
};
use crate::planning::savings::predict_savings;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FinancialInfo,
    Advice,
    Expenses,
    Projection,
    Suggestions,
    UpiPayment,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Financial Planner ===");
    println!("1) Income & expenses");
    println!("2) Income-based advice");
    println!("3) Expense breakdown");
    println!("4) Investment projection");
    println!("5) Investment suggestions & plans");
    println!("6) UPI payment");
    println!("7) Settings");
    println!("0) Exit");
    select_menu(&mut io::stdin().lock())
}

/// 입력이 끝나면(EOF) 종료를 선택한 것으로 본다.
fn select_menu<R: BufRead>(input: &mut R) -> Result<MenuChoice, AppError> {
    loop {
        let Some(sel) = read_line_from(input, "Select: ")? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.trim() {
            "1" => return Ok(MenuChoice::FinancialInfo),
            "2" => return Ok(MenuChoice::Advice),
            "3" => return Ok(MenuChoice::Expenses),
            "4" => return Ok(MenuChoice::Projection),
            "5" => return Ok(MenuChoice::Suggestions),
            "6" => return Ok(MenuChoice::UpiPayment),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("Invalid selection, try again."),
        }
    }
}

/// 소득 유형/월 소득/월 지출을 입력받아 새 스냅샷을 돌려준다.
pub fn handle_financial_info(current: &DashboardInputs) -> Result<DashboardInputs, AppError> {
    println!("\n-- Income & expenses --");
    let income_type = read_income_type(current.income_type)?;
    let monthly_income = read_f64_or("Monthly income", current.monthly_income)?;
    let monthly_expenses = read_f64_or("Monthly expenses", current.monthly_expenses)?;
    let next = DashboardInputs {
        income_type,
        monthly_income,
        monthly_expenses,
        ..*current
    };
    println!("{}", next.submit());
    Ok(next)
}

/// 조언, 권장 저축률/배분, 저축 예측을 표시한다.
pub fn handle_advice(inputs: &DashboardInputs) {
    println!("\n-- Income-based advice ({}) --", inputs.income_type.label());
    println!("{}", advice_for(inputs.income_type));
    println!(
        "Recommended savings rate: {}% of income",
        RECOMMENDED_SAVINGS_RATE_PERCENT
    );
    println!(
        "Recommended allocation: stocks {}%, bonds {}%, cash {}%",
        RECOMMENDED_ALLOCATION.stocks, RECOMMENDED_ALLOCATION.bonds, RECOMMENDED_ALLOCATION.cash
    );
    let savings = predict_savings(inputs.monthly_income, &EXPENSE_BREAKDOWN);
    println!(
        "Potential monthly savings: {}",
        money::plain(savings.potential_savings)
    );
    match savings.savings_rate_percent {
        Some(rate) => println!("Savings rate: {}", money::percent(rate)),
        None => println!("Savings rate: n/a (no income entered)"),
    }
}

pub fn handle_expenses() {
    println!("\n-- Expense breakdown --");
    println!("{}", expense_table(&EXPENSE_BREAKDOWN));
}

/// 투자 계획을 입력받아 예측 결과를 표시한다.
pub fn handle_projection(
    current: &DashboardInputs,
    cfg: &Config,
) -> Result<DashboardInputs, AppError> {
    println!("\n-- Investment projection --");
    let plan = read_plan(&current.plan, cfg.projection.max_years)?;
    let projection = project_with(&plan, cfg.projection.strategy)?;
    println!("{}", projection_summary(&projection));
    if !projection.series.is_empty() {
        println!("{}", projection_table(&projection));
    }
    Ok(DashboardInputs {
        plan,
        ..*current
    })
}

pub fn handle_suggestions(inputs: &DashboardInputs, cfg: &Config) -> Result<(), AppError> {
    println!("\n-- Investment suggestions ({}) --", inputs.income_type.label());
    println!("{}", suggestion_table(suggestions_for(inputs.income_type)));
    println!("-- Comparative plans --");
    let comparisons = compare_plans(&inputs.plan, cfg.projection.strategy)?;
    println!("{}", comparison_table(&comparisons));
    Ok(())
}

pub fn handle_upi_payment() -> Result<(), AppError> {
    println!("\n-- UPI payment (mock, no money is moved) --");
    loop {
        let raw = read_line("UPI ID (empty to cancel): ")?;
        if raw.trim().is_empty() {
            return Ok(());
        }
        match UpiId::parse(&raw) {
            Ok(id) => {
                let receipt = payment::initiate_payment(&id);
                println!("{}", receipt.notification);
                return Ok(());
            }
            Err(e) => println!("{e}"),
        }
    }
}

/// 설정 메뉴를 처리한다. 변경이 있으면 true.
pub fn handle_settings(cfg: &mut Config) -> Result<bool, AppError> {
    println!("\n-- Settings --");
    println!("Projection strategy: {:?}", cfg.projection.strategy);
    println!("1) Incremental  2) Recompute");
    let sel = read_line("Change to (Enter to keep): ")?;
    let strategy = match sel.trim() {
        "" => return Ok(false),
        "1" => ProjectionStrategy::Incremental,
        "2" => ProjectionStrategy::Recompute,
        _ => {
            println!("Invalid selection, nothing changed.");
            return Ok(false);
        }
    };
    cfg.projection.strategy = strategy;
    println!("Projection strategy set to {strategy:?}.");
    Ok(true)
}

pub fn projection_summary(projection: &Projection) -> String {
    format!(
        "Future value: {}\nTotal contributions: {}\nROI: {}",
        money::grouped(projection.rounded_future_value),
        money::grouped(projection.total_contributions),
        projection.roi
    )
}

pub fn projection_table(projection: &Projection) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["Year", "Value"]);
    for point in &projection.series {
        table.add_row(vec![
            Cell::new(point.year),
            Cell::new(money::grouped(point.value)).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn expense_table(categories: &[ExpenseCategory]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Category", "Type", "Amount", "Share"]);
    for (category, (_, share)) in categories.iter().zip(expenses::shares(categories)) {
        let kind = match category.kind {
            ExpenseKind::Essential => "Essential",
            ExpenseKind::Discretionary => "Discretionary",
        };
        table.add_row(vec![
            Cell::new(category.name),
            Cell::new(kind),
            Cell::new(money::plain(category.amount)).set_alignment(CellAlignment::Right),
            Cell::new(money::percent(share)).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total"),
        Cell::new(""),
        Cell::new(money::plain(expenses::total(categories))).set_alignment(CellAlignment::Right),
        Cell::new(""),
    ]);
    table
}

pub fn suggestion_table(suggestions: &[InvestmentSuggestion]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Investment", "Risk", "Expected return", "Duration"]);
    for s in suggestions {
        table.add_row(vec![s.name, s.risk, s.expected_return, s.duration]);
    }
    table
}

pub fn comparison_table(comparisons: &[PlanComparison]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Plan",
        "Stocks",
        "Bonds",
        "Cash",
        "Return",
        "Future value",
        "ROI",
    ]);
    for c in comparisons {
        table.add_row(vec![
            Cell::new(c.plan.name),
            Cell::new(format!("{}%", c.plan.stocks)),
            Cell::new(format!("{}%", c.plan.bonds)),
            Cell::new(format!("{}%", c.plan.cash)),
            Cell::new(format!("{}%", c.plan.expected_return_percent)),
            Cell::new(money::grouped(c.projection.rounded_future_value))
                .set_alignment(CellAlignment::Right),
            Cell::new(c.projection.roi.to_string()).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

fn read_plan(current: &InvestmentPlan, max_years: u32) -> Result<InvestmentPlan, AppError> {
    let initial_investment = read_f64_or("Initial investment", current.initial_investment)?;
    let monthly_contribution = read_f64_or("Monthly contribution", current.monthly_contribution)?;
    let years = loop {
        let raw = read_f64_or("Years", f64::from(current.years))?;
        match growth::parse_years(raw) {
            Ok(y) if y <= max_years => break y,
            Ok(y) => println!("At most {max_years} years are supported (got {y})."),
            Err(e) => println!("{e}"),
        }
    };
    let annual_return_percent =
        read_f64_or("Expected annual return (%)", current.annual_return_percent)?;
    Ok(InvestmentPlan {
        initial_investment,
        monthly_contribution,
        years,
        annual_return_percent,
    })
}

fn read_income_type(current: IncomeType) -> Result<IncomeType, AppError> {
    println!("Income type: 1) Salaried  2) Business Owner  3) Investor");
    loop {
        let sel = read_line(&format!("Select [{}]: ", current.label()))?;
        match sel.trim() {
            "" => return Ok(current),
            "1" => return Ok(IncomeType::Salaried),
            "2" => return Ok(IncomeType::Business),
            "3" => return Ok(IncomeType::Investor),
            other => match other.parse::<IncomeType>() {
                Ok(t) => return Ok(t),
                Err(e) => println!("{e}"),
            },
        }
    }
}

/// 한 줄을 읽는다. 메뉴 밖에서 입력이 끊기면 오류로 끝낸다.
fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)?
        .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into())
}

/// EOF이면 `None`.
fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}

/// 숫자를 입력받는다. 빈 입력이면 현재 값을 유지한다.
fn read_f64_or(label: &str, current: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{current}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("Please enter a number."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::investment::growth::project;

    #[test]
    fn summary_shows_rounded_value_and_roi() {
        let projection = project(&InvestmentPlan::default()).unwrap();
        let text = projection_summary(&projection);
        assert!(text.contains("Future value: $107,144"), "{text}");
        assert!(text.contains("Total contributions: $70,000"));
        assert!(text.contains("ROI: 53.06%"));
    }

    #[test]
    fn tables_have_one_row_per_entry() {
        let projection = project(&InvestmentPlan::default()).unwrap();
        assert_eq!(projection_table(&projection).row_iter().count(), 10);
        // 항목 5개 + 합계 행
        assert_eq!(expense_table(&EXPENSE_BREAKDOWN).row_iter().count(), 6);
        let table = suggestion_table(suggestions_for(IncomeType::Investor)).to_string();
        assert!(table.contains("Corporate Bonds"));
    }

    #[test]
    fn menu_exits_when_input_ends() {
        assert_eq!(select_menu(&mut io::empty()).unwrap(), MenuChoice::Exit);
        // 잘못된 줄 뒤에 EOF가 와도 반복하지 않는다.
        let mut input = "9\n\n".as_bytes();
        assert_eq!(select_menu(&mut input).unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn menu_reads_selection_from_input() {
        let mut input = "x\n 4 \n".as_bytes();
        assert_eq!(select_menu(&mut input).unwrap(), MenuChoice::Projection);
    }

    #[test]
    fn read_line_from_reports_end_of_input() {
        let mut input = "abc\n".as_bytes();
        assert_eq!(read_line_from(&mut input, "").unwrap().as_deref(), Some("abc\n"));
        assert_eq!(read_line_from(&mut input, "").unwrap(), None);
    }
}
