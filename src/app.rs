use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::dashboard::DashboardInputs;
use crate::investment::growth::GrowthError;
use crate::payment::PaymentError;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("projection error: {0}")]
    Growth(#[from] GrowthError),
    #[error("payment error: {0}")]
    Payment(#[from] PaymentError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    InvalidArgument(String),
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 입력값은 이번 세션 동안만 유지하며 설정 파일에는 저장하지 않는다.
pub fn run(config: &mut Config) -> Result<(), AppError> {
    let mut inputs = DashboardInputs::from(&config.defaults);
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::FinancialInfo => inputs = ui_cli::handle_financial_info(&inputs)?,
            MenuChoice::Advice => ui_cli::handle_advice(&inputs),
            MenuChoice::Expenses => ui_cli::handle_expenses(),
            MenuChoice::Projection => inputs = ui_cli::handle_projection(&inputs, config)?,
            MenuChoice::Suggestions => ui_cli::handle_suggestions(&inputs, config)?,
            MenuChoice::UpiPayment => ui_cli::handle_upi_payment()?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(config)? {
                    config.save()?;
                    info!("settings saved");
                }
            }
            MenuChoice::Exit => {
                println!("Goodbye.");
                break;
            }
        }
    }
    Ok(())
}
