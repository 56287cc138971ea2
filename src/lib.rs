//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 구현을 쓰도록 한다.

pub mod app;
pub mod config;
pub mod dashboard;
pub mod investment;
pub mod logging;
pub mod money;
pub mod notification;
pub mod payment;
pub mod planning;
pub mod ui_cli;
