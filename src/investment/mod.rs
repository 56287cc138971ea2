//! 투자 관련 계산 모듈 모음.

pub mod growth;
pub mod suggestions;

pub use growth::*;
pub use suggestions::*;
