//! 모의 UPI 결제. 실제 송금은 하지 않고 알림만 만든다.

use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::info;

use crate::notification::Notification;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("UPI ID is empty")]
    Empty,
    #[error("UPI ID '{0}' must look like name@provider")]
    Malformed(String),
}

/// 검증된 UPI ID (`handle@provider`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpiId(String);

impl UpiId {
    pub fn parse(raw: &str) -> Result<Self, PaymentError> {
        let id = raw.trim();
        if id.is_empty() {
            return Err(PaymentError::Empty);
        }
        let malformed = || PaymentError::Malformed(id.to_string());
        let (handle, provider) = id.split_once('@').ok_or_else(malformed)?;
        if handle.is_empty()
            || provider.is_empty()
            || provider.contains('@')
            || id.chars().any(char::is_whitespace)
        {
            return Err(malformed());
        }
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UpiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 결제 요청 결과. 알림 외의 부수효과는 없다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentReceipt {
    pub upi_id: UpiId,
    pub notification: Notification,
}

pub fn initiate_payment(upi_id: &UpiId) -> PaymentReceipt {
    info!(upi_id = %upi_id, "mock UPI payment initiated");
    PaymentReceipt {
        upi_id: upi_id.clone(),
        notification: Notification::upi_payment_initiated(upi_id.as_str()),
    }
}
