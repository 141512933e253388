mod payos;
mod signature;

pub use self::payos::{CreatePaymentLinkRequest, PaymentLinkResult, PayosGateway};
pub use self::signature::{sign_payment_request, sign_payload, verify_signature};

use shared::errors::ServiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Payment gateway rejected request: {0}")]
    InvalidRequest(String),

    #[error("Payment gateway configuration error: {0}")]
    Config(String),

    #[error("Payment gateway unavailable: {0}")]
    Unavailable(String),

    #[error("Payment gateway error: {0}")]
    Upstream(String),
}

impl From<GatewayError> for ServiceError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::InvalidRequest(msg) => ServiceError::UpstreamRejected(msg),
            GatewayError::Config(msg) => ServiceError::UpstreamConfig(msg),
            GatewayError::Unavailable(msg) => ServiceError::UpstreamUnavailable(msg),
            GatewayError::Upstream(msg) => ServiceError::Upstream(msg),
        }
    }
}
