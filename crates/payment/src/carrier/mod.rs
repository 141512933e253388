mod client;
mod location;
mod types;

pub use self::client::GhnGateway;
pub use self::location::normalize_location_name;
pub use self::types::{
    CancelResult, CarrierFeeQuote, CarrierFeeRequest, CarrierItem, CreateShipmentRequest,
    GhnDistrict, GhnProvince, GhnWard, ServiceType, ShipmentResult, classify_service_type,
};

use shared::errors::ServiceError;
use thiserror::Error;

/// Failure taxonomy for carrier HTTP calls. A missing reference entry is NOT
/// an error; lookups return `Ok(None)` for that.
#[derive(Debug, Error)]
pub enum CarrierError {
    /// Carrier answered 400: our request payload was bad.
    #[error("Carrier rejected request: {0}")]
    InvalidRequest(String),

    /// Carrier answered 401/403: credential or shop configuration problem.
    #[error("Carrier configuration error: {0}")]
    Config(String),

    /// No usable response at all (connect/timeout/transport).
    #[error("Carrier unavailable: {0}")]
    Unavailable(String),

    /// Any other non-success answer.
    #[error("Carrier error: {0}")]
    Upstream(String),
}

impl From<CarrierError> for ServiceError {
    fn from(err: CarrierError) -> Self {
        match err {
            CarrierError::InvalidRequest(msg) => ServiceError::UpstreamRejected(msg),
            CarrierError::Config(msg) => ServiceError::UpstreamConfig(msg),
            CarrierError::Unavailable(msg) => ServiceError::UpstreamUnavailable(msg),
            CarrierError::Upstream(msg) => ServiceError::Upstream(msg),
        }
    }
}
