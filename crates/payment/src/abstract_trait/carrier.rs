use crate::carrier::{
    CancelResult, CarrierError, CarrierFeeQuote, CarrierFeeRequest, CreateShipmentRequest,
    ShipmentResult,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCarrierGateway = Arc<dyn CarrierGatewayTrait + Send + Sync>;

/// The carrier behind a trait so orchestration code depends only on this
/// capability. Lookups return `Ok(None)` when the name simply does not
/// resolve; transport problems are `Err`.
#[async_trait]
pub trait CarrierGatewayTrait {
    async fn get_province_id(&self, name: &str) -> Result<Option<i32>, CarrierError>;

    async fn get_district_id(
        &self,
        name: &str,
        province_id: i32,
    ) -> Result<Option<i32>, CarrierError>;

    async fn get_ward_code(
        &self,
        name: &str,
        district_id: i32,
    ) -> Result<Option<String>, CarrierError>;

    async fn quote_fee(&self, req: &CarrierFeeRequest) -> Result<CarrierFeeQuote, CarrierError>;

    async fn create_shipment(
        &self,
        req: &CreateShipmentRequest,
    ) -> Result<ShipmentResult, CarrierError>;

    async fn cancel_shipments(&self, codes: &[String]) -> Result<Vec<CancelResult>, CarrierError>;
}
