use crate::domain::{requests::stock::StockAdjustmentRequest, response::stock::StockUpdateResponse};
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn update_quantities(
        &self,
        items: &[StockAdjustmentRequest],
    ) -> Result<ApiResponse<StockUpdateResponse>, ServiceError>;
}
