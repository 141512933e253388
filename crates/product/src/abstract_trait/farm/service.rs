use crate::domain::response::farm::FarmResponse;
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynFarmQueryService = Arc<dyn FarmQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait FarmQueryServiceTrait {
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<FarmResponse>, ServiceError>;
}
