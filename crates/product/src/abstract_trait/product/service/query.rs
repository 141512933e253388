use crate::domain::response::product::ProductResponse;
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn find_by_ids(
        &self,
        ids: &[i32],
        include_farm: bool,
        include_address: bool,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
}
