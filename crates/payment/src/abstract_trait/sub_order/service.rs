use crate::domain::{
    requests::order::{FindSubOrdersByFarmRequest, FindSubOrdersByUserRequest},
    response::sub_order::SubOrderResponse,
};
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponse, ApiResponsePagination},
    errors::ServiceError,
};
use std::sync::Arc;

pub type DynSubOrderQueryService = Arc<dyn SubOrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait SubOrderQueryServiceTrait {
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<SubOrderResponse>, ServiceError>;

    async fn find_by_farm(
        &self,
        req: &FindSubOrdersByFarmRequest,
    ) -> Result<ApiResponsePagination<Vec<SubOrderResponse>>, ServiceError>;

    async fn find_by_user(
        &self,
        req: &FindSubOrdersByUserRequest,
    ) -> Result<ApiResponsePagination<Vec<SubOrderResponse>>, ServiceError>;
}
