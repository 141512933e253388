use crate::domain::{requests::order::FindUserOrdersRequest, response::order::OrderResponse};
use async_trait::async_trait;
use shared::{
    domain::responses::{ApiResponse, ApiResponsePagination},
    errors::ServiceError,
};
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_by_id(
        &self,
        order_id: i32,
        user_id: i32,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;

    async fn find_by_user(
        &self,
        req: &FindUserOrdersRequest,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError>;
}
