use crate::model::{
    order::{Order as OrderModel, OrderGraph},
    status::OrderStatus,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_by_id(&self, order_id: i32) -> Result<Option<OrderModel>, RepositoryError>;

    /// The order plus payment, sub-orders, deliveries and detail lines.
    async fn find_with_relations(
        &self,
        order_id: i32,
    ) -> Result<Option<OrderGraph>, RepositoryError>;

    async fn find_by_user(
        &self,
        user_id: i32,
        status: Option<OrderStatus>,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<OrderModel>, i64), RepositoryError>;
}
