use crate::{
    domain::requests::order::CreateOrderDetailRecordRequest,
    model::order_detail::OrderDetail as OrderDetailModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use sqlx::{Postgres, Transaction};
use std::sync::Arc;

pub type DynOrderDetailCommandRepository = Arc<dyn OrderDetailCommandRepositoryTrait + Send + Sync>;
pub type DynOrderDetailQueryRepository = Arc<dyn OrderDetailQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderDetailCommandRepositoryTrait {
    async fn create_many(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        items: &[CreateOrderDetailRecordRequest],
    ) -> Result<Vec<OrderDetailModel>, RepositoryError>;
}

#[async_trait]
pub trait OrderDetailQueryRepositoryTrait {
    async fn find_by_sub_order(
        &self,
        sub_order_id: i32,
    ) -> Result<Vec<OrderDetailModel>, RepositoryError>;
}
