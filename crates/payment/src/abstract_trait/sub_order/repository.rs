use crate::{
    domain::requests::order::CreateSubOrderRecordRequest,
    model::{status::OrderStatus, sub_order::SubOrder as SubOrderModel},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use sqlx::{Postgres, Transaction};
use std::sync::Arc;

pub type DynSubOrderCommandRepository = Arc<dyn SubOrderCommandRepositoryTrait + Send + Sync>;
pub type DynSubOrderQueryRepository = Arc<dyn SubOrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SubOrderCommandRepositoryTrait {
    async fn create(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        req: &CreateSubOrderRecordRequest,
    ) -> Result<SubOrderModel, RepositoryError>;
}

#[async_trait]
pub trait SubOrderQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<SubOrderModel>, RepositoryError>;

    async fn find_by_order(&self, order_id: i32) -> Result<Vec<SubOrderModel>, RepositoryError>;

    async fn find_by_farm(
        &self,
        farm_id: i32,
        status: Option<OrderStatus>,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<SubOrderModel>, i64), RepositoryError>;

    async fn find_by_user(
        &self,
        user_id: i32,
        status: Option<OrderStatus>,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<SubOrderModel>, i64), RepositoryError>;
}
