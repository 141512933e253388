use crate::{
    domain::requests::order::CreateOrderRecordRequest, model::order::Order as OrderModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use sqlx::{Postgres, Transaction};
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

/// Writes run inside the transaction owned by the order-creation
/// orchestrator; the caller decides commit or rollback.
#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        req: &CreateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError>;

    async fn mark_paid(&self, order_id: i32) -> Result<OrderModel, RepositoryError>;
}
