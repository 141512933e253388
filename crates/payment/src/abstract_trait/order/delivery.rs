use crate::{
    domain::requests::order::CreateDeliveryRecordRequest,
    model::delivery::Delivery as DeliveryModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use sqlx::{Postgres, Transaction};
use std::sync::Arc;

pub type DynDeliveryCommandRepository = Arc<dyn DeliveryCommandRepositoryTrait + Send + Sync>;
pub type DynDeliveryQueryRepository = Arc<dyn DeliveryQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait DeliveryCommandRepositoryTrait {
    async fn create(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        req: &CreateDeliveryRecordRequest,
    ) -> Result<DeliveryModel, RepositoryError>;
}

#[async_trait]
pub trait DeliveryQueryRepositoryTrait {
    async fn find_by_sub_order(
        &self,
        sub_order_id: i32,
    ) -> Result<Option<DeliveryModel>, RepositoryError>;
}
