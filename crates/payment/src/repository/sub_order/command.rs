use crate::{
    abstract_trait::sub_order::SubOrderCommandRepositoryTrait,
    domain::requests::order::CreateSubOrderRecordRequest,
    model::{status::OrderStatus, sub_order::SubOrder as SubOrderModel},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use sqlx::{Postgres, Transaction};
use tracing::{error, info};

pub struct SubOrderCommandRepository;

impl SubOrderCommandRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SubOrderCommandRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubOrderCommandRepositoryTrait for SubOrderCommandRepository {
    async fn create(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        req: &CreateSubOrderRecordRequest,
    ) -> Result<SubOrderModel, RepositoryError> {
        let result = sqlx::query_as::<_, SubOrderModel>(
            "INSERT INTO sub_orders \
             (order_id, farm_id, status, total_amount, discount_amount, shipping_amount, \
              final_amount, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, current_timestamp) \
             RETURNING sub_order_id, order_id, farm_id, status, total_amount, discount_amount, \
             shipping_amount, final_amount, created_at",
        )
        .bind(req.order_id)
        .bind(req.farm_id)
        .bind(OrderStatus::Pending)
        .bind(req.total_amount)
        .bind(req.discount_amount)
        .bind(req.shipping_amount)
        .bind(req.final_amount)
        .fetch_one(&mut **tx)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create sub-order for farm {} on order {}: {:?}",
                req.farm_id, req.order_id, err
            );
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created sub-order ID {} for farm {}",
            result.sub_order_id, result.farm_id
        );
        Ok(result)
    }
}
