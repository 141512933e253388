use crate::{
    abstract_trait::order::repository::OrderCommandRepositoryTrait,
    domain::requests::order::CreateOrderRecordRequest,
    model::{order::Order as OrderModel, status::OrderStatus},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, Transaction};
use tracing::{error, info};

pub struct OrderCommandRepository {
    db: ConnectionPool,
}

impl OrderCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

const ORDER_COLUMNS: &str = "order_id, customer_id, address_id, total_amount, discount_amount, \
     shipping_amount, final_amount, currency, status, created_at, updated_at";

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        req: &CreateOrderRecordRequest,
    ) -> Result<OrderModel, RepositoryError> {
        let sql = format!(
            "INSERT INTO orders \
             (customer_id, address_id, total_amount, discount_amount, shipping_amount, \
              final_amount, currency, status, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, current_timestamp, current_timestamp) \
             RETURNING {ORDER_COLUMNS}"
        );

        let result = sqlx::query_as::<_, OrderModel>(&sql)
            .bind(req.customer_id)
            .bind(req.address_id)
            .bind(req.total_amount)
            .bind(req.discount_amount)
            .bind(req.shipping_amount)
            .bind(req.final_amount)
            .bind(&req.currency)
            .bind(OrderStatus::Pending)
            .fetch_one(&mut **tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to create order for customer {}: {:?}",
                    req.customer_id, err
                );
                RepositoryError::from(err)
            })?;

        info!(
            "✅ Created order ID {} for customer {}",
            result.order_id, result.customer_id
        );
        Ok(result)
    }

    async fn mark_paid(&self, order_id: i32) -> Result<OrderModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "UPDATE orders \
             SET status = $2, updated_at = current_timestamp \
             WHERE order_id = $1 \
             RETURNING {ORDER_COLUMNS}"
        );

        let result = sqlx::query_as::<_, OrderModel>(&sql)
            .bind(order_id)
            .bind(OrderStatus::Paid)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to mark order {} paid: {:?}", order_id, err);
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("💰 Order {} marked PAID", order_id);
        Ok(result)
    }
}
