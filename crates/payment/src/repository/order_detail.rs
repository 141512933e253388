use crate::{
    abstract_trait::order::order_detail::{
        OrderDetailCommandRepositoryTrait, OrderDetailQueryRepositoryTrait,
    },
    domain::requests::order::CreateOrderDetailRecordRequest,
    model::order_detail::OrderDetail as OrderDetailModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, Transaction};
use tracing::error;

const DETAIL_COLUMNS: &str = "order_detail_id, sub_order_id, product_id, product_name, quantity, \
     price_per_unit, unit, total_price";

pub struct OrderDetailCommandRepository;

impl OrderDetailCommandRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OrderDetailCommandRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderDetailCommandRepositoryTrait for OrderDetailCommandRepository {
    async fn create_many(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        items: &[CreateOrderDetailRecordRequest],
    ) -> Result<Vec<OrderDetailModel>, RepositoryError> {
        let sql = format!(
            "INSERT INTO order_details \
             (sub_order_id, product_id, product_name, quantity, price_per_unit, unit, total_price) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {DETAIL_COLUMNS}"
        );

        let mut created = Vec::with_capacity(items.len());

        for item in items {
            let detail = sqlx::query_as::<_, OrderDetailModel>(&sql)
                .bind(item.sub_order_id)
                .bind(item.product_id)
                .bind(&item.product_name)
                .bind(item.quantity)
                .bind(item.price_per_unit)
                .bind(&item.unit)
                .bind(item.total_price)
                .fetch_one(&mut **tx)
                .await
                .map_err(|err| {
                    error!(
                        "❌ Failed to create order detail for product {}: {:?}",
                        item.product_id, err
                    );
                    RepositoryError::from(err)
                })?;

            created.push(detail);
        }

        Ok(created)
    }
}

pub struct OrderDetailQueryRepository {
    db: ConnectionPool,
}

impl OrderDetailQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderDetailQueryRepositoryTrait for OrderDetailQueryRepository {
    async fn find_by_sub_order(
        &self,
        sub_order_id: i32,
    ) -> Result<Vec<OrderDetailModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "SELECT {DETAIL_COLUMNS} FROM order_details \
             WHERE sub_order_id = $1 ORDER BY order_detail_id"
        );

        let details = sqlx::query_as::<_, OrderDetailModel>(&sql)
            .bind(sub_order_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to fetch order details for sub-order {}: {:?}",
                    sub_order_id, e
                );
                RepositoryError::from(e)
            })?;

        Ok(details)
    }
}
