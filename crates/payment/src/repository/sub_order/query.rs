use crate::{
    abstract_trait::sub_order::SubOrderQueryRepositoryTrait,
    model::{status::OrderStatus, sub_order::SubOrder as SubOrderModel},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct SubOrderQueryRepository {
    db: ConnectionPool,
}

impl SubOrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

const SUB_ORDER_COLUMNS: &str = "sub_order_id, order_id, farm_id, status, total_amount, \
     discount_amount, shipping_amount, final_amount, created_at";

#[async_trait]
impl SubOrderQueryRepositoryTrait for SubOrderQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<SubOrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("SELECT {SUB_ORDER_COLUMNS} FROM sub_orders WHERE sub_order_id = $1");

        let sub_order = sqlx::query_as::<_, SubOrderModel>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch sub-order {}: {:?}", id, e);
                RepositoryError::from(e)
            })?;

        Ok(sub_order)
    }

    async fn find_by_order(&self, order_id: i32) -> Result<Vec<SubOrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "SELECT {SUB_ORDER_COLUMNS} FROM sub_orders WHERE order_id = $1 ORDER BY sub_order_id"
        );

        let sub_orders = sqlx::query_as::<_, SubOrderModel>(&sql)
            .bind(order_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(sub_orders)
    }

    async fn find_by_farm(
        &self,
        farm_id: i32,
        status: Option<OrderStatus>,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<SubOrderModel>, i64), RepositoryError> {
        info!("📦 Fetching sub-orders for farm {} (page {})", farm_id, page);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let limit = i64::from(page_size);
        let offset = i64::from((page - 1).max(0) * page_size);

        let list_sql = format!(
            "SELECT {SUB_ORDER_COLUMNS} FROM sub_orders \
             WHERE farm_id = $1 AND ($2::order_status IS NULL OR status = $2) \
             ORDER BY created_at DESC \
             LIMIT $3 OFFSET $4"
        );

        let sub_orders = sqlx::query_as::<_, SubOrderModel>(&list_sql)
            .bind(farm_id)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch sub-orders for farm {}: {:?}", farm_id, e);
                RepositoryError::from(e)
            })?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sub_orders \
             WHERE farm_id = $1 AND ($2::order_status IS NULL OR status = $2)",
        )
        .bind(farm_id)
        .bind(status)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok((sub_orders, total))
    }

    async fn find_by_user(
        &self,
        user_id: i32,
        status: Option<OrderStatus>,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<SubOrderModel>, i64), RepositoryError> {
        info!("📦 Fetching sub-orders for user {} (page {})", user_id, page);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let limit = i64::from(page_size);
        let offset = i64::from((page - 1).max(0) * page_size);

        let list_sql = format!(
            "SELECT s.sub_order_id, s.order_id, s.farm_id, s.status, s.total_amount, \
             s.discount_amount, s.shipping_amount, s.final_amount, s.created_at \
             FROM sub_orders s \
             JOIN orders o ON o.order_id = s.order_id \
             WHERE o.customer_id = $1 AND ($2::order_status IS NULL OR s.status = $2) \
             ORDER BY s.created_at DESC \
             LIMIT $3 OFFSET $4"
        );

        let sub_orders = sqlx::query_as::<_, SubOrderModel>(&list_sql)
            .bind(user_id)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch sub-orders for user {}: {:?}", user_id, e);
                RepositoryError::from(e)
            })?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sub_orders s \
             JOIN orders o ON o.order_id = s.order_id \
             WHERE o.customer_id = $1 AND ($2::order_status IS NULL OR s.status = $2)",
        )
        .bind(user_id)
        .bind(status)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok((sub_orders, total))
    }
}
