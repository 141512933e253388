use crate::{
    abstract_trait::order::repository::OrderQueryRepositoryTrait,
    model::{
        delivery::Delivery as DeliveryModel,
        order::{Order as OrderModel, OrderGraph, SubOrderGraph},
        order_detail::OrderDetail as OrderDetailModel,
        payment::Payment as PaymentModel,
        status::OrderStatus,
        sub_order::SubOrder as SubOrderModel,
    },
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

const ORDER_COLUMNS: &str = "order_id, customer_id, address_id, total_amount, discount_amount, \
     shipping_amount, final_amount, currency, status, created_at, updated_at";

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_by_id(&self, order_id: i32) -> Result<Option<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE order_id = $1");

        let order = sqlx::query_as::<_, OrderModel>(&sql)
            .bind(order_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch order {}: {:?}", order_id, e);
                RepositoryError::from(e)
            })?;

        Ok(order)
    }

    async fn find_with_relations(
        &self,
        order_id: i32,
    ) -> Result<Option<OrderGraph>, RepositoryError> {
        info!("📦 Fetching order {} with relations", order_id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order_sql = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE order_id = $1");

        let Some(order) = sqlx::query_as::<_, OrderModel>(&order_sql)
            .bind(order_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?
        else {
            return Ok(None);
        };

        let payment = sqlx::query_as::<_, PaymentModel>(
            "SELECT payment_id, order_id, amount, method, status, transaction_id, paid_at, \
             currency, qr_code, checkout_url, signature, created_at, updated_at \
             FROM payments WHERE order_id = $1",
        )
        .bind(order_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        let sub_orders = sqlx::query_as::<_, SubOrderModel>(
            "SELECT sub_order_id, order_id, farm_id, status, total_amount, discount_amount, \
             shipping_amount, final_amount, created_at \
             FROM sub_orders WHERE order_id = $1 ORDER BY sub_order_id",
        )
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        let mut graphs = Vec::with_capacity(sub_orders.len());
        for sub_order in sub_orders {
            let delivery = sqlx::query_as::<_, DeliveryModel>(
                "SELECT delivery_id, sub_order_id, status, cod_amount, shipping_amount, \
                 tracking_code, addressee_name, addressee_phone, address, delivery_method, \
                 created_at \
                 FROM deliveries WHERE sub_order_id = $1",
            )
            .bind(sub_order.sub_order_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

            let order_details = sqlx::query_as::<_, OrderDetailModel>(
                "SELECT order_detail_id, sub_order_id, product_id, product_name, quantity, \
                 price_per_unit, unit, total_price \
                 FROM order_details WHERE sub_order_id = $1 ORDER BY order_detail_id",
            )
            .bind(sub_order.sub_order_id)
            .fetch_all(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

            graphs.push(SubOrderGraph {
                sub_order,
                delivery,
                order_details,
            });
        }

        Ok(Some(OrderGraph {
            order,
            payment,
            sub_orders: graphs,
        }))
    }

    async fn find_by_user(
        &self,
        user_id: i32,
        status: Option<OrderStatus>,
        page: i32,
        page_size: i32,
    ) -> Result<(Vec<OrderModel>, i64), RepositoryError> {
        info!("📦 Fetching orders for user {} (page {})", user_id, page);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let limit = i64::from(page_size);
        let offset = i64::from((page - 1).max(0) * page_size);

        let list_sql = format!(
            "SELECT {ORDER_COLUMNS} FROM orders \
             WHERE customer_id = $1 AND ($2::order_status IS NULL OR status = $2) \
             ORDER BY created_at DESC \
             LIMIT $3 OFFSET $4"
        );

        let orders = sqlx::query_as::<_, OrderModel>(&list_sql)
            .bind(user_id)
            .bind(status)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch orders for user {}: {:?}", user_id, e);
                RepositoryError::from(e)
            })?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM orders \
             WHERE customer_id = $1 AND ($2::order_status IS NULL OR status = $2)",
        )
        .bind(user_id)
        .bind(status)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok((orders, total))
    }
}
