use crate::{
    abstract_trait::order::delivery::{
        DeliveryCommandRepositoryTrait, DeliveryQueryRepositoryTrait,
    },
    domain::requests::order::CreateDeliveryRecordRequest,
    model::{delivery::Delivery as DeliveryModel, status::DeliveryStatus},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, Transaction};
use tracing::{error, info};

const DELIVERY_COLUMNS: &str = "delivery_id, sub_order_id, status, cod_amount, shipping_amount, \
     tracking_code, addressee_name, addressee_phone, address, delivery_method, created_at";

pub struct DeliveryCommandRepository;

impl DeliveryCommandRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DeliveryCommandRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeliveryCommandRepositoryTrait for DeliveryCommandRepository {
    async fn create(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        req: &CreateDeliveryRecordRequest,
    ) -> Result<DeliveryModel, RepositoryError> {
        let sql = format!(
            "INSERT INTO deliveries \
             (sub_order_id, status, cod_amount, shipping_amount, tracking_code, addressee_name, \
              addressee_phone, address, delivery_method, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, current_timestamp) \
             RETURNING {DELIVERY_COLUMNS}"
        );

        let delivery = sqlx::query_as::<_, DeliveryModel>(&sql)
            .bind(req.sub_order_id)
            .bind(DeliveryStatus::Pending)
            .bind(req.cod_amount)
            .bind(req.shipping_amount)
            .bind(&req.tracking_code)
            .bind(&req.addressee_name)
            .bind(&req.addressee_phone)
            .bind(&req.address)
            .bind(&req.delivery_method)
            .fetch_one(&mut **tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to create delivery for sub-order {}: {:?}",
                    req.sub_order_id, err
                );
                RepositoryError::from(err)
            })?;

        info!(
            "✅ Created delivery ID {} (tracking {:?})",
            delivery.delivery_id, delivery.tracking_code
        );
        Ok(delivery)
    }
}

pub struct DeliveryQueryRepository {
    db: ConnectionPool,
}

impl DeliveryQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DeliveryQueryRepositoryTrait for DeliveryQueryRepository {
    async fn find_by_sub_order(
        &self,
        sub_order_id: i32,
    ) -> Result<Option<DeliveryModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("SELECT {DELIVERY_COLUMNS} FROM deliveries WHERE sub_order_id = $1");

        let delivery = sqlx::query_as::<_, DeliveryModel>(&sql)
            .bind(sub_order_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to fetch delivery for sub-order {}: {:?}",
                    sub_order_id, e
                );
                RepositoryError::from(e)
            })?;

        Ok(delivery)
    }
}
