use crate::{
    abstract_trait::payment::{PaymentCommandRepositoryTrait, PaymentQueryRepositoryTrait},
    domain::requests::order::CreatePaymentRecordRequest,
    model::{payment::Payment as PaymentModel, status::PaymentStatus},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::{Postgres, Transaction};
use tracing::{error, info};

const PAYMENT_COLUMNS: &str = "payment_id, order_id, amount, method, status, transaction_id, \
     paid_at, currency, qr_code, checkout_url, signature, created_at, updated_at";

pub struct PaymentCommandRepository {
    db: ConnectionPool,
}

impl PaymentCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentCommandRepositoryTrait for PaymentCommandRepository {
    async fn create(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        req: &CreatePaymentRecordRequest,
    ) -> Result<PaymentModel, RepositoryError> {
        let sql = format!(
            "INSERT INTO payments \
             (order_id, amount, method, status, transaction_id, currency, qr_code, checkout_url, \
              signature, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, current_timestamp, current_timestamp) \
             RETURNING {PAYMENT_COLUMNS}"
        );

        let payment = sqlx::query_as::<_, PaymentModel>(&sql)
            .bind(req.order_id)
            .bind(req.amount)
            .bind(req.method)
            .bind(PaymentStatus::Pending)
            .bind(&req.transaction_id)
            .bind(&req.currency)
            .bind(&req.qr_code)
            .bind(&req.checkout_url)
            .bind(&req.signature)
            .fetch_one(&mut **tx)
            .await
            .map_err(|err| {
                error!(
                    "❌ Failed to create payment for order {}: {:?}",
                    req.order_id, err
                );
                RepositoryError::from(err)
            })?;

        info!(
            "✅ Created payment ID {} ({}) for order {}",
            payment.payment_id, payment.method, payment.order_id
        );
        Ok(payment)
    }

    async fn update_from_callback(
        &self,
        payment_id: i32,
        status: PaymentStatus,
        transaction_id: Option<String>,
    ) -> Result<PaymentModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            "UPDATE payments \
             SET status = $2, \
                 transaction_id = COALESCE($3, transaction_id), \
                 paid_at = CASE WHEN $2 = 'COMPLETED'::payment_status \
                           THEN current_timestamp ELSE paid_at END, \
                 updated_at = current_timestamp \
             WHERE payment_id = $1 \
             RETURNING {PAYMENT_COLUMNS}"
        );

        let payment = sqlx::query_as::<_, PaymentModel>(&sql)
            .bind(payment_id)
            .bind(status)
            .bind(&transaction_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to update payment {}: {:?}", payment_id, err);
                RepositoryError::from(err)
            })?
            .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Payment {} now {}", payment_id, payment.status);
        Ok(payment)
    }
}

pub struct PaymentQueryRepository {
    db: ConnectionPool,
}

impl PaymentQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentQueryRepositoryTrait for PaymentQueryRepository {
    async fn find_by_order_id(
        &self,
        order_id: i32,
    ) -> Result<Option<PaymentModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!("SELECT {PAYMENT_COLUMNS} FROM payments WHERE order_id = $1");

        let payment = sqlx::query_as::<_, PaymentModel>(&sql)
            .bind(order_id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch payment for order {}: {:?}", order_id, e);
                RepositoryError::from(e)
            })?;

        Ok(payment)
    }
}
