use crate::{
    domain::requests::order::CreatePaymentRecordRequest,
    model::{payment::Payment as PaymentModel, status::PaymentStatus},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use sqlx::{Postgres, Transaction};
use std::sync::Arc;

pub type DynPaymentCommandRepository = Arc<dyn PaymentCommandRepositoryTrait + Send + Sync>;
pub type DynPaymentQueryRepository = Arc<dyn PaymentQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait PaymentCommandRepositoryTrait {
    async fn create(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        req: &CreatePaymentRecordRequest,
    ) -> Result<PaymentModel, RepositoryError>;

    /// Asynchronous gateway confirmation: status change plus `paid_at` when
    /// the payment completed.
    async fn update_from_callback(
        &self,
        payment_id: i32,
        status: PaymentStatus,
        transaction_id: Option<String>,
    ) -> Result<PaymentModel, RepositoryError>;
}

#[async_trait]
pub trait PaymentQueryRepositoryTrait {
    async fn find_by_order_id(&self, order_id: i32)
    -> Result<Option<PaymentModel>, RepositoryError>;
}
