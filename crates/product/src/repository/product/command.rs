use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::{
        requests::stock::{StockAdjustmentRequest, StockOperation},
        response::stock::StockAdjustmentResult,
    },
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn apply_adjustments(
        &self,
        items: &[StockAdjustmentRequest],
    ) -> Result<(bool, Vec<StockAdjustmentResult>), RepositoryError> {
        info!("📦 Applying stock adjustment batch of {} items", items.len());

        let mut tx = self.db.begin().await.map_err(RepositoryError::from)?;

        let mut results = Vec::with_capacity(items.len());
        let mut all_applied = true;

        for item in items {
            let rows_affected = match item.operation {
                StockOperation::Increase => sqlx::query(
                    "UPDATE products \
                     SET stock_quantity = stock_quantity + $2, updated_at = current_timestamp \
                     WHERE product_id = $1",
                )
                .bind(item.product_id)
                .bind(item.request_quantity)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    error!(
                        "❌ Failed to increase stock for product {}: {:?}",
                        item.product_id, e
                    );
                    RepositoryError::from(e)
                })?
                .rows_affected(),

                // The stock guard lives in the WHERE clause: a decrease that
                // would go negative matches zero rows.
                StockOperation::Decrease => sqlx::query(
                    "UPDATE products \
                     SET stock_quantity = stock_quantity - $2, updated_at = current_timestamp \
                     WHERE product_id = $1 AND stock_quantity >= $2",
                )
                .bind(item.product_id)
                .bind(item.request_quantity)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    error!(
                        "❌ Failed to decrease stock for product {}: {:?}",
                        item.product_id, e
                    );
                    RepositoryError::from(e)
                })?
                .rows_affected(),
            };

            if rows_affected == 0 {
                all_applied = false;
                results.push(StockAdjustmentResult {
                    product_id: item.product_id,
                    success: false,
                    message: match item.operation {
                        StockOperation::Decrease => "Insufficient stock or unknown product".into(),
                        StockOperation::Increase => "Unknown product".into(),
                    },
                });
            } else {
                results.push(StockAdjustmentResult {
                    product_id: item.product_id,
                    success: true,
                    message: "OK".into(),
                });
            }
        }

        if all_applied {
            tx.commit().await.map_err(RepositoryError::from)?;
            info!("✅ Stock adjustment batch committed");
        } else {
            tx.rollback().await.map_err(RepositoryError::from)?;
            info!("↩️ Stock adjustment batch rolled back");
        }

        Ok((all_applied, results))
    }
}
