use crate::{
    abstract_trait::product::repository::ProductQueryRepositoryTrait,
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

const PRODUCT_COLUMNS: &str = "product_id, farm_id, name, status, price_per_unit, unit, \
     stock_quantity, weight_gram, created_at, updated_at";

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(product)
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<ProductModel>, RepositoryError> {
        info!("📦 Fetching {} products by id", ids.len());

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let products = sqlx::query_as::<_, ProductModel>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE product_id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products {:?}: {:?}", ids, e);
            RepositoryError::from(e)
        })?;

        Ok(products)
    }
}
