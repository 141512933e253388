use crate::{abstract_trait::farm::FarmQueryRepositoryTrait, model::farm::Farm as FarmModel};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

#[derive(Clone)]
pub struct FarmQueryRepository {
    db: ConnectionPool,
}

impl FarmQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

const FARM_COLUMNS: &str = "farm_id, name, phone, status, street, city, district, ward, \
     province_id, district_id, ward_code, shipping_fee, created_at, updated_at";

#[async_trait]
impl FarmQueryRepositoryTrait for FarmQueryRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<FarmModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let farm = sqlx::query_as::<_, FarmModel>(&format!(
            "SELECT {FARM_COLUMNS} FROM farms WHERE farm_id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch farm {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        Ok(farm)
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<FarmModel>, RepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let farms = sqlx::query_as::<_, FarmModel>(&format!(
            "SELECT {FARM_COLUMNS} FROM farms WHERE farm_id = ANY($1)"
        ))
        .bind(ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch farms {:?}: {:?}", ids, e);
            RepositoryError::from(e)
        })?;

        Ok(farms)
    }
}
