use crate::domain::user::{UserAccount, UserLocation};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynUserGrpcClient = Arc<dyn UserGrpcClientTrait + Send + Sync>;

#[async_trait]
pub trait UserGrpcClientTrait {
    async fn find_by_id(
        &self,
        id: i32,
        include_locations: bool,
    ) -> Result<Option<UserAccount>, ServiceError>;

    async fn find_location_by_id(&self, id: i32) -> Result<Option<UserLocation>, ServiceError>;
}
