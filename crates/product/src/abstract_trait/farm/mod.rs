mod repository;
mod service;

pub use self::repository::{DynFarmQueryRepository, FarmQueryRepositoryTrait};
pub use self::service::{DynFarmQueryService, FarmQueryServiceTrait};
