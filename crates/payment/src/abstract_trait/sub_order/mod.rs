mod repository;
mod service;

pub use self::repository::{
    DynSubOrderCommandRepository, DynSubOrderQueryRepository, SubOrderCommandRepositoryTrait,
    SubOrderQueryRepositoryTrait,
};
pub use self::service::{DynSubOrderQueryService, SubOrderQueryServiceTrait};
