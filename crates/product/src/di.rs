use crate::{
    abstract_trait::{
        farm::{DynFarmQueryRepository, DynFarmQueryService},
        product::{
            repository::{DynProductCommandRepository, DynProductQueryRepository},
            service::{DynProductCommandService, DynProductQueryService},
        },
    },
    repository::{
        farm::FarmQueryRepository,
        product::{ProductCommandRepository, ProductQueryRepository},
    },
    service::{
        farm::FarmQueryService,
        product::{ProductCommandService, ProductQueryService},
    },
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub farm_query: DynFarmQueryService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"DynProductQueryService")
            .field("product_command", &"DynProductCommandService")
            .field("farm_query", &"DynFarmQueryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let product_query_repo: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repo: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(pool.clone()));
        let farm_query_repo: DynFarmQueryRepository =
            Arc::new(FarmQueryRepository::new(pool.clone()));

        let product_query: DynProductQueryService = Arc::new(ProductQueryService::new(
            product_query_repo.clone(),
            farm_query_repo.clone(),
        ));

        let product_command: DynProductCommandService =
            Arc::new(ProductCommandService::new(product_command_repo));

        let farm_query: DynFarmQueryService = Arc::new(FarmQueryService::new(farm_query_repo));

        Self {
            product_query,
            product_command,
            farm_query,
        }
    }
}
