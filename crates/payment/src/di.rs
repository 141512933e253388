use crate::{
    abstract_trait::{
        carrier::DynCarrierGateway,
        gateway::DynPaymentGateway,
        grpc_client::{DynCatalogGrpcClient, DynUserGrpcClient},
        order::{
            delivery::{DynDeliveryCommandRepository, DynDeliveryQueryRepository},
            order_detail::{DynOrderDetailCommandRepository, DynOrderDetailQueryRepository},
            repository::{DynOrderCommandRepository, DynOrderQueryRepository},
            service::{
                DynOrderCommandService, DynOrderQueryService, DynOrderValidationService,
                DynShippingFeeService,
            },
        },
        payment::{
            DynPaymentCallbackService, DynPaymentCommandRepository, DynPaymentMethodStrategy,
            DynPaymentQueryRepository,
        },
        sub_order::{
            DynSubOrderCommandRepository, DynSubOrderQueryRepository, DynSubOrderQueryService,
        },
    },
    carrier::GhnGateway,
    config::myconfig::Config,
    gateway::PayosGateway,
    grpc_client::{GrpcClients, catalog::CatalogGrpcClientService, user::UserGrpcClientService},
    repository::{
        delivery::{DeliveryCommandRepository, DeliveryQueryRepository},
        order::{OrderCommandRepository, OrderQueryRepository},
        order_detail::{OrderDetailCommandRepository, OrderDetailQueryRepository},
        payment::{PaymentCommandRepository, PaymentQueryRepository},
        sub_order::{SubOrderCommandRepository, SubOrderQueryRepository},
    },
    service::{
        order::{OrderCommandService, OrderCommandServiceDeps, OrderQueryService},
        payment::{CodPaymentStrategy, PaymentCallbackService, PayosPaymentStrategy},
        shipping::ShippingFeeService,
        sub_order::SubOrderQueryService,
        validation::OrderValidationService,
    },
};
use anyhow::Result;
use prometheus_client::registry::Registry;
use shared::{cache::CacheStore, config::ConnectionPool};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_command: DynOrderCommandService,
    pub order_query: DynOrderQueryService,
    pub shipping_fee: DynShippingFeeService,
    pub sub_order_query: DynSubOrderQueryService,
    pub payment_callback: DynPaymentCallbackService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_command", &"DynOrderCommandService")
            .field("order_query", &"DynOrderQueryService")
            .field("shipping_fee", &"DynShippingFeeService")
            .field("sub_order_query", &"DynSubOrderQueryService")
            .field("payment_callback", &"DynPaymentCallbackService")
            .finish()
    }
}

pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub cache: Arc<CacheStore>,
    pub clients: GrpcClients,
    pub config: Config,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Result<Self> {
        let DependenciesInjectDeps {
            pool,
            cache,
            clients,
            config,
        } = deps;

        // Repositories.
        let order_command_repo: DynOrderCommandRepository =
            Arc::new(OrderCommandRepository::new(pool.clone()));
        let order_query_repo: DynOrderQueryRepository =
            Arc::new(OrderQueryRepository::new(pool.clone()));
        let sub_order_command_repo: DynSubOrderCommandRepository =
            Arc::new(SubOrderCommandRepository::new());
        let sub_order_query_repo: DynSubOrderQueryRepository =
            Arc::new(SubOrderQueryRepository::new(pool.clone()));
        let order_detail_command_repo: DynOrderDetailCommandRepository =
            Arc::new(OrderDetailCommandRepository::new());
        let order_detail_query_repo: DynOrderDetailQueryRepository =
            Arc::new(OrderDetailQueryRepository::new(pool.clone()));
        let delivery_command_repo: DynDeliveryCommandRepository =
            Arc::new(DeliveryCommandRepository::new());
        let delivery_query_repo: DynDeliveryQueryRepository =
            Arc::new(DeliveryQueryRepository::new(pool.clone()));
        let payment_command_repo: DynPaymentCommandRepository =
            Arc::new(PaymentCommandRepository::new(pool.clone()));
        let payment_query_repo: DynPaymentQueryRepository =
            Arc::new(PaymentQueryRepository::new(pool.clone()));

        // Outbound adapters.
        let catalog_client: DynCatalogGrpcClient = Arc::new(CatalogGrpcClientService::new(
            clients.product_query_client,
            clients.product_command_client,
            clients.farm_query_client,
        ));
        let user_client: DynUserGrpcClient =
            Arc::new(UserGrpcClientService::new(clients.user_query_client));
        let carrier: DynCarrierGateway = Arc::new(GhnGateway::new(config.carrier.clone())?);
        let payment_gateway: DynPaymentGateway = Arc::new(PayosGateway::new(config.payos.clone())?);

        // Strategies.
        let cod_strategy: DynPaymentMethodStrategy = Arc::new(CodPaymentStrategy::new());
        let payos_strategy: DynPaymentMethodStrategy =
            Arc::new(PayosPaymentStrategy::new(payment_gateway));

        // Services.
        let validator: DynOrderValidationService = Arc::new(OrderValidationService::new(
            catalog_client.clone(),
            user_client,
            carrier.clone(),
        ));

        let shipping_fee: DynShippingFeeService =
            Arc::new(ShippingFeeService::new(validator.clone(), carrier.clone()));

        let order_command_deps = OrderCommandServiceDeps {
            validator,
            catalog: catalog_client,
            carrier,
            cod_strategy,
            payos_strategy,
            order_command: order_command_repo.clone(),
            order_query: order_query_repo.clone(),
            sub_order_command: sub_order_command_repo,
            order_detail_command: order_detail_command_repo,
            delivery_command: delivery_command_repo,
            payment_command: payment_command_repo.clone(),
            pool,
        };

        let order_command: DynOrderCommandService =
            Arc::new(OrderCommandService::new(order_command_deps, registry));

        let order_query: DynOrderQueryService = Arc::new(OrderQueryService::new(
            order_query_repo,
            cache.clone(),
            registry,
        ));

        let sub_order_query: DynSubOrderQueryService = Arc::new(SubOrderQueryService::new(
            sub_order_query_repo,
            delivery_query_repo,
            order_detail_query_repo,
            cache,
        ));

        let payment_callback: DynPaymentCallbackService = Arc::new(PaymentCallbackService::new(
            payment_query_repo,
            payment_command_repo,
            order_command_repo,
            config.payos.checksum_key.clone(),
        ));

        Ok(Self {
            order_command,
            order_query,
            shipping_fee,
            sub_order_query,
            payment_callback,
        })
    }
}
