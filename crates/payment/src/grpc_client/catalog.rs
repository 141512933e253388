use crate::{
    abstract_trait::grpc_client::CatalogGrpcClientTrait,
    domain::catalog::{
        CatalogFarm, CatalogFarmAddress, CatalogProduct, StockAdjustment, StockItemOutcome,
        StockUpdateOutcome,
    },
};
use async_trait::async_trait;
use genproto::{
    farm::{FarmResponse, FindByIdFarmRequest, farm_query_service_client::FarmQueryServiceClient},
    product::{
        FindByIdsProductRequest, StockAdjustment as StockAdjustmentProto, UpdateQuantitiesRequest,
        product_command_service_client::ProductCommandServiceClient,
        product_query_service_client::ProductQueryServiceClient,
    },
};
use shared::errors::{ServiceError, grpc_status_to_service_error};
use std::sync::Arc;
use tokio::sync::Mutex;
use tonic::{Code, Request, transport::Channel};
use tracing::info;

pub struct CatalogGrpcClientService {
    product_query: Arc<Mutex<ProductQueryServiceClient<Channel>>>,
    product_command: Arc<Mutex<ProductCommandServiceClient<Channel>>>,
    farm_query: Arc<Mutex<FarmQueryServiceClient<Channel>>>,
}

impl CatalogGrpcClientService {
    pub fn new(
        product_query: ProductQueryServiceClient<Channel>,
        product_command: ProductCommandServiceClient<Channel>,
        farm_query: FarmQueryServiceClient<Channel>,
    ) -> Self {
        Self {
            product_query: Arc::new(Mutex::new(product_query)),
            product_command: Arc::new(Mutex::new(product_command)),
            farm_query: Arc::new(Mutex::new(farm_query)),
        }
    }
}

fn farm_from_proto(value: FarmResponse) -> CatalogFarm {
    CatalogFarm {
        id: value.id,
        name: value.name,
        status: value.status,
        phone: value.phone,
        address: value.address.map(|a| CatalogFarmAddress {
            street: a.street,
            city: a.city,
            district: a.district,
            ward: a.ward,
        }),
        province_id: value.province_id,
        district_id: value.district_id,
        ward_code: value.ward_code,
        shipping_fee: value.shipping_fee,
    }
}

#[async_trait]
impl CatalogGrpcClientTrait for CatalogGrpcClientService {
    async fn find_products_by_ids(
        &self,
        ids: &[i32],
        include_farm: bool,
    ) -> Result<Vec<CatalogProduct>, ServiceError> {
        let req = Request::new(FindByIdsProductRequest {
            ids: ids.to_vec(),
            include_farm,
            include_address: include_farm,
        });

        let mut client = self.product_query.lock().await;

        let response = client
            .find_by_ids(req)
            .await
            .map_err(grpc_status_to_service_error)?;

        let products = response
            .into_inner()
            .data
            .into_iter()
            .map(|p| CatalogProduct {
                id: p.id,
                farm_id: p.farm_id,
                name: p.name,
                status: p.status,
                price_per_unit: p.price_per_unit,
                unit: p.unit,
                stock_quantity: p.stock_quantity,
                weight_gram: p.weight_gram,
            })
            .collect();

        Ok(products)
    }

    async fn find_farm_by_id(&self, id: i32) -> Result<Option<CatalogFarm>, ServiceError> {
        let req = Request::new(FindByIdFarmRequest {
            id,
            include_address: true,
        });

        let mut client = self.farm_query.lock().await;

        match client.find_by_id(req).await {
            Ok(response) => Ok(response.into_inner().data.map(farm_from_proto)),
            // An unknown farm is a validation concern for the caller, not a
            // transport fault.
            Err(status) if status.code() == Code::NotFound => Ok(None),
            Err(status) => Err(grpc_status_to_service_error(status)),
        }
    }

    async fn update_quantities(
        &self,
        items: &[StockAdjustment],
    ) -> Result<StockUpdateOutcome, ServiceError> {
        info!("📦 Sending stock adjustment batch of {} items", items.len());

        let req = Request::new(UpdateQuantitiesRequest {
            items: items
                .iter()
                .map(|item| StockAdjustmentProto {
                    product_id: item.product_id,
                    operation: item.operation.to_string(),
                    request_quantity: item.request_quantity,
                })
                .collect(),
        });

        let mut client = self.product_command.lock().await;

        let response = client
            .update_quantities(req)
            .await
            .map_err(grpc_status_to_service_error)?;

        let inner = response.into_inner();

        Ok(StockUpdateOutcome {
            success: inner.success,
            results: inner
                .results
                .into_iter()
                .map(|r| StockItemOutcome {
                    product_id: r.product_id,
                    success: r.success,
                    message: r.message,
                })
                .collect(),
        })
    }
}
