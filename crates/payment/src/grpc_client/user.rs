use crate::{
    abstract_trait::grpc_client::UserGrpcClientTrait,
    domain::user::{UserAccount, UserLocation},
};
use async_trait::async_trait;
use genproto::user::{
    FindByIdLocationRequest, FindByIdUserRequest, LocationResponse,
    user_query_service_client::UserQueryServiceClient,
};
use shared::errors::{ServiceError, grpc_status_to_service_error};
use std::sync::Arc;
use tokio::sync::Mutex;
use tonic::{Code, Request, transport::Channel};

pub struct UserGrpcClientService {
    client: Arc<Mutex<UserQueryServiceClient<Channel>>>,
}

impl UserGrpcClientService {
    pub fn new(client: UserQueryServiceClient<Channel>) -> Self {
        Self {
            client: Arc::new(Mutex::new(client)),
        }
    }
}

fn location_from_proto(value: LocationResponse) -> UserLocation {
    UserLocation {
        id: value.id,
        user_id: value.user_id,
        name: value.name,
        phone: value.phone,
        address: value.address,
        city: value.city,
        district: value.district,
        ward: value.ward,
    }
}

#[async_trait]
impl UserGrpcClientTrait for UserGrpcClientService {
    async fn find_by_id(
        &self,
        id: i32,
        include_locations: bool,
    ) -> Result<Option<UserAccount>, ServiceError> {
        let req = Request::new(FindByIdUserRequest {
            id,
            include_locations,
            include_payment_methods: false,
        });

        let mut client = self.client.lock().await;

        match client.find_by_id(req).await {
            Ok(response) => Ok(response.into_inner().data.map(|u| UserAccount {
                id: u.id,
                name: u.name,
                email: u.email,
                phone: u.phone,
                status: u.status,
                locations: u.locations.into_iter().map(location_from_proto).collect(),
            })),
            Err(status) if status.code() == Code::NotFound => Ok(None),
            Err(status) => Err(grpc_status_to_service_error(status)),
        }
    }

    async fn find_location_by_id(&self, id: i32) -> Result<Option<UserLocation>, ServiceError> {
        let req = Request::new(FindByIdLocationRequest { id });

        let mut client = self.client.lock().await;

        match client.find_location_by_id(req).await {
            Ok(response) => Ok(response.into_inner().data.map(location_from_proto)),
            Err(status) if status.code() == Code::NotFound => Ok(None),
            Err(status) => Err(grpc_status_to_service_error(status)),
        }
    }
}
