use crate::{domain::response::farm::FarmResponse, model::product::Product as ProductModel};
use genproto::product::ProductResponse as ProductResponseProto;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub farm_id: i32,
    pub name: String,
    pub status: String,
    pub price_per_unit: i64,
    pub unit: String,
    pub stock_quantity: i32,
    pub weight_gram: i32,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
    pub farm: Option<FarmResponse>,
}

// model to response
impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.product_id,
            farm_id: value.farm_id,
            name: value.name,
            status: value.status.to_string(),
            price_per_unit: value.price_per_unit,
            unit: value.unit,
            stock_quantity: value.stock_quantity,
            weight_gram: value.weight_gram,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
            farm: None,
        }
    }
}

// response to proto
impl From<ProductResponse> for ProductResponseProto {
    fn from(value: ProductResponse) -> Self {
        ProductResponseProto {
            id: value.id,
            farm_id: value.farm_id,
            name: value.name,
            status: value.status,
            price_per_unit: value.price_per_unit,
            unit: value.unit,
            stock_quantity: value.stock_quantity,
            weight_gram: value.weight_gram,
            created_at: value.created_at.unwrap_or_default(),
            updated_at: value.updated_at.unwrap_or_default(),
            farm: value.farm.map(Into::into),
        }
    }
}
