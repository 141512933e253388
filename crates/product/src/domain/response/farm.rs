use crate::model::farm::Farm as FarmModel;
use genproto::farm::{FarmAddress as FarmAddressProto, FarmResponse as FarmResponseProto};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct FarmAddressResponse {
    pub street: String,
    pub city: String,
    pub district: String,
    pub ward: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct FarmResponse {
    pub id: i32,
    pub name: String,
    pub status: String,
    pub phone: String,
    pub address: Option<FarmAddressResponse>,
    pub province_id: i32,
    pub district_id: i32,
    pub ward_code: String,
    pub shipping_fee: i64,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

// model to response
impl From<FarmModel> for FarmResponse {
    fn from(value: FarmModel) -> Self {
        let address = match (&value.street, &value.city, &value.district, &value.ward) {
            (Some(street), Some(city), Some(district), Some(ward)) => {
                Some(FarmAddressResponse {
                    street: street.clone(),
                    city: city.clone(),
                    district: district.clone(),
                    ward: ward.clone(),
                })
            }
            _ => None,
        };

        FarmResponse {
            id: value.farm_id,
            name: value.name,
            status: value.status.to_string(),
            phone: value.phone,
            address,
            province_id: value.province_id.unwrap_or_default(),
            district_id: value.district_id.unwrap_or_default(),
            ward_code: value.ward_code.unwrap_or_default(),
            shipping_fee: value.shipping_fee,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

// response to proto
impl From<FarmResponse> for FarmResponseProto {
    fn from(value: FarmResponse) -> Self {
        FarmResponseProto {
            id: value.id,
            name: value.name,
            status: value.status,
            phone: value.phone,
            address: value.address.map(|a| FarmAddressProto {
                street: a.street,
                city: a.city,
                district: a.district,
                ward: a.ward,
            }),
            province_id: value.province_id,
            district_id: value.district_id,
            ward_code: value.ward_code,
            shipping_fee: value.shipping_fee,
            created_at: value.created_at.unwrap_or_default(),
            updated_at: value.updated_at.unwrap_or_default(),
        }
    }
}
