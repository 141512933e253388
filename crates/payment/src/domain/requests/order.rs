use crate::model::status::{OrderStatus, PaymentMethod};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CartItem {
    #[validate(range(min = 1))]
    #[serde(rename = "product_id")]
    pub product_id: i32,

    #[validate(range(min = 1))]
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CartSubOrder {
    #[validate(range(min = 1))]
    #[serde(rename = "farm_id")]
    pub farm_id: i32,

    #[validate(length(min = 1))]
    pub items: Vec<CartItem>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct OrderInfoRequest {
    #[validate(range(min = 1))]
    #[serde(rename = "user_id")]
    pub user_id: i32,

    #[validate(range(min = 1))]
    #[serde(rename = "address_id")]
    pub address_id: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1))]
    pub suborders: Vec<CartSubOrder>,

    pub order_info: OrderInfoRequest,

    #[serde(rename = "payment_type")]
    pub payment_type: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct FindUserOrdersRequest {
    #[validate(range(min = 1))]
    #[serde(rename = "user_id")]
    pub user_id: i32,

    pub status: Option<OrderStatus>,

    #[validate(range(min = 1))]
    pub page: i32,

    #[validate(range(min = 1, max = 100))]
    pub limit: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct FindSubOrdersByFarmRequest {
    #[validate(range(min = 1))]
    #[serde(rename = "farm_id")]
    pub farm_id: i32,

    pub status: Option<OrderStatus>,

    #[validate(range(min = 1))]
    pub page: i32,

    #[validate(range(min = 1, max = 100))]
    pub limit: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct FindSubOrdersByUserRequest {
    #[validate(range(min = 1))]
    #[serde(rename = "user_id")]
    pub user_id: i32,

    pub status: Option<OrderStatus>,

    #[validate(range(min = 1))]
    pub page: i32,

    #[validate(range(min = 1, max = 100))]
    pub limit: i32,
}

// Record-level requests handed to the command repositories inside the
// order transaction.

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateOrderRecordRequest {
    pub customer_id: i32,
    pub address_id: i32,
    pub total_amount: i64,
    pub discount_amount: i64,
    pub shipping_amount: i64,
    pub final_amount: i64,
    pub currency: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateSubOrderRecordRequest {
    pub order_id: i32,
    pub farm_id: i32,
    pub total_amount: i64,
    pub discount_amount: i64,
    pub shipping_amount: i64,
    pub final_amount: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateOrderDetailRecordRequest {
    pub sub_order_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub price_per_unit: i64,
    pub unit: String,
    pub total_price: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateDeliveryRecordRequest {
    pub sub_order_id: i32,
    pub cod_amount: i64,
    pub shipping_amount: i64,
    pub tracking_code: Option<String>,
    pub addressee_name: String,
    pub addressee_phone: String,
    pub address: String,
    pub delivery_method: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreatePaymentRecordRequest {
    pub order_id: i32,
    pub amount: i64,
    pub method: PaymentMethod,
    pub transaction_id: Option<String>,
    pub currency: String,
    pub qr_code: Option<String>,
    pub checkout_url: Option<String>,
    pub signature: Option<String>,
}
