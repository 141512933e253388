use crate::model::{
    delivery::Delivery, order_detail::OrderDetail, payment::Payment, status::OrderStatus,
    sub_order::SubOrder,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i32,
    pub customer_id: i32,
    pub address_id: i32,
    pub total_amount: i64,
    pub discount_amount: i64,
    pub shipping_amount: i64,
    pub final_amount: i64,
    pub currency: String,
    pub status: OrderStatus,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// One fully loaded order: the row plus its payment and sub-order trees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderGraph {
    pub order: Order,
    pub payment: Option<Payment>,
    pub sub_orders: Vec<SubOrderGraph>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubOrderGraph {
    pub sub_order: SubOrder,
    pub delivery: Option<Delivery>,
    pub order_details: Vec<OrderDetail>,
}
