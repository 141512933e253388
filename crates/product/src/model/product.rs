use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "product_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    PreOrder,
    OpenForSale,
    SoldOut,
    Closed,
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProductStatus::PreOrder => "PRE_ORDER",
            ProductStatus::OpenForSale => "OPEN_FOR_SALE",
            ProductStatus::SoldOut => "SOLD_OUT",
            ProductStatus::Closed => "CLOSED",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub farm_id: i32,
    pub name: String,
    pub status: ProductStatus,
    pub price_per_unit: i64,
    pub unit: String,
    pub stock_quantity: i32,
    pub weight_gram: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
