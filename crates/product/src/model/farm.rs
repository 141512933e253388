use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "farm_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FarmStatus {
    Pending,
    Approved,
    Suspended,
    Closed,
}

impl fmt::Display for FarmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FarmStatus::Pending => "PENDING",
            FarmStatus::Approved => "APPROVED",
            FarmStatus::Suspended => "SUSPENDED",
            FarmStatus::Closed => "CLOSED",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Farm {
    pub farm_id: i32,
    pub name: String,
    pub phone: String,
    pub status: FarmStatus,
    pub street: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub ward: Option<String>,
    pub province_id: Option<i32>,
    pub district_id: Option<i32>,
    pub ward_code: Option<String>,
    pub shipping_fee: i64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
