use genproto::product::StockAdjustmentResult as StockAdjustmentResultProto;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct StockAdjustmentResult {
    pub product_id: i32,
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct StockUpdateResponse {
    pub success: bool,
    pub results: Vec<StockAdjustmentResult>,
}

impl From<StockAdjustmentResult> for StockAdjustmentResultProto {
    fn from(value: StockAdjustmentResult) -> Self {
        StockAdjustmentResultProto {
            product_id: value.product_id,
            success: value.success,
            message: value.message,
        }
    }
}
