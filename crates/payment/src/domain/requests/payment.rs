use serde::{Deserialize, Serialize};

/// A payment-gateway webhook as received at the RPC boundary. `data` is the
/// gateway's payload object; nothing in it is trusted until the signature
/// verifies.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PaymentCallbackRequest {
    pub code: String,
    pub desc: String,
    pub success: bool,
    pub data: serde_json::Value,
    pub signature: String,
}
