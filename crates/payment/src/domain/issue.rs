use genproto::order::Issue as IssueProto;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Reason codes for business-rule failures. These travel to the client as
/// data, never as an RPC error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum IssueReason {
    FarmIdRequired,
    EmptyCart,
    InvalidItem,
    FarmNotFound,
    FarmNotApproved,
    FarmAddressIncomplete,
    FarmCarrierConfigIncomplete,
    ProductNotFound,
    ProductNotInFarm,
    ProductNotForSale,
    InsufficientStock,
    UserNotFound,
    UserInactive,
    AddressNotFound,
    AddressNotOwned,
    AddressIncomplete,
    ProvinceNotResolved,
    DistrictNotResolved,
    WardNotResolved,
    PaymentUnsupported,
}

impl fmt::Display for IssueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IssueReason::FarmIdRequired => "FARM_ID_REQUIRED",
            IssueReason::EmptyCart => "EMPTY_CART",
            IssueReason::InvalidItem => "INVALID_ITEM",
            IssueReason::FarmNotFound => "FARM_NOT_FOUND",
            IssueReason::FarmNotApproved => "FARM_NOT_APPROVED",
            IssueReason::FarmAddressIncomplete => "FARM_ADDRESS_INCOMPLETE",
            IssueReason::FarmCarrierConfigIncomplete => "FARM_CARRIER_CONFIG_INCOMPLETE",
            IssueReason::ProductNotFound => "PRODUCT_NOT_FOUND",
            IssueReason::ProductNotInFarm => "PRODUCT_NOT_IN_FARM",
            IssueReason::ProductNotForSale => "PRODUCT_NOT_FOR_SALE",
            IssueReason::InsufficientStock => "INSUFFICIENT_STOCK",
            IssueReason::UserNotFound => "USER_NOT_FOUND",
            IssueReason::UserInactive => "USER_INACTIVE",
            IssueReason::AddressNotFound => "ADDRESS_NOT_FOUND",
            IssueReason::AddressNotOwned => "ADDRESS_NOT_OWNED",
            IssueReason::AddressIncomplete => "ADDRESS_INCOMPLETE",
            IssueReason::ProvinceNotResolved => "PROVINCE_NOT_RESOLVED",
            IssueReason::DistrictNotResolved => "DISTRICT_NOT_RESOLVED",
            IssueReason::WardNotResolved => "WARD_NOT_RESOLVED",
            IssueReason::PaymentUnsupported => "PAYMENT_UNSUPPORTED",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Issue {
    pub reason: IssueReason,
    pub details: String,
    pub product_id: Option<i32>,
    pub farm_id: Option<i32>,
    pub user_id: Option<i32>,
}

impl Issue {
    pub fn new(reason: IssueReason, details: impl Into<String>) -> Self {
        Self {
            reason,
            details: details.into(),
            product_id: None,
            farm_id: None,
            user_id: None,
        }
    }

    pub fn with_product(mut self, product_id: i32) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub fn with_farm(mut self, farm_id: i32) -> Self {
        self.farm_id = Some(farm_id);
        self
    }

    pub fn with_user(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

impl From<Issue> for IssueProto {
    fn from(value: Issue) -> Self {
        IssueProto {
            reason: value.reason.to_string(),
            details: value.details,
            product_id: value.product_id,
            farm_id: value.farm_id,
            user_id: value.user_id,
        }
    }
}
