mod command;
mod query;
mod shipping;
mod validation;

pub use self::command::{DynOrderCommandService, OrderCommandServiceTrait};
pub use self::query::{DynOrderQueryService, OrderQueryServiceTrait};
pub use self::shipping::{DynShippingFeeService, ShippingFeeServiceTrait};
pub use self::validation::{DynOrderValidationService, OrderValidationServiceTrait};
