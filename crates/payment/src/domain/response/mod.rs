pub mod delivery;
pub mod order;
pub mod order_detail;
pub mod payment;
pub mod shipping;
pub mod sub_order;
