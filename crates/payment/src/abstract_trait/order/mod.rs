pub mod delivery;
pub mod order_detail;
pub mod repository;
pub mod service;
