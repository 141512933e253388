mod farm;
mod product;

pub use self::farm::FarmQueryGrpcServiceImpl;
pub use self::product::{ProductCommandGrpcServiceImpl, ProductQueryGrpcServiceImpl};
