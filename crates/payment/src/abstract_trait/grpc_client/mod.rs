mod catalog;
mod user;

pub use self::catalog::{CatalogGrpcClientTrait, DynCatalogGrpcClient};
pub use self::user::{DynUserGrpcClient, UserGrpcClientTrait};
