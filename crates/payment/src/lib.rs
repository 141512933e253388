pub mod abstract_trait;
pub mod carrier;
pub mod config;
pub mod di;
pub mod domain;
pub mod gateway;
pub mod grpc_client;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;
pub mod state;
