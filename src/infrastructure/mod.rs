pub mod dto;
pub mod http;
pub mod services;
pub mod synthetic;

pub use http::HttpStockGateway;
pub use synthetic::SyntheticGateway;
