//! Stock listing aggregate: records, pages, series and the gateway contract.

pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
