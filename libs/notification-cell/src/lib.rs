pub mod error;
pub mod services;

pub use error::*;
pub use services::*;
