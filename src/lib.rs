pub mod client;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod model;
pub mod tracing;

pub use error::ClientError;
pub use error::ConfigError;
pub use error::Result;
