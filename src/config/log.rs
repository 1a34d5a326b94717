use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    // Fallback tracing filter when RUST_LOG is unset
    pub filter: Option<String>,
}
