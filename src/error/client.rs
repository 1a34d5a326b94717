use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to connect to {url}: {reason}")]
    Connection { url: String, reason: String },

    #[error("Node rejected the request: {error}: {error_message}")]
    Request { error: String, error_message: String },

    #[error("Connection dropped mid-exchange: {0}")]
    Transport(String),

    #[error("Malformed account address: {0}")]
    MalformedAddress(String),

    #[error("Unparseable node frame: {0}")]
    Protocol(String),

    #[error("Not connected to a node")]
    NotConnected,
}
