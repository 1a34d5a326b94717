use serde::Deserialize;
use serde::Serialize;

use crate::constants::DEFAULT_NODE_PORT;
use crate::constants::DEFAULT_NODE_SERVER;

/// Which casinocoind server the quickstart talks to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    pub server: String,
    pub port: u16,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_NODE_SERVER.to_string(),
            port: DEFAULT_NODE_PORT,
        }
    }
}

impl NodeConfig {
    /// Dial URL for the WebSocket handshake. `server` carries the scheme.
    pub fn ws_url(&self) -> String {
        format!("{}:{}", self.server, self.port)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_ws_url_matches_public_endpoint() {
        assert_eq!(NodeConfig::default().ws_url(), "wss://ws01.casinocoin.org:4443");
    }
}
