use serde::Serialize;

use crate::error::ClientError;
use crate::model::account::AccountAddress;

/// One `account_info` command frame in the casinocoind WebSocket dialect.
/// The `id` ties the response back to this request.
#[derive(Debug, Clone, Serialize)]
pub struct AccountInfoCommand {
    pub id: u64,
    pub command: &'static str,
    pub account: String,
    /// Pinned to the last validated ledger.
    pub ledger_index: &'static str,
}

impl AccountInfoCommand {
    pub fn new(id: u64, address: &AccountAddress) -> Self {
        Self {
            id,
            command: "account_info",
            account: address.as_str().to_string(),
            ledger_index: "validated",
        }
    }

    pub fn to_frame(&self) -> Result<String, ClientError> {
        serde_json::to_string(self).map_err(|e| ClientError::Protocol(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::constants::SAMPLE_ACCOUNT_ADDRESS;

    #[test]
    fn frame_carries_command_and_id() {
        let address = AccountAddress::parse(SAMPLE_ACCOUNT_ADDRESS).unwrap();
        let frame = AccountInfoCommand::new(7, &address).to_frame().unwrap();

        let value: serde_json::Value = serde_json::from_str(&frame).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["command"], "account_info");
        assert_eq!(value["account"], SAMPLE_ACCOUNT_ADDRESS);
        assert_eq!(value["ledger_index"], "validated");
    }
}
