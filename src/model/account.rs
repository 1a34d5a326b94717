use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::constants::DROPS_PER_CSC;
use crate::error::ClientError;

/// Base58 alphabet used by the CasinoCoin ledger. Same dictionary as the
/// ripple one with `r` and `c` swapped, which is why account IDs lead with `c`.
const ADDRESS_ALPHABET: &str = "cpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2brdeCg65jkm8oFqi1tuvAxyz";

const ADDRESS_MIN_LEN: usize = 25;
const ADDRESS_MAX_LEN: usize = 35;

/// A CasinoCoin account identifier.
///
/// Validation is shape-only (prefix, length, alphabet). Checksum verification
/// needs SHA-256 and is left to the node; a bad checksum comes back as an
/// `actMalformed` error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountAddress(String);

impl AccountAddress {
    pub fn parse(raw: &str) -> Result<Self, ClientError> {
        let shape_ok = raw.starts_with('c')
            && raw.len() >= ADDRESS_MIN_LEN
            && raw.len() <= ADDRESS_MAX_LEN
            && raw.chars().all(|ch| ADDRESS_ALPHABET.contains(ch));
        if !shape_ok {
            return Err(ClientError::MalformedAddress(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The `account_data` object of an `account_info` result, an AccountRoot
/// ledger entry. Field names are PascalCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountData {
    #[serde(rename = "Account")]
    pub account: String,
    /// Balance in drops, as a decimal string.
    #[serde(rename = "Balance")]
    pub balance: String,
    #[serde(rename = "Flags")]
    pub flags: u32,
    #[serde(rename = "LedgerEntryType")]
    pub ledger_entry_type: String,
    #[serde(rename = "OwnerCount")]
    pub owner_count: u32,
    #[serde(rename = "PreviousTxnID")]
    pub previous_txn_id: String,
    #[serde(rename = "PreviousTxnLgrSeq")]
    pub previous_txn_lgr_seq: u32,
    #[serde(rename = "Sequence")]
    pub sequence: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    pub account_data: AccountData,
    #[serde(default)]
    pub ledger_index: Option<u64>,
    #[serde(default)]
    pub validated: bool,
}

impl AccountInfo {
    /// Balance in CSC. `None` if the node handed back a non-numeric balance.
    pub fn csc_balance(&self) -> Option<f64> {
        self.account_data
            .balance
            .parse::<u64>()
            .ok()
            .map(|drops| drops as f64 / DROPS_PER_CSC as f64)
    }
}

impl fmt::Display for AccountInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{self:?}"),
        }
    }
}
