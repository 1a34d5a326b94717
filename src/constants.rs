/// ======================= Node endpoint =======================
/// Public casinocoind server.
pub const DEFAULT_NODE_SERVER: &str = "wss://ws01.casinocoin.org";

pub const DEFAULT_NODE_PORT: u16 = 4443;

/// ======================= Sample account =======================
/// Well-known funded address the quickstart looks up.
pub const SAMPLE_ACCOUNT_ADDRESS: &str = "caddErVDoBGw1oWMxMHyGhSs9gfTn5pWet";

/// ======================= Ledger units =======================
/// The CasinoCoin ledger tracks balances in drops, 8 decimal places per CSC.
pub const DROPS_PER_CSC: u64 = 100_000_000;
