//! Quickstart: fetch account info for a well-known CasinoCoin address.
//!
//! Connects to a public casinocoind node over WebSocket, requests
//! `account_info` for the sample address, prints the result, disconnects.

use casinocoin_quickstart::engine::Quickstart;
use casinocoin_quickstart::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    Quickstart::run().await?;
    Ok(())
}
