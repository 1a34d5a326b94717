use tracing::debug;
use tracing::info;

use crate::Result;
use crate::client::NodeClient;
use crate::client::NodeSession;
use crate::config::load_config;
use crate::constants::SAMPLE_ACCOUNT_ADDRESS;
use crate::error::ClientError;
use crate::model::account::AccountAddress;
use crate::model::account::AccountInfo;
use crate::tracing::setup_tracing;

pub struct Quickstart;

impl Quickstart {
    pub async fn run() -> Result<()> {
        let config = load_config("Config.toml").await?;
        setup_tracing("get_account_info", config.logging.filter.as_deref());

        let address = AccountAddress::parse(SAMPLE_ACCOUNT_ADDRESS)?;

        info!("connecting to {}", config.node.ws_url());
        let mut session = NodeClient::connect(&config.node).await?;

        let info = fetch_and_disconnect(&mut session, &address).await?;
        debug!("csc_balance::{:?}", info.csc_balance());
        Ok(())
    }
}

/// Fetches account info on an established session and prints it.
///
/// Invariant: once this is entered, `disconnect` runs exactly once, on both
/// the success and the failure path of the fetch. A fetch error is reported
/// ahead of a disconnect error.
async fn fetch_and_disconnect<S: NodeSession>(
    session: &mut S,
    address: &AccountAddress,
) -> Result<AccountInfo, ClientError> {
    info!("getting account info for {}", address);
    let fetched = session.get_account_info(address).await;

    if let Ok(info) = &fetched {
        println!("{}", info);
        println!("get_account_info done");
    }

    let closed = session.disconnect().await;

    let info = fetched?;
    closed?;
    println!("done and disconnected.");
    Ok(info)
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;
    use mockall::predicate::eq;

    use super::*;
    use crate::client::MockNodeSession;
    use crate::model::account::AccountData;

    fn sample_info() -> AccountInfo {
        AccountInfo {
            account_data: AccountData {
                account: SAMPLE_ACCOUNT_ADDRESS.to_string(),
                balance: "325858250000".to_string(),
                flags: 0,
                ledger_entry_type: "AccountRoot".to_string(),
                owner_count: 0,
                previous_txn_id: "5E0C".to_string(),
                previous_txn_lgr_seq: 2212159,
                sequence: 17,
            },
            ledger_index: Some(2212169),
            validated: true,
        }
    }

    fn sample_address() -> AccountAddress {
        AccountAddress::parse(SAMPLE_ACCOUNT_ADDRESS).unwrap()
    }

    #[tokio::test]
    async fn fetch_then_disconnect_in_order() {
        let address = sample_address();
        let mut session = MockNodeSession::new();
        let mut seq = Sequence::new();

        session
            .expect_get_account_info()
            .with(eq(address.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(sample_info()));
        session
            .expect_disconnect()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));

        let info = fetch_and_disconnect(&mut session, &address).await.unwrap();
        assert_eq!(info.account_data.sequence, 17);
    }

    #[tokio::test]
    async fn fetch_failure_still_disconnects() {
        let address = sample_address();
        let mut session = MockNodeSession::new();

        session.expect_get_account_info().times(1).returning(|_| {
            Err(ClientError::Request {
                error: "actNotFound".to_string(),
                error_message: "Account not found.".to_string(),
            })
        });
        session.expect_disconnect().times(1).returning(|| Ok(()));

        let err = fetch_and_disconnect(&mut session, &address).await.unwrap_err();
        assert!(matches!(err, ClientError::Request { .. }));
    }

    #[tokio::test]
    async fn disconnect_failure_surfaces_after_successful_fetch() {
        let address = sample_address();
        let mut session = MockNodeSession::new();

        session
            .expect_get_account_info()
            .times(1)
            .returning(|_| Ok(sample_info()));
        session
            .expect_disconnect()
            .times(1)
            .returning(|| Err(ClientError::Transport("socket went away".to_string())));

        let err = fetch_and_disconnect(&mut session, &address).await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }

    #[tokio::test]
    async fn fetch_error_wins_over_disconnect_error() {
        let address = sample_address();
        let mut session = MockNodeSession::new();

        session
            .expect_get_account_info()
            .times(1)
            .returning(|_| Err(ClientError::NotConnected));
        session
            .expect_disconnect()
            .times(1)
            .returning(|| Err(ClientError::Transport("socket went away".to_string())));

        let err = fetch_and_disconnect(&mut session, &address).await.unwrap_err();
        assert!(matches!(err, ClientError::NotConnected));
    }
}
