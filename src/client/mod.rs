pub mod request;
pub mod response;

use async_trait::async_trait;
use futures_util::SinkExt;
use futures_util::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::MaybeTlsStream;
use tokio_tungstenite::WebSocketStream;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::debug;
use tracing::warn;
use url::Url;

use crate::config::NodeConfig;
use crate::error::ClientError;
use crate::model::account::AccountAddress;
use crate::model::account::AccountInfo;
use crate::client::request::AccountInfoCommand;
use crate::client::response::ResponseEnvelope;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// The two operations a live session supports. Split out so the runner can be
/// exercised against a scripted session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NodeSession: Send {
    async fn get_account_info(&mut self, address: &AccountAddress) -> Result<AccountInfo, ClientError>;

    async fn disconnect(&mut self) -> Result<(), ClientError>;
}

/// WebSocket session with a casinocoind node.
///
/// Strictly sequential: one in-flight command at a time, owned by a single
/// caller. No reconnects, no timeouts beyond the transport's own.
#[derive(Debug)]
pub struct NodeClient {
    url: String,
    stream: Option<WsStream>,
    next_id: u64,
}

impl NodeClient {
    /// Opens the WebSocket to the configured node. The returned client is the
    /// connection; dropping it without `disconnect` just drops the socket.
    pub async fn connect(config: &NodeConfig) -> Result<Self, ClientError> {
        let endpoint = config.ws_url();
        let url = Url::parse(&endpoint).map_err(|e| ClientError::Connection {
            url: endpoint.clone(),
            reason: e.to_string(),
        })?;

        debug!("connecting::{}", url);
        let (stream, _) = connect_async(url.as_str())
            .await
            .map_err(|e| ClientError::Connection {
                url: endpoint.clone(),
                reason: e.to_string(),
            })?;
        debug!("connected::{}", url);

        Ok(Self {
            url: endpoint,
            stream: Some(stream),
            next_id: 1,
        })
    }

    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    /// Sends one frame and waits for the frame answering it. Stream
    /// notifications and responses to other ids are skipped.
    async fn exchange(&mut self, frame: String, id: u64) -> Result<serde_json::Value, ClientError> {
        let stream = self.stream.as_mut().ok_or(ClientError::NotConnected)?;

        stream
            .send(Message::Text(frame.into()))
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        while let Some(message) = stream.next().await {
            let message = message.map_err(|e| ClientError::Transport(e.to_string()))?;
            match message {
                Message::Text(text) => {
                    let envelope = ResponseEnvelope::parse(&text)?;
                    if !envelope.matches(id) {
                        debug!("skipping_unmatched_frame::{:?}", envelope.id);
                        continue;
                    }
                    return envelope.into_result();
                }
                Message::Close(_) => break,
                // Pings are answered by the transport layer
                _ => continue,
            }
        }

        Err(ClientError::Transport(
            "connection closed before a response arrived".to_string(),
        ))
    }
}

#[async_trait]
impl NodeSession for NodeClient {
    async fn get_account_info(&mut self, address: &AccountAddress) -> Result<AccountInfo, ClientError> {
        let id = self.next_id;
        self.next_id += 1;

        let command = AccountInfoCommand::new(id, address);
        let result = self.exchange(command.to_frame()?, id).await?;
        serde_json::from_value(result).map_err(|e| ClientError::Protocol(e.to_string()))
    }

    /// Idempotent: closing an already-closed session is a no-op.
    async fn disconnect(&mut self) -> Result<(), ClientError> {
        match self.stream.take() {
            Some(mut stream) => {
                if let Err(e) = stream.close(None).await {
                    warn!("close_frame_failed::{}", e);
                }
                debug!("disconnected::{}", self.url);
                Ok(())
            }
            None => {
                debug!("already_disconnected::{}", self.url);
                Ok(())
            }
        }
    }
}
