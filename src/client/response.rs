use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;

/// Envelope around every frame the node sends back. Stream notifications
/// (ledger closes and the like) arrive on the same socket, so everything is
/// optional until dispatch.
#[derive(Debug, Deserialize)]
pub struct ResponseEnvelope {
    pub id: Option<u64>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub result: Option<Value>,
    pub error: Option<String>,
    pub error_code: Option<i64>,
    pub error_message: Option<String>,
}

impl ResponseEnvelope {
    pub fn parse(frame: &str) -> Result<Self, ClientError> {
        serde_json::from_str(frame).map_err(|e| ClientError::Protocol(e.to_string()))
    }

    /// Whether this frame answers the request tagged `id`.
    pub fn matches(&self, id: u64) -> bool {
        self.id == Some(id)
    }

    pub fn into_result(self) -> Result<Value, ClientError> {
        match self.status.as_deref() {
            Some("success") => self
                .result
                .ok_or_else(|| ClientError::Protocol("success frame without a result".to_string())),
            Some("error") => Err(ClientError::Request {
                error: self.error.unwrap_or_else(|| "unknown".to_string()),
                error_message: self.error_message.unwrap_or_default(),
            }),
            other => Err(ClientError::Protocol(format!(
                "unexpected response status: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn success_frame_yields_result() {
        let envelope = ResponseEnvelope::parse(
            r#"{"id":1,"status":"success","type":"response","result":{"validated":true}}"#,
        )
        .unwrap();
        assert!(envelope.matches(1));
        assert!(!envelope.matches(2));

        let result = envelope.into_result().unwrap();
        assert_eq!(result["validated"], true);
    }

    #[test]
    fn error_frame_surfaces_node_error() {
        let envelope = ResponseEnvelope::parse(
            r#"{"id":1,"status":"error","error":"actNotFound","error_code":19,"error_message":"Account not found.","type":"response"}"#,
        )
        .unwrap();
        let err = envelope.into_result().unwrap_err();
        match err {
            ClientError::Request { error, error_message } => {
                assert_eq!(error, "actNotFound");
                assert_eq!(error_message, "Account not found.");
            }
            other => panic!("expected Request error, got {other:?}"),
        }
    }

    #[test]
    fn statusless_frame_is_a_protocol_error() {
        let envelope = ResponseEnvelope::parse(r#"{"type":"ledgerClosed","ledger_index":99}"#).unwrap();
        assert!(matches!(envelope.into_result(), Err(ClientError::Protocol(_))));
    }

    #[test]
    fn non_json_frame_fails_to_parse() {
        assert!(matches!(
            ResponseEnvelope::parse("pong"),
            Err(ClientError::Protocol(_))
        ));
    }
}
