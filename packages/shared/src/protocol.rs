//! Wire protocol for the chat room.
//!
//! Every WebSocket text frame carries one named event encoded as JSON:
//!
//! ```text
//! {"event": "join", "data": {"username": "alice", "room": "lobby"}}
//! ```
//!
//! - client → server: `join`, `send_message`
//! - server → client: `message`, `error`

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Username used by the server for its own announcements.
pub const SYSTEM_USERNAME: &str = "System";

/// Username assumed by the server when a `send_message` payload omits it.
pub const UNKNOWN_USERNAME: &str = "Unknown";

fn unknown_username() -> String {
    UNKNOWN_USERNAME.to_string()
}

/// Payload of the `join` event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinPayload {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub room: String,
}

/// Payload of the `send_message` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessagePayload {
    #[serde(default = "unknown_username")]
    pub username: String,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub room: String,
}

/// Payload of the `message` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    pub username: String,
    pub msg: String,
}

/// Payload of the `error` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub msg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorPayload {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            error: None,
        }
    }

    /// Attach the underlying failure detail
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.error = Some(detail.into());
        self
    }
}

/// Events emitted by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    Join(JoinPayload),
    SendMessage(SendMessagePayload),
}

impl ClientEvent {
    /// Event name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            ClientEvent::Join(_) => "join",
            ClientEvent::SendMessage(_) => "send_message",
        }
    }
}

/// Events delivered by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    Message(MessagePayload),
    Error(ErrorPayload),
}

impl ServerEvent {
    pub fn message(username: impl Into<String>, msg: impl Into<String>) -> Self {
        ServerEvent::Message(MessagePayload {
            username: username.into(),
            msg: msg.into(),
        })
    }

    /// Event name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::Message(_) => "message",
            ServerEvent::Error(_) => "error",
        }
    }
}

/// Protocol errors
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Failed to encode event: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode event: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Encode an event into a text frame
pub fn encode<E: Serialize>(event: &E) -> Result<String, ProtocolError> {
    serde_json::to_string(event).map_err(ProtocolError::Encode)
}

/// Decode a text frame into an event
pub fn decode<'a, E: Deserialize<'a>>(text: &'a str) -> Result<E, ProtocolError> {
    serde_json::from_str(text).map_err(ProtocolError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_event_wire_format() {
        // テスト項目: join イベントが event / data 形式でエンコードされる
        // given (前提条件):
        let event = ClientEvent::Join(JoinPayload {
            username: "alice".to_string(),
            room: "lobby".to_string(),
        });

        // when (操作):
        let json = encode(&event).unwrap();

        // then (期待する結果):
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["event"], "join");
        assert_eq!(value["data"]["username"], "alice");
        assert_eq!(value["data"]["room"], "lobby");
    }

    #[test]
    fn test_send_message_event_name_is_snake_case() {
        // テスト項目: send_message イベント名がスネークケースでエンコードされる
        // given (前提条件):
        let event = ClientEvent::SendMessage(SendMessagePayload {
            username: "bob".to_string(),
            msg: "hi".to_string(),
            room: "lobby".to_string(),
        });

        // when (操作):
        let json = encode(&event).unwrap();

        // then (期待する結果):
        assert!(json.contains(r#""event":"send_message""#));
        assert_eq!(event.name(), "send_message");
    }

    #[test]
    fn test_send_message_missing_fields_use_defaults() {
        // テスト項目: send_message の欠落フィールドは既定値で補われる
        // given (前提条件):
        let json = r#"{"event":"send_message","data":{"room":"lobby"}}"#;

        // when (操作):
        let event: ClientEvent = decode(json).unwrap();

        // then (期待する結果):
        assert_eq!(
            event,
            ClientEvent::SendMessage(SendMessagePayload {
                username: UNKNOWN_USERNAME.to_string(),
                msg: String::new(),
                room: "lobby".to_string(),
            })
        );
    }

    #[test]
    fn test_join_missing_fields_decode_as_empty() {
        // テスト項目: join の欠落フィールドは空文字列として読み込まれる
        // given (前提条件):
        let json = r#"{"event":"join","data":{}}"#;

        // when (操作):
        let event: ClientEvent = decode(json).unwrap();

        // then (期待する結果):
        assert_eq!(event, ClientEvent::Join(JoinPayload::default()));
    }

    #[test]
    fn test_decode_server_message_event() {
        // テスト項目: サーバーからの message イベントがデコードされる
        // given (前提条件):
        let json = r#"{"event":"message","data":{"username":"System","msg":"alice has joined the room."}}"#;

        // when (操作):
        let event: ServerEvent = decode(json).unwrap();

        // then (期待する結果):
        assert_eq!(
            event,
            ServerEvent::message(SYSTEM_USERNAME, "alice has joined the room.")
        );
    }

    #[test]
    fn test_error_event_omits_missing_detail() {
        // テスト項目: 詳細のない error イベントは error フィールドを含まない
        // given (前提条件):
        let event = ServerEvent::Error(ErrorPayload::new("Invalid message: room is required"));

        // when (操作):
        let json = encode(&event).unwrap();

        // then (期待する結果):
        assert!(!json.contains(r#""error":"#));
        assert!(json.contains(r#""event":"error""#));
    }

    #[test]
    fn test_decode_unknown_event_fails() {
        // テスト項目: 未知のイベント名はデコードエラーになる
        // given (前提条件):
        let json = r#"{"event":"leave","data":{"room":"lobby"}}"#;

        // when (操作):
        let result = decode::<ClientEvent>(json);

        // then (期待する結果):
        assert!(matches!(result, Err(ProtocolError::Decode(_))));
    }
}
