//! Core types: user, location and the chat message passed between components.
//!
//! Field names are part of the wire/storage format. Optional fields are left out of the
//! serialized form entirely when empty, never written as `null`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::Result;

/// User or group identity (id, display name).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Geographic position attached to a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub long: f64,
}

/// One chat event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    /// Channel (transport) the message arrived on or should leave through.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub channel: String,
    /// Recipient.
    pub to: User,
    /// Origin: a group or a person.
    pub from: User,
    /// The person who sent it; differs from `from` in group chats.
    pub sender: User,
    pub content: String,
    /// Whether the message goes to everyone on the channel.
    #[serde(skip_serializing_if = "is_false")]
    pub broadcast: bool,
    /// Free-form metadata attached by adapters and handlers.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub mate: HashMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Message {
    /// Creates a message with the given content and every other field empty.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    pub fn with_to(mut self, to: User) -> Self {
        self.to = to;
        self
    }

    pub fn with_from(mut self, from: User) -> Self {
        self.from = from;
        self
    }

    pub fn with_sender(mut self, sender: User) -> Self {
        self.sender = sender;
        self
    }

    pub fn with_location(mut self, lat: f64, long: f64) -> Self {
        self.location = Some(Location { lat, long });
        self
    }

    /// Attaches one metadata entry, replacing any previous value under `key`.
    pub fn with_mate(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.mate.insert(key.into(), value.into());
        self
    }

    pub fn as_broadcast(mut self) -> Self {
        self.broadcast = true;
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_message_omits_optional_fields() {
        let value = serde_json::to_value(Message::new("hi")).unwrap();
        assert_eq!(
            value,
            json!({
                "to": { "id": "", "name": "" },
                "from": { "id": "", "name": "" },
                "sender": { "id": "", "name": "" },
                "content": "hi"
            })
        );
    }

    #[test]
    fn test_full_message_field_names() {
        let message = Message::new("ping")
            .with_channel("slack")
            .with_to(User::new("bot", "rboot"))
            .with_from(User::new("g1", "ops"))
            .with_sender(User::new("u1", "alice"))
            .with_mate("thread", "t-42")
            .with_location(31.23, 121.47)
            .as_broadcast();

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["channel"], "slack");
        assert_eq!(value["to"]["name"], "rboot");
        assert_eq!(value["from"]["id"], "g1");
        assert_eq!(value["sender"]["name"], "alice");
        assert_eq!(value["content"], "ping");
        assert_eq!(value["broadcast"], true);
        assert_eq!(value["mate"]["thread"], "t-42");
        assert_eq!(value["location"], json!({ "lat": 31.23, "long": 121.47 }));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let message = Message::from_json(r#"{"content":"hello","sender":{"id":"u1"}}"#).unwrap();
        assert_eq!(message.content, "hello");
        assert_eq!(message.sender, User::new("u1", ""));
        assert!(message.channel.is_empty());
        assert!(!message.broadcast);
        assert!(message.mate.is_empty());
        assert!(message.location.is_none());
    }

    #[test]
    fn test_json_round_trip_keeps_mate_values() {
        let message = Message::new("x")
            .with_mate("count", 3)
            .with_mate("tags", json!(["a", "b"]));
        let parsed = Message::from_json(&message.to_json().unwrap()).unwrap();
        assert_eq!(parsed, message);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(Message::from_json("not json").is_err());
        assert!(Message::from_json(r#"{"broadcast":"yes"}"#).is_err());
    }
}
