//! Outgoing bot messages.
//!
//! Actions never talk to the transport directly; they hand replies to a
//! [`Dispatcher`] and the dialogue runtime delivers them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single reply produced by an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum Reply {
    /// Literal text to send as-is.
    Text(String),
    /// Template key the runtime renders (e.g. `utter_glass_recycling`).
    Template(String),
}

/// A reply stamped for delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotMessage {
    pub id: Uuid,
    pub reply: Reply,
    pub timestamp: DateTime<Utc>,
}

impl BotMessage {
    pub fn new(reply: Reply) -> Self {
        Self {
            id: Uuid::new_v4(),
            reply,
            timestamp: Utc::now(),
        }
    }
}

/// Sink for replies emitted by an action.
pub trait Dispatcher {
    fn utter(&mut self, reply: Reply);
}

/// Dispatcher that buffers messages in emission order.
#[derive(Debug, Default)]
pub struct CollectingDispatcher {
    messages: Vec<BotMessage>,
}

impl CollectingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[BotMessage] {
        &self.messages
    }

    /// Take all buffered messages, leaving the dispatcher empty.
    pub fn drain(&mut self) -> Vec<BotMessage> {
        std::mem::take(&mut self.messages)
    }
}

impl Dispatcher for CollectingDispatcher {
    fn utter(&mut self, reply: Reply) {
        self.messages.push(BotMessage::new(reply));
    }
}
