use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One buffered chat message. Never mutated after ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub timestamp: DateTime<Utc>,
    pub user_id: i64,
    pub display_name: String,
    pub text: String,
}

/// Text event handed over by the messaging layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEvent {
    pub chat_id: i64,
    pub user_id: i64,
    pub display_name: String,
    pub text: String,
    pub received_at: DateTime<Utc>,
}

impl From<InboundEvent> for MessageRecord {
    fn from(event: InboundEvent) -> Self {
        Self {
            timestamp: event.received_at,
            user_id: event.user_id,
            display_name: event.display_name,
            text: event.text,
        }
    }
}
