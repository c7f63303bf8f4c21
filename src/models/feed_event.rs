use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A notification received from the live feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEvent {
    pub transaction_id: Uuid,
    pub received_at: DateTime<Utc>,
    /// Whether the transaction was flagged as suspicious
    pub flagged: bool,
}

impl FeedEvent {
    /// Create an event stamped with the current time.
    pub fn new(flagged: bool) -> Self {
        Self {
            transaction_id: Uuid::new_v4(),
            received_at: Utc::now(),
            flagged,
        }
    }
}
