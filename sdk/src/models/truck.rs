use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `Truck` represents a truck in the rental fleet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Truck {
    pub id: Uuid,
    pub manufacturer: String,
    pub model: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
