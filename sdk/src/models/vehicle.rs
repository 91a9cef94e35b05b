use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `Vehicle` represents a vehicle registered by a user, including the
/// dimensions of its loading area.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: Uuid,
    pub user_id: Uuid,
    pub brand: String,
    pub model: String,
    pub passengers: u8,
    pub loading_area_length: f32,
    pub loading_area_width: f32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
