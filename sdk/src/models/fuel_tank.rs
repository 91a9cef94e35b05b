use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `FuelTank` represents a fuel tank mounted on a truck.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FuelTank {
    pub id: Uuid,
    pub truck_id: Uuid,
    pub name: String,
    pub length: f32,
    pub width: f32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
