use crate::models::trip_status::TripStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `Trip` represents a cargo trip offered by a driver. `rider_id` is set
/// once a rider has booked the trip; `departure` and `arrival` are set
/// when the driver starts and stops it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vehicle_id: Uuid,
    pub rider_id: Option<Uuid>,
    pub start: String,
    pub destination: String,
    pub price: f32,
    pub departure: Option<DateTime<Utc>>,
    pub arrival: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    /// Current lifecycle status, derived from the rider assignment and the
    /// departure and arrival timestamps.
    pub fn status(&self) -> TripStatus {
        TripStatus::derive(self.rider_id.is_some(), self.departure, self.arrival)
    }
}
