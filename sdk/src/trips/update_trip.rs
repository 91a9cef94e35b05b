use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `UpdateTrip` command replaces a trip's mutable fields, including the
/// departure and arrival timestamps set when the driver starts and stops
/// the trip.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UpdateTrip {
    pub vehicle_id: Uuid,
    pub rider_id: Option<Uuid>,
    pub start: String,
    pub destination: String,
    pub price: f32,
    pub departure: Option<DateTime<Utc>>,
    pub arrival: Option<DateTime<Utc>>,
}
