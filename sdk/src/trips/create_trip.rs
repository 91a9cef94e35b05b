use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// `CreateTrip` command offers a new trip, driven with the given vehicle
/// from `start` to `destination` at the given price.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateTrip {
    /// The vehicle the trip is offered with.
    pub vehicle_id: Uuid,
    pub start: String,
    pub destination: String,
    pub price: f32,
}

impl Display for CreateTrip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_be_serialized_as_json() {
        let vehicle_id = Uuid::new_v4();
        let command = CreateTrip {
            vehicle_id,
            start: "Gießen".to_string(),
            destination: "Frankfurt".to_string(),
            price: 25.0,
        };

        let payload = serde_json::to_value(&command).unwrap();
        assert_eq!(
            payload,
            json!({
                "vehicle_id": vehicle_id,
                "start": "Gießen",
                "destination": "Frankfurt",
                "price": 25.0,
            })
        );
    }
}
