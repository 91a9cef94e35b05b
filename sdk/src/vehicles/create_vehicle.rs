use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `CreateVehicle` command registers a vehicle for the logged-in user.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateVehicle {
    pub brand: String,
    pub model: String,
    pub passengers: u8,
    /// Loading area length in meters.
    pub loading_area_length: f32,
    /// Loading area width in meters.
    pub loading_area_width: f32,
}

impl Display for CreateVehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.brand, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_be_serialized_as_json() {
        let command = CreateVehicle {
            brand: "Volkswagen".to_string(),
            model: "Crafter".to_string(),
            passengers: 2,
            loading_area_length: 4.3,
            loading_area_width: 1.7,
        };

        let payload = serde_json::to_value(&command).unwrap();
        assert_eq!(
            payload,
            json!({
                "brand": "Volkswagen",
                "model": "Crafter",
                "passengers": 2,
                "loading_area_length": 4.3f32,
                "loading_area_width": 1.7f32,
            })
        );
    }
}
