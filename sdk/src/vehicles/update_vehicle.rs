use serde::{Deserialize, Serialize};

/// `UpdateVehicle` command replaces a vehicle's mutable fields.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UpdateVehicle {
    pub brand: String,
    pub model: String,
    pub passengers: u8,
    pub loading_area_length: f32,
    pub loading_area_width: f32,
}
