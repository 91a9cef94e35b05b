use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// `CreateFuelTank` command mounts a new fuel tank on a truck.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateFuelTank {
    /// The truck the tank is mounted on.
    pub truck_id: Uuid,
    pub name: String,
    /// Tank length in meters.
    pub length: f32,
    /// Tank width in meters.
    pub width: f32,
}

impl Display for CreateFuelTank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
