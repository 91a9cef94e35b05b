use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `UpdateFuelTank` command replaces a fuel tank's mutable fields.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UpdateFuelTank {
    pub truck_id: Uuid,
    pub name: String,
    pub length: f32,
    pub width: f32,
}
