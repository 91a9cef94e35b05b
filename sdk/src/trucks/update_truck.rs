use serde::{Deserialize, Serialize};

/// `UpdateTruck` command replaces a truck's mutable fields.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct UpdateTruck {
    pub manufacturer: String,
    pub model: String,
}
