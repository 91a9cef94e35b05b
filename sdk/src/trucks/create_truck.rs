use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `CreateTruck` command adds a truck to the rental fleet.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateTruck {
    pub manufacturer: String,
    pub model: String,
}

impl Display for CreateTruck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.manufacturer, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_be_serialized_as_json() {
        let command = CreateTruck {
            manufacturer: "MAN".to_string(),
            model: "TGX".to_string(),
        };

        let payload = serde_json::to_value(&command).unwrap();
        assert_eq!(payload, json!({"manufacturer": "MAN", "model": "TGX"}));
    }
}
