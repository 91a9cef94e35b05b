use serde::{Deserialize, Serialize};

/// `CreateRating` command leaves a rating for a user or a trip.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CreateRating {
    pub comment: String,
    pub value: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_be_serialized_as_json() {
        let command = CreateRating {
            comment: "".to_string(),
            value: 4.0,
        };

        let payload = serde_json::to_value(&command).unwrap();
        assert_eq!(payload, json!({"comment": "", "value": 4.0}));
    }
}
