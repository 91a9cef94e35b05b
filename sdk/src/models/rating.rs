use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `Rating` represents a rating left for a user or a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    pub id: Uuid,
    pub user_id: Uuid,
    pub author_id: Uuid,
    pub comment: String,
    pub value: f32,
    pub created_at: DateTime<Utc>,
}

/// Aggregated view over a set of ratings: the fetched records plus a
/// count and running mean maintained client-side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingSummary {
    pub ratings: Vec<Rating>,
    pub count: usize,
    pub average: f32,
    values: Vec<f32>,
}

impl RatingSummary {
    /// Replaces the summary wholesale with a freshly fetched set. The
    /// average is only recomputed when the set is non-empty.
    pub fn set(&mut self, ratings: Vec<Rating>) {
        self.values = ratings.iter().map(|rating| rating.value).collect();
        self.count = ratings.len();
        if !self.values.is_empty() {
            self.average = self.values.iter().sum::<f32>() / self.values.len() as f32;
        }
        self.ratings = ratings;
    }

    /// Folds a just-submitted rating into the aggregate without
    /// re-fetching. The average is only recomputed when at least one prior
    /// rating exists.
    pub fn record(&mut self, value: f32) {
        self.count += 1;
        if !self.values.is_empty() {
            self.values.push(value);
            self.average = self.values.iter().sum::<f32>() / self.values.len() as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(value: f32) -> Rating {
        Rating {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            comment: "".to_string(),
            value,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn should_compute_count_and_average_from_fetched_ratings() {
        let mut summary = RatingSummary::default();
        summary.set(vec![rating(2.0), rating(4.0)]);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.average, 3.0);
    }

    #[test]
    fn should_fold_a_submitted_rating_into_the_average() {
        let mut summary = RatingSummary::default();
        summary.set(vec![rating(2.0), rating(4.0)]);
        summary.record(6.0);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.average, 4.0);
    }

    #[test]
    fn should_not_divide_by_zero_when_no_prior_ratings_exist() {
        let mut summary = RatingSummary::default();
        summary.record(5.0);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.average, 0.0);
    }
}
