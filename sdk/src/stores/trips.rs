use crate::client::TripClient;
use crate::error::ClientError;
use crate::models::rating::{Rating, RatingSummary};
use crate::models::trip::Trip;
use crate::ratings::create_rating::CreateRating;
use crate::stores::alert::AlertChannel;
use crate::stores::store::ResourceStore;
use crate::trips::create_trip::CreateTrip;
use crate::trips::update_trip::UpdateTrip;
use std::sync::Arc;
use uuid::Uuid;

/// `TripStore` caches the list of offered trips, the most recently
/// fetched single trip, and the rating summary of a trip.
pub struct TripStore {
    gateway: Arc<dyn TripClient + Send + Sync>,
    alerts: AlertChannel,
    trips: ResourceStore<Vec<Trip>>,
    trip: ResourceStore<Option<Trip>>,
    ratings: ResourceStore<RatingSummary>,
}

impl TripStore {
    pub fn new(gateway: Arc<dyn TripClient + Send + Sync>, alerts: AlertChannel) -> Self {
        Self {
            gateway,
            alerts,
            trips: ResourceStore::new(),
            trip: ResourceStore::new(),
            ratings: ResourceStore::new(),
        }
    }

    pub fn loading(&self) -> bool {
        self.trips.loading() || self.trip.loading() || self.ratings.loading()
    }

    pub async fn trips(&self) -> Vec<Trip> {
        self.trips.current().await
    }

    pub async fn trip(&self) -> Option<Trip> {
        self.trip.current().await
    }

    pub async fn ratings(&self) -> RatingSummary {
        self.ratings.current().await
    }

    pub async fn list(&self) -> Result<Vec<Trip>, ClientError> {
        self.trips
            .refresh(&self.alerts, self.gateway.get_trips())
            .await
    }

    pub async fn get(&self, trip_id: Uuid) -> Result<Trip, ClientError> {
        self.trip
            .apply(&self.alerts, self.gateway.get_trip(trip_id), |slot, trip| {
                *slot = Some(trip.clone())
            })
            .await
    }

    pub async fn create(&self, command: &CreateTrip) -> Result<(), ClientError> {
        self.trips
            .perform(&self.alerts, self.gateway.create_trip(command))
            .await
    }

    pub async fn update(&self, trip_id: Uuid, command: &UpdateTrip) -> Result<(), ClientError> {
        self.trips
            .perform(&self.alerts, self.gateway.update_trip(trip_id, command))
            .await
    }

    pub async fn delete(&self, trip_id: Uuid) -> Result<(), ClientError> {
        self.trips
            .perform(&self.alerts, self.gateway.delete_trip(trip_id))
            .await
    }

    pub async fn list_ratings(&self, trip_id: Uuid) -> Result<Vec<Rating>, ClientError> {
        self.ratings
            .apply(
                &self.alerts,
                self.gateway.get_trip_ratings(trip_id),
                |summary, ratings| summary.set(ratings.clone()),
            )
            .await
    }

    /// Submits a rating for the trip and folds it into the cached summary
    /// without re-fetching.
    pub async fn rate(&self, trip_id: Uuid, value: f32) -> Result<(), ClientError> {
        let command = CreateRating {
            comment: "".to_string(),
            value,
        };
        self.ratings
            .apply(
                &self.alerts,
                self.gateway.create_trip_rating(trip_id, &command),
                |summary, _| summary.record(value),
            )
            .await
    }
}
