use crate::client::UserClient;
use crate::error::ClientError;
use crate::models::rating::{Rating, RatingSummary};
use crate::models::user::User;
use crate::models::vehicle::Vehicle;
use crate::ratings::create_rating::CreateRating;
use crate::stores::alert::AlertChannel;
use crate::stores::store::ResourceStore;
use crate::vehicles::create_vehicle::CreateVehicle;
use crate::vehicles::update_vehicle::UpdateVehicle;
use std::sync::Arc;
use uuid::Uuid;

/// `UserStore` caches the most recently fetched user profile together
/// with the user's vehicles and rating summary, and books or cancels
/// trips on the user's behalf.
pub struct UserStore {
    gateway: Arc<dyn UserClient + Send + Sync>,
    alerts: AlertChannel,
    user: ResourceStore<Option<User>>,
    vehicles: ResourceStore<Vec<Vehicle>>,
    ratings: ResourceStore<RatingSummary>,
}

impl UserStore {
    pub fn new(gateway: Arc<dyn UserClient + Send + Sync>, alerts: AlertChannel) -> Self {
        Self {
            gateway,
            alerts,
            user: ResourceStore::new(),
            vehicles: ResourceStore::new(),
            ratings: ResourceStore::new(),
        }
    }

    pub fn loading(&self) -> bool {
        self.user.loading() || self.vehicles.loading() || self.ratings.loading()
    }

    pub async fn user(&self) -> Option<User> {
        self.user.current().await
    }

    pub async fn vehicles(&self) -> Vec<Vehicle> {
        self.vehicles.current().await
    }

    pub async fn ratings(&self) -> RatingSummary {
        self.ratings.current().await
    }

    pub async fn get(&self, user_id: Uuid) -> Result<User, ClientError> {
        self.user
            .apply(&self.alerts, self.gateway.get_user(user_id), |slot, user| {
                *slot = Some(user.clone())
            })
            .await
    }

    pub async fn list_ratings(&self, user_id: Uuid) -> Result<Vec<Rating>, ClientError> {
        self.ratings
            .apply(
                &self.alerts,
                self.gateway.get_user_ratings(user_id),
                |summary, ratings| summary.set(ratings.clone()),
            )
            .await
    }

    /// Submits a rating for the user and folds it into the cached summary
    /// without re-fetching.
    pub async fn rate(&self, user_id: Uuid, value: f32) -> Result<(), ClientError> {
        let command = CreateRating {
            comment: "".to_string(),
            value,
        };
        self.ratings
            .apply(
                &self.alerts,
                self.gateway.create_user_rating(user_id, &command),
                |summary, _| summary.record(value),
            )
            .await
    }

    pub async fn list_vehicles(&self, user_id: Uuid) -> Result<Vec<Vehicle>, ClientError> {
        self.vehicles
            .refresh(&self.alerts, self.gateway.get_user_vehicles(user_id))
            .await
    }

    pub async fn create_vehicle(
        &self,
        user_id: Uuid,
        command: &CreateVehicle,
    ) -> Result<(), ClientError> {
        self.vehicles
            .perform(&self.alerts, self.gateway.create_user_vehicle(user_id, command))
            .await
    }

    pub async fn update_vehicle(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
        command: &UpdateVehicle,
    ) -> Result<(), ClientError> {
        self.vehicles
            .perform(
                &self.alerts,
                self.gateway.update_user_vehicle(user_id, vehicle_id, command),
            )
            .await
    }

    pub async fn delete_vehicle(&self, user_id: Uuid, vehicle_id: Uuid) -> Result<(), ClientError> {
        self.vehicles
            .perform(
                &self.alerts,
                self.gateway.delete_user_vehicle(user_id, vehicle_id),
            )
            .await
    }

    pub async fn book_trip(&self, user_id: Uuid, trip_id: Uuid) -> Result<(), ClientError> {
        self.user
            .perform(&self.alerts, self.gateway.book_trip(user_id, trip_id))
            .await
    }

    pub async fn cancel_trip(&self, user_id: Uuid, trip_id: Uuid) -> Result<(), ClientError> {
        self.user
            .perform(&self.alerts, self.gateway.cancel_trip(user_id, trip_id))
            .await
    }
}
