use crate::client::TripClient;
use crate::error::ClientError;
use crate::http::client::HttpClient;
use crate::models::rating::Rating;
use crate::models::trip::Trip;
use crate::ratings::create_rating::CreateRating;
use crate::trips::create_trip::CreateTrip;
use crate::trips::update_trip::UpdateTrip;
use async_trait::async_trait;
use uuid::Uuid;

const PATH: &str = "/api/v1/trips";

#[async_trait]
impl TripClient for HttpClient {
    async fn get_trips(&self) -> Result<Vec<Trip>, ClientError> {
        let response = self.get(PATH).await?;
        Ok(response.json().await?)
    }

    async fn get_trip(&self, trip_id: Uuid) -> Result<Trip, ClientError> {
        let response = self.get(&format!("{PATH}/{trip_id}")).await?;
        Ok(response.json().await?)
    }

    async fn create_trip(&self, command: &CreateTrip) -> Result<(), ClientError> {
        self.post(PATH, command).await?;
        Ok(())
    }

    async fn update_trip(&self, trip_id: Uuid, command: &UpdateTrip) -> Result<(), ClientError> {
        self.put(&format!("{PATH}/{trip_id}"), command).await?;
        Ok(())
    }

    async fn delete_trip(&self, trip_id: Uuid) -> Result<(), ClientError> {
        self.delete(&format!("{PATH}/{trip_id}")).await?;
        Ok(())
    }

    async fn get_trip_ratings(&self, trip_id: Uuid) -> Result<Vec<Rating>, ClientError> {
        let response = self.get(&format!("{PATH}/{trip_id}/ratings")).await?;
        Ok(response.json().await?)
    }

    async fn create_trip_rating(
        &self,
        trip_id: Uuid,
        command: &CreateRating,
    ) -> Result<(), ClientError> {
        self.post(&format!("{PATH}/{trip_id}/ratings"), command)
            .await?;
        Ok(())
    }
}
