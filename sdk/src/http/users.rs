use crate::client::UserClient;
use crate::error::ClientError;
use crate::http::client::HttpClient;
use crate::models::rating::Rating;
use crate::models::user::User;
use crate::models::vehicle::Vehicle;
use crate::ratings::create_rating::CreateRating;
use crate::vehicles::create_vehicle::CreateVehicle;
use crate::vehicles::update_vehicle::UpdateVehicle;
use async_trait::async_trait;
use uuid::Uuid;

const PATH: &str = "/api/v1/users";

#[async_trait]
impl UserClient for HttpClient {
    async fn get_user(&self, user_id: Uuid) -> Result<User, ClientError> {
        let response = self.get(&format!("{PATH}/{user_id}")).await?;
        Ok(response.json().await?)
    }

    async fn get_user_ratings(&self, user_id: Uuid) -> Result<Vec<Rating>, ClientError> {
        let response = self.get(&format!("{PATH}/{user_id}/ratings")).await?;
        Ok(response.json().await?)
    }

    async fn create_user_rating(
        &self,
        user_id: Uuid,
        command: &CreateRating,
    ) -> Result<(), ClientError> {
        self.post(&format!("{PATH}/{user_id}/ratings"), command)
            .await?;
        Ok(())
    }

    async fn get_user_vehicles(&self, user_id: Uuid) -> Result<Vec<Vehicle>, ClientError> {
        let response = self.get(&format!("{PATH}/{user_id}/vehicles")).await?;
        Ok(response.json().await?)
    }

    async fn create_user_vehicle(
        &self,
        user_id: Uuid,
        command: &CreateVehicle,
    ) -> Result<(), ClientError> {
        self.post(&format!("{PATH}/{user_id}/vehicles"), command)
            .await?;
        Ok(())
    }

    async fn update_user_vehicle(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
        command: &UpdateVehicle,
    ) -> Result<(), ClientError> {
        self.put(&format!("{PATH}/{user_id}/vehicles/{vehicle_id}"), command)
            .await?;
        Ok(())
    }

    async fn delete_user_vehicle(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
    ) -> Result<(), ClientError> {
        self.delete(&format!("{PATH}/{user_id}/vehicles/{vehicle_id}"))
            .await?;
        Ok(())
    }

    async fn book_trip(&self, user_id: Uuid, trip_id: Uuid) -> Result<(), ClientError> {
        self.post(&format!("{PATH}/{user_id}/trips/{trip_id}"), &())
            .await?;
        Ok(())
    }

    async fn cancel_trip(&self, user_id: Uuid, trip_id: Uuid) -> Result<(), ClientError> {
        self.put(&format!("{PATH}/{user_id}/trips/{trip_id}"), &())
            .await?;
        Ok(())
    }
}
