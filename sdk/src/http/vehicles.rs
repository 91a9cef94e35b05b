use crate::client::VehicleClient;
use crate::error::ClientError;
use crate::http::client::HttpClient;
use crate::models::vehicle::Vehicle;
use crate::vehicles::create_vehicle::CreateVehicle;
use crate::vehicles::update_vehicle::UpdateVehicle;
use async_trait::async_trait;
use uuid::Uuid;

const PATH: &str = "/api/v1/vehicles";

#[async_trait]
impl VehicleClient for HttpClient {
    async fn get_vehicles(&self) -> Result<Vec<Vehicle>, ClientError> {
        let response = self.get(PATH).await?;
        Ok(response.json().await?)
    }

    async fn get_vehicle(&self, vehicle_id: Uuid) -> Result<Vehicle, ClientError> {
        let response = self.get(&format!("{PATH}/{vehicle_id}")).await?;
        Ok(response.json().await?)
    }

    async fn create_vehicle(&self, command: &CreateVehicle) -> Result<(), ClientError> {
        self.post(PATH, command).await?;
        Ok(())
    }

    async fn update_vehicle(
        &self,
        vehicle_id: Uuid,
        command: &UpdateVehicle,
    ) -> Result<(), ClientError> {
        self.put(&format!("{PATH}/{vehicle_id}"), command).await?;
        Ok(())
    }

    async fn delete_vehicle(&self, vehicle_id: Uuid) -> Result<(), ClientError> {
        self.delete(&format!("{PATH}/{vehicle_id}")).await?;
        Ok(())
    }
}
