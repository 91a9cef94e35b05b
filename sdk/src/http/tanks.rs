use crate::client::FuelTankClient;
use crate::error::ClientError;
use crate::http::client::HttpClient;
use crate::models::fuel_tank::FuelTank;
use crate::tanks::create_fuel_tank::CreateFuelTank;
use crate::tanks::update_fuel_tank::UpdateFuelTank;
use async_trait::async_trait;
use uuid::Uuid;

const PATH: &str = "/api/v1/tanks";

#[async_trait]
impl FuelTankClient for HttpClient {
    async fn get_fuel_tanks(&self) -> Result<Vec<FuelTank>, ClientError> {
        let response = self.get(PATH).await?;
        Ok(response.json().await?)
    }

    async fn get_fuel_tank(&self, tank_id: Uuid) -> Result<FuelTank, ClientError> {
        let response = self.get(&format!("{PATH}/{tank_id}")).await?;
        Ok(response.json().await?)
    }

    async fn create_fuel_tank(&self, command: &CreateFuelTank) -> Result<(), ClientError> {
        self.post(PATH, command).await?;
        Ok(())
    }

    async fn update_fuel_tank(
        &self,
        tank_id: Uuid,
        command: &UpdateFuelTank,
    ) -> Result<(), ClientError> {
        self.put(&format!("{PATH}/{tank_id}"), command).await?;
        Ok(())
    }

    async fn delete_fuel_tank(&self, tank_id: Uuid) -> Result<(), ClientError> {
        self.delete(&format!("{PATH}/{tank_id}")).await?;
        Ok(())
    }
}
