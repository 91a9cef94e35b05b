use crate::client::TruckClient;
use crate::error::ClientError;
use crate::http::client::HttpClient;
use crate::models::truck::Truck;
use crate::trucks::create_truck::CreateTruck;
use crate::trucks::update_truck::UpdateTruck;
use async_trait::async_trait;
use uuid::Uuid;

const PATH: &str = "/api/v1/trucks";

#[async_trait]
impl TruckClient for HttpClient {
    async fn get_trucks(&self) -> Result<Vec<Truck>, ClientError> {
        let response = self.get(PATH).await?;
        Ok(response.json().await?)
    }

    async fn get_truck(&self, truck_id: Uuid) -> Result<Truck, ClientError> {
        let response = self.get(&format!("{PATH}/{truck_id}")).await?;
        Ok(response.json().await?)
    }

    async fn create_truck(&self, command: &CreateTruck) -> Result<(), ClientError> {
        self.post(PATH, command).await?;
        Ok(())
    }

    async fn update_truck(
        &self,
        truck_id: Uuid,
        command: &UpdateTruck,
    ) -> Result<(), ClientError> {
        self.put(&format!("{PATH}/{truck_id}"), command).await?;
        Ok(())
    }

    async fn delete_truck(&self, truck_id: Uuid) -> Result<(), ClientError> {
        self.delete(&format!("{PATH}/{truck_id}")).await?;
        Ok(())
    }
}
