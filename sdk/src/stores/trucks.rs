use crate::client::TruckClient;
use crate::error::ClientError;
use crate::models::truck::Truck;
use crate::stores::alert::AlertChannel;
use crate::stores::store::ResourceStore;
use crate::trucks::create_truck::CreateTruck;
use crate::trucks::update_truck::UpdateTruck;
use std::sync::Arc;
use uuid::Uuid;

/// `TruckStore` caches the rental fleet.
pub struct TruckStore {
    gateway: Arc<dyn TruckClient + Send + Sync>,
    alerts: AlertChannel,
    trucks: ResourceStore<Vec<Truck>>,
}

impl TruckStore {
    pub fn new(gateway: Arc<dyn TruckClient + Send + Sync>, alerts: AlertChannel) -> Self {
        Self {
            gateway,
            alerts,
            trucks: ResourceStore::new(),
        }
    }

    pub fn loading(&self) -> bool {
        self.trucks.loading()
    }

    pub async fn trucks(&self) -> Vec<Truck> {
        self.trucks.current().await
    }

    pub async fn list(&self) -> Result<Vec<Truck>, ClientError> {
        self.trucks
            .refresh(&self.alerts, self.gateway.get_trucks())
            .await
    }

    /// Fetches a single truck; the cached list is left as is.
    pub async fn get(&self, truck_id: Uuid) -> Result<Truck, ClientError> {
        self.trucks
            .perform(&self.alerts, self.gateway.get_truck(truck_id))
            .await
    }

    pub async fn create(&self, command: &CreateTruck) -> Result<(), ClientError> {
        self.trucks
            .perform(&self.alerts, self.gateway.create_truck(command))
            .await
    }

    pub async fn update(&self, truck_id: Uuid, command: &UpdateTruck) -> Result<(), ClientError> {
        self.trucks
            .perform(&self.alerts, self.gateway.update_truck(truck_id, command))
            .await
    }

    pub async fn delete(&self, truck_id: Uuid) -> Result<(), ClientError> {
        self.trucks
            .perform(&self.alerts, self.gateway.delete_truck(truck_id))
            .await
    }
}
