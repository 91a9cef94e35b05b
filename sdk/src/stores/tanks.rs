use crate::client::FuelTankClient;
use crate::error::ClientError;
use crate::models::fuel_tank::FuelTank;
use crate::stores::alert::AlertChannel;
use crate::stores::store::ResourceStore;
use crate::tanks::create_fuel_tank::CreateFuelTank;
use crate::tanks::update_fuel_tank::UpdateFuelTank;
use std::sync::Arc;
use uuid::Uuid;

/// `FuelTankStore` caches the fuel tanks mounted across the fleet.
pub struct FuelTankStore {
    gateway: Arc<dyn FuelTankClient + Send + Sync>,
    alerts: AlertChannel,
    tanks: ResourceStore<Vec<FuelTank>>,
}

impl FuelTankStore {
    pub fn new(gateway: Arc<dyn FuelTankClient + Send + Sync>, alerts: AlertChannel) -> Self {
        Self {
            gateway,
            alerts,
            tanks: ResourceStore::new(),
        }
    }

    pub fn loading(&self) -> bool {
        self.tanks.loading()
    }

    pub async fn fuel_tanks(&self) -> Vec<FuelTank> {
        self.tanks.current().await
    }

    /// The cached tank with the given id, if present.
    pub async fn fuel_tank_by_id(&self, tank_id: Uuid) -> Option<FuelTank> {
        self.tanks
            .current()
            .await
            .into_iter()
            .find(|tank| tank.id == tank_id)
    }

    /// All cached tanks mounted on the given truck.
    pub async fn fuel_tanks_for_truck(&self, truck_id: Uuid) -> Vec<FuelTank> {
        self.tanks
            .current()
            .await
            .into_iter()
            .filter(|tank| tank.truck_id == truck_id)
            .collect()
    }

    pub async fn list(&self) -> Result<Vec<FuelTank>, ClientError> {
        self.tanks
            .refresh(&self.alerts, self.gateway.get_fuel_tanks())
            .await
    }

    /// Fetches a single tank; the cached list is left as is.
    pub async fn get(&self, tank_id: Uuid) -> Result<FuelTank, ClientError> {
        self.tanks
            .perform(&self.alerts, self.gateway.get_fuel_tank(tank_id))
            .await
    }

    pub async fn create(&self, command: &CreateFuelTank) -> Result<(), ClientError> {
        self.tanks
            .perform(&self.alerts, self.gateway.create_fuel_tank(command))
            .await
    }

    pub async fn update(
        &self,
        tank_id: Uuid,
        command: &UpdateFuelTank,
    ) -> Result<(), ClientError> {
        self.tanks
            .perform(&self.alerts, self.gateway.update_fuel_tank(tank_id, command))
            .await
    }

    pub async fn delete(&self, tank_id: Uuid) -> Result<(), ClientError> {
        self.tanks
            .perform(&self.alerts, self.gateway.delete_fuel_tank(tank_id))
            .await
    }
}
