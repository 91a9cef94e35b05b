use crate::client::VehicleClient;
use crate::error::ClientError;
use crate::models::vehicle::Vehicle;
use crate::stores::alert::AlertChannel;
use crate::stores::store::ResourceStore;
use crate::vehicles::create_vehicle::CreateVehicle;
use crate::vehicles::update_vehicle::UpdateVehicle;
use std::sync::Arc;
use uuid::Uuid;

/// `VehicleStore` caches the list of vehicles.
pub struct VehicleStore {
    gateway: Arc<dyn VehicleClient + Send + Sync>,
    alerts: AlertChannel,
    vehicles: ResourceStore<Vec<Vehicle>>,
}

impl VehicleStore {
    pub fn new(gateway: Arc<dyn VehicleClient + Send + Sync>, alerts: AlertChannel) -> Self {
        Self {
            gateway,
            alerts,
            vehicles: ResourceStore::new(),
        }
    }

    pub fn loading(&self) -> bool {
        self.vehicles.loading()
    }

    pub async fn vehicles(&self) -> Vec<Vehicle> {
        self.vehicles.current().await
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, ClientError> {
        self.vehicles
            .refresh(&self.alerts, self.gateway.get_vehicles())
            .await
    }

    /// Fetches a single vehicle; the cached list is left as is.
    pub async fn get(&self, vehicle_id: Uuid) -> Result<Vehicle, ClientError> {
        self.vehicles
            .perform(&self.alerts, self.gateway.get_vehicle(vehicle_id))
            .await
    }

    pub async fn create(&self, command: &CreateVehicle) -> Result<(), ClientError> {
        self.vehicles
            .perform(&self.alerts, self.gateway.create_vehicle(command))
            .await
    }

    pub async fn update(
        &self,
        vehicle_id: Uuid,
        command: &UpdateVehicle,
    ) -> Result<(), ClientError> {
        self.vehicles
            .perform(&self.alerts, self.gateway.update_vehicle(vehicle_id, command))
            .await
    }

    pub async fn delete(&self, vehicle_id: Uuid) -> Result<(), ClientError> {
        self.vehicles
            .perform(&self.alerts, self.gateway.delete_vehicle(vehicle_id))
            .await
    }
}
