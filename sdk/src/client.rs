use crate::auth::login_user::LoginUser;
use crate::auth::logout_user::LogoutUser;
use crate::auth::refresh_token::RefreshToken;
use crate::auth::register_user::RegisterUser;
use crate::error::ClientError;
use crate::models::fuel_tank::FuelTank;
use crate::models::rating::Rating;
use crate::models::token::AuthToken;
use crate::models::trip::Trip;
use crate::models::truck::Truck;
use crate::models::user::User;
use crate::models::vehicle::Vehicle;
use crate::ratings::create_rating::CreateRating;
use crate::tanks::create_fuel_tank::CreateFuelTank;
use crate::tanks::update_fuel_tank::UpdateFuelTank;
use crate::trips::create_trip::CreateTrip;
use crate::trips::update_trip::UpdateTrip;
use crate::trucks::create_truck::CreateTruck;
use crate::trucks::update_truck::UpdateTruck;
use crate::vehicles::create_vehicle::CreateVehicle;
use crate::vehicles::update_vehicle::UpdateVehicle;
use async_trait::async_trait;
use uuid::Uuid;

pub trait Client:
    AuthClient
    + UserClient
    + TripClient
    + VehicleClient
    + TruckClient
    + FuelTankClient
    + Sync
    + Send
{
}

/// Client for the authentication resource. It also owns the bearer
/// credential attached to subsequent requests; only the session manager
/// mutates it.
#[async_trait]
pub trait AuthClient {
    async fn login_user(&self, command: &LoginUser) -> Result<AuthToken, ClientError>;
    async fn refresh_token(&self, command: &RefreshToken) -> Result<AuthToken, ClientError>;
    async fn logout_user(&self, command: &LogoutUser) -> Result<(), ClientError>;
    async fn register_user(&self, command: &RegisterUser) -> Result<(), ClientError>;
    /// Attach the bearer credential used for subsequent requests, or clear
    /// it by passing `None`.
    async fn set_access_token(&self, token: Option<String>);
}

#[async_trait]
pub trait UserClient {
    async fn get_user(&self, user_id: Uuid) -> Result<User, ClientError>;
    async fn get_user_ratings(&self, user_id: Uuid) -> Result<Vec<Rating>, ClientError>;
    async fn create_user_rating(
        &self,
        user_id: Uuid,
        command: &CreateRating,
    ) -> Result<(), ClientError>;
    async fn get_user_vehicles(&self, user_id: Uuid) -> Result<Vec<Vehicle>, ClientError>;
    async fn create_user_vehicle(
        &self,
        user_id: Uuid,
        command: &CreateVehicle,
    ) -> Result<(), ClientError>;
    async fn update_user_vehicle(
        &self,
        user_id: Uuid,
        vehicle_id: Uuid,
        command: &UpdateVehicle,
    ) -> Result<(), ClientError>;
    async fn delete_user_vehicle(&self, user_id: Uuid, vehicle_id: Uuid)
        -> Result<(), ClientError>;
    async fn book_trip(&self, user_id: Uuid, trip_id: Uuid) -> Result<(), ClientError>;
    async fn cancel_trip(&self, user_id: Uuid, trip_id: Uuid) -> Result<(), ClientError>;
}

#[async_trait]
pub trait TripClient {
    async fn get_trips(&self) -> Result<Vec<Trip>, ClientError>;
    async fn get_trip(&self, trip_id: Uuid) -> Result<Trip, ClientError>;
    async fn create_trip(&self, command: &CreateTrip) -> Result<(), ClientError>;
    async fn update_trip(&self, trip_id: Uuid, command: &UpdateTrip) -> Result<(), ClientError>;
    async fn delete_trip(&self, trip_id: Uuid) -> Result<(), ClientError>;
    async fn get_trip_ratings(&self, trip_id: Uuid) -> Result<Vec<Rating>, ClientError>;
    async fn create_trip_rating(
        &self,
        trip_id: Uuid,
        command: &CreateRating,
    ) -> Result<(), ClientError>;
}

#[async_trait]
pub trait VehicleClient {
    async fn get_vehicles(&self) -> Result<Vec<Vehicle>, ClientError>;
    async fn get_vehicle(&self, vehicle_id: Uuid) -> Result<Vehicle, ClientError>;
    async fn create_vehicle(&self, command: &CreateVehicle) -> Result<(), ClientError>;
    async fn update_vehicle(
        &self,
        vehicle_id: Uuid,
        command: &UpdateVehicle,
    ) -> Result<(), ClientError>;
    async fn delete_vehicle(&self, vehicle_id: Uuid) -> Result<(), ClientError>;
}

#[async_trait]
pub trait TruckClient {
    async fn get_trucks(&self) -> Result<Vec<Truck>, ClientError>;
    async fn get_truck(&self, truck_id: Uuid) -> Result<Truck, ClientError>;
    async fn create_truck(&self, command: &CreateTruck) -> Result<(), ClientError>;
    async fn update_truck(&self, truck_id: Uuid, command: &UpdateTruck)
        -> Result<(), ClientError>;
    async fn delete_truck(&self, truck_id: Uuid) -> Result<(), ClientError>;
}

#[async_trait]
pub trait FuelTankClient {
    async fn get_fuel_tanks(&self) -> Result<Vec<FuelTank>, ClientError>;
    async fn get_fuel_tank(&self, tank_id: Uuid) -> Result<FuelTank, ClientError>;
    async fn create_fuel_tank(&self, command: &CreateFuelTank) -> Result<(), ClientError>;
    async fn update_fuel_tank(
        &self,
        tank_id: Uuid,
        command: &UpdateFuelTank,
    ) -> Result<(), ClientError>;
    async fn delete_fuel_tank(&self, tank_id: Uuid) -> Result<(), ClientError>;
}
