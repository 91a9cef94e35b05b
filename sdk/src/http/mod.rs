pub mod auth;
pub mod client;
pub mod config;
pub mod tanks;
pub mod trips;
pub mod trucks;
pub mod users;
pub mod vehicles;
