pub mod auth;
pub mod client;
pub mod clients;
pub mod error;
pub mod http;
pub mod models;
pub mod ratings;
pub mod session;
pub mod stores;
pub mod tanks;
pub mod trips;
pub mod trucks;
pub mod vehicles;
