pub mod config;
pub mod errors;
pub mod models;
pub mod physics;
pub mod verify;
