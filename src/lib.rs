pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{AccessToken, ProfileClient};
pub use config::ClientConfig;
pub use error::ApiError;
