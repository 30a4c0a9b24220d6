pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

pub use clients::{IssClient, LocationProvider, DEFAULT_ISS_URL};
pub use config::Config;
pub use domain::{Coordinates, IssLocation};
pub use errors::ClientError;
pub use services::Tracker;
