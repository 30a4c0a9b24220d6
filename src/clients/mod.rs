//! Outbound HTTP access to the location service.

pub mod iss_client;

use async_trait::async_trait;

use crate::domain::IssLocation;
use crate::errors::ClientError;

pub use iss_client::{IssClient, DEFAULT_ISS_URL};

/// Anything that can report the station's current position.
///
/// The tracker depends on this seam rather than on the concrete HTTP client,
/// so tests can substitute a stub provider.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Resolves exactly once, with either a location or an error.
    async fn fetch_location(&self) -> Result<IssLocation, ClientError>;
}
