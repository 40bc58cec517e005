use std::sync::Arc;

use skycast_identity::{IdentityClient, ProfileStore};
use skycast_weather::WeatherClient;

/// Shared state for HTTP handlers
///
/// Read-only handles to the upstream clients; reqwest clients are
/// internally thread-safe, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<IdentityClient>,
    pub profiles: Arc<ProfileStore>,
    pub weather: Arc<WeatherClient>,
}

impl AppState {
    pub fn new(identity: IdentityClient, profiles: ProfileStore, weather: WeatherClient) -> Self {
        Self {
            identity: Arc::new(identity),
            profiles: Arc::new(profiles),
            weather: Arc::new(weather),
        }
    }
}
