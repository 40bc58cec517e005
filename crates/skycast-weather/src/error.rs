//! Weather upstream error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Upstream returned status {status}")]
    Upstream { status: u16 },

    #[error("Invalid response from upstream: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
