//! Weather upstream integration for Skycast.
//!
//! Fetches current conditions by city name from an
//! OpenWeatherMap-compatible API and passes the upstream JSON through
//! unchanged.

pub mod client;
pub mod error;
pub mod types;

pub use client::WeatherClient;
pub use error::WeatherError;
pub use types::Units;
