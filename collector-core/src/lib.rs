//! Core library for the city weather collector.
//!
//! This crate defines:
//! - Configuration (file + environment)
//! - The locations feed and country code lookup
//! - The OpenWeather geocoding / current weather client and response checks
//! - PostgreSQL persistence of locations and observations
//! - The ingestion cycle that ties them together
//!
//! It is used by `collector-cli`, which owns logging and the process lifecycle.

pub mod collector;
pub mod config;
pub mod country;
pub mod error;
pub mod feed;
pub mod model;
pub mod provider;
pub mod store;
pub mod validate;

pub use collector::{Collector, CycleReport, Phase};
pub use config::{Config, FailurePolicy};
pub use country::{CountryResolver, Language};
pub use error::{ApiError, CycleError, FeedError, ShapeError, StorageError};
pub use model::{Coordinates, FeedEntry, Location, NewLocation, Observation};
pub use provider::{GeoQuery, WeatherApi};
