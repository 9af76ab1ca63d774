//! Persistence of the location registry and the observation log.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::{
    error::StorageError,
    model::{FeedEntry, Location, NewLocation, Observation},
};

#[cfg(test)]
pub(crate) mod memory;
pub mod postgres;

pub use postgres::PgConnector;

/// One open connection to the store, used for a single cycle.
#[async_trait]
pub trait Storage: Send {
    /// Creates the `city` and `weather` tables if they don't exist yet.
    async fn ensure_schema(&mut self) -> Result<(), StorageError>;

    /// `(name, country)` of every registered location.
    async fn known_locations(&mut self) -> Result<HashSet<FeedEntry>, StorageError>;

    /// Inserts the batch atomically; returns the number of rows written.
    async fn insert_locations(&mut self, locations: &[NewLocation]) -> Result<u64, StorageError>;

    /// Every registered location, in insertion order.
    async fn locations(&mut self) -> Result<Vec<Location>, StorageError>;

    /// Inserts the batch atomically; returns the number of rows written.
    async fn insert_observations(
        &mut self,
        observations: &[Observation],
    ) -> Result<u64, StorageError>;

    async fn close(self: Box<Self>) -> Result<(), StorageError>;
}

/// Opens a fresh [`Storage`] per cycle.
#[async_trait]
pub trait StorageConnector: Send + Sync {
    async fn connect(&self) -> Result<Box<dyn Storage>, StorageError>;
}
