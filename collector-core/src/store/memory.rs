//! In-memory store for orchestrator tests.

use std::{
    collections::HashSet,
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;

use crate::{
    error::StorageError,
    model::{FeedEntry, Location, NewLocation, Observation},
};

use super::{Storage, StorageConnector};

#[derive(Debug, Default)]
pub(crate) struct MemoryState {
    pub locations: Vec<Location>,
    pub observations: Vec<Observation>,
    pub schema_created: bool,
    pub opened: usize,
    pub closed: usize,
    pub fail_connect: bool,
    pub fail_location_insert: bool,
    pub fail_observation_insert: bool,
}

/// Shared handle; every connection sees the same state.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap()
    }

    pub fn seed_location(&self, name: &str, country: &str, lat: f64, lon: f64) -> i32 {
        use rust_decimal::prelude::FromPrimitive;
        let mut state = self.state();
        let id = state.locations.len() as i32 + 1;
        state.locations.push(Location {
            id,
            name: name.into(),
            country: country.into(),
            country_code: None,
            latitude: rust_decimal::Decimal::from_f64(lat),
            longitude: rust_decimal::Decimal::from_f64(lon),
        });
        id
    }
}

fn injected() -> StorageError {
    StorageError(sqlx::Error::Protocol("injected failure".into()))
}

#[async_trait]
impl StorageConnector for MemoryStore {
    async fn connect(&self) -> Result<Box<dyn Storage>, StorageError> {
        let mut state = self.state();
        if state.fail_connect {
            return Err(injected());
        }
        state.opened += 1;
        Ok(Box::new(self.clone()))
    }
}

#[async_trait]
impl Storage for MemoryStore {
    async fn ensure_schema(&mut self) -> Result<(), StorageError> {
        self.state().schema_created = true;
        Ok(())
    }

    async fn known_locations(&mut self) -> Result<HashSet<FeedEntry>, StorageError> {
        Ok(self.state().locations.iter().map(Location::feed_key).collect())
    }

    async fn insert_locations(&mut self, locations: &[NewLocation]) -> Result<u64, StorageError> {
        let mut state = self.state();
        if state.fail_location_insert {
            return Err(injected());
        }
        // UNIQUE(name): the whole batch is rejected.
        if locations.iter().any(|new| state.locations.iter().any(|l| l.name == new.name)) {
            return Err(StorageError(sqlx::Error::Protocol("duplicate city name".into())));
        }
        for new in locations {
            let id = state.locations.len() as i32 + 1;
            state.locations.push(Location {
                id,
                name: new.name.clone(),
                country: new.country.clone(),
                country_code: new.country_code.clone(),
                latitude: Some(new.coordinates.lat),
                longitude: Some(new.coordinates.lon),
            });
        }
        Ok(locations.len() as u64)
    }

    async fn locations(&mut self) -> Result<Vec<Location>, StorageError> {
        Ok(self.state().locations.clone())
    }

    async fn insert_observations(
        &mut self,
        observations: &[Observation],
    ) -> Result<u64, StorageError> {
        let mut state = self.state();
        if state.fail_observation_insert {
            return Err(injected());
        }
        state.observations.extend_from_slice(observations);
        Ok(observations.len() as u64)
    }

    async fn close(self: Box<Self>) -> Result<(), StorageError> {
        self.state().closed += 1;
        Ok(())
    }
}
