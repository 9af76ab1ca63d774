//! The ingestion cycle: reconcile locations, fetch weather, store it, sleep, repeat.

use std::collections::HashSet;

use tracing::{debug, error, info, warn};

use crate::{
    config::{CollectorConfig, Config, FailurePolicy},
    country::CountryResolver,
    error::{ApiError, CycleError, CycleFailure},
    feed::{FileFeed, LocationFeed},
    model::{FeedEntry, Location, NewLocation, Observation},
    provider::{GeoQuery, WeatherApi, api_from_config, openweather::observation_from_response},
    store::{PgConnector, Storage, StorageConnector},
    validate::{WEATHER_REQUIRED_KEYS, check_response},
};

/// Where a cycle is; a failed pass reports the phase it aborted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Connecting,
    ReconcilingLocations,
    CoolingDown,
    FetchingWeather,
    Sleeping,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::Connecting => "connecting to the database",
            Phase::ReconcilingLocations => "reconciling locations",
            Phase::CoolingDown => "cooling down",
            Phase::FetchingWeather => "fetching weather",
            Phase::Sleeping => "sleeping",
        })
    }
}

/// What a completed pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub new_locations: usize,
    /// Feed entries the geocoder had no match for; retried next cycle.
    pub unresolved_locations: usize,
    /// Feed entries whose name is already registered under another country.
    pub conflicting_locations: usize,
    pub location_insert_failed: bool,
    pub observations: usize,
    pub weather_failures: usize,
    pub missing_coordinates: usize,
    pub observation_insert_failed: bool,
}

/// Application context for the collector: everything a cycle talks to.
pub struct Collector {
    settings: CollectorConfig,
    resolver: CountryResolver,
    feed: Box<dyn LocationFeed>,
    api: Box<dyn WeatherApi>,
    connector: Box<dyn StorageConnector>,
}

impl Collector {
    pub fn new(
        settings: CollectorConfig,
        feed: Box<dyn LocationFeed>,
        api: Box<dyn WeatherApi>,
        connector: Box<dyn StorageConnector>,
    ) -> Self {
        Self {
            resolver: CountryResolver::new(settings.country_language),
            settings,
            feed,
            api,
            connector,
        }
    }

    /// Wires the file feed, OpenWeather client and PostgreSQL connector from `config`.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api = api_from_config(&config.api)?;
        let feed = FileFeed::new(&config.collector.cities_file);
        let connector = PgConnector::new(config.database.connect_options());

        Ok(Self::new(config.collector.clone(), Box::new(feed), api, Box::new(connector)))
    }

    /// Runs cycles forever, sleeping the retry period after each one.
    pub async fn run_forever(&self) {
        info!(
            cooldown_secs = self.settings.cooldown_secs,
            retry_period_secs = self.settings.retry_period_secs,
            "Starting collector"
        );
        loop {
            self.run_and_log_cycle().await;

            debug!(phase = %Phase::Sleeping, "Waiting for next cycle");
            tokio::time::sleep(self.settings.retry_period()).await;
        }
    }

    /// Runs one cycle and logs its outcome; never fails.
    pub async fn run_and_log_cycle(&self) -> Option<CycleReport> {
        match self.run_cycle().await {
            Ok(report) => {
                info!(?report, "Ingestion cycle finished");
                Some(report)
            }
            Err(err) => {
                let phase = err.phase;
                let err = anyhow::Error::new(err);
                error!(%phase, "{err:#}");
                None
            }
        }
    }

    /// One full pass. The connection is closed whatever the outcome.
    pub async fn run_cycle(&self) -> Result<CycleReport, CycleError> {
        debug!(phase = %Phase::Connecting, "Starting ingestion cycle");
        let mut storage = self
            .connector
            .connect()
            .await
            .map_err(|err| CycleError::new(Phase::Connecting, err))?;

        let outcome = self.run_pass(storage.as_mut()).await;

        if let Err(err) = storage.close().await {
            warn!(error = %err, "Failed to close database connection");
        }
        outcome
    }

    async fn run_pass(&self, storage: &mut dyn Storage) -> Result<CycleReport, CycleError> {
        storage.ensure_schema().await.map_err(|err| CycleError::new(Phase::Connecting, err))?;

        let mut report = CycleReport::default();

        self.reconcile_locations(storage, &mut report)
            .await
            .map_err(|err| CycleError::new(Phase::ReconcilingLocations, err))?;

        debug!(phase = %Phase::CoolingDown, secs = self.settings.cooldown_secs, "Cooling down");
        tokio::time::sleep(self.settings.cooldown()).await;

        self.fetch_weather(storage, &mut report)
            .await
            .map_err(|err| CycleError::new(Phase::FetchingWeather, err))?;

        Ok(report)
    }

    /// Registers feed entries the store doesn't know yet.
    ///
    /// Geocoding transport and status errors abort the pass. A storage failure
    /// on insert is logged and leaves the registry unchanged; the same entries
    /// come up again next cycle.
    async fn reconcile_locations(
        &self,
        storage: &mut dyn Storage,
        report: &mut CycleReport,
    ) -> Result<(), CycleFailure> {
        debug!(phase = %Phase::ReconcilingLocations, "Reconciling locations");
        let feed = self.feed.read()?;
        let known = storage.known_locations().await?;

        let pending = self.pending_entries(feed, &known, report);
        if pending.is_empty() {
            info!("No new locations found");
            return Ok(());
        }

        let mut batch = Vec::with_capacity(pending.len());
        for entry in pending {
            let country_code = self.resolver.alpha2(&entry.country);
            let query = GeoQuery::new(entry.name.clone(), country_code);

            match self.api.geocode(&query).await {
                Ok(coordinates) => batch.push(NewLocation {
                    name: entry.name,
                    country: entry.country,
                    country_code: country_code.map(str::to_owned),
                    coordinates,
                }),
                Err(ApiError::NoGeocodingMatch { query }) => {
                    warn!(location = %entry, query = %query, "No coordinates found, skipping location");
                    report.unresolved_locations += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }

        if batch.is_empty() {
            return Ok(());
        }

        match storage.insert_locations(&batch).await {
            Ok(written) => {
                info!(count = written, "New locations added");
                report.new_locations = batch.len();
            }
            Err(err) => {
                error!(error = %err, count = batch.len(), "Failed to store new locations");
                report.location_insert_failed = true;
            }
        }
        Ok(())
    }

    /// Feed entries not yet registered, in feed order, one per name.
    ///
    /// Repeated lines collapse silently; a different country under a taken
    /// name is a conflict.
    fn pending_entries(
        &self,
        feed: Vec<FeedEntry>,
        known: &HashSet<FeedEntry>,
        report: &mut CycleReport,
    ) -> Vec<FeedEntry> {
        let mut taken_names: HashSet<String> = known.iter().map(|k| k.name.clone()).collect();
        let mut pending: Vec<FeedEntry> = Vec::new();

        for entry in feed {
            if known.contains(&entry) || pending.contains(&entry) {
                continue;
            }
            if !taken_names.insert(entry.name.clone()) {
                warn!(location = %entry, "Location name already taken, skipping");
                report.conflicting_locations += 1;
                continue;
            }
            pending.push(entry);
        }
        pending
    }

    /// Fetches weather for every registered location and stores the batch once.
    async fn fetch_weather(
        &self,
        storage: &mut dyn Storage,
        report: &mut CycleReport,
    ) -> Result<(), CycleFailure> {
        debug!(phase = %Phase::FetchingWeather, "Fetching weather");
        let locations = storage.locations().await?;

        let mut batch = Vec::with_capacity(locations.len());
        for location in &locations {
            if location.coordinates().is_none() {
                warn!(%location, "Location has no coordinates, skipping");
                report.missing_coordinates += 1;
                continue;
            }

            match self.observe(location).await {
                Ok(observation) => batch.push(observation),
                Err(err) => match self.settings.weather_failure_policy {
                    FailurePolicy::SkipLocation => {
                        warn!(%location, error = %err, "Failed to fetch weather, skipping location");
                        report.weather_failures += 1;
                    }
                    FailurePolicy::AbortPass => {
                        return Err(err.into());
                    }
                },
            }
        }

        if batch.is_empty() {
            info!("No observations to store");
            return Ok(());
        }

        match storage.insert_observations(&batch).await {
            Ok(written) => {
                info!(count = written, "Weather observations added");
                report.observations = batch.len();
            }
            Err(err) => {
                error!(error = %err, count = batch.len(), "Failed to store weather observations");
                report.observation_insert_failed = true;
            }
        }
        Ok(())
    }

    /// Fetch, validate and convert the current weather for one location.
    pub(crate) async fn observe(&self, location: &Location) -> Result<Observation, ApiError> {
        let coordinates = location
            .coordinates()
            .ok_or_else(|| ApiError::NoGeocodingMatch { query: location.name.clone() })?;

        let response = self.api.current_weather(coordinates).await?;
        check_response(&response, WEATHER_REQUIRED_KEYS)?;
        Ok(observation_from_response(location.id, &response)?)
    }
}
