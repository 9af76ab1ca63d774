use std::collections::HashSet;

use async_trait::async_trait;
use sqlx::{
    Connection, PgConnection, Postgres, QueryBuilder,
    postgres::PgConnectOptions,
};
use tracing::{debug, info};

use crate::{
    error::StorageError,
    model::{FeedEntry, Location, NewLocation, Observation},
};

use super::{Storage, StorageConnector};

const CREATE_CITY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS city (
    id SERIAL PRIMARY KEY,
    name VARCHAR(20) NOT NULL UNIQUE,
    country VARCHAR(40) NOT NULL,
    country_code VARCHAR(2),
    latitude NUMERIC(6, 3),
    longitude NUMERIC(6, 3)
)
"#;

const CREATE_WEATHER_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS weather (
    id SERIAL PRIMARY KEY,
    city_id INTEGER NOT NULL REFERENCES city (id) ON DELETE CASCADE,
    utc_timestamp BIGINT NOT NULL,
    timezone INTEGER NOT NULL,
    utc_time TIME NOT NULL,
    local_time TIME NOT NULL,
    temperature NUMERIC(5, 2) NOT NULL,
    weather VARCHAR(30) NOT NULL,
    humidity SMALLINT NOT NULL,
    wind_speed NUMERIC(5, 2) NOT NULL,
    wind_deg SMALLINT NOT NULL
)
"#;

const CREATE_WEATHER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS weather_city_id_utc_timestamp ON weather (city_id, utc_timestamp)";

/// Connects to PostgreSQL with a single, unpooled connection.
#[derive(Debug, Clone)]
pub struct PgConnector {
    options: PgConnectOptions,
}

impl PgConnector {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }
}

#[async_trait]
impl StorageConnector for PgConnector {
    async fn connect(&self) -> Result<Box<dyn Storage>, StorageError> {
        let conn = PgConnection::connect_with(&self.options).await?;
        debug!("Opened database connection");
        Ok(Box::new(PgStorage { conn }))
    }
}

pub struct PgStorage {
    conn: PgConnection,
}

#[async_trait]
impl Storage for PgStorage {
    async fn ensure_schema(&mut self) -> Result<(), StorageError> {
        for statement in [CREATE_CITY_TABLE, CREATE_WEATHER_TABLE, CREATE_WEATHER_INDEX] {
            sqlx::query(statement).execute(&mut self.conn).await?;
        }
        Ok(())
    }

    async fn known_locations(&mut self) -> Result<HashSet<FeedEntry>, StorageError> {
        let rows: Vec<(String, String)> = sqlx::query_as("SELECT name, country FROM city")
            .fetch_all(&mut self.conn)
            .await?;

        Ok(rows.into_iter().map(|(name, country)| FeedEntry { name, country }).collect())
    }

    async fn insert_locations(&mut self, locations: &[NewLocation]) -> Result<u64, StorageError> {
        if locations.is_empty() {
            return Ok(0);
        }

        let mut tx = self.conn.begin().await?;
        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "INSERT INTO city (name, country, country_code, latitude, longitude) ",
        );
        builder.push_values(locations, |mut row, loc| {
            row.push_bind(&loc.name)
                .push_bind(&loc.country)
                .push_bind(loc.country_code.as_deref())
                .push_bind(loc.coordinates.lat)
                .push_bind(loc.coordinates.lon);
        });
        let written = builder.build().execute(&mut *tx).await?.rows_affected();
        tx.commit().await?;

        info!(rows = written, "Inserted locations");
        Ok(written)
    }

    async fn locations(&mut self) -> Result<Vec<Location>, StorageError> {
        let locations = sqlx::query_as::<_, Location>(
            "SELECT id, name, country, country_code, latitude, longitude FROM city ORDER BY id",
        )
        .fetch_all(&mut self.conn)
        .await?;
        Ok(locations)
    }

    async fn insert_observations(
        &mut self,
        observations: &[Observation],
    ) -> Result<u64, StorageError> {
        if observations.is_empty() {
            return Ok(0);
        }

        let mut tx = self.conn.begin().await?;
        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "INSERT INTO weather (city_id, utc_timestamp, timezone, utc_time, local_time, \
             temperature, weather, humidity, wind_speed, wind_deg) ",
        );
        builder.push_values(observations, |mut row, obs| {
            row.push_bind(obs.city_id)
                .push_bind(obs.utc_timestamp)
                .push_bind(obs.timezone)
                .push_bind(obs.utc_time)
                .push_bind(obs.local_time)
                .push_bind(obs.temperature)
                .push_bind(&obs.description)
                .push_bind(obs.humidity)
                .push_bind(obs.wind_speed)
                .push_bind(obs.wind_deg);
        });
        let written = builder.build().execute(&mut *tx).await?.rows_affected();
        tx.commit().await?;

        info!(rows = written, "Inserted observations");
        Ok(written)
    }

    async fn close(self: Box<Self>) -> Result<(), StorageError> {
        self.conn.close().await?;
        debug!("Closed database connection");
        Ok(())
    }
}
