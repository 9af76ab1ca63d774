use chrono::NaiveTime;
use rust_decimal::Decimal;

/// Column bounds of the `city` / `weather` tables.
pub const MAX_NAME_LEN: usize = 20;
pub const MAX_COUNTRY_LEN: usize = 40;
pub const MAX_DESCRIPTION_LEN: usize = 30;

pub const COORDINATE_SCALE: u32 = 3;
pub const MEASUREMENT_SCALE: u32 = 2;

/// One `<name>, <country>` line of the locations feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeedEntry {
    pub name: String,
    pub country: String,
}

impl FeedEntry {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self { name: name.into(), country: country.into() }
    }
}

impl std::fmt::Display for FeedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.name, self.country)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinates {
    pub lat: Decimal,
    pub lon: Decimal,
}

impl Coordinates {
    /// Rounds both components to the precision the registry stores.
    pub fn new(lat: Decimal, lon: Decimal) -> Self {
        Self {
            lat: lat.round_dp(COORDINATE_SCALE),
            lon: lon.round_dp(COORDINATE_SCALE),
        }
    }
}

/// A location resolved during reconciliation, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLocation {
    pub name: String,
    pub country: String,
    /// ISO 3166-1 alpha-2; `None` when the country name was not recognised.
    pub country_code: Option<String>,
    pub coordinates: Coordinates,
}

/// A row of the location registry.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub country_code: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
}

impl Location {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates { lat, lon }),
            _ => None,
        }
    }

    pub fn feed_key(&self) -> FeedEntry {
        FeedEntry::new(self.name.clone(), self.country.clone())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.name, self.country)
    }
}

/// One weather snapshot for a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub city_id: i32,
    /// Seconds since the Unix epoch, UTC.
    pub utc_timestamp: i64,
    /// Offset from UTC in seconds.
    pub timezone: i32,
    pub utc_time: NaiveTime,
    pub local_time: NaiveTime,
    pub temperature: Decimal,
    pub description: String,
    pub humidity: i16,
    pub wind_speed: Decimal,
    pub wind_deg: i16,
}
