use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    config::ApiConfig,
    error::{ApiError, ShapeError},
    model::{Coordinates, MAX_DESCRIPTION_LEN, MEASUREMENT_SCALE, Observation},
};

use super::{GeoQuery, WeatherApi};

/// At most this many geocoding candidates are requested.
const GEOCODING_LIMIT: &str = "1";

#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    http: Client,
    geocoding_url: String,
    weather_url: String,
    language: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: String, config: &ApiConfig) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(config.request_timeout()).build()?;
        Ok(Self {
            api_key,
            http,
            geocoding_url: config.geocoding_url.clone(),
            weather_url: config.weather_url.clone(),
            language: config.language.clone(),
        })
    }

    async fn get_json(
        &self,
        endpoint: &'static str,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Value, ApiError> {
        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;

        let status = res.status();
        let body = res.text().await.map_err(|source| ApiError::Transport { endpoint, source })?;
        debug!(endpoint, %status, "Received API response");

        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status, body: truncate_body(&body) });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode { endpoint, source })
    }
}

#[async_trait]
impl WeatherApi for OpenWeatherClient {
    async fn geocode(&self, query: &GeoQuery) -> Result<Coordinates, ApiError> {
        debug!(q = %query.as_param(), "Requesting coordinates");
        let response = self
            .get_json(
                "OpenWeather geocoding",
                &self.geocoding_url,
                &[
                    ("q", query.as_param()),
                    ("limit", GEOCODING_LIMIT.to_string()),
                    ("appid", self.api_key.clone()),
                ],
            )
            .await?;

        coordinates_from_geocoding(&response, query)
    }

    async fn current_weather(&self, coordinates: Coordinates) -> Result<Value, ApiError> {
        debug!(lat = %coordinates.lat, lon = %coordinates.lon, "Requesting current weather");
        self.get_json(
            "OpenWeather current weather",
            &self.weather_url,
            &[
                ("lat", coordinates.lat.to_string()),
                ("lon", coordinates.lon.to_string()),
                ("units", "metric".to_string()),
                ("lang", self.language.clone()),
                ("appid", self.api_key.clone()),
            ],
        )
        .await
    }
}

#[derive(Debug, Deserialize)]
struct OwGeoCandidate {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: i16,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    deg: i16,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    dt: i64,
    timezone: i32,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

/// First candidate of a geocoding response; an empty list is a resolution miss.
pub fn coordinates_from_geocoding(
    response: &Value,
    query: &GeoQuery,
) -> Result<Coordinates, ApiError> {
    let candidates =
        Vec::<OwGeoCandidate>::deserialize(response).map_err(ShapeError::Field)?;

    let first = candidates
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::NoGeocodingMatch { query: query.as_param() })?;

    Ok(Coordinates::new(decimal("lat", first.lat)?, decimal("lon", first.lon)?))
}

/// Builds an observation from a current-weather response that already passed
/// the top-level key check.
pub fn observation_from_response(city_id: i32, response: &Value) -> Result<Observation, ShapeError> {
    let parsed = OwCurrentResponse::deserialize(response).map_err(ShapeError::Field)?;

    let description = parsed
        .weather
        .first()
        .map(|w| w.description.chars().take(MAX_DESCRIPTION_LEN).collect::<String>())
        .ok_or_else(|| ShapeError::MissingKey("weather[0].description".to_string()))?;

    let utc = unix_to_utc("dt", parsed.dt)?;
    let local = parsed
        .dt
        .checked_add(i64::from(parsed.timezone))
        .ok_or_else(|| out_of_range("timezone", parsed.timezone))
        .and_then(|ts| unix_to_utc("timezone", ts))?;

    Ok(Observation {
        city_id,
        utc_timestamp: parsed.dt,
        timezone: parsed.timezone,
        utc_time: utc.time(),
        local_time: local.time(),
        temperature: decimal("main.temp", parsed.main.temp)?.round_dp(MEASUREMENT_SCALE),
        description,
        humidity: parsed.main.humidity,
        wind_speed: decimal("wind.speed", parsed.wind.speed)?.round_dp(MEASUREMENT_SCALE),
        wind_deg: parsed.wind.deg,
    })
}

fn decimal(field: &'static str, value: f64) -> Result<Decimal, ShapeError> {
    Decimal::from_f64(value).ok_or_else(|| out_of_range(field, value))
}

fn unix_to_utc(field: &'static str, ts: i64) -> Result<DateTime<Utc>, ShapeError> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| out_of_range(field, ts))
}

fn out_of_range(field: &'static str, value: impl ToString) -> ShapeError {
    ShapeError::OutOfRange { field, value: value.to_string() }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
        task::JoinHandle,
    };

    fn moscow_response(dt: i64, timezone: i32) -> Value {
        json!({
            "coord": { "lon": 37.62, "lat": 55.75 },
            "weather": [{ "id": 804, "main": "Clouds", "description": "пасмурно" }],
            "main": { "temp": -3.456, "feels_like": -8.1, "humidity": 86 },
            "wind": { "speed": 4.999, "deg": 230 },
            "dt": dt,
            "timezone": timezone,
            "name": "Moscow"
        })
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn builds_observation_from_current_weather() {
        // 2023-11-14 22:13:20 UTC
        let obs = observation_from_response(7, &moscow_response(1_700_000_000, 10_800)).unwrap();

        assert_eq!(obs.city_id, 7);
        assert_eq!(obs.utc_timestamp, 1_700_000_000);
        assert_eq!(obs.timezone, 10_800);
        assert_eq!(obs.utc_time, NaiveTime::from_hms_opt(22, 13, 20).unwrap());
        assert_eq!(obs.temperature, dec!(-3.46));
        assert_eq!(obs.description, "пасмурно");
        assert_eq!(obs.humidity, 86);
        assert_eq!(obs.wind_speed, dec!(5.00));
        assert_eq!(obs.wind_deg, 230);
    }

    #[test]
    fn local_time_wraps_past_midnight() {
        // 23:30 UTC, UTC+3 -> 02:30 local
        let dt = 1_700_004_600;
        let obs = observation_from_response(1, &moscow_response(dt, 3 * 3600)).unwrap();
        assert_eq!(obs.utc_time, time(23, 30));
        assert_eq!(obs.local_time, time(2, 30));
    }

    #[test]
    fn local_time_wraps_before_midnight_for_negative_offsets() {
        // 01:00 UTC, UTC-5 -> 20:00 local
        let dt = 1_699_923_600;
        let obs = observation_from_response(1, &moscow_response(dt, -5 * 3600)).unwrap();
        assert_eq!(obs.utc_time, time(1, 0));
        assert_eq!(obs.local_time, time(20, 0));
    }

    #[test]
    fn local_time_is_utc_offset_by_timezone() {
        for offset in [-43_200, -16_200, 0, 19_800, 20_700, 50_400] {
            let dt = 1_700_000_000;
            let obs = observation_from_response(1, &moscow_response(dt, offset)).unwrap();
            let expected = DateTime::from_timestamp(dt + i64::from(offset), 0).unwrap().time();
            assert_eq!(obs.local_time, expected, "offset {offset}");
        }
    }

    #[test]
    fn empty_weather_list_is_a_shape_error() {
        let mut response = moscow_response(1_700_000_000, 0);
        response["weather"] = json!([]);
        let err = observation_from_response(1, &response).unwrap_err();
        assert!(matches!(err, ShapeError::MissingKey(key) if key == "weather[0].description"));
    }

    #[test]
    fn nested_type_mismatch_is_a_shape_error() {
        let mut response = moscow_response(1_700_000_000, 0);
        response["main"]["temp"] = json!("cold");
        assert!(matches!(
            observation_from_response(1, &response),
            Err(ShapeError::Field(_))
        ));
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let mut response = moscow_response(1_700_000_000, 0);
        response["weather"][0]["description"] =
            json!("небольшой снег с дождём и сильным порывистым ветром");
        let obs = observation_from_response(1, &response).unwrap();
        assert_eq!(obs.description.chars().count(), MAX_DESCRIPTION_LEN);
    }

    #[test]
    fn geocoding_uses_first_candidate() {
        let response = json!([
            { "name": "Moscow", "lat": 55.7504461, "lon": 37.6174943, "country": "RU" },
            { "name": "Moscow", "lat": 46.7323875, "lon": -117.0001651, "country": "US" }
        ]);
        let coords =
            coordinates_from_geocoding(&response, &GeoQuery::new("Moscow", Some("RU"))).unwrap();
        assert_eq!(coords, Coordinates { lat: dec!(55.750), lon: dec!(37.617) });
    }

    #[test]
    fn empty_geocoding_result_is_a_resolution_miss() {
        let err = coordinates_from_geocoding(&json!([]), &GeoQuery::new("Atlantis", None))
            .unwrap_err();
        assert!(matches!(err, ApiError::NoGeocodingMatch { query } if query == "Atlantis"));
    }

    #[test]
    fn geocoding_object_instead_of_list_is_a_shape_error() {
        let err = coordinates_from_geocoding(
            &json!({ "cod": 401, "message": "Invalid API key" }),
            &GeoQuery::new("Moscow", Some("RU")),
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Shape(ShapeError::Field(_))));
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "ошибка ".repeat(100);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 203);
        assert_eq!(truncate_body("short"), "short");
    }

    /// Answers a single HTTP request on a loopback port with a canned response.
    /// The handle resolves to the request line that was received.
    async fn serve_once(status: &str, body: impl Into<String>) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let status = status.to_string();
        let body = body.into();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&request).lines().next().unwrap_or_default().to_string()
        });

        (base, handle)
    }

    fn client(base: &str) -> OpenWeatherClient {
        let config = ApiConfig {
            api_key: Some("KEY".into()),
            geocoding_url: format!("{base}/geo/1.0/direct"),
            weather_url: format!("{base}/data/2.5/weather"),
            request_timeout_secs: 5,
            ..ApiConfig::default()
        };
        let mut client = OpenWeatherClient::new("KEY".into(), &config).unwrap();
        // Loopback requests must not be routed through a proxy from the environment.
        client.http = Client::builder().no_proxy().timeout(config.request_timeout()).build().unwrap();
        client
    }

    #[tokio::test]
    async fn geocode_sends_query_and_parses_first_candidate() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"name":"Moscow","lat":55.7504461,"lon":37.6174943,"country":"RU"}]"#,
        )
        .await;

        let coords = client(&base).geocode(&GeoQuery::new("Moscow", Some("RU"))).await.unwrap();
        assert_eq!(coords, Coordinates { lat: dec!(55.750), lon: dec!(37.617) });

        let request_line = server.await.unwrap();
        assert!(
            request_line.starts_with("GET /geo/1.0/direct?q=Moscow%2CRU&limit=1&appid=KEY "),
            "{request_line}"
        );
    }

    #[tokio::test]
    async fn current_weather_sends_metric_units_and_language() {
        let body = moscow_response(1_700_000_000, 10_800).to_string();
        let (base, server) = serve_once("200 OK", body).await;

        let response = client(&base)
            .current_weather(Coordinates::new(dec!(55.75), dec!(37.62)))
            .await
            .unwrap();
        assert_eq!(response["name"], "Moscow");

        let request_line = server.await.unwrap();
        assert!(
            request_line.starts_with(
                "GET /data/2.5/weather?lat=55.75&lon=37.62&units=metric&lang=ru&appid=KEY "
            ),
            "{request_line}"
        );
    }

    #[tokio::test]
    async fn non_success_status_keeps_a_truncated_body() {
        let body = format!(r#"{{"cod":401,"message":"Invalid API key{}"}}"#, " ".repeat(300));
        let (base, server) = serve_once("401 Unauthorized", body).await;

        let err = client(&base).geocode(&GeoQuery::new("Moscow", None)).await.unwrap_err();
        match err {
            ApiError::Status { endpoint, status, body } => {
                assert_eq!(endpoint, "OpenWeather geocoding");
                assert_eq!(status, reqwest::StatusCode::UNAUTHORIZED);
                assert!(body.starts_with(r#"{"cod":401,"message":"Invalid API key"#));
                assert!(body.ends_with("..."));
                assert_eq!(body.chars().count(), 203);
            }
            other => panic!("expected a status error, got {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn invalid_json_body_is_a_decode_error() {
        let (base, server) = serve_once("200 OK", "not json").await;

        let err = client(&base)
            .current_weather(Coordinates::new(dec!(1), dec!(2)))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode { endpoint: "OpenWeather current weather", .. }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = client(&base).geocode(&GeoQuery::new("Moscow", None)).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport { endpoint: "OpenWeather geocoding", .. }));
    }
}
