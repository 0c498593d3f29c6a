//! HTTP route handlers.

use std::path::Path;
use std::sync::Arc;

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;

use crate::geocode::GeocodeError;
use crate::locator::display_list;
use crate::opendata::DataOrigin;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/facilities", get(list_facilities))
        .route("/api/geocode", get(geocode))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with search form.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// List facilities for the current location and filters.
async fn list_facilities(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<FacilitiesQuery>,
) -> Result<Response, AppError> {
    let request = query.to_request()?;
    let loaded = state.facilities.current().await;
    let facilities = display_list(&loaded.facilities, &request);

    tracing::debug!(
        total = loaded.facilities.len(),
        shown = facilities.len(),
        urgent = request.urgent,
        "Listed facilities"
    );

    if accepts_html(&headers) {
        let template = FacilityListTemplate {
            facilities: facilities.iter().map(FacilityView::from_facility).collect(),
            urgent: request.urgent,
            from_fallback: loaded.origin == DataOrigin::Fallback,
        };
        let html = template.render().map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

        Ok(Html(html).into_response())
    } else {
        let results: Vec<FacilityResult> = facilities
            .into_iter()
            .map(FacilityResult::from_facility)
            .collect();

        Ok(Json(FacilityListResponse {
            count: results.len(),
            facilities: results,
            urgent: request.urgent,
            origin: loaded.origin,
            loaded_at: loaded.loaded_at,
        })
        .into_response())
    }
}

/// Resolve a place name to coordinates.
async fn geocode(
    State(state): State<AppState>,
    Query(query): Query<GeocodeQuery>,
) -> Result<Response, AppError> {
    let q = query.q.trim();
    if q.is_empty() {
        return Err(AppError::BadRequest {
            message: "Query must not be empty".to_string(),
        });
    }

    match state.geocoder.geocode(q).await? {
        Some(place) => Ok(Json(place).into_response()),
        None => Err(AppError::NotFound {
            message: format!("No location found for: {q}"),
        }),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<Arc<GeocodeError>> for AppError {
    fn from(e: Arc<GeocodeError>) -> Self {
        AppError::Upstream {
            message: format!("Geocoding failed: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            tracing::error!(%status, "{message}");
        } else {
            tracing::warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheConfig, CachedGeocoder, FacilityStore};
    use crate::domain::Facility;
    use crate::locator::urgent_order;
    use crate::geocode::{Geocoder, GeocoderConfig};
    use crate::opendata::{FacilityLoader, FallbackDataset, OpenDataClient, OpenDataConfig};
    use axum::http::HeaderValue;
    use serde_json::Value;
    use std::cmp::Ordering;

    fn state() -> AppState {
        let client = OpenDataClient::new(OpenDataConfig::default()).unwrap();
        let loader = FacilityLoader::new(client, FallbackDataset::bundled().unwrap())
            .fallback_only(true);
        let config = CacheConfig::default();
        let geocoder = Geocoder::new(GeocoderConfig::default()).unwrap();

        AppState::new(
            FacilityStore::new(loader, &config),
            CachedGeocoder::new(geocoder, &config),
        )
    }

    fn query(params: &str) -> Query<FacilitiesQuery> {
        let uri: axum::http::Uri = format!("/api/facilities?{params}").parse().unwrap();
        Query::try_from_uri(&uri).unwrap()
    }

    async fn body_of(response: Response) -> (StatusCode, String) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn list_json(params: &str) -> Value {
        let response = list_facilities(State(state()), HeaderMap::new(), query(params))
            .await
            .unwrap();
        let (status, body) = body_of(response).await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_str(&body).unwrap()
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn lists_fallback_facilities() {
        let json = list_json("").await;

        assert_eq!(json["origin"], "fallback");
        assert_eq!(json["urgent"], false);
        let facilities = json["facilities"].as_array().unwrap();
        assert_eq!(json["count"], facilities.len());
        assert!(!facilities.is_empty());
        assert!(facilities.iter().all(|f| f.get("distance").is_none()));
        assert!(facilities.iter().all(|f| f["directionsUrl"]
            .as_str()
            .unwrap()
            .starts_with("https://www.google.com/maps/dir/")));
    }

    #[tokio::test]
    async fn location_adds_sorted_distances() {
        let json = list_json("lat=40.7580&lng=-73.9855").await;

        let distances: Vec<f64> = json["facilities"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["distance"].as_f64().unwrap())
            .collect();
        assert!(!distances.is_empty());
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    async fn type_filter_applies() {
        let json = list_json("type=park").await;

        let facilities = json["facilities"].as_array().unwrap();
        assert!(!facilities.is_empty());
        assert!(facilities.iter().all(|f| f["type"] == "park"));
        assert!(facilities.iter().all(|f| f["typeLabel"] == "Park"));
    }

    #[tokio::test]
    async fn urgent_returns_every_open_facility_ranked() {
        let state = state();
        let response = list_facilities(
            State(state.clone()),
            HeaderMap::new(),
            query("lat=40.7580&lng=-73.9855&urgent=true"),
        )
        .await
        .unwrap();
        let (status, body) = body_of(response).await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["urgent"], true);

        let facilities: Vec<Facility> =
            serde_json::from_value(json["facilities"].clone()).unwrap();
        let open_count = state
            .facilities
            .current()
            .await
            .facilities
            .iter()
            .filter(|f| f.is_open)
            .count();

        assert!(!facilities.is_empty());
        assert_eq!(facilities.len(), open_count);
        assert_eq!(json["count"], open_count);
        assert!(facilities.iter().all(|f| f.is_open));
        assert!(
            facilities
                .windows(2)
                .all(|w| urgent_order(&w[0], &w[1]) != Ordering::Greater)
        );
    }

    #[tokio::test]
    async fn html_fragment_when_requested() {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html"));

        let response = list_facilities(State(state()), headers, query("type=apt"))
            .await
            .unwrap();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let (status, body) = body_of(response).await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.is_some_and(|ct| ct.starts_with("text/html")));
        assert!(body.trim_start().starts_with('<'));
        assert!(body.contains("APT"));
        assert!(!body.contains("\"typeLabel\""));
        assert!(!body.contains("\"count\""));
    }

    #[tokio::test]
    async fn bad_query_is_rejected() {
        let err = list_facilities(State(state()), HeaderMap::new(), query("urgent=true"))
            .await
            .unwrap_err();
        let (status, body) = body_of(err.into_response()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("urgent mode needs a location"));
    }

    #[tokio::test]
    async fn blank_geocode_query_is_rejected() {
        let err = geocode(
            State(state()),
            Query(GeocodeQuery {
                q: "   ".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[test]
    fn accepts_html_checks_header() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_html(&headers));
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml"),
        );
        assert!(accepts_html(&headers));
    }

    #[test]
    fn upstream_errors_are_bad_gateway() {
        let err = AppError::from(Arc::new(GeocodeError::InvalidUserAgent));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
