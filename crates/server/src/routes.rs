//! API route handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use forecast_facade::{
    export, ForecastError, ForecastSeries, ForecastSummary, Indicator, IndicatorCatalog,
    IndicatorKey,
};
use sentiment_facade::{analyze_text, SentimentError, SentimentResult};
use serde::{Deserialize, Serialize};
use session::{Page, SessionHandle};
use tracing::{error, warn};

use crate::AppState;

/// Header carrying the session id in requests and responses
pub const SESSION_HEADER: HeaderName = HeaderName::from_static("x-session-id");

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error mapped to an HTTP status and a JSON body
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<ForecastError> for ApiError {
    fn from(e: ForecastError) -> Self {
        let status = match &e {
            ForecastError::UnknownIndicator(_) | ForecastError::InvalidHorizon { .. } => {
                StatusCode::BAD_REQUEST
            }
            ForecastError::ArtifactNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("Forecast failed: {}", e);
        } else {
            warn!("Forecast rejected: {}", e);
        }
        Self::new(status, e.to_string())
    }
}

impl From<SentimentError> for ApiError {
    fn from(e: SentimentError) -> Self {
        let status = match e {
            SentimentError::EmptyInput => StatusCode::BAD_REQUEST,
            SentimentError::Lexicon(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, e.to_string())
    }
}

fn session_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(&SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
}

/// Session named by the request header, or a new one
fn session_for(state: &AppState, headers: &HeaderMap) -> (String, SessionHandle) {
    match session_id(headers) {
        Some(id) => (id.to_string(), state.sessions.get_or_create(id)),
        None => state.sessions.create(),
    }
}

#[derive(Debug, Serialize)]
pub struct IndicatorsResponse {
    pub default: IndicatorKey,
    pub indicators: Vec<Indicator>,
}

pub async fn indicators() -> Json<IndicatorsResponse> {
    Json(IndicatorsResponse {
        default: IndicatorCatalog::default_key(),
        indicators: IndicatorCatalog::all().collect(),
    })
}

#[derive(Debug, Deserialize)]
pub struct ForecastRequest {
    /// Defaults to the session's current selection
    pub indicator: Option<String>,
    pub months: usize,
}

#[derive(Debug, Serialize)]
pub struct ForecastResponse {
    pub label: &'static str,
    pub summary: ForecastSummary,
    pub series: ForecastSeries,
}

pub async fn forecast(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ForecastRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (id, handle) = session_for(&state, &headers);

    let key = match req.indicator {
        Some(key) => IndicatorCatalog::parse(&key)?,
        None => handle.lock().get_selection(),
    };
    {
        let mut session = handle.lock();
        session.set_selection(key);
        session.set_page(Page::Predict);
    }

    let engine = Arc::clone(&state.engine);
    let months = req.months;
    let outcome = tokio::task::spawn_blocking(move || engine.forecast(key, months))
        .await
        .map_err(|e| ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let series = {
        let mut session = handle.lock();
        let series = session.record_forecast(outcome)?.clone();
        session.set_page(Page::ResultsAnalysis);
        series
    };

    Ok((
        [(SESSION_HEADER, id)],
        Json(ForecastResponse {
            label: IndicatorCatalog::label(key),
            summary: series.summary(),
            series,
        }),
    ))
}

pub async fn forecast_csv(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let (id, handle) = session_for(&state, &headers);
    let series = handle.lock().get_forecast().cloned().ok_or_else(|| {
        ApiError::new(
            StatusCode::NOT_FOUND,
            "No forecast for the selected indicator in this session",
        )
    })?;

    let body = export::to_csv_string(&series)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export::export_filename(series.indicator())
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
            (SESSION_HEADER, id),
        ],
        body,
    ))
}

#[derive(Debug, Deserialize)]
pub struct SentimentRequest {
    pub text: String,
}

pub async fn sentiment(Json(req): Json<SentimentRequest>) -> Result<Json<SentimentResult>, ApiError> {
    Ok(Json(analyze_text(&req.text)?))
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub page: Page,
    pub selected: IndicatorKey,
    pub forecast: Option<ForecastSeries>,
}

pub async fn session(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let (id, handle) = session_for(&state, &headers);
    let body = {
        let session = handle.lock();
        SessionResponse {
            session_id: id.clone(),
            page: session.page(),
            selected: session.get_selection(),
            forecast: session.get_forecast().cloned(),
        }
    };
    ([(SESSION_HEADER, id)], Json(body))
}

/// End the session named by the request header, discarding its state
pub async fn end_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let id = session_id(&headers).ok_or_else(|| {
        ApiError::new(StatusCode::BAD_REQUEST, "Missing x-session-id header")
    })?;

    if state.sessions.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::new(
            StatusCode::NOT_FOUND,
            format!("Unknown session: {}", id),
        ))
    }
}
