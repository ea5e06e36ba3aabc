//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint. Aggregations are CPU-bound and
//! run on the blocking pool against the shared record store.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use log::info;
use uuid::Uuid;

use super::dto::{
    AirlinesQuery, ChangeResponse, HealthResponse, MetricQuery, RangeQuery, SessionInfoResponse,
    SessionResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{
    ControlsData, DatasetProfile, DelayHistogramData, DestinationMapData, DistanceHeatmapData,
    FilterChange, OriginSummaryData, SummaryData,
};
use crate::services::{self, dispatch};
use crate::store::RecordStore;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Run `f` on the blocking pool with the shared store.
async fn with_store<T, F>(state: &AppState, f: F) -> Result<T, AppError>
where
    F: FnOnce(&RecordStore) -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || f(&store))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
}

fn parse_session_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid session id: {}", raw)))
}

fn session_not_found(id: &Uuid) -> AppError {
    AppError::NotFound(format!("Session {} not found", id))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        dataset: state.store.info().clone(),
        active_sessions: state.sessions.len(),
    }))
}

// =============================================================================
// Dashboard metadata
// =============================================================================

/// GET /v1/controls
///
/// Options and defaults for the metric, airline and distance controls.
pub async fn get_controls(State(state): State<AppState>) -> HandlerResult<ControlsData> {
    let settings = state.settings.clone();
    let data = with_store(&state, move |store| {
        Ok(services::compute_controls(store.records(), &settings))
    })
    .await?;
    Ok(Json(data))
}

/// GET /v1/dataset/profile
pub async fn get_dataset_profile(State(state): State<AppState>) -> HandlerResult<DatasetProfile> {
    let data = with_store(&state, |store| {
        Ok(services::compute_dataset_profile(store.records()))
    })
    .await?;
    Ok(Json(data))
}

// =============================================================================
// Stateless views
// =============================================================================

/// GET /v1/views/origin-summary
pub async fn get_origin_summary(State(state): State<AppState>) -> HandlerResult<OriginSummaryData> {
    let data = with_store(&state, |store| {
        Ok(services::compute_origin_summary(store.records()))
    })
    .await?;
    Ok(Json(data))
}

/// GET /v1/views/destination-map?metric=
pub async fn get_destination_map(
    State(state): State<AppState>,
    Query(query): Query<MetricQuery>,
) -> HandlerResult<DestinationMapData> {
    let metric = query.metric.unwrap_or_default();
    let data = with_store(&state, move |store| {
        Ok(services::compute_destination_map(store.records(), metric))
    })
    .await?;
    Ok(Json(data))
}

/// GET /v1/views/delay-histogram?airlines=
pub async fn get_delay_histogram(
    State(state): State<AppState>,
    Query(query): Query<AirlinesQuery>,
) -> HandlerResult<DelayHistogramData> {
    let airlines = query.selection();
    let n_bins = state.settings.histogram_bins;
    let data = with_store(&state, move |store| {
        Ok(services::compute_delay_histogram(
            store.records(),
            &airlines,
            n_bins,
        )?)
    })
    .await?;
    Ok(Json(data))
}

/// GET /v1/views/distance-heatmap?min=&max=&airlines=
pub async fn get_distance_heatmap(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> HandlerResult<DistanceHeatmapData> {
    let range = query.range();
    let airlines = query.selection();
    let n_bins = state.settings.heatmap_distance_bins;
    let data = with_store(&state, move |store| {
        Ok(services::compute_distance_heatmap(
            store.records(),
            range,
            &airlines,
            n_bins,
        )?)
    })
    .await?;
    Ok(Json(data))
}

/// GET /v1/views/summary?airlines=&min=&max=
///
/// Global summary without parameters, filtered otherwise.
pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> HandlerResult<SummaryData> {
    let data = with_store(&state, move |store| {
        if query.is_empty() {
            return Ok(services::compute_scalar_summary(store.records()));
        }
        Ok(services::compute_filtered_summary(
            store.records(),
            query.range(),
            &query.selection(),
        )?)
    })
    .await?;
    Ok(Json(data))
}

// =============================================================================
// Sessions
// =============================================================================

/// POST /v1/sessions
///
/// Start a session with default parameters and render every region.
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let settings = state.settings.clone();
    let (parameters, regions) = with_store(&state, move |store| {
        let parameters = dispatch::default_parameters(store.records());
        let regions = dispatch::full_dashboard(store.records(), &parameters, &settings)?;
        Ok((parameters, regions))
    })
    .await?;

    let session = state.sessions.create(parameters);
    info!("Created session {}", session.session_id);

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id: session.session_id,
            parameters: session.parameters,
            regions,
        }),
    ))
}

/// GET /v1/sessions/{session_id}
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> HandlerResult<SessionInfoResponse> {
    let id = parse_session_id(&session_id)?;
    let session = state.sessions.get(&id).ok_or_else(|| session_not_found(&id))?;

    Ok(Json(SessionInfoResponse {
        session_id: session.session_id,
        parameters: session.parameters,
        created_at: session.created_at,
        updated_at: session.updated_at,
    }))
}

/// POST /v1/sessions/{session_id}/changes
///
/// Apply one filter change and return only the regions it affects. The
/// session keeps its old parameters unless every affected region computes.
pub async fn apply_session_change(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(change): Json<FilterChange>,
) -> HandlerResult<ChangeResponse> {
    let id = parse_session_id(&session_id)?;
    let current = state
        .sessions
        .get(&id)
        .ok_or_else(|| session_not_found(&id))?
        .parameters;

    let settings = state.settings.clone();
    let staged = with_store(&state, move |store| {
        Ok(dispatch::stage_change(
            &current,
            change,
            store.records(),
            &settings,
        )?)
    })
    .await?;

    let session = state
        .sessions
        .set_parameters(&id, staged.parameters)
        .ok_or_else(|| session_not_found(&id))?;

    Ok(Json(ChangeResponse {
        session_id: id,
        input: staged.input,
        parameters: session.parameters,
        regions: staged.regions,
    }))
}

/// DELETE /v1/sessions/{session_id}
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_session_id(&session_id)?;
    if state.sessions.remove(&id) {
        info!("Deleted session {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(session_not_found(&id))
    }
}
