//! HTTP control surface: `POST /titling`, `POST|DELETE /titling/stop`.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::post;
use scheduler::Mode;
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::state::{AppState, TitlingSession, now_ms};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TitlingRequest {
    vtt_path: String,
    time_mode: Option<String>,
    start_at: Option<f64>,
}

fn parse_mode(time_mode: Option<&str>) -> Result<Mode, AppError> {
    match time_mode {
        None | Some("autonomous") => Ok(Mode::Autonomous),
        Some("external") => Ok(Mode::External),
        Some(other) => Err(AppError::InvalidInput(format!("invalid timeMode: {other}"))),
    }
}

async fn post_titling(State(state): State<Arc<AppState>>, Json(req): Json<TitlingRequest>) -> Result<Json<Value>, AppError> {
    if req.vtt_path.trim().is_empty() {
        return Err(AppError::InvalidInput("vttPath is required".to_string()));
    }
    let mode = parse_mode(req.time_mode.as_deref())?;

    let cues = vtt::parse_file(&req.vtt_path)?;
    let segments = segmenter::segment_cues(&cues);

    let start_at = req.start_at.unwrap_or(0.0);
    let origin_wall_ms = now_ms();
    let is_autonomous = mode == Mode::Autonomous;

    state.scheduler.lock().load(
        segments.clone(),
        Some(mode),
        is_autonomous.then_some(start_at),
        is_autonomous.then_some(origin_wall_ms),
    );

    let time_mode_str = if is_autonomous { "autonomous" } else { "external" };
    *state.session.lock() = Some(TitlingSession {
        vtt_path: req.vtt_path.clone(),
        cue_count: cues.len(),
        segment_count: segments.len(),
        time_mode: time_mode_str.to_string(),
    });

    Ok(Json(json!({
        "ok": true,
        "cues": cues.len(),
        "segments": segments.len(),
        "timeMode": time_mode_str,
        "startAt": start_at,
    })))
}

async fn stop_titling(State(state): State<Arc<AppState>>) -> Json<Value> {
    state.scheduler.lock().stop(state.dispatcher.as_ref());
    *state.session.lock() = None;
    Json(json!({ "ok": true, "message": "stopped" }))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/titling", post(post_titling))
        .route("/titling/stop", post(stop_titling).delete(stop_titling))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
