//! Patient dashboard routes
//!
//! `/` and `/patientspage` serve `index.html`; `/static` serves the dashboard
//! directory as-is (the registry file lives there); `/patients` returns the
//! registry as JSON.

use axum::{
    Router,
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, get_service},
};
use clinic_framework::registry::RegistryStore;
use serde_json::json;
use std::path::PathBuf;
use tower_http::services::{ServeDir, ServeFile};
use tracing::error;

#[derive(Clone)]
pub struct DashboardState {
    pub store: RegistryStore,
    pub dashboard_dir: PathBuf,
}

/// Handler to read the registry.
/// GET /patients
pub async fn list_patients(State(state): State<DashboardState>) -> Response {
    match state.store.load() {
        Ok(patients) => Json(patients).into_response(),
        Err(e) => {
            error!("Failed to load patients: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// Register dashboard routes
pub fn dashboard_routes(state: DashboardState) -> Router {
    let index = state.dashboard_dir.join("index.html");
    Router::new()
        .route("/", get_service(ServeFile::new(&index)))
        .route("/patientspage", get_service(ServeFile::new(&index)))
        .nest_service("/static", ServeDir::new(&state.dashboard_dir))
        .route("/patients", get(list_patients))
        .with_state(state)
}
