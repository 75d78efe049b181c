//! HTTP surface of the agent host

pub mod a2a;
pub mod dashboard;

use axum::Router;
use clinic_framework::agents::AgentRegistry;
use clinic_framework::registry::RegistryStore;
use std::path::PathBuf;
use tower_http::trace::TraceLayer;

/// Build the full router: A2A endpoints plus dashboard routes
pub fn app(agents: AgentRegistry, store: RegistryStore, dashboard_dir: PathBuf) -> Router {
    Router::new()
        .merge(a2a::a2a_routes(a2a::A2aState { agents }))
        .merge(dashboard::dashboard_routes(dashboard::DashboardState {
            store,
            dashboard_dir,
        }))
        .layer(TraceLayer::new_for_http())
}
