use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    health_live::{__path_health_live, health_live},
    health_ready::{__path_health_ready, health_ready},
    root::{__path_root, root},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(health_live, health_ready))]
pub struct HealthApiDoc;

#[derive(OpenApi)]
#[openapi(paths(root))]
pub struct RootApiDoc;

pub fn health_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    let mut router = Router::new()
        .route(&format!("{}/", root_path), get(root))
        .route(&format!("{}/health/live", root_path), get(health_live))
        .route(&format!("{}/health/ready", root_path), get(health_ready));

    if !root_path.is_empty() {
        router = router.route(root_path, get(root));
    }

    router
}
