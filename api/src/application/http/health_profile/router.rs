use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_health_profile::{__path_get_health_profile, get_health_profile},
    save_health_profile::{__path_save_health_profile, save_health_profile},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_health_profile, save_health_profile))]
pub struct HealthProfileApiDoc;

pub fn health_profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/health-profile", state.args.server.root_path),
            get(get_health_profile).post(save_health_profile),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
