use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    get_current_user::{__path_get_current_user, get_current_user},
    login::{__path_login, login},
    register::{__path_register, register},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(register, login, get_current_user))]
pub struct AuthenticationApiDoc;

pub fn authentication_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    let protected = Router::new()
        .route(&format!("{}/auth/me", root_path), get(get_current_user))
        .layer(middleware::from_fn_with_state(state.clone(), auth));

    Router::new()
        .route(&format!("{}/auth/register", root_path), post(register))
        .route(&format!("{}/auth/login", root_path), post(login))
        .merge(protected)
}
