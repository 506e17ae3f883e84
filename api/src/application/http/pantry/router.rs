use axum::{
    Router, middleware,
    routing::{delete, get},
};
use utoipa::OpenApi;

use super::handlers::{
    add_pantry_item::{__path_add_pantry_item, add_pantry_item},
    clear_pantry::{__path_clear_pantry, clear_pantry},
    get_pantry::{__path_get_pantry, get_pantry},
    remove_pantry_item::{__path_remove_pantry_item, remove_pantry_item},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_pantry, add_pantry_item, remove_pantry_item, clear_pantry))]
pub struct PantryApiDoc;

pub fn pantry_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/pantry", root_path),
            get(get_pantry).post(add_pantry_item).delete(clear_pantry),
        )
        .route(
            &format!("{}/pantry/{{item_id}}", root_path),
            delete(remove_pantry_item),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
