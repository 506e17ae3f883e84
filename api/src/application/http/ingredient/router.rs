use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    create_ingredient::{__path_create_ingredient, create_ingredient},
    get_categories::{__path_get_categories, get_categories},
    get_ingredients::{__path_get_ingredients, get_ingredients},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_ingredients, get_categories, create_ingredient))]
pub struct IngredientApiDoc;

pub fn ingredient_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/ingredients", root_path),
            get(get_ingredients).post(create_ingredient),
        )
        .route(
            &format!("{}/ingredients/categories", root_path),
            get(get_categories),
        )
}
