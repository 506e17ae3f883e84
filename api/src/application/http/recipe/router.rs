use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use utoipa::OpenApi;

use super::handlers::{
    add_rating::{__path_add_rating, add_rating},
    delete_recipe::{__path_delete_recipe, delete_recipe},
    generate_recipe::{__path_generate_recipe, generate_recipe},
    get_ratings::{__path_get_ratings, get_ratings},
    get_recipe::{__path_get_recipe, get_recipe},
    get_recipes::{__path_get_recipes, get_recipes},
    set_favorite::{__path_set_favorite, set_favorite},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(
    generate_recipe,
    get_recipes,
    get_recipe,
    set_favorite,
    delete_recipe,
    add_rating,
    get_ratings
))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/recipes", root_path), get(get_recipes))
        .route(
            &format!("{}/recipes/generate", root_path),
            post(generate_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}", root_path),
            get(get_recipe).delete(delete_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/favorite", root_path),
            patch(set_favorite),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/ratings", root_path),
            get(get_ratings).post(add_rating),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
