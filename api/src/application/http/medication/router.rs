use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    add_custom_medication::{__path_add_custom_medication, add_custom_medication},
    add_user_medication::{__path_add_user_medication, add_user_medication},
    get_food_recommendations::{__path_get_food_recommendations, get_food_recommendations},
    list_medications::{__path_list_medications, list_medications},
    list_user_medications::{__path_list_user_medications, list_user_medications},
    remove_user_medication::{__path_remove_user_medication, remove_user_medication},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(list_medications, add_custom_medication))]
pub struct MedicationApiDoc;

#[derive(OpenApi)]
#[openapi(paths(add_user_medication, list_user_medications, remove_user_medication))]
pub struct UserMedicationApiDoc;

#[derive(OpenApi)]
#[openapi(paths(get_food_recommendations))]
pub struct RecommendationApiDoc;

pub fn medication_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/medications/list", root_path),
            get(list_medications),
        )
        .route(
            &format!("{}/medications/add-custom", root_path),
            post(add_custom_medication),
        )
        .route(
            &format!("{}/user-medications/add", root_path),
            post(add_user_medication),
        )
        .route(
            &format!("{}/user-medications/list", root_path),
            get(list_user_medications),
        )
        .route(
            &format!("{}/user-medications/{{medication_id}}", root_path),
            delete(remove_user_medication),
        )
        .route(
            &format!("{}/recommendations/foods-for-meds", root_path),
            get(get_food_recommendations),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
