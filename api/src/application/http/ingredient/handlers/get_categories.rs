use axum::extract::State;
use pantrychef_core::domain::ingredient::ports::IngredientService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/categories",
    tag = "ingredient",
    summary = "List ingredient categories",
    responses(
        (status = 200, body = CategoriesResponse)
    )
)]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Response<CategoriesResponse>, ApiError> {
    let categories = state
        .service
        .get_categories()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(CategoriesResponse { categories }))
}
