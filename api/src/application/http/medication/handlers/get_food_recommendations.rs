use axum::extract::State;
use pantrychef_core::domain::medication::{
    entities::FoodRecommendation, ports::MedicationService,
};

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/foods-for-meds",
    tag = "recommendation",
    summary = "Food recommendations for linked medications",
    description = "Merges the food guidance of every medication the caller has linked.",
    responses(
        (status = 200, body = FoodRecommendation)
    ),
    security(("bearer" = []))
)]
pub async fn get_food_recommendations(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<FoodRecommendation>, ApiError> {
    let recommendation = state
        .service
        .get_food_recommendations(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(recommendation))
}
