use axum::extract::State;
use pantrychef_core::domain::pantry::{
    entities::PantryItem, ports::PantryService, value_objects::AddPantryItemInput,
};

use crate::application::{
    auth::RequiredIdentity,
    http::{
        pantry::validators::AddPantryItemValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[utoipa::path(
    post,
    path = "",
    tag = "pantry",
    summary = "Add pantry item",
    responses(
        (status = 200, body = PantryItem),
        (status = 400, description = "Missing ingredient name")
    ),
    request_body = AddPantryItemValidator,
    security(("bearer" = []))
)]
pub async fn add_pantry_item(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AddPantryItemValidator>,
) -> Result<Response<PantryItem>, ApiError> {
    let item = state
        .service
        .add_pantry_item(
            identity,
            AddPantryItemInput {
                ingredient_name: payload.ingredient_name,
                quantity: payload.quantity,
                notes: payload.notes,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(item))
}
