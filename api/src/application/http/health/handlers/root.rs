use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct RootResponse {
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    summary = "API root",
    responses(
        (status = 200, body = RootResponse)
    )
)]
pub async fn root() -> Response<RootResponse> {
    Response::OK(RootResponse {
        message: "PantryChef API".to_string(),
    })
}
