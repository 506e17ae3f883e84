use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::application::http::{
    authentication::router::AuthenticationApiDoc,
    health::handlers::root::__path_root,
    health::router::HealthApiDoc,
    health_profile::router::HealthProfileApiDoc,
    ingredient::router::IngredientApiDoc,
    medication::router::{MedicationApiDoc, RecommendationApiDoc, UserMedicationApiDoc},
    pantry::router::PantryApiDoc,
    recipe::router::RecipeApiDoc,
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PantryChef API"
    ),
    modifiers(&SecurityAddon),
    paths(root),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/ingredients", api = IngredientApiDoc),
        (path = "/pantry", api = PantryApiDoc),
        (path = "/health-profile", api = HealthProfileApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/medications", api = MedicationApiDoc),
        (path = "/user-medications", api = UserMedicationApiDoc),
        (path = "/recommendations", api = RecommendationApiDoc),
    )
)]
pub struct ApiDoc;
