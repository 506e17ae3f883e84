use crate::domain::recipe::entities::OutputFormat;

/// Application service wiring every port the HTTP layer needs.
///
/// Each domain module implements its service trait for this struct in its own
/// `services.rs`, so handlers only ever see `state.service`.
#[derive(Clone)]
pub struct Service<U, H, T, I, P, HP, R, RR, M, UM, LLM, IMG, HC> {
    pub(crate) user_repository: U,
    pub(crate) hasher_repository: H,
    pub(crate) token_service: T,
    pub(crate) ingredient_repository: I,
    pub(crate) pantry_repository: P,
    pub(crate) health_profile_repository: HP,
    pub(crate) recipe_repository: R,
    pub(crate) rating_repository: RR,
    pub(crate) medication_repository: M,
    pub(crate) user_medication_repository: UM,
    pub(crate) llm_client: LLM,
    pub(crate) image_resolver: IMG,
    pub(crate) health_check_repository: HC,
    pub(crate) output_format: OutputFormat,
}

impl<U, H, T, I, P, HP, R, RR, M, UM, LLM, IMG, HC>
    Service<U, H, T, I, P, HP, R, RR, M, UM, LLM, IMG, HC>
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        hasher_repository: H,
        token_service: T,
        ingredient_repository: I,
        pantry_repository: P,
        health_profile_repository: HP,
        recipe_repository: R,
        rating_repository: RR,
        medication_repository: M,
        user_medication_repository: UM,
        llm_client: LLM,
        image_resolver: IMG,
        health_check_repository: HC,
        output_format: OutputFormat,
    ) -> Self {
        Self {
            user_repository,
            hasher_repository,
            token_service,
            ingredient_repository,
            pantry_repository,
            health_profile_repository,
            recipe_repository,
            rating_repository,
            medication_repository,
            user_medication_repository,
            llm_client,
            image_resolver,
            health_check_repository,
            output_format,
        }
    }
}
