use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    health_profile::{entities::HealthProfile, value_objects::HealthProfileInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait HealthProfileRepository: Send + Sync {
    fn get_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<HealthProfile>, CoreError>> + Send;

    fn get_by_id(
        &self,
        profile_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<HealthProfile>, CoreError>> + Send;

    fn delete_by_user(&self, user_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn create(
        &self,
        profile: HealthProfile,
    ) -> impl Future<Output = Result<HealthProfile, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait HealthProfileService: Send + Sync {
    fn get_health_profile(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<HealthProfile, CoreError>> + Send;

    /// Replaces the caller's profile. The old row is deleted before the new one is
    /// inserted, so a concurrent reader may briefly see no profile.
    fn save_health_profile(
        &self,
        identity: Identity,
        input: HealthProfileInput,
    ) -> impl Future<Output = Result<HealthProfile, CoreError>> + Send;
}
