use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    medication::{
        entities::{FoodRecommendation, MedicationRecord, UserMedication},
        value_objects::CreateCustomMedicationInput,
    },
};

/// User-contributed medications. Predefined ones live in `catalog`.
#[cfg_attr(test, mockall::automock)]
pub trait CustomMedicationRepository: Send + Sync {
    fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<MedicationRecord>, CoreError>> + Send;

    fn get_by_id(
        &self,
        medication_id: String,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<MedicationRecord>, CoreError>> + Send;

    /// Case-insensitive match on the name.
    fn get_by_name(
        &self,
        name: String,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<MedicationRecord>, CoreError>> + Send;

    fn create(
        &self,
        user_id: Uuid,
        medication: MedicationRecord,
    ) -> impl Future<Output = Result<MedicationRecord, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserMedicationRepository: Send + Sync {
    fn exists(
        &self,
        user_id: Uuid,
        medication_id: String,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn create(
        &self,
        link: UserMedication,
    ) -> impl Future<Output = Result<UserMedication, CoreError>> + Send;

    fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<UserMedication>, CoreError>> + Send;

    /// Returns `false` when the medication was not linked.
    fn delete(
        &self,
        user_id: Uuid,
        medication_id: String,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MedicationService: Send + Sync {
    fn list_medications(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<MedicationRecord>, CoreError>> + Send;

    fn add_custom_medication(
        &self,
        identity: Identity,
        input: CreateCustomMedicationInput,
    ) -> impl Future<Output = Result<MedicationRecord, CoreError>> + Send;

    fn add_user_medication(
        &self,
        identity: Identity,
        medication_id: String,
    ) -> impl Future<Output = Result<UserMedication, CoreError>> + Send;

    fn list_user_medications(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<UserMedication>, CoreError>> + Send;

    fn remove_user_medication(
        &self,
        identity: Identity,
        medication_id: String,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_food_recommendations(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<FoodRecommendation, CoreError>> + Send;
}
