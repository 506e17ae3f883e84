use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    health_profile::ports::HealthProfileRepository,
    ingredient::ports::IngredientRepository,
    jwt::ports::TokenService,
    medication::{
        catalog::{find_predefined, find_predefined_by_name, predefined_medications},
        entities::{FoodRecommendation, MedicationRecord, UserMedication},
        ports::{CustomMedicationRepository, MedicationService, UserMedicationRepository},
        recommendations::aggregate_recommendations,
        value_objects::{CreateCustomMedicationInput, DEFAULT_MEDICATION_CATEGORY},
    },
    pantry::ports::PantryRepository,
    recipe::ports::{ImageResolver, LLMClient, RatingRepository, RecipeRepository},
    user::ports::UserRepository,
};

impl<U, H, T, I, P, HP, R, RR, M, UM, LLM, IMG, HC> MedicationService
    for Service<U, H, T, I, P, HP, R, RR, M, UM, LLM, IMG, HC>
where
    U: UserRepository,
    H: HasherRepository,
    T: TokenService,
    I: IngredientRepository,
    P: PantryRepository,
    HP: HealthProfileRepository,
    R: RecipeRepository,
    RR: RatingRepository,
    M: CustomMedicationRepository,
    UM: UserMedicationRepository,
    LLM: LLMClient,
    IMG: ImageResolver,
    HC: HealthCheckRepository,
{
    async fn list_medications(&self, identity: Identity) -> Result<Vec<MedicationRecord>, CoreError> {
        let mut medications = predefined_medications();
        medications.extend(self.medication_repository.list_by_user(identity.id()).await?);
        Ok(medications)
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id(), name = %input.name))]
    async fn add_custom_medication(
        &self,
        identity: Identity,
        input: CreateCustomMedicationInput,
    ) -> Result<MedicationRecord, CoreError> {
        create_custom_medication(&self.medication_repository, identity.id(), input).await
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn add_user_medication(
        &self,
        identity: Identity,
        medication_id: String,
    ) -> Result<UserMedication, CoreError> {
        link_medication(
            &self.medication_repository,
            &self.user_medication_repository,
            identity.id(),
            medication_id,
        )
        .await
    }

    async fn list_user_medications(
        &self,
        identity: Identity,
    ) -> Result<Vec<UserMedication>, CoreError> {
        self.user_medication_repository
            .list_by_user(identity.id())
            .await
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn remove_user_medication(
        &self,
        identity: Identity,
        medication_id: String,
    ) -> Result<(), CoreError> {
        let deleted = self
            .user_medication_repository
            .delete(identity.id(), medication_id)
            .await?;
        if !deleted {
            return Err(CoreError::NotFound("Medication not linked".to_string()));
        }

        Ok(())
    }

    async fn get_food_recommendations(
        &self,
        identity: Identity,
    ) -> Result<FoodRecommendation, CoreError> {
        let medications = linked_medications(
            &self.medication_repository,
            &self.user_medication_repository,
            identity.id(),
        )
        .await?;

        Ok(aggregate_recommendations(&medications))
    }
}

/// Predefined records win over custom ones with the same id.
pub async fn resolve_medication<M>(
    medication_repository: &M,
    user_id: Uuid,
    medication_id: &str,
) -> Result<Option<MedicationRecord>, CoreError>
where
    M: CustomMedicationRepository,
{
    if let Some(record) = find_predefined(medication_id) {
        return Ok(Some(record));
    }

    medication_repository
        .get_by_id(medication_id.to_string(), user_id)
        .await
}

/// The user's linked medications in link order. Links whose medication no longer
/// resolves are skipped.
pub async fn linked_medications<M, UM>(
    medication_repository: &M,
    user_medication_repository: &UM,
    user_id: Uuid,
) -> Result<Vec<MedicationRecord>, CoreError>
where
    M: CustomMedicationRepository,
    UM: UserMedicationRepository,
{
    let links = user_medication_repository.list_by_user(user_id).await?;

    let mut medications = Vec::with_capacity(links.len());
    for link in links {
        if let Some(record) =
            resolve_medication(medication_repository, user_id, &link.medication_id).await?
        {
            medications.push(record);
        }
    }

    Ok(medications)
}

pub async fn link_medication<M, UM>(
    medication_repository: &M,
    user_medication_repository: &UM,
    user_id: Uuid,
    medication_id: String,
) -> Result<UserMedication, CoreError>
where
    M: CustomMedicationRepository,
    UM: UserMedicationRepository,
{
    let medication = resolve_medication(medication_repository, user_id, &medication_id)
        .await?
        .ok_or_else(|| CoreError::NotFound("Medication not found".to_string()))?;

    if user_medication_repository
        .exists(user_id, medication.id.clone())
        .await?
    {
        return Err(CoreError::Conflict("Medication already added".to_string()));
    }

    let link = user_medication_repository
        .create(UserMedication::new(user_id, &medication))
        .await?;
    info!(medication_id = %link.medication_id, "medication linked");

    Ok(link)
}

pub async fn create_custom_medication<M>(
    medication_repository: &M,
    user_id: Uuid,
    input: CreateCustomMedicationInput,
) -> Result<MedicationRecord, CoreError>
where
    M: CustomMedicationRepository,
{
    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(CoreError::Invalid("Medication name cannot be empty".to_string()));
    }

    let taken = find_predefined_by_name(&name).is_some()
        || medication_repository
            .get_by_name(name.clone(), user_id)
            .await?
            .is_some();
    if taken {
        return Err(CoreError::Conflict("Medication already exists".to_string()));
    }

    let category = input
        .category
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| DEFAULT_MEDICATION_CATEGORY.to_string());

    let record = MedicationRecord {
        id: generate_uuid_v7().to_string(),
        name,
        category,
        avoid_foods: clean_foods(input.avoid_foods),
        recommended_foods: clean_foods(input.recommended_foods),
        vitamin_interactions: input.vitamin_interactions,
        is_custom: true,
    };

    medication_repository.create(user_id, record).await
}

fn clean_foods(foods: Vec<String>) -> Vec<String> {
    foods
        .into_iter()
        .map(|f| f.trim().to_lowercase())
        .filter(|f| !f.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::common::entities::text_map::TextMap;

    #[derive(Default)]
    struct InMemoryMedications {
        custom: Mutex<Vec<(Uuid, MedicationRecord)>>,
        links: Mutex<Vec<UserMedication>>,
    }

    impl CustomMedicationRepository for InMemoryMedications {
        async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<MedicationRecord>, CoreError> {
            Ok(self
                .custom
                .lock()
                .unwrap()
                .iter()
                .filter(|(owner, _)| *owner == user_id)
                .map(|(_, m)| m.clone())
                .collect())
        }

        async fn get_by_id(
            &self,
            medication_id: String,
            user_id: Uuid,
        ) -> Result<Option<MedicationRecord>, CoreError> {
            Ok(self
                .custom
                .lock()
                .unwrap()
                .iter()
                .find(|(owner, m)| *owner == user_id && m.id == medication_id)
                .map(|(_, m)| m.clone()))
        }

        async fn get_by_name(
            &self,
            name: String,
            user_id: Uuid,
        ) -> Result<Option<MedicationRecord>, CoreError> {
            Ok(self
                .custom
                .lock()
                .unwrap()
                .iter()
                .find(|(owner, m)| *owner == user_id && m.name.eq_ignore_ascii_case(&name))
                .map(|(_, m)| m.clone()))
        }

        async fn create(
            &self,
            user_id: Uuid,
            medication: MedicationRecord,
        ) -> Result<MedicationRecord, CoreError> {
            self.custom
                .lock()
                .unwrap()
                .push((user_id, medication.clone()));
            Ok(medication)
        }
    }

    impl UserMedicationRepository for InMemoryMedications {
        async fn exists(&self, user_id: Uuid, medication_id: String) -> Result<bool, CoreError> {
            Ok(self
                .links
                .lock()
                .unwrap()
                .iter()
                .any(|l| l.user_id == user_id && l.medication_id == medication_id))
        }

        async fn create(&self, link: UserMedication) -> Result<UserMedication, CoreError> {
            self.links.lock().unwrap().push(link.clone());
            Ok(link)
        }

        async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<UserMedication>, CoreError> {
            Ok(self
                .links
                .lock()
                .unwrap()
                .iter()
                .filter(|l| l.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn delete(&self, user_id: Uuid, medication_id: String) -> Result<bool, CoreError> {
            let mut links = self.links.lock().unwrap();
            let before = links.len();
            links.retain(|l| !(l.user_id == user_id && l.medication_id == medication_id));
            Ok(links.len() != before)
        }
    }

    fn custom_input(name: &str) -> CreateCustomMedicationInput {
        CreateCustomMedicationInput {
            name: name.to_string(),
            category: None,
            avoid_foods: vec![" Licorice ".to_string()],
            recommended_foods: vec![],
            vitamin_interactions: TextMap::new(),
        }
    }

    #[tokio::test]
    async fn linking_twice_is_a_conflict() {
        let store = InMemoryMedications::default();
        let user_id = Uuid::new_v4();

        let link = link_medication(&store, &store, user_id, "warfarin".to_string())
            .await
            .unwrap();
        assert_eq!(link.medication_name, "Warfarin");

        let err = link_medication(&store, &store, user_id, "warfarin".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn linking_an_unknown_medication_is_not_found() {
        let store = InMemoryMedications::default();

        let err = link_medication(&store, &store, Uuid::new_v4(), "aspirin".to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn custom_medications_can_be_linked_by_their_owner_only() {
        let store = InMemoryMedications::default();
        let owner = Uuid::new_v4();

        let record = create_custom_medication(&store, owner, custom_input("Herbal Tonic"))
            .await
            .unwrap();
        assert!(record.is_custom);
        assert_eq!(record.category, "other");
        assert_eq!(record.avoid_foods, vec!["licorice"]);

        link_medication(&store, &store, owner, record.id.clone())
            .await
            .unwrap();
        let err = link_medication(&store, &store, Uuid::new_v4(), record.id.clone())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));

        let linked = linked_medications(&store, &store, owner).await.unwrap();
        assert_eq!(linked, vec![record]);
    }

    #[tokio::test]
    async fn custom_names_cannot_shadow_existing_ones() {
        let store = InMemoryMedications::default();
        let owner = Uuid::new_v4();

        let err = create_custom_medication(&store, owner, custom_input("warfarin"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));

        create_custom_medication(&store, owner, custom_input("Tonic"))
            .await
            .unwrap();
        let err = create_custom_medication(&store, owner, custom_input("TONIC"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
    }
}
