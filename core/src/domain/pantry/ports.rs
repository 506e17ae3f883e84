use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    pantry::{entities::PantryItem, value_objects::AddPantryItemInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait PantryRepository: Send + Sync {
    fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<PantryItem>, CoreError>> + Send;

    fn create(&self, item: PantryItem)
    -> impl Future<Output = Result<PantryItem, CoreError>> + Send;

    /// Returns `false` when no item with that id belongs to the user.
    fn delete(
        &self,
        item_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn clear(&self, user_id: Uuid) -> impl Future<Output = Result<u64, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait PantryService: Send + Sync {
    fn get_pantry(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<PantryItem>, CoreError>> + Send;

    fn add_pantry_item(
        &self,
        identity: Identity,
        input: AddPantryItemInput,
    ) -> impl Future<Output = Result<PantryItem, CoreError>> + Send;

    fn remove_pantry_item(
        &self,
        identity: Identity,
        item_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear_pantry(&self, identity: Identity)
    -> impl Future<Output = Result<u64, CoreError>> + Send;
}
