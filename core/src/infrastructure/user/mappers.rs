use crate::{domain::user::entities::User, entity::users::Model as UserModel};

impl From<&UserModel> for User {
    fn from(model: &UserModel) -> Self {
        Self {
            id: model.id,
            email: model.email.clone(),
            name: model.name.clone(),
            password_hash: model.password_hash.clone(),
            created_at: model.created_at.to_utc(),
        }
    }
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        Self::from(&model)
    }
}
