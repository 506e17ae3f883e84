use std::future::Future;

use crate::domain::{
    authentication::{
        entities::{AuthSession, AuthorizeRequestInput, AuthorizeRequestOutput},
        value_objects::{Identity, LoginInput, RegisterInput},
    },
    common::entities::app_errors::CoreError,
    user::entities::User,
};

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn register(
        &self,
        input: RegisterInput,
    ) -> impl Future<Output = Result<AuthSession, CoreError>> + Send;

    fn login(&self, input: LoginInput)
    -> impl Future<Output = Result<AuthSession, CoreError>> + Send;

    fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> impl Future<Output = Result<AuthorizeRequestOutput, CoreError>> + Send;

    fn get_current_user(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}
