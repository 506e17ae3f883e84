pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
    pub password_hash: String,
}
