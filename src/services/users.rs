//! User management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    error::{AppError, AppResult},
    models::enums::UserRole,
    models::user::{CreateUser, UpdateUser, User, UserFiltered},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    pub async fn list_filtered(&self) -> AppResult<Vec<UserFiltered>> {
        self.repository.users.list_filtered().await
    }

    pub async fn list_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        self.repository.users.list_by_role(role).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<User>> {
        self.repository.users.get_by_id(id).await
    }

    /// Create a user; the email is an enforced unique field
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        if self.repository.users.email_exists(&data.email).await? {
            return Err(AppError::DuplicateField(data.email.clone()));
        }
        let hash = self.hash_password(&data.password)?;
        self.repository
            .users
            .create(
                &data.name,
                &data.email,
                &hash,
                data.role.unwrap_or(UserRole::Admin),
            )
            .await
    }

    pub async fn update(&self, id: i32, data: &UpdateUser) -> AppResult<Option<User>> {
        let hash = match &data.password {
            Some(password) => Some(self.hash_password(password)?),
            None => None,
        };
        self.repository
            .users
            .update(
                id,
                data.name.as_deref(),
                data.email.as_deref(),
                hash.as_deref(),
                data.role,
            )
            .await
    }

    pub async fn delete(&self, id: i32) -> AppResult<Option<User>> {
        self.repository.users.delete(id).await
    }

    pub async fn delete_all(&self) -> AppResult<u64> {
        self.repository.users.delete_all().await
    }

    /// Verify a password against a stored account.
    ///
    /// Returns the account when the credentials match; an unknown email and
    /// a wrong password are indistinguishable to the caller.
    pub async fn check_password(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        let user = match self.repository.users.get_by_email(email).await? {
            Some(user) => user,
            None => return Ok(None),
        };
        if self.verify_password(&user, password)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using Argon2
    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}
