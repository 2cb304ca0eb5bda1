use crate::domain::user::{NewUser, TokenClaims, User, UserUpdate};
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, input: NewUser) -> Result<User>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn find_all(&self) -> Result<Vec<User>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn update(&self, id: i64, changes: UserUpdate) -> Result<Option<User>>;
    async fn delete(&self, id: i64) -> Result<bool>;
    async fn compare_password(&self, plaintext: &str, hash: &str) -> Result<bool>;
}

pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String>;
    /// `Ok(false)` on mismatch; `Err` only when `hash` cannot be parsed.
    fn verify(&self, plaintext: &str, hash: &str) -> Result<bool>;
}

pub trait TokenSigner: Send + Sync {
    fn sign(&self, claims: &TokenClaims) -> Result<String>;
}
