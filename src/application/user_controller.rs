use crate::domain::error::DomainError;
use crate::domain::repository::{TokenSigner, UserStore};
use crate::domain::user::{
    CreateUserRequest, LoginRequest, NewUser, PublicUser, SessionUser, TokenClaims, User,
};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info, instrument, trace, warn};

/// Successful outcome of a login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub user: SessionUser,
}

/// Validates user-account requests and drives the store and signer.
///
/// Expected rejections come back as [`DomainError`] inside the `anyhow::Error`;
/// every other error is a collaborator failure.
#[derive(Clone)]
pub struct UserController {
    store: Arc<dyn UserStore>,
    signer: Arc<dyn TokenSigner>,
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

impl UserController {
    pub fn new(store: Arc<dyn UserStore>, signer: Arc<dyn TokenSigner>) -> Self {
        Self { store, signer }
    }

    #[instrument(skip_all)]
    pub async fn create_user(&self, req: CreateUserRequest) -> Result<PublicUser> {
        let (Some(name), Some(email), Some(password)) =
            (present(req.name), present(req.email), present(req.password))
        else {
            warn!("Create user request is missing fields");
            return Err(DomainError::MissingUserFields.into());
        };

        // Not atomic with the insert below; the store rejects duplicates as well.
        if self.store.find_by_email(&email).await?.is_some() {
            warn!(email = %email, "Email already registered");
            return Err(DomainError::EmailAlreadyRegistered.into());
        }

        let user = self
            .store
            .create(NewUser {
                name,
                email,
                password,
            })
            .await?;

        info!(user_id = user.id, email = %user.email, "User created");
        Ok(PublicUser::from(&user))
    }

    #[instrument(skip_all)]
    pub async fn login(&self, req: LoginRequest) -> Result<LoginOutcome> {
        let (Some(email), Some(password)) = (present(req.email), present(req.password)) else {
            warn!("Login request is missing credentials");
            return Err(DomainError::MissingCredentials.into());
        };

        let Some(user) = self.store.find_by_email(&email).await? else {
            warn!(email = %email, "Login for unknown email");
            return Err(DomainError::InvalidCredentials.into());
        };

        if !self
            .store
            .compare_password(&password, &user.password_hash)
            .await?
        {
            warn!(user_id = user.id, "Login with wrong password");
            return Err(DomainError::InvalidCredentials.into());
        }

        let token = self.signer.sign(&TokenClaims {
            id: user.id,
            email: user.email.clone(),
        })?;

        info!(user_id = user.id, "Login successful");
        Ok(LoginOutcome {
            token,
            user: SessionUser::from(&user),
        })
    }

    #[instrument(skip_all)]
    pub async fn get_all_users(&self) -> Result<Vec<User>> {
        let users = self.store.find_all().await?;
        debug!(count = users.len(), "Fetched users");
        Ok(users)
    }

    #[instrument(skip(self))]
    pub async fn get_user_by_id(&self, raw_id: &str) -> Result<User> {
        let Ok(id) = raw_id.parse::<i64>() else {
            warn!("Rejecting non-integer user id");
            return Err(DomainError::InvalidId.into());
        };

        trace!(user_id = id, "Looking up user");
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound.into())
    }
}
