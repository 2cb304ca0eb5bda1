use crate::domain::repository::{PasswordHasher, UserStore};
use crate::domain::user::{NewUser, User, UserUpdate};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, instrument, trace, warn};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("email {0} is already taken")]
    EmailTaken(String),
}

#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

impl Tables {
    fn email_in_use(&self, email: &str, except: Option<i64>) -> bool {
        self.users
            .values()
            .any(|u| u.email == email && Some(u.id) != except)
    }
}

/// Process-local user store. Ids are assigned from 1 upwards and never reused.
pub struct InMemoryUserStore<H: PasswordHasher> {
    tables: Arc<RwLock<Tables>>,
    hasher: Arc<H>,
}

impl<H: PasswordHasher> Clone for InMemoryUserStore<H> {
    fn clone(&self) -> Self {
        Self {
            tables: Arc::clone(&self.tables),
            hasher: Arc::clone(&self.hasher),
        }
    }
}

impl<H: PasswordHasher> InMemoryUserStore<H> {
    pub fn new(hasher: H) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            hasher: Arc::new(hasher),
        }
    }
}

#[async_trait]
impl<H: PasswordHasher + 'static> UserStore for InMemoryUserStore<H> {
    #[instrument(skip(self, input), fields(email = %input.email))]
    async fn create(&self, input: NewUser) -> Result<User> {
        // Hash before taking the lock; argon2 is deliberately slow.
        let password_hash = self.hasher.hash(&input.password)?;

        trace!("Acquiring write lock for user storage");
        let mut tables = self.tables.write().await;
        if tables.email_in_use(&input.email, None) {
            warn!(email = %input.email, "Rejecting insert with duplicate email");
            return Err(StoreError::EmailTaken(input.email).into());
        }

        tables.last_id += 1;
        let user = User {
            id: tables.last_id,
            name: input.name,
            email: input.email,
            password_hash,
        };
        tables.users.insert(user.id, user.clone());
        debug!(user_id = user.id, email = %user.email, "User inserted into storage");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let tables = self.tables.read().await;
        let user = tables.users.values().find(|u| u.email == email).cloned();
        match &user {
            Some(u) => debug!(user_id = u.id, "User found by email"),
            None => trace!("No user with this email"),
        }
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<User>> {
        let tables = self.tables.read().await;
        let users: Vec<User> = tables.users.values().cloned().collect();
        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let tables = self.tables.read().await;
        let user = tables.users.get(&id).cloned();
        if user.is_none() {
            trace!("No user with this id");
        }
        Ok(user)
    }

    #[instrument(skip(self, changes))]
    async fn update(&self, id: i64, changes: UserUpdate) -> Result<Option<User>> {
        let password_hash = match &changes.password {
            Some(password) => Some(self.hasher.hash(password)?),
            None => None,
        };

        let mut tables = self.tables.write().await;
        if let Some(email) = &changes.email {
            if tables.email_in_use(email, Some(id)) {
                return Err(StoreError::EmailTaken(email.clone()).into());
            }
        }

        let Some(user) = tables.users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(hash) = password_hash {
            user.password_hash = hash;
        }
        debug!(user_id = id, "User updated");
        Ok(Some(user.clone()))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<bool> {
        let mut tables = self.tables.write().await;
        let removed = tables.users.remove(&id).is_some();
        debug!(user_id = id, removed, "Delete requested");
        Ok(removed)
    }

    #[instrument(skip_all)]
    async fn compare_password(&self, plaintext: &str, hash: &str) -> Result<bool> {
        self.hasher.verify(plaintext, hash)
    }
}
