use thiserror::Error;

/// Expected rejections raised by the user controller. Anything that is not a
/// `DomainError` is treated as a collaborator failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Name, email and password are required")]
    MissingUserFields,
    #[error("Email already registered")]
    EmailAlreadyRegistered,
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid ID")]
    InvalidId,
    #[error("User not found")]
    UserNotFound,
}
