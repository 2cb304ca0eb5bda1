use crate::application::user_controller::UserController;
use crate::domain::user::{CreateUserRequest, CreatedUserResponse, LoginRequest, LoginResponse};
use crate::presentation::error::ApiError;
use crate::presentation::extract::JsonBody;
use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, instrument};

const CREATE_USER_FAILED: &str = "Error creating user";
const LOGIN_FAILED: &str = "Error logging in";
const LIST_USERS_FAILED: &str = "Error fetching users";
const GET_USER_FAILED: &str = "Error fetching user";

pub struct AppState {
    pub users: UserController,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
}

#[instrument]
pub async fn health_check() -> HttpResponse {
    info!("Health check requested");
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[instrument(skip_all)]
pub async fn create_user(
    state: web::Data<AppState>,
    req: JsonBody<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Create user request received");
    let user = state
        .users
        .create_user(req.into_inner())
        .await
        .map_err(|e| ApiError::from_failure(e, CREATE_USER_FAILED))?;

    Ok(HttpResponse::Created().json(CreatedUserResponse {
        message: "User created successfully".to_string(),
        user,
    }))
}

#[instrument(skip_all)]
pub async fn login(
    state: web::Data<AppState>,
    req: JsonBody<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Login request received");
    let outcome = state
        .users
        .login(req.into_inner())
        .await
        .map_err(|e| ApiError::from_failure(e, LOGIN_FAILED))?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Login successful".to_string(),
        token: outcome.token,
        user: outcome.user,
    }))
}

#[instrument(skip_all)]
pub async fn get_all_users(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let users = state
        .users
        .get_all_users()
        .await
        .map_err(|e| ApiError::from_failure(e, LIST_USERS_FAILED))?;
    info!(count = users.len(), "Users listed");
    Ok(HttpResponse::Ok().json(users))
}

#[instrument(skip(state), fields(user_id = %*path))]
pub async fn get_user_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user = state
        .users
        .get_user_by_id(&path.into_inner())
        .await
        .map_err(|e| ApiError::from_failure(e, GET_USER_FAILED))?;
    info!(user_id = user.id, "User retrieved");
    Ok(HttpResponse::Ok().json(user))
}
