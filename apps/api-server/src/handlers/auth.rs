//! Authentication and profile handlers.

use std::sync::Arc;

use actix_web::{HttpResponse, web};

use quill_core::domain::User;
use quill_core::ports::{PasswordService, TokenService};
use quill_shared::ApiResponse;
use quill_shared::dto::{
    LoginRequest, SignupRequest, TokenResponse, UpdateProfileRequest, UserResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::validation::{self, LOGIN_RULES, PROFILE_UPDATE_RULES, SIGNUP_RULES};

fn user_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
    }
}

/// POST /api/v1/auth/signup
pub async fn signup(
    state: web::Data<AppState>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<SignupRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    validation::validate(
        SIGNUP_RULES,
        &[
            ("name", Some(req.name.as_str())),
            ("email", Some(req.email.as_str())),
            ("password", Some(req.password.as_str())),
        ],
    )?;

    // Check if user already exists
    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict(
            "User already exists with that email".to_string(),
        ));
    }

    // Hash password
    let password_hash = password_service
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    // Create user - the stored hash stays out of the response
    let user = User::new(req.name, req.email, password_hash);
    let saved = state.users.insert(user).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        user_response(&saved),
        "User created successfully",
    )))
}

/// POST /api/v1/auth/login
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    validation::validate(
        LOGIN_RULES,
        &[
            ("email", Some(req.email.as_str())),
            ("password", Some(req.password.as_str())),
        ],
    )?;

    // Find user by email
    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or_else(|| AppError::BadRequest("User does not exist".to_string()))?;

    // Verify password
    let valid = password_service
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        return Err(AppError::BadRequest("Invalid credentials".to_string()));
    }

    // Issue token
    let token = token_service
        .generate_token(user.id)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        TokenResponse { token },
        "User logged in successfully",
    )))
}

/// GET /api/v1/auth/profile - Protected route
pub async fn profile(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let user = state
        .users
        .find_by_id(identity.user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(user_response(&user))))
}

/// PATCH /api/v1/auth/profile - Protected route
pub async fn update_profile(
    state: web::Data<AppState>,
    password_service: web::Data<Arc<dyn PasswordService>>,
    identity: Identity,
    body: web::Json<UpdateProfileRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    validation::validate(
        PROFILE_UPDATE_RULES,
        &[
            ("name", req.name.as_deref()),
            ("password", req.password.as_deref()),
        ],
    )?;

    // Apply only provided fields
    let mut user = identity.user;
    if let Some(name) = req.name {
        user.rename(name);
    }
    if let Some(password) = req.password {
        let hash = password_service
            .hash(&password)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        user.set_password_hash(hash);
    }

    state.users.update(user).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message_only("Profile updated successfully")))
}
