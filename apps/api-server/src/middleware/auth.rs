//! Authentication middleware and extractors.

use std::sync::Arc;

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures::future::LocalBoxFuture;

use quill_core::domain::User;
use quill_core::ports::{AuthError, TokenService};

use crate::state::AppState;

/// Authenticated user identity extractor.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.user.name)
/// }
/// ```
///
/// Extraction verifies the bearer token and resolves its `user_id` claim
/// to a stored user; any failure terminates the request with a 401.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user: User,
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError(pub AuthError);

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match &self.0 {
            AuthError::HashingError(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => actix_web::http::StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        use quill_shared::ErrorResponse;

        let error = match &self.0 {
            AuthError::MissingHeader => ErrorResponse::unauthorized("No header attached"),
            AuthError::MissingToken => ErrorResponse::unauthorized("no token found"),
            AuthError::TokenExpired => ErrorResponse::unauthorized("Token has expired"),
            AuthError::InvalidToken(_) | AuthError::UnknownUser => {
                ErrorResponse::unauthorized("Unauthorized")
            }
            AuthError::HashingError(_) => ErrorResponse::internal_error(),
        };

        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token_service = req
                .app_data::<web::Data<Arc<dyn TokenService>>>()
                .ok_or_else(|| {
                    tracing::error!("TokenService not found in app data");
                    AuthenticationError(AuthError::InvalidToken(
                        "Server configuration error".to_string(),
                    ))
                })?;

            let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
                tracing::error!("AppState not found in app data");
                AuthenticationError(AuthError::InvalidToken(
                    "Server configuration error".to_string(),
                ))
            })?;

            // 1. Require the Authorization header
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .ok_or(AuthenticationError(AuthError::MissingHeader))?;

            let auth_str = auth_header
                .to_str()
                .map_err(|_| AuthenticationError(AuthError::MissingToken))?;

            // 2. Require a token segment after the scheme
            let token = auth_str
                .split_whitespace()
                .nth(1)
                .ok_or(AuthenticationError(AuthError::MissingToken))?;

            // 3. Verify signature and expiry
            let claims = token_service
                .validate_token(token)
                .map_err(AuthenticationError)?;

            // 4. Resolve the claim to a stored user
            let user = state
                .users
                .find_by_id(claims.user_id)
                .await
                .map_err(|e| {
                    tracing::error!("User lookup failed during authentication: {e}");
                    AuthenticationError(AuthError::UnknownUser)
                })?
                .ok_or(AuthenticationError(AuthError::UnknownUser))?;

            Ok(Identity { user })
        })
    }
}
