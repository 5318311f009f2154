//! Authentication routes.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use tracing::{error, info};

use crate::{ApiError, AppState};
use bazaar_core::auth::verify_password;
use bazaar_db::AccountRepository;
use bazaar_shared::AppError;
use bazaar_shared::auth::{AccountInfo, LoginRequest, LoginResponse};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

/// POST /auth/login - Authenticate an account and return a token.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = AccountRepository::new((*state.db).clone());

    let Some(account) = repo.find_by_email(&payload.email).await? else {
        info!(email = %payload.email, "Login attempt for unknown account");
        return Err(invalid_credentials());
    };

    match verify_password(&payload.password, &account.password_hash) {
        Ok(true) => {}
        Ok(false) => {
            info!(account_id = %account.id, "Failed login attempt");
            return Err(invalid_credentials());
        }
        Err(e) => {
            error!(error = %e, "Password verification error");
            return Err(AppError::Internal(e.to_string()).into());
        }
    }

    let access_token = state
        .jwt_service
        .generate_access_token(account.id, &account.display_name)
        .map_err(|e| {
            error!(error = %e, "Failed to generate access token");
            AppError::Internal(e.to_string())
        })?;

    info!(account_id = %account.id, "Account logged in");

    let response = LoginResponse {
        account: AccountInfo {
            id: account.id,
            email: account.email,
            display_name: account.display_name,
        },
        access_token,
        expires_in: state.jwt_service.access_token_expires_in(),
    };

    Ok((StatusCode::OK, Json(response)))
}

fn invalid_credentials() -> ApiError {
    AppError::Unauthorized("Invalid email or password".into()).into()
}
