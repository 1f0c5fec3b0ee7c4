use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;

use crate::error::AppError;
use crate::models::User;
use crate::services::user::UserService;
use crate::utils::auth::{extract_bearer_token, verify_jwt};
use crate::AppState;

/// Authenticated caller, resolved from the `Authorization: Bearer` session
/// token. Extracting this guards a handler: the token is verified and looked
/// up against the user collection before the handler body runs.
///
/// Several paths mix public and protected methods (GET /admins is open while
/// POST /admins is not), so the guard is an extractor on the protected
/// handlers rather than a path-scoped middleware. Every failure is a 403;
/// 401 stays reserved for bad login credentials.
#[derive(Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.user.role == "admin" || self.user.role == "superadmin"
    }

    pub fn is_superadmin(&self) -> bool {
        self.user.role == "superadmin"
    }
}

impl std::ops::Deref for AuthUser {
    type Target = User;

    fn deref(&self) -> &Self::Target {
        &self.user
    }
}

impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let state = req
                .app_data::<web::Data<AppState>>()
                .ok_or_else(|| AppError::Internal("App state not found".to_string()))?;

            let token = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(extract_bearer_token)
                .ok_or_else(|| AppError::Forbidden("Missing session token".to_string()))?;

            let claims = verify_jwt(&token, &state.config.secret_key)?;

            let user_service = UserService::new(&state.store);
            let user = user_service
                .get_user_by_id(&claims.sub)
                .await?
                .ok_or_else(|| AppError::Forbidden("Session user no longer exists".to_string()))?;

            Ok(AuthUser { user })
        })
    }
}
