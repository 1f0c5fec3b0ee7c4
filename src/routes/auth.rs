use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
    services::AuthService,
    AppState,
};

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register))
        .route("/login", web::post().to(login));
}

async fn register(
    state: web::Data<AppState>,
    form: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    form.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let user = AuthService::new(&state.store)
        .register(&state.config, &form)
        .await?;

    Ok(HttpResponse::Created().json(RegisterResponse {
        message: "Registration successful".to_string(),
        user: user.into(),
    }))
}

async fn login(
    state: web::Data<AppState>,
    form: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let (token, user) = AuthService::new(&state.store)
        .login(&state.config, &form)
        .await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        user: user.into(),
    }))
}
