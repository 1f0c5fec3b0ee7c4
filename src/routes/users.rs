use actix_web::{web, HttpResponse};

use crate::{
    error::{AppError, AppResult},
    models::UserResponse,
    services::UserService,
    AppState,
};

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{id}", web::get().to(get_user));
}

async fn get_user(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let user = UserService::new(&state.store)
        .get_user_by_id(&path.into_inner())
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}
