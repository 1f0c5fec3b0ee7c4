use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::AuthUser,
    models::AdminForm,
    services::AdminService,
    AppState,
};

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_admins))
        .route("", web::post().to(create_admin))
        .route("/{id}", web::delete().to(delete_admin));
}

async fn list_admins(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let admins = AdminService::new(&state.store).list(&state.config).await?;
    Ok(HttpResponse::Ok().json(admins))
}

async fn create_admin(
    state: web::Data<AppState>,
    auth_user: AuthUser,
    form: web::Json<AdminForm>,
) -> AppResult<HttpResponse> {
    if !auth_user.is_superadmin() {
        return Err(AppError::Forbidden(
            "Only the superadmin can add admins or journalists".to_string(),
        ));
    }

    form.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let admin = AdminService::new(&state.store)
        .create(&state.config, form.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(admin))
}

async fn delete_admin(
    state: web::Data<AppState>,
    auth_user: AuthUser,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    if !auth_user.is_superadmin() {
        return Err(AppError::Forbidden(
            "Only the superadmin can remove admins".to_string(),
        ));
    }

    AdminService::new(&state.store)
        .delete(&state.config, &path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
