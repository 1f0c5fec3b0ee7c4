use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::AuthUser,
    models::CategoryForm,
    services::CategoryService,
    AppState,
};

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_categories))
        .route("", web::post().to(create_category))
        .route("/{id}", web::delete().to(delete_category));
}

async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = CategoryService::new(&state.store).list().await?;
    Ok(HttpResponse::Ok().json(categories))
}

async fn create_category(
    state: web::Data<AppState>,
    auth_user: AuthUser,
    form: web::Json<CategoryForm>,
) -> AppResult<HttpResponse> {
    if !auth_user.is_superadmin() {
        return Err(AppError::Forbidden(
            "Only the superadmin can manage categories".to_string(),
        ));
    }

    form.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let category = CategoryService::new(&state.store)
        .create(form.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(category))
}

async fn delete_category(
    state: web::Data<AppState>,
    auth_user: AuthUser,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    if !auth_user.is_superadmin() {
        return Err(AppError::Forbidden(
            "Only the superadmin can manage categories".to_string(),
        ));
    }

    CategoryService::new(&state.store)
        .delete(&path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
