use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::AuthUser,
    models::{PollForm, VoteForm},
    services::PollService,
    AppState,
};

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_polls))
        .route("", web::post().to(create_poll))
        .route("/vote", web::post().to(vote))
        .route("/{id}", web::delete().to(delete_poll));
}

async fn list_polls(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let polls = PollService::new(&state.store).list().await?;
    Ok(HttpResponse::Ok().json(polls))
}

async fn create_poll(
    state: web::Data<AppState>,
    auth_user: AuthUser,
    form: web::Json<PollForm>,
) -> AppResult<HttpResponse> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden(
            "Only an admin or superadmin can add polls".to_string(),
        ));
    }

    form.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let poll = PollService::new(&state.store)
        .create(form.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(poll))
}

async fn vote(state: web::Data<AppState>, form: web::Json<VoteForm>) -> AppResult<HttpResponse> {
    PollService::new(&state.store).vote(form.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

async fn delete_poll(
    state: web::Data<AppState>,
    auth_user: AuthUser,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    if !auth_user.is_admin() {
        return Err(AppError::Forbidden(
            "Only an admin or superadmin can delete polls".to_string(),
        ));
    }

    PollService::new(&state.store)
        .delete(&path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
