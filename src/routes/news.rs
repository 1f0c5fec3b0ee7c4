use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{CommentForm, NewsForm, NewsUpdateForm},
    services::{CommentService, NewsService},
    AppState,
};

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_news))
        .route("", web::post().to(create_news))
        .route("/{id}", web::put().to(update_news))
        .route("/{id}", web::delete().to(delete_news))
        .route("/{id}/comments", web::get().to(list_comments))
        .route("/{id}/comments", web::post().to(create_comment))
        .route(
            "/{id}/comments/{comment_id}",
            web::delete().to(delete_comment),
        );
}

async fn list_news(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let news = NewsService::new(&state.store).list().await?;
    Ok(HttpResponse::Ok().json(news))
}

async fn create_news(
    state: web::Data<AppState>,
    form: web::Json<NewsForm>,
) -> AppResult<HttpResponse> {
    form.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = NewsService::new(&state.store)
        .create(form.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(created))
}

async fn update_news(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Json<NewsUpdateForm>,
) -> AppResult<HttpResponse> {
    NewsService::new(&state.store)
        .update(&path.into_inner(), form.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

async fn delete_news(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    NewsService::new(&state.store)
        .delete(&path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let comments = CommentService::new(&state.store)
        .list_for_news(&path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(comments))
}

async fn create_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Json<CommentForm>,
) -> AppResult<HttpResponse> {
    form.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = CommentService::new(&state.store)
        .create(&path.into_inner(), form.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(created))
}

async fn delete_comment(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (news_id, comment_id) = path.into_inner();
    CommentService::new(&state.store)
        .delete(&news_id, &comment_id)
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
