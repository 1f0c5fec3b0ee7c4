use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::MatchForm,
    services::MatchService,
    AppState,
};

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_matches))
        .route("", web::post().to(create_match))
        .route("/{id}", web::put().to(update_match))
        .route("/{id}", web::delete().to(delete_match));
}

/// Also mounted as GET /matches; both paths return the full collection.
pub async fn list_matches(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let matches = MatchService::new(&state.store).list().await?;
    Ok(HttpResponse::Ok().json(matches))
}

async fn create_match(
    state: web::Data<AppState>,
    form: web::Json<MatchForm>,
) -> AppResult<HttpResponse> {
    form.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = MatchService::new(&state.store)
        .create(form.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(created))
}

async fn update_match(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Json<MatchForm>,
) -> AppResult<HttpResponse> {
    form.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    MatchService::new(&state.store)
        .update(&path.into_inner(), form.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

async fn delete_match(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    MatchService::new(&state.store)
        .delete(&path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use crate::config::Config;
    use crate::store::Store;
    use crate::AppState;

    #[actix_web::test]
    async fn test_same_team_twice_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        let config: Config = serde_json::from_str("{}").unwrap();
        let state = actix_web::web::Data::new(AppState { store, config });

        let app = test::init_service(
            App::new().app_data(state.clone()).service(
                actix_web::web::scope("/api/featured-match").configure(super::create_routes),
            ),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/featured-match")
            .set_json(json!({
                "home": "Real Madrid",
                "away": "Real Madrid",
                "time": "21:00",
                "date": "2026-09-01",
                "league": "La Liga"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }
}
