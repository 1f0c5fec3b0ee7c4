use std::path::Path;

use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse};
use futures::StreamExt;
use rand::Rng;
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    utils::time::current_timestamp_millis,
    AppState,
};

pub fn create_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(upload_image));
}

/// Accepts one multipart field named `image`, stores it under the upload
/// directory with a generated name, and returns the absolute URL it will be
/// served from. Neither content type nor size is checked.
async fn upload_image(
    state: web::Data<AppState>,
    req: HttpRequest,
    mut payload: Multipart,
) -> AppResult<HttpResponse> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut original_name: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| AppError::Validation(format!("Multipart error: {}", e)))?;
        let content_disposition = field.content_disposition();
        let field_name = content_disposition
            .as_ref()
            .and_then(|cd| cd.get_name())
            .unwrap_or("");

        match field_name {
            "image" => {
                original_name = content_disposition
                    .as_ref()
                    .and_then(|cd| cd.get_filename())
                    .map(|name| name.to_string());

                let mut data = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk
                        .map_err(|e| AppError::Validation(format!("Chunk error: {}", e)))?;
                    data.extend_from_slice(&chunk);
                }
                file_data = Some(data);
            }
            _ => {}
        }
    }

    let file_data = file_data.ok_or_else(|| AppError::Validation("File not found".to_string()))?;

    let extension = original_name
        .as_deref()
        .and_then(|name| Path::new(name).extension())
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let file_name = format!(
        "{}-{}{}",
        current_timestamp_millis(),
        rand::rng().random_range(0u32..1_000_000_000),
        extension
    );

    tokio::fs::create_dir_all(&state.config.upload_dir).await?;
    tokio::fs::write(
        Path::new(&state.config.upload_dir).join(&file_name),
        file_data,
    )
    .await?;

    let connection = req.connection_info();
    let url = format!(
        "{}://{}/uploads/{}",
        connection.scheme(),
        connection.host(),
        file_name
    );

    Ok(HttpResponse::Ok().json(json!({ "url": url })))
}
