//! HTTP Endpoints
//!
//! JSON API for the translation assistant front end.

use axum::{
    extract::{
        multipart::MultipartRejection, rejection::JsonRejection, DefaultBodyLimit, Json,
        Multipart, State,
    },
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use medlingo_core::{Language, LocalizedTerm};
use medlingo_text_processing::TextProcessingError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::ServerError;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let server = &state.config.server;
    let cors_layer = build_cors_layer(&server.cors_origins, server.cors_enabled);
    let upload_limit = server.max_upload_bytes;

    let mut router = Router::new()
        .route("/detect", post(detect_language))
        .route("/translate", post(translate))
        .route("/process_image", post(process_image))
        .route("/health", get(health_check));

    if Path::new(&server.static_dir).is_dir() {
        tracing::info!(dir = %server.static_dir, "Serving static files under /static");
        router = router.nest_service("/static", ServeDir::new(&server.static_dir));
    } else {
        tracing::debug!(dir = %server.static_dir, "Static directory not found, /static disabled");
    }

    router
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(upload_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If cors_origins is empty, defaults to localhost:3000
/// - Otherwise, uses the configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    let localhost = || {
        CorsLayer::new()
            .allow_origin(HeaderValue::from_static("http://localhost:3000"))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };

    if origins.is_empty() {
        tracing::info!("No CORS origins configured, defaulting to localhost:3000");
        return localhost();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::error!("All configured CORS origins are invalid, falling back to localhost");
        return localhost();
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

#[derive(Debug, Deserialize)]
struct DetectRequest {
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct DetectResponse {
    language: Language,
}

/// POST /detect
async fn detect_language(
    State(state): State<AppState>,
    payload: Result<Json<DetectRequest>, JsonRejection>,
) -> Result<Json<DetectResponse>, ServerError> {
    let text = payload
        .ok()
        .and_then(|Json(request)| request.text)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ServerError::InvalidRequest("No text provided".to_string()))?;

    let language = state.pipeline.detect_language(&text).await.map_err(|e| {
        tracing::warn!(error = %e, "Language detection failed");
        ServerError::Upstream("Language detection failed".to_string())
    })?;

    Ok(Json(DetectResponse { language }))
}

#[derive(Debug, Deserialize)]
struct TranslateRequest {
    text: Option<String>,
    source: Option<String>,
    target: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
    keywords: Vec<LocalizedTerm>,
    recommendations: Vec<String>,
    visual_aid: Option<String>,
}

fn parse_language(code: Option<&str>, default: Language) -> Result<Language, ServerError> {
    match code {
        None => Ok(default),
        Some(code) => code
            .parse::<Language>()
            .map_err(|e| ServerError::InvalidRequest(e.to_string())),
    }
}

/// POST /translate
async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ServerError> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected translate payload");
        ServerError::InvalidRequest("No JSON payload found".to_string())
    })?;

    let source = parse_language(request.source.as_deref(), Language::English)?;
    let target = parse_language(request.target.as_deref(), Language::Spanish)?;

    let outcome = state
        .pipeline
        .translate(request.text.as_deref().unwrap_or_default(), source, target)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, source = %source, target = %target, "Translation failed");
            ServerError::Upstream("Translation service failed.".to_string())
        })?;

    tracing::debug!(
        keywords = outcome.annotation.localized_terms.len(),
        recommendations = outcome.annotation.recommended_departments.len(),
        "Translated text"
    );

    Ok(Json(TranslateResponse {
        translated_text: outcome.translated_text,
        keywords: outcome.annotation.localized_terms,
        recommendations: outcome.annotation.recommended_departments,
        visual_aid: outcome.annotation.visual_aid,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProcessImageResponse {
    extracted_text: String,
}

/// POST /process_image
async fn process_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ProcessImageResponse>, ServerError> {
    let no_file = || ServerError::InvalidRequest("No file part in the request".to_string());
    let mut multipart = multipart.map_err(|_| no_file())?;

    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ServerError::InvalidRequest(format!("Invalid upload: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ServerError::InvalidRequest(format!("Invalid upload: {}", e)))?;
        upload = Some((file_name, bytes));
        break;
    }

    let (file_name, bytes) = upload.ok_or_else(no_file)?;
    if file_name.is_empty() {
        return Err(ServerError::InvalidRequest(
            "No file selected for uploading".to_string(),
        ));
    }

    tracing::debug!(file = %file_name, bytes = bytes.len(), "Processing uploaded image");

    match state.pipeline.extract_text(&bytes).await {
        Ok(extracted_text) => Ok(Json(ProcessImageResponse { extracted_text })),
        Err(TextProcessingError::Extraction(reason)) => {
            tracing::debug!(file = %file_name, %reason, "No text in image");
            Err(ServerError::Extraction(
                "Could not extract text from the image.".to_string(),
            ))
        }
        Err(e) => Err(ServerError::Internal(format!(
            "Failed to process image: {}",
            e
        ))),
    }
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let knowledge = state.pipeline.knowledge();

    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "domain": knowledge.domain_id(),
        "terms": knowledge.glossary().len(),
        "departments": knowledge.departments().len(),
        "visualAids": knowledge.visual_aids().len(),
        "translator": state.pipeline.translator_name(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_language() {
        assert_eq!(
            parse_language(None, Language::Spanish).unwrap(),
            Language::Spanish
        );
        assert_eq!(
            parse_language(Some("hi"), Language::English).unwrap(),
            Language::Hindi
        );
        assert!(matches!(
            parse_language(Some("xx"), Language::English),
            Err(ServerError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_translate_request_defaults() {
        let request: TranslateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.text.is_none());
        assert!(request.source.is_none());
        assert!(request.target.is_none());
    }
}
