use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "../../frontend/dist/"]
struct FrontendAssets;

fn asset(path: &str) -> Option<Response> {
    let content = <FrontendAssets as Embed>::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    Some(
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, mime.as_ref().to_string())],
            content.data.into_owned(),
        )
            .into_response(),
    )
}

/// Serve embedded frontend assets. Unknown non-API paths get index.html so
/// the single-page app can boot from any URL.
pub async fn static_handler(uri: axum::http::Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if path.starts_with("api/") {
        let body = serde_json::json!({ "error": format!("no route for /{path}") });
        return (StatusCode::NOT_FOUND, axum::Json(body)).into_response();
    }

    if !path.is_empty() {
        if let Some(resp) = asset(path) {
            return resp;
        }
    }

    asset("index.html")
        .unwrap_or_else(|| (StatusCode::NOT_FOUND, "frontend not built").into_response())
}
