use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "../../site/"]
struct SiteAssets;

/// Serve the embedded site. `/hire-me` and `/contact` resolve to their
/// `.html` pages; anything else unknown falls back to index.html.
pub async fn static_handler(uri: axum::http::Uri) -> Response {
    let path = uri.path().trim_start_matches('/').trim_end_matches('/');

    let candidates = [path.to_string(), format!("{path}.html")];
    for candidate in candidates.iter().filter(|c| !c.is_empty()) {
        if let Some(content) = <SiteAssets as Embed>::get(candidate) {
            let mime = mime_guess::from_path(candidate).first_or_octet_stream();
            return (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.as_ref())],
                content.data.to_vec(),
            )
                .into_response();
        }
    }

    match <SiteAssets as Embed>::get("index.html") {
        Some(content) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html")],
            content.data.to_vec(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "site not found").into_response(),
    }
}
