//! CORS policy for the `/api` surface.
//!
//! Cross-origin requests are permitted from any origin by default; an
//! `ALLOWED_ORIGINS` environment variable (comma-separated origins)
//! switches to an allow-list.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub fn allow_any() -> CorsLayer {
    layer(AllowOrigin::any())
}

pub fn allow_list(origins: Vec<HeaderValue>) -> CorsLayer {
    layer(AllowOrigin::list(origins))
}

/// Policy from `ALLOWED_ORIGINS`; unset means any origin.
///
/// Entries that do not parse as header values are skipped.
pub fn from_env() -> CorsLayer {
    match std::env::var("ALLOWED_ORIGINS") {
        Ok(raw) => allow_list(
            raw.split(',')
                .filter_map(|origin| origin.trim().parse::<HeaderValue>().ok())
                .collect(),
        ),
        Err(_) => allow_any(),
    }
}

fn layer(origin: AllowOrigin) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}
