//! Public page handlers
//!
//! These stand in for the page-rendering layer: by the time a request
//! reaches them the locale middleware has already rewritten it to its
//! canonical English-named route. Each handler reports the canonical
//! route it served, which is what the rewrite tests observe.

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::resolver::{resolve_artist, resolve_song};
use crate::AppState;

/// Song detail page. 404 when the resolver chain exhausts.
pub async fn song_page(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Response {
    match resolve_song(&state.db, &segment).await {
        Ok(Some(song)) => Json(json!({
            "route": format!("/songs/{}", segment),
            "song": song,
        }))
        .into_response(),
        Ok(None) => not_found(&format!("/songs/{}", segment)),
        Err(e) => {
            tracing::error!("Song page resolution failed: {}", e);
            server_error()
        }
    }
}

/// Artist detail page. 404 when the resolver chain exhausts.
pub async fn artist_page(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Response {
    match resolve_artist(&state.db, &segment).await {
        Ok(Some(artist)) => Json(json!({
            "route": format!("/artists/{}", segment),
            "artist": artist,
        }))
        .into_response(),
        Ok(None) => not_found(&format!("/artists/{}", segment)),
        Err(e) => {
            tracing::error!("Artist page resolution failed: {}", e);
            server_error()
        }
    }
}

/// Every other page: echo the canonical route. Unknown routes are this
/// layer's problem, never the middleware's, so even unrecognized paths
/// arrive here intact.
pub async fn render_page(uri: Uri) -> Json<serde_json::Value> {
    Json(json!({
        "route": uri.path(),
    }))
}

fn not_found(route: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": format!("Not found: {}", route),
        })),
    )
        .into_response()
}

fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Internal error",
        })),
    )
        .into_response()
}
