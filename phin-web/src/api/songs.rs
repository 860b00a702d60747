//! Song endpoints
//!
//! Listing is paginated at 100 rows per page with an optional artist
//! filter. Detail lookup goes through the resolver fallback chain and
//! renders 404 only after all three tiers miss.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::pagination::{calculate_pagination, PAGE_SIZE};
use crate::resolver::resolve_song;
use crate::AppState;
use phin_common::db::models::Song;

/// Query parameters for the song listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,

    /// Restrict the listing to one artist (UUID)
    pub artist_id: Option<String>,
}

fn default_page() -> i64 {
    1
}

/// Listing response with results and pagination metadata
#[derive(Debug, Serialize)]
pub struct SongListResponse {
    pub total_results: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub songs: Vec<Song>,
}

/// GET /api/songs?page=N&artist_id=UUID
pub async fn list_songs(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<SongListResponse>, ApiError> {
    if let Some(artist_id) = &query.artist_id {
        Uuid::parse_str(artist_id).map_err(|_| ApiError::InvalidArtistId(artist_id.clone()))?;
    }

    let total_results: i64 = match &query.artist_id {
        Some(artist_id) => {
            sqlx::query_scalar("SELECT COUNT(*) FROM songs WHERE artist_id = ?")
                .bind(artist_id)
                .fetch_one(&state.db)
                .await
        }
        None => {
            sqlx::query_scalar("SELECT COUNT(*) FROM songs")
                .fetch_one(&state.db)
                .await
        }
    }
    .map_err(|e| ApiError::Database(e.to_string()))?;

    let p = calculate_pagination(total_results, query.page);

    let rows: Vec<(String, String, String, Option<String>, String)> = match &query.artist_id {
        Some(artist_id) => {
            sqlx::query_as(
                "SELECT id, title, artist_id, slug, created_at FROM songs
                 WHERE artist_id = ? ORDER BY title ASC LIMIT ? OFFSET ?",
            )
            .bind(artist_id)
            .bind(PAGE_SIZE)
            .bind(p.offset)
            .fetch_all(&state.db)
            .await
        }
        None => {
            sqlx::query_as(
                "SELECT id, title, artist_id, slug, created_at FROM songs
                 ORDER BY title ASC LIMIT ? OFFSET ?",
            )
            .bind(PAGE_SIZE)
            .bind(p.offset)
            .fetch_all(&state.db)
            .await
        }
    }
    .map_err(|e| ApiError::Database(e.to_string()))?;

    let songs = rows
        .into_iter()
        .map(|(id, title, artist_id, slug, created_at)| Song {
            id,
            title,
            artist_id,
            slug,
            created_at,
        })
        .collect();

    Ok(Json(SongListResponse {
        total_results,
        page: p.page,
        page_size: PAGE_SIZE,
        total_pages: p.total_pages,
        songs,
    }))
}

/// GET /api/songs/:segment
///
/// The segment may be a slug, a legacy title-derived segment, or a raw
/// UUID; the resolver tries them in that order.
pub async fn get_song(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Result<Json<Song>, ApiError> {
    let song = resolve_song(&state.db, &segment)
        .await
        .map_err(|e| ApiError::Database(e.to_string()))?;

    match song {
        Some(song) => Ok(Json(song)),
        None => Err(ApiError::SongNotFound(segment)),
    }
}

/// Song endpoint errors
#[derive(Debug)]
pub enum ApiError {
    InvalidArtistId(String),
    SongNotFound(String),
    Database(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidArtistId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid artist_id (must be UUID): {}", id),
            ),
            ApiError::SongNotFound(segment) => {
                (StatusCode::NOT_FOUND, format!("Song not found: {}", segment))
            }
            ApiError::Database(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
