//! Artist endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::pagination::{calculate_pagination, PAGE_SIZE};
use crate::resolver::resolve_artist;
use crate::AppState;
use phin_common::db::models::Artist;

/// Query parameters for the artist listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

/// Listing response with results and pagination metadata
#[derive(Debug, Serialize)]
pub struct ArtistListResponse {
    pub total_results: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub artists: Vec<Artist>,
}

/// GET /api/artists?page=N
pub async fn list_artists(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ArtistListResponse>, ArtistError> {
    let total_results: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artists")
        .fetch_one(&state.db)
        .await
        .map_err(|e| ArtistError::Database(e.to_string()))?;

    let p = calculate_pagination(total_results, query.page);

    let rows: Vec<(String, String, Option<String>, String)> = sqlx::query_as(
        "SELECT id, name, slug, created_at FROM artists
         ORDER BY name ASC LIMIT ? OFFSET ?",
    )
    .bind(PAGE_SIZE)
    .bind(p.offset)
    .fetch_all(&state.db)
    .await
    .map_err(|e| ArtistError::Database(e.to_string()))?;

    let artists = rows
        .into_iter()
        .map(|(id, name, slug, created_at)| Artist {
            id,
            name,
            slug,
            created_at,
        })
        .collect();

    Ok(Json(ArtistListResponse {
        total_results,
        page: p.page,
        page_size: PAGE_SIZE,
        total_pages: p.total_pages,
        artists,
    }))
}

/// GET /api/artists/:segment
pub async fn get_artist(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Result<Json<Artist>, ArtistError> {
    let artist = resolve_artist(&state.db, &segment)
        .await
        .map_err(|e| ArtistError::Database(e.to_string()))?;

    match artist {
        Some(artist) => Ok(Json(artist)),
        None => Err(ArtistError::NotFound(segment)),
    }
}

/// Artist endpoint errors
#[derive(Debug)]
pub enum ArtistError {
    NotFound(String),
    Database(String),
}

impl IntoResponse for ArtistError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ArtistError::NotFound(segment) => {
                (StatusCode::NOT_FOUND, format!("Artist not found: {}", segment))
            }
            ArtistError::Database(msg) => (
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
