//! Song and artist resolution from URL path segments
//!
//! The store accumulated rows before slugs existed, then slugs were
//! backfilled with an imperfect generator, so exact lookup alone misses
//! old shared links. Each resolver tries a fixed chain and stops at the
//! first hit:
//! 1. exact equality on the stored slug;
//! 2. case-insensitive substring match against titles, reconstructed
//!    from the segment (legacy rows with NULL or stale slugs);
//! 3. primary-identifier lookup when the segment is a canonical UUID
//!    (old links embedded raw identifiers).
//!
//! Resolution is deterministic and yields at most one row; all misses
//! surface as `Ok(None)` and the caller renders the not-found page.

use phin_common::db::models::{Artist, Song};
use phin_common::slug::{is_uuid_segment, title_candidate};
use phin_common::Result;
use sqlx::SqlitePool;

type SongRow = (String, String, String, Option<String>, String);
type ArtistRow = (String, String, Option<String>, String);

fn song_from_row(row: SongRow) -> Song {
    Song {
        id: row.0,
        title: row.1,
        artist_id: row.2,
        slug: row.3,
        created_at: row.4,
    }
}

fn artist_from_row(row: ArtistRow) -> Artist {
    Artist {
        id: row.0,
        name: row.1,
        slug: row.2,
        created_at: row.3,
    }
}

/// Escape LIKE metacharacters so the candidate matches literally.
/// Segments can carry `%` or `_` straight from the URL; without this
/// they act as wildcards and a junk segment resolves to an arbitrary
/// row instead of NotFound.
fn escape_like(candidate: &str) -> String {
    candidate
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Resolve a song from an opaque path segment.
pub async fn resolve_song(pool: &SqlitePool, segment: &str) -> Result<Option<Song>> {
    // Tier 1: exact slug match
    let row = sqlx::query_as::<_, SongRow>(
        "SELECT id, title, artist_id, slug, created_at FROM songs WHERE slug = ? LIMIT 1",
    )
    .bind(segment)
    .fetch_optional(pool)
    .await?;

    if let Some(row) = row {
        return Ok(Some(song_from_row(row)));
    }

    // Tier 2: title-similarity match. Oldest row first: the rows this
    // tier exists for predate slug backfill.
    let candidate = title_candidate(segment);
    if !candidate.is_empty() {
        let row = sqlx::query_as::<_, SongRow>(
            "SELECT id, title, artist_id, slug, created_at FROM songs
             WHERE title LIKE ? ESCAPE '\\' ORDER BY created_at ASC LIMIT 1",
        )
        .bind(format!("%{}%", escape_like(&candidate)))
        .fetch_optional(pool)
        .await?;

        if let Some(row) = row {
            return Ok(Some(song_from_row(row)));
        }
    }

    // Tier 3: raw identifier lookup for UUID-shaped segments
    if is_uuid_segment(segment) {
        let row = sqlx::query_as::<_, SongRow>(
            "SELECT id, title, artist_id, slug, created_at FROM songs WHERE id = ? LIMIT 1",
        )
        .bind(segment)
        .fetch_optional(pool)
        .await?;

        if let Some(row) = row {
            return Ok(Some(song_from_row(row)));
        }
    }

    Ok(None)
}

/// Resolve an artist from an opaque path segment. Same chain as songs,
/// with the artist name standing in for the title.
pub async fn resolve_artist(pool: &SqlitePool, segment: &str) -> Result<Option<Artist>> {
    let row = sqlx::query_as::<_, ArtistRow>(
        "SELECT id, name, slug, created_at FROM artists WHERE slug = ? LIMIT 1",
    )
    .bind(segment)
    .fetch_optional(pool)
    .await?;

    if let Some(row) = row {
        return Ok(Some(artist_from_row(row)));
    }

    let candidate = title_candidate(segment);
    if !candidate.is_empty() {
        let row = sqlx::query_as::<_, ArtistRow>(
            "SELECT id, name, slug, created_at FROM artists
             WHERE name LIKE ? ESCAPE '\\' ORDER BY created_at ASC LIMIT 1",
        )
        .bind(format!("%{}%", escape_like(&candidate)))
        .fetch_optional(pool)
        .await?;

        if let Some(row) = row {
            return Ok(Some(artist_from_row(row)));
        }
    }

    if is_uuid_segment(segment) {
        let row = sqlx::query_as::<_, ArtistRow>(
            "SELECT id, name, slug, created_at FROM artists WHERE id = ? LIMIT 1",
        )
        .bind(segment)
        .fetch_optional(pool)
        .await?;

        if let Some(row) = row {
            return Ok(Some(artist_from_row(row)));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_metacharacters() {
        assert_eq!(escape_like("100% Praise"), "100\\% Praise");
        assert_eq!(escape_like("Total_praise"), "Total\\_praise");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("Amazing Grace"), "Amazing Grace");
    }
}
