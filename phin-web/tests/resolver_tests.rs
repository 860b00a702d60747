//! Integration tests for the song/artist resolver fallback chain
//!
//! Seeds an in-memory store with a slugged row, a legacy NULL-slug row,
//! and a row reachable only by raw identifier, then exercises each tier
//! and the exhausted-chain outcome.

use sqlx::SqlitePool;

use phin_web::resolver::{resolve_artist, resolve_song};

const ARTIST_ID: &str = "7c9e6679-7425-40de-944b-e07fc1f90ae7";
const SLUGGED_SONG_ID: &str = "550e8400-e29b-41d4-a716-446655440000";
const LEGACY_SONG_ID: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
const ORPHAN_SONG_ID: &str = "6ba7b811-9dad-11d1-80b4-00c04fd430c8";

async fn setup_test_db() -> SqlitePool {
    let pool = phin_common::db::connect_memory()
        .await
        .expect("Should create in-memory database");

    sqlx::query("INSERT INTO artists (id, name, slug, created_at) VALUES (?, ?, ?, ?)")
        .bind(ARTIST_ID)
        .bind("Richard Smallwood")
        .bind(None::<String>) // legacy artist row, no slug
        .bind("2020-03-01 00:00:00")
        .execute(&pool)
        .await
        .expect("Should insert artist");

    // Row with a backfilled slug
    sqlx::query("INSERT INTO songs (id, title, artist_id, slug, created_at) VALUES (?, ?, ?, ?, ?)")
        .bind(SLUGGED_SONG_ID)
        .bind("Amazing Grace")
        .bind(ARTIST_ID)
        .bind("amazing-grace")
        .bind("2024-01-02 00:00:00")
        .execute(&pool)
        .await
        .expect("Should insert slugged song");

    // Legacy row predating slug backfill
    sqlx::query("INSERT INTO songs (id, title, artist_id, slug, created_at) VALUES (?, ?, ?, ?, ?)")
        .bind(LEGACY_SONG_ID)
        .bind("Total Praise")
        .bind(ARTIST_ID)
        .bind(None::<String>)
        .bind("2019-06-15 00:00:00")
        .execute(&pool)
        .await
        .expect("Should insert legacy song");

    // Row only reachable by identifier (slug and title deliberately
    // unrelated to any segment used below)
    sqlx::query("INSERT INTO songs (id, title, artist_id, slug, created_at) VALUES (?, ?, ?, ?, ?)")
        .bind(ORPHAN_SONG_ID)
        .bind("Hosanna")
        .bind(ARTIST_ID)
        .bind("hosanna")
        .bind("2021-09-09 00:00:00")
        .execute(&pool)
        .await
        .expect("Should insert orphan song");

    pool
}

// =============================================================================
// Tier 1: exact slug match
// =============================================================================

#[tokio::test]
async fn test_exact_slug_match() {
    let pool = setup_test_db().await;

    let song = resolve_song(&pool, "amazing-grace")
        .await
        .expect("Should resolve")
        .expect("Should find song");

    assert_eq!(song.id, SLUGGED_SONG_ID);
    assert_eq!(song.title, "Amazing Grace");
}

#[tokio::test]
async fn test_exact_slug_wins_over_title_similarity() {
    let pool = setup_test_db().await;

    // A legacy row whose title would also match the segment via tier 2
    sqlx::query("INSERT INTO songs (id, title, artist_id, slug, created_at) VALUES (?, ?, ?, ?, ?)")
        .bind("9f8b1c2d-0000-4000-8000-000000000001")
        .bind("Amazing Grace Medley")
        .bind(ARTIST_ID)
        .bind(None::<String>)
        .bind("2018-01-01 00:00:00")
        .execute(&pool)
        .await
        .expect("Should insert decoy");

    let song = resolve_song(&pool, "amazing-grace")
        .await
        .expect("Should resolve")
        .expect("Should find song");

    // Tier 1 short-circuits; the decoy is never considered
    assert_eq!(song.id, SLUGGED_SONG_ID);
}

// =============================================================================
// Tier 2: title-similarity match
// =============================================================================

#[tokio::test]
async fn test_title_similarity_for_null_slug_row() {
    let pool = setup_test_db().await;

    let song = resolve_song(&pool, "total-praise")
        .await
        .expect("Should resolve")
        .expect("Should find legacy song");

    assert_eq!(song.id, LEGACY_SONG_ID);
    assert_eq!(song.slug, None);
}

#[tokio::test]
async fn test_title_similarity_is_case_insensitive_substring() {
    let pool = setup_test_db().await;

    // "praise" reconstructs to "Praise", a substring of "Total Praise"
    let song = resolve_song(&pool, "praise")
        .await
        .expect("Should resolve")
        .expect("Should find legacy song");

    assert_eq!(song.id, LEGACY_SONG_ID);
}

// =============================================================================
// Tier 3: identifier match
// =============================================================================

#[tokio::test]
async fn test_uuid_segment_resolves_by_id() {
    let pool = setup_test_db().await;

    let song = resolve_song(&pool, ORPHAN_SONG_ID)
        .await
        .expect("Should resolve")
        .expect("Should find song by id");

    assert_eq!(song.id, ORPHAN_SONG_ID);
    assert_eq!(song.title, "Hosanna");
}

#[tokio::test]
async fn test_uuid_shaped_segment_with_no_row_misses() {
    let pool = setup_test_db().await;

    let song = resolve_song(&pool, "00000000-0000-4000-8000-000000000000")
        .await
        .expect("Should resolve");

    assert!(song.is_none());
}

// =============================================================================
// Exhausted chain
// =============================================================================

#[tokio::test]
async fn test_all_tiers_miss_returns_none() {
    let pool = setup_test_db().await;

    let song = resolve_song(&pool, "xyzzy-quux")
        .await
        .expect("Should resolve");

    assert!(song.is_none());
}

#[tokio::test]
async fn test_wildcard_segment_is_not_a_wildcard() {
    let pool = setup_test_db().await;

    // "%" must be treated as a literal, not a match-anything pattern;
    // no title contains a percent sign, so every tier misses
    let song = resolve_song(&pool, "%").await.expect("Should resolve");
    assert!(song.is_none(), "wildcard segment must not match any song");

    let artist = resolve_artist(&pool, "%").await.expect("Should resolve");
    assert!(artist.is_none(), "wildcard segment must not match any artist");
}

#[tokio::test]
async fn test_underscore_segment_is_literal() {
    let pool = setup_test_db().await;

    // With "_" as a wildcard this would match "Total Praise"; as a
    // literal it matches nothing
    let song = resolve_song(&pool, "total_praise")
        .await
        .expect("Should resolve");
    assert!(song.is_none());
}

#[tokio::test]
async fn test_empty_segment_returns_none() {
    let pool = setup_test_db().await;

    let song = resolve_song(&pool, "").await.expect("Should resolve");
    assert!(song.is_none());
}

// =============================================================================
// Artist resolution
// =============================================================================

#[tokio::test]
async fn test_artist_resolved_by_name_similarity() {
    let pool = setup_test_db().await;

    // Artist row has no slug; tier 2 reconstructs "Richard Smallwood"
    let artist = resolve_artist(&pool, "richard-smallwood")
        .await
        .expect("Should resolve")
        .expect("Should find artist");

    assert_eq!(artist.id, ARTIST_ID);
}

#[tokio::test]
async fn test_artist_resolved_by_id() {
    let pool = setup_test_db().await;

    let artist = resolve_artist(&pool, ARTIST_ID)
        .await
        .expect("Should resolve")
        .expect("Should find artist by id");

    assert_eq!(artist.name, "Richard Smallwood");
}

#[tokio::test]
async fn test_artist_all_tiers_miss() {
    let pool = setup_test_db().await;

    let artist = resolve_artist(&pool, "nobody-here")
        .await
        .expect("Should resolve");

    assert!(artist.is_none());
}
