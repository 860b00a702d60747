//! Database models

use serde::{Deserialize, Serialize};

/// A song row in the record store.
///
/// `slug` is nullable: rows created before slug backfill carry NULL and
/// are only reachable through the resolver's title-similarity tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist_id: String,
    pub slug: Option<String>,
    pub created_at: String,
}

/// An artist row in the record store. Same legacy-slug caveat as Song.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
    pub created_at: String,
}
