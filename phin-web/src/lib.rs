//! phin-web library - PhinAccords public site service
//!
//! Serves the bilingual public site: every request passes through the
//! locale middleware (bypass / rewrite / redirect), pages and the JSON
//! API resolve songs and artists through the slug fallback chain.

use axum::Router;
use sqlx::SqlitePool;
use std::sync::Arc;

use phin_common::lang::Language;
use phin_common::routes::RouteTable;

pub mod api;
pub mod locale;
pub mod pages;
pub mod pagination;
pub mod resolver;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Route table, built once at startup
    pub routes: Arc<RouteTable>,
    /// Language used when no cookie is present
    pub default_language: Language,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, default_language: Language) -> Self {
        Self {
            db,
            routes: Arc::new(RouteTable::new()),
            default_language,
        }
    }
}

/// Build application router
///
/// The locale layer wraps everything; handlers below it only ever see
/// canonical English-named routes (or bypassed namespaces).
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    let api = Router::new()
        .route("/api/songs", get(api::list_songs))
        .route("/api/songs/:segment", get(api::get_song))
        .route("/api/artists", get(api::list_artists))
        .route("/api/artists/:segment", get(api::get_artist))
        .merge(api::health_routes());

    let pages = Router::new()
        .route("/songs/:segment", get(pages::song_page))
        .route("/artists/:segment", get(pages::artist_page))
        .fallback(pages::render_page);

    // The locale layer must run before route matching (its URI rewrite
    // decides which route fires), so it wraps the routed service rather
    // than being added with `Router::layer`, which runs after routing.
    let locale_layer = locale::LocaleLayer::new(Arc::clone(&state.routes), state.default_language);
    let routed = Router::new().merge(api).merge(pages).with_state(state);

    Router::new()
        .fallback_service(tower::Layer::layer(&locale_layer, routed))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
