//! HTTP API handlers for phin-web

pub mod artists;
pub mod health;
pub mod songs;

pub use artists::{get_artist, list_artists};
pub use health::health_routes;
pub use songs::{get_song, list_songs};
