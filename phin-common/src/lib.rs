//! # PhinAccords Common Library
//!
//! Shared code for the PhinAccords services including:
//! - Database connection, schema, and models
//! - Bilingual route table
//! - Slug generation and URL-segment heuristics
//! - Language type and cookie contract
//! - Configuration loading
//! - Error types

pub mod config;
pub mod db;
pub mod error;
pub mod lang;
pub mod routes;
pub mod slug;

pub use error::{Error, Result};
pub use lang::Language;
pub use routes::RouteTable;
