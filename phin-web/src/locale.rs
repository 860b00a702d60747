//! Locale middleware for the public site
//!
//! Every inbound request passes through this tower layer exactly once.
//! Decision order:
//! 1. Bypass: API, asset, admin, and dashboard traffic is never touched.
//! 2. Already localized (`/en/...` or `/fr/...`): strip the prefix, map a
//!    French surface path back to its canonical English route, and
//!    rewrite the request in place. The browser-visible URL stays as
//!    given; internal routing is always keyed in English.
//! 3. No language prefix: redirect to the localized form of the path
//!    under an explicit language segment, so shareable links always
//!    carry one.
//!
//! The detected or defaulted language is persisted in a one-year cookie
//! on every rewrite and redirect. This layer never manufactures a 404;
//! unknown paths pass through with their structure preserved.

use axum::{
    body::Body,
    extract::Request,
    http::{
        header::{COOKIE, LOCATION, SET_COOKIE},
        HeaderValue, StatusCode, Uri,
    },
    response::Response,
};
use phin_common::lang::{Language, LANGUAGE_COOKIE, LANGUAGE_COOKIE_MAX_AGE};
use phin_common::routes::RouteTable;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Path prefixes that skip localization entirely
const BYPASS_PREFIXES: &[&str] = &["/api", "/_assets", "/static", "/admin", "/dashboard"];

/// Asset extensions that skip localization regardless of path
const ASSET_EXTENSIONS: &[&str] = &[
    ".css", ".js", ".mjs", ".map", ".png", ".jpg", ".jpeg", ".gif", ".svg", ".ico", ".webp",
    ".avif", ".woff", ".woff2", ".ttf", ".otf", ".mp3", ".mp4", ".webm", ".pdf", ".txt", ".xml",
];

/// Tower layer wiring the route table and site default language into
/// the locale middleware. The table is built once at startup and shared
/// by reference; nothing here is rebuilt per request.
#[derive(Clone)]
pub struct LocaleLayer {
    routes: Arc<RouteTable>,
    default_language: Language,
}

impl LocaleLayer {
    pub fn new(routes: Arc<RouteTable>, default_language: Language) -> Self {
        Self {
            routes,
            default_language,
        }
    }
}

impl<S> Layer<S> for LocaleLayer {
    type Service = LocaleMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LocaleMiddleware {
            inner,
            routes: Arc::clone(&self.routes),
            default_language: self.default_language,
        }
    }
}

/// Tower service implementing the per-request localization decision
#[derive(Clone)]
pub struct LocaleMiddleware<S> {
    inner: S,
    routes: Arc<RouteTable>,
    default_language: Language,
}

impl<S> Service<Request> for LocaleMiddleware<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request) -> Self::Future {
        let routes = Arc::clone(&self.routes);
        let default_language = self.default_language;
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let path = request.uri().path().to_string();

            // 1. Bypass: asset/API/admin traffic must never be rewritten
            //    or redirected (would break asset loading and API calls).
            if is_bypassed(&path) {
                return inner.call(request).await;
            }

            // 2. Already localized: serve the canonical route directly,
            //    leaving the externally visible URL as given.
            if let Some((lang, inner_path)) = split_language_prefix(&path) {
                let canonical = match lang {
                    Language::Fr => routes.to_english(&inner_path),
                    Language::En => inner_path,
                };

                if let Some(uri) = replace_path(request.uri(), &canonical) {
                    *request.uri_mut() = uri;
                } else {
                    tracing::warn!("Unrewritable request path: {}", path);
                }

                let mut response = inner.call(request).await?;
                set_language_cookie(&mut response, lang);
                return Ok(response);
            }

            // 3. No language prefix: redirect to an explicitly localized
            //    URL so bookmarked links always carry a language segment.
            let lang = cookie_language(&request).unwrap_or(default_language);
            let localized = routes.localize(&path, lang);
            let target = match request.uri().query() {
                Some(q) => format!("/{}{}?{}", lang.as_str(), localized, q),
                None => format!("/{}{}", lang.as_str(), localized),
            };

            tracing::debug!("Redirecting {} -> {}", path, target);
            Ok(redirect_response(&target, lang))
        })
    }
}

/// Check whether a path belongs to an excluded namespace or names a
/// static asset.
fn is_bypassed(path: &str) -> bool {
    if BYPASS_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return true;
    }
    ASSET_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// If the first path segment is a language code, return the language
/// and the remaining path ("/fr/chansons" -> (Fr, "/chansons")).
/// A bare "/en" or "/fr" maps to the site root.
fn split_language_prefix(path: &str) -> Option<(Language, String)> {
    let rest = path.strip_prefix('/')?;
    let (first, remainder) = match rest.split_once('/') {
        Some((first, remainder)) => (first, format!("/{remainder}")),
        None => (rest, String::from("/")),
    };
    Language::parse(first).map(|lang| (lang, remainder))
}

/// Read the language preference cookie. Malformed or missing values
/// silently yield None; the caller applies the site default.
fn cookie_language(request: &Request) -> Option<Language> {
    for header in request.headers().get_all(COOKIE) {
        let Ok(value) = header.to_str() else { continue };
        for pair in value.split(';') {
            if let Some((name, code)) = pair.trim().split_once('=') {
                if name == LANGUAGE_COOKIE {
                    return Language::parse(code);
                }
            }
        }
    }
    None
}

/// Swap the path of a request URI, preserving the query string.
fn replace_path(uri: &Uri, new_path: &str) -> Option<Uri> {
    let path_and_query = match uri.query() {
        Some(q) => format!("{new_path}?{q}"),
        None => new_path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse().ok()?);
    Uri::from_parts(parts).ok()
}

/// Append the one-year language cookie to a response.
fn set_language_cookie(response: &mut Response, lang: Language) {
    let cookie = format!(
        "{}={}; Path=/; Max-Age={}",
        LANGUAGE_COOKIE,
        lang.as_str(),
        LANGUAGE_COOKIE_MAX_AGE
    );
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        response.headers_mut().append(SET_COOKIE, value);
    }
}

/// Build a 307 redirect carrying the language cookie.
fn redirect_response(target: &str, lang: Language) -> Response {
    let mut response = Response::builder()
        .status(StatusCode::TEMPORARY_REDIRECT)
        .body(Body::empty())
        .unwrap_or_default();

    if let Ok(value) = HeaderValue::from_str(target) {
        response.headers_mut().insert(LOCATION, value);
    }
    set_language_cookie(&mut response, lang);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bypass_prefixes() {
        assert!(is_bypassed("/api/songs"));
        assert!(is_bypassed("/static/logo.svg"));
        assert!(is_bypassed("/admin/users"));
        assert!(is_bypassed("/dashboard"));
        assert!(is_bypassed("/_assets/chunk-abc123.js"));
        assert!(!is_bypassed("/songs"));
    }

    #[test]
    fn test_bypass_asset_extensions() {
        assert!(is_bypassed("/favicon.ico"));
        assert!(is_bypassed("/fonts/inter.woff2"));
        assert!(is_bypassed("/robots.txt"));
        assert!(!is_bypassed("/chansons/amazing-grace"));
    }

    #[test]
    fn test_split_language_prefix() {
        assert_eq!(
            split_language_prefix("/fr/chansons"),
            Some((Language::Fr, "/chansons".to_string()))
        );
        assert_eq!(
            split_language_prefix("/en/songs/amazing-grace"),
            Some((Language::En, "/songs/amazing-grace".to_string()))
        );
        assert_eq!(split_language_prefix("/en"), Some((Language::En, "/".to_string())));
        assert_eq!(split_language_prefix("/songs"), None);
        assert_eq!(split_language_prefix("/"), None);
    }
}
