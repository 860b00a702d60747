//! Bilingual route table
//!
//! Internal routing is always keyed by the canonical English route name;
//! French is a surface form only. The table is immutable after startup
//! and shared by reference into the middleware — never rebuilt per
//! request, never a global singleton.

/// One canonical route with its per-language surface forms
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// Internal, language-neutral route name (expressed in English)
    pub canonical: &'static str,
    /// English surface path
    pub en: &'static str,
    /// French surface path
    pub fr: &'static str,
}

/// A dynamic-entity route: fixed localized prefixes around an opaque
/// trailing segment (slug or id) that is never translated.
#[derive(Debug, Clone)]
pub struct DynamicRoute {
    pub en_prefix: &'static str,
    pub fr_prefix: &'static str,
}

/// Static mapping between canonical routes and their English/French
/// surface forms, plus the dynamic-entity prefixes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    dynamic: Vec<DynamicRoute>,
}

impl RouteTable {
    /// Build the site route table. Called once at process start.
    pub fn new() -> Self {
        let entries = vec![
            RouteEntry { canonical: "/login", en: "/login", fr: "/connexion" },
            RouteEntry { canonical: "/register", en: "/register", fr: "/inscription" },
            RouteEntry { canonical: "/songs", en: "/songs", fr: "/chansons" },
            RouteEntry { canonical: "/piano-chords", en: "/piano-chords", fr: "/accords-piano" },
            RouteEntry { canonical: "/artists", en: "/artists", fr: "/artistes" },
            RouteEntry { canonical: "/about", en: "/about", fr: "/a-propos" },
            RouteEntry { canonical: "/resources", en: "/resources", fr: "/ressources" },
            RouteEntry { canonical: "/contact", en: "/contact", fr: "/contact" },
            RouteEntry { canonical: "/dashboard", en: "/dashboard", fr: "/tableau-de-bord" },
        ];

        let dynamic = vec![
            DynamicRoute { en_prefix: "/songs/", fr_prefix: "/chansons/" },
            DynamicRoute { en_prefix: "/artists/", fr_prefix: "/artistes/" },
        ];

        Self { entries, dynamic }
    }

    /// Map any incoming path (possibly a French surface form) to the
    /// canonical English-named route.
    ///
    /// Dynamic-entity prefixes are rewritten with the trailing segment
    /// preserved verbatim. Paths that match no known route are returned
    /// unchanged; unknown routes must not be dropped here.
    pub fn to_english(&self, path: &str) -> String {
        for dyn_route in &self.dynamic {
            if let Some(segment) = path.strip_prefix(dyn_route.fr_prefix) {
                if !segment.is_empty() {
                    return format!("{}{}", dyn_route.en_prefix, segment);
                }
            }
        }

        for entry in &self.entries {
            if entry.fr == path || entry.en == path {
                return entry.canonical.to_string();
            }
        }

        path.to_string()
    }

    /// Produce the localized surface form of a canonical route.
    ///
    /// Same identity fallback as `to_english`: unknown paths come back
    /// unchanged.
    pub fn localize(&self, path: &str, lang: crate::lang::Language) -> String {
        use crate::lang::Language;

        if lang == Language::En {
            // Canonical routes are already the English surface forms.
            return path.to_string();
        }

        for dyn_route in &self.dynamic {
            if let Some(segment) = path.strip_prefix(dyn_route.en_prefix) {
                if !segment.is_empty() {
                    return format!("{}{}", dyn_route.fr_prefix, segment);
                }
            }
        }

        for entry in &self.entries {
            if entry.canonical == path {
                return entry.fr.to_string();
            }
        }

        path.to_string()
    }

    /// All static entries, for diagnostics and tests
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}
