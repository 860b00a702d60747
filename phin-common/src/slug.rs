//! Slug generation and URL-segment heuristics
//!
//! One canonical normalization for song/artist titles. Earlier call sites
//! disagreed on edge cases (strip-then-hyphenate vs hyphenate-then-strip);
//! every producer and consumer now goes through `slugify`.

use uuid::Uuid;

/// Generate a URL-safe slug from a human-readable title.
///
/// Lowercases the input, drops every character that is not a lowercase
/// ASCII letter, digit, or whitespace, collapses whitespace runs into a
/// single hyphen, and trims leading/trailing hyphens.
///
/// Output contains only `[a-z0-9-]` and never starts or ends with `-`.
/// Accented letters are dropped, not transliterated: "Étoile" → "toile".
/// The result is empty when the title has no ASCII alphanumerics at all;
/// callers must treat an empty slug as a fallback condition.
///
/// No uniqueness is enforced here. Distinct titles can normalize to the
/// same slug; disambiguation is the store's concern, not this function's.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else if ch.is_whitespace() {
            pending_hyphen = true;
        }
        // Everything else (punctuation, accented letters) is dropped.
    }

    slug
}

/// Reconstruct a title candidate from a URL path segment.
///
/// Splits on hyphens and capitalizes the first letter of each token.
/// This is the resolver's tier-2 heuristic for legacy rows whose slug
/// column was never populated: "amazing-grace" → "Amazing Grace".
pub fn title_candidate(segment: &str) -> String {
    segment
        .split('-')
        .filter(|token| !token.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Check whether a path segment is an RFC 4122 UUID in canonical
/// hyphenated form.
///
/// Old shared links embedded the raw row identifier instead of a slug;
/// the resolver's tier-3 lookup only fires when this predicate holds.
/// Non-hyphenated and braced UUID spellings are rejected on purpose:
/// only the canonical 36-character form ever appeared in links.
pub fn is_uuid_segment(segment: &str) -> bool {
    segment.len() == 36 && Uuid::try_parse(segment).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Amazing Grace"), "amazing-grace");
    }

    #[test]
    fn test_slugify_strips_punctuation() {
        assert_eq!(slugify("Amazing Grace!!"), "amazing-grace");
        assert_eq!(slugify("What a Friend (We Have)"), "what-a-friend-we-have");
    }

    #[test]
    fn test_slugify_drops_accents() {
        // Accented letters are dropped, not transliterated
        assert_eq!(slugify("  Étoile  "), "toile");
        assert_eq!(slugify("Agnus Déi"), "agnus-di");
    }

    #[test]
    fn test_slugify_collapses_whitespace() {
        assert_eq!(slugify("How   Great \t Thou\nArt"), "how-great-thou-art");
    }

    #[test]
    fn test_slugify_no_leading_trailing_hyphens() {
        assert_eq!(slugify("  Oceans  "), "oceans");
        assert_eq!(slugify("!!! Hosanna !!!"), "hosanna");
    }

    #[test]
    fn test_slugify_digits_survive() {
        assert_eq!(slugify("Psalm 23"), "psalm-23");
    }

    #[test]
    fn test_slugify_empty_when_no_alphanumerics() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_idempotent_on_valid_slug() {
        let once = slugify("Total Praise");
        let twice = slugify(&once);
        assert_eq!(once, twice);
        assert_eq!(twice, "total-praise");
    }

    #[test]
    fn test_title_candidate() {
        assert_eq!(title_candidate("amazing-grace"), "Amazing Grace");
        assert_eq!(title_candidate("psalm-23"), "Psalm 23");
    }

    #[test]
    fn test_title_candidate_skips_empty_tokens() {
        assert_eq!(title_candidate("--oceans--"), "Oceans");
    }

    #[test]
    fn test_is_uuid_segment() {
        assert!(is_uuid_segment("550e8400-e29b-41d4-a716-446655440000"));
        assert!(!is_uuid_segment("amazing-grace"));
        assert!(!is_uuid_segment("550e8400e29b41d4a716446655440000")); // no hyphens
        assert!(!is_uuid_segment(""));
    }
}
