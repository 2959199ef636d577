//! Blog slug rules: lowercase alphanumerics separated by single hyphens.

use thiserror::Error;

pub const SLUG_MAX_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("Slug is required")]
    Empty,
    #[error("Slug must be at most {SLUG_MAX_LEN} characters")]
    TooLong,
    #[error("Slug may only contain lowercase letters, numbers and single hyphens, and cannot start or end with a hyphen")]
    Format,
}

/// Equivalent to `^[a-z0-9]+(?:-[a-z0-9]+)*$` plus the length cap.
pub fn validate_slug(slug: &str) -> Result<(), SlugError> {
    if slug.is_empty() {
        return Err(SlugError::Empty);
    }
    if slug.chars().count() > SLUG_MAX_LEN {
        return Err(SlugError::TooLong);
    }
    let well_formed = slug
        .split('-')
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
    if !well_formed {
        return Err(SlugError::Format);
    }
    Ok(())
}

/// Derive a slug from a title: lowercase, ASCII alphanumerics kept, every
/// other run of characters collapsed into one hyphen.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_hyphen = false;
    for ch in title.chars() {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_lowercase() || lower.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(lower);
        } else {
            pending_hyphen = true;
        }
    }
    if out.len() > SLUG_MAX_LEN {
        out.truncate(SLUG_MAX_LEN);
        while out.ends_with('-') {
            out.pop();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        assert!(validate_slug("my-post").is_ok());
        assert!(validate_slug("post2024").is_ok());
        assert!(validate_slug("a-1-b-2").is_ok());
    }

    #[test]
    fn test_invalid_slugs() {
        assert_eq!(validate_slug("My Post"), Err(SlugError::Format));
        assert_eq!(validate_slug("my--post!"), Err(SlugError::Format));
        assert_eq!(validate_slug("-lead"), Err(SlugError::Format));
        assert_eq!(validate_slug("trail-"), Err(SlugError::Format));
        assert_eq!(validate_slug(""), Err(SlugError::Empty));
        assert_eq!(validate_slug(&"a".repeat(201)), Err(SlugError::TooLong));
        assert!(validate_slug(&"a".repeat(200)).is_ok());
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My Post"), "my-post");
        assert_eq!(slugify("  Hello,   World! 2024 "), "hello-world-2024");
        assert_eq!(slugify("Ünïcode & more"), "n-code-more");
        assert!(validate_slug(&slugify("Top 10: Amps -- reviewed")).is_ok());
    }
}
