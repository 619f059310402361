// src/application/ports/util.rs

/// Turns a display name into a URL-safe base slug: lowercase ASCII,
/// diacritics folded, non-alphanumeric runs collapsed to one hyphen, no
/// leading or trailing hyphen. May return an empty string.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
