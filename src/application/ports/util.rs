// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Lowercase, URL-safe rendition of `input` with words joined by `separator`.
    fn slugify(&self, input: &str, separator: &str) -> String;
}
