// src/domain/slug/config.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::value_objects::{SEPARATOR_CHARS, Slug};

pub const DEFAULT_VALUE_FIELD: &str = "title";
pub const DEFAULT_SLUG_FIELD: &str = "slug";
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
pub const DEFAULT_SEPARATOR: &str = "-";
pub const DEFAULT_MAX_LENGTH: usize = 200;

/// Static slug settings for one record type.
///
/// Defaults: source field `title`, slug field `slug`, 1000 iterations,
/// `-` as separator and a 200 character slug column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugConfig {
    pub value_field_name: &'static str,
    pub slug_field_name: &'static str,
    pub max_iterations: u32,
    pub separator: String,
    /// `None` disables truncation entirely.
    pub max_length: Option<usize>,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            value_field_name: DEFAULT_VALUE_FIELD,
            slug_field_name: DEFAULT_SLUG_FIELD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            separator: DEFAULT_SEPARATOR.to_string(),
            max_length: Some(DEFAULT_MAX_LENGTH),
        }
    }
}

impl SlugConfig {
    pub fn with_value_field(mut self, name: &'static str) -> Self {
        self.value_field_name = name;
        self
    }

    pub fn with_slug_field(mut self, name: &'static str) -> Self {
        self.slug_field_name = name;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.max_iterations == 0 {
            return Err(DomainError::Validation(
                "max_iterations must be at least 1".into(),
            ));
        }
        if self.separator.is_empty() {
            return Err(DomainError::Validation("slug separator cannot be empty".into()));
        }
        if !self.separator.chars().all(|c| SEPARATOR_CHARS.contains(&c)) {
            return Err(DomainError::Validation(format!(
                "slug separator `{}` is not url-safe",
                self.separator
            )));
        }
        if self.max_length == Some(0) {
            return Err(DomainError::Validation(
                "slug max_length must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Returns an error when `len` exceeds the declared column width.
    pub fn check_length(&self, len: usize) -> DomainResult<()> {
        match self.max_length {
            Some(max) if len > max => Err(DomainError::Validation(format!(
                "{} exceeds the maximum length of {max} characters",
                self.slug_field_name
            ))),
            _ => Ok(()),
        }
    }

    /// Rejects slugs using characters other than lowercase ASCII letters,
    /// digits and the characters of the configured separator.
    pub fn check_chars(&self, slug: &Slug) -> DomainResult<()> {
        let allowed = |c: char| {
            c.is_ascii_lowercase() || c.is_ascii_digit() || self.separator.contains(c)
        };
        match slug.as_str().chars().find(|c| !allowed(*c)) {
            Some(bad) => Err(DomainError::Validation(format!(
                "{} may only use lowercase letters, digits and `{}`, found {bad:?}",
                self.slug_field_name, self.separator
            ))),
            None => Ok(()),
        }
    }
}
