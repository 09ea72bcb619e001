use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Characters, besides lowercase ASCII letters and digits, allowed in a slug.
pub const SEPARATOR_CHARS: &[char] = &['-', '_', '.', '~'];

pub(crate) fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || SEPARATOR_CHARS.contains(&c)
}

/// URL-safe record identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if let Some(bad) = value.chars().find(|c| !is_slug_char(*c)) {
            return Err(DomainError::Validation(format!(
                "slug contains a character that is not url-safe: {bad:?}"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}
