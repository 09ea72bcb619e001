// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    /// The configured source field is absent, empty, or yields no usable slug.
    #[error("the source field {field} doesn't exist or is empty")]
    MissingSourceField { field: String },
    /// No free slug was found within the configured iteration budget.
    #[error("unable to locate unique slug for `{base}` after {attempts} attempts")]
    SlugExhausted { base: String, attempts: u32 },
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn missing_source_field(field: impl Into<String>) -> Self {
        Self::MissingSourceField {
            field: field.into(),
        }
    }

    /// True for the two data-integrity failures raised while assigning a slug.
    pub fn is_integrity_error(&self) -> bool {
        matches!(
            self,
            Self::MissingSourceField { .. } | Self::SlugExhausted { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_failures_are_integrity_errors() {
        assert!(DomainError::missing_source_field("title").is_integrity_error());
        assert!(
            DomainError::SlugExhausted {
                base: "foo".into(),
                attempts: 1000,
            }
            .is_integrity_error()
        );
        assert!(!DomainError::Conflict("slug already exists".into()).is_integrity_error());
    }

    #[test]
    fn messages_name_the_field() {
        let err = DomainError::missing_source_field("headline");
        assert_eq!(
            err.to_string(),
            "the source field headline doesn't exist or is empty"
        );
    }
}
