// src/domain/slug/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::config::SlugConfig;
use crate::domain::slug::repository::{SiblingSlugLookup, Sluggable};
use crate::domain::slug::value_objects::Slug;

/// Cuts `value` to at most `max_len` characters. Separator characters left
/// dangling by the cut are trimmed, including a multi-character separator
/// that the cut split in half.
pub fn truncate(value: &str, max_len: Option<usize>, separator: &str) -> String {
    match max_len {
        Some(max) if value.chars().count() > max => {
            let cut: String = value.chars().take(max).collect();
            cut.trim_end_matches(|c| separator.contains(c)).to_string()
        }
        _ => value.to_string(),
    }
}

/// Domain service producing slugs that are unique among sibling records.
pub struct SlugAssigner {
    lookup: Arc<dyn SiblingSlugLookup>,
    generator: Arc<dyn SlugGenerator>,
    config: SlugConfig,
}

impl SlugAssigner {
    pub fn new(
        lookup: Arc<dyn SiblingSlugLookup>,
        generator: Arc<dyn SlugGenerator>,
        config: SlugConfig,
    ) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self {
            lookup,
            generator,
            config,
        })
    }

    pub fn config(&self) -> &SlugConfig {
        &self.config
    }

    /// Normalised and truncated slug for `source`, before any collision check.
    pub fn base_candidate(&self, source: Option<&str>) -> DomainResult<String> {
        let field = self.config.value_field_name;
        let source = source
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DomainError::missing_source_field(field))?;

        let normalized = self.generator.slugify(source, &self.config.separator);
        let base = truncate(&normalized, self.config.max_length, &self.config.separator);
        if base.is_empty() {
            return Err(DomainError::missing_source_field(field));
        }
        Ok(base)
    }

    /// Assigns a slug to `record` unless it already has one.
    ///
    /// Returns `true` when a slug was generated during this call.
    pub async fn assign<R>(&self, record: &mut R) -> DomainResult<bool>
    where
        R: Sluggable + Send + ?Sized,
    {
        if !record.has_slug_field(self.config.slug_field_name) {
            return Err(DomainError::Validation(format!(
                "record has no slug field named `{}`",
                self.config.slug_field_name
            )));
        }
        if record.slug().is_some() {
            return Ok(false);
        }

        let source = record
            .source_value(self.config.value_field_name)
            .map(str::to_owned);
        let slug = self.resolve(source.as_deref(), record.record_id()).await?;
        record.set_slug(slug);
        Ok(true)
    }

    /// Finds the first free candidate: the base itself, then `base{sep}2`,
    /// `base{sep}3`, ... for at most `max_iterations` probes in total.
    pub async fn resolve(
        &self,
        source: Option<&str>,
        exclude_id: Option<i64>,
    ) -> DomainResult<Slug> {
        let base = self.base_candidate(source)?;
        let base_len = base.chars().count();
        let separator = self.config.separator.as_str();

        let first = Slug::new(base.clone())?;
        if !self.lookup.slug_exists(&first, exclude_id).await? {
            return Ok(first);
        }

        let mut attempts = 1u32;
        for counter in 2..=self.config.max_iterations {
            let suffix = format!("{separator}{counter}");
            let suffix_len = suffix.chars().count();

            let stem = match self.config.max_length {
                Some(max) if base_len + suffix_len > max => {
                    if suffix_len >= max {
                        break;
                    }
                    truncate(&base, Some(max - suffix_len), separator)
                }
                _ => base.clone(),
            };
            if stem.is_empty() {
                break;
            }

            let candidate = Slug::new(format!("{stem}{suffix}"))?;
            attempts += 1;
            tracing::debug!(
                field = self.config.slug_field_name,
                candidate = %candidate,
                attempt = attempts,
                "probing slug candidate"
            );
            if !self.lookup.slug_exists(&candidate, exclude_id).await? {
                return Ok(candidate);
            }
        }

        tracing::warn!(
            field = self.config.slug_field_name,
            base = %base,
            attempts,
            "unable to locate unique slug"
        );
        Err(DomainError::SlugExhausted { base, attempts })
    }
}
