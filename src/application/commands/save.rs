// src/application/commands/save.rs
use std::sync::Arc;

use crate::domain::{
    errors::{DomainError, DomainResult},
    record::RecordStore,
    slug::{SlugAssigner, Sluggable},
    timestamps::{TimestampTracker, Timestamped},
};

/// Save lifecycle shared by every slugged, timestamped record type:
/// assign a slug if blank, stamp timestamps, then hand off to the store.
pub struct SaveService<R: Send + 'static> {
    store: Arc<dyn RecordStore<R>>,
    assigner: Arc<SlugAssigner>,
    tracker: TimestampTracker,
    save_retries: u32,
}

impl<R> SaveService<R>
where
    R: Sluggable + Timestamped + Clone + Send + Sync + 'static,
{
    pub fn new(
        store: Arc<dyn RecordStore<R>>,
        assigner: Arc<SlugAssigner>,
        tracker: TimestampTracker,
        save_retries: u32,
    ) -> Self {
        Self {
            store,
            assigner,
            tracker,
            save_retries,
        }
    }

    pub fn assigner(&self) -> &SlugAssigner {
        &self.assigner
    }

    /// Persists `record`.
    ///
    /// A generated slug that loses a race against a concurrent save hits the
    /// unique index and comes back as `Conflict`; it is then regenerated up to
    /// `save_retries` times. Slugs supplied by the caller are never replaced.
    pub async fn save(&self, mut record: R) -> DomainResult<R> {
        let mut retries_left = self.save_retries;
        loop {
            let generated = self.assigner.assign(&mut record).await?;
            self.tracker.touch(&mut record);

            match self.store.persist(record.clone()).await {
                Ok(saved) => {
                    tracing::debug!(
                        id = saved.record_id(),
                        slug = saved.slug().map(|s| s.as_str()),
                        "record saved"
                    );
                    return Ok(saved);
                }
                Err(DomainError::Conflict(reason)) if generated && retries_left > 0 => {
                    retries_left -= 1;
                    tracing::warn!(
                        slug = record.slug().map(|s| s.as_str()),
                        reason = %reason,
                        retries_left,
                        "slug taken by a concurrent save, regenerating"
                    );
                    record.clear_slug();
                }
                Err(err) => return Err(err),
            }
        }
    }
}
