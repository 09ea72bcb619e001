// src/domain/timestamps.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::time::Clock;

/// Created/updated pair carried by every timestamped record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamps {
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Timestamps {
    pub fn new(created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }
    }

    /// Sets `created_at` on the first call and `updated_at` on every call.
    /// `updated_at` never moves backwards.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if self.created_at.is_none() {
            self.created_at = Some(now);
        }
        self.updated_at = Some(match self.updated_at {
            Some(previous) if previous > now => previous,
            _ => now,
        });
    }
}

pub trait Timestamped {
    fn timestamps(&self) -> &Timestamps;
    fn timestamps_mut(&mut self) -> &mut Timestamps;
}

/// Stamps records from the injected clock before they are persisted.
#[derive(Clone)]
pub struct TimestampTracker {
    clock: Arc<dyn Clock>,
}

impl TimestampTracker {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn touch<R: Timestamped + ?Sized>(&self, record: &mut R) -> DateTime<Utc> {
        let now = self.clock.now();
        record.timestamps_mut().touch(now);
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::sync::Mutex;

    struct SteppingClock {
        next: Mutex<DateTime<Utc>>,
        step: Duration,
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            let mut next = self.next.lock().unwrap();
            let now = *next;
            *next = now + self.step;
            now
        }
    }

    struct Note {
        timestamps: Timestamps,
    }

    impl Timestamped for Note {
        fn timestamps(&self) -> &Timestamps {
            &self.timestamps
        }

        fn timestamps_mut(&mut self) -> &mut Timestamps {
            &mut self.timestamps
        }
    }

    fn tracker(step: Duration) -> (TimestampTracker, DateTime<Utc>) {
        let start = Utc::now();
        let clock = SteppingClock {
            next: Mutex::new(start),
            step,
        };
        (TimestampTracker::new(Arc::new(clock)), start)
    }

    #[test]
    fn first_touch_sets_both_fields() {
        let (tracker, start) = tracker(Duration::seconds(1));
        let mut note = Note {
            timestamps: Timestamps::default(),
        };
        tracker.touch(&mut note);
        assert_eq!(note.timestamps().created_at, Some(start));
        assert_eq!(note.timestamps().updated_at, Some(start));
    }

    #[test]
    fn later_touches_only_move_updated_at() {
        let (tracker, start) = tracker(Duration::seconds(1));
        let mut note = Note {
            timestamps: Timestamps::default(),
        };
        tracker.touch(&mut note);
        tracker.touch(&mut note);
        let last = tracker.touch(&mut note);
        assert_eq!(note.timestamps.created_at, Some(start));
        assert_eq!(note.timestamps.updated_at, Some(last));
        assert_eq!(last, start + Duration::seconds(2));
    }

    #[test]
    fn updated_at_never_moves_backwards() {
        let now = Utc::now();
        let mut stamps = Timestamps::new(now, now);
        stamps.touch(now - Duration::seconds(30));
        assert_eq!(stamps.updated_at, Some(now));
        assert_eq!(stamps.created_at, Some(now));
    }
}
