//! Testing utilities for Segue.
//!
//! # Features
//!
//! - [`RecordingScheduler`]: a stand-in scheduler client that records the
//!   dispatch hint it would act on for each submitted handler
//! - [`Fixed`]: a handler fixture with a compile-time answer

use segue_core::{DispatchHint, IsContinuation};
use std::sync::{Arc, Mutex};

// ============================================================================
// Recording Scheduler
// ============================================================================

/// A scheduler client that resolves handlers and records the decisions.
///
/// It never runs anything. Clones share the same log, so a clone can be
/// handed to other threads and inspected from the test afterwards.
///
/// # Example
///
/// ```rust,ignore
/// let scheduler = RecordingScheduler::new();
/// scheduler.submit("accept", &Fixed::<false>);
/// scheduler.submit("read_next", &Fixed::<true>);
///
/// assert_eq!(scheduler.deferred_count(), 1);
/// assert_eq!(scheduler.inline_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingScheduler {
    decisions: Arc<Mutex<Vec<(String, DispatchHint)>>>,
}

impl RecordingScheduler {
    /// Create a new recording scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `handler`, record the hint under `label`, and return it.
    pub fn submit<H: IsContinuation + ?Sized>(
        &self,
        label: impl Into<String>,
        handler: &H,
    ) -> DispatchHint {
        let label = label.into();
        let hint = DispatchHint::of(handler);
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(handler = %label, ?hint, "handler submitted");
        }
        self.decisions.lock().unwrap().push((label, hint));
        hint
    }

    /// Get a copy of every recorded decision, in submission order.
    pub fn decisions(&self) -> Vec<(String, DispatchHint)> {
        self.decisions.lock().unwrap().clone()
    }

    /// Get the hint recorded for the first submission with this label.
    pub fn hint_for(&self, label: &str) -> Option<DispatchHint> {
        self.decisions
            .lock()
            .unwrap()
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, hint)| *hint)
    }

    /// Total number of submissions.
    pub fn count(&self) -> usize {
        self.decisions.lock().unwrap().len()
    }

    /// Number of submissions that may run inline.
    pub fn inline_count(&self) -> usize {
        self.count_where(DispatchHint::MayInline)
    }

    /// Number of submissions that must be deferred.
    pub fn deferred_count(&self) -> usize {
        self.count_where(DispatchHint::Defer)
    }

    /// Clear all recorded decisions.
    pub fn clear(&self) {
        self.decisions.lock().unwrap().clear();
    }

    fn count_where(&self, wanted: DispatchHint) -> usize {
        self.decisions
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, hint)| *hint == wanted)
            .count()
    }
}

// ============================================================================
// Fixed Handler
// ============================================================================

/// A handler whose continuation answer is fixed at compile time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fixed<const ANSWER: bool>;

impl<const ANSWER: bool> IsContinuation for Fixed<ANSWER> {
    #[inline]
    fn is_continuation(&self) -> bool {
        ANSWER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use segue_core::CONSERVATIVE;

    #[test]
    fn test_records_in_submission_order() {
        let scheduler = RecordingScheduler::new();
        scheduler.submit("accept", &Fixed::<false>);
        scheduler.submit("read_next", &Fixed::<true>);

        let decisions = scheduler.decisions();
        assert_eq!(decisions.len(), 2);
        assert_eq!(decisions[0], ("accept".to_string(), DispatchHint::Defer));
        assert_eq!(scheduler.hint_for("accept"), Some(DispatchHint::Defer));
        assert_eq!(scheduler.hint_for("missing"), None);
    }

    #[test]
    fn test_counts() {
        let scheduler = RecordingScheduler::new();
        for i in 0..4 {
            scheduler.submit(format!("step-{i}"), &Fixed::<true>);
        }
        scheduler.submit("timer", &Fixed::<false>);

        assert_eq!(scheduler.count(), 5);
        if CONSERVATIVE {
            assert_eq!(scheduler.inline_count(), 0);
            assert_eq!(scheduler.deferred_count(), 5);
        } else {
            assert_eq!(scheduler.inline_count(), 4);
            assert_eq!(scheduler.deferred_count(), 1);
        }

        scheduler.clear();
        assert_eq!(scheduler.count(), 0);
    }

    #[test]
    fn test_clones_share_log() {
        let scheduler = RecordingScheduler::new();
        let clone = scheduler.clone();
        clone.submit("from_clone", &Fixed::<false>);
        assert_eq!(scheduler.count(), 1);
    }

    #[test]
    fn test_submit_unsized_handler() {
        let scheduler = RecordingScheduler::new();
        let handler: Box<dyn IsContinuation> = Box::new(Fixed::<false>);
        assert_eq!(scheduler.submit("boxed", handler.as_ref()), DispatchHint::Defer);
    }
}
