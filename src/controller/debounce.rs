//! Coalescing of rapid repeated triggers.

use std::sync::Arc;
use std::time::Duration;

use tokio::{runtime::Handle, task::JoinHandle};

/// Runs an action once input has been quiet for a fixed window.
///
/// Each [`trigger`](Self::trigger) cancels the pending run and schedules a
/// new one with the latest value, so a burst of triggers executes the
/// action once, with the last value, `window` after the burst ends.
pub struct Debouncer<T> {
    runtime: Handle,
    window: Duration,
    action: Arc<dyn Fn(T) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates a debouncer scheduling `action` on `runtime`.
    #[must_use]
    pub fn new(
        runtime: Handle,
        window: Duration,
        action: impl Fn(T) + Send + Sync + 'static,
    ) -> Self {
        Self {
            runtime,
            window,
            action: Arc::new(action),
            pending: None,
        }
    }

    /// Schedules the action with `value`, superseding any pending run.
    pub fn trigger(&mut self, value: T) {
        self.cancel();
        let action = Arc::clone(&self.action);
        let window = self.window;
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(window).await;
            action(value);
        }));
    }

    /// Drops the pending run, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Returns `true` while a scheduled run has not yet executed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

/// Characters used in the description field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCount {
    /// Characters typed.
    pub used: usize,
    /// Maximum characters allowed.
    pub limit: usize,
}

impl CharCount {
    /// Returns how many characters may still be typed.
    #[must_use]
    pub const fn remaining(self) -> usize {
        self.limit.saturating_sub(self.used)
    }
}

/// Debounced publisher of the description character count.
pub struct DescriptionCounter {
    limit: usize,
    debouncer: Debouncer<CharCount>,
}

impl DescriptionCounter {
    /// Creates a counter publishing to `display` after `window` of quiet.
    #[must_use]
    pub fn new(
        runtime: Handle,
        window: Duration,
        limit: usize,
        display: impl Fn(CharCount) + Send + Sync + 'static,
    ) -> Self {
        Self {
            limit,
            debouncer: Debouncer::new(runtime, window, display),
        }
    }

    /// Records new description text.
    pub fn on_input(&mut self, text: &str) {
        let used = text.chars().count().min(self.limit);
        self.debouncer.trigger(CharCount {
            used,
            limit: self.limit,
        });
    }
}
