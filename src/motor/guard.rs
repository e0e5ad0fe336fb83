//! Scoped tick suppression.

use core::ops::{Deref, DerefMut};

use super::traits::TimingSource;

/// Disables a timing source for the lifetime of the guard.
///
/// On drop the source is re-enabled if it was enabled on entry or if
/// [`resume`](TickGuard::resume) was called. Every exit path of the scope,
/// early returns included, goes through `Drop`.
pub struct TickGuard<'a, T: TimingSource> {
    timer: &'a mut T,
    was_enabled: bool,
    resume: bool,
}

impl<'a, T: TimingSource> TickGuard<'a, T> {
    /// Disable `timer` until the guard is dropped.
    pub fn new(timer: &'a mut T) -> Self {
        let was_enabled = timer.is_enabled();
        timer.disable();
        Self {
            timer,
            was_enabled,
            resume: false,
        }
    }

    /// Leave the source enabled on exit regardless of its entry state.
    #[inline]
    pub fn resume(&mut self) {
        self.resume = true;
    }
}

impl<T: TimingSource> Deref for TickGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.timer
    }
}

impl<T: TimingSource> DerefMut for TickGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.timer
    }
}

impl<T: TimingSource> Drop for TickGuard<'_, T> {
    fn drop(&mut self) {
        if self.was_enabled || self.resume {
            self.timer.enable();
        }
    }
}
