//! Cooperative cancellation for layout operations.
//!
//! Operations poll a [`Cancel`] token at phase boundaries (after island
//! segmentation, before each apply pass, and per overlap-solver iteration)
//! and stop promptly when cancellation is observed. A cancelled operation
//! is not an error: it returns normally with
//! [`OpReport::completed`](crate::algo::OpReport::completed) set to `false`,
//! and the mesh is left in whatever state the last completed phase produced.
//! Callers own rollback.
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use islet::algo::Cancel;
//!
//! let stop = Arc::new(AtomicBool::new(false));
//! let flag = Arc::clone(&stop);
//! let cancel = Cancel::new(move || flag.load(Ordering::Relaxed));
//!
//! assert!(!cancel.is_cancelled());
//! stop.store(true, Ordering::Relaxed);
//! assert!(cancel.is_cancelled());
//! ```

/// A poll-style cancellation token.
///
/// Wraps a caller-supplied predicate; the operation checks it between major
/// phases and exits early when it returns `true`.
pub struct Cancel {
    poll: Box<dyn Fn() -> bool + Send + Sync>,
}

impl Cancel {
    /// Create a token from a cancellation predicate.
    pub fn new<F>(poll: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            poll: Box::new(poll),
        }
    }

    /// Poll the token.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        (self.poll)()
    }

    /// Create a token that never cancels.
    pub fn none() -> Self {
        Self::new(|| false)
    }
}

impl Default for Cancel {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for Cancel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cancel").finish_non_exhaustive()
    }
}
