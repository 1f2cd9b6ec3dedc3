// Copyright 2025 Cowboy AI, LLC.

//! Test support for code built on boolean combinators
//!
//! Enabled for this crate's own tests and, through the `test-utils` feature,
//! for downstream test suites. [`ActivationTracker`] counts how often the
//! sources it hands out are activated; [`CancellationFlag`] records when a
//! pending observation is dropped.

use std::future;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::mono::BoolMono;
use crate::source::Outcome;

/// Counts activations of the sources created from it
#[derive(Debug, Clone, Default)]
pub struct ActivationTracker {
    count: Arc<AtomicUsize>,
}

impl ActivationTracker {
    /// Create a tracker with no recorded activations
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of activations across all sources from this tracker
    pub fn activations(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Check if any source from this tracker was activated
    pub fn was_activated(&self) -> bool {
        self.activations() > 0
    }

    /// Source that records an activation and then resolves to `outcome`
    pub fn source<E>(&self, outcome: Outcome<E>) -> BoolMono<E>
    where
        E: Clone + Send + Sync + 'static,
    {
        let count = Arc::clone(&self.count);
        BoolMono::defer(move || {
            count.fetch_add(1, Ordering::SeqCst);
            future::ready(outcome.clone())
        })
    }

    /// Source that records an activation and never resolves
    ///
    /// `flag` is raised when an in-flight observation is dropped.
    pub fn pending<E>(&self, flag: &CancellationFlag) -> BoolMono<E>
    where
        E: Send + 'static,
    {
        let count = Arc::clone(&self.count);
        let flag = flag.clone();
        BoolMono::defer(move || {
            count.fetch_add(1, Ordering::SeqCst);
            let guard = flag.guard();
            async move {
                let _guard = guard;
                future::pending::<Outcome<E>>().await
            }
        })
    }
}

/// Raised when a guarded observation is dropped
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag {
    cancelled: Arc<AtomicBool>,
}

impl CancellationFlag {
    /// Create a lowered flag
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a guarded observation was dropped
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Guard that raises this flag when dropped
    pub fn guard(&self) -> CancellationGuard {
        CancellationGuard {
            cancelled: Arc::clone(&self.cancelled),
        }
    }
}

/// Raises its [`CancellationFlag`] on drop
#[derive(Debug)]
pub struct CancellationGuard {
    cancelled: Arc<AtomicBool>,
}

impl Drop for CancellationGuard {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}
