// Copyright 2025 Cowboy AI, LLC.

//! The asynchronous boolean abstraction
//!
//! An [`AsyncBoolean`] is a deferred computation that, when observed, settles
//! on exactly one of three outcomes:
//!
//! - `Ok(Some(v))`: a single boolean value
//! - `Ok(None)`: completion without a value (empty)
//! - `Err(e)`: failure with the source's error
//!
//! Nothing runs until [`AsyncBoolean::observe`] is called and the returned
//! future is polled. Dropping that future cancels the observation. Each call
//! to `observe` is an independent activation, so a source can be observed any
//! number of times, concurrently.

use std::sync::Arc;

use async_trait::async_trait;

/// Outcome of observing an [`AsyncBoolean`]
pub type Outcome<E> = Result<Option<bool>, E>;

/// An asynchronous producer of at most one boolean
#[async_trait]
pub trait AsyncBoolean: Send + Sync {
    /// Error produced when the source fails
    type Error: Send + 'static;

    /// Activate the source and wait for its outcome
    async fn observe(&self) -> Outcome<Self::Error>;

    /// Get a human-readable description
    fn description(&self) -> String {
        "source".to_string()
    }
}

#[async_trait]
impl<T> AsyncBoolean for &T
where
    T: AsyncBoolean + ?Sized,
{
    type Error = T::Error;

    async fn observe(&self) -> Outcome<Self::Error> {
        (**self).observe().await
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

#[async_trait]
impl<T> AsyncBoolean for Box<T>
where
    T: AsyncBoolean + ?Sized,
{
    type Error = T::Error;

    async fn observe(&self) -> Outcome<Self::Error> {
        (**self).observe().await
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

#[async_trait]
impl<T> AsyncBoolean for Arc<T>
where
    T: AsyncBoolean + ?Sized,
{
    type Error = T::Error;

    async fn observe(&self) -> Outcome<Self::Error> {
        (**self).observe().await
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// Short label for an outcome, used as a log field
pub(crate) fn outcome_kind<E>(outcome: &Outcome<E>) -> &'static str {
    match outcome {
        Ok(Some(true)) => "true",
        Ok(Some(false)) => "false",
        Ok(None) => "empty",
        Err(_) => "error",
    }
}
