// Copyright 2025 Cowboy AI, LLC.

//! Concrete boolean sources
//!
//! [`BoolMono`] is the cloneable, type-erased [`AsyncBoolean`]. It is built
//! from a plain value, an empty or failing outcome, a deferred future factory,
//! or any other source. Clones share the underlying source; observing a clone
//! is the same as observing the original.

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::source::{AsyncBoolean, Outcome};

/// A shareable asynchronous boolean
pub struct BoolMono<E: Send + 'static> {
    inner: Arc<dyn AsyncBoolean<Error = E>>,
    label: Option<Arc<str>>,
}

impl<E: Send + 'static> BoolMono<E> {
    /// Source that resolves to `value` on every observation
    ///
    /// # Example
    /// ```rust
    /// use cim_bool::{AsyncBoolean, BoolMono, SourceError};
    ///
    /// let source = BoolMono::<SourceError>::just(true);
    /// assert_eq!(tokio_test::block_on(source.observe()), Ok(Some(true)));
    /// ```
    pub fn just(value: bool) -> Self {
        Self::from_source(Just {
            value,
            _phantom: PhantomData,
        })
    }

    /// Source that completes without a value
    pub fn empty() -> Self {
        Self::from_source(Empty {
            _phantom: PhantomData,
        })
    }

    /// Source that fails with a clone of `error` on every observation
    pub fn error(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::from_source(Fail { error })
    }

    /// Source that calls `factory` once per observation and awaits the future
    /// it returns
    ///
    /// The factory is only invoked when the observation is first polled, so
    /// any side effect it has marks the activation of this source.
    ///
    /// # Example
    /// ```rust
    /// use cim_bool::{AsyncBoolean, BoolMono, SourceError};
    ///
    /// let source = BoolMono::<SourceError>::defer(|| async { Ok(Some(false)) });
    /// assert_eq!(tokio_test::block_on(source.observe()), Ok(Some(false)));
    /// ```
    pub fn defer<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Outcome<E>> + Send + 'static,
    {
        Self::from_source(Deferred { factory })
    }

    /// Erase any source into a `BoolMono`
    pub fn from_source<S>(source: S) -> Self
    where
        S: AsyncBoolean<Error = E> + 'static,
    {
        Self {
            inner: Arc::new(source),
            label: None,
        }
    }

    /// Attach a label shown by [`AsyncBoolean::description`]
    pub fn named(mut self, label: impl Into<String>) -> Self {
        self.label = Some(Arc::from(label.into()));
        self
    }
}

impl<E: Send + 'static> Clone for BoolMono<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            label: self.label.clone(),
        }
    }
}

impl<E: Send + 'static> fmt::Debug for BoolMono<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoolMono")
            .field("description", &self.describe())
            .finish()
    }
}

impl<E: Send + 'static> BoolMono<E> {
    fn describe(&self) -> String {
        match &self.label {
            Some(label) => label.to_string(),
            None => self.inner.description(),
        }
    }
}

#[async_trait]
impl<E: Send + 'static> AsyncBoolean for BoolMono<E> {
    type Error = E;

    async fn observe(&self) -> Outcome<E> {
        self.inner.observe().await
    }

    fn description(&self) -> String {
        self.describe()
    }
}

struct Just<E> {
    value: bool,
    _phantom: PhantomData<fn() -> E>,
}

#[async_trait]
impl<E: Send + 'static> AsyncBoolean for Just<E> {
    type Error = E;

    async fn observe(&self) -> Outcome<E> {
        Ok(Some(self.value))
    }

    fn description(&self) -> String {
        format!("just({})", self.value)
    }
}

struct Empty<E> {
    _phantom: PhantomData<fn() -> E>,
}

#[async_trait]
impl<E: Send + 'static> AsyncBoolean for Empty<E> {
    type Error = E;

    async fn observe(&self) -> Outcome<E> {
        Ok(None)
    }

    fn description(&self) -> String {
        "empty".to_string()
    }
}

struct Fail<E> {
    error: E,
}

#[async_trait]
impl<E: Clone + Send + Sync + 'static> AsyncBoolean for Fail<E> {
    type Error = E;

    async fn observe(&self) -> Outcome<E> {
        Err(self.error.clone())
    }

    fn description(&self) -> String {
        "error".to_string()
    }
}

struct Deferred<F> {
    factory: F,
}

#[async_trait]
impl<F, Fut, E> AsyncBoolean for Deferred<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Outcome<E>> + Send + 'static,
    E: Send + 'static,
{
    type Error = E;

    async fn observe(&self) -> Outcome<E> {
        (self.factory)().await
    }

    fn description(&self) -> String {
        "deferred".to_string()
    }
}
