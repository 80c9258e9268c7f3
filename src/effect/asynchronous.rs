//! Deferred asynchronous effects.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{self, BoxFuture, FutureExt};

/// Function type for AsyncEffect and ImpureAsyncEffect internals
pub(crate) type AsyncAction<T> = Arc<dyn Fn() -> BoxFuture<'static, T> + Send + Sync>;

/// A computation that produces a future of a value.
///
/// The wrapped function is only called, and so the future only created, when
/// [`run`](AsyncEffect::run) is invoked. Each `run` calls it again.
///
/// Continuations registered with [`map`](AsyncEffect::map) and
/// [`bind`](AsyncEffect::bind) start only after the previous future resolves.
///
/// # Example
///
/// ```rust
/// use brook::AsyncEffect;
///
/// # tokio_test::block_on(async {
/// let effect = AsyncEffect::pure(|| async { 5 })
///     .map(|x| x + 2)
///     .bind(|x| AsyncEffect::pure(move || async move { x * 3 }));
///
/// assert_eq!(effect.run().await, 21);
/// # });
/// ```
pub struct AsyncEffect<T> {
    pub(crate) action: AsyncAction<T>,
}

impl<T> Clone for AsyncEffect<T> {
    fn clone(&self) -> Self {
        AsyncEffect {
            action: Arc::clone(&self.action),
        }
    }
}

impl<T> fmt::Debug for AsyncEffect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncEffect")
            .field("action", &"<function>")
            .finish()
    }
}

impl<T: Send + 'static> AsyncEffect<T> {
    /// Wrap a future-producing function without calling it.
    pub fn pure<F, Fut>(action: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self::from_boxed(move || action().boxed())
    }

    /// Wrap an already computed value. Each run resolves to a clone of it.
    pub fn of(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::from_boxed(move || future::ready(value.clone()).boxed())
    }

    pub(crate) fn from_boxed<F>(action: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, T> + Send + Sync + 'static,
    {
        AsyncEffect {
            action: Arc::new(action),
        }
    }

    /// Call the wrapped function and return its future.
    pub fn run(&self) -> BoxFuture<'static, T> {
        (self.action)()
    }

    /// Apply `f` to the resolved value.
    pub fn map<U, F>(self, f: F) -> AsyncEffect<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let action = self.action;
        let f = Arc::new(f);
        AsyncEffect::from_boxed(move || {
            let pending = action();
            let f = Arc::clone(&f);
            async move { f(pending.await) }.boxed()
        })
    }

    /// Sequence another asynchronous effect after this one.
    pub fn bind<U, F>(self, f: F) -> AsyncEffect<U>
    where
        U: Send + 'static,
        F: Fn(T) -> AsyncEffect<U> + Send + Sync + 'static,
    {
        let action = self.action;
        let f = Arc::new(f);
        AsyncEffect::from_boxed(move || {
            let pending = action();
            let f = Arc::clone(&f);
            async move {
                let next = f(pending.await);
                next.run().await
            }
            .boxed()
        })
    }
}
