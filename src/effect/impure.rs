//! Impure asynchronous effects, the common family of all effect types.
//!
//! [`ImpureAsyncEffect`] is the least restrictive effect: it may perform side
//! effects and it may suspend. Both [`SyncEffect`] and [`AsyncEffect`] can be
//! lifted into it without loss, which is what [`IntoImpureAsync`] expresses.
//! Its [`bind`](ImpureAsyncEffect::bind) accepts continuations returning any
//! of the three families.
//!
//! ```rust
//! use brook::{AsyncEffect, ImpureAsyncEffect, SyncEffect};
//!
//! # tokio_test::block_on(async {
//! let effect = ImpureAsyncEffect::lift(SyncEffect::pure(|| 2))
//!     .bind(|x| AsyncEffect::pure(move || async move { x + 1 }))
//!     .bind(|x| SyncEffect::pure(move || x * 10))
//!     .bind(|x| ImpureAsyncEffect::pure(move || async move { x.to_string() }));
//!
//! assert_eq!(effect.run().await, "30");
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{self, BoxFuture, FutureExt};

use super::asynchronous::{AsyncAction, AsyncEffect};
use super::sync::SyncEffect;

/// A deferred, impure computation producing a future of a value.
///
/// Same deferral contract as [`AsyncEffect`]: nothing happens until
/// [`run`](ImpureAsyncEffect::run), and every run starts over.
pub struct ImpureAsyncEffect<T> {
    pub(crate) action: AsyncAction<T>,
}

impl<T> Clone for ImpureAsyncEffect<T> {
    fn clone(&self) -> Self {
        ImpureAsyncEffect {
            action: Arc::clone(&self.action),
        }
    }
}

impl<T> fmt::Debug for ImpureAsyncEffect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImpureAsyncEffect")
            .field("action", &"<function>")
            .finish()
    }
}

/// Conversion of any effect family into [`ImpureAsyncEffect`].
///
/// Implemented for [`SyncEffect`], [`AsyncEffect`] and `ImpureAsyncEffect`
/// itself. Lifting never runs the effect.
pub trait IntoImpureAsync<T> {
    /// Lift into the impure asynchronous family.
    fn into_impure_async(self) -> ImpureAsyncEffect<T>;
}

impl<T: Send + 'static> IntoImpureAsync<T> for SyncEffect<T> {
    fn into_impure_async(self) -> ImpureAsyncEffect<T> {
        let action = self.action;
        ImpureAsyncEffect::from_boxed(move || future::ready(action()).boxed())
    }
}

impl<T> IntoImpureAsync<T> for AsyncEffect<T> {
    fn into_impure_async(self) -> ImpureAsyncEffect<T> {
        ImpureAsyncEffect {
            action: self.action,
        }
    }
}

impl<T> IntoImpureAsync<T> for ImpureAsyncEffect<T> {
    fn into_impure_async(self) -> ImpureAsyncEffect<T> {
        self
    }
}

impl<T: Send + 'static> From<SyncEffect<T>> for ImpureAsyncEffect<T> {
    fn from(effect: SyncEffect<T>) -> Self {
        effect.into_impure_async()
    }
}

impl<T> From<AsyncEffect<T>> for ImpureAsyncEffect<T> {
    fn from(effect: AsyncEffect<T>) -> Self {
        effect.into_impure_async()
    }
}

impl<T: Send + 'static> ImpureAsyncEffect<T> {
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

    /// Normalize any effect family into an `ImpureAsyncEffect`.
    pub fn lift<E>(effect: E) -> Self
    where
        E: IntoImpureAsync<T>,
    {
        effect.into_impure_async()
    }

    pub(crate) fn from_boxed<F>(action: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, T> + Send + Sync + 'static,
    {
        ImpureAsyncEffect {
            action: Arc::new(action),
        }
    }

    /// Call the wrapped function and return its future.
    pub fn run(&self) -> BoxFuture<'static, T> {
        (self.action)()
    }

    /// Apply `f` to the resolved value.
    pub fn map<U, F>(self, f: F) -> ImpureAsyncEffect<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let action = self.action;
        let f = Arc::new(f);
        ImpureAsyncEffect::from_boxed(move || {
            let pending = action();
            let f = Arc::clone(&f);
            async move { f(pending.await) }.boxed()
        })
    }

    /// Sequence an effect of any family after this one.
    ///
    /// The continuation may return a [`SyncEffect`], an [`AsyncEffect`] or an
    /// `ImpureAsyncEffect`; the result is always an `ImpureAsyncEffect`.
    pub fn bind<U, K, F>(self, f: F) -> ImpureAsyncEffect<U>
    where
        U: Send + 'static,
        K: IntoImpureAsync<U>,
        F: Fn(T) -> K + Send + Sync + 'static,
    {
        let action = self.action;
        let f = Arc::new(f);
        ImpureAsyncEffect::from_boxed(move || {
            let pending = action();
            let f = Arc::clone(&f);
            async move {
                let next = f(pending.await).into_impure_async();
                next.run().await
            }
            .boxed()
        })
    }
}
