//! Effects that produce an [`Outcome`].
//!
//! Deferral and fallibility are separate concerns: an effect never decides
//! whether its value is a failure. The adapters here operate on effects whose
//! value *is* an `Outcome`, threading the failure arm past success-only steps
//! so that a skipped step never constructs, let alone runs, its effect.
//!
//! ```rust
//! use brook::{AsyncEffect, ImpureAsyncEffect, Outcome};
//!
//! fn lookup(id: u32) -> AsyncEffect<Outcome<String, String>> {
//!     AsyncEffect::pure(move || async move {
//!         if id == 1 {
//!             Outcome::pure("ada".to_string())
//!         } else {
//!             Outcome::pure_failure(format!("user {} not found", id))
//!         }
//!     })
//! }
//!
//! # tokio_test::block_on(async {
//! let found = ImpureAsyncEffect::of(Outcome::<String, u32>::pure(1))
//!     .bind_success(lookup)
//!     .map_success(|name| name.to_uppercase());
//! assert_eq!(found.run().await, Outcome::Success("ADA".to_string()));
//!
//! let missing = ImpureAsyncEffect::of(Outcome::<String, u32>::pure(2))
//!     .bind_success(lookup)
//!     .map_success(|name| name.to_uppercase());
//! assert_eq!(missing.run().await, Outcome::Failure("user 2 not found".to_string()));
//! # });
//! ```

use std::future::Future;
use std::sync::Arc;

use futures::future::FutureExt;

use super::asynchronous::AsyncEffect;
use super::impure::{ImpureAsyncEffect, IntoImpureAsync};
use super::sync::SyncEffect;
use crate::Outcome;

impl<E, T> ImpureAsyncEffect<Outcome<E, T>>
where
    E: Send + 'static,
    T: Send + 'static,
{
    /// Wrap a fallible asynchronous call, turning its `Err` into a `Failure`.
    ///
    /// This is the explicit failure-catching adapter for boundary calls such
    /// as database writes. Panics are not intercepted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::{ImpureAsyncEffect, Outcome};
    ///
    /// # tokio_test::block_on(async {
    /// let write = ImpureAsyncEffect::attempt(|| async { Err::<u64, _>("disk full") });
    /// assert_eq!(write.run().await, Outcome::Failure("disk full"));
    /// # });
    /// ```
    pub fn attempt<F, Fut>(action: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        ImpureAsyncEffect::from_boxed(move || {
            let pending = action();
            async move { Outcome::from(pending.await) }.boxed()
        })
    }

    /// Transform the success value once the effect resolves.
    pub fn map_success<U, F>(self, f: F) -> ImpureAsyncEffect<Outcome<E, U>>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        self.map(move |outcome| outcome.map_success(&f))
    }

    /// Transform the failure value once the effect resolves.
    pub fn map_failure<E2, F>(self, f: F) -> ImpureAsyncEffect<Outcome<E2, T>>
    where
        E2: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        self.map(move |outcome| outcome.map_failure(&f))
    }

    /// Chain a pure fallible step, such as validation.
    pub fn try_map_success<U, F>(self, f: F) -> ImpureAsyncEffect<Outcome<E, U>>
    where
        U: Send + 'static,
        F: Fn(T) -> Outcome<E, U> + Send + Sync + 'static,
    {
        self.map(move |outcome| outcome.bind_success(&f))
    }

    /// Chain an effectful fallible step.
    ///
    /// `f` may return any effect family producing an `Outcome`. On `Failure`
    /// the continuation is not called and the failure is passed on as is.
    pub fn bind_success<U, K, F>(self, f: F) -> ImpureAsyncEffect<Outcome<E, U>>
    where
        U: Send + 'static,
        K: IntoImpureAsync<Outcome<E, U>>,
        F: Fn(T) -> K + Send + Sync + 'static,
    {
        let action = self.action;
        let f = Arc::new(f);
        ImpureAsyncEffect::from_boxed(move || {
            let pending = action();
            let f = Arc::clone(&f);
            async move {
                match pending.await {
                    Outcome::Failure(e) => Outcome::Failure(e),
                    Outcome::Success(t) => {
                        let next = f(t).into_impure_async();
                        next.run().await
                    }
                }
            }
            .boxed()
        })
    }

    /// Eliminate the `Outcome` once the effect resolves.
    pub fn fold_outcome<V, F, G>(self, on_failure: F, on_success: G) -> ImpureAsyncEffect<V>
    where
        V: Send + 'static,
        F: Fn(E) -> V + Send + Sync + 'static,
        G: Fn(T) -> V + Send + Sync + 'static,
    {
        self.map(move |outcome| outcome.fold(&on_failure, &on_success))
    }
}

impl<T, E> SyncEffect<Result<T, E>>
where
    T: 'static,
    E: 'static,
{
    /// Convert a `Result`-producing effect into an `Outcome`-producing one.
    pub fn into_outcome(self) -> SyncEffect<Outcome<E, T>> {
        self.map(Outcome::from)
    }
}

impl<T, E> AsyncEffect<Result<T, E>>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Convert a `Result`-producing effect into an `Outcome`-producing one.
    pub fn into_outcome(self) -> AsyncEffect<Outcome<E, T>> {
        self.map(Outcome::from)
    }
}

impl<T, E> ImpureAsyncEffect<Result<T, E>>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Convert a `Result`-producing effect into an `Outcome`-producing one.
    pub fn into_outcome(self) -> ImpureAsyncEffect<Outcome<E, T>> {
        self.map(Outcome::from)
    }
}
