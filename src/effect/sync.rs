//! Deferred synchronous effects.

use std::fmt;
use std::sync::Arc;

/// Function type for SyncEffect internals
pub(crate) type SyncAction<T> = Arc<dyn Fn() -> T + Send + Sync>;

/// A side-effecting computation that yields a value synchronously.
///
/// The wrapped function is not invoked until [`run`](SyncEffect::run) is
/// called, and every call to `run` invokes it again. Nothing is cached.
///
/// `SyncEffect` never catches anything: if the wrapped function panics, the
/// panic reaches the caller of `run`.
///
/// # Example
///
/// ```rust
/// use brook::SyncEffect;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&calls);
///
/// let effect = SyncEffect::pure(move || counter.fetch_add(1, Ordering::SeqCst) + 1)
///     .map(|n| n * 10);
///
/// assert_eq!(calls.load(Ordering::SeqCst), 0);
/// assert_eq!(effect.run(), 10);
/// assert_eq!(effect.run(), 20);
/// ```
pub struct SyncEffect<T> {
    pub(crate) action: SyncAction<T>,
}

impl<T> Clone for SyncEffect<T> {
    fn clone(&self) -> Self {
        SyncEffect {
            action: Arc::clone(&self.action),
        }
    }
}

impl<T> fmt::Debug for SyncEffect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncEffect")
            .field("action", &"<function>")
            .finish()
    }
}

impl<T: 'static> SyncEffect<T> {
    /// Wrap a function without executing it.
    pub fn pure<F>(action: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        SyncEffect {
            action: Arc::new(action),
        }
    }

    /// Wrap an already computed value. Each run yields a clone of it.
    pub fn of(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::pure(move || value.clone())
    }

    /// Execute the wrapped function.
    pub fn run(&self) -> T {
        (self.action)()
    }

    /// Apply `f` to the value produced by each run.
    pub fn map<U, F>(self, f: F) -> SyncEffect<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let action = self.action;
        SyncEffect::pure(move || f(action()))
    }

    /// Sequence another synchronous effect after this one.
    ///
    /// Running the result runs this effect, passes its value to `f`, then
    /// runs the effect `f` returned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::SyncEffect;
    ///
    /// let read = SyncEffect::pure(|| "42".to_string());
    /// let parsed = read.bind(|s| SyncEffect::pure(move || s.parse::<i32>().unwrap_or(0)));
    /// assert_eq!(parsed.run(), 42);
    /// ```
    pub fn bind<U, F>(self, f: F) -> SyncEffect<U>
    where
        U: 'static,
        F: Fn(T) -> SyncEffect<U> + Send + Sync + 'static,
    {
        let action = self.action;
        SyncEffect::pure(move || f(action()).run())
    }
}
