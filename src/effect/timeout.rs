//! Deadlines for asynchronous effects.
//!
//! Effects carry no cancellation token. Dropping the future returned by `run`
//! stops it at its next suspension point; `with_timeout` packages that as an
//! [`Outcome`] so that a missed deadline becomes an ordinary failure value.
//!
//! Requires the `async` feature (tokio's timer).

use std::fmt;
use std::time::Duration;

use futures::future::FutureExt;

use super::asynchronous::AsyncEffect;
use super::impure::ImpureAsyncEffect;
use crate::Outcome;

/// Failure produced when an effect misses its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutError {
    /// The deadline that elapsed.
    pub duration: Duration,
}

impl fmt::Display for TimeoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "effect timed out after {:?}", self.duration)
    }
}

impl std::error::Error for TimeoutError {}

impl<T: Send + 'static> AsyncEffect<T> {
    /// Bound each run of this effect by `duration`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::{AsyncEffect, Outcome, TimeoutError};
    /// use std::time::Duration;
    ///
    /// # tokio_test::block_on(async {
    /// let slow = AsyncEffect::pure(|| async {
    ///     tokio::time::sleep(Duration::from_secs(10)).await;
    ///     42
    /// })
    /// .with_timeout(Duration::from_millis(10));
    ///
    /// assert_eq!(
    ///     slow.run().await,
    ///     Outcome::Failure(TimeoutError { duration: Duration::from_millis(10) })
    /// );
    /// # });
    /// ```
    pub fn with_timeout(self, duration: Duration) -> AsyncEffect<Outcome<TimeoutError, T>> {
        let action = self.action;
        AsyncEffect::from_boxed(move || {
            let pending = action();
            async move {
                match tokio::time::timeout(duration, pending).await {
                    Ok(value) => Outcome::Success(value),
                    Err(_) => Outcome::Failure(TimeoutError { duration }),
                }
            }
            .boxed()
        })
    }
}

impl<T: Send + 'static> ImpureAsyncEffect<T> {
    /// Bound each run of this effect by `duration`.
    pub fn with_timeout(self, duration: Duration) -> ImpureAsyncEffect<Outcome<TimeoutError, T>> {
        let action = self.action;
        ImpureAsyncEffect::from_boxed(move || {
            let pending = action();
            async move {
                match tokio::time::timeout(duration, pending).await {
                    Ok(value) => Outcome::Success(value),
                    Err(_) => Outcome::Failure(TimeoutError { duration }),
                }
            }
            .boxed()
        })
    }
}
