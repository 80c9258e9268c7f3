//! Tracing support for effects.
//!
//! Feature-gated behind `#[cfg(feature = "tracing")]`. Instrumenting an effect
//! enters the span on every run: for the synchronous call to the wrapped
//! function, and for every poll of the resulting future.

use tracing::Instrument as _;
use tracing::Span;

use futures::future::FutureExt;

use super::asynchronous::AsyncEffect;
use super::impure::ImpureAsyncEffect;
use super::sync::SyncEffect;

impl<T: 'static> SyncEffect<T> {
    /// Run this effect inside `span`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::SyncEffect;
    ///
    /// let effect = SyncEffect::pure(|| 42).instrument(tracing::info_span!("answer"));
    /// assert_eq!(effect.run(), 42);
    /// ```
    pub fn instrument(self, span: Span) -> SyncEffect<T> {
        let action = self.action;
        SyncEffect::pure(move || {
            let _entered = span.enter();
            action()
        })
    }
}

impl<T: Send + 'static> AsyncEffect<T> {
    /// Run this effect inside `span`.
    pub fn instrument(self, span: Span) -> AsyncEffect<T> {
        let action = self.action;
        AsyncEffect::from_boxed(move || {
            let pending = {
                let _entered = span.enter();
                action()
            };
            pending.instrument(span.clone()).boxed()
        })
    }
}

impl<T: Send + 'static> ImpureAsyncEffect<T> {
    /// Run this effect inside `span`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::ImpureAsyncEffect;
    ///
    /// # tokio_test::block_on(async {
    /// let effect = ImpureAsyncEffect::pure(|| async { "saved" })
    ///     .instrument(tracing::debug_span!("create_user", user = "ada"));
    /// assert_eq!(effect.run().await, "saved");
    /// # });
    /// ```
    pub fn instrument(self, span: Span) -> ImpureAsyncEffect<T> {
        let action = self.action;
        ImpureAsyncEffect::from_boxed(move || {
            let pending = {
                let _entered = span.enter();
                action()
            };
            pending.instrument(span.clone()).boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_sync_effect_logs_inside_span() {
        let effect = SyncEffect::pure(|| {
            tracing::info!("writing row");
            1
        })
        .instrument(tracing::info_span!("db_write"));

        assert_eq!(effect.run(), 1);
        assert!(logs_contain("db_write"));
        assert!(logs_contain("writing row"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_async_effect_logs_inside_span() {
        let effect = AsyncEffect::pure(|| async {
            tracing::info!("hashing");
            "hash"
        })
        .instrument(tracing::info_span!("hash_password"));

        assert_eq!(effect.run().await, "hash");
        assert!(logs_contain("hash_password"));
    }

    #[tokio::test]
    async fn test_instrument_composes() {
        let effect = ImpureAsyncEffect::of(5)
            .instrument(tracing::debug_span!("step1"))
            .map(|x| x * 2)
            .instrument(tracing::debug_span!("step2"))
            .bind(|x| SyncEffect::pure(move || x + 10).instrument(tracing::debug_span!("step3")));

        assert_eq!(effect.run().await, 20);
    }
}
