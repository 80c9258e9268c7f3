//! Deferred effects.
//!
//! Three effect families wrap a side-effecting computation so that building a
//! pipeline performs nothing; only `run` does.
//!
//! | Type | Wraps | `run` returns |
//! |------|-------|---------------|
//! | [`SyncEffect<T>`] | `Fn() -> T` | `T` |
//! | [`AsyncEffect<T>`] | `Fn() -> impl Future<Output = T>` | `BoxFuture<'static, T>` |
//! | [`ImpureAsyncEffect<T>`] | `Fn() -> impl Future<Output = T>` | `BoxFuture<'static, T>` |
//!
//! Every family offers `pure`, `map`, `bind` and `run`. Running twice
//! performs the effect twice; there is no result caching.
//!
//! `ImpureAsyncEffect` is the common family. [`IntoImpureAsync`] lifts the
//! other two into it, and its `bind` accepts continuations of any family.
//!
//! # Failures
//!
//! The wrappers never catch anything. A panic or an `Err` produced by the
//! wrapped function reaches the caller of `run` unchanged. Expected failures
//! belong in an [`Outcome`](crate::Outcome) value, and the adapters on
//! `ImpureAsyncEffect<Outcome<E, T>>` (`attempt`, `map_success`,
//! `bind_success`, `fold_outcome`) compose the two concerns explicitly.
//!
//! # Example
//!
//! ```rust
//! use brook::{ImpureAsyncEffect, Outcome, SyncEffect};
//!
//! # tokio_test::block_on(async {
//! let request = SyncEffect::pure(|| Outcome::<String, &str>::pure("  Ada  "));
//!
//! let handler = ImpureAsyncEffect::lift(request)
//!     .try_map_success(|name| {
//!         let name = name.trim();
//!         if name.is_empty() {
//!             Outcome::pure_failure("name is required".to_string())
//!         } else {
//!             Outcome::pure(name.to_string())
//!         }
//!     })
//!     .bind_success(|name| ImpureAsyncEffect::pure(move || {
//!         let name = name.clone();
//!         async move { Outcome::<String, String>::pure(format!("created {}", name)) }
//!     }));
//!
//! assert_eq!(handler.run().await, Outcome::Success("created Ada".to_string()));
//! # });
//! ```

mod asynchronous;
mod impure;
#[cfg(feature = "tracing")]
mod instrument;
mod outcome;
mod sync;
#[cfg(feature = "async")]
mod timeout;

#[cfg(test)]
mod tests;

pub use futures::future::BoxFuture;

pub use asynchronous::AsyncEffect;
pub use impure::{ImpureAsyncEffect, IntoImpureAsync};
pub use sync::SyncEffect;

#[cfg(feature = "async")]
pub use timeout::TimeoutError;
