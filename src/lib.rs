//! # Brook
//!
//! Small, typed building blocks for composing pure steps and deferred effects.
//!
//! - [`Outcome`] and [`Maybe`]: value containers with an explicit
//!   `pure`/`map`/`bind`/`fold` algebra
//! - [`SyncEffect`], [`AsyncEffect`] and [`ImpureAsyncEffect`]: deferred
//!   computations that do nothing until `run`
//! - [`compose`]: compile-time checked pipelines, currying and memoization
//!
//! ## Quick Example
//!
//! ```rust
//! use brook::{pipe, AsyncEffect, ImpureAsyncEffect, Outcome};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Signup {
//!     email: String,
//!     password: String,
//! }
//!
//! fn validate(signup: Signup) -> Outcome<String, Signup> {
//!     if signup.email.contains('@') {
//!         Outcome::pure(signup)
//!     } else {
//!         Outcome::pure_failure(format!("invalid email: {}", signup.email))
//!     }
//! }
//!
//! fn hash_password(signup: Signup) -> AsyncEffect<Outcome<String, Signup>> {
//!     AsyncEffect::pure(move || {
//!         let mut signup = signup.clone();
//!         async move {
//!             signup.password = format!("hashed:{}", signup.password);
//!             Outcome::pure(signup)
//!         }
//!     })
//! }
//!
//! let register = pipe!(validate, |checked: Outcome<String, Signup>| {
//!     ImpureAsyncEffect::of(checked).bind_success(hash_password)
//! });
//!
//! # tokio_test::block_on(async {
//! let created = register(Signup {
//!     email: "ada@example.com".to_string(),
//!     password: "pw".to_string(),
//! });
//! assert_eq!(
//!     created.run().await.map_success(|s| s.password),
//!     Outcome::Success("hashed:pw".to_string())
//! );
//!
//! let rejected = register(Signup {
//!     email: "nobody".to_string(),
//!     password: "pw".to_string(),
//! });
//! assert!(rejected.run().await.is_failure());
//! # });
//! ```
//!
//! ## Features
//!
//! - `async`: `with_timeout` on async effects (tokio)
//! - `tracing`: span instrumentation of effects and memo cache events
//! - `serde`: `Serialize`/`Deserialize` for `Outcome` and `Maybe`
//! - `proptest`: `Arbitrary` for `Outcome` and `Maybe`

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod compose;
pub mod effect;
pub mod maybe;
pub mod outcome;
pub mod testing;

// Re-exports
pub use compose::{
    compose0, compose1, compose2, compose3, compose4, compose5, curry, memo, pipe0, pipe1, pipe2,
    pipe3, pipe4, pipe5, uncurry, AsyncPipeline, ByAddress, Memoized, Pipeline,
};
pub use effect::{AsyncEffect, BoxFuture, ImpureAsyncEffect, IntoImpureAsync, SyncEffect};
pub use maybe::Maybe;
pub use outcome::{partition, Outcome};

#[cfg(feature = "async")]
pub use effect::TimeoutError;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::compose::{constant, curry, flip, identity, memo, noop, uncurry};
    pub use crate::compose::{AsyncPipeline, Pipeline};
    pub use crate::effect::{AsyncEffect, ImpureAsyncEffect, IntoImpureAsync, SyncEffect};
    pub use crate::maybe::Maybe;
    pub use crate::outcome::Outcome;
    pub use crate::{compose, pipe};
}
