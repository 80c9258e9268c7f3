//! Function composition utilities.
//!
//! # Overview
//!
//! - [`pipe0`]..[`pipe5`] and [`pipe!`](crate::pipe!): left-to-right
//!   pipelines, `pipe!(f, g)(x) == g(f(x))`
//! - [`compose0`]..[`compose5`] and [`compose!`](crate::compose!):
//!   right-to-left composition, `compose!(f, g)(x) == f(g(x))`
//! - [`Pipeline`] and [`AsyncPipeline`]: builders for chains assembled step by
//!   step, the async form accepting steps that return futures
//! - [`curry`] and [`uncurry`]: convert between `f(a, b)` and `f(a)(b)`
//! - [`memo`] and [`Memoized`]: unary memoization
//! - [`identity`], [`noop`], [`constant`], [`flip`]: small helpers
//!
//! Every combinator is checked at compile time: the output type of each step
//! must match the input type of the next.
//!
//! # Example
//!
//! ```rust
//! use brook::{compose, pipe};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! assert_eq!(pipe!(add_one, double)(5), 12);
//! assert_eq!(compose!(add_one, double)(5), 11);
//! ```
//!
//! # Combining with effects
//!
//! Pipelines compose plain functions, including functions that build effects:
//!
//! ```rust
//! use brook::{pipe, ImpureAsyncEffect, Outcome};
//!
//! let parse = |raw: &'static str| raw.parse::<u32>().map_err(|e| e.to_string());
//! let load = pipe!(
//!     parse,
//!     |parsed: Result<u32, String>| Outcome::from(parsed),
//!     |parsed: Outcome<String, u32>| ImpureAsyncEffect::of(parsed),
//! );
//!
//! # tokio_test::block_on(async {
//! assert_eq!(load("42").run().await, Outcome::Success(42));
//! assert!(load("x").run().await.is_failure());
//! # });
//! ```

mod compose_macro;
mod curry;
mod memo;
mod pipe_macro;
mod pipeline;
mod utils;

pub use compose_macro::{compose0, compose1, compose2, compose3, compose4, compose5};
pub use curry::{curry, uncurry, Curried};
pub use memo::{memo, ByAddress, Memoized};
pub use pipe_macro::{pipe0, pipe1, pipe2, pipe3, pipe4, pipe5};
pub use pipeline::{AsyncPipeline, Pipeline};
pub use utils::{constant, flip, identity, noop};
