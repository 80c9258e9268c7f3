//! Testing utilities.
//!
//! Assertion macros for [`Outcome`](crate::Outcome) and
//! [`Maybe`](crate::Maybe), a [`CallCounter`] for checking when (and how
//! often) a deferred effect actually runs, and a panicking [`never`] stub for
//! branches that must not be taken. With the `proptest` feature enabled,
//! `Outcome` and `Maybe` also implement `proptest::arbitrary::Arbitrary`.
//!
//! # Examples
//!
//! ```rust
//! use brook::{assert_failure, assert_success, Outcome};
//!
//! let ok = Outcome::<String, i32>::pure(42);
//! assert_eq!(assert_success!(ok), 42);
//!
//! let failed = Outcome::<_, i32>::pure_failure("boom");
//! assert_failure!(failed);
//! ```
//!
//! ```rust
//! use brook::testing::CallCounter;
//! use brook::SyncEffect;
//!
//! let counter = CallCounter::new();
//! let tick = counter.clone();
//! let effect = SyncEffect::pure(move || tick.tick());
//!
//! assert_eq!(counter.count(), 0);
//! effect.run();
//! assert_eq!(counter.count(), 1);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A shared, thread-safe invocation counter.
///
/// Clones share the same count, so one clone can be moved into an effect
/// while the test keeps another.
#[derive(Debug, Clone, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    /// A counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call and return the updated count.
    pub fn tick(&self) -> usize {
        self.calls.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// The number of calls recorded so far.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// A callback that must never be invoked.
///
/// Pass it for the branch a short-circuit is supposed to skip; the test fails
/// if it runs.
///
/// ```rust
/// use brook::testing::never;
/// use brook::Outcome;
///
/// let failed = Outcome::<&str, i32>::pure_failure("invalid");
/// assert_eq!(failed.map_success(never::<i32, i32>), Outcome::Failure("invalid"));
/// ```
pub fn never<A, B>(_: A) -> B {
    panic!("callback on a skipped branch was invoked")
}

/// Assert that an outcome is a `Success`, evaluating to the success value.
///
/// # Example
///
/// ```rust
/// use brook::{assert_success, Outcome};
///
/// let value = assert_success!(Outcome::<(), _>::pure("done"));
/// assert_eq!(value, "done");
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that an outcome is a `Failure`, evaluating to the failure value.
///
/// # Example
///
/// ```rust
/// use brook::{assert_failure, Outcome};
///
/// let error = assert_failure!(Outcome::<_, i32>::pure_failure("missing"));
/// assert_eq!(error, "missing");
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Failure(e) => e,
            $crate::Outcome::Success(value) => {
                panic!("Expected Failure, got Success: {:?}", value);
            }
        }
    };
}

/// Assert that a `Maybe` is `Present`, evaluating to the value.
#[macro_export]
macro_rules! assert_present {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Present(value) => value,
            $crate::Maybe::Absent => panic!("Expected Present, got Absent"),
        }
    };
}

/// Assert that a `Maybe` is `Absent`.
#[macro_export]
macro_rules! assert_absent {
    ($maybe:expr) => {
        match $maybe {
            $crate::Maybe::Absent => {}
            $crate::Maybe::Present(value) => {
                panic!("Expected Absent, got Present: {:?}", value);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<L, R> Arbitrary for crate::Outcome<L, R>
where
    L: Arbitrary + 'static,
    R: Arbitrary + 'static,
{
    type Parameters = (L::Parameters, R::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (l_params, r_params) = args;
        prop_oneof![
            any_with::<R>(r_params).prop_map(crate::Outcome::Success),
            any_with::<L>(l_params).prop_map(crate::Outcome::Failure),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for crate::Maybe<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            1 => Just(()).prop_map(|()| crate::Maybe::Absent),
            3 => any_with::<T>(args).prop_map(crate::Maybe::Present),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Maybe, Outcome};

    #[test]
    fn call_counter_starts_at_zero() {
        assert_eq!(CallCounter::new().count(), 0);
    }

    #[test]
    fn call_counter_clones_share_count() {
        let counter = CallCounter::new();
        let other = counter.clone();
        assert_eq!(other.tick(), 1);
        assert_eq!(counter.tick(), 2);
        assert_eq!(other.count(), 2);
    }

    #[test]
    #[should_panic(expected = "skipped branch")]
    fn never_panics() {
        never::<(), ()>(());
    }

    #[test]
    fn assert_success_macro() {
        let value = assert_success!(Outcome::<String, _>::pure(42));
        assert_eq!(value, 42);
    }

    #[test]
    fn assert_failure_macro() {
        let error = assert_failure!(Outcome::<_, i32>::pure_failure("error"));
        assert_eq!(error, "error");
    }

    #[test]
    fn assert_present_and_absent_macros() {
        assert_eq!(assert_present!(Maybe::pure('x')), 'x');
        assert_absent!(Maybe::<i32>::ABSENT);
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        assert_success!(Outcome::<_, i32>::pure_failure("error"));
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        assert_failure!(Outcome::<String, _>::pure(42));
    }

    #[test]
    #[should_panic(expected = "Expected Absent, got Present: 7")]
    fn assert_absent_panics_on_present() {
        assert_absent!(Maybe::pure(7));
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn outcome_arbitrary_generates_both_arms(
                outcome in any::<Outcome<String, i32>>()
            ) {
                prop_assert_ne!(outcome.is_success(), outcome.is_failure());
            }

            #[test]
            fn maybe_arbitrary_round_trips_option(maybe in any::<Maybe<u8>>()) {
                let option: Option<u8> = maybe.into();
                prop_assert_eq!(Maybe::from(option), maybe);
            }
        }
    }
}
