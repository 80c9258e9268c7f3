//! A two-armed container holding exactly one of a failure value or a success value.
//!
//! # Outcome vs Result
//!
//! `Outcome<L, R>` carries the same information as `Result<R, L>`, but its
//! algebra is spelled out explicitly and symmetrically: every operation comes
//! in a two-armed form (`map`, `bind`, `fold`) and in single-arm forms
//! (`map_success`, `map_failure`, `bind_success`, `bind_failure`).
//!
//! Note the parameter order: the failure type comes first. Conversions to and
//! from `Result` are provided in both directions.
//!
//! # Short-circuiting
//!
//! Once a chain enters the `Failure` arm, every success-only step is skipped
//! and the failure value is threaded to the end untouched:
//!
//! ```rust
//! use brook::Outcome;
//!
//! fn parse(input: &str) -> Outcome<String, i32> {
//!     input
//!         .parse::<i32>()
//!         .map_err(|e| e.to_string())
//!         .into()
//! }
//!
//! fn positive(n: i32) -> Outcome<String, i32> {
//!     if n > 0 {
//!         Outcome::pure(n)
//!     } else {
//!         Outcome::pure_failure(format!("{} is not positive", n))
//!     }
//! }
//!
//! let ok = parse("42").bind_success(positive).map_success(|n| n * 2);
//! assert_eq!(ok, Outcome::Success(84));
//!
//! let failed = parse("-1").bind_success(positive).map_success(|n| n * 2);
//! assert_eq!(failed, Outcome::Failure("-1 is not positive".to_string()));
//! ```

use crate::Maybe;

/// A value that is either `Failure(L)` or `Success(R)`.
///
/// `Outcome` is an immutable value wrapper: no operation mutates the arm or
/// the payload, each returns a fresh `Outcome` (or, for [`fold`](Outcome::fold),
/// a plain value).
///
/// Nested outcomes are never flattened implicitly. A `Success` wrapping
/// another `Outcome` is an opaque payload until the caller asks for
/// [`flatten`](Outcome::flatten).
///
/// # Example
///
/// ```rust
/// use brook::Outcome;
///
/// let failure: Outcome<&str, i32> = Outcome::pure_failure("boom");
/// let success: Outcome<&str, i32> = Outcome::pure(42);
///
/// let describe = |o: Outcome<&str, i32>| {
///     o.fold(|e| format!("failed: {}", e), |v| format!("got {}", v))
/// };
///
/// assert_eq!(describe(failure), "failed: boom");
/// assert_eq!(describe(success), "got 42");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<L, R> {
    /// The failure arm
    Failure(L),
    /// The success arm
    Success(R),
}

impl<L, R> Outcome<L, R> {
    // ========== Constructors ==========

    /// Wrap a success value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::Outcome;
    ///
    /// let o: Outcome<String, i32> = Outcome::pure(42);
    /// assert!(o.is_success());
    /// ```
    #[inline]
    pub fn pure(value: R) -> Self {
        Outcome::Success(value)
    }

    /// Wrap a failure value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::Outcome;
    ///
    /// let o: Outcome<&str, i32> = Outcome::pure_failure("not found");
    /// assert!(o.is_failure());
    /// ```
    #[inline]
    pub fn pure_failure(value: L) -> Self {
        Outcome::Failure(value)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    // ========== Extractors ==========

    /// Returns the success value as a [`Maybe`], consuming self.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::{Maybe, Outcome};
    ///
    /// assert_eq!(Outcome::<&str, i32>::pure(1).success(), Maybe::Present(1));
    /// assert_eq!(Outcome::<&str, i32>::pure_failure("e").success(), Maybe::Absent);
    /// ```
    #[inline]
    pub fn success(self) -> Maybe<R> {
        match self {
            Outcome::Failure(_) => Maybe::Absent,
            Outcome::Success(r) => Maybe::Present(r),
        }
    }

    /// Returns the failure value as a [`Maybe`], consuming self.
    #[inline]
    pub fn failure(self) -> Maybe<L> {
        match self {
            Outcome::Failure(l) => Maybe::Present(l),
            Outcome::Success(_) => Maybe::Absent,
        }
    }

    /// Convert to `Outcome<&L, &R>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&L, &R> {
        match self {
            Outcome::Failure(l) => Outcome::Failure(l),
            Outcome::Success(r) => Outcome::Success(r),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn success_or(self, default: R) -> R {
        match self {
            Outcome::Failure(_) => default,
            Outcome::Success(r) => r,
        }
    }

    /// Returns the success value or computes one from the failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::Outcome;
    ///
    /// let o: Outcome<&str, usize> = Outcome::pure_failure("four");
    /// assert_eq!(o.success_or_else(|e| e.len()), 4);
    /// ```
    #[inline]
    pub fn success_or_else<F>(self, f: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Outcome::Failure(l) => f(l),
            Outcome::Success(r) => r,
        }
    }

    // ========== Map ==========

    /// Transform whichever arm is populated.
    ///
    /// Exactly one of the two functions is invoked.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::Outcome;
    ///
    /// let failure: Outcome<i32, &str> = Outcome::pure_failure(1);
    /// let success: Outcome<i32, &str> = Outcome::pure("hello");
    ///
    /// assert_eq!(failure.map(|x| x + 1, |s| s.len()), Outcome::Failure(2));
    /// assert_eq!(success.map(|x| x + 1, |s| s.len()), Outcome::Success(5));
    /// ```
    #[inline]
    pub fn map<L2, R2, F, G>(self, on_failure: F, on_success: G) -> Outcome<L2, R2>
    where
        F: FnOnce(L) -> L2,
        G: FnOnce(R) -> R2,
    {
        match self {
            Outcome::Failure(l) => Outcome::Failure(on_failure(l)),
            Outcome::Success(r) => Outcome::Success(on_success(r)),
        }
    }

    /// Transform the success value, moving a failure through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::Outcome;
    ///
    /// let success: Outcome<&str, i32> = Outcome::pure(21);
    /// let failure: Outcome<&str, i32> = Outcome::pure_failure("no");
    ///
    /// assert_eq!(success.map_success(|x| x * 2), Outcome::Success(42));
    /// assert_eq!(failure.map_success(|x| x * 2), Outcome::Failure("no"));
    /// ```
    #[inline]
    pub fn map_success<R2, F>(self, f: F) -> Outcome<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Outcome::Failure(l) => Outcome::Failure(l),
            Outcome::Success(r) => Outcome::Success(f(r)),
        }
    }

    /// Transform the failure value, moving a success through unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::Outcome;
    ///
    /// let failure: Outcome<&str, i32> = Outcome::pure_failure("no");
    /// assert_eq!(
    ///     failure.map_failure(|e| format!("wrapped: {}", e)),
    ///     Outcome::Failure("wrapped: no".to_string())
    /// );
    /// ```
    #[inline]
    pub fn map_failure<L2, F>(self, f: F) -> Outcome<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Outcome::Failure(l) => Outcome::Failure(f(l)),
            Outcome::Success(r) => Outcome::Success(r),
        }
    }

    // ========== Bind ==========

    /// Chain a fallible step on whichever arm is populated.
    ///
    /// Both callbacks return an `Outcome` themselves. Exactly one of them is
    /// invoked; on `Failure(l)` the result is `on_failure(l)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::Outcome;
    ///
    /// let recover = |e: &str| -> Outcome<String, i32> {
    ///     if e == "missing" { Outcome::pure(0) } else { Outcome::pure_failure(e.to_string()) }
    /// };
    /// let halve = |n: i32| -> Outcome<String, i32> {
    ///     if n % 2 == 0 { Outcome::pure(n / 2) } else { Outcome::pure_failure("odd".to_string()) }
    /// };
    ///
    /// assert_eq!(Outcome::pure_failure("missing").bind(recover, halve), Outcome::Success(0));
    /// assert_eq!(Outcome::<&str, i32>::pure(8).bind(recover, halve), Outcome::Success(4));
    /// ```
    #[inline]
    pub fn bind<L2, R2, F, G>(self, on_failure: F, on_success: G) -> Outcome<L2, R2>
    where
        F: FnOnce(L) -> Outcome<L2, R2>,
        G: FnOnce(R) -> Outcome<L2, R2>,
    {
        match self {
            Outcome::Failure(l) => on_failure(l),
            Outcome::Success(r) => on_success(r),
        }
    }

    /// Chain a fallible step on the success value.
    ///
    /// A failure is moved through without invoking `f`.
    #[inline]
    pub fn bind_success<R2, F>(self, f: F) -> Outcome<L, R2>
    where
        F: FnOnce(R) -> Outcome<L, R2>,
    {
        match self {
            Outcome::Failure(l) => Outcome::Failure(l),
            Outcome::Success(r) => f(r),
        }
    }

    /// Chain a recovery step on the failure value.
    ///
    /// A success is moved through without invoking `f`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::Outcome;
    ///
    /// let o: Outcome<&str, i32> = Outcome::pure_failure("timeout");
    /// let recovered: Outcome<(), i32> = o.bind_failure(|_| Outcome::pure(-1));
    /// assert_eq!(recovered, Outcome::Success(-1));
    /// ```
    #[inline]
    pub fn bind_failure<L2, F>(self, f: F) -> Outcome<L2, R>
    where
        F: FnOnce(L) -> Outcome<L2, R>,
    {
        match self {
            Outcome::Failure(l) => f(l),
            Outcome::Success(r) => Outcome::Success(r),
        }
    }

    // ========== Folding ==========

    /// Eliminate the container into a plain value.
    ///
    /// Exactly one callback executes.
    #[inline]
    pub fn fold<T, F, G>(self, on_failure: F, on_success: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Outcome::Failure(l) => on_failure(l),
            Outcome::Success(r) => on_success(r),
        }
    }

    /// Swap the arms.
    #[inline]
    pub fn swap(self) -> Outcome<R, L> {
        match self {
            Outcome::Failure(l) => Outcome::Success(l),
            Outcome::Success(r) => Outcome::Failure(r),
        }
    }

    // ========== Conversions ==========

    /// Convert to `Result` (Success becomes Ok, Failure becomes Err).
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Outcome::Failure(l) => Err(l),
            Outcome::Success(r) => Ok(r),
        }
    }
}

impl<L, R> Outcome<L, Outcome<L, R>> {
    /// Remove one level of nesting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::Outcome;
    ///
    /// let nested: Outcome<&str, Outcome<&str, i32>> = Outcome::pure(Outcome::pure(1));
    /// assert_eq!(nested.flatten(), Outcome::Success(1));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<L, R> {
        self.bind_success(|inner| inner)
    }
}

impl<L, R> From<Result<R, L>> for Outcome<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Outcome::Success(r),
            Err(l) => Outcome::Failure(l),
        }
    }
}

impl<L, R> From<Outcome<L, R>> for Result<R, L> {
    fn from(outcome: Outcome<L, R>) -> Self {
        outcome.into_result()
    }
}

/// Split an iterator of outcomes into failures and successes.
///
/// # Example
///
/// ```rust
/// use brook::outcome::{partition, Outcome};
///
/// let items = vec![
///     Outcome::Failure("a"),
///     Outcome::Success(1),
///     Outcome::Success(2),
/// ];
///
/// let (failures, successes) = partition(items);
/// assert_eq!(failures, vec!["a"]);
/// assert_eq!(successes, vec![1, 2]);
/// ```
pub fn partition<L, R, I>(iter: I) -> (Vec<L>, Vec<R>)
where
    I: IntoIterator<Item = Outcome<L, R>>,
{
    let mut failures = Vec::new();
    let mut successes = Vec::new();

    for item in iter {
        match item {
            Outcome::Failure(l) => failures.push(l),
            Outcome::Success(r) => successes.push(r),
        }
    }

    (failures, successes)
}
