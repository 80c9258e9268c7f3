//! A container holding either no value or exactly one value.
//!
//! `Maybe<T>` is the [`Outcome`](crate::Outcome) algebra with the failure arm
//! erased to a payload-free `Absent`. It converts freely to and from
//! `Option<T>`.
//!
//! ```rust
//! use brook::Maybe;
//!
//! let name: Maybe<&str> = Maybe::pure("ada");
//! let greeting = name
//!     .map(|n| n.to_uppercase())
//!     .fold(|| "nobody".to_string(), |n| format!("hello {}", n));
//!
//! assert_eq!(greeting, "hello ADA");
//! ```

use crate::Outcome;

/// Either `Absent` or `Present(T)`.
///
/// Every `Absent` is the same value: it carries nothing and compares equal to
/// [`Maybe::ABSENT`] for any `T`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value
    Absent,
    /// Exactly one value
    Present(T),
}

impl<T> Maybe<T> {
    /// The shared absent value.
    pub const ABSENT: Self = Maybe::Absent;

    /// Wrap a present value.
    #[inline]
    pub fn pure(value: T) -> Self {
        Maybe::Present(value)
    }

    /// Returns [`Maybe::ABSENT`].
    #[inline]
    pub fn absent() -> Self {
        Self::ABSENT
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Convert to `Maybe<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Absent => Maybe::Absent,
            Maybe::Present(t) => Maybe::Present(t),
        }
    }

    /// Transform the present value. `Absent` maps to `Absent`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::Maybe;
    ///
    /// assert_eq!(Maybe::pure(2).map(|x| x * 3), Maybe::Present(6));
    /// assert_eq!(Maybe::<i32>::ABSENT.map(|x| x * 3), Maybe::Absent);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Absent => Maybe::Absent,
            Maybe::Present(t) => Maybe::Present(f(t)),
        }
    }

    /// Chain a step that may itself produce nothing.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::Maybe;
    ///
    /// let first_char = |s: &str| -> Maybe<char> { s.chars().next().into() };
    ///
    /// assert_eq!(Maybe::pure("abc").bind(first_char), Maybe::Present('a'));
    /// assert_eq!(Maybe::pure("").bind(first_char), Maybe::Absent);
    /// assert_eq!(Maybe::ABSENT.bind(first_char), Maybe::Absent);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Absent => Maybe::Absent,
            Maybe::Present(t) => f(t),
        }
    }

    /// Eliminate the container into a plain value.
    ///
    /// Exactly one callback executes.
    #[inline]
    pub fn fold<U, F, G>(self, on_absent: F, on_present: G) -> U
    where
        F: FnOnce() -> U,
        G: FnOnce(T) -> U,
    {
        match self {
            Maybe::Absent => on_absent(),
            Maybe::Present(t) => on_present(t),
        }
    }

    /// Returns the present value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Absent => default,
            Maybe::Present(t) => t,
        }
    }

    /// Turn absence into a failure with the given reason.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brook::{Maybe, Outcome};
    ///
    /// let missing: Maybe<u32> = Maybe::ABSENT;
    /// assert_eq!(missing.ok_or("not found"), Outcome::Failure("not found"));
    /// ```
    #[inline]
    pub fn ok_or<L>(self, failure: L) -> Outcome<L, T> {
        match self {
            Maybe::Absent => Outcome::Failure(failure),
            Maybe::Present(t) => Outcome::Success(t),
        }
    }

    /// Convert to `Option<T>`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Absent => None,
            Maybe::Present(t) => Some(t),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(t) => Maybe::Present(t),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}
