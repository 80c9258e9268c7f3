//! Small combinators used as pipeline filler.

/// Returns its argument unchanged.
///
/// `compose!(identity, f)` and `pipe!(f, identity)` behave exactly like `f`.
///
/// ```rust
/// use brook::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// A function that accepts anything and does nothing.
///
/// Useful as the ignored arm of [`Outcome::fold`](crate::Outcome::fold) when
/// only one side matters.
///
/// ```rust
/// use brook::compose::noop;
/// use brook::Outcome;
///
/// let mut seen = Vec::new();
/// Outcome::<&str, i32>::pure(3).fold(noop(), |n| seen.push(n));
/// assert_eq!(seen, vec![3]);
/// ```
#[inline]
pub fn noop<T>() -> impl Fn(T) {
    |_| ()
}

/// A function that ignores its input and returns a clone of `value`.
///
/// ```rust
/// use brook::compose::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swap the arguments of a two-argument function.
///
/// ```rust
/// use brook::compose::flip;
///
/// let subtract = |a: i32, b: i32| a - b;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |b, a| f(a, b)
}
