//! Left-to-right function pipelines.
//!
//! `pipe0` through `pipe5` are the explicit, individually typed forms: each
//! adjacent pair of steps is checked by the compiler, so a mismatch points at
//! the offending argument. The [`pipe!`](crate::pipe!) macro accepts any
//! number of steps, delegating to these functions for up to five and folding
//! longer chains.

/// The empty pipeline: returns its input unchanged.
#[inline]
pub fn pipe0<A>() -> impl Fn(A) -> A {
    |a| a
}

/// A pipeline of one step.
#[inline]
pub fn pipe1<A, B, F0>(f0: F0) -> impl Fn(A) -> B
where
    F0: Fn(A) -> B,
{
    move |a| f0(a)
}

/// `pipe2(f0, f1)(x) == f1(f0(x))`.
#[inline]
pub fn pipe2<A, B, C, F0, F1>(f0: F0, f1: F1) -> impl Fn(A) -> C
where
    F0: Fn(A) -> B,
    F1: Fn(B) -> C,
{
    move |a| f1(f0(a))
}

/// `pipe3(f0, f1, f2)(x) == f2(f1(f0(x)))`.
///
/// # Example
///
/// ```rust
/// use brook::compose::pipe3;
///
/// let shout = pipe3(
///     |s: &str| s.trim().to_string(),
///     |s: String| s.to_uppercase(),
///     |s: String| format!("{}!", s),
/// );
/// assert_eq!(shout("  hello "), "HELLO!");
/// ```
///
/// Adjacent steps must agree on types:
///
/// ```compile_fail
/// use brook::compose::pipe3;
///
/// let broken = pipe3(|x: i32| x + 1, |s: String| s.len(), |n: usize| n * 2);
/// broken(1);
/// ```
#[inline]
pub fn pipe3<A, B, C, D, F0, F1, F2>(f0: F0, f1: F1, f2: F2) -> impl Fn(A) -> D
where
    F0: Fn(A) -> B,
    F1: Fn(B) -> C,
    F2: Fn(C) -> D,
{
    move |a| f2(f1(f0(a)))
}

/// A pipeline of four steps.
#[inline]
pub fn pipe4<A, B, C, D, E, F0, F1, F2, F3>(f0: F0, f1: F1, f2: F2, f3: F3) -> impl Fn(A) -> E
where
    F0: Fn(A) -> B,
    F1: Fn(B) -> C,
    F2: Fn(C) -> D,
    F3: Fn(D) -> E,
{
    move |a| f3(f2(f1(f0(a))))
}

/// A pipeline of five steps.
#[inline]
pub fn pipe5<A, B, C, D, E, G, F0, F1, F2, F3, F4>(
    f0: F0,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
) -> impl Fn(A) -> G
where
    F0: Fn(A) -> B,
    F1: Fn(B) -> C,
    F2: Fn(C) -> D,
    F3: Fn(D) -> E,
    F4: Fn(E) -> G,
{
    move |a| f4(f3(f2(f1(f0(a)))))
}

/// Builds a function applying its steps from left to right.
///
/// `pipe!(f, g, h)(x)` is `h(g(f(x)))`. `pipe!()` is the identity function.
///
/// Up to five steps expand to the matching `pipeN` function; longer chains
/// are split into a five-step head and a recursively piped tail.
///
/// # Example
///
/// ```rust
/// use brook::pipe;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
/// let subtract = |x: i32| x - 3;
///
/// let piped = pipe!(add_one, double, subtract);
/// assert_eq!(piped(5), 9);
///
/// let identity = pipe!();
/// assert_eq!(identity(42), 42);
/// ```
///
/// Chains longer than five steps are still checked pair by pair, including
/// the pair straddling the fifth step:
///
/// ```compile_fail
/// use brook::pipe;
///
/// let inc = |x: i32| x + 1;
/// let broken = pipe!(inc, inc, inc, inc, inc, |s: String| s.len());
/// broken(0);
/// ```
///
/// and pairs inside the folded tail:
///
/// ```compile_fail
/// use brook::pipe;
///
/// let inc = |x: i32| x + 1;
/// let broken = pipe!(inc, inc, inc, inc, inc, inc, |s: String| s.len());
/// broken(0);
/// ```
#[macro_export]
macro_rules! pipe {
    () => {
        $crate::compose::pipe0()
    };
    ($f0:expr $(,)?) => {
        $crate::compose::pipe1($f0)
    };
    ($f0:expr, $f1:expr $(,)?) => {
        $crate::compose::pipe2($f0, $f1)
    };
    ($f0:expr, $f1:expr, $f2:expr $(,)?) => {
        $crate::compose::pipe3($f0, $f1, $f2)
    };
    ($f0:expr, $f1:expr, $f2:expr, $f3:expr $(,)?) => {
        $crate::compose::pipe4($f0, $f1, $f2, $f3)
    };
    ($f0:expr, $f1:expr, $f2:expr, $f3:expr, $f4:expr $(,)?) => {
        $crate::compose::pipe5($f0, $f1, $f2, $f3, $f4)
    };
    ($f0:expr, $f1:expr, $f2:expr, $f3:expr, $f4:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::pipe2(
            $crate::compose::pipe5($f0, $f1, $f2, $f3, $f4),
            $crate::pipe!($($rest),+),
        )
    };
}
