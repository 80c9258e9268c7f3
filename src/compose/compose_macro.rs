//! Right-to-left function composition.
//!
//! `compose0` through `compose5` mirror the `pipeN` functions with the
//! mathematical argument order: `compose2(f, g)(x) == f(g(x))`.

/// The empty composition: returns its input unchanged.
#[inline]
pub fn compose0<A>() -> impl Fn(A) -> A {
    |a| a
}

/// A composition of one function.
#[inline]
pub fn compose1<A, B, F0>(f0: F0) -> impl Fn(A) -> B
where
    F0: Fn(A) -> B,
{
    move |a| f0(a)
}

/// `compose2(f0, f1)(x) == f0(f1(x))`.
#[inline]
pub fn compose2<A, B, C, F0, F1>(f0: F0, f1: F1) -> impl Fn(A) -> C
where
    F1: Fn(A) -> B,
    F0: Fn(B) -> C,
{
    move |a| f0(f1(a))
}

/// `compose3(f0, f1, f2)(x) == f0(f1(f2(x)))`.
///
/// # Example
///
/// ```rust
/// use brook::compose::compose3;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
/// let subtract = |x: i32| x - 3;
///
/// assert_eq!(compose3(subtract, double, add_one)(5), 9);
/// ```
///
/// The output of each function must match the input of the one to its left:
///
/// ```compile_fail
/// use brook::compose::compose3;
///
/// let broken = compose3(|n: usize| n * 2, |x: i32| x + 1, |s: String| s.len());
/// broken(String::new());
/// ```
#[inline]
pub fn compose3<A, B, C, D, F0, F1, F2>(f0: F0, f1: F1, f2: F2) -> impl Fn(A) -> D
where
    F2: Fn(A) -> B,
    F1: Fn(B) -> C,
    F0: Fn(C) -> D,
{
    move |a| f0(f1(f2(a)))
}

/// A composition of four functions.
#[inline]
pub fn compose4<A, B, C, D, E, F0, F1, F2, F3>(
    f0: F0,
    f1: F1,
    f2: F2,
    f3: F3,
) -> impl Fn(A) -> E
where
    F3: Fn(A) -> B,
    F2: Fn(B) -> C,
    F1: Fn(C) -> D,
    F0: Fn(D) -> E,
{
    move |a| f0(f1(f2(f3(a))))
}

/// A composition of five functions.
#[inline]
pub fn compose5<A, B, C, D, E, G, F0, F1, F2, F3, F4>(
    f0: F0,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
) -> impl Fn(A) -> G
where
    F4: Fn(A) -> B,
    F3: Fn(B) -> C,
    F2: Fn(C) -> D,
    F1: Fn(D) -> E,
    F0: Fn(E) -> G,
{
    move |a| f0(f1(f2(f3(f4(a)))))
}

/// Builds a function applying its arguments from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`. `compose!()` is the identity
/// function.
///
/// # Example
///
/// ```rust
/// use brook::compose;
///
/// let to_upper = |s: &str| s.to_uppercase();
/// let exclaim = |s: String| format!("{}!", s);
///
/// let composed = compose!(exclaim, to_upper);
/// assert_eq!(composed("hello"), "HELLO!");
/// ```
///
/// Chains longer than five functions keep every adjacent pair checked:
///
/// ```compile_fail
/// use brook::compose;
///
/// let inc = |x: i32| x + 1;
/// let broken = compose!(inc, inc, inc, inc, inc, |s: String| s.len(), inc);
/// broken(0);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::compose::compose0()
    };
    ($f0:expr $(,)?) => {
        $crate::compose::compose1($f0)
    };
    ($f0:expr, $f1:expr $(,)?) => {
        $crate::compose::compose2($f0, $f1)
    };
    ($f0:expr, $f1:expr, $f2:expr $(,)?) => {
        $crate::compose::compose3($f0, $f1, $f2)
    };
    ($f0:expr, $f1:expr, $f2:expr, $f3:expr $(,)?) => {
        $crate::compose::compose4($f0, $f1, $f2, $f3)
    };
    ($f0:expr, $f1:expr, $f2:expr, $f3:expr, $f4:expr $(,)?) => {
        $crate::compose::compose5($f0, $f1, $f2, $f3, $f4)
    };
    ($f0:expr, $f1:expr, $f2:expr, $f3:expr, $f4:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose::compose2(
            $crate::compose::compose5($f0, $f1, $f2, $f3, $f4),
            $crate::compose!($($rest),+),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose0_is_identity() {
        assert_eq!(compose0()(42), 42);
    }

    #[test]
    fn test_compose_applies_right_to_left() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let subtract = |x: i32| x - 3;

        assert_eq!(compose1(double)(5), 10);
        assert_eq!(compose2(add_one, double)(5), 11);
        assert_eq!(compose3(subtract, double, add_one)(5), 9);
        assert_eq!(compose4(double, subtract, double, add_one)(5), 18);
        assert_eq!(compose5(add_one, double, subtract, double, add_one)(5), 19);
    }

    #[test]
    fn test_compose_changes_types() {
        let composed = compose3(
            |n: usize| n % 2 == 0,
            |s: String| s.len(),
            |x: i32| x.to_string(),
        );
        assert!(composed(12));
        assert!(!composed(1));
    }

    #[test]
    fn test_compose_macro_long_chain() {
        let composed = compose!(
            |s: String| s + "a",
            |s: String| s + "b",
            |s: String| s + "c",
            |s: String| s + "d",
            |s: String| s + "e",
            |s: String| s + "f",
            |s: String| s + "g",
        );
        assert_eq!(composed(String::new()), "gfedcba");
    }

    #[test]
    fn test_compose_mirrors_pipe() {
        let f = |x: i32| x + 1;
        let g = |x: i32| x * 2;
        let h = |x: i32| x - 3;

        assert_eq!(compose!(h, g, f)(10), crate::pipe!(f, g, h)(10));
    }
}
