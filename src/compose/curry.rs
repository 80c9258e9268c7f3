//! Conversion between two-argument functions and their curried form.

use std::sync::Arc;

/// The curried form of a two-argument function, as returned by [`curry`].
pub type Curried<B, R> = Box<dyn Fn(B) -> R + Send + Sync>;

/// Turn `f(a, b)` into `f(a)(b)`.
///
/// The first argument is cloned on every application of the returned inner
/// function, so the inner function can be called repeatedly.
///
/// # Example
///
/// ```rust
/// use brook::compose::curry;
///
/// let add = curry(|x: i32, y: i32| x + y);
/// let add_five = add(5);
///
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
pub fn curry<A, B, R, F>(f: F) -> impl Fn(A) -> Curried<B, R>
where
    A: Clone + Send + Sync + 'static,
    F: Fn(A, B) -> R + Send + Sync + 'static,
{
    let f = Arc::new(f);
    move |a| {
        let f = Arc::clone(&f);
        Box::new(move |b| f(a.clone(), b))
    }
}

/// Turn `f(a)(b)` into `f(a, b)`.
///
/// Accepts any function returning a callable, including the output of
/// [`curry`]: `uncurry(curry(f))(a, b) == f(a, b)`.
///
/// # Example
///
/// ```rust
/// use brook::compose::uncurry;
///
/// let concat = uncurry(|a: String| move |b: &str| a + b);
/// assert_eq!(concat("Hello, ".to_string(), "World!"), "Hello, World!");
/// ```
pub fn uncurry<A, B, R, F, G>(f: F) -> impl Fn(A, B) -> R
where
    F: Fn(A) -> G,
    G: FnOnce(B) -> R,
{
    move |a, b| f(a)(b)
}
