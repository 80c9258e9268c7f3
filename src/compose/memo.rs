//! Unary memoization.
//!
//! [`Memoized`] caches the result of a single-argument function per distinct
//! key. Keys are compared with `Eq + Hash`, which gives structural equality for
//! plain values. To key a shared value by identity instead, wrap it in
//! [`ByAddress`]: two separately allocated but equal values are then distinct
//! keys.
//!
//! The cache grows for as long as the wrapper lives and never evicts. Only
//! memoize functions whose argument space is small or naturally bounded.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::{Arc, Mutex, PoisonError};

/// A function wrapped with a per-argument result cache.
///
/// The lock guarding the cache is released while the wrapped function runs,
/// so two threads racing on the same missing key may both compute it; the
/// first stored result wins. Sequential calls run the function at most once
/// per key.
///
/// # Example
///
/// ```rust
/// use brook::compose::Memoized;
///
/// let square = Memoized::new(|x: u64| x * x);
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.len(), 1);
/// ```
pub struct Memoized<A, R, F> {
    f: F,
    cache: Mutex<HashMap<A, R>>,
}

impl<A, R, F> Memoized<A, R, F>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    /// Wrap `f` with an empty cache.
    pub fn new(f: F) -> Self {
        Memoized {
            f,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Return the cached result for `arg`, computing it on first use.
    pub fn call(&self, arg: A) -> R {
        if let Some(hit) = self.lock().get(&arg) {
            return hit.clone();
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(cached = self.len(), "memo cache miss");

        let computed = (self.f)(arg.clone());
        self.lock().entry(arg).or_insert(computed).clone()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<A, R>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A, R, F> fmt::Debug for Memoized<A, R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        f.debug_struct("Memoized")
            .field("f", &"<function>")
            .field("cached", &cached)
            .finish()
    }
}

/// Memoize a unary function, returning a plain closure.
///
/// # Example
///
/// ```rust
/// use brook::compose::memo;
///
/// let shout = memo(|s: String| s.to_uppercase());
/// assert_eq!(shout("hello".to_string()), "HELLO");
/// assert_eq!(shout("world".to_string()), "WORLD");
/// ```
pub fn memo<A, R, F>(f: F) -> impl Fn(A) -> R
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    let memoized = Memoized::new(f);
    move |arg| memoized.call(arg)
}

/// A shared value compared and hashed by its address.
///
/// ```rust
/// use brook::compose::ByAddress;
///
/// let a = ByAddress::new(String::from("same"));
/// let b = ByAddress::new(String::from("same"));
///
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// assert_eq!(*a, *b);
/// ```
pub struct ByAddress<T: ?Sized>(pub Arc<T>);

impl<T> ByAddress<T> {
    /// Allocate `value` and key it by its new address.
    pub fn new(value: T) -> Self {
        ByAddress(Arc::new(value))
    }
}

impl<T: ?Sized> ByAddress<T> {
    fn address(&self) -> *const () {
        Arc::as_ptr(&self.0) as *const ()
    }
}

impl<T: ?Sized> From<Arc<T>> for ByAddress<T> {
    fn from(shared: Arc<T>) -> Self {
        ByAddress(shared)
    }
}

impl<T: ?Sized> Clone for ByAddress<T> {
    fn clone(&self) -> Self {
        ByAddress(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for ByAddress<T> {
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}

impl<T: ?Sized> Eq for ByAddress<T> {}

impl<T: ?Sized> Hash for ByAddress<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

impl<T: ?Sized> Deref for ByAddress<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> fmt::Debug for ByAddress<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ByAddress").field(&self.address()).finish()
    }
}
