//! Builder-style pipelines.
//!
//! [`Pipeline`] and [`AsyncPipeline`] grow one step at a time while keeping the
//! input and output types in their signature, so a chain assembled in a loop
//! or across several functions is still type-checked at every step.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

type Step<A, B> = Arc<dyn Fn(A) -> B + Send + Sync>;
type AsyncStep<A, B> = Arc<dyn Fn(A) -> BoxFuture<'static, B> + Send + Sync>;

/// A reusable synchronous function chain from `A` to `B`.
///
/// # Example
///
/// ```rust
/// use brook::Pipeline;
///
/// let slug = Pipeline::new()
///     .then(|title: &'static str| title.trim())
///     .then(|title| title.to_lowercase())
///     .then(|title| title.replace(' ', "-"));
///
/// assert_eq!(slug.call(" Hello World "), "hello-world");
/// assert_eq!(slug.call("Rust"), "rust");
/// ```
pub struct Pipeline<A, B> {
    step: Step<A, B>,
}

impl<A: 'static> Pipeline<A, A> {
    /// The empty pipeline, returning its input unchanged.
    pub fn new() -> Self {
        Pipeline {
            step: Arc::new(|a| a),
        }
    }
}

impl<A: 'static> Default for Pipeline<A, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: 'static, B: 'static> Pipeline<A, B> {
    /// A pipeline consisting of a single step.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        Pipeline { step: Arc::new(f) }
    }

    /// Append a step that runs after every existing step.
    pub fn then<C, F>(self, f: F) -> Pipeline<A, C>
    where
        F: Fn(B) -> C + Send + Sync + 'static,
    {
        let step = self.step;
        Pipeline {
            step: Arc::new(move |a| f(step(a))),
        }
    }

    /// Prepend a step that runs before every existing step.
    pub fn before<Z, F>(self, f: F) -> Pipeline<Z, B>
    where
        F: Fn(Z) -> A + Send + Sync + 'static,
    {
        let step = self.step;
        Pipeline {
            step: Arc::new(move |z| step(f(z))),
        }
    }

    /// Run every step on `input`.
    pub fn call(&self, input: A) -> B {
        (self.step)(input)
    }

    /// Convert into a plain closure, for use with `map` and friends.
    pub fn into_fn(self) -> impl Fn(A) -> B + Send + Sync {
        let step = self.step;
        move |a| step(a)
    }
}

impl<A, B> Clone for Pipeline<A, B> {
    fn clone(&self) -> Self {
        Pipeline {
            step: Arc::clone(&self.step),
        }
    }
}

impl<A, B> fmt::Debug for Pipeline<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("step", &"<function>")
            .finish()
    }
}

/// A reusable function chain whose steps may suspend.
///
/// Each step starts only after the previous one has resolved. Calling the
/// pipeline builds the future; nothing runs until it is polled.
///
/// # Example
///
/// ```rust
/// use brook::AsyncPipeline;
///
/// # tokio_test::block_on(async {
/// let lookup = AsyncPipeline::new()
///     .then(|id: u32| id * 10)
///     .then_async(|row: u32| async move { format!("row {}", row) })
///     .then(|label| label.len());
///
/// assert_eq!(lookup.call(4).await, 6);
/// # });
/// ```
pub struct AsyncPipeline<A, B> {
    step: AsyncStep<A, B>,
}

impl<A: Send + 'static> AsyncPipeline<A, A> {
    /// The empty pipeline, resolving immediately to its input.
    pub fn new() -> Self {
        AsyncPipeline {
            step: Arc::new(|a| futures::future::ready(a).boxed()),
        }
    }
}

impl<A: Send + 'static> Default for AsyncPipeline<A, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Send + 'static, B: Send + 'static> AsyncPipeline<A, B> {
    /// Append a plain step.
    pub fn then<C, F>(self, f: F) -> AsyncPipeline<A, C>
    where
        C: Send + 'static,
        F: Fn(B) -> C + Send + Sync + 'static,
    {
        let step = self.step;
        let f = Arc::new(f);
        AsyncPipeline {
            step: Arc::new(move |a| {
                let pending = step(a);
                let f = Arc::clone(&f);
                async move { f(pending.await) }.boxed()
            }),
        }
    }

    /// Append a step returning a future.
    pub fn then_async<C, Fut, F>(self, f: F) -> AsyncPipeline<A, C>
    where
        C: Send + 'static,
        Fut: Future<Output = C> + Send + 'static,
        F: Fn(B) -> Fut + Send + Sync + 'static,
    {
        let step = self.step;
        let f = Arc::new(f);
        AsyncPipeline {
            step: Arc::new(move |a| {
                let pending = step(a);
                let f = Arc::clone(&f);
                async move { f(pending.await).await }.boxed()
            }),
        }
    }

    /// Prepend a plain step.
    pub fn before<Z, F>(self, f: F) -> AsyncPipeline<Z, B>
    where
        Z: Send + 'static,
        F: Fn(Z) -> A + Send + Sync + 'static,
    {
        let step = self.step;
        AsyncPipeline {
            step: Arc::new(move |z| step(f(z))),
        }
    }

    /// Prepend a step returning a future.
    pub fn before_async<Z, Fut, F>(self, f: F) -> AsyncPipeline<Z, B>
    where
        Z: Send + 'static,
        Fut: Future<Output = A> + Send + 'static,
        F: Fn(Z) -> Fut + Send + Sync + 'static,
    {
        let step = self.step;
        AsyncPipeline {
            step: Arc::new(move |z| {
                let pending = f(z);
                let step = Arc::clone(&step);
                async move { step(pending.await).await }.boxed()
            }),
        }
    }

    /// Run every step on `input`.
    pub fn call(&self, input: A) -> BoxFuture<'static, B> {
        (self.step)(input)
    }
}

impl<A, B> Clone for AsyncPipeline<A, B> {
    fn clone(&self) -> Self {
        AsyncPipeline {
            step: Arc::clone(&self.step),
        }
    }
}

impl<A, B> fmt::Debug for AsyncPipeline<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncPipeline")
            .field("step", &"<function>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = Pipeline::<i32, i32>::default();
        assert_eq!(pipeline.call(3), 3);
    }

    #[test]
    fn test_then_runs_left_to_right() {
        let pipeline = Pipeline::new().then(|x: i32| x + 1).then(|x| x * 2);
        assert_eq!(pipeline.call(5), 12);
    }

    #[test]
    fn test_before_runs_first() {
        let pipeline = Pipeline::from_fn(|x: i32| x * 2).before(|s: &'static str| s.len() as i32);
        assert_eq!(pipeline.call("four"), 8);
    }

    #[test]
    fn test_pipeline_built_in_a_loop() {
        let mut pipeline = Pipeline::new();
        for _ in 0..10 {
            pipeline = pipeline.then(|x: u64| x + 1);
        }
        assert_eq!(pipeline.call(0), 10);
    }

    #[test]
    fn test_into_fn_works_with_iterators() {
        let double = Pipeline::new().then(|x: i32| x * 2).into_fn();
        let doubled: Vec<i32> = vec![1, 2, 3].into_iter().map(double).collect();
        assert_eq!(doubled, vec![2, 4, 6]);
    }

    #[test]
    fn test_clone_shares_steps() {
        let pipeline = Pipeline::new().then(|x: i32| x - 1);
        let copy = pipeline.clone();
        assert_eq!(pipeline.call(1), copy.call(1));
    }

    #[test]
    fn test_debug_hides_function() {
        let pipeline = Pipeline::<u8, u8>::new();
        assert_eq!(format!("{:?}", pipeline), "Pipeline { step: \"<function>\" }");
    }

    #[tokio::test]
    async fn test_async_pipeline_mixes_plain_and_async_steps() {
        let pipeline = AsyncPipeline::new()
            .then(|x: i32| x + 1)
            .then_async(|x| async move { x * 2 })
            .then(|x| x.to_string());

        assert_eq!(pipeline.call(5).await, "12");
        assert_eq!(pipeline.call(0).await, "2");
    }

    #[tokio::test]
    async fn test_async_steps_wait_for_previous_step() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let first = Arc::clone(&log);
        let second = Arc::clone(&log);

        let pipeline = AsyncPipeline::new()
            .then_async(move |x: i32| {
                let log = Arc::clone(&first);
                async move {
                    tokio::task::yield_now().await;
                    log.lock().unwrap().push("first");
                    x
                }
            })
            .then(move |x| {
                second.lock().unwrap().push("second");
                x
            });

        let pending = pipeline.call(1);
        assert!(log.lock().unwrap().is_empty());

        pending.await;
        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_async_before_steps() {
        let pipeline = AsyncPipeline::new()
            .then(|x: usize| x * 3)
            .before(|s: String| s.len())
            .before_async(|n: u8| async move { "x".repeat(usize::from(n)) });

        assert_eq!(pipeline.call(4).await, 12);
    }
}
