//! Deferred execution on the tokio timer.

use std::time::Duration;

use tokio::task::JoinHandle;

/// A handle to a pending [`delay`] invocation.
///
/// Dropping the handle does NOT cancel the invocation; call
/// [`cancel`](DelayHandle::cancel) to abort it before the wait elapses.
#[derive(Debug)]
pub struct DelayHandle {
    task: JoinHandle<()>,
}

impl DelayHandle {
    /// Aborts the invocation if it has not run yet.
    ///
    /// Cancelling after the function has already run has no effect.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Returns whether the deferred invocation has completed or been
    /// cancelled.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the deferred invocation.
    ///
    /// Returns `true` if the function ran to completion, `false` if the
    /// invocation was cancelled or panicked.
    pub async fn join(self) -> bool {
        self.task.await.is_ok()
    }
}

/// Schedules `function(argument)` to run no sooner than `wait` from now.
///
/// The call returns immediately; the invocation happens on a spawned
/// tokio task after sleeping `wait`. There is no real-time precision
/// guarantee — only "at or after the wait" — and no ordering promise
/// between separate pending delays.
///
/// # Panics
///
/// Panics if called outside a tokio runtime, as
/// [`tokio::spawn`] requires one.
///
/// # Examples
///
/// ```rust
/// use lowbar::wrapper::delay;
/// use std::time::Duration;
///
/// # async fn schedule() {
/// let handle = delay(
///     |name: &str| println!("hello, {name}"),
///     Duration::from_millis(500),
///     "world",
/// );
///
/// // Changed our mind before the wait elapsed
/// handle.cancel();
/// # }
/// ```
pub fn delay<A, F>(function: F, wait: Duration, argument: A) -> DelayHandle
where
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    let task = tokio::spawn(async move {
        tokio::time::sleep(wait).await;
        function(argument);
    });
    DelayHandle { task }
}
