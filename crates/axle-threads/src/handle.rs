//! Owning handle over a single native thread.

use std::thread::{self, JoinHandle};

/// Lifecycle of a [`ThreadHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleState {
    /// No task has been assigned; the handle owns no thread.
    Idle,
    /// The handle owns a launched thread.
    Running,
    /// The owned thread has finished and been joined.
    Joined,
}

/// An owning handle for at most one native thread of execution.
///
/// A handle starts empty ([`HandleState::Idle`]), takes ownership of a thread
/// via [`launch`](ThreadHandle::launch), and releases it via
/// [`join`](ThreadHandle::join). After a successful join the handle is
/// reusable: a new task may be launched on it.
///
/// The handle is not `Clone` - a native thread cannot have two owners.
/// Dropping a handle that still owns a running thread joins it first,
/// so no detached thread ever outlives its handle.
///
/// # Example
///
/// ```rust
/// use axle_threads::{HandleState, ThreadHandle};
///
/// let mut handle = ThreadHandle::new();
/// assert_eq!(handle.state(), HandleState::Idle);
///
/// assert!(handle.launch(|| {}));
/// assert!(handle.join());
/// assert_eq!(handle.state(), HandleState::Joined);
///
/// // Reusable after a successful join.
/// assert!(handle.launch(|| {}));
/// assert!(handle.join());
/// ```
#[derive(Debug, Default)]
pub struct ThreadHandle {
    thread: Option<JoinHandle<()>>,
    state: HandleState,
}

impl Default for HandleState {
    fn default() -> Self {
        Self::Idle
    }
}

impl ThreadHandle {
    /// Creates an empty handle that owns no thread.
    #[inline]
    pub const fn new() -> Self {
        Self {
            thread: None,
            state: HandleState::Idle,
        }
    }

    /// Creates a handle that immediately owns a thread running `task`.
    ///
    /// Equivalent to [`new`](Self::new) followed by a successful
    /// [`launch`](Self::launch).
    pub fn spawn<F>(task: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            thread: Some(thread::spawn(task)),
            state: HandleState::Running,
        }
    }

    /// Assigns `task` to a fresh native thread owned by this handle.
    ///
    /// Fails (returns false, with no side effect) if the handle is still
    /// [`HandleState::Running`]; join the previous thread first. Launching
    /// from [`HandleState::Idle`] or [`HandleState::Joined`] succeeds.
    pub fn launch<F>(&mut self, task: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        if self.state == HandleState::Running {
            return false;
        }

        self.thread = Some(thread::spawn(task));
        self.state = HandleState::Running;
        true
    }

    /// Waits for the owned thread to finish.
    ///
    /// Fails (returns false) if there is no underlying thread, or if the
    /// calling thread *is* the owned thread - a self-join is rejected instead
    /// of blocking forever. On success the caller blocks until the thread's
    /// task returns, the lifecycle becomes [`HandleState::Joined`], and the
    /// thread resource is released.
    ///
    /// A task that panicked is still reclaimed; the join succeeds.
    pub fn join(&mut self) -> bool {
        let Some(handle) = self.thread.take() else {
            return false;
        };

        if handle.thread().id() == thread::current().id() {
            self.thread = Some(handle);
            return false;
        }

        let _ = handle.join();
        self.state = HandleState::Joined;
        true
    }

    /// Returns the handle's lifecycle state.
    #[inline]
    pub fn state(&self) -> HandleState {
        self.state
    }

    /// Exchanges the owned threads and lifecycle tags of two handles.
    ///
    /// No internal locking: callers that share handles across threads
    /// synchronize at a higher layer.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.thread, &mut other.thread);
        std::mem::swap(&mut self.state, &mut other.state);
    }
}

impl Drop for ThreadHandle {
    fn drop(&mut self) {
        self.join();
    }
}
