//! A controllable repeating-task worker thread.

use std::sync::{Arc, Mutex, RwLock, RwLockWriteGuard};

use crate::handle::ThreadHandle;
use crate::sync::wait_until;

/// Observable state of a [`ControlLoop`].
///
/// The five states are mutually exclusive at any instant. [`Idle`] is the
/// initial state, [`Joined`] the terminal one (until the next
/// [`start`](ControlLoop::start), which begins a fresh run).
///
/// [`Idle`]: LoopState::Idle
/// [`Joined`]: LoopState::Joined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No worker thread has ever been launched.
    Idle,
    /// The worker is repeatedly invoking the loop body.
    Running,
    /// The worker observed a pause request and is parked between iterations.
    Paused,
    /// The worker observed a stop request and returned from its loop, but the
    /// native thread has not been joined yet.
    Stopped,
    /// The worker thread has been joined.
    Joined,
}

/// The repeating task a [`ControlLoop`] worker invokes each iteration.
type LoopBody = Box<dyn FnMut() + Send + 'static>;

/// What the controller wants of the worker, plus the state the worker has
/// published. Guarded by the intent lock; the flags are only meaningful to a
/// live worker, which re-reads them once per iteration.
struct Intent {
    state: LoopState,
    pause_requested: bool,
    stop_requested: bool,
}

/// Record shared between the controller and the worker thread.
///
/// The loop body lives beside the intent lock, not under it: the worker holds
/// only the body mutex while user code runs, so state queries never contend
/// with a slow callback.
struct Shared {
    intent: RwLock<Intent>,
    body: Mutex<LoopBody>,
}

impl Shared {
    fn state(&self) -> LoopState {
        self.intent.read().unwrap().state
    }
}

/// Clears a pause in place. No-op unless the worker actually parked.
fn resume_locked(intent: &mut RwLockWriteGuard<'_, Intent>) {
    if intent.state == LoopState::Paused {
        intent.pause_requested = false;
        intent.state = LoopState::Running;
    }
}

/// True for the states in which a worker thread is alive and owned.
fn is_busy(state: LoopState) -> bool {
    state == LoopState::Running || state == LoopState::Paused
}

/// The worker thread's loop. Intent is consulted once per iteration, before
/// the body runs; stop and pause requests take effect only at that boundary.
fn run_worker(shared: &Shared) {
    loop {
        {
            let intent = shared.intent.read().unwrap();

            if intent.stop_requested {
                drop(intent);
                shared.intent.write().unwrap().state = LoopState::Stopped;
                break;
            }

            if intent.pause_requested {
                drop(intent);
                shared.intent.write().unwrap().state = LoopState::Paused;
                wait_until(|| shared.state() != LoopState::Paused);
            }
        }

        // The intent lock is released while user code runs.
        let mut body = shared.body.lock().unwrap();
        (*body)();
    }
}

/// A worker thread that repeats a task until told otherwise.
///
/// The loop body - any `FnMut() + Send` closure - runs over and over on a
/// dedicated native thread. The owning side controls the worker through
/// [`start`], [`pause`], [`resume`], [`stop`] and [`join`], and observes it
/// through [`state`].
///
/// Control is **cooperative**: requests are latched into a shared intent
/// record and take effect when the worker next reaches an iteration boundary.
/// A body invocation is never interrupted mid-call, so a stop issued during a
/// long-running invocation becomes visible only once that invocation returns.
///
/// A `ControlLoop` is not `Clone` (it owns its worker thread) but moves
/// freely: the worker addresses the shared record, never the owner, so a
/// running loop stays running across a move. Dropping the loop stops and
/// joins the worker.
///
/// # Example
///
/// ```rust
/// use axle_threads::{ControlLoop, LoopState, wait_until};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let frames = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&frames);
///
/// let mut render = ControlLoop::new(move || {
///     counter.fetch_add(1, Ordering::Relaxed);
/// });
///
/// render.start();
/// wait_until(|| frames.load(Ordering::Relaxed) >= 10);
///
/// render.pause();
/// assert_eq!(render.state(), LoopState::Paused);
///
/// render.resume();
/// assert!(render.join());
/// ```
///
/// [`start`]: ControlLoop::start
/// [`pause`]: ControlLoop::pause
/// [`resume`]: ControlLoop::resume
/// [`stop`]: ControlLoop::stop
/// [`join`]: ControlLoop::join
/// [`state`]: ControlLoop::state
pub struct ControlLoop {
    handle: ThreadHandle,
    shared: Arc<Shared>,
}

impl ControlLoop {
    /// Creates a loop that will repeat `body` once started.
    ///
    /// No thread is launched yet; the loop begins in [`LoopState::Idle`].
    pub fn new<F>(body: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self {
            handle: ThreadHandle::new(),
            shared: Arc::new(Shared {
                intent: RwLock::new(Intent {
                    state: LoopState::Idle,
                    pause_requested: false,
                    stop_requested: false,
                }),
                body: Mutex::new(Box::new(body)),
            }),
        }
    }

    /// Replaces the loop body.
    ///
    /// Fails (returns false) while the worker is [`LoopState::Running`]:
    /// swapping the body out from under a possibly mid-flight invocation is
    /// rejected rather than raced. In every other state the replacement
    /// happens under the exclusive intent lock and the next run (or the next
    /// iteration of a paused worker, once resumed) picks it up.
    pub fn set_callback<F>(&mut self, body: F) -> bool
    where
        F: FnMut() + Send + 'static,
    {
        let intent = self.shared.intent.write().unwrap();
        if intent.state == LoopState::Running {
            return false;
        }

        *self.shared.body.lock().unwrap() = Box::new(body);
        true
    }

    /// Launches a fresh worker thread running the loop body.
    ///
    /// If a previous run is still live, it is wound down first: a stop is
    /// latched (waking the worker if it had parked), the old thread is joined
    /// with no lock held, and only then is the new thread launched with a
    /// clean intent record. Safe to call from any state, repeatedly; at most
    /// one worker thread is ever alive.
    ///
    /// The call blocks no longer than the previous run takes to reach its
    /// next iteration boundary.
    pub fn start(&mut self) {
        {
            let mut intent = self.shared.intent.write().unwrap();
            intent.stop_requested = true;
            resume_locked(&mut intent);
        }

        // The old worker needs the intent lock to publish Stopped, so the
        // lock must not be held across this join.
        self.handle.join();

        self.relaunch(false);
    }

    /// Asks the worker to park, and waits until it has.
    ///
    /// Acts only if the state is [`LoopState::Running`]. The request is
    /// latched under the exclusive lock, then the caller spins (yielding)
    /// until the worker publishes that it is no longer running. On return the
    /// body is guaranteed not to be executing - a confirming pause. The wait
    /// is bounded by at most one in-flight body invocation.
    pub fn pause(&mut self) {
        {
            let mut intent = self.shared.intent.write().unwrap();
            if intent.state != LoopState::Running {
                return;
            }
            intent.pause_requested = true;
        }

        wait_until(|| self.shared.state() != LoopState::Running);
    }

    /// Wakes a parked worker. No-op unless the state is [`LoopState::Paused`].
    pub fn resume(&mut self) {
        let mut intent = self.shared.intent.write().unwrap();
        resume_locked(&mut intent);
    }

    /// Asks the worker to finish its loop.
    ///
    /// Latches a stop request; a parked worker is woken so it can observe the
    /// request instead of parking forever. A woken worker invokes the body
    /// once more before reaching the boundary where the stop is seen.
    ///
    /// Does not wait: observing [`LoopState::Stopped`] requires a subsequent
    /// [`join`](Self::join) or state poll.
    pub fn stop(&mut self) {
        let mut intent = self.shared.intent.write().unwrap();
        intent.stop_requested = true;
        resume_locked(&mut intent);
    }

    /// Stops the loop and waits for the worker thread to finish.
    ///
    /// Equivalent to [`join_with(true)`](Self::join_with).
    pub fn join(&mut self) -> bool {
        self.join_with(true)
    }

    /// Waits for the worker thread to finish, optionally stopping it first.
    ///
    /// With `with_stop` false the caller waits for the loop to end on its own
    /// (some earlier stop request must make that happen). Fails (returns
    /// false) when there is no thread to join or when called from the worker
    /// itself - the self-join case is detected and rejected rather than
    /// deadlocking. On success the state becomes [`LoopState::Joined`] and
    /// the loop may be started again.
    pub fn join_with(&mut self, with_stop: bool) -> bool {
        if with_stop {
            self.stop();
        }

        if !self.handle.join() {
            return false;
        }

        self.shared.intent.write().unwrap().state = LoopState::Joined;
        true
    }

    /// Returns the loop's current state. Shared-lock read; never blocks
    /// beyond ordinary lock contention.
    #[inline]
    pub fn state(&self) -> LoopState {
        self.shared.state()
    }

    /// Exchanges the loop bodies of two loops, preserving which sides were
    /// busy.
    ///
    /// Both workers are stopped and joined first - two live workers must
    /// never trade one intent record - then the bodies are exchanged and each
    /// side relaunches if the *other* had been busy (running or paused) and
    /// not already stop-requested. A side that inherits a paused
    /// classification comes back parked: the pause is latched before its
    /// fresh worker launches, so the worker parks at its first iteration
    /// boundary without invoking the body.
    pub fn swap(&mut self, other: &mut Self) {
        let (self_state, self_stop) = {
            let intent = self.shared.intent.read().unwrap();
            (intent.state, intent.stop_requested)
        };
        let (other_state, other_stop) = {
            let intent = other.shared.intent.read().unwrap();
            (intent.state, intent.stop_requested)
        };

        self.stop();
        other.stop();
        self.handle.join();
        other.handle.join();

        {
            let mut self_body = self.shared.body.lock().unwrap();
            let mut other_body = other.shared.body.lock().unwrap();
            std::mem::swap(&mut *self_body, &mut *other_body);
        }

        if is_busy(other_state) && !other_stop {
            self.relaunch(other_state == LoopState::Paused);
        }
        if is_busy(self_state) && !self_stop {
            other.relaunch(self_state == LoopState::Paused);
        }
    }

    /// Resets the intent record and launches a fresh worker. With `paused`
    /// the pause request is latched before the thread exists, so the new
    /// worker parks before its first body invocation.
    fn relaunch(&mut self, paused: bool) {
        {
            let mut intent = self.shared.intent.write().unwrap();
            intent.stop_requested = false;
            intent.pause_requested = paused;
            intent.state = LoopState::Running;
        }

        let shared = Arc::clone(&self.shared);
        self.handle.launch(move || run_worker(&shared));
    }
}

impl Default for ControlLoop {
    /// A loop whose body does nothing. Install a real body with
    /// [`set_callback`](Self::set_callback) before starting.
    fn default() -> Self {
        Self::new(|| {})
    }
}

impl Drop for ControlLoop {
    fn drop(&mut self) {
        self.join();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn counting_loop() -> (ControlLoop, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let looped = ControlLoop::new(move || {
            counter.fetch_add(1, Ordering::Relaxed);
        });
        (looped, count)
    }

    #[test]
    fn test_initial_state_is_idle() {
        let (worker, count) = counting_loop();
        assert_eq!(worker.state(), LoopState::Idle);
        assert_eq!(count.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_start_runs_body() {
        let (mut worker, count) = counting_loop();
        worker.start();
        assert_eq!(worker.state(), LoopState::Running);

        wait_until(|| count.load(Ordering::Relaxed) > 0);
        assert!(worker.join());
        assert_eq!(worker.state(), LoopState::Joined);
    }

    #[test]
    fn test_stop_without_join_reaches_stopped() {
        let (mut worker, count) = counting_loop();
        worker.start();
        wait_until(|| count.load(Ordering::Relaxed) > 0);

        worker.stop();
        wait_until(|| worker.state() == LoopState::Stopped);
        assert!(worker.join_with(false));
        assert_eq!(worker.state(), LoopState::Joined);
    }

    #[test]
    fn test_resume_without_pause_is_noop() {
        let (mut worker, count) = counting_loop();
        worker.start();
        worker.resume();
        assert_eq!(worker.state(), LoopState::Running);

        wait_until(|| count.load(Ordering::Relaxed) > 0);
        assert!(worker.join());
    }

    #[test]
    fn test_pause_on_idle_is_noop() {
        let (mut worker, _count) = counting_loop();
        worker.pause();
        assert_eq!(worker.state(), LoopState::Idle);
    }

    #[test]
    fn test_join_without_thread_fails() {
        let (mut worker, _count) = counting_loop();
        assert!(!worker.join());
        assert_eq!(worker.state(), LoopState::Idle);
    }

    #[test]
    fn test_stop_from_paused_runs_body_once_more() {
        let (mut worker, count) = counting_loop();
        worker.start();
        wait_until(|| count.load(Ordering::Relaxed) > 0);

        worker.pause();
        assert_eq!(worker.state(), LoopState::Paused);
        let parked_at = count.load(Ordering::Relaxed);

        // The woken worker passes through one body invocation before the
        // iteration boundary where it observes the stop.
        assert!(worker.join());
        assert_eq!(count.load(Ordering::Relaxed), parked_at + 1);
    }

    #[test]
    fn test_set_callback_before_start() {
        let (mut worker, count) = counting_loop();
        let other = Arc::new(AtomicUsize::new(0));
        let replacement = Arc::clone(&other);

        assert!(worker.set_callback(move || {
            replacement.fetch_add(1, Ordering::Relaxed);
        }));

        worker.start();
        wait_until(|| other.load(Ordering::Relaxed) > 0);
        assert!(worker.join());
        assert_eq!(count.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_drop_stops_and_joins() {
        let count = Arc::new(AtomicUsize::new(0));
        {
            let counter = Arc::clone(&count);
            let mut worker = ControlLoop::new(move || {
                counter.fetch_add(1, Ordering::Relaxed);
            });
            worker.start();
            wait_until(|| count.load(Ordering::Relaxed) > 0);
        }

        let settled = count.load(Ordering::Relaxed);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(count.load(Ordering::Relaxed), settled);
    }

    #[test]
    fn test_default_loop_is_inert() {
        let mut worker = ControlLoop::default();
        assert_eq!(worker.state(), LoopState::Idle);
        worker.start();
        assert_eq!(worker.state(), LoopState::Running);
        assert!(worker.join());
    }
}
