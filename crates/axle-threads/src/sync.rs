//! Yielding spin-wait.

use std::thread;

/// Blocks the calling thread until `predicate` returns true.
///
/// Polls the predicate in a tight loop, yielding the processor between
/// checks. Because the predicate is re-evaluated on every pass, there is no
/// wakeup to miss: a flag set immediately before the first check is observed
/// on that check.
///
/// The wait is unbounded. Callers are responsible for ensuring the predicate
/// eventually becomes true.
///
/// # Example
///
/// ```rust
/// use axle_threads::wait_until;
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
///
/// let done = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&done);
///
/// let worker = std::thread::spawn(move || flag.store(true, Ordering::Relaxed));
/// wait_until(|| done.load(Ordering::Relaxed));
/// worker.join().unwrap();
/// ```
pub fn wait_until(mut predicate: impl FnMut() -> bool) {
    while !predicate() {
        thread::yield_now();
    }
}
