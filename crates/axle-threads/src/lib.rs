//! # axle-threads
//!
//! Controllable worker threads for the axle toolkit.
//!
//! This crate provides a small layered abstraction over OS threads:
//!
//! - [`ThreadHandle`] - owns at most one native thread; launch, join, swap
//! - [`ControlLoop`] - a repeating-task worker built on [`ThreadHandle`],
//!   with pause/resume/stop control from any owning context
//! - [`wait_until`] - the yielding spin-wait both layers are built on
//!
//! # Design
//!
//! A [`ControlLoop`] runs a user callback over and over on a dedicated worker
//! thread. The controller side (whoever owns the loop) and the worker share a
//! small intent record - the current state plus pause/stop request flags -
//! behind one reader/writer lock. The worker re-reads intent once per
//! iteration and invokes the callback with the lock released, so slow user
//! code never blocks a controller querying [`ControlLoop::state`].
//!
//! Cancellation is **cooperative**: a stop or pause request only takes effect
//! at the next iteration boundary, and a callback invocation is never
//! interrupted mid-call.
//!
//! # Usage
//!
//! ```rust
//! use axle_threads::{ControlLoop, LoopState, wait_until};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let ticks = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&ticks);
//!
//! let mut worker = ControlLoop::new(move || {
//!     counter.fetch_add(1, Ordering::Relaxed);
//! });
//!
//! worker.start();
//! wait_until(|| ticks.load(Ordering::Relaxed) > 0);
//!
//! worker.pause();
//! assert_eq!(worker.state(), LoopState::Paused);
//!
//! worker.resume();
//! assert!(worker.join());
//! assert_eq!(worker.state(), LoopState::Joined);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod control;
mod handle;
mod sync;

pub use control::{ControlLoop, LoopState};
pub use handle::{HandleState, ThreadHandle};
pub use sync::wait_until;
