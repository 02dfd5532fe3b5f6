//! # axle-core
//!
//! Core utilities for the axle toolkit.
//!
//! This crate provides the small, foundational pieces the rest of the
//! workspace builds on:
//!
//! - [`Error`], [`Result`] - unified error handling
//! - [`Timer`] - elapsed-time measurement over a monotonic clock
//! - [`Random`] - an explicitly constructed pseudo-random generator
//!
//! # Design
//!
//! Nothing here is global. In particular [`Random`] is an owned value that
//! callers construct and pass where randomness is needed - there is no
//! process-wide engine and no hidden thread-local state, so seeded runs are
//! reproducible and tests stay deterministic.
//!
//! # Usage
//!
//! ```rust
//! use axle_core::{Random, Timer};
//!
//! let mut rng = Random::from_seed(7);
//! let timer = Timer::new();
//!
//! let roll = rng.range_i32(1, 7);
//! assert!((1..7).contains(&roll));
//! assert!(timer.elapsed_secs() >= 0.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod random;
pub mod timer;

pub use error::{Error, Result};
pub use random::Random;
pub use timer::Timer;
