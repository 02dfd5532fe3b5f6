//! Elapsed-time measurement.

use std::time::{Duration, Instant};

/// A stopwatch over the monotonic system clock.
///
/// Starts counting on construction; [`reset`](Timer::reset) restarts it.
/// The elapsed views are thin conversions over [`Duration`], so reading one
/// does not disturb the measurement.
///
/// # Example
///
/// ```rust
/// use axle_core::Timer;
///
/// let mut timer = Timer::new();
/// // ... do work ...
/// let ms = timer.elapsed_ms();
/// assert!(ms >= 0.0);
///
/// timer.reset(); // measure the next stretch from here
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Creates a timer measuring from now.
    #[inline]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Restarts the measurement from now.
    #[inline]
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Time elapsed since construction or the last reset.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed whole nanoseconds.
    #[inline]
    pub fn elapsed_ns(&self) -> u128 {
        self.elapsed().as_nanos()
    }

    /// Elapsed microseconds.
    #[inline]
    pub fn elapsed_us(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1_000_000.0
    }

    /// Elapsed milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1_000.0
    }

    /// Elapsed seconds.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_elapsed_is_monotonic() {
        let timer = Timer::new();
        let first = timer.elapsed_ns();
        let second = timer.elapsed_ns();
        assert!(second >= first);
    }

    #[test]
    fn test_elapsed_grows_with_sleep() {
        let timer = Timer::new();
        thread::sleep(Duration::from_millis(10));
        assert!(timer.elapsed_ms() >= 10.0);
    }

    #[test]
    fn test_reset_rewinds() {
        let mut timer = Timer::new();
        thread::sleep(Duration::from_millis(10));
        timer.reset();
        assert!(timer.elapsed_ms() < 10.0);
    }

    #[test]
    fn test_unit_views_agree() {
        let timer = Timer::new();
        thread::sleep(Duration::from_millis(5));
        let secs = timer.elapsed_secs();
        let ms = timer.elapsed_ms();
        assert!((ms - secs * 1_000.0).abs() < 1.0);
    }
}
