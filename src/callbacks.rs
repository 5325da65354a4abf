//! Implementation of different progress sinks and callback functions.
use crate::core::Series;
use std::cell::Cell;
use std::io::{self, Write};

/// Trait for sinks that receive the progress of a single estimation.
pub trait Progress {
    /// Called periodically during the sampling loop with the completed `fraction` in $(0, 1]$.
    fn report(&self, fraction: f64);

    /// Called once after the sampling loop has finished.
    fn finish(&self) {}
}

impl<P: Progress + ?Sized> Progress for Box<P> {
    fn report(&self, fraction: f64) {
        (**self).report(fraction)
    }

    fn finish(&self) {
        (**self).finish()
    }
}

/// A progress sink that does nothing.
pub struct SinkProgress {}

impl Progress for SinkProgress {
    fn report(&self, _: f64) {}
}

/// Writes `Progress: 42.0` to the standard error, overwriting the previous value in place.
pub struct ConsoleProgress {}

impl Progress for ConsoleProgress {
    fn report(&self, fraction: f64) {
        let mut stderr = io::stderr();
        let _ = write!(stderr, "\rProgress: {:.1}", fraction * 100.0);
        let _ = stderr.flush();
    }

    fn finish(&self) {
        let _ = writeln!(io::stderr());
    }
}

/// Emits the progress as `trace` log records, at most one per whole percent.
pub struct LogProgress {
    last_percent: Cell<Option<u32>>,
}

impl LogProgress {
    /// Constructor.
    pub fn new() -> Self {
        Self {
            last_percent: Cell::new(None),
        }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for LogProgress {
    fn report(&self, fraction: f64) {
        let percent = (fraction * 100.0).floor() as u32;

        if self.last_percent.get() != Some(percent) {
            self.last_percent.set(Some(percent));
            log::trace!("progress: {}%", percent);
        }
    }

    fn finish(&self) {
        self.last_percent.set(None);
    }
}

/// Trait for implementing callbacks that run after each finished series.
pub trait Callback<R> {
    /// This method is called after each finished series with all series produced so far.
    fn print(&self, series: &[Series<R>]);
}

/// A callback function that does nothing.
pub struct SinkCallback {}

impl<R> Callback<R> for SinkCallback {
    fn print(&self, _: &[Series<R>]) {}
}

/// A callback function that logs the estimates of each finished series.
pub struct SimpleCallback {}

impl<R> Callback<R> for SimpleCallback {
    fn print(&self, series: &[Series<R>]) {
        // Make sure that there is at least one series
        // otherwise do nothing.
        if let Some(last) = series.last() {
            log::info!("series {} finished.", series.len() - 1);

            for (calls, estimate) in last.sizes().iter().zip(last.estimates()) {
                log::info!("N={} pi={}", calls, estimate);
            }
        }
    }
}
