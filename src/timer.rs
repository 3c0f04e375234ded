//! Scoped stopwatch used for the progress diagnostics.

use std::time::{Duration, Instant};

// TIMER
// ================================================================================================

/// Measures monotonic wall-clock time from construction (or the last [Self::reset]).
///
/// A timer created with [Self::with_message] reports `<message><duration>` on the diagnostic
/// stream exactly once: when [Self::finish] is called, or when it is dropped without having been
/// finished (e.g. while an error propagates out of the timed region).
#[derive(Debug)]
pub struct Timer {
    message: Option<String>,
    reported: bool,
    start: Instant,
}

impl Timer {
    /// Returns a silent timer.
    pub fn new() -> Self {
        Self { message: None, reported: false, start: Instant::now() }
    }

    /// Returns a timer that reports `message` followed by the elapsed time when it ends.
    pub fn with_message(message: impl Into<String>) -> Self {
        // the clock starts last so the message allocation is not timed
        let message = Some(message.into());
        Self { message, reported: false, start: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn reset(&mut self) {
        self.start = Instant::now();
    }

    /// Stops the timer, reports it and returns the elapsed time.
    pub fn finish(mut self) -> Duration {
        let elapsed = self.elapsed();
        self.report(elapsed);
        elapsed
    }

    fn report(&mut self, elapsed: Duration) {
        if self.reported {
            return;
        }
        self.reported = true;
        if let Some(message) = &self.message {
            tracing::info!("{message}{}", format_duration(elapsed));
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        self.report(elapsed);
    }
}

// FORMATTING
// ================================================================================================

/// Renders a duration in the unit best suited to its magnitude.
pub fn format_duration(duration: Duration) -> String {
    const MICROSECOND: Duration = Duration::from_micros(1);
    const MILLISECOND: Duration = Duration::from_millis(1);
    const SECOND: Duration = Duration::from_secs(1);
    const LONG: Duration = Duration::from_secs(100);

    if duration < MICROSECOND {
        format!("{} nanoseconds (ns)", duration.as_nanos())
    } else if duration < MILLISECOND {
        format!("{} microseconds (us)", duration.as_nanos() as f64 / 1e3)
    } else if duration < SECOND {
        format!("{} milliseconds (ms)", duration.as_micros() as f64 / 1e3)
    } else if duration < LONG {
        format!("{} seconds", duration.as_millis() as f64 / 1e3)
    } else {
        let total = duration.as_secs();
        format!(
            "{}:{:02}:{:02}.{:03} (hh:mm:ss.ss)",
            total / 3600,
            (total / 60) % 60,
            total % 60,
            duration.subsec_millis()
        )
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn durations_use_the_unit_matching_their_magnitude() {
        assert_eq!(format_duration(Duration::from_nanos(42)), "42 nanoseconds (ns)");
        assert_eq!(format_duration(Duration::from_nanos(1_500)), "1.5 microseconds (us)");
        assert_eq!(format_duration(Duration::from_micros(2_250)), "2.25 milliseconds (ms)");
        assert_eq!(format_duration(Duration::from_millis(3_500)), "3.5 seconds");
        assert_eq!(
            format_duration(Duration::from_millis(3_723_004)),
            "1:02:03.004 (hh:mm:ss.ss)"
        );
    }

    #[test]
    fn finish_returns_elapsed_time() {
        let timer = Timer::with_message("slept for ");
        thread::sleep(Duration::from_millis(5));
        assert!(timer.finish() >= Duration::from_millis(5));
    }

    #[test]
    fn reset_restarts_the_clock() {
        let mut timer = Timer::new();
        thread::sleep(Duration::from_millis(20));
        timer.reset();
        assert!(timer.elapsed() < Duration::from_millis(20));
    }
}
