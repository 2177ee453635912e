use std::time::{Duration, Instant};

/// Monotonic timer owned by a single benchmark run.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Restart the measurement from now.
    #[inline]
    pub fn mark(&mut self) {
        self.start = Instant::now();
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    #[inline]
    pub fn elapsed_ns(&self) -> u128 {
        self.elapsed().as_nanos()
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_monotonic() {
        let watch = Stopwatch::start();
        let first = watch.elapsed_ns();
        std::thread::sleep(Duration::from_millis(1));
        let second = watch.elapsed_ns();
        assert!(second >= first);
        assert!(second >= 1_000_000);
    }

    #[test]
    fn mark_resets_start() {
        let mut watch = Stopwatch::start();
        std::thread::sleep(Duration::from_millis(5));
        watch.mark();
        assert!(watch.elapsed() < Duration::from_secs(5));
    }
}
