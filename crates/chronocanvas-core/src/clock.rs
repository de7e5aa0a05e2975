//! Monotonic millisecond timestamps for ids and cache keys.

use web_time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch (0 if the clock is before it).
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Issues strictly increasing timestamps, even when the wall clock stalls
/// or steps backwards.
#[derive(Debug, Clone, Default)]
pub struct MonotonicClock {
    last: u64,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next timestamp, based on the current time.
    pub fn next(&mut self) -> u64 {
        self.next_from(now_millis())
    }

    /// Next timestamp, given the current wall-clock reading.
    pub fn next_from(&mut self, now: u64) -> u64 {
        let value = if now > self.last { now } else { self.last + 1 };
        self.last = value;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_increasing() {
        let mut clock = MonotonicClock::new();
        let mut previous = 0;
        for _ in 0..1000 {
            let value = clock.next();
            assert!(value > previous);
            previous = value;
        }
    }

    #[test]
    fn test_stalled_and_backwards_clock() {
        let mut clock = MonotonicClock::new();
        assert_eq!(clock.next_from(500), 500);
        assert_eq!(clock.next_from(500), 501);
        assert_eq!(clock.next_from(100), 502);
        assert_eq!(clock.next_from(900), 900);
    }
}
