use std::sync::atomic::{AtomicI64, Ordering};

/// Cached chain time in unix seconds. Seeded from a one-shot RPC read and
/// kept fresh by the clock sysvar subscription, so scan passes never touch
/// the network.
#[derive(Debug)]
pub struct ChainClock(AtomicI64);

impl ChainClock {
    pub fn new(unix_timestamp: i64) -> Self {
        ChainClock(AtomicI64::new(unix_timestamp))
    }

    pub fn now(&self) -> i64 {
        self.0.load(Ordering::Acquire)
    }

    pub fn set(&self, unix_timestamp: i64) {
        self.0.store(unix_timestamp, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_set_and_read() {
        let clock = ChainClock::new(1000);
        assert_eq!(clock.now(), 1000);

        clock.set(1031);
        assert_eq!(clock.now(), 1031);
    }
}
