use std::time::{Duration, Instant};

/// A countdown driven by wall-clock time at a fixed frequency. The delay and
/// sound timers are both one of these at 60 Hz.
///
/// The counter only ever moves via `tick()`, which decrements by however many
/// whole intervals have elapsed and banks the remainder, so calling it faster
/// or slower than the frequency neither loses time nor double-counts it.
pub struct CountdownTimer {
    countdown: u8,
    interval: Duration,
    accumulator: Duration,
    last_tick: Instant,
}

impl CountdownTimer {
    pub fn new(freq: u32) -> Self {
        CountdownTimer {
            countdown: 0,
            interval: Duration::from_secs(1) / freq,
            accumulator: Duration::ZERO,
            last_tick: Instant::now(),
        }
    }

    /// assign the counter and restart timekeeping from now
    pub fn set(&mut self, value: u8) {
        self.countdown = value;
        self.accumulator = Duration::ZERO;
        self.last_tick = Instant::now();
    }

    pub fn get(&self) -> u8 {
        self.countdown
    }

    /// fold in the wall-clock time since the last call
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now - self.last_tick;
        self.last_tick = now;
        self.advance(elapsed);
    }

    fn advance(&mut self, elapsed: Duration) {
        if self.countdown == 0 {
            return;
        }

        self.accumulator += elapsed;

        let interval_ns = self.interval.as_nanos();
        let steps = self.accumulator.as_nanos() / interval_ns;
        if steps > 0 {
            let steps = u8::try_from(steps).unwrap_or(u8::MAX);
            self.countdown = self.countdown.saturating_sub(steps);
            // keep only the sub-interval remainder
            self.accumulator =
                Duration::from_nanos((self.accumulator.as_nanos() % interval_ns) as u64);
        }
    }
}
