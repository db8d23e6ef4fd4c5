/// Cadence clocks.
///
/// Each simulation event (fire, spawn, fall) runs on its own wall-clock
/// interval, multiplexed onto the single tick loop.  A cadence is just a
/// last-fired timestamp plus a threshold, compared — never slept on —
/// against a caller-supplied `Instant`, so tests drive them with
/// simulated clocks.

use std::time::{Duration, Instant};

/// All loop timing in one place.
#[derive(Clone, Copy, Debug)]
pub struct Timings {
    pub fire_every: Duration,
    pub spawn_every: Duration,
    pub fall_every: Duration,
    /// Fixed end-of-tick delay.
    pub tick_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            fire_every: Duration::from_millis(100),
            spawn_every: Duration::from_millis(2000),
            fall_every: Duration::from_millis(500),
            tick_delay: Duration::from_millis(10),
        }
    }
}

/// One elapsed-time comparison clock.
#[derive(Clone, Copy, Debug)]
pub struct Cadence {
    every: Duration,
    last: Instant,
}

impl Cadence {
    pub fn new(every: Duration, now: Instant) -> Self {
        Self { every, last: now }
    }

    /// True when the threshold has been met; firing resets the clock to
    /// `now`.  Nothing external ever resets it.
    pub fn due(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last) >= self.every {
            self.last = now;
            true
        } else {
            false
        }
    }
}

/// Which cadences fired this tick — the input to `compute::tick`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub fire: bool,
    pub spawn: bool,
    pub fall: bool,
}

/// The three event clocks, polled once per tick.
#[derive(Clone, Copy, Debug)]
pub struct Cadences {
    fire: Cadence,
    spawn: Cadence,
    fall: Cadence,
}

impl Cadences {
    pub fn new(timings: &Timings, now: Instant) -> Self {
        Self {
            fire: Cadence::new(timings.fire_every, now),
            spawn: Cadence::new(timings.spawn_every, now),
            fall: Cadence::new(timings.fall_every, now),
        }
    }

    pub fn poll(&mut self, now: Instant) -> TickEvents {
        TickEvents {
            fire: self.fire.due(now),
            spawn: self.spawn.due(now),
            fall: self.fall.due(now),
        }
    }
}
