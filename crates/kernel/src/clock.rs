use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic source of elapsed seconds since the clock started.
pub trait Clock {
    fn elapsed(&self) -> f64;
}

/// Wall clock started at construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Clock advanced by hand. Clones share the same time, so a test can keep a
/// handle while the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward. Negative or NaN steps are ignored.
    pub fn advance(&self, seconds: f64) {
        if seconds > 0.0 {
            self.now.set(self.now.get() + seconds);
        }
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> f64 {
        self.now.get()
    }
}

/// Wraps a clock with pause bookkeeping.
///
/// With `freeze_while_paused` off, pausing has no effect on time and a resume
/// continues from the inner clock's current reading. With it on, time spent
/// paused is subtracted so the reading picks up where it stopped.
#[derive(Debug, Clone)]
pub struct PlaybackClock<C> {
    inner: C,
    freeze_while_paused: bool,
    paused_at: Option<f64>,
    paused_total: f64,
}

impl<C: Clock> PlaybackClock<C> {
    pub fn new(inner: C, freeze_while_paused: bool) -> Self {
        Self {
            inner,
            freeze_while_paused,
            paused_at: None,
            paused_total: 0.0,
        }
    }

    pub fn pause(&mut self) {
        if self.freeze_while_paused && self.paused_at.is_none() {
            self.paused_at = Some(self.inner.elapsed());
        }
    }

    pub fn resume(&mut self) {
        if let Some(at) = self.paused_at.take() {
            self.paused_total += self.inner.elapsed() - at;
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Clock> Clock for PlaybackClock<C> {
    fn elapsed(&self) -> f64 {
        let now = self.paused_at.unwrap_or_else(|| self.inner.elapsed());
        (now - self.paused_total).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_shares_time_across_clones() {
        let a = ManualClock::new();
        let b = a.clone();
        a.advance(1.5);
        assert_eq!(b.elapsed(), 1.5);
    }

    #[test]
    fn manual_clock_ignores_backwards_steps() {
        let c = ManualClock::new();
        c.advance(2.0);
        c.advance(-1.0);
        c.advance(f64::NAN);
        assert_eq!(c.elapsed(), 2.0);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let c = SystemClock::new();
        let a = c.elapsed();
        let b = c.elapsed();
        assert!(b >= a);
    }

    #[test]
    fn running_playback_clock_ignores_pause() {
        let time = ManualClock::new();
        let mut clock = PlaybackClock::new(time.clone(), false);
        time.advance(2.0);
        clock.pause();
        time.advance(3.0);
        clock.resume();
        assert_eq!(clock.elapsed(), 5.0);
    }

    #[test]
    fn freezing_playback_clock_skips_paused_time() {
        let time = ManualClock::new();
        let mut clock = PlaybackClock::new(time.clone(), true);
        time.advance(2.0);
        clock.pause();
        time.advance(3.0);
        assert_eq!(clock.elapsed(), 2.0);
        clock.resume();
        time.advance(0.5);
        assert_eq!(clock.elapsed(), 2.5);
    }

    #[test]
    fn double_pause_keeps_first_mark() {
        let time = ManualClock::new();
        let mut clock = PlaybackClock::new(time.clone(), true);
        time.advance(1.0);
        clock.pause();
        time.advance(1.0);
        clock.pause();
        clock.resume();
        assert_eq!(clock.elapsed(), 1.0);
    }
}
