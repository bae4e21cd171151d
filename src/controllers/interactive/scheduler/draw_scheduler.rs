use std::time::{Duration, Instant};

/// Default minimum spacing between two draws of the same canvas.
pub const DRAW_INTERVAL: Duration = Duration::from_millis(350);

/// Leading-edge throttle with a trailing call.
///
/// The first request after a quiet period runs at once. Requests inside the
/// interval only overwrite the pending arguments; once the interval ends a
/// single trailing draw runs with the latest of them and opens a new interval.
///
/// The caller supplies `now`, so the policy holds no clock of its own.
#[derive(Debug, Clone)]
pub struct DrawScheduler<A> {
    interval: Duration,
    last_run: Option<Instant>,
    pending: Option<A>,
}

impl<A> DrawScheduler<A> {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
            pending: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Records a draw request. Returns the arguments to draw with if the
    /// draw should run right now.
    pub fn request(&mut self, args: A, now: Instant) -> Option<A> {
        if self.is_open(now) {
            self.pending = None;
            self.last_run = Some(now);
            log::trace!("leading draw");
            return Some(args);
        }

        self.pending = Some(args);
        log::trace!("draw deferred to trailing edge");
        None
    }

    /// Releases the trailing draw once its interval has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<A> {
        if self.pending.is_none() || !self.is_open(now) {
            return None;
        }

        self.last_run = Some(now);
        log::trace!("trailing draw");
        self.pending.take()
    }

    /// When the pending trailing draw becomes due, if there is one.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref()?;

        Some(self.last_run.map_or_else(Instant::now, |last| last + self.interval))
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn is_open(&self, now: Instant) -> bool {
        self.last_run
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }
}

impl<A> Default for DrawScheduler<A> {
    fn default() -> Self {
        Self::new(DRAW_INTERVAL)
    }
}
