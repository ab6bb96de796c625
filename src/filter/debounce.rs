use std::time::{Duration, Instant};

/// Quiet window applied to search input before it reaches the filter.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Trailing-edge debouncer driven by explicit timestamps.
///
/// Every [`Debouncer::push`] replaces the pending value and restarts the quiet
/// window. [`Debouncer::poll`] releases the latest value once the window has
/// elapsed without further input.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value`, cancelling whatever was pending.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let elapsed = matches!(&self.pending, Some((_, deadline)) if now >= *deadline);
        if !elapsed {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    /// When the pending value will fire, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn burst_of_keystrokes_fires_once_with_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));
        assert_eq!(debouncer.delay(), ms(300));
        let mut fired = Vec::new();

        let keystrokes = ["E", "El", "Ele", "Elem"];
        for (step, text) in keystrokes.iter().enumerate() {
            let at = start + ms(step as u64 * 120);
            if let Some(value) = debouncer.poll(at) {
                fired.push((value, at));
            }
            debouncer.push(text.to_string(), at);
        }

        let last_keystroke = start + ms(360);
        for tick in (0..=1000).step_by(16) {
            let now = last_keystroke + ms(tick);
            if let Some(value) = debouncer.poll(now) {
                fired.push((value, now));
            }
        }

        assert_eq!(fired.len(), 1);
        let (value, at) = &fired[0];
        assert_eq!(value, "Elem");
        assert!(*at >= last_keystroke + ms(300));
    }

    #[test]
    fn does_not_fire_before_quiet_window() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(300));
        debouncer.push("x", start);

        assert_eq!(debouncer.poll(start), None);
        assert_eq!(debouncer.poll(start + ms(299)), None);
        assert_eq!(debouncer.deadline(), Some(start + ms(300)));
        assert_eq!(debouncer.poll(start + ms(300)), Some("x"));
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + ms(900)), None);
    }

    #[test]
    fn cancel_drops_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(ms(10));
        debouncer.push(1, start);
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + ms(50)), None);
    }
}
