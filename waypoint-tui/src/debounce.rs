//! Debounced text input for the note search bar.
//!
//! Time is injected by the caller, so the commit logic is testable without
//! sleeping. A draft commits once it has been stable for the configured
//! delay and is either empty (clearing the filter) or at least the minimum
//! length.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct DebouncedInput {
    draft: String,
    committed: String,
    delay: Duration,
    min_chars: usize,
    dirty_since: Option<Instant>,
}

impl DebouncedInput {
    pub fn new(delay: Duration, min_chars: usize) -> Self {
        Self {
            draft: String::new(),
            committed: String::new(),
            delay,
            min_chars,
            dirty_since: None,
        }
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn push_char(&mut self, now: Instant, c: char) {
        self.draft.push(c);
        self.dirty_since = Some(now);
    }

    pub fn backspace(&mut self, now: Instant) {
        if self.draft.pop().is_some() {
            self.dirty_since = Some(now);
        }
    }

    /// Drop draft and filter immediately, bypassing the delay. Returns true
    /// when a committed filter was actually cleared.
    pub fn clear(&mut self) -> bool {
        self.draft.clear();
        self.dirty_since = None;
        if self.committed.is_empty() {
            false
        } else {
            self.committed.clear();
            true
        }
    }

    /// Commit the draft if it has been stable long enough. Returns the
    /// newly committed query, at most once per edit burst.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let since = self.dirty_since?;
        if now.duration_since(since) < self.delay {
            return None;
        }
        self.dirty_since = None;
        let eligible = self.draft.is_empty() || self.draft.chars().count() >= self.min_chars;
        if !eligible || self.draft == self.committed {
            return None;
        }
        self.committed = self.draft.clone();
        Some(self.committed.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(400);

    fn input() -> DebouncedInput {
        DebouncedInput::new(DELAY, 2)
    }

    #[test]
    fn commits_after_quiet_period() {
        let mut d = input();
        let t0 = Instant::now();
        d.push_char(t0, 'p');
        d.push_char(t0, 'a');

        assert_eq!(d.poll(t0 + Duration::from_millis(399)), None);
        assert_eq!(d.poll(t0 + DELAY), Some("pa".to_string()));
        // Only once per burst.
        assert_eq!(d.poll(t0 + DELAY * 2), None);
    }

    #[test]
    fn each_keystroke_restarts_the_timer() {
        let mut d = input();
        let t0 = Instant::now();
        d.push_char(t0, 'p');
        d.push_char(t0 + Duration::from_millis(300), 'a');

        assert_eq!(d.poll(t0 + DELAY), None);
        assert_eq!(
            d.poll(t0 + Duration::from_millis(300) + DELAY),
            Some("pa".to_string())
        );
    }

    #[test]
    fn short_draft_never_commits() {
        let mut d = input();
        let t0 = Instant::now();
        d.push_char(t0, 'p');
        assert_eq!(d.poll(t0 + DELAY * 2), None);
        assert_eq!(d.committed(), "");
    }

    #[test]
    fn empty_draft_commits_to_clear_a_filter() {
        let mut d = input();
        let t0 = Instant::now();
        d.push_char(t0, 'p');
        d.push_char(t0, 'a');
        d.poll(t0 + DELAY);
        assert_eq!(d.committed(), "pa");

        d.backspace(t0 + DELAY);
        d.backspace(t0 + DELAY);
        assert_eq!(d.poll(t0 + DELAY * 2), Some(String::new()));
    }

    #[test]
    fn unchanged_draft_does_not_recommit() {
        let mut d = input();
        let t0 = Instant::now();
        d.push_char(t0, 'p');
        d.push_char(t0, 'a');
        d.poll(t0 + DELAY);

        d.push_char(t0 + DELAY, 'r');
        d.backspace(t0 + DELAY);
        assert_eq!(d.poll(t0 + DELAY * 2), None);
    }

    #[test]
    fn clear_bypasses_the_delay() {
        let mut d = input();
        let t0 = Instant::now();
        d.push_char(t0, 'p');
        d.push_char(t0, 'a');
        d.poll(t0 + DELAY);

        assert!(d.clear());
        assert_eq!(d.draft(), "");
        assert_eq!(d.committed(), "");
        // Nothing pending afterwards.
        assert_eq!(d.poll(t0 + DELAY * 3), None);
        // Clearing an already-clear filter reports nothing to do.
        assert!(!d.clear());
    }
}
