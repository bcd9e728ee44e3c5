use std::time::Duration;

use tokio::time::Instant;

/// The input-search pipeline as a plain state machine:
/// debounce, then drop repeats, then drop short terms.
///
/// It never reads a clock itself. The caller feeds it instants and sleeps until
/// [`Debouncer::deadline`].
#[derive(Debug)]
pub struct Debouncer {
    interval: Duration,
    min_len: usize,
    pending: Option<(String, Instant)>,
    last_debounced: Option<String>,
}

impl Debouncer {
    pub fn new(interval: Duration, min_len: usize) -> Self {
        Self {
            interval,
            min_len,
            pending: None,
            last_debounced: None,
        }
    }

    /// Records a new input, restarting the quiet period.
    pub fn push(&mut self, term: String, now: Instant) {
        self.pending = Some((term, now + self.interval));
    }

    /// When the pending input becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    /// Releases the pending input if its quiet period has elapsed at `now`.
    pub fn fire(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some((_, due)) if *due <= now => {}
            _ => return None,
        }
        let (term, _) = self.pending.take()?;
        self.accept(term)
    }

    /// Releases whatever is pending regardless of time. Used when input ends.
    pub fn flush(&mut self) -> Option<String> {
        let (term, _) = self.pending.take()?;
        self.accept(term)
    }

    fn accept(&mut self, term: String) -> Option<String> {
        let term = self.distinct(term)?;
        self.long_enough(term)
    }

    fn distinct(&mut self, term: String) -> Option<String> {
        if self.last_debounced.as_deref() == Some(term.as_str()) {
            log::debug!("dropping repeated search term: {term}");
            return None;
        }
        self.last_debounced = Some(term.clone());
        Some(term)
    }

    fn long_enough(&self, term: String) -> Option<String> {
        if term.chars().count() < self.min_len {
            log::debug!("dropping short search term: {term}");
            return None;
        }
        Some(term)
    }
}
