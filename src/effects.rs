use std::collections::VecDeque;
use std::time::Duration;

/// Interval the typewriter is driven at. Every delay below is a multiple.
pub const TICK: Duration = Duration::from_millis(50);

const START_DELAY: Duration = Duration::from_millis(1000);
const TYPE_DELAY: Duration = Duration::from_millis(150);
const DELETE_DELAY: Duration = Duration::from_millis(50);
const HOLD_DELAY: Duration = Duration::from_millis(2000);
const NEXT_DELAY: Duration = Duration::from_millis(200);

/// Headline that types out each phrase, holds it, deletes it and moves on.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    chars: usize,
    deleting: bool,
    wait: Duration,
    text: String,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase: 0,
            chars: 0,
            deleting: false,
            wait: START_DELAY,
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Advance the clock. Returns true if the text changed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.phrases.is_empty() {
            return false;
        }
        self.wait = self.wait.saturating_sub(elapsed);
        if !self.wait.is_zero() {
            return false;
        }
        let before = self.text.len();
        self.wait = self.step();
        before != self.text.len()
    }

    /// Type or delete one character and return the delay until the next step.
    fn step(&mut self) -> Duration {
        let phrase = &self.phrases[self.phrase];
        let len = phrase.chars().count();
        let mut delay = if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            DELETE_DELAY
        } else {
            self.chars = (self.chars + 1).min(len);
            TYPE_DELAY
        };
        self.text = phrase.chars().take(self.chars).collect();

        if !self.deleting && self.chars == len {
            delay = HOLD_DELAY;
            self.deleting = true;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            delay = NEXT_DELAY;
        }
        delay
    }
}

/// A value shown until its timer expires. Each `show` gets a fresh id, and
/// `expire` only clears the slot if that id is still the one showing, so a
/// stale timer never hides a newer value.
#[derive(Debug, Clone)]
pub struct TimedSlot<T> {
    current: Option<(u64, T)>,
    next_id: u64,
}

impl<T> Default for TimedSlot<T> {
    fn default() -> Self {
        Self {
            current: None,
            next_id: 0,
        }
    }
}

impl<T> TimedSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref().map(|(_, value)| value)
    }

    pub fn is_showing(&self) -> bool {
        self.current.is_some()
    }

    /// Replace whatever is showing. Returns the id to pass to `expire`.
    pub fn show(&mut self, value: T) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some((id, value));
        id
    }

    /// Returns true if the slot was cleared.
    pub fn expire(&mut self, id: u64) -> bool {
        match self.current {
            Some((showing, _)) if showing == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

const KONAMI: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

/// Watches key codes for the Konami sequence.
#[derive(Debug, Default, Clone)]
pub struct KonamiDetector {
    recent: VecDeque<String>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key code. Returns true exactly when the sequence completes.
    pub fn push(&mut self, code: &str) -> bool {
        self.recent.push_back(code.to_string());
        if self.recent.len() > KONAMI.len() {
            self.recent.pop_front();
        }
        if self.recent.iter().eq(KONAMI.iter()) {
            self.recent.clear();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(phrases: &[&str]) -> Typewriter {
        Typewriter::new(phrases.iter().map(|s| s.to_string()).collect())
    }

    /// Run the typewriter for `ms` milliseconds in TICK steps.
    fn run(w: &mut Typewriter, ms: u64) {
        for _ in 0..(ms / TICK.as_millis() as u64) {
            w.tick(TICK);
        }
    }

    #[test]
    fn test_typewriter_start_delay() {
        let mut w = writer(&["Hi"]);
        run(&mut w, 950);
        assert_eq!(w.text(), "");
        run(&mut w, 50);
        assert_eq!(w.text(), "H");
    }

    #[test]
    fn test_typewriter_cycle() {
        let mut w = writer(&["Ab", "Cd"]);
        run(&mut w, 1000);
        assert_eq!(w.text(), "A");
        run(&mut w, 150);
        assert_eq!(w.text(), "Ab");
        // held for two seconds
        run(&mut w, 1950);
        assert_eq!(w.text(), "Ab");
        run(&mut w, 50);
        assert_eq!(w.text(), "A");
        run(&mut w, 50);
        assert_eq!(w.text(), "");
        // pause, then the next phrase
        run(&mut w, 150);
        assert_eq!(w.text(), "");
        run(&mut w, 50);
        assert_eq!(w.text(), "C");
    }

    #[test]
    fn test_typewriter_wraps_around() {
        let mut w = writer(&["x"]);
        run(&mut w, 1000);
        assert_eq!(w.text(), "x");
        run(&mut w, 2000 + 50);
        assert_eq!(w.text(), "");
        run(&mut w, 200);
        assert_eq!(w.text(), "x");
    }

    #[test]
    fn test_typewriter_multibyte() {
        let mut w = writer(&["né"]);
        run(&mut w, 1150);
        assert_eq!(w.text(), "né");
    }

    #[test]
    fn test_typewriter_without_phrases() {
        let mut w = writer(&[]);
        assert!(!w.tick(Duration::from_secs(10)));
        assert_eq!(w.text(), "");
    }

    #[test]
    fn test_konami_sequence() {
        let mut k = KonamiDetector::new();
        let (last, rest) = KONAMI.split_last().unwrap();
        for code in rest {
            assert!(!k.push(code));
        }
        assert!(k.push(last));
        // reset after firing
        assert!(!k.push("KeyA"));
    }

    #[test]
    fn test_konami_after_noise() {
        let mut k = KonamiDetector::new();
        for code in ["KeyX", "ArrowUp", "Enter", "ArrowUp"] {
            assert!(!k.push(code));
        }
        let fired = KONAMI.iter().map(|c| k.push(c)).collect::<Vec<_>>();
        assert_eq!(fired.iter().filter(|f| **f).count(), 1);
        assert!(fired[9]);
    }

    #[test]
    fn test_konami_wrong_order() {
        let mut k = KonamiDetector::new();
        let mut codes = KONAMI;
        codes.swap(8, 9);
        assert!(codes.iter().all(|c| !k.push(c)));
    }

    #[test]
    fn test_slot_retrigger_keeps_latest() {
        let mut slot = TimedSlot::new();
        let first = slot.show(());
        let second = slot.show(());
        assert!(!slot.expire(first));
        assert!(slot.is_showing());
        assert!(slot.expire(second));
        assert!(!slot.is_showing());
        // a late duplicate timer is harmless
        assert!(!slot.expire(second));
    }
}
