use std::time::Duration;

/// Phase of the typing loop. The tick cadence follows the phase: one
/// character per `speed` while typing, a single `pause` while holding a
/// completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    Holding,
}

/// Character-by-character reveal over a fixed, non-empty line list. The
/// machine has no terminal state; teardown happens by the tick subscription
/// disappearing, which leaves the state untouched.
pub struct TypingState {
    lines: Vec<String>,
    line_idx: usize,
    shown_chars: usize,
    phase: TypingPhase,
    speed: Duration,
    pause: Duration,
}

impl TypingState {
    pub(in crate::app) fn new(lines: Vec<String>, speed: Duration, pause: Duration) -> Self {
        let lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };
        Self {
            lines,
            line_idx: 0,
            shown_chars: 0,
            phase: TypingPhase::Typing,
            speed,
            pause,
        }
    }

    fn current_line(&self) -> &str {
        &self.lines[self.line_idx]
    }

    /// The revealed prefix of the current line, split on a char boundary.
    pub(in crate::app) fn displayed(&self) -> &str {
        let line = self.current_line();
        match line.char_indices().nth(self.shown_chars) {
            Some((byte_idx, _)) => &line[..byte_idx],
            None => line,
        }
    }

    pub(in crate::app) fn phase(&self) -> TypingPhase {
        self.phase
    }

    /// How long until the next transition should fire.
    pub(in crate::app) fn tick_interval(&self) -> Duration {
        match self.phase {
            TypingPhase::Typing => self.speed,
            TypingPhase::Holding => self.pause,
        }
    }

    /// One transition of the machine: reveal a character, or finish the
    /// line, or advance to the next line (wrapping) after a hold.
    pub(in crate::app) fn advance(&mut self) {
        match self.phase {
            TypingPhase::Typing => {
                let len = self.current_line().chars().count();
                if self.shown_chars < len {
                    self.shown_chars += 1;
                }
                if self.shown_chars >= len {
                    self.phase = TypingPhase::Holding;
                }
            }
            TypingPhase::Holding => {
                self.line_idx = (self.line_idx + 1) % self.lines.len();
                self.shown_chars = 0;
                self.phase = TypingPhase::Typing;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(lines: &[&str]) -> TypingState {
        TypingState::new(
            lines.iter().map(|s| s.to_string()).collect(),
            Duration::from_millis(10),
            Duration::from_millis(100),
        )
    }

    #[test]
    fn types_holds_and_wraps() {
        let mut t = machine(&["A", "BB"]);
        let mut seen = vec![t.displayed().to_string()];
        for _ in 0..6 {
            t.advance();
            seen.push(t.displayed().to_string());
        }
        assert_eq!(seen, vec!["", "A", "", "B", "BB", "", "A"]);
    }

    #[test]
    fn hold_uses_pause_interval() {
        let mut t = machine(&["A", "BB"]);
        assert_eq!(t.tick_interval(), Duration::from_millis(10));
        t.advance();
        assert_eq!(t.phase(), TypingPhase::Holding);
        assert_eq!(t.tick_interval(), Duration::from_millis(100));
        t.advance();
        assert_eq!(t.tick_interval(), Duration::from_millis(10));
    }

    #[test]
    fn single_line_still_pauses_before_retyping() {
        let mut t = machine(&["Hi"]);
        t.advance();
        t.advance();
        assert_eq!(t.displayed(), "Hi");
        assert_eq!(t.phase(), TypingPhase::Holding);
        t.advance();
        assert_eq!(t.displayed(), "");
        assert_eq!(t.phase(), TypingPhase::Typing);
    }

    #[test]
    fn empty_line_holds_without_typing() {
        let mut t = machine(&["", "X"]);
        assert_eq!(t.displayed(), "");
        t.advance();
        assert_eq!(t.phase(), TypingPhase::Holding);
        assert_eq!(t.displayed(), "");
    }

    #[test]
    fn displayed_is_always_a_prefix_and_non_decreasing_while_typing() {
        let mut t = machine(&["xin chào", "hẹn gặp"]);
        let mut last_len = 0;
        for _ in 0..40 {
            let phase_before = t.phase();
            t.advance();
            let shown = t.displayed().to_string();
            assert!(
                t.lines[t.line_idx].starts_with(&shown),
                "displayed text must prefix the current line"
            );
            if phase_before == TypingPhase::Typing && t.phase() == TypingPhase::Typing {
                assert!(shown.chars().count() >= last_len);
            }
            last_len = if t.phase() == TypingPhase::Typing {
                shown.chars().count()
            } else {
                0
            };
        }
    }

    #[test]
    fn empty_list_falls_back_to_a_blank_line() {
        let mut t = TypingState::new(
            Vec::new(),
            Duration::from_millis(10),
            Duration::from_millis(100),
        );
        assert_eq!(t.displayed(), "");
        // Does not panic and keeps cycling.
        for _ in 0..4 {
            t.advance();
        }
    }
}
