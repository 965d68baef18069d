//! Character-by-character typing animation.
//!
//! [`TypingAnimator`] is a pure state machine: it never schedules anything
//! itself. A driver calls [`TypingAnimator::tick`] once per timer period and
//! applies the returned [`Tick`] to the view. This keeps the reveal order and
//! the busy state testable without a browser.

use super::error::EditorError;

/// Token identifying one animation run.
///
/// Drivers hold on to the token they were given by
/// [`TypingAnimator::start`]; ticks issued with a stale token do nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RunId(u64);

/// Whether an animation is currently revealing characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimationState {
    /// Nothing is being typed; the buffer holds its final text.
    #[default]
    Idle,
    /// A run is in progress. `cursor` is the byte offset of the next
    /// character to reveal.
    Animating { run: RunId, cursor: usize },
}

/// Result of advancing the animation by one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// One character was appended and more remain.
    ///
    /// `sync_lines` is set after the first character and after every
    /// newline, the points at which the line gutter must be refreshed.
    Typed { ch: char, sync_lines: bool },
    /// The final character (if any) was appended and the animator is idle
    /// again. Emitted exactly once per run.
    Completed { ch: Option<char> },
    /// No run is active, or the token does not match the active run.
    Idle,
}

/// Owns the display buffer and the busy state for the editor.
#[derive(Clone, Debug, Default)]
pub struct TypingAnimator {
    state: AnimationState,
    target: String,
    buffer: String,
    next_run: u64,
}

impl TypingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a run is revealing characters.
    pub fn is_busy(&self) -> bool {
        matches!(self.state, AnimationState::Animating { .. })
    }

    /// The text currently on screen.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Begin typing `text` from an empty buffer.
    ///
    /// Checks and sets the busy state in one step: a second start while a
    /// run is active is rejected and leaves the active run untouched.
    pub fn start(&mut self, text: impl Into<String>) -> Result<RunId, EditorError> {
        if self.is_busy() {
            return Err(EditorError::Busy);
        }

        let run = RunId(self.next_run);
        self.next_run += 1;

        self.target = text.into();
        self.buffer.clear();
        self.state = AnimationState::Animating { run, cursor: 0 };
        Ok(run)
    }

    /// Replace the buffer with `text` in one step, without animating.
    pub fn show(&mut self, text: &str) -> Result<(), EditorError> {
        if self.is_busy() {
            return Err(EditorError::Busy);
        }

        self.buffer.clear();
        self.buffer.push_str(text);
        Ok(())
    }

    /// Reveal the next character of run `run`.
    pub fn tick(&mut self, run: RunId) -> Tick {
        let AnimationState::Animating {
            run: active,
            cursor,
        } = &mut self.state
        else {
            return Tick::Idle;
        };
        if *active != run {
            return Tick::Idle;
        }

        let Some(ch) = self.target[*cursor..].chars().next() else {
            // Empty target: nothing to type.
            self.state = AnimationState::Idle;
            return Tick::Completed { ch: None };
        };

        *cursor += ch.len_utf8();
        let is_first = self.buffer.is_empty();
        let is_last = *cursor == self.target.len();
        self.buffer.push(ch);

        if is_last {
            self.state = AnimationState::Idle;
            Tick::Completed { ch: Some(ch) }
        } else {
            Tick::Typed {
                ch,
                sync_lines: is_first || ch == '\n',
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(animator: &mut TypingAnimator, run: RunId) -> Vec<Tick> {
        let mut ticks = Vec::new();
        loop {
            let tick = animator.tick(run);
            ticks.push(tick);
            if !matches!(tick, Tick::Typed { .. }) {
                return ticks;
            }
        }
    }

    #[test]
    fn test_buffer_grows_one_char_per_tick() {
        let text = "ab\ncd";
        let mut animator = TypingAnimator::new();
        let run = animator.start(text).unwrap();
        assert_eq!(animator.buffer(), "");

        for k in 1..=text.chars().count() {
            animator.tick(run);
            assert_eq!(animator.buffer().chars().count(), k);
            assert!(text.starts_with(animator.buffer()));
        }
        assert_eq!(animator.buffer(), text);
    }

    #[test]
    fn test_busy_until_last_character() {
        let text = "xyz";
        let mut animator = TypingAnimator::new();
        assert!(!animator.is_busy());

        let run = animator.start(text).unwrap();
        assert!(animator.is_busy());

        animator.tick(run);
        animator.tick(run);
        assert!(animator.is_busy());

        assert_eq!(animator.tick(run), Tick::Completed { ch: Some('z') });
        assert!(!animator.is_busy());
        assert_eq!(animator.state, AnimationState::Idle);
    }

    #[test]
    fn test_line_sync_after_first_char_and_newlines() {
        let mut animator = TypingAnimator::new();
        let run = animator.start("a\nbc\nd").unwrap();
        let ticks = run_to_end(&mut animator, run);

        let synced: Vec<bool> = ticks
            .iter()
            .map(|t| matches!(t, Tick::Typed { sync_lines: true, .. }))
            .collect();
        // a, \n, b, c, \n, d(completed)
        assert_eq!(synced, vec![true, true, false, false, true, false]);
        assert_eq!(ticks.last(), Some(&Tick::Completed { ch: Some('d') }));
    }

    #[test]
    fn test_completed_emitted_once() {
        let mut animator = TypingAnimator::new();
        let run = animator.start("hi").unwrap();
        let ticks = run_to_end(&mut animator, run);

        let completed = ticks
            .iter()
            .filter(|t| matches!(t, Tick::Completed { .. }))
            .count();
        assert_eq!(completed, 1);
        assert_eq!(animator.tick(run), Tick::Idle);
        assert_eq!(animator.buffer(), "hi");
    }

    #[test]
    fn test_start_while_busy_is_rejected() {
        let mut animator = TypingAnimator::new();
        let run = animator.start("first").unwrap();
        animator.tick(run);

        assert_eq!(animator.start("second"), Err(EditorError::Busy));
        assert_eq!(animator.show("second"), Err(EditorError::Busy));
        assert_eq!(animator.buffer(), "f");

        let rest = run_to_end(&mut animator, run);
        assert_eq!(rest.len(), 4);
        assert_eq!(animator.buffer(), "first");
    }

    #[test]
    fn test_stale_run_token_is_ignored() {
        let mut animator = TypingAnimator::new();
        let old = animator.start("a").unwrap();
        run_to_end(&mut animator, old);

        let new = animator.start("bc").unwrap();
        assert_ne!(old, new);
        assert_eq!(animator.tick(old), Tick::Idle);
        assert_eq!(animator.buffer(), "");

        animator.tick(new);
        assert_eq!(animator.buffer(), "b");
    }

    #[test]
    fn test_empty_text_completes_without_char() {
        let mut animator = TypingAnimator::new();
        let run = animator.start("").unwrap();
        assert!(animator.is_busy());
        assert_eq!(animator.tick(run), Tick::Completed { ch: None });
        assert!(!animator.is_busy());
    }

    #[test]
    fn test_multibyte_characters_preserved() {
        let text = "héllo ✓\n";
        let mut animator = TypingAnimator::new();
        let run = animator.start(text).unwrap();
        let ticks = run_to_end(&mut animator, run);

        assert_eq!(ticks.len(), text.chars().count());
        assert_eq!(animator.buffer(), text);
    }

    #[test]
    fn test_show_replaces_buffer_when_idle() {
        let mut animator = TypingAnimator::new();
        animator.show("one").unwrap();
        animator.show("two").unwrap();
        assert_eq!(animator.buffer(), "two");
        assert!(!animator.is_busy());
    }
}
