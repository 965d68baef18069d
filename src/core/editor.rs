//! Editor controller.
//!
//! [`EditorSession`] ties together the active file, the typing animator and
//! the line-number gutter. Every file switch and animation step goes through
//! it, so the busy check and the gutter refresh happen in one place.

use super::animator::{RunId, Tick, TypingAnimator};
use super::error::EditorError;
use super::line_numbers::LineNumbers;
use crate::models::{FileId, TabLabel};

#[derive(Clone, Debug)]
pub struct EditorSession {
    active: FileId,
    animator: TypingAnimator,
    lines: LineNumbers,
    highlight_pending: bool,
}

impl EditorSession {
    /// Create a session showing `initial` in full.
    pub fn new(initial: FileId) -> Self {
        let mut session = Self {
            active: initial,
            animator: TypingAnimator::new(),
            lines: LineNumbers::default(),
            highlight_pending: false,
        };
        // A fresh animator is never busy.
        let _ = session.show(initial);
        session
    }

    pub fn active(&self) -> FileId {
        self.active
    }

    pub fn tab_label(&self) -> TabLabel {
        self.active.tab_label()
    }

    /// The text currently on screen.
    pub fn display(&self) -> &str {
        self.animator.buffer()
    }

    pub fn line_numbers(&self) -> LineNumbers {
        self.lines
    }

    pub fn is_busy(&self) -> bool {
        self.animator.is_busy()
    }

    /// Switch the editor to `file`, showing its content at once.
    ///
    /// Rejected with [`EditorError::Busy`] while the intro is typing; in that
    /// case nothing changes.
    pub fn switch_to(&mut self, file: FileId) -> Result<(), EditorError> {
        if self.is_busy() {
            return Err(EditorError::Busy);
        }
        self.show(file)
    }

    /// Start typing `file` from an empty editor.
    pub fn begin_typing(&mut self, file: FileId) -> Result<RunId, EditorError> {
        let run = self.animator.start(file.source_text())?;
        self.active = file;
        self.lines.sync("");
        self.highlight_pending = false;
        Ok(run)
    }

    /// Advance run `run` by one character, refreshing the gutter at newline
    /// boundaries and once more on completion.
    pub fn tick(&mut self, run: RunId) -> Tick {
        let tick = self.animator.tick(run);
        match tick {
            Tick::Typed {
                sync_lines: true, ..
            } => self.lines.sync(self.animator.buffer()),
            Tick::Completed { .. } => {
                self.lines.sync(self.animator.buffer());
                self.highlight_pending = true;
            }
            Tick::Typed { .. } | Tick::Idle => {}
        }
        tick
    }

    /// Consume the pending highlight request.
    ///
    /// Returns `true` once after each completed animation or file switch.
    pub fn take_highlight(&mut self) -> bool {
        std::mem::take(&mut self.highlight_pending)
    }

    fn show(&mut self, file: FileId) -> Result<(), EditorError> {
        let text = file.source_text();
        self.animator.show(text)?;
        self.active = file;
        self.lines.sync(text);
        self.highlight_pending = true;
        Ok(())
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(FileId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::line_numbers::line_count;

    fn finish(session: &mut EditorSession, run: RunId) -> usize {
        let mut highlights = 0;
        loop {
            let tick = session.tick(run);
            if session.take_highlight() {
                highlights += 1;
            }
            if !matches!(tick, Tick::Typed { .. }) {
                return highlights;
            }
        }
    }

    #[test]
    fn test_switch_shows_full_source() {
        let mut session = EditorSession::default();
        for file in FileId::ALL {
            session.switch_to(file).unwrap();
            assert_eq!(session.active(), file);
            assert_eq!(session.display(), file.source_text());
            assert_eq!(
                session.line_numbers().count(),
                line_count(file.source_text())
            );
            assert_eq!(session.tab_label(), file.tab_label());
            assert!(session.take_highlight());
        }
    }

    #[test]
    fn test_intro_types_about_and_highlights_once() {
        let mut session = EditorSession::new(FileId::Contact);
        session.take_highlight();

        let run = session.begin_typing(FileId::About).unwrap();
        assert!(session.is_busy());
        assert_eq!(session.display(), "");
        assert_eq!(session.line_numbers().count(), 1);

        let highlights = finish(&mut session, run);

        let about = FileId::About.source_text();
        assert!(about.starts_with("# Hello! I'm Yoav Eliav."));
        assert_eq!(session.display(), about);
        assert!(!session.is_busy());
        assert_eq!(highlights, 1);
        assert_eq!(session.line_numbers().count(), line_count(about));
    }

    #[test]
    fn test_switch_rejected_mid_animation() {
        let mut session = EditorSession::new(FileId::About);
        let run = session.begin_typing(FileId::About).unwrap();
        for _ in 0..10 {
            session.tick(run);
        }
        let before = session.display().to_string();

        assert_eq!(session.switch_to(FileId::Skills), Err(EditorError::Busy));
        assert_eq!(session.active(), FileId::About);
        assert_eq!(session.display(), before);
        assert_eq!(session.tab_label().name, "about_me.py");

        finish(&mut session, run);
        session.switch_to(FileId::Skills).unwrap();
        assert_eq!(session.active(), FileId::Skills);
    }

    #[test]
    fn test_gutter_tracks_typed_lines() {
        let mut session = EditorSession::default();
        let run = session.begin_typing(FileId::Contact).unwrap();

        // "CONTACT DETAILS\n" is 16 characters.
        for _ in 0..15 {
            session.tick(run);
        }
        assert_eq!(session.line_numbers().count(), 1);
        session.tick(run);
        assert_eq!(session.line_numbers().count(), 2);
    }

    #[test]
    fn test_second_intro_rejected_while_typing() {
        let mut session = EditorSession::default();
        let run = session.begin_typing(FileId::About).unwrap();
        session.tick(run);

        assert_eq!(
            session.begin_typing(FileId::Projects),
            Err(EditorError::Busy)
        );
        assert_eq!(session.active(), FileId::About);
        assert_eq!(session.display(), "#");
    }
}
