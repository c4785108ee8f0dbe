//// Session keeps track of one interactive formatting session:
////
//// - The text currently on display
//// - The bold style the next paste will use
//// - Whether the "copied to clipboard" notice is showing

use crate::{reformat::transform, style::BoldStyle};
use std::time::{Duration, Instant};

/// How long the "copied to clipboard" notice stays up.
pub const COPY_NOTICE_DURATION: Duration = Duration::from_secs(1);

/// A flag that stays raised for a fixed time after it was last armed.
#[derive(Clone, Copy, Debug)]
pub struct CopyNotice {
    armed_at: Option<Instant>,
    duration: Duration,
}

impl CopyNotice {
    pub fn new() -> CopyNotice {
        CopyNotice {
            armed_at: None,
            duration: COPY_NOTICE_DURATION,
        }
    }

    /// Raise the flag. Arming it again restarts the countdown.
    pub fn arm(&mut self, now: Instant) {
        self.armed_at = Some(now);
    }

    pub fn reset(&mut self) {
        self.armed_at = None;
    }

    pub fn is_active(&self, now: Instant) -> bool {
        match self.armed_at {
            Some(armed_at) => now.saturating_duration_since(armed_at) < self.duration,
            None => false,
        }
    }
}

impl Default for CopyNotice {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Session {
    text: String,
    style: BoldStyle,
    notice: CopyNotice,
}

impl Session {
    pub fn new() -> Session {
        Session::with_style(BoldStyle::default())
    }

    pub fn with_style(style: BoldStyle) -> Session {
        Session {
            text: String::new(),
            style,
            notice: CopyNotice::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> BoldStyle {
        self.style
    }

    /// Reformat pasted text with the current style and make it the displayed
    /// text.
    pub fn paste(&mut self, raw: &str) -> &str {
        self.text = transform(raw, self.style);
        tracing::info!(
            style = %self.style,
            input_bytes = raw.len(),
            output_bytes = self.text.len(),
            "reformatted pasted log"
        );
        &self.text
    }

    /// Replace the displayed text as typed. Nothing gets reformatted.
    pub fn edit(&mut self, text: &str) {
        self.text = text.to_owned();
    }

    /// Only affects later pastes; the displayed text is left alone.
    pub fn select_style(&mut self, style: BoldStyle) {
        self.style = style;
    }

    /// Record that the displayed text has just been copied to the clipboard.
    pub fn mark_copied(&mut self, now: Instant) {
        self.notice.arm(now);
    }

    pub fn just_copied(&self, now: Instant) -> bool {
        !self.text.is_empty() && self.notice.is_active(now)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_notice_expires() {
        let start = Instant::now();
        let mut notice = CopyNotice::new();
        assert!(!notice.is_active(start));

        notice.arm(start);
        assert!(notice.is_active(start));
        assert!(notice.is_active(start + Duration::from_millis(999)));
        assert!(!notice.is_active(start + Duration::from_secs(1)));

        notice.reset();
        assert!(!notice.is_active(start));
    }

    #[test]
    fn test_notice_rearm_restarts() {
        let start = Instant::now();
        let mut notice = CopyNotice::new();
        notice.arm(start);
        notice.arm(start + Duration::from_millis(800));
        assert!(notice.is_active(start + Duration::from_millis(1500)));
        assert!(!notice.is_active(start + Duration::from_millis(1800)));
    }

    #[test]
    fn test_default_session() {
        let session = Session::new();
        assert_eq!(session.text(), "");
        assert_eq!(session.style(), BoldStyle::BBCode);
    }

    #[test]
    fn test_paste_uses_current_style() {
        let mut session = Session::new();
        assert_eq!(session.paste("Bob 01/02/2023"), "[b]Bob[/b] 01/02/2023");

        session.select_style(BoldStyle::Html);
        assert_eq!(session.text(), "[b]Bob[/b] 01/02/2023");

        session.paste("Bob 01/02/2023");
        assert_eq!(session.text(), "<strong>Bob</strong> 01/02/2023");
    }

    #[test]
    fn test_edit_does_not_transform() {
        let mut session = Session::with_style(BoldStyle::Markdown);
        session.edit("  Bob 01/02/2023\n");
        assert_eq!(session.text(), "  Bob 01/02/2023\n");
    }

    #[test]
    fn test_just_copied_needs_text() {
        let start = Instant::now();
        let mut session = Session::new();

        session.mark_copied(start);
        assert!(!session.just_copied(start));

        session.paste("hello");
        session.mark_copied(start);
        assert!(session.just_copied(start + Duration::from_millis(500)));
        assert!(!session.just_copied(start + Duration::from_millis(1000)));
    }
}
