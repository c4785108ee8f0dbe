//// Clipboard access. The system clipboard goes through `arboard`; an
//// in-memory clipboard stands in for it in tests and when the user opts out.

use std::{cell::RefCell, rc::Rc};

pub trait Clipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError>;
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard operation errors.
#[derive(Debug)]
pub enum ClipboardError {
    /// The system clipboard could not be opened.
    Unavailable(String),
    /// Reading text failed (empty clipboard, non-text content, ...).
    Read(String),
    /// Writing text failed.
    Write(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Unavailable(msg) => write!(f, "clipboard unavailable: {msg}"),
            ClipboardError::Read(msg) => write!(f, "failed to read clipboard: {msg}"),
            ClipboardError::Write(msg) => write!(f, "failed to write clipboard: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<SystemClipboard, ClipboardError> {
        let inner =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(SystemClipboard { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.inner
            .get_text()
            .map_err(|e| ClipboardError::Read(e.to_string()))
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// Clipboard living in memory. Clones share the same contents, so a test can
/// keep one handle and give the other away.
#[derive(Clone, Default, Debug)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> MemoryClipboard {
        MemoryClipboard::default()
    }

    pub fn with_text(text: &str) -> MemoryClipboard {
        let clipboard = MemoryClipboard::new();
        *clipboard.contents.borrow_mut() = Some(text.to_owned());
        clipboard
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.contents
            .borrow()
            .clone()
            .ok_or_else(|| ClipboardError::Read("clipboard is empty".to_owned()))
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.borrow_mut() = Some(text.to_owned());
        Ok(())
    }
}
