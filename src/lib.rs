pub(crate) mod clipboard;
pub(crate) mod output;
pub(crate) mod reformat;
pub(crate) mod session;
pub(crate) mod style;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use output::{ClipboardStream, FileStream, OutputSink, OutputStream, StdoutStream};
pub use reformat::{collapse_pins, reformat_headers, transform};
pub use session::{CopyNotice, Session, COPY_NOTICE_DURATION};
pub use style::{BoldStyle, UnknownStyle};
