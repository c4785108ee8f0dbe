use crate::style::BoldStyle;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;

lazy_static! {
    /// A message header is the author's name immediately followed by the
    /// timestamp, on a line of its own. Discord's clipboard text glues the two
    /// together (`AliceToday at 9:05 PM`).
    ///
    /// Leading `\s*` and trailing `\s*` may run over blank lines, which get
    /// swallowed along with the header.
    pub(crate) static ref message_header_regex: Regex = Regex::new(concat!(
        r"(?m)^\s*(?P<name>.*?)[ \t]*",
        r"(?P<stamp>[0-9]{2}/[0-9]{2}/[0-9]{4}|(?:Yesterday|Today) at [0-9]{1,2}:[0-9]{2} [AP]M)",
        r"\s*$",
    ))
    .unwrap();
}

/// Put every message header on its own paragraph with the author's name in
/// bold.
pub fn reformat_headers(text: &str, style: BoldStyle) -> Cow<'_, str> {
    let mut headers = 0usize;
    let result = message_header_regex.replace_all(text, |captures: &Captures| {
        headers += 1;
        format!("\n\n{} {}", style.wrap(&captures["name"]), &captures["stamp"])
    });
    tracing::trace!(headers, %style, "reformatted message headers");
    result
}
