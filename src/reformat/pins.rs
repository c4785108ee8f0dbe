use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;

lazy_static! {
    /// Discord renders a pin notification over four lines:
    ///
    /// ```text
    /// Alice
    /// pinned
    /// a message
    /// to this channel. See all the pins.
    /// ```
    ///
    /// `See all the pins.` may also land on a line of its own.
    pub(crate) static ref pin_banner_regex: Regex = Regex::new(concat!(
        r"(?m)^[ \t]*(?P<name>.+?)\s*\n",
        r"\s*pinned\s*\n",
        r"\s*a message\s*\n",
        r"\s*to this channel\.\s*See all the pins\.",
        r"[ \t]*(?P<end>\r?\n|\z)",
    ))
    .unwrap();
}

/// Rewrite every pin banner into `<name> pinned a message to this channel.`,
/// keeping the line break that ended the banner.
pub fn collapse_pins(text: &str) -> Cow<'_, str> {
    let mut collapsed = 0usize;
    let result = pin_banner_regex.replace_all(text, |captures: &Captures| {
        collapsed += 1;
        format!(
            "{} pinned a message to this channel.{}",
            &captures["name"], &captures["end"]
        )
    });
    tracing::trace!(collapsed, "collapsed pin banners");
    result
}
