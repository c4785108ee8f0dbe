//// Bold markup styles applied to author names.

use itertools::Itertools as _;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, clap::ValueEnum)]
pub enum BoldStyle {
    /// Leave names as they are
    None,
    /// `**name**`
    #[value(name = "md", alias = "markdown")]
    Markdown,
    /// `[b]name[/b]`
    #[default]
    #[value(name = "bbcode")]
    BBCode,
    /// `<strong>name</strong>`
    Html,
}

impl BoldStyle {
    /// Every style, in the order they are offered to the user.
    pub const ALL: [BoldStyle; 4] = [
        BoldStyle::None,
        BoldStyle::Markdown,
        BoldStyle::BBCode,
        BoldStyle::Html,
    ];

    pub fn id(self) -> &'static str {
        match self {
            BoldStyle::None => "none",
            BoldStyle::Markdown => "md",
            BoldStyle::BBCode => "bbcode",
            BoldStyle::Html => "html",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BoldStyle::None => "None",
            BoldStyle::Markdown => "Markdown",
            BoldStyle::BBCode => "BBCode",
            BoldStyle::Html => "HTML",
        }
    }

    /// Wrap `text` in this style's bold markup. Empty text still gets the
    /// markup.
    pub fn wrap(self, text: &str) -> String {
        match self {
            BoldStyle::None => text.to_owned(),
            BoldStyle::Markdown => format!("**{text}**"),
            BoldStyle::BBCode => format!("[b]{text}[/b]"),
            BoldStyle::Html => format!("<strong>{text}</strong>"),
        }
    }
}

impl std::fmt::Display for BoldStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UnknownStyle(pub String);

impl std::fmt::Display for UnknownStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown bold style `{}` (expected one of: {})",
            self.0,
            BoldStyle::ALL.iter().map(|style| style.id()).join(", ")
        )
    }
}

impl std::error::Error for UnknownStyle {}

impl std::str::FromStr for BoldStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(BoldStyle::None),
            "md" | "markdown" => Ok(BoldStyle::Markdown),
            "bbcode" => Ok(BoldStyle::BBCode),
            "html" => Ok(BoldStyle::Html),
            other => Err(UnknownStyle(other.to_owned())),
        }
    }
}
