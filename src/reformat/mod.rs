//// Chat log reformatting. Pasted Discord text goes through two rewriting
//// passes, pin banners first and message headers second, and the result is
//// trimmed.

pub(crate) mod headers;
pub(crate) mod pins;

use crate::style::BoldStyle;

pub use headers::reformat_headers;
pub use pins::collapse_pins;

/// Reformat a pasted chat log. Never fails: text that doesn't look like a
/// Discord log comes back trimmed and otherwise unchanged.
pub fn transform(raw: &str, style: BoldStyle) -> String {
    let collapsed = collapse_pins(raw);
    let reformatted = reformat_headers(&collapsed, style);
    reformatted.trim().to_owned()
}

#[cfg(test)]
mod test {
    use super::*;
    use expect_test::expect;
    use indoc::indoc;

    #[test]
    fn test_pin_banner() {
        assert_eq!(
            transform(
                "Alice\npinned\na message\nto this channel. See all the pins.\n",
                BoldStyle::BBCode
            ),
            "Alice pinned a message to this channel."
        );
    }

    #[test]
    fn test_header_bbcode() {
        assert_eq!(
            transform("Bob 01/02/2023", BoldStyle::BBCode),
            "[b]Bob[/b] 01/02/2023"
        );
        assert!(transform("hi\nBob 01/02/2023", BoldStyle::BBCode)
            .contains("\n\n[b]Bob[/b] 01/02/2023"));
    }

    #[test]
    fn test_header_markdown() {
        assert!(transform("hey\nCarol Today at 9:05 PM", BoldStyle::Markdown)
            .contains("\n\n**Carol** Today at 9:05 PM"));
    }

    #[test]
    fn test_end_to_end_html() {
        assert_eq!(
            transform("  \nDan Yesterday at 11:59 AM\nhello\n  ", BoldStyle::Html),
            "<strong>Dan</strong> Yesterday at 11:59 AM\nhello"
        );
    }

    #[test]
    fn test_plain_text_only_trimmed() {
        let input = "\n\n  some text\n   with indentation  \nand more\t\n\n";
        assert_eq!(
            transform(input, BoldStyle::BBCode),
            "some text\n   with indentation  \nand more"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(transform("", BoldStyle::BBCode), "");
        assert_eq!(transform(" \n\t\n", BoldStyle::Html), "");
    }

    #[test]
    fn test_not_idempotent() {
        let once = transform("Bob 01/02/2023", BoldStyle::BBCode);
        let twice = transform(&once, BoldStyle::BBCode);
        assert_eq!(twice, "[b][b]Bob[/b][/b] 01/02/2023");
    }

    #[test]
    fn test_pins_then_headers() {
        let input = indoc! {"
            AliceToday at 9:05 PM
            look at this
            Alice
            pinned
            a message
            to this channel. See all the pins.
            BobToday at 9:06 PM
            nice
        "};
        expect![[r#"
            **Alice** Today at 9:05 PM
            look at this
            Alice pinned a message to this channel.


            **Bob** Today at 9:06 PM
            nice"#]]
        .assert_eq(&transform(input, BoldStyle::Markdown));
    }
}
