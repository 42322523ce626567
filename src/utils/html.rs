//! HTML escaping for user-supplied text placed into email bodies.

/// Escapes the five HTML-significant characters.
///
/// | Input | Output     |
/// |-------|------------|
/// | `&`   | `&amp;`    |
/// | `<`   | `&lt;`     |
/// | `>`   | `&gt;`     |
/// | `"`   | `&quot;`   |
/// | `'`   | `&#039;`   |
///
/// # Examples
///
/// ```ignore
/// assert_eq!(escape_html("<b>Tom & 'Jerry'</b>"), "&lt;b&gt;Tom &amp; &#039;Jerry&#039;&lt;/b&gt;");
/// ```
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }

    out
}

/// Converts newlines to `<br/>` line breaks.
///
/// `\r\n` pairs collapse into a single break. Apply only to text that has
/// already been escaped with [`escape_html`].
pub fn newlines_to_br(escaped: &str) -> String {
    escaped.replace("\r\n", "\n").replace('\n', "<br/>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_metacharacters() {
        assert_eq!(
            escape_html(r#"& < > " '"#),
            "&amp; &lt; &gt; &quot; &#039;"
        );
    }

    #[test]
    fn test_escape_script_tag() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape_html("alice@example.com"), "alice@example.com");
        assert_eq!(escape_html("Zoë"), "Zoë");
    }

    #[test]
    fn test_ampersand_escaped_once() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_newlines_to_br() {
        assert_eq!(newlines_to_br("Hello\nWorld"), "Hello<br/>World");
        assert_eq!(newlines_to_br("a\r\nb\n\nc"), "a<br/>b<br/><br/>c");
        assert_eq!(newlines_to_br("single line"), "single line");
    }
}
