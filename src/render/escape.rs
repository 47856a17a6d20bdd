/// Escape text so it renders as inert content inside HTML element bodies and
/// quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Drop control characters (ESC sequences, bells, carriage returns) before
/// untrusted text reaches the terminal. Newlines and tabs become spaces.
pub fn sanitize_terminal(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            '\n' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape_html("Quarterly report 📎"), "Quarterly report 📎");
    }

    #[test]
    fn already_escaped_text_is_escaped_again() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn terminal_sanitizer_strips_escape_sequences() {
        assert_eq!(sanitize_terminal("a\x1b[31mred\x07\r\nb\tc"), "a[31mred b c");
    }
}
