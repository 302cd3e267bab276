use std::borrow::Cow;

/// Escape the characters with meaning in HTML text and attribute values.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
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
    Cow::Owned(out)
}

/// Serialize extra anchor attributes, leading space included. `href` and
/// `class` are emitted by the link assembly itself and skipped here. An
/// attribute with an empty value renders as a bare name.
pub fn attributes(attrs: &[(String, String)]) -> String {
    let mut out = String::new();
    for (name, value) in attrs {
        if name == "href" || name == "class" {
            continue;
        }
        out.push(' ');
        out.push_str(name);
        if !value.is_empty() {
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
