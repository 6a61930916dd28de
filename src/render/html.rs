//! HTML escaping and span rendering
//!
//! Produces the markup assigned wholesale to the overlay layer. The
//! escaping touches exactly the three markup delimiter characters and
//! nothing else: whitespace, tabs and newlines pass through so the
//! rendered text stays character-for-character aligned with the edit
//! surface underneath it.

use crate::highlight::Fragment;

/// Escape markup delimiters in raw text
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

/// Render a fragment stream as overlay markup.
///
/// Classified fragments become class-tagged spans, plain fragments
/// stay bare escaped text. A trailing newline is always appended so
/// the overlay keeps a final line to align with the edit surface.
pub fn render(text: &str, fragments: &[Fragment]) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4 + 1);

    for frag in fragments {
        let chunk = &text[frag.start..frag.end];
        match frag.class.css_class() {
            Some(css) => {
                out.push_str("<span class=\"");
                out.push_str(css);
                out.push_str("\">");
                escape_into(&mut out, chunk);
                out.push_str("</span>");
            }
            None => escape_into(&mut out, chunk),
        }
    }

    out.push('\n');
    out
}

/// Remove span tags from rendered markup, keeping the escaped text.
///
/// Escaped source text never contains a raw '<', so every '<' in the
/// markup opens a tag.
pub fn strip(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// Undo `escape`
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        if let Some(tail) = rest.strip_prefix("&amp;") {
            out.push('&');
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("&lt;") {
            out.push('<');
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("&gt;") {
            out.push('>');
            rest = tail;
        } else {
            out.push('&');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    out
}
