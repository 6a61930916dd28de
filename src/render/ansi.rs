//! ANSI terminal preview renderer
//!
//! Renders the same fragment stream the overlay consumes, but with
//! terminal colors instead of span tags, for previewing a script in
//! the console. Styling wraps the text without altering it.

use std::fmt::Write as _;

use crossterm::style::{Color, Stylize};

use crate::highlight::{Fragment, TokenClass};

/// Color theme for the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// Foreground color for a token class, None for plain text
fn color(theme: Theme, class: TokenClass) -> Option<Color> {
    match theme {
        Theme::Dark => match class {
            TokenClass::String => Some(Color::Green),
            TokenClass::Comment => Some(Color::DarkGrey),
            TokenClass::Preprocessor => Some(Color::Magenta),
            TokenClass::Keyword => Some(Color::Magenta),
            TokenClass::Type => Some(Color::Yellow),
            TokenClass::Builtin => Some(Color::Blue),
            TokenClass::Number => Some(Color::Cyan),
            TokenClass::Operator => Some(Color::White),
            TokenClass::Plain => None,
        },
        Theme::Light => match class {
            TokenClass::String => Some(Color::DarkGreen),
            TokenClass::Comment => Some(Color::Grey),
            TokenClass::Preprocessor => Some(Color::DarkMagenta),
            TokenClass::Keyword => Some(Color::DarkMagenta),
            TokenClass::Type => Some(Color::DarkYellow),
            TokenClass::Builtin => Some(Color::DarkBlue),
            TokenClass::Number => Some(Color::DarkCyan),
            TokenClass::Operator => Some(Color::Black),
            TokenClass::Plain => None,
        },
    }
}

/// Render a fragment stream with ANSI colors.
///
/// Mirrors the markup renderer's shape, trailing newline included, so
/// the two outputs stay line-for-line interchangeable.
pub fn render(text: &str, fragments: &[Fragment], theme: Theme) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4 + 1);

    for frag in fragments {
        let chunk = &text[frag.start..frag.end];
        match color(theme, frag.class) {
            Some(fg) => {
                let _ = write!(out, "{}", chunk.with(fg));
            }
            None => out.push_str(chunk),
        }
    }

    out.push('\n');
    out
}
