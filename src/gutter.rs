//! Line-number gutter
//!
//! Recomputes the gutter markup from the raw text's line count. The
//! count rarely changes between keystrokes, so an unchanged count
//! short-circuits and keeps the cached markup.

use std::fmt::Write as _;

/// Line-number gutter state
#[derive(Debug, Default)]
pub struct Gutter {
    /// Line count the cached markup was built for
    cached_count: usize,
    /// Cached gutter markup
    markup: String,
}

impl Gutter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the gutter for the given text.
    ///
    /// Returns true when the markup was regenerated, false when the
    /// line count is unchanged and the cache still applies. Empty
    /// text counts as one line; a trailing newline opens a new line.
    pub fn update(&mut self, text: &str) -> bool {
        let count = text.split('\n').count();
        if count == self.cached_count {
            return false;
        }

        self.cached_count = count;
        self.markup.clear();
        for n in 1..=count {
            let _ = write!(self.markup, "<div>{}</div>", n);
        }
        true
    }

    /// Current gutter markup
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Line count of the last update
    pub fn line_count(&self) -> usize {
        self.cached_count
    }
}
