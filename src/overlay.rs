//! Overlay layer state and synchronization
//!
//! The overlay is the read-only render layer stacked with the edit
//! surface. The contract: its content must reproduce the source text
//! exactly once tags are stripped, and its scroll offsets must mirror
//! the edit surface's on every scroll and input event. Column math is
//! display-width aware so horizontal offsets line up even with tabs
//! and wide characters in play.

use unicode_width::UnicodeWidthChar;

use crate::render::html;

/// Tab stop width used by the edit surface
pub const TAB_WIDTH: usize = 4;

/// Overlay layer state
#[derive(Debug, Default)]
pub struct Overlay {
    /// Rendered markup, assigned wholesale
    content: String,
    /// Vertical scroll offset, mirrored from the edit surface
    scroll_top: usize,
    /// Horizontal scroll offset, mirrored from the edit surface
    scroll_left: usize,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rendered content
    pub fn set_content(&mut self, markup: String) {
        self.content = markup;
    }

    /// Current rendered content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Mirror the edit surface's scroll offsets
    pub fn sync_scroll(&mut self, top: usize, left: usize) {
        self.scroll_top = top;
        self.scroll_left = left;
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn scroll_left(&self) -> usize {
        self.scroll_left
    }

    /// Check the alignment invariant against the source text.
    ///
    /// Stripping and unescaping the content must reproduce the source
    /// plus the trailing line terminator: no characters dropped,
    /// duplicated, reordered, or whitespace normalized.
    pub fn aligned_with(&self, source: &str) -> bool {
        let restored = html::unescape(&html::strip(&self.content));
        restored.len() == source.len() + 1
            && restored.starts_with(source)
            && restored.ends_with('\n')
    }
}

/// Display column of a byte position within a line.
///
/// Tabs advance to the next tab stop; other characters advance by
/// their terminal cell width.
pub fn byte_to_col(line: &str, byte_pos: usize) -> usize {
    let mut col = 0;
    for (idx, ch) in line.char_indices() {
        if idx >= byte_pos {
            break;
        }
        col += char_width(ch, col);
    }
    col
}

/// Byte position of a display column within a line.
///
/// Returns the line length when the column lies past the end.
pub fn col_to_byte(line: &str, col: usize) -> usize {
    let mut current = 0;
    for (idx, ch) in line.char_indices() {
        if current >= col {
            return idx;
        }
        current += char_width(ch, current);
    }
    line.len()
}

fn char_width(ch: char, col: usize) -> usize {
    if ch == '\t' {
        TAB_WIDTH - (col % TAB_WIDTH)
    } else {
        UnicodeWidthChar::width(ch).unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::{GrammarRegistry, LanguageId};
    use crate::render::html;

    #[test]
    fn test_aligned_with_accepts_render_output() {
        let registry = GrammarRegistry::new().unwrap();
        let grammar = registry.get(LanguageId::Cpp);
        let text = "#include <iostream>\nint main() { return 0; }\n";

        let mut overlay = Overlay::new();
        overlay.set_content(html::render(text, &grammar.tokenize(text)));
        assert!(overlay.aligned_with(text));
    }

    #[test]
    fn test_aligned_with_rejects_doctored_markup() {
        let mut overlay = Overlay::new();
        // Collapsed whitespace breaks column alignment
        overlay.set_content("a b\n".to_string());
        assert!(!overlay.aligned_with("a  b"));
        // A dropped trailing terminator breaks the last line
        overlay.set_content("a  b".to_string());
        assert!(!overlay.aligned_with("a  b"));
    }

    #[test]
    fn test_scroll_mirroring() {
        let mut overlay = Overlay::new();
        overlay.sync_scroll(120, 8);
        assert_eq!(overlay.scroll_top(), 120);
        assert_eq!(overlay.scroll_left(), 8);
    }

    #[test]
    fn test_column_round_trip_ascii() {
        let line = "let x = 1;";
        assert_eq!(byte_to_col(line, 4), 4);
        assert_eq!(col_to_byte(line, 4), 4);
    }

    #[test]
    fn test_column_with_tab() {
        let line = "\tx";
        // Tab advances to the next tab stop
        assert_eq!(byte_to_col(line, 1), TAB_WIDTH);
        assert_eq!(col_to_byte(line, TAB_WIDTH), 1);
    }

    #[test]
    fn test_column_with_wide_chars() {
        let line = "名前x";
        // Each CJK character occupies two cells
        assert_eq!(byte_to_col(line, "名前".len()), 4);
        assert_eq!(col_to_byte(line, 4), "名前".len());
    }
}
