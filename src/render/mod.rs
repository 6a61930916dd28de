//! Fragment renderers
//!
//! Two renderers walk the same fragment stream: `html` produces the
//! overlay layer's markup, `ansi` produces a styled terminal preview.

pub mod html;
pub mod ansi;
