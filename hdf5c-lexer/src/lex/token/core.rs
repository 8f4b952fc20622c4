//! The spanned token produced by every lexer

use super::category::TokenCategory;
use serde::Serialize;

/// A `(position, category, text)` triple
///
/// `position` is the byte offset of `text` in the source. `text` is borrowed from the
/// source and is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpannedToken<'src> {
    pub position: usize,
    pub category: TokenCategory,
    pub text: &'src str,
}

impl<'src> SpannedToken<'src> {
    pub fn new(position: usize, category: TokenCategory, text: &'src str) -> Self {
        SpannedToken {
            position,
            category,
            text,
        }
    }

    /// Same token with a different category. Position and text are kept.
    pub fn with_category(self, category: TokenCategory) -> Self {
        SpannedToken { category, ..self }
    }
}
