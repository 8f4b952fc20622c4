//! Token formatting
//!
//! This module turns token streams back into text. Two forms are provided:
//!
//! - [detokenize] rebuilds the source by concatenating token texts. Because lexers never
//!   drop or rewrite text, this is the identity on the original input, which makes it the
//!   natural check for round-trip tests.
//! - [ToTagString] renders one token per line as `position<TAB>category<TAB>text`, with
//!   control characters escaped so each token stays on its own line.

use super::core::SpannedToken;

/// Trait for converting a token to its tag line representation
pub trait ToTagString {
    fn to_tag_string(&self) -> String;
}

impl ToTagString for SpannedToken<'_> {
    fn to_tag_string(&self) -> String {
        format!(
            "{}\t{}\t{}",
            self.position,
            self.category,
            self.text.escape_debug()
        )
    }
}

/// Detokenize a stream of tokens into a string
pub fn detokenize<'a, 'src: 'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a SpannedToken<'src>>,
{
    tokens.into_iter().map(|token| token.text).collect()
}
