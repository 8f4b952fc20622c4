//! Keyword reclassification
//!
//!     A token stream transformation that promotes identifiers to keywords. It wraps another
//!     lexer rather than extending it: [KeywordReclassifyingLexer] owns an inner lexer and a
//!     [ReservedWords] set, delegates tokenization to the inner lexer, and re-tags every
//!     `Identifier` token whose text is exactly one of the reserved words as `Keyword`.
//!
//!     Nothing else changes. Positions and texts are untouched, no token is added, dropped,
//!     merged or split, and errors from the inner lexer are forwarded as they are. Only
//!     identifiers are candidates: a reserved word inside a comment, a string or a directive
//!     stays where the inner lexer put it, and so do prefixes (`hid_ty` is not `hid_t`).
//!
//!     The adapter is [Reclassify]: each call to `next` pulls exactly one item from the inner
//!     stream and performs one set lookup.

use super::base_tokenization::CLexer;
use super::common::{LexError, Lexer, LexerInfo, TokenStream};
use crate::lex::token::{SpannedToken, TokenCategory};
use log::trace;
use std::collections::HashSet;

/// HDF5 type aliases highlighted as keywords by [hdf5c]
pub const HDF5_TYPE_ALIASES: [&str; 5] = ["hid_t", "herr_t", "hbool_t", "hsize_t", "htri_t"];

/// Immutable set of words promoted from identifier to keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedWords {
    words: HashSet<String>,
}

impl ReservedWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ReservedWords {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The HDF5 type aliases
    pub fn hdf5() -> Self {
        Self::new(HDF5_TYPE_ALIASES)
    }

    /// Exact, case sensitive membership
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Apply the rule to a single token
    pub fn reclassify<'src>(&self, token: SpannedToken<'src>) -> SpannedToken<'src> {
        if token.category == TokenCategory::Identifier && self.contains(token.text) {
            trace!("reclassified {:?} at {} as keyword", token.text, token.position);
            token.with_category(TokenCategory::Keyword)
        } else {
            token
        }
    }
}

impl Default for ReservedWords {
    fn default() -> Self {
        Self::hdf5()
    }
}

/// Iterator adapter applying [ReservedWords::reclassify] to a token stream
pub struct Reclassify<'k, I> {
    inner: I,
    reserved: &'k ReservedWords,
}

impl<'k, I> Reclassify<'k, I> {
    pub fn new(inner: I, reserved: &'k ReservedWords) -> Self {
        Reclassify { inner, reserved }
    }
}

impl<'k, 'src, I> Iterator for Reclassify<'k, I>
where
    I: Iterator<Item = Result<SpannedToken<'src>, LexError>>,
{
    type Item = Result<SpannedToken<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        Some(item.map(|token| self.reserved.reclassify(token)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Reclassify an existing token stream
pub fn reclassify_keywords<'k, 'src, I>(
    tokens: I,
    reserved: &'k ReservedWords,
) -> Reclassify<'k, I::IntoIter>
where
    I: IntoIterator<Item = Result<SpannedToken<'src>, LexError>>,
{
    Reclassify::new(tokens.into_iter(), reserved)
}

/// A lexer that promotes reserved identifiers of an inner lexer to keywords
#[derive(Debug, Clone)]
pub struct KeywordReclassifyingLexer<L> {
    inner: L,
    info: LexerInfo,
    reserved: ReservedWords,
}

impl<L: Lexer> KeywordReclassifyingLexer<L> {
    pub fn new(inner: L, info: LexerInfo, reserved: ReservedWords) -> Self {
        KeywordReclassifyingLexer {
            inner,
            info,
            reserved,
        }
    }
}

impl<L: Lexer> Lexer for KeywordReclassifyingLexer<L> {
    fn info(&self) -> &LexerInfo {
        &self.info
    }

    fn tokenize<'a, 'src: 'a>(&'a self, source: &'src str) -> TokenStream<'a, 'src> {
        Box::new(reclassify_keywords(self.inner.tokenize(source), &self.reserved))
    }
}

/// The C lexer with the HDF5 type aliases as keywords
pub fn hdf5c() -> KeywordReclassifyingLexer<CLexer> {
    hdf5c_with_keywords(ReservedWords::hdf5())
}

/// Same lexer as [hdf5c] with a custom reserved set
pub fn hdf5c_with_keywords(reserved: ReservedWords) -> KeywordReclassifyingLexer<CLexer> {
    let info = LexerInfo::new("hdf5c")
        .with_aliases(&["hdf5c"])
        .with_filenames(&["*.c"])
        .with_description("C source with HDF5 types highlighted as keywords");
    KeywordReclassifyingLexer::new(CLexer::new(), info, reserved)
}
