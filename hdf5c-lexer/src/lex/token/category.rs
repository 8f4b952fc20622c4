//! Token categories
//!
//! The fixed taxonomy every lexer maps its lexemes onto. It follows the classes a
//! highlighter cares about, not the C grammar: `int` and `while` are both keywords to a
//! compiler, but renderers colour them differently.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenCategory {
    /// Spaces, tabs, newlines and line continuations
    Whitespace,
    /// Line and block comments
    Comment,
    /// A whole preprocessor directive line
    Preprocessor,
    /// Reserved words, including words promoted by a reclassifying lexer
    Keyword,
    /// Builtin type names such as `int` or `size_t`
    KeywordType,
    Identifier,
    /// Predefined names such as `NULL`, `true` and `false`
    Builtin,
    Number,
    String,
    Char,
    Operator,
    Punctuation,
    /// Input the lexer could not recognize
    Error,
}

impl TokenCategory {
    /// Name used in tag output and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Whitespace => "whitespace",
            TokenCategory::Comment => "comment",
            TokenCategory::Preprocessor => "preprocessor",
            TokenCategory::Keyword => "keyword",
            TokenCategory::KeywordType => "keyword-type",
            TokenCategory::Identifier => "identifier",
            TokenCategory::Builtin => "builtin",
            TokenCategory::Number => "number",
            TokenCategory::String => "string",
            TokenCategory::Char => "char",
            TokenCategory::Operator => "operator",
            TokenCategory::Punctuation => "punctuation",
            TokenCategory::Error => "error",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
