//! Common lexer module
//!
//! This module contains shared interfaces and utilities for lexer implementations.

use crate::lex::token::SpannedToken;
use std::fmt;

/// Lazy, single-pass stream of tokens
///
/// Borrows the lexer for `'a` and the source for `'src`; tokens only borrow the source.
pub type TokenStream<'a, 'src> = Box<dyn Iterator<Item = Result<SpannedToken<'src>, LexError>> + 'a>;

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Error raised by a lexer implementation
    Error(String),
    /// No registered lexer matches the requested name, alias or filename
    LexerNotFound(String),
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::Error(msg) => write!(f, "Lexing error: {}", msg),
            LexError::LexerNotFound(name) => write!(f, "No lexer found for '{}'", name),
        }
    }
}

impl std::error::Error for LexError {}

impl From<LexError> for String {
    fn from(err: LexError) -> Self {
        err.to_string()
    }
}

/// Name, aliases and filename patterns a lexer can be selected by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerInfo {
    pub name: String,
    pub aliases: Vec<String>,
    /// Glob patterns matched against file names, e.g. `*.c`
    pub filenames: Vec<String>,
    pub description: String,
}

impl LexerInfo {
    pub fn new(name: impl Into<String>) -> Self {
        LexerInfo {
            name: name.into(),
            aliases: Vec::new(),
            filenames: Vec::new(),
            description: String::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_filenames(mut self, patterns: &[&str]) -> Self {
        self.filenames = patterns.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// True if `name` is this lexer's name or one of its aliases
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases.iter().any(|a| a == name)
    }
}

/// Trait for lexer implementations
///
/// Implementors only hold immutable data, so one instance can serve any number of
/// `tokenize` calls, from any number of threads.
pub trait Lexer: Send + Sync {
    /// Selection metadata for this lexer
    fn info(&self) -> &LexerInfo;

    /// Tokenize the source text
    ///
    /// The returned stream is lazy and covers the whole source: concatenating the token
    /// texts gives back `source`.
    fn tokenize<'a, 'src: 'a>(&'a self, source: &'src str) -> TokenStream<'a, 'src>;

    fn name(&self) -> &str {
        &self.info().name
    }

    fn aliases(&self) -> &[String] {
        &self.info().aliases
    }

    fn filenames(&self) -> &[String] {
        &self.info().filenames
    }

    fn description(&self) -> &str {
        &self.info().description
    }

    /// Collect the whole stream, stopping at the first error
    fn tokenize_all<'src>(&self, source: &'src str) -> Result<Vec<SpannedToken<'src>>, LexError> {
        self.tokenize(source).collect()
    }
}

impl<L: Lexer + ?Sized> Lexer for &L {
    fn info(&self) -> &LexerInfo {
        (**self).info()
    }

    fn tokenize<'a, 'src: 'a>(&'a self, source: &'src str) -> TokenStream<'a, 'src> {
        (**self).tokenize(source)
    }
}

impl<L: Lexer + ?Sized> Lexer for Box<L> {
    fn info(&self) -> &LexerInfo {
        (**self).info()
    }

    fn tokenize<'a, 'src: 'a>(&'a self, source: &'src str) -> TokenStream<'a, 'src> {
        (**self).tokenize(source)
    }
}
