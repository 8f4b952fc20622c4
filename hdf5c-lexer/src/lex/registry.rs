//! Lexer registry for lexer discovery and selection
//!
//! This module provides a centralized registry for the available lexers. Lexers can be
//! registered and then retrieved by name, by alias, or by the file they are asked to
//! highlight.
//!
//! Filename Overlap
//!
//!     Several lexers may claim the same file: both `c` and `hdf5c` claim `*.c`. The most
//!     recently registered claimant wins, so registration order expresses preference.
//!     [LexerRegistry::with_defaults] registers `hdf5c` after `c`, which sends `*.c` files to
//!     `hdf5c` while `*.h` files still go to `c`. Every claimant stays reachable through
//!     [LexerRegistry::candidates_for_filename] and through explicit selection by name.

use crate::lex::lexing::{hdf5c, CLexer, LexError, Lexer};
use log::{debug, warn};
use regex::Regex;
use std::path::Path;

struct Entry {
    lexer: Box<dyn Lexer>,
    patterns: Vec<Regex>,
}

impl Entry {
    fn claims(&self, file_name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(file_name))
    }
}

/// Registry of lexers, kept in registration order
///
/// # Examples
///
/// ```ignore
/// let registry = LexerRegistry::with_defaults();
///
/// let lexer = registry.for_filename("src/H5Dio.c")?;
/// let tokens = lexer.tokenize_all("hid_t dset;")?;
/// ```
pub struct LexerRegistry {
    entries: Vec<Entry>,
}

/// Translate a filename glob (`*` and `?` wildcards) into an anchored regex
pub fn glob_to_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let mut expr = String::with_capacity(pattern.len() + 8);
    expr.push('^');
    for c in pattern.chars() {
        match c {
            '*' => expr.push_str(".*"),
            '?' => expr.push('.'),
            _ => expr.push_str(&regex::escape(&c.to_string())),
        }
    }
    expr.push('$');
    Regex::new(&expr)
}

impl LexerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        LexerRegistry {
            entries: Vec::new(),
        }
    }

    /// Register a lexer
    ///
    /// If a lexer with the same name already exists, it is replaced and the new one counts
    /// as the most recent registration.
    pub fn register<L: Lexer + 'static>(&mut self, lexer: L) {
        let name = lexer.name().to_string();
        self.entries.retain(|e| e.lexer.name() != name);

        let patterns = lexer
            .filenames()
            .iter()
            .filter_map(|glob| match glob_to_regex(glob) {
                Ok(regex) => Some(regex),
                Err(e) => {
                    warn!("ignoring filename pattern {:?} of lexer {}: {}", glob, name, e);
                    None
                }
            })
            .collect();

        debug!("registered lexer {} for {:?}", name, lexer.filenames());
        self.entries.push(Entry {
            lexer: Box::new(lexer),
            patterns,
        });
    }

    /// Get a lexer by name or alias. Names take precedence over aliases.
    pub fn get(&self, name: &str) -> Result<&dyn Lexer, LexError> {
        self.entries
            .iter()
            .find(|e| e.lexer.name() == name)
            .or_else(|| {
                self.entries
                    .iter()
                    .rev()
                    .find(|e| e.lexer.info().answers_to(name))
            })
            .map(|e| e.lexer.as_ref())
            .ok_or_else(|| LexError::LexerNotFound(name.to_string()))
    }

    /// Check if a lexer answers to `name`
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// All lexers claiming the file, in registration order
    pub fn candidates_for_filename(&self, path: impl AsRef<Path>) -> Vec<&dyn Lexer> {
        let Some(file_name) = path.as_ref().file_name().and_then(|n| n.to_str()) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|e| e.claims(file_name))
            .map(|e| e.lexer.as_ref())
            .collect()
    }

    /// The most recently registered lexer claiming the file
    pub fn for_filename(&self, path: impl AsRef<Path>) -> Result<&dyn Lexer, LexError> {
        let path = path.as_ref();
        let lexer = self
            .candidates_for_filename(path)
            .pop()
            .ok_or_else(|| LexError::LexerNotFound(path.display().to_string()))?;
        debug!("selected lexer {} for {}", lexer.name(), path.display());
        Ok(lexer)
    }

    /// List all registered lexer names (sorted)
    pub fn list_lexers(&self) -> Vec<String> {
        let mut names: Vec<_> = self
            .entries
            .iter()
            .map(|e| e.lexer.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Registered lexers in registration order
    pub fn lexers(&self) -> impl Iterator<Item = &dyn Lexer> + '_ {
        self.entries.iter().map(|e| e.lexer.as_ref())
    }

    /// Create a registry with the built-in lexers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(CLexer::new());
        registry.register(hdf5c());
        registry
    }
}

impl Default for LexerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
