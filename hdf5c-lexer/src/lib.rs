//! # hdf5c-lexer
//!
//! C lexing for documentation tooling, with the HDF5 type aliases (`hid_t`, `herr_t`,
//! `hbool_t`, `hsize_t`, `htri_t`) highlighted as keywords.
//!
//! File Layout
//!
//!     src/lex
//!       ├── token        Token model: categories, spanned tokens, detokenizer
//!       ├── lexing       The base C lexer and the keyword reclassifying lexer
//!       ├── registry     Lexer selection by name, alias and filename
//!       └── testing      Helpers shared by unit and integration tests
//!
//! The entry points most callers want are [`lex::lexing::hdf5c`] and
//! [`lex::registry::LexerRegistry::with_defaults`].

pub mod lex;

pub use lex::lexing::{hdf5c, CLexer, KeywordReclassifyingLexer, LexError, Lexer, ReservedWords};
pub use lex::registry::LexerRegistry;
pub use lex::token::{SpannedToken, TokenCategory};
