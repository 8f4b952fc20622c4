//! Core token types shared by the lexers, the registry and the tooling.
//!
//!     Every lexer in this crate produces the same token shape: a byte position, a
//!     category, and the exact slice of source text the token covers. Tokens borrow their
//!     text from the input, so a token stream is only valid while the source is alive.
//!
//! Text Preservation
//!
//!     Tokens never own or rewrite text. Concatenating the text of every token of a stream,
//!     in order, gives back the input byte for byte. Transformations over a stream (see
//!     [reclassify](crate::lex::lexing::reclassify)) may change a token's category, never its
//!     position or text. The [detokenize] helper relies on this.

pub mod category;
pub mod core;
pub mod formatting;

pub use self::core::SpannedToken;
pub use category::TokenCategory;
pub use formatting::{detokenize, ToTagString};
