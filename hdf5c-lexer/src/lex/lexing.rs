//! Lexing
//!
//!     This module holds the lexers. All of them implement the [Lexer] trait: they describe
//!     themselves through a [LexerInfo] (name, aliases, filename patterns) and turn a source
//!     string into a lazy [TokenStream].
//!
//! The Lexers
//!
//!     1. The base C lexer. See [base_tokenization](base_tokenization).
//!        A logos generated tokenizer for C source. It never fails: anything it cannot
//!        recognize is emitted as an `Error` token so the stream still covers the whole input.
//!
//!     2. The keyword reclassifying lexer. See [reclassify](reclassify).
//!        Wraps any other lexer and re-tags identifier tokens whose text is in a fixed set of
//!        reserved words as keywords. Everything else, errors included, passes through as is.
//!
//!     [hdf5c] composes the two: the C lexer with the HDF5 type aliases (`hid_t`, `herr_t`,
//!     `hbool_t`, `hsize_t`, `htri_t`) promoted to keywords.
//!
//! Streams
//!
//!     Token streams are plain iterators. Pulling one token from a reclassifying lexer pulls
//!     exactly one token from the lexer it wraps, nothing is buffered, and dropping the
//!     iterator is all it takes to stop. Each call to `tokenize` builds a fresh stream, so
//!     calls never share state.

pub mod base_tokenization;
pub mod common;
pub mod reclassify;

pub use base_tokenization::{tokenize, CLexer, CTokens};
pub use common::{LexError, Lexer, LexerInfo, TokenStream};
pub use reclassify::{
    hdf5c, hdf5c_with_keywords, reclassify_keywords, KeywordReclassifyingLexer, Reclassify,
    ReservedWords, HDF5_TYPE_ALIASES,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex::testing::factories::mk_tokens;
    use crate::lex::token::{detokenize, TokenCategory};

    #[test]
    fn test_declaration_pattern() {
        let tokens = hdf5c()
            .tokenize_all("herr_t status = H5Fclose(file_id);")
            .expect("lexing failed");

        assert_eq!(
            tokens,
            mk_tokens(&[
                (TokenCategory::Keyword, 0, "herr_t"),
                (TokenCategory::Whitespace, 6, " "),
                (TokenCategory::Identifier, 7, "status"),
                (TokenCategory::Whitespace, 13, " "),
                (TokenCategory::Operator, 14, "="),
                (TokenCategory::Whitespace, 15, " "),
                (TokenCategory::Identifier, 16, "H5Fclose"),
                (TokenCategory::Punctuation, 24, "("),
                (TokenCategory::Identifier, 25, "file_id"),
                (TokenCategory::Punctuation, 32, ")"),
                (TokenCategory::Punctuation, 33, ";"),
            ])
        );
    }

    #[test]
    fn test_function_signature_pattern() {
        let source = "static hid_t\nopen_dataset(hid_t file, const char *name, hbool_t create)\n{\n    return H5I_INVALID_HID;\n}\n";
        let tokens = hdf5c().tokenize_all(source).expect("lexing failed");

        let keywords: Vec<&str> = tokens
            .iter()
            .filter(|t| t.category == TokenCategory::Keyword)
            .map(|t| t.text)
            .collect();
        assert_eq!(
            keywords,
            vec!["static", "hid_t", "hid_t", "const", "hbool_t", "return"]
        );

        let types: Vec<&str> = tokens
            .iter()
            .filter(|t| t.category == TokenCategory::KeywordType)
            .map(|t| t.text)
            .collect();
        assert_eq!(types, vec!["char"]);

        assert_eq!(detokenize(&tokens), source);
    }

    #[test]
    fn test_base_and_hdf5c_agree_outside_reserved_words() {
        let source = "#include \"hdf5.h\"\nhsize_t dims[2] = {4, 6}; /* hsize_t */\n";
        let base = CLexer::new().tokenize_all(source).expect("lexing failed");
        let hdf5 = hdf5c().tokenize_all(source).expect("lexing failed");

        assert_eq!(base.len(), hdf5.len());
        for (b, h) in base.iter().zip(hdf5.iter()) {
            assert_eq!(b.position, h.position);
            assert_eq!(b.text, h.text);
            if b.category != h.category {
                assert_eq!(b.category, TokenCategory::Identifier);
                assert_eq!(h.category, TokenCategory::Keyword);
                assert_eq!(h.text, "hsize_t");
            }
        }
    }
}
