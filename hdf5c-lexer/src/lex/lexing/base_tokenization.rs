//! Base tokenization for C source
//!
//! This module provides the raw tokenization using the logos lexer library. It is the
//! lexer every other lexer in the crate builds on: the entry point where source strings
//! become token streams.
//!
//! Logos only tells lexemes apart. Deciding whether a word is a keyword, a type name, a
//! builtin constant or a plain identifier happens afterwards in [classify_word], against
//! fixed word tables.
//!
//! Unrecognized input (stray characters, unterminated literals or comments) comes out of
//! logos as an error span. Those spans are emitted as `Error` tokens instead of being
//! dropped, so the stream always covers the whole source.

use super::common::{LexError, Lexer, LexerInfo, TokenStream};
use crate::lex::token::{SpannedToken, TokenCategory};
use logos::Logos;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Lexemes recognized by the C tokenizer
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken {
    #[regex(r"[ \t\r\n\x0B\x0C]+")]
    Whitespace,

    // Backslash-newline outside of a directive
    #[regex(r"\\\r?\n")]
    LineContinuation,

    #[regex(r"//[^\n]*")]
    LineComment,

    // Unterminated comments swallow the rest of the source as a single error
    #[token("/*", block_comment)]
    BlockComment,

    // Runs to the end of the line, following backslash-newline continuations
    #[regex(r"#([^\\\n]|\\(\r?\n|[^\n]))*")]
    Directive,

    #[regex(r#"(L|u8|u|U)?"([^"\\\n]|\\(\r?\n|[^\n]))*""#)]
    String,

    #[regex(r"(L|u8|u|U)?'([^'\\\n]|\\[^\n])*'")]
    Char,

    #[regex(r"0[xX][0-9a-fA-F]+[uUlL]*")]
    #[regex(r"[0-9]+[uUlL]*")]
    #[regex(r"([0-9]+\.[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?[fFlL]?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+[fFlL]?")]
    Number,

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Word,

    #[regex(r"[-+*/%&|^!~<>=?:]")]
    Operator,

    #[regex(r"[()\[\]{},.;]")]
    Punctuation,
}

fn block_comment(lex: &mut logos::Lexer<RawToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

static C_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "asm", "auto", "break", "case", "const", "continue", "default", "do", "else", "enum",
        "extern", "for", "goto", "if", "inline", "register", "restrict", "return", "sizeof",
        "static", "struct", "switch", "typedef", "union", "volatile", "while", "alignas",
        "alignof", "static_assert", "thread_local", "typeof", "_Alignas", "_Alignof",
        "_Atomic", "_Generic", "_Noreturn", "_Static_assert", "_Thread_local", "__asm",
        "__asm__", "__attribute__", "__inline", "__inline__", "__restrict", "__volatile__",
    ]
    .into_iter()
    .collect()
});

static C_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "_Bool", "_Complex", "_Imaginary", "bool", "char", "double", "float", "int", "long",
        "short", "signed", "unsigned", "void", "size_t", "ssize_t", "off_t", "wchar_t",
        "ptrdiff_t", "sig_atomic_t", "fpos_t", "clock_t", "time_t", "va_list", "jmp_buf",
        "FILE", "DIR", "div_t", "ldiv_t", "mbstate_t", "wctrans_t", "wint_t", "wctype_t",
        "int8_t", "int16_t", "int32_t", "int64_t", "uint8_t", "uint16_t", "uint32_t",
        "uint64_t", "int_least8_t", "int_least16_t", "int_least32_t", "int_least64_t",
        "uint_least8_t", "uint_least16_t", "uint_least32_t", "uint_least64_t",
        "int_fast8_t", "int_fast16_t", "int_fast32_t", "int_fast64_t", "uint_fast8_t",
        "uint_fast16_t", "uint_fast32_t", "uint_fast64_t", "intptr_t", "uintptr_t",
        "intmax_t", "uintmax_t",
    ]
    .into_iter()
    .collect()
});

static C_BUILTINS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["NULL", "true", "false"].into_iter().collect());

/// Category of a word lexeme
pub fn classify_word(word: &str) -> TokenCategory {
    if C_KEYWORDS.contains(word) {
        TokenCategory::Keyword
    } else if C_TYPES.contains(word) {
        TokenCategory::KeywordType
    } else if C_BUILTINS.contains(word) {
        TokenCategory::Builtin
    } else {
        TokenCategory::Identifier
    }
}

impl RawToken {
    /// Map a lexeme to its category. `text` is only inspected for words.
    pub fn category(&self, text: &str) -> TokenCategory {
        match self {
            RawToken::Whitespace | RawToken::LineContinuation => TokenCategory::Whitespace,
            RawToken::LineComment | RawToken::BlockComment => TokenCategory::Comment,
            RawToken::Directive => TokenCategory::Preprocessor,
            RawToken::String => TokenCategory::String,
            RawToken::Char => TokenCategory::Char,
            RawToken::Number => TokenCategory::Number,
            RawToken::Word => classify_word(text),
            RawToken::Operator => TokenCategory::Operator,
            RawToken::Punctuation => TokenCategory::Punctuation,
        }
    }
}

/// Lazy token stream over C source
pub struct CTokens<'src> {
    lexer: logos::Lexer<'src, RawToken>,
}

impl<'src> CTokens<'src> {
    pub fn new(source: &'src str) -> Self {
        CTokens {
            lexer: RawToken::lexer(source),
        }
    }
}

impl<'src> Iterator for CTokens<'src> {
    type Item = SpannedToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.lexer.next()?;
        let text = self.lexer.slice();
        let category = match result {
            Ok(raw) => raw.category(text),
            Err(()) => TokenCategory::Error,
        };
        Some(SpannedToken::new(self.lexer.span().start, category, text))
    }
}

/// Tokenize C source with location information
///
/// This is the base tokenization step. Transformations such as keyword reclassification
/// operate on the stream it returns.
pub fn tokenize(source: &str) -> CTokens<'_> {
    CTokens::new(source)
}

/// The general purpose C lexer
#[derive(Debug, Clone)]
pub struct CLexer {
    info: LexerInfo,
}

impl CLexer {
    pub fn new() -> Self {
        CLexer {
            info: LexerInfo::new("c")
                .with_aliases(&["c"])
                .with_filenames(&["*.c", "*.h", "*.idc"])
                .with_description("C source"),
        }
    }
}

impl Default for CLexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer for CLexer {
    fn info(&self) -> &LexerInfo {
        &self.info
    }

    fn tokenize<'a, 'src: 'a>(&'a self, source: &'src str) -> TokenStream<'a, 'src> {
        Box::new(tokenize(source).map(Ok::<_, LexError>))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex::token::detokenize;

    fn categories(source: &str) -> Vec<(TokenCategory, &str)> {
        tokenize(source).map(|t| (t.category, t.text)).collect()
    }

    #[test]
    fn test_tokenizes() {
        let tokens: Vec<_> = tokenize("int x;").collect();
        assert_eq!(tokens.len(), 4);

        assert_eq!(tokens[0], SpannedToken::new(0, TokenCategory::KeywordType, "int"));
        assert_eq!(tokens[1], SpannedToken::new(3, TokenCategory::Whitespace, " "));
        assert_eq!(tokens[2], SpannedToken::new(4, TokenCategory::Identifier, "x"));
        assert_eq!(tokens[3], SpannedToken::new(5, TokenCategory::Punctuation, ";"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("").count(), 0);
    }

    #[test]
    fn test_hdf5_types_are_plain_identifiers() {
        assert_eq!(
            categories("hid_t herr_t"),
            vec![
                (TokenCategory::Identifier, "hid_t"),
                (TokenCategory::Whitespace, " "),
                (TokenCategory::Identifier, "herr_t"),
            ]
        );
    }

    #[test]
    fn test_comments() {
        assert_eq!(
            categories("// hid_t\n/* a\n * b */x"),
            vec![
                (TokenCategory::Comment, "// hid_t"),
                (TokenCategory::Whitespace, "\n"),
                (TokenCategory::Comment, "/* a\n * b */"),
                (TokenCategory::Identifier, "x"),
            ]
        );
    }

    #[test]
    fn test_block_comment_with_stars() {
        assert_eq!(
            categories("/** doc **/"),
            vec![(TokenCategory::Comment, "/** doc **/")]
        );
    }

    #[test]
    fn test_directive_runs_to_end_of_line() {
        assert_eq!(
            categories("#include \"hdf5.h\"\nint"),
            vec![
                (TokenCategory::Preprocessor, "#include \"hdf5.h\""),
                (TokenCategory::Whitespace, "\n"),
                (TokenCategory::KeywordType, "int"),
            ]
        );
    }

    #[test]
    fn test_directive_continuation() {
        assert_eq!(
            categories("#define CHECK(x) \\\n    if (x) {}\nx"),
            vec![
                (TokenCategory::Preprocessor, "#define CHECK(x) \\\n    if (x) {}"),
                (TokenCategory::Whitespace, "\n"),
                (TokenCategory::Identifier, "x"),
            ]
        );
    }

    #[test]
    fn test_string_and_char_literals() {
        assert_eq!(
            categories(r#"puts("hid_t \"x\""); c = '\n'; w = L"wide";"#),
            vec![
                (TokenCategory::Identifier, "puts"),
                (TokenCategory::Punctuation, "("),
                (TokenCategory::String, r#""hid_t \"x\"""#),
                (TokenCategory::Punctuation, ")"),
                (TokenCategory::Punctuation, ";"),
                (TokenCategory::Whitespace, " "),
                (TokenCategory::Identifier, "c"),
                (TokenCategory::Whitespace, " "),
                (TokenCategory::Operator, "="),
                (TokenCategory::Whitespace, " "),
                (TokenCategory::Char, r"'\n'"),
                (TokenCategory::Punctuation, ";"),
                (TokenCategory::Whitespace, " "),
                (TokenCategory::Identifier, "w"),
                (TokenCategory::Whitespace, " "),
                (TokenCategory::Operator, "="),
                (TokenCategory::Whitespace, " "),
                (TokenCategory::String, "L\"wide\""),
                (TokenCategory::Punctuation, ";"),
            ]
        );
    }

    #[test]
    fn test_numbers() {
        for literal in ["0", "42", "42UL", "0x1F", "0XffU", "3.14", ".5", "1e10", "2.5e-3f"] {
            assert_eq!(
                categories(literal),
                vec![(TokenCategory::Number, literal)],
                "literal {:?}",
                literal
            );
        }
    }

    #[test]
    fn test_word_classification() {
        assert_eq!(classify_word("while"), TokenCategory::Keyword);
        assert_eq!(classify_word("typedef"), TokenCategory::Keyword);
        assert_eq!(classify_word("unsigned"), TokenCategory::KeywordType);
        assert_eq!(classify_word("size_t"), TokenCategory::KeywordType);
        assert_eq!(classify_word("uint64_t"), TokenCategory::KeywordType);
        assert_eq!(classify_word("NULL"), TokenCategory::Builtin);
        assert_eq!(classify_word("hsize_t"), TokenCategory::Identifier);
        assert_eq!(classify_word("whiles"), TokenCategory::Identifier);
    }

    #[test]
    fn test_operators_are_single_characters() {
        assert_eq!(
            categories("a->b"),
            vec![
                (TokenCategory::Identifier, "a"),
                (TokenCategory::Operator, "-"),
                (TokenCategory::Operator, ">"),
                (TokenCategory::Identifier, "b"),
            ]
        );
    }

    #[test]
    fn test_stray_characters_become_errors() {
        let tokens: Vec<_> = tokenize("x @ y").collect();
        assert!(tokens
            .iter()
            .any(|t| t.category == TokenCategory::Error && t.text == "@"));
        assert_eq!(detokenize(&tokens), "x @ y");
    }

    #[test]
    fn test_unterminated_literals_become_errors() {
        for source in ["\"never closed\nint y;", "'a", "é = 1;"] {
            let tokens: Vec<_> = tokenize(source).collect();
            assert!(
                tokens.iter().any(|t| t.category == TokenCategory::Error),
                "expected an error token for {:?}",
                source
            );
            assert_eq!(detokenize(&tokens), source);
        }
    }

    #[test]
    fn test_unterminated_comment_keeps_full_coverage() {
        let source = "x /* open comment\nhid_t";
        let tokens: Vec<_> = tokenize(source).collect();
        assert_eq!(detokenize(&tokens), source);
        assert!(tokens
            .iter()
            .any(|t| t.category == TokenCategory::Error && t.text.starts_with("/*")));
        assert!(tokens
            .iter()
            .all(|t| t.category != TokenCategory::Comment && t.text != "hid_t"));
    }

    #[test]
    fn test_adjacent_block_comments() {
        assert_eq!(
            categories("/**/hid_t/* a */ /*b*/"),
            vec![
                (TokenCategory::Comment, "/**/"),
                (TokenCategory::Identifier, "hid_t"),
                (TokenCategory::Comment, "/* a */"),
                (TokenCategory::Whitespace, " "),
                (TokenCategory::Comment, "/*b*/"),
            ]
        );
    }

    #[test]
    fn test_block_comment_ends_at_first_terminator() {
        assert_eq!(
            categories("/* a */ x /* b */"),
            vec![
                (TokenCategory::Comment, "/* a */"),
                (TokenCategory::Whitespace, " "),
                (TokenCategory::Identifier, "x"),
                (TokenCategory::Whitespace, " "),
                (TokenCategory::Comment, "/* b */"),
            ]
        );
    }

    #[test]
    fn test_lexer_info() {
        let lexer = CLexer::new();
        assert_eq!(lexer.name(), "c");
        assert_eq!(lexer.aliases(), ["c".to_string()]);
        assert!(lexer.filenames().iter().any(|p| p == "*.c"));
        assert!(lexer.filenames().iter().any(|p| p == "*.h"));
    }
}
