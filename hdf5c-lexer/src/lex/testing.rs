//! Testing helpers
//!
//! Shared by the unit tests in this crate and by the integration tests under `tests/`.
//!
//! - [factories::mk_tokens] builds expected token vectors from `(category, position, text)`
//!   tuples, so assertions read like the token stream they describe.
//! - [factories::FailingLexer] and [factories::CountingLexer] are inner lexers for exercising
//!   wrappers: one gives up with an error after a number of tokens, the other records how
//!   many tokens have been pulled from it.

pub mod factories {
    use crate::lex::lexing::base_tokenization::tokenize;
    use crate::lex::lexing::{LexError, Lexer, LexerInfo, TokenStream};
    use crate::lex::token::{SpannedToken, TokenCategory};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Build a token vector from `(category, position, text)` tuples
    pub fn mk_tokens<'src>(
        specs: &[(TokenCategory, usize, &'src str)],
    ) -> Vec<SpannedToken<'src>> {
        specs
            .iter()
            .map(|&(category, position, text)| SpannedToken::new(position, category, text))
            .collect()
    }

    /// Lexes like the C lexer for `fail_after` tokens, then yields one error and stops
    pub struct FailingLexer {
        info: LexerInfo,
        fail_after: usize,
        message: String,
    }

    impl FailingLexer {
        pub fn new(fail_after: usize, message: impl Into<String>) -> Self {
            FailingLexer {
                info: LexerInfo::new("failing"),
                fail_after,
                message: message.into(),
            }
        }
    }

    impl Lexer for FailingLexer {
        fn info(&self) -> &LexerInfo {
            &self.info
        }

        fn tokenize<'a, 'src: 'a>(&'a self, source: &'src str) -> TokenStream<'a, 'src> {
            let tokens = tokenize(source).take(self.fail_after).map(Ok);
            let failure = std::iter::once(Err(LexError::Error(self.message.clone())));
            Box::new(tokens.chain(failure))
        }
    }

    /// C lexer that counts the tokens pulled from it
    pub struct CountingLexer {
        info: LexerInfo,
        pulled: AtomicUsize,
    }

    impl CountingLexer {
        pub fn new() -> Self {
            CountingLexer {
                info: LexerInfo::new("counting"),
                pulled: AtomicUsize::new(0),
            }
        }

        pub fn pulled(&self) -> usize {
            self.pulled.load(Ordering::SeqCst)
        }
    }

    impl Default for CountingLexer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Lexer for CountingLexer {
        fn info(&self) -> &LexerInfo {
            &self.info
        }

        fn tokenize<'a, 'src: 'a>(&'a self, source: &'src str) -> TokenStream<'a, 'src> {
            Box::new(tokenize(source).map(move |token| {
                self.pulled.fetch_add(1, Ordering::SeqCst);
                Ok(token)
            }))
        }
    }
}
