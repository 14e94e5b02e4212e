//! Tokenizer for arithmetic expressions.
//!
//! A single pass over the characters of the expression, driven by a small
//! state machine that remembers what kind of run (number, number with a
//! decimal point, identifier) is currently being accumulated. Runs are
//! validated when they are flushed; the first lexical error aborts
//! tokenization.
//!
//! Variable support is a parameter of the machine ([`LexerConfig`]) rather
//! than a separate lexer: with variables disabled, letters are simply
//! unclassifiable.

mod char_class;
mod lex_error;

use arith_ir::{Span, Token, TokenKind};
use tracing::{debug, trace};

use crate::char_class::{is_identifier_shape, is_number_shape, CharClass};

pub use lex_error::{LexError, LexErrorContext, LexErrorKind};

/// Tokenizer options.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LexerConfig {
    /// Accept identifiers as `Variable` tokens.
    pub allow_variables: bool,
}

impl LexerConfig {
    /// Numbers, operators and brackets only.
    pub const fn numbers_only() -> Self {
        LexerConfig {
            allow_variables: false,
        }
    }

    pub const fn with_variables() -> Self {
        LexerConfig {
            allow_variables: true,
        }
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig::with_variables()
    }
}

/// Tokenize `source` with variables enabled.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(source, LexerConfig::default())
}

/// Tokenize `source` with an explicit configuration.
pub fn tokenize_with(source: &str, config: LexerConfig) -> Result<Vec<Token>, LexError> {
    let tokens = Scanner::new(source, config).run()?;
    debug!(
        count = tokens.len(),
        variables = config.allow_variables,
        "tokenized expression"
    );
    Ok(tokens)
}

/// Classify one complete, whitespace-free term against each token shape.
///
/// Unlike [`tokenize`], the term is never split: `"+-123"` is a single
/// term matching no shape, so it is rejected.
pub fn classify_term(term: &str, config: LexerConfig) -> Result<TokenKind, LexError> {
    let span = Span::from_offsets(0, term.len());
    let mut chars = term.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        let punct = match CharClass::of(ch) {
            Some(CharClass::Plus) => Some(TokenKind::Plus),
            Some(CharClass::Minus) => Some(TokenKind::Minus),
            Some(CharClass::Times) => Some(TokenKind::Times),
            Some(CharClass::Divide) => Some(TokenKind::Divide),
            Some(CharClass::LParen) => Some(TokenKind::LParen),
            Some(CharClass::RParen) => Some(TokenKind::RParen),
            _ => None,
        };
        if let Some(kind) = punct {
            return Ok(kind);
        }
    }

    if !term.is_empty() && is_number_shape(term) {
        Ok(TokenKind::Number)
    } else if config.allow_variables && is_identifier_shape(term) {
        Ok(TokenKind::Variable)
    } else {
        Err(LexError::unknown_term(span))
    }
}

/// What the scanner is currently accumulating.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
enum Partial {
    #[default]
    None,
    Number,
    NumberWithDot,
    Variable,
}

/// The tokenizer state machine.
///
/// Only one run is ever pending at a time, and every run is a contiguous
/// slice of the source, so the pending run is tracked as a start offset
/// rather than a copied buffer.
struct Scanner<'a> {
    source: &'a str,
    config: LexerConfig,
    tokens: Vec<Token>,
    partial: Partial,
    run_start: usize,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str, config: LexerConfig) -> Self {
        Scanner {
            source,
            config,
            tokens: Vec::new(),
            partial: Partial::None,
            run_start: 0,
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        for (pos, ch) in self.source.char_indices() {
            let class = match CharClass::of(ch) {
                Some(CharClass::Alphabetic) if !self.config.allow_variables => None,
                class => class,
            };
            let Some(class) = class else {
                return Err(LexError::invalid_char(
                    Span::from_offsets(pos, pos + ch.len_utf8()),
                    ch,
                ));
            };

            match class {
                CharClass::Digit => self.digit(pos)?,
                CharClass::Dot => self.dot(pos)?,
                CharClass::Alphabetic => self.alphabetic(pos)?,
                CharClass::Space => self.flush(pos)?,
                CharClass::Plus => self.punct(pos, TokenKind::Plus)?,
                CharClass::Minus => self.punct(pos, TokenKind::Minus)?,
                CharClass::Times => self.punct(pos, TokenKind::Times)?,
                CharClass::Divide => self.punct(pos, TokenKind::Divide)?,
                CharClass::LParen => self.punct(pos, TokenKind::LParen)?,
                CharClass::RParen => self.punct(pos, TokenKind::RParen)?,
            }
        }

        self.flush(self.source.len())?;
        Ok(self.tokens)
    }

    fn digit(&mut self, pos: usize) -> Result<(), LexError> {
        if self.partial == Partial::Variable {
            self.flush(pos)?;
        }
        if self.partial == Partial::None {
            self.begin(pos, Partial::Number);
        }
        Ok(())
    }

    fn dot(&mut self, pos: usize) -> Result<(), LexError> {
        match self.partial {
            Partial::NumberWithDot => {
                return Err(LexError::repeated_decimal_point(Span::from_offsets(
                    pos,
                    pos + 1,
                )));
            }
            Partial::Variable => self.flush(pos)?,
            Partial::None | Partial::Number => {}
        }
        if self.partial == Partial::None {
            self.run_start = pos;
        }
        self.partial = Partial::NumberWithDot;
        Ok(())
    }

    fn alphabetic(&mut self, pos: usize) -> Result<(), LexError> {
        match self.partial {
            Partial::Number | Partial::NumberWithDot => self.flush(pos)?,
            Partial::None | Partial::Variable => {}
        }
        if self.partial == Partial::None {
            self.begin(pos, Partial::Variable);
        }
        Ok(())
    }

    fn punct(&mut self, pos: usize, kind: TokenKind) -> Result<(), LexError> {
        self.flush(pos)?;
        if let Some(token) = Token::punct(kind, Span::from_offsets(pos, pos + 1)) {
            self.push(token);
        }
        Ok(())
    }

    #[inline]
    fn begin(&mut self, pos: usize, partial: Partial) {
        self.run_start = pos;
        self.partial = partial;
    }

    /// Emit the pending run ending at `end`, validating its shape.
    fn flush(&mut self, end: usize) -> Result<(), LexError> {
        let partial = std::mem::take(&mut self.partial);
        if partial == Partial::None {
            return Ok(());
        }
        let source = self.source;
        let text = &source[self.run_start..end];
        let span = Span::from_offsets(self.run_start, end);
        match partial {
            Partial::None => {}
            Partial::Number | Partial::NumberWithDot => {
                if !is_number_shape(text) {
                    return Err(LexError::malformed_number(span));
                }
                self.push(Token::new(TokenKind::Number, text, span));
            }
            Partial::Variable => {
                if !is_identifier_shape(text) {
                    return Err(LexError::malformed_identifier(span));
                }
                self.push(Token::new(TokenKind::Variable, text, span));
            }
        }
        Ok(())
    }

    #[inline]
    fn push(&mut self, token: Token) {
        trace!(?token, "token");
        self.tokens.push(token);
    }
}

#[cfg(test)]
mod tests;
