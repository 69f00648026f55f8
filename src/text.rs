/*
    Text input
*/

use std::str::FromStr;

use thiserror::Error;

/// Malformed textual input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("invalid {expected}: {token:?}")]
    InvalidToken {
        expected: &'static str,
        token: String,
    },

    #[error("unexpected trailing input: {rest:?}")]
    TrailingInput { rest: String },
}

/// A reader over whitespace-separated text.
///
/// Behaves like a formatted input stream: every read skips leading
/// whitespace, then consumes the longest prefix that looks like the
/// requested item. A number may therefore be immediately followed by
/// a non-whitespace character, as in `3/4`.
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new `Scanner` positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the unread part of the input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns true if only whitespace remains.
    pub fn is_exhausted(&self) -> bool {
        self.rest().trim_start().is_empty()
    }

    /// Fails unless only whitespace remains.
    pub fn finish(&mut self) -> Result<(), ParseError> {
        self.skip_whitespace();
        if self.is_exhausted() {
            Ok(())
        } else {
            let rest = self.rest().to_string();
            log::debug!("trailing input after value: {:?}", rest);
            Err(ParseError::TrailingInput { rest })
        }
    }

    /// Reads a single character, skipping leading whitespace.
    pub fn read_char(&mut self, expected: &'static str) -> Result<char, ParseError> {
        self.skip_whitespace();
        match self.rest().chars().next() {
            Some(c) => {
                self.pos += c.len_utf8();
                Ok(c)
            }
            None => Err(self.eof(expected)),
        }
    }

    /// Reads a signed or unsigned decimal integer.
    pub fn read_integer<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ParseError> {
        self.skip_whitespace();
        if self.rest().is_empty() {
            return Err(self.eof(expected));
        }

        let start = self.pos;
        self.eat_sign();
        if self.eat_digits() == 0 {
            return Err(self.invalid(start, expected));
        }

        let lexeme = &self.input[start..self.pos];
        lexeme.parse().map_err(|_| self.invalid(start, expected))
    }

    /// Reads a decimal floating-point number, optionally with
    /// a fractional part and an exponent.
    pub fn read_float(&mut self, expected: &'static str) -> Result<f64, ParseError> {
        self.skip_whitespace();
        if self.rest().is_empty() {
            return Err(self.eof(expected));
        }

        let start = self.pos;
        self.eat_sign();
        let mut digits = self.eat_digits();
        if self.rest().starts_with('.') {
            self.pos += 1;
            digits += self.eat_digits();
        }
        if digits == 0 {
            return Err(self.invalid(start, expected));
        }

        // exponent is only consumed when digits follow it
        let mantissa_end = self.pos;
        if self.rest().starts_with(['e', 'E']) {
            self.pos += 1;
            self.eat_sign();
            if self.eat_digits() == 0 {
                self.pos = mantissa_end;
            }
        }

        let lexeme = &self.input[start..self.pos];
        lexeme.parse().map_err(|_| self.invalid(start, expected))
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn eat_sign(&mut self) {
        if self.rest().starts_with(['+', '-']) {
            self.pos += 1;
        }
    }

    fn eat_digits(&mut self) -> usize {
        let n = self.rest().bytes().take_while(u8::is_ascii_digit).count();
        self.pos += n;
        n
    }

    fn eof(&self, expected: &'static str) -> ParseError {
        log::debug!("input ended while reading {}", expected);
        ParseError::UnexpectedEof { expected }
    }

    // Reports the whitespace-delimited token starting at `start`.
    fn invalid(&self, start: usize, expected: &'static str) -> ParseError {
        let token: String = self.input[start..]
            .chars()
            .take_while(|c| !c.is_whitespace())
            .collect();
        log::debug!("invalid {} at byte {}: {:?}", expected, start, token);
        ParseError::InvalidToken { expected, token }
    }
}
