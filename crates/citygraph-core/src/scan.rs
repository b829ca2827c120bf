//! Line-oriented token scanning.
//!
//! Every prompt consumes exactly one non-blank input line; whatever follows the parsed value on
//! that line is discarded. Number parsing mirrors `scanf` conventions: leading whitespace is
//! skipped, digits are consumed greedily and trailing characters are ignored. Failures are
//! reported as [`TokenError`] instead of a sentinel value.

use std::io::BufRead;

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("expected a number but found nothing")]
    Empty,

    #[error("expected a number, found `{found}`")]
    NotANumber { found: String },

    #[error("number is too large")]
    Overflow,

    #[error("expected `:` between values")]
    MissingSeparator,
}

pub struct LineScanner<R> {
    inner: R,
    raw: Vec<u8>,
    line: String,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            raw: Vec::new(),
            line: String::new(),
        }
    }

    /// Returns the next non-blank line without its terminator.
    ///
    /// Bytes that are not UTF-8 are replaced with `U+FFFD`, so such a line simply fails to
    /// parse. `expecting` names the value being prompted for and ends up in
    /// [`Error::InputClosed`] when the stream is exhausted.
    pub fn next_line(&mut self, expecting: &'static str) -> Result<&str> {
        loop {
            self.raw.clear();
            if self.inner.read_until(b'\n', &mut self.raw)? == 0 {
                return Err(Error::InputClosed { expecting });
            }
            self.line = String::from_utf8_lossy(&self.raw).into_owned();
            if !self.line.trim().is_empty() {
                break;
            }
        }
        Ok(self.line.trim_end_matches(['\r', '\n']))
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    fn digits(&mut self) -> std::result::Result<&'a str, TokenError> {
        let s = self.rest.trim_start();
        if s.is_empty() {
            return Err(TokenError::Empty);
        }
        let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        if end == 0 {
            let found = s.split_whitespace().next().unwrap_or_default();
            return Err(TokenError::NotANumber {
                found: found.to_string(),
            });
        }
        self.rest = &s[end..];
        Ok(&s[..end])
    }

    fn unsigned(&mut self) -> std::result::Result<u64, TokenError> {
        self.digits()?
            .parse::<u64>()
            .map_err(|_| TokenError::Overflow)
    }

    fn signed(&mut self) -> std::result::Result<i64, TokenError> {
        self.rest = self.rest.trim_start();
        let negative = if let Some(rest) = self.rest.strip_prefix('-') {
            self.rest = rest;
            true
        } else {
            if let Some(rest) = self.rest.strip_prefix('+') {
                self.rest = rest;
            }
            false
        };
        // Whitespace between the sign and the digits is not a number.
        if self.rest.starts_with(char::is_whitespace) {
            return Err(TokenError::NotANumber {
                found: if negative { "-" } else { "+" }.to_string(),
            });
        }
        let digits = self.digits()?;
        let magnitude = digits.parse::<i64>();
        match (magnitude, negative) {
            (Ok(v), false) => Ok(v),
            (Ok(v), true) => Ok(-v),
            // `i64::MIN` has no positive counterpart.
            (Err(_), true) if digits.trim_start_matches('0') == "9223372036854775808" => {
                Ok(i64::MIN)
            }
            (Err(_), _) => Err(TokenError::Overflow),
        }
    }

    fn separator(&mut self, sep: char) -> std::result::Result<(), TokenError> {
        match self.rest.strip_prefix(sep) {
            Some(rest) => {
                self.rest = rest;
                Ok(())
            }
            None => Err(TokenError::MissingSeparator),
        }
    }
}

pub fn parse_unsigned(text: &str) -> std::result::Result<u64, TokenError> {
    Cursor::new(text).unsigned()
}

pub fn parse_signed(text: &str) -> std::result::Result<i64, TokenError> {
    Cursor::new(text).signed()
}

/// Parses `from:to:length`.
pub fn parse_road_triple(text: &str) -> std::result::Result<(u64, u64, u64), TokenError> {
    let mut cur = Cursor::new(text);
    let from = cur.unsigned()?;
    cur.separator(':')?;
    let to = cur.unsigned()?;
    cur.separator(':')?;
    let length = cur.unsigned()?;
    Ok((from, to, length))
}
