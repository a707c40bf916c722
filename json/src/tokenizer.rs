use crate::token::{Token, TokenKind};

/// The whitespace set accepted between tokens. Wider than JSON's: vertical tab
/// and form feed are skipped too.
const fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | 0x0b | 0x0c | b'\n' | b'\r')
}

/// Splits a byte buffer into tokens, one call at a time.
///
/// The buffer ends either at its last byte or at the first NUL byte, whichever
/// comes first. Lexical problems never produce an `Err`: a malformed literal
/// or an unknown byte comes back as a [`TokenKind::Undefined`] token, and the
/// end of the buffer comes back as a [`TokenKind::EndOfInput`] token.
pub struct Tokenizer<'a> {
    source: &'a [u8],
    at: usize,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a [u8]) -> Tokenizer<'a> {
        Tokenizer {
            source,
            at: 0,
            finished: false,
        }
    }

    /// Current cursor position. Never decreases.
    pub fn position(&self) -> usize {
        self.at
    }

    pub fn source(&self) -> &'a [u8] {
        self.source
    }

    /// The byte under the cursor, or None if the cursor sits on the end
    /// sentinel (past the buffer, or on a NUL).
    fn current(&self) -> Option<u8> {
        match self.source.get(self.at) {
            None | Some(0) => None,
            Some(&c) => Some(c),
        }
    }

    fn token(&self, kind: TokenKind, start: usize, end: usize) -> Token<'a> {
        Token {
            kind,
            offset: start,
            text: &self.source[start..end],
        }
    }

    /// The end-of-input token, sitting on the sentinel. The cursor is left
    /// where it is, so asking again gives the same token.
    fn end_of_input(&self) -> Token<'a> {
        // A NUL sentinel is a real byte and belongs to the token; running off
        // the end of the buffer leaves nothing to point at.
        let end = usize::min(self.at + 1, self.source.len());
        self.token(TokenKind::EndOfInput, self.at, end)
    }

    /// Scans a run of digits, '-' and '.', leaving the cursor on the first byte
    /// after the run. A problem with the literal doesn't stop the scan: the run
    /// is always consumed whole, and only then classified.
    fn number(&mut self) -> Token<'a> {
        let start = self.at;
        let mut seen_minus = false;
        let mut seen_dot = false;
        let mut seen_digit = false;
        let mut invalid = false;

        while let Some(c) = self.current() {
            match c {
                b'0'..=b'9' => seen_digit = true,
                b'-' => {
                    if seen_minus {
                        invalid = true;
                    }
                    seen_minus = true;
                }
                b'.' => {
                    // A second dot, or a dot before any digit ("-.5").
                    if seen_dot || !seen_digit {
                        invalid = true;
                    }
                    seen_dot = true;
                }
                _ => break,
            }
            self.at += 1;
        }

        let kind = if invalid {
            TokenKind::Undefined
        } else if seen_dot {
            TokenKind::Double
        } else {
            TokenKind::Integer
        };
        self.token(kind, start, self.at)
    }

    /// Expects the cursor on the opening '"'. In the good case, leaves the
    /// cursor just past the closing '"'; the token text excludes both quotes.
    /// No escape handling: a backslash is just another byte.
    fn string(&mut self) -> Token<'a> {
        self.at += 1;
        let start = self.at;
        loop {
            match self.current() {
                None => return self.token(TokenKind::EndOfInput, start, self.at),
                Some(b'"') => {
                    let token = self.token(TokenKind::String, start, self.at);
                    self.at += 1;
                    return token;
                }
                Some(_) => self.at += 1,
            }
        }
    }

    pub fn next_token(&mut self) -> Token<'a> {
        while let Some(c) = self.current() {
            if !is_whitespace(c) {
                break;
            }
            self.at += 1;
        }

        let c = match self.current() {
            None => return self.end_of_input(),
            Some(c) => c,
        };

        if c == b'-' || c.is_ascii_digit() {
            return self.number();
        }

        if c == b'"' {
            return self.string();
        }

        let start = self.at;
        self.at += 1;
        match TokenKind::of_punctuation(c) {
            Some(kind) => self.token(kind, start, self.at),
            None => self.token(TokenKind::Undefined, start, start),
        }
    }
}

/// Yields every token up to and including the first terminal one
/// (`EndOfInput` or `Undefined`), then stops.
impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind.is_terminal() {
            self.finished = true;
        }
        Some(token)
    }
}
