use std::fmt::{Debug, Display, Formatter};

#[derive(Eq, PartialEq, Debug, Hash, Clone, Copy)]
pub enum TokenKind {
    Integer,
    Double,
    String,
    Comma,
    Colon,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    EndOfInput,
    /// A malformed numeric literal, or a byte the lexer has no rule for.
    Undefined,
}

impl TokenKind {
    pub const fn is_number(&self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::Double)
    }

    /// The lexer has nothing more useful to say after one of these.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, TokenKind::EndOfInput | TokenKind::Undefined)
    }

    /// The kind of the single-byte punctuation token `c`, if it is one.
    pub const fn of_punctuation(c: u8) -> Option<TokenKind> {
        match c {
            b',' => Some(TokenKind::Comma),
            b':' => Some(TokenKind::Colon),
            b'(' => Some(TokenKind::LeftParen),
            b')' => Some(TokenKind::RightParen),
            b'[' => Some(TokenKind::LeftBracket),
            b']' => Some(TokenKind::RightBracket),
            b'{' => Some(TokenKind::LeftBrace),
            b'}' => Some(TokenKind::RightBrace),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TokenKind::Integer => "integer",
            TokenKind::Double => "double",
            TokenKind::String => "string",
            TokenKind::Comma => "comma",
            TokenKind::Colon => "colon",
            TokenKind::LeftParen => "left-paren",
            TokenKind::RightParen => "right-paren",
            TokenKind::LeftBracket => "left-bracket",
            TokenKind::RightBracket => "right-bracket",
            TokenKind::LeftBrace => "left-brace",
            TokenKind::RightBrace => "right-brace",
            TokenKind::EndOfInput => "end-of-input",
            TokenKind::Undefined => "undefined",
        })
    }
}

/// A view into the buffer being lexed. The token never owns its text, so it
/// can't outlive the buffer it was cut from.
#[derive(Eq, PartialEq, Clone, Copy)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Byte offset of the first byte of `text` within the source buffer.
    pub offset: usize,
    pub text: &'a [u8],
}

impl<'a> Token<'a> {
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The token's text, if it happens to be valid UTF-8.
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.text).ok()
    }
}

impl<'a> Debug for Token<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{}@{} ({:?})",
            self.kind,
            self.offset,
            String::from_utf8_lossy(self.text)
        ))
    }
}

impl<'a> Display for Token<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{}: {}",
            self.kind,
            String::from_utf8_lossy(self.text)
        ))
    }
}
