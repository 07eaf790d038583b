//! Tokenizer for the node pattern language.

use crate::error::PatternSyntaxError;

/// A pattern token kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum TokenKind {
    LParen,
    RParen,
    LBrace,
    RBrace,
    Bang,
    Ellipsis,
    /// `_`
    Wildcard,
    /// `nil?`
    NilPredicate,
    Ident(String),
    Symbol(String),
    Str(String),
    Int(i64),
    Eof,
}

/// A token with the byte offset it starts at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub offset: usize,
}

/// Splits a pattern into tokens, always ending with [`TokenKind::Eof`].
pub(crate) fn lex(pattern: &str) -> Result<Vec<Token>, PatternSyntaxError> {
    let mut lexer = Lexer {
        pattern,
        source: pattern.as_bytes(),
        pos: 0,
    };
    lexer.lex_all()
}

struct Lexer<'a> {
    pattern: &'a str,
    source: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn lex_all(&mut self) -> Result<Vec<Token>, PatternSyntaxError> {
        let mut tokens = Vec::new();
        loop {
            while self.peek().is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos >= self.source.len() {
                tokens.push(Token {
                    kind: TokenKind::Eof,
                    offset: self.pos,
                });
                return Ok(tokens);
            }
            let offset = self.pos;
            let kind = self.next_token()?;
            tokens.push(Token { kind, offset });
        }
    }

    fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> u8 {
        self.source.get(self.pos + offset).copied().unwrap_or(0)
    }

    fn error(&self, offset: usize, message: impl Into<String>) -> PatternSyntaxError {
        PatternSyntaxError::new(self.pattern, offset, message)
    }

    fn next_token(&mut self) -> Result<TokenKind, PatternSyntaxError> {
        let start = self.pos;
        let kind = match self.peek() {
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'!' => TokenKind::Bang,
            b'.' => {
                if self.peek_at(1) != b'.' || self.peek_at(2) != b'.' {
                    return Err(self.error(start, "expected `...`"));
                }
                self.pos += 3;
                return Ok(TokenKind::Ellipsis);
            }
            b':' => return self.lex_symbol(),
            b'"' => return self.lex_string(),
            b'-' | b'0'..=b'9' => return self.lex_int(),
            b if b == b'_' || b.is_ascii_alphabetic() => return self.lex_word(),
            _ => {
                let c = self.pattern[start..].chars().next().unwrap_or('\0');
                return Err(self.error(start, format!("unexpected character `{c}`")));
            }
        };
        self.pos += 1;
        Ok(kind)
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.pos < self.source.len() && pred(self.source[self.pos]) {
            self.pos += 1;
        }
        &self.pattern[start..self.pos]
    }

    fn lex_symbol(&mut self) -> Result<TokenKind, PatternSyntaxError> {
        let start = self.pos;
        self.pos += 1;
        let name = self.take_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'?' | b'!' | b'='));
        if name.is_empty() {
            return Err(self.error(start, "empty symbol name"));
        }
        Ok(TokenKind::Symbol(name.to_string()))
    }

    fn lex_string(&mut self) -> Result<TokenKind, PatternSyntaxError> {
        let start = self.pos;
        self.pos += 1;
        let pattern = self.pattern;
        let mut value = String::new();
        let mut chars = pattern[self.pos..].char_indices();
        while let Some((offset, c)) = chars.next() {
            match c {
                '"' => {
                    self.pos += offset + 1;
                    return Ok(TokenKind::Str(value));
                }
                '\\' => match chars.next() {
                    Some((_, escaped)) => value.push(escaped),
                    None => break,
                },
                _ => value.push(c),
            }
        }
        Err(self.error(start, "unterminated string"))
    }

    fn lex_int(&mut self) -> Result<TokenKind, PatternSyntaxError> {
        let start = self.pos;
        if self.peek() == b'-' {
            self.pos += 1;
        }
        let digits = self.take_while(|b| b.is_ascii_digit());
        if digits.is_empty() || self.peek().is_ascii_alphabetic() || self.peek() == b'_' {
            return Err(self.error(start, "bad integer literal"));
        }
        self.pattern[start..self.pos]
            .parse()
            .map(TokenKind::Int)
            .map_err(|_| self.error(start, "integer literal out of range"))
    }

    fn lex_word(&mut self) -> Result<TokenKind, PatternSyntaxError> {
        let start = self.pos;
        let word = self.take_while(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'?'));
        match word {
            "_" => Ok(TokenKind::Wildcard),
            "nil?" => Ok(TokenKind::NilPredicate),
            _ if word.contains('?') => {
                Err(self.error(start, format!("unknown predicate `{word}`")))
            }
            _ => Ok(TokenKind::Ident(word.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(pattern: &str) -> Vec<TokenKind> {
        lex(pattern).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lexes_sig_wrapper() {
        assert_eq!(
            kinds("(block (send nil? :sig) (args) ...)"),
            vec![
                TokenKind::LParen,
                TokenKind::Ident("block".into()),
                TokenKind::LParen,
                TokenKind::Ident("send".into()),
                TokenKind::NilPredicate,
                TokenKind::Symbol("sig".into()),
                TokenKind::RParen,
                TokenKind::LParen,
                TokenKind::Ident("args".into()),
                TokenKind::RParen,
                TokenKind::Ellipsis,
                TokenKind::RParen,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lexes_literals() {
        assert_eq!(
            kinds(r#"_ !:private? "a \"b\"" -12 {def defs}"#),
            vec![
                TokenKind::Wildcard,
                TokenKind::Bang,
                TokenKind::Symbol("private?".into()),
                TokenKind::Str("a \"b\"".into()),
                TokenKind::Int(-12),
                TokenKind::LBrace,
                TokenKind::Ident("def".into()),
                TokenKind::Ident("defs".into()),
                TokenKind::RBrace,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn offsets_are_byte_positions() {
        let tokens = lex("(send  :x)").unwrap();
        let offsets: Vec<_> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![0, 1, 7, 9, 10]);
    }

    #[test]
    fn empty_input_is_just_eof() {
        assert_eq!(kinds("   "), vec![TokenKind::Eof]);
    }

    #[test]
    fn unterminated_string() {
        let err = lex(r#"(str "abc)"#).unwrap_err();
        assert_eq!(err.offset, 5);
        assert_eq!(err.message, "unterminated string");
    }

    #[test]
    fn empty_symbol() {
        let err = lex("(send nil? : )").unwrap_err();
        assert_eq!(err.offset, 11);
        assert_eq!(err.message, "empty symbol name");
    }

    #[test]
    fn bad_integers() {
        assert_eq!(lex("-").unwrap_err().message, "bad integer literal");
        assert_eq!(lex("12ab").unwrap_err().message, "bad integer literal");
        assert_eq!(
            lex("99999999999999999999").unwrap_err().message,
            "integer literal out of range"
        );
    }

    #[test]
    fn stray_characters() {
        let err = lex("(send #)").unwrap_err();
        assert_eq!(err.offset, 6);
        assert_eq!(err.message, "unexpected character `#`");
        assert_eq!(lex("(send ..)").unwrap_err().message, "expected `...`");
        assert_eq!(lex("foo?").unwrap_err().message, "unknown predicate `foo?`");
    }
}
