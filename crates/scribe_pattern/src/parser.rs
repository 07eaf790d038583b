//! Recursive descent parser turning pattern tokens into a [`Pattern`].

use crate::ast::Pattern;
use crate::error::PatternSyntaxError;
use crate::lexer::{Token, TokenKind};
use scribe_syntax::NodeKind;

/// Parses a complete pattern; the whole token stream must be consumed.
pub(crate) fn parse(pattern: &str, tokens: Vec<Token>) -> Result<Pattern, PatternSyntaxError> {
    let mut parser = PatternParser {
        pattern,
        tokens,
        pos: 0,
    };
    let root = parser.parse_pattern()?;
    if !parser.at(&TokenKind::Eof) {
        return Err(parser.error("trailing input after pattern"));
    }
    Ok(root)
}

struct PatternParser<'src> {
    pattern: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'src> PatternParser<'src> {
    fn current(&self) -> &TokenKind {
        &self.tokens[self.pos].kind
    }

    fn at(&self, kind: &TokenKind) -> bool {
        self.current() == kind
    }

    fn advance(&mut self) -> TokenKind {
        let kind = self.tokens[self.pos].kind.clone();
        if kind != TokenKind::Eof {
            self.pos += 1;
        }
        kind
    }

    fn error(&self, message: impl Into<String>) -> PatternSyntaxError {
        PatternSyntaxError::new(self.pattern, self.tokens[self.pos].offset, message)
    }

    fn parse_pattern(&mut self) -> Result<Pattern, PatternSyntaxError> {
        match self.current() {
            TokenKind::LParen => self.parse_node(),
            TokenKind::LBrace => self.parse_union(),
            TokenKind::Bang => {
                self.advance();
                Ok(Pattern::Not(Box::new(self.parse_pattern()?)))
            }
            TokenKind::RParen => Err(self.error("unbalanced `)`")),
            TokenKind::RBrace => Err(self.error("unbalanced `}`")),
            TokenKind::Ellipsis => {
                Err(self.error("`...` is only allowed as the last element of a node pattern"))
            }
            TokenKind::Ident(name) => Err(self.error(format!(
                "unexpected identifier `{name}`; node kinds only appear at the head of a node pattern"
            ))),
            TokenKind::Eof => Err(self.error("unexpected end of pattern")),
            _ => Ok(match self.advance() {
                TokenKind::Wildcard => Pattern::Any,
                TokenKind::NilPredicate => Pattern::Nil,
                TokenKind::Symbol(name) => Pattern::Sym(name),
                TokenKind::Str(value) => Pattern::Str(value),
                TokenKind::Int(value) => Pattern::Int(value),
                other => unreachable!("token {other:?} handled above"),
            }),
        }
    }

    /// `'(' head pattern* ['...'] ')'`
    fn parse_node(&mut self) -> Result<Pattern, PatternSyntaxError> {
        let open = self.tokens[self.pos].offset;
        self.advance();
        let kinds = self.parse_head()?;

        let mut children = Vec::new();
        let mut rest = false;
        loop {
            match self.current() {
                TokenKind::RParen => break,
                TokenKind::Eof => {
                    return Err(PatternSyntaxError::new(self.pattern, open, "unbalanced `(`"));
                }
                TokenKind::Ellipsis => {
                    self.advance();
                    if !self.at(&TokenKind::RParen) {
                        return Err(self.error(
                            "`...` is only allowed as the last element of a node pattern",
                        ));
                    }
                    rest = true;
                }
                _ => children.push(self.parse_pattern()?),
            }
        }
        self.advance();
        Ok(Pattern::Node {
            kinds,
            children,
            rest,
        })
    }

    /// `IDENT | '{' IDENT+ '}'`
    fn parse_head(&mut self) -> Result<Vec<NodeKind>, PatternSyntaxError> {
        match self.current() {
            TokenKind::Ident(name) => {
                let kind = NodeKind::from_name(name);
                self.advance();
                Ok(vec![kind])
            }
            TokenKind::LBrace => {
                self.advance();
                let mut kinds = Vec::new();
                while let TokenKind::Ident(name) = self.current() {
                    kinds.push(NodeKind::from_name(name));
                    self.advance();
                }
                if !self.at(&TokenKind::RBrace) {
                    return Err(self.error("expected node kind or `}` in node head"));
                }
                if kinds.is_empty() {
                    return Err(self.error("empty node kind set"));
                }
                self.advance();
                Ok(kinds)
            }
            TokenKind::RParen => Err(self.error("empty node pattern")),
            _ => Err(self.error("node pattern must start with a node kind")),
        }
    }

    /// `'{' pattern+ '}'`
    fn parse_union(&mut self) -> Result<Pattern, PatternSyntaxError> {
        let open = self.tokens[self.pos].offset;
        self.advance();
        let mut alternatives = Vec::new();
        loop {
            match self.current() {
                TokenKind::RBrace => break,
                TokenKind::Eof => {
                    return Err(PatternSyntaxError::new(self.pattern, open, "unbalanced `{`"));
                }
                _ => alternatives.push(self.parse_pattern()?),
            }
        }
        if alternatives.is_empty() {
            return Err(self.error("empty union"));
        }
        self.advance();
        Ok(Pattern::Union(alternatives))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn parse_str(pattern: &str) -> Result<Pattern, PatternSyntaxError> {
        parse(pattern, lex(pattern)?)
    }

    fn error_at(pattern: &str) -> (usize, String) {
        let err = parse_str(pattern).unwrap_err();
        (err.offset, err.message)
    }

    #[test]
    fn parses_wrapper_pattern() {
        let pattern = parse_str("(block (send nil? :sig) (args) ...)").unwrap();
        assert_eq!(
            pattern,
            Pattern::Node {
                kinds: vec![NodeKind::Block],
                children: vec![
                    Pattern::Node {
                        kinds: vec![NodeKind::Send],
                        children: vec![Pattern::Nil, Pattern::Sym("sig".into())],
                        rest: false,
                    },
                    Pattern::Node {
                        kinds: vec![NodeKind::Args],
                        children: vec![],
                        rest: false,
                    },
                ],
                rest: true,
            }
        );
    }

    #[test]
    fn parses_kind_set_union_and_negation() {
        let pattern = parse_str("({def defs} !nil? {:a \"b\" 3} _)").unwrap();
        assert_eq!(
            pattern,
            Pattern::Node {
                kinds: vec![NodeKind::Def, NodeKind::Defs],
                children: vec![
                    Pattern::Not(Box::new(Pattern::Nil)),
                    Pattern::Union(vec![
                        Pattern::Sym("a".into()),
                        Pattern::Str("b".into()),
                        Pattern::Int(3),
                    ]),
                    Pattern::Any,
                ],
                rest: false,
            }
        );
    }

    #[test]
    fn unknown_kinds_are_kept_verbatim() {
        let pattern = parse_str("(lvasgn _ _)").unwrap();
        assert!(matches!(
            pattern,
            Pattern::Node { ref kinds, .. } if kinds == &[NodeKind::Other("lvasgn".into())]
        ));
    }

    #[test]
    fn ellipsis_must_be_last() {
        assert_eq!(
            error_at("(send ... :foo)"),
            (10, "`...` is only allowed as the last element of a node pattern".into())
        );
        assert_eq!(
            error_at("{... _}"),
            (1, "`...` is only allowed as the last element of a node pattern".into())
        );
    }

    #[test]
    fn unbalanced_delimiters() {
        assert_eq!(error_at("(send nil? (args)"), (0, "unbalanced `(`".into()));
        assert_eq!(error_at("{:a :b"), (0, "unbalanced `{`".into()));
        assert_eq!(error_at(")"), (0, "unbalanced `)`".into()));
        assert_eq!(error_at("(send))"), (6, "trailing input after pattern".into()));
    }

    #[test]
    fn empty_forms() {
        assert_eq!(error_at("()"), (1, "empty node pattern".into()));
        assert_eq!(error_at("{}"), (1, "empty union".into()));
        assert_eq!(error_at("({} _)"), (2, "empty node kind set".into()));
        assert_eq!(error_at(""), (0, "unexpected end of pattern".into()));
    }

    #[test]
    fn head_is_required() {
        assert_eq!(
            error_at("(:send _)"),
            (1, "node pattern must start with a node kind".into())
        );
        assert_eq!(
            error_at("(send send)").1,
            "unexpected identifier `send`; node kinds only appear at the head of a node pattern"
        );
    }
}
