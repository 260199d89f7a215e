//! Token cursor for navigating the token stream.
//!
//! The cursor sees only grammar-relevant tokens: comments and non-logical
//! line breaks are filtered out up front. The last visible token is always
//! an `EndMarker`; one is synthesized if the stream lacks it.

use hang_ir::{SourcePosition, Span, Token, TokenKind, TokenList};
use tracing::trace;

use crate::ParseError;

pub(crate) struct Cursor<'a> {
    tokens: Vec<&'a Token>,
    /// Stand-in returned at and past the end of a stream with no `EndMarker`.
    eof: Token,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a TokenList) -> Self {
        let visible: Vec<&Token> = tokens.iter().filter(|t| !t.kind.is_trivia()).collect();
        let end = tokens
            .last()
            .map_or(SourcePosition::new(1, 0), |t| t.span.end);
        Cursor {
            tokens: visible,
            eof: Token::new(TokenKind::EndMarker, "", Span::new(end, end)),
            pos: 0,
        }
    }

    #[inline]
    pub(crate) fn current(&self) -> &Token {
        self.token_at(self.pos)
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the last consumed token; the current span before any.
    pub(crate) fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1) {
            Some(prev) => self.token_at(prev).span,
            None => self.current_span(),
        }
    }

    /// Kind `n` tokens ahead; `peek_kind_at(0)` is the current token.
    #[inline]
    pub(crate) fn peek_kind_at(&self, n: usize) -> TokenKind {
        self.token_at(self.pos + n).kind
    }

    #[inline]
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::EndMarker)
    }

    /// Consume the current token. Never moves past the end marker.
    pub(crate) fn advance(&mut self) -> &Token {
        let current = self.pos;
        if current < self.tokens.len() && !self.is_at_end() {
            self.pos += 1;
        }
        let token = self.token_at(current);
        trace!(
            pos = current,
            kind = token.kind.display_name(),
            start = %token.span.start,
            "advance"
        );
        token
    }

    /// Consume the current token if it is `kind`.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind` or fail naming it.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.unexpected(kind.display_name()))
        }
    }

    /// Consume an identifier, returning its text and span.
    pub(crate) fn expect_name(&mut self) -> Result<(Box<str>, Span), ParseError> {
        if self.check(TokenKind::Name) {
            let token = self.advance();
            Ok((token.text.clone(), token.span))
        } else {
            Err(self.unexpected("identifier"))
        }
    }

    /// Error for the current token.
    pub(crate) fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::unexpected(expected, self.current())
    }

    /// Whether the bracket at the cursor closes right before a `follow` token.
    ///
    /// Scans forward through nested brackets of any family; returns `false`
    /// if the cursor is not on an open bracket or the brackets never balance.
    pub(crate) fn bracket_group_followed_by(&self, follow: TokenKind) -> bool {
        if !self.current_kind().is_open_bracket() {
            return false;
        }
        let mut depth = 0usize;
        for (offset, token) in self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .enumerate()
        {
            if token.kind.is_open_bracket() {
                depth += 1;
            } else if token.kind.is_close_bracket() {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return self.peek_kind_at(offset + 1) == follow;
                }
            } else if token.kind == TokenKind::EndMarker {
                return false;
            }
        }
        false
    }

    fn token_at(&self, index: usize) -> &Token {
        self.tokens.get(index).copied().unwrap_or(&self.eof)
    }
}
