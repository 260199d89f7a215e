//! Trailers: attribute access, calls, subscripts.

use hang_ir::{
    Call, Comprehension, ComprehensionKind, ExprId, ExprKind, Keyword, SourcePosition, Span,
    TokenKind,
};
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// An atom followed by any number of `.name`, `(args)` and `[index]`.
    pub(crate) fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let start = self.start();
        let mut expr = self.parse_atom()?;
        loop {
            expr = match self.cursor.current_kind() {
                TokenKind::Dot => {
                    self.cursor.advance();
                    let (attr, _) = self.cursor.expect_name()?;
                    self.finish(ExprKind::Attribute { value: expr, attr }, start)
                }
                TokenKind::LParen => {
                    let open = self.cursor.advance().span.start;
                    let (args, keywords) = self.parse_arguments(open)?;
                    let call = self.finish(
                        ExprKind::Call(Call {
                            func: expr,
                            args,
                            keywords,
                        }),
                        start,
                    );
                    trace!(span = ?self.expr_span(call), "call");
                    call
                }
                TokenKind::LBracket => {
                    self.cursor.advance();
                    let slice = self.parse_slices()?;
                    self.cursor.expect(TokenKind::RBracket)?;
                    self.finish(ExprKind::Subscript { value: expr, slice }, start)
                }
                _ => return Ok(expr),
            };
        }
    }

    /// Arguments after a consumed `(` at `open`, through the closing `)`.
    ///
    /// Returns positional arguments (including `*iterable`) and keyword
    /// arguments (including `**mapping`) separately. A generator expression
    /// as the sole argument spans the call's parentheses.
    pub(crate) fn parse_arguments(
        &mut self,
        open: SourcePosition,
    ) -> Result<(Vec<ExprId>, Vec<Keyword>), ParseError> {
        let mut args = Vec::new();
        let mut keywords = Vec::new();
        while !self.cursor.check(TokenKind::RParen) {
            let start = self.start();
            match self.cursor.current_kind() {
                TokenKind::Star => {
                    self.cursor.advance();
                    let value = self.parse_test()?;
                    args.push(self.finish(ExprKind::Starred(value), start));
                }
                TokenKind::DoubleStar => {
                    self.cursor.advance();
                    let value = self.parse_test()?;
                    keywords.push(Keyword {
                        name: None,
                        value,
                        span: self.span_from(start),
                    });
                }
                TokenKind::Name if self.cursor.peek_kind_at(1) == TokenKind::Eq => {
                    let (name, _) = self.cursor.expect_name()?;
                    self.cursor.advance();
                    let value = self.parse_test()?;
                    keywords.push(Keyword {
                        name: Some(name),
                        value,
                        span: self.span_from(start),
                    });
                }
                _ => {
                    let element = self.parse_named_expr()?;
                    if self.at_comprehension_clause() {
                        let generators = self.parse_comprehension_clauses()?;
                        self.cursor.expect(TokenKind::RParen)?;
                        let generator = self.alloc(
                            ExprKind::Comprehension(Comprehension {
                                kind: ComprehensionKind::Generator,
                                element,
                                value: None,
                                generators,
                            }),
                            Span::new(open, self.cursor.previous_span().end),
                        );
                        args.push(generator);
                        return Ok((args, keywords));
                    }
                    args.push(element);
                }
            }
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(TokenKind::RParen)?;
        Ok((args, keywords))
    }

    /// Subscript contents: one slice or index, or a tuple of them.
    fn parse_slices(&mut self) -> Result<ExprId, ParseError> {
        let start = self.start();
        let first = self.parse_slice()?;
        if !self.cursor.check(TokenKind::Comma) {
            return Ok(first);
        }
        let mut elts = vec![first];
        while self.cursor.eat(TokenKind::Comma) {
            if self.cursor.check(TokenKind::RBracket) {
                break;
            }
            elts.push(self.parse_slice()?);
        }
        Ok(self.finish(ExprKind::Tuple(elts), start))
    }

    /// `[lower]:[upper][:[step]]`, or a plain index.
    fn parse_slice(&mut self) -> Result<ExprId, ParseError> {
        let start = self.start();
        let lower = if self.cursor.check(TokenKind::Colon) {
            None
        } else {
            let index = self.parse_star_named_expr()?;
            if !self.cursor.check(TokenKind::Colon) {
                return Ok(index);
            }
            Some(index)
        };
        self.cursor.expect(TokenKind::Colon)?;
        let upper = self.parse_slice_bound()?;
        let step = if self.cursor.eat(TokenKind::Colon) {
            self.parse_slice_bound()?
        } else {
            None
        };
        Ok(self.finish(ExprKind::Slice { lower, upper, step }, start))
    }

    fn parse_slice_bound(&mut self) -> Result<Option<ExprId>, ParseError> {
        if matches!(
            self.cursor.current_kind(),
            TokenKind::Colon | TokenKind::Comma | TokenKind::RBracket
        ) {
            Ok(None)
        } else {
            self.parse_test().map(Some)
        }
    }
}
