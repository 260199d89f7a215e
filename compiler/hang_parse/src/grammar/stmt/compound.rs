//! Compound statements: control flow, `with`, `try`, definitions.

use hang_ir::{
    ClassDef, ExceptHandler, ExprId, FunctionDef, Span, StmtId, StmtKind, TokenKind, WithItem,
};
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `if` or `elif` through the end of its chain.
    ///
    /// An `elif` becomes a nested `If` that is the sole `orelse` statement.
    pub(super) fn parse_if(&mut self) -> Result<StmtId, ParseError> {
        let start = self.start();
        self.cursor.advance();
        let test = self.parse_named_expr()?;
        let body = self.parse_block()?;
        let orelse = match self.cursor.current_kind() {
            TokenKind::Elif => vec![self.parse_if()?],
            TokenKind::Else => {
                self.cursor.advance();
                self.parse_block()?
            }
            _ => Vec::new(),
        };
        let span = self.block_span(start, if orelse.is_empty() { &body } else { &orelse });
        Ok(self.finish_stmt(StmtKind::If { test, body, orelse }, span))
    }

    pub(super) fn parse_while(&mut self) -> Result<StmtId, ParseError> {
        let start = self.start();
        self.cursor.advance();
        let test = self.parse_named_expr()?;
        let body = self.parse_block()?;
        let orelse = self.parse_else_block()?;
        let span = self.block_span(start, if orelse.is_empty() { &body } else { &orelse });
        Ok(self.finish_stmt(StmtKind::While { test, body, orelse }, span))
    }

    /// `[async] for targets in values: body [else: body]`
    pub(super) fn parse_for(&mut self) -> Result<StmtId, ParseError> {
        let start = self.start();
        let is_async = self.cursor.eat(TokenKind::Async);
        self.cursor.expect(TokenKind::For)?;
        let target = self.parse_target_list()?;
        self.cursor.expect(TokenKind::In)?;
        let iter = self.parse_star_expressions()?;
        let body = self.parse_block()?;
        let orelse = self.parse_else_block()?;
        let span = self.block_span(start, if orelse.is_empty() { &body } else { &orelse });
        Ok(self.finish_stmt(
            StmtKind::For {
                is_async,
                target,
                iter,
                body,
                orelse,
            },
            span,
        ))
    }

    /// `[async] with item, ...: body`, items optionally parenthesized.
    pub(super) fn parse_with(&mut self) -> Result<StmtId, ParseError> {
        let start = self.start();
        let is_async = self.cursor.eat(TokenKind::Async);
        self.cursor.expect(TokenKind::With)?;

        let mut items = Vec::new();
        // `with (a as b, c):` but not `with (a) as b:`
        if self.cursor.check(TokenKind::LParen)
            && self.cursor.bracket_group_followed_by(TokenKind::Colon)
        {
            self.cursor.advance();
            while !self.cursor.check(TokenKind::RParen) {
                items.push(self.parse_with_item()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.cursor.expect(TokenKind::RParen)?;
        } else {
            items.push(self.parse_with_item()?);
            while self.cursor.eat(TokenKind::Comma) {
                items.push(self.parse_with_item()?);
            }
        }
        if items.is_empty() {
            return Err(self.cursor.unexpected("expression"));
        }

        let body = self.parse_block()?;
        let span = self.block_span(start, &body);
        Ok(self.finish_stmt(
            StmtKind::With {
                is_async,
                items,
                body,
            },
            span,
        ))
    }

    fn parse_with_item(&mut self) -> Result<WithItem, ParseError> {
        let context = self.parse_test()?;
        let target = if self.cursor.eat(TokenKind::As) {
            Some(self.parse_star_target()?)
        } else {
            None
        };
        Ok(WithItem { context, target })
    }

    pub(super) fn parse_try(&mut self) -> Result<StmtId, ParseError> {
        let start = self.start();
        self.cursor.advance();
        let body = self.parse_block()?;

        let mut handlers = Vec::new();
        while self.cursor.check(TokenKind::Except) {
            let handler_start = self.start();
            self.cursor.advance();
            // `except*` handles exception groups; the star changes nothing here.
            self.cursor.eat(TokenKind::Star);
            let kind = if self.cursor.check(TokenKind::Colon) {
                None
            } else {
                Some(self.parse_test()?)
            };
            let name = if self.cursor.eat(TokenKind::As) {
                Some(self.cursor.expect_name()?.0)
            } else {
                None
            };
            let handler_body = self.parse_block()?;
            handlers.push(ExceptHandler {
                kind,
                name,
                span: self.block_span(handler_start, &handler_body),
                body: handler_body,
            });
        }

        let orelse = self.parse_else_block()?;
        let finalbody = if self.cursor.eat(TokenKind::Finally) {
            self.parse_block()?
        } else {
            Vec::new()
        };
        if handlers.is_empty() && finalbody.is_empty() {
            return Err(self.cursor.unexpected("`except` or `finally`"));
        }

        let end = if !finalbody.is_empty() {
            self.body_end(&finalbody)
        } else if !orelse.is_empty() {
            self.body_end(&orelse)
        } else {
            handlers
                .last()
                .map_or_else(|| self.body_end(&body), |h| h.span.end)
        };
        Ok(self.finish_stmt(
            StmtKind::Try {
                body,
                handlers,
                orelse,
                finalbody,
            },
            Span::new(start, end),
        ))
    }

    fn parse_else_block(&mut self) -> Result<Vec<StmtId>, ParseError> {
        if self.cursor.eat(TokenKind::Else) {
            self.parse_block()
        } else {
            Ok(Vec::new())
        }
    }

    /// Decorator lines followed by the `def` or `class` they decorate.
    pub(super) fn parse_decorated(&mut self) -> Result<StmtId, ParseError> {
        let mut decorators = Vec::new();
        while self.cursor.eat(TokenKind::At) {
            decorators.push(self.parse_named_expr()?);
            self.cursor.expect(TokenKind::Newline)?;
        }
        match self.cursor.current_kind() {
            TokenKind::Def => self.parse_function_def(decorators),
            TokenKind::Async if self.cursor.peek_kind_at(1) == TokenKind::Def => {
                self.parse_function_def(decorators)
            }
            TokenKind::Class => self.parse_class_def(decorators),
            _ => Err(self.cursor.unexpected("`def` or `class`")),
        }
    }

    /// `[async] def name(params) [-> returns]: body`
    ///
    /// The statement starts at `def` or `async`, after any decorators.
    pub(super) fn parse_function_def(
        &mut self,
        decorators: Vec<ExprId>,
    ) -> Result<StmtId, ParseError> {
        let start = self.start();
        let is_async = self.cursor.eat(TokenKind::Async);
        self.cursor.expect(TokenKind::Def)?;
        let (name, _) = self.cursor.expect_name()?;
        self.cursor.expect(TokenKind::LParen)?;
        let params = self.parse_params(TokenKind::RParen, true)?;
        self.cursor.expect(TokenKind::RParen)?;
        let returns = if self.cursor.eat(TokenKind::Arrow) {
            Some(self.parse_test()?)
        } else {
            None
        };
        let body = self.parse_block()?;
        trace!(%name, params = params.len(), "function definition");

        let span = self.block_span(start, &body);
        Ok(self.finish_stmt(
            StmtKind::FunctionDef(FunctionDef {
                name,
                is_async,
                decorators,
                params,
                returns,
                body,
            }),
            span,
        ))
    }

    /// `class name[(bases, keywords)]: body`
    pub(super) fn parse_class_def(
        &mut self,
        decorators: Vec<ExprId>,
    ) -> Result<StmtId, ParseError> {
        let start = self.start();
        self.cursor.expect(TokenKind::Class)?;
        let (name, _) = self.cursor.expect_name()?;
        let (bases, keywords) = if self.cursor.check(TokenKind::LParen) {
            let open = self.cursor.advance().span.start;
            self.parse_arguments(open)?
        } else {
            (Vec::new(), Vec::new())
        };
        let body = self.parse_block()?;
        let span = self.block_span(start, &body);
        Ok(self.finish_stmt(
            StmtKind::ClassDef(ClassDef {
                name,
                decorators,
                bases,
                keywords,
                body,
            }),
            span,
        ))
    }
}
