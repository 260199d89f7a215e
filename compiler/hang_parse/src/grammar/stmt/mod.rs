//! Statement parsing: module body, blocks and simple statements.

mod compound;

use hang_ir::{
    with_stack_room, Alias, BinaryOp, ExprId, SourcePosition, Span, StmtId, StmtKind, TokenKind,
};
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_module(&mut self) -> Result<Vec<StmtId>, ParseError> {
        let mut body = Vec::new();
        while !self.cursor.is_at_end() {
            self.parse_statement(&mut body)?;
        }
        Ok(body)
    }

    /// Parse one compound statement, or one line of simple statements.
    pub(crate) fn parse_statement(&mut self, out: &mut Vec<StmtId>) -> Result<(), ParseError> {
        with_stack_room(|| {
            let stmt = match self.cursor.current_kind() {
                TokenKind::If => self.parse_if()?,
                TokenKind::While => self.parse_while()?,
                TokenKind::For => self.parse_for()?,
                TokenKind::With => self.parse_with()?,
                TokenKind::Try => self.parse_try()?,
                TokenKind::Def => self.parse_function_def(Vec::new())?,
                TokenKind::Class => self.parse_class_def(Vec::new())?,
                TokenKind::At => self.parse_decorated()?,
                TokenKind::Async => match self.cursor.peek_kind_at(1) {
                    TokenKind::Def => self.parse_function_def(Vec::new())?,
                    TokenKind::For => self.parse_for()?,
                    TokenKind::With => self.parse_with()?,
                    _ => return Err(self.cursor.unexpected("statement")),
                },
                _ => return self.parse_simple_statements(out),
            };
            out.push(stmt);
            Ok(())
        })
    }

    /// Body after a compound statement's header, including the `:`.
    pub(crate) fn parse_block(&mut self) -> Result<Vec<StmtId>, ParseError> {
        self.cursor.expect(TokenKind::Colon)?;
        let mut body = Vec::new();
        if self.cursor.eat(TokenKind::Newline) {
            self.cursor.expect(TokenKind::Indent)?;
            while !self.cursor.eat(TokenKind::Dedent) {
                self.parse_statement(&mut body)?;
            }
        } else {
            self.parse_simple_statements(&mut body)?;
        }
        Ok(body)
    }

    /// End of the last statement in `body`, or of the last consumed token.
    pub(crate) fn body_end(&self, body: &[StmtId]) -> SourcePosition {
        body.last().map_or(self.cursor.previous_span().end, |&id| {
            self.arena.stmt(id).span.end
        })
    }

    /// `stmt (';' stmt)* [';'] NEWLINE`
    fn parse_simple_statements(&mut self, out: &mut Vec<StmtId>) -> Result<(), ParseError> {
        loop {
            out.push(self.parse_simple_statement()?);
            if !self.cursor.eat(TokenKind::Semi) || self.at_statement_end() {
                break;
            }
        }
        if self.cursor.is_at_end() {
            return Ok(());
        }
        self.cursor.expect(TokenKind::Newline)?;
        Ok(())
    }

    fn at_statement_end(&self) -> bool {
        matches!(
            self.cursor.current_kind(),
            TokenKind::Newline | TokenKind::Semi | TokenKind::EndMarker
        )
    }

    fn parse_simple_statement(&mut self) -> Result<StmtId, ParseError> {
        let start = self.start();
        let kind = match self.cursor.current_kind() {
            TokenKind::Pass => {
                self.cursor.advance();
                StmtKind::Pass
            }
            TokenKind::Break => {
                self.cursor.advance();
                StmtKind::Break
            }
            TokenKind::Continue => {
                self.cursor.advance();
                StmtKind::Continue
            }
            TokenKind::Return => {
                self.cursor.advance();
                let value = if self.at_statement_end() {
                    None
                } else {
                    Some(self.parse_star_expressions()?)
                };
                StmtKind::Return(value)
            }
            TokenKind::Del => {
                self.cursor.advance();
                StmtKind::Delete(self.parse_star_target_items()?)
            }
            TokenKind::Global => {
                self.cursor.advance();
                StmtKind::Global(self.parse_name_list()?)
            }
            TokenKind::Nonlocal => {
                self.cursor.advance();
                StmtKind::Nonlocal(self.parse_name_list()?)
            }
            TokenKind::Raise => {
                self.cursor.advance();
                let exc = if self.at_statement_end() {
                    None
                } else {
                    Some(self.parse_test()?)
                };
                let cause = if exc.is_some() && self.cursor.eat(TokenKind::From) {
                    Some(self.parse_test()?)
                } else {
                    None
                };
                StmtKind::Raise { exc, cause }
            }
            TokenKind::Assert => {
                self.cursor.advance();
                let test = self.parse_test()?;
                let msg = if self.cursor.eat(TokenKind::Comma) {
                    Some(self.parse_test()?)
                } else {
                    None
                };
                StmtKind::Assert { test, msg }
            }
            TokenKind::Import => {
                self.cursor.advance();
                let mut names = vec![self.parse_alias(true)?];
                while self.cursor.eat(TokenKind::Comma) {
                    names.push(self.parse_alias(true)?);
                }
                StmtKind::Import(names)
            }
            TokenKind::From => self.parse_import_from()?,
            _ => return self.parse_expression_statement(),
        };
        Ok(self.finish_stmt(kind, self.span_from(start)))
    }

    /// Expression statement or one of the three assignment forms.
    fn parse_expression_statement(&mut self) -> Result<StmtId, ParseError> {
        let start = self.start();
        let first = self.parse_assigned_value()?;
        let kind = match self.cursor.current_kind() {
            TokenKind::Colon => {
                self.cursor.advance();
                let annotation = self.parse_test()?;
                let value = if self.cursor.eat(TokenKind::Eq) {
                    Some(self.parse_assigned_value()?)
                } else {
                    None
                };
                StmtKind::AnnAssign {
                    target: first,
                    annotation,
                    value,
                }
            }
            TokenKind::Eq => {
                let mut targets = vec![first];
                while self.cursor.eat(TokenKind::Eq) {
                    targets.push(self.parse_assigned_value()?);
                }
                // At least two entries: the loop ran once.
                let value = targets.pop().unwrap_or(first);
                StmtKind::Assign { targets, value }
            }
            kind => match BinaryOp::from_augmented(kind) {
                Some(op) => {
                    self.cursor.advance();
                    let value = self.parse_assigned_value()?;
                    StmtKind::AugAssign {
                        target: first,
                        op,
                        value,
                    }
                }
                None => StmtKind::Expr(first),
            },
        };
        let span = self.span_from(start);
        trace!(start = %span.start, end = %span.end, "simple statement");
        Ok(self.finish_stmt(kind, span))
    }

    /// Right-hand side of an assignment: a yield expression or an
    /// expression list.
    fn parse_assigned_value(&mut self) -> Result<ExprId, ParseError> {
        if self.cursor.check(TokenKind::Yield) {
            self.parse_yield()
        } else {
            self.parse_star_expressions()
        }
    }

    fn parse_name_list(&mut self) -> Result<Vec<Box<str>>, ParseError> {
        let mut names = vec![self.cursor.expect_name()?.0];
        while self.cursor.eat(TokenKind::Comma) {
            names.push(self.cursor.expect_name()?.0);
        }
        Ok(names)
    }

    /// `name [as name]`; `name` may be dotted when `dotted` is set.
    fn parse_alias(&mut self, dotted: bool) -> Result<Alias, ParseError> {
        let start = self.start();
        let name = if dotted {
            self.parse_dotted_name()?
        } else {
            self.cursor.expect_name()?.0
        };
        let asname = if self.cursor.eat(TokenKind::As) {
            Some(self.cursor.expect_name()?.0)
        } else {
            None
        };
        Ok(Alias {
            name,
            asname,
            span: self.span_from(start),
        })
    }

    fn parse_dotted_name(&mut self) -> Result<Box<str>, ParseError> {
        let mut name = String::from(self.cursor.expect_name()?.0);
        while self.cursor.eat(TokenKind::Dot) {
            name.push('.');
            name.push_str(&self.cursor.expect_name()?.0);
        }
        Ok(name.into())
    }

    /// `from [.]* [module] import (* | names | '(' names ')')`
    fn parse_import_from(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let mut level = 0;
        loop {
            match self.cursor.current_kind() {
                TokenKind::Dot => level += 1,
                TokenKind::Ellipsis => level += 3,
                _ => break,
            }
            self.cursor.advance();
        }
        let module = if self.cursor.check(TokenKind::Name) || level == 0 {
            Some(self.parse_dotted_name()?)
        } else {
            None
        };
        self.cursor.expect(TokenKind::Import)?;

        let mut names = Vec::new();
        if self.cursor.check(TokenKind::Star) {
            let span = self.cursor.advance().span;
            names.push(Alias {
                name: "*".into(),
                asname: None,
                span,
            });
        } else if self.cursor.eat(TokenKind::LParen) {
            while !self.cursor.check(TokenKind::RParen) {
                names.push(self.parse_alias(false)?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
            self.cursor.expect(TokenKind::RParen)?;
        } else {
            names.push(self.parse_alias(false)?);
            while self.cursor.eat(TokenKind::Comma) {
                names.push(self.parse_alias(false)?);
            }
        }
        if names.is_empty() {
            return Err(self.cursor.unexpected("identifier"));
        }
        Ok(StmtKind::ImportFrom {
            module,
            level,
            names,
        })
    }

    /// Span from `start` to the end of the last statement of `body`.
    pub(crate) fn block_span(&self, start: SourcePosition, body: &[StmtId]) -> Span {
        Span::new(start, self.body_end(body))
    }
}
