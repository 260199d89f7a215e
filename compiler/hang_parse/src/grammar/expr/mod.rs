//! Expression parsing.
//!
//! Precedence, loosest first:
//!
//! ```text
//! lambda, if-else  <  or  <  and  <  not  <  comparisons
//!   <  |  <  ^  <  &  <  << >>  <  + -  <  * / // % @
//!   <  unary + - ~  <  **  <  await  <  trailers  <  atoms
//! ```
//!
//! Every composite node starts at the first token its rule consumed, so a
//! parenthesized left operand puts the node's start on the `(`.

mod comprehension;
mod postfix;
mod primary;

use hang_ir::{with_stack_room, BinaryOp, BoolOp, CmpOp, ExprId, ExprKind, TokenKind, UnaryOp};

use super::starts_expression;
use crate::{ParseError, Parser};

/// Binding power of a binary operator token; higher binds tighter.
fn binary_precedence(kind: TokenKind) -> Option<u8> {
    Some(match kind {
        TokenKind::Pipe => 1,
        TokenKind::Caret => 2,
        TokenKind::Amp => 3,
        TokenKind::Shl | TokenKind::Shr => 4,
        TokenKind::Plus | TokenKind::Minus => 5,
        TokenKind::Star
        | TokenKind::Slash
        | TokenKind::DoubleSlash
        | TokenKind::Percent
        | TokenKind::At => 6,
        _ => return None,
    })
}

impl Parser<'_> {
    /// Comma-separated expressions; more than one (or a trailing comma)
    /// makes an unparenthesized tuple.
    pub(crate) fn parse_star_expressions(&mut self) -> Result<ExprId, ParseError> {
        let start = self.start();
        let first = self.parse_star_named_expr()?;
        if !self.cursor.check(TokenKind::Comma) {
            return Ok(first);
        }
        let mut elts = vec![first];
        while self.cursor.eat(TokenKind::Comma) {
            if !starts_expression(self.cursor.current_kind()) {
                break;
            }
            elts.push(self.parse_star_named_expr()?);
        }
        Ok(self.finish(ExprKind::Tuple(elts), start))
    }

    /// `*expr` or a named expression.
    pub(crate) fn parse_star_named_expr(&mut self) -> Result<ExprId, ParseError> {
        if self.cursor.check(TokenKind::Star) {
            let start = self.start();
            self.cursor.advance();
            let value = self.parse_bitor()?;
            return Ok(self.finish(ExprKind::Starred(value), start));
        }
        self.parse_named_expr()
    }

    /// `name := value` or a plain expression.
    pub(crate) fn parse_named_expr(&mut self) -> Result<ExprId, ParseError> {
        if self.cursor.check(TokenKind::Name) && self.cursor.peek_kind_at(1) == TokenKind::ColonEq
        {
            let start = self.start();
            let (name, span) = self.cursor.expect_name()?;
            let target = self.alloc(ExprKind::Name(name), span);
            self.cursor.advance();
            let value = self.parse_test()?;
            return Ok(self.finish(ExprKind::NamedExpr { target, value }, start));
        }
        self.parse_test()
    }

    /// A single expression: lambda, conditional, or anything tighter.
    pub(crate) fn parse_test(&mut self) -> Result<ExprId, ParseError> {
        with_stack_room(|| {
            if self.cursor.check(TokenKind::Lambda) {
                return self.parse_lambda();
            }
            let start = self.start();
            let body = self.parse_or_test()?;
            if !self.cursor.eat(TokenKind::If) {
                return Ok(body);
            }
            let test = self.parse_or_test()?;
            self.cursor.expect(TokenKind::Else)?;
            let orelse = self.parse_test()?;
            Ok(self.finish(ExprKind::IfExp { test, body, orelse }, start))
        })
    }

    fn parse_lambda(&mut self) -> Result<ExprId, ParseError> {
        let start = self.start();
        self.cursor.advance();
        let params = self.parse_params(TokenKind::Colon, false)?;
        self.cursor.expect(TokenKind::Colon)?;
        let body = self.parse_test()?;
        Ok(self.finish(ExprKind::Lambda { params, body }, start))
    }

    pub(crate) fn parse_or_test(&mut self) -> Result<ExprId, ParseError> {
        let start = self.start();
        let first = self.parse_and_test()?;
        if !self.cursor.check(TokenKind::Or) {
            return Ok(first);
        }
        let mut values = vec![first];
        while self.cursor.eat(TokenKind::Or) {
            values.push(self.parse_and_test()?);
        }
        Ok(self.finish(
            ExprKind::BoolOp {
                op: BoolOp::Or,
                values,
            },
            start,
        ))
    }

    fn parse_and_test(&mut self) -> Result<ExprId, ParseError> {
        let start = self.start();
        let first = self.parse_not_test()?;
        if !self.cursor.check(TokenKind::And) {
            return Ok(first);
        }
        let mut values = vec![first];
        while self.cursor.eat(TokenKind::And) {
            values.push(self.parse_not_test()?);
        }
        Ok(self.finish(
            ExprKind::BoolOp {
                op: BoolOp::And,
                values,
            },
            start,
        ))
    }

    fn parse_not_test(&mut self) -> Result<ExprId, ParseError> {
        if !self.cursor.check(TokenKind::Not) {
            return self.parse_comparison();
        }
        let start = self.start();
        self.cursor.advance();
        let operand = self.parse_not_test()?;
        Ok(self.finish(
            ExprKind::UnaryOp {
                op: UnaryOp::Not,
                operand,
            },
            start,
        ))
    }

    /// `a < b == c` chains, including `not in` and `is not`.
    fn parse_comparison(&mut self) -> Result<ExprId, ParseError> {
        let start = self.start();
        let left = self.parse_bitor()?;
        let mut ops = Vec::new();
        let mut comparators = Vec::new();
        while let Some(op) = self.match_comparison_op() {
            comparators.push(self.parse_bitor()?);
            ops.push(op);
        }
        if ops.is_empty() {
            return Ok(left);
        }
        Ok(self.finish(
            ExprKind::Compare {
                left,
                ops,
                comparators,
            },
            start,
        ))
    }

    /// Consume a comparison operator (one or two tokens) if present.
    fn match_comparison_op(&mut self) -> Option<CmpOp> {
        let op = match self.cursor.current_kind() {
            TokenKind::EqEq => CmpOp::Eq,
            TokenKind::NotEq => CmpOp::NotEq,
            TokenKind::Lt => CmpOp::Lt,
            TokenKind::LtEq => CmpOp::LtEq,
            TokenKind::Gt => CmpOp::Gt,
            TokenKind::GtEq => CmpOp::GtEq,
            TokenKind::In => CmpOp::In,
            TokenKind::Not if self.cursor.peek_kind_at(1) == TokenKind::In => {
                self.cursor.advance();
                CmpOp::NotIn
            }
            TokenKind::Is if self.cursor.peek_kind_at(1) == TokenKind::Not => {
                self.cursor.advance();
                CmpOp::IsNot
            }
            TokenKind::Is => CmpOp::Is,
            _ => return None,
        };
        self.cursor.advance();
        Some(op)
    }

    /// Everything from `|` down to unary operators.
    pub(crate) fn parse_bitor(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary(1)
    }

    /// Precedence climbing over the left-associative binary operators.
    fn parse_binary(&mut self, min_precedence: u8) -> Result<ExprId, ParseError> {
        let start = self.start();
        let mut left = self.parse_factor()?;
        loop {
            let kind = self.cursor.current_kind();
            let (Some(precedence), Some(op)) =
                (binary_precedence(kind), BinaryOp::from_infix(kind))
            else {
                break;
            };
            if precedence < min_precedence {
                break;
            }
            self.cursor.advance();
            let right = self.parse_binary(precedence + 1)?;
            left = self.finish(ExprKind::BinOp { left, op, right }, start);
        }
        Ok(left)
    }

    /// Unary `+`, `-`, `~`.
    fn parse_factor(&mut self) -> Result<ExprId, ParseError> {
        let op = match self.cursor.current_kind() {
            TokenKind::Plus => UnaryOp::Pos,
            TokenKind::Minus => UnaryOp::Neg,
            TokenKind::Tilde => UnaryOp::Invert,
            _ => return self.parse_power(),
        };
        let start = self.start();
        self.cursor.advance();
        let operand = with_stack_room(|| self.parse_factor())?;
        Ok(self.finish(ExprKind::UnaryOp { op, operand }, start))
    }

    /// `await_primary ['**' factor]`; right-associative through `factor`.
    fn parse_power(&mut self) -> Result<ExprId, ParseError> {
        let start = self.start();
        let base = if self.cursor.check(TokenKind::Await) {
            self.cursor.advance();
            let value = self.parse_primary()?;
            self.finish(ExprKind::Await(value), start)
        } else {
            self.parse_primary()?
        };
        if !self.cursor.eat(TokenKind::DoubleStar) {
            return Ok(base);
        }
        let exponent = self.parse_factor()?;
        Ok(self.finish(
            ExprKind::BinOp {
                left: base,
                op: BinaryOp::Pow,
                right: exponent,
            },
            start,
        ))
    }

    /// `yield`, `yield expressions`, or `yield from expr`.
    pub(crate) fn parse_yield(&mut self) -> Result<ExprId, ParseError> {
        let start = self.start();
        self.cursor.expect(TokenKind::Yield)?;
        if self.cursor.eat(TokenKind::From) {
            let value = self.parse_test()?;
            return Ok(self.finish(ExprKind::YieldFrom(value), start));
        }
        let value = if starts_expression(self.cursor.current_kind()) {
            Some(self.parse_star_expressions()?)
        } else {
            None
        };
        Ok(self.finish(ExprKind::Yield(value), start))
    }

    /// Assignment or loop target: `*`-able `|`-level expressions, comma
    /// separated, as a tuple when there is more than one.
    pub(crate) fn parse_target_list(&mut self) -> Result<ExprId, ParseError> {
        let start = self.start();
        let first = self.parse_star_target()?;
        if !self.cursor.check(TokenKind::Comma) {
            return Ok(first);
        }
        let mut elts = vec![first];
        while self.cursor.eat(TokenKind::Comma) {
            if !starts_expression(self.cursor.current_kind()) {
                break;
            }
            elts.push(self.parse_star_target()?);
        }
        Ok(self.finish(ExprKind::Tuple(elts), start))
    }

    /// Comma-separated targets as a flat list (`del a, b`).
    pub(crate) fn parse_star_target_items(&mut self) -> Result<Vec<ExprId>, ParseError> {
        let mut items = vec![self.parse_star_target()?];
        while self.cursor.eat(TokenKind::Comma) {
            if !starts_expression(self.cursor.current_kind()) {
                break;
            }
            items.push(self.parse_star_target()?);
        }
        Ok(items)
    }

    pub(crate) fn parse_star_target(&mut self) -> Result<ExprId, ParseError> {
        if self.cursor.check(TokenKind::Star) {
            let start = self.start();
            self.cursor.advance();
            let value = self.parse_bitor()?;
            return Ok(self.finish(ExprKind::Starred(value), start));
        }
        self.parse_bitor()
    }
}
