//! `for ... in ... if ...` clauses shared by comprehensions and generator
//! expressions.

use hang_ir::{ComprehensionClause, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Whether the cursor is on `for` or `async for`.
    pub(crate) fn at_comprehension_clause(&self) -> bool {
        match self.cursor.current_kind() {
            TokenKind::For => true,
            TokenKind::Async => self.cursor.peek_kind_at(1) == TokenKind::For,
            _ => false,
        }
    }

    pub(crate) fn parse_comprehension_clauses(
        &mut self,
    ) -> Result<Vec<ComprehensionClause>, ParseError> {
        let mut clauses = Vec::new();
        while self.at_comprehension_clause() {
            let is_async = self.cursor.eat(TokenKind::Async);
            self.cursor.expect(TokenKind::For)?;
            let target = self.parse_target_list()?;
            self.cursor.expect(TokenKind::In)?;
            let iter = self.parse_or_test()?;
            let mut ifs = Vec::new();
            while self.cursor.eat(TokenKind::If) {
                ifs.push(self.parse_or_test()?);
            }
            clauses.push(ComprehensionClause {
                target,
                iter,
                ifs,
                is_async,
            });
        }
        Ok(clauses)
    }
}
