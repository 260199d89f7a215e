//! Atoms: names, literals, and bracketed displays.

use hang_ir::{
    Comprehension, ComprehensionKind, Constant, DictEntry, ExprId, ExprKind, SourcePosition,
    TokenKind,
};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(crate) fn parse_atom(&mut self) -> Result<ExprId, ParseError> {
        let start = self.start();
        let kind = match self.cursor.current_kind() {
            TokenKind::Name => ExprKind::Name(self.cursor.advance().text.clone()),
            TokenKind::Number => {
                ExprKind::Constant(Constant::Number(self.cursor.advance().text.clone()))
            }
            TokenKind::String => self.parse_strings(),
            TokenKind::None => {
                self.cursor.advance();
                ExprKind::Constant(Constant::None)
            }
            TokenKind::True => {
                self.cursor.advance();
                ExprKind::Constant(Constant::True)
            }
            TokenKind::False => {
                self.cursor.advance();
                ExprKind::Constant(Constant::False)
            }
            TokenKind::Ellipsis => {
                self.cursor.advance();
                ExprKind::Constant(Constant::Ellipsis)
            }
            TokenKind::LParen => return self.parse_paren(),
            TokenKind::LBracket => return self.parse_list(),
            TokenKind::LBrace => return self.parse_brace(),
            _ => return Err(self.cursor.unexpected("expression")),
        };
        Ok(self.finish(kind, start))
    }

    /// One or more adjacent string literals, implicitly concatenated.
    fn parse_strings(&mut self) -> ExprKind {
        let mut value = String::new();
        let mut is_bytes = false;
        let mut formatted = false;
        while self.cursor.check(TokenKind::String) {
            let token = self.cursor.advance();
            let (prefix, body) = split_string_literal(&token.text);
            is_bytes |= prefix.contains(['b', 'B']);
            formatted |= prefix.contains(['f', 'F']);
            value.push_str(body);
        }
        if formatted {
            ExprKind::FormattedString
        } else {
            ExprKind::Constant(Constant::Str {
                value: value.into(),
                is_bytes,
            })
        }
    }

    /// `()`, `(yield ...)`, `(expr)`, `(a, b)` or `(x for x in y)`.
    ///
    /// A plain parenthesized expression keeps its own span.
    fn parse_paren(&mut self) -> Result<ExprId, ParseError> {
        let start = self.start();
        self.cursor.advance();
        if self.cursor.eat(TokenKind::RParen) {
            return Ok(self.finish(ExprKind::Tuple(Vec::new()), start));
        }
        if self.cursor.check(TokenKind::Yield) {
            let inner = self.parse_yield()?;
            self.cursor.expect(TokenKind::RParen)?;
            return Ok(inner);
        }
        let first = self.parse_star_named_expr()?;
        if self.at_comprehension_clause() {
            return self.finish_comprehension(
                ComprehensionKind::Generator,
                first,
                None,
                start,
                TokenKind::RParen,
            );
        }
        if !self.cursor.check(TokenKind::Comma) {
            self.cursor.expect(TokenKind::RParen)?;
            return Ok(first);
        }
        let elts = self.parse_display_rest(first, TokenKind::RParen)?;
        Ok(self.finish(ExprKind::Tuple(elts), start))
    }

    /// `[a, b]` or `[x for x in y]`.
    fn parse_list(&mut self) -> Result<ExprId, ParseError> {
        let start = self.start();
        self.cursor.advance();
        if self.cursor.eat(TokenKind::RBracket) {
            return Ok(self.finish(ExprKind::List(Vec::new()), start));
        }
        let first = self.parse_star_named_expr()?;
        if self.at_comprehension_clause() {
            return self.finish_comprehension(
                ComprehensionKind::List,
                first,
                None,
                start,
                TokenKind::RBracket,
            );
        }
        let elts = self.parse_display_rest(first, TokenKind::RBracket)?;
        Ok(self.finish(ExprKind::List(elts), start))
    }

    /// Dict or set display, or their comprehensions.
    fn parse_brace(&mut self) -> Result<ExprId, ParseError> {
        let start = self.start();
        self.cursor.advance();
        if self.cursor.eat(TokenKind::RBrace) {
            return Ok(self.finish(ExprKind::Dict(Vec::new()), start));
        }

        if self.cursor.eat(TokenKind::DoubleStar) {
            let value = self.parse_bitor()?;
            let entry = DictEntry { key: None, value };
            return self.parse_dict_rest(entry, start);
        }

        let first = self.parse_star_named_expr()?;
        if self.cursor.eat(TokenKind::Colon) {
            let value = self.parse_test()?;
            if self.at_comprehension_clause() {
                return self.finish_comprehension(
                    ComprehensionKind::Dict,
                    first,
                    Some(value),
                    start,
                    TokenKind::RBrace,
                );
            }
            let entry = DictEntry {
                key: Some(first),
                value,
            };
            return self.parse_dict_rest(entry, start);
        }

        if self.at_comprehension_clause() {
            return self.finish_comprehension(
                ComprehensionKind::Set,
                first,
                None,
                start,
                TokenKind::RBrace,
            );
        }
        let elts = self.parse_display_rest(first, TokenKind::RBrace)?;
        Ok(self.finish(ExprKind::Set(elts), start))
    }

    fn parse_dict_rest(
        &mut self,
        first: DictEntry,
        start: SourcePosition,
    ) -> Result<ExprId, ParseError> {
        let mut entries = vec![first];
        while self.cursor.eat(TokenKind::Comma) {
            if self.cursor.check(TokenKind::RBrace) {
                break;
            }
            if self.cursor.eat(TokenKind::DoubleStar) {
                let value = self.parse_bitor()?;
                entries.push(DictEntry { key: None, value });
                continue;
            }
            let key = self.parse_test()?;
            self.cursor.expect(TokenKind::Colon)?;
            let value = self.parse_test()?;
            entries.push(DictEntry {
                key: Some(key),
                value,
            });
        }
        self.cursor.expect(TokenKind::RBrace)?;
        Ok(self.finish(ExprKind::Dict(entries), start))
    }

    /// Remaining `, elt` items of a display through its `close` bracket.
    fn parse_display_rest(
        &mut self,
        first: ExprId,
        close: TokenKind,
    ) -> Result<Vec<ExprId>, ParseError> {
        let mut elts = vec![first];
        while self.cursor.eat(TokenKind::Comma) {
            if self.cursor.check(close) {
                break;
            }
            elts.push(self.parse_star_named_expr()?);
        }
        self.cursor.expect(close)?;
        Ok(elts)
    }

    /// Clauses and closing bracket of a bracketed comprehension.
    fn finish_comprehension(
        &mut self,
        kind: ComprehensionKind,
        element: ExprId,
        value: Option<ExprId>,
        start: SourcePosition,
        close: TokenKind,
    ) -> Result<ExprId, ParseError> {
        let generators = self.parse_comprehension_clauses()?;
        self.cursor.expect(close)?;
        Ok(self.finish(
            ExprKind::Comprehension(Comprehension {
                kind,
                element,
                value,
                generators,
            }),
            start,
        ))
    }
}

/// Split a string token into its prefix letters and its content between
/// the quotes.
fn split_string_literal(text: &str) -> (&str, &str) {
    let quote_at = text.find(['"', '\'']).unwrap_or(text.len());
    let (prefix, quoted) = text.split_at(quote_at);
    let is_triple =
        quoted.len() >= 6 && (quoted.starts_with("\"\"\"") || quoted.starts_with("'''"));
    let width = if is_triple { 3 } else { 1 };
    let body = quoted
        .get(width..quoted.len().saturating_sub(width))
        .unwrap_or("");
    (prefix, body)
}
