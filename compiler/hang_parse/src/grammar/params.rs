//! Parameter lists for `def` and `lambda`.

use hang_ir::{Param, ParamKind, SourcePosition, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parameters up to (not including) `close`.
    ///
    /// `/` and a bare `*` are markers, not parameters: `/` turns the
    /// parameters before it positional-only, `*` makes the ones after it
    /// keyword-only. A star parameter's span starts at its `*`/`**`.
    pub(crate) fn parse_params(
        &mut self,
        close: TokenKind,
        allow_annotations: bool,
    ) -> Result<Vec<Param>, ParseError> {
        let mut params: Vec<Param> = Vec::new();
        let mut keyword_only = false;
        while !self.cursor.check(close) {
            let start = self.start();
            match self.cursor.current_kind() {
                TokenKind::Slash => {
                    self.cursor.advance();
                    for param in &mut params {
                        if param.kind == ParamKind::Positional {
                            param.kind = ParamKind::PositionalOnly;
                        }
                    }
                }
                TokenKind::Star => {
                    self.cursor.advance();
                    keyword_only = true;
                    if self.cursor.check(TokenKind::Name) {
                        params.push(self.parse_param(
                            start,
                            ParamKind::VarPositional,
                            allow_annotations,
                        )?);
                    }
                }
                TokenKind::DoubleStar => {
                    self.cursor.advance();
                    params.push(self.parse_param(start, ParamKind::VarKeyword, allow_annotations)?);
                }
                _ => {
                    let kind = if keyword_only {
                        ParamKind::KeywordOnly
                    } else {
                        ParamKind::Positional
                    };
                    params.push(self.parse_param(start, kind, allow_annotations)?);
                }
            }
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        Ok(params)
    }

    /// `name [: annotation] [= default]`, the name at the cursor.
    ///
    /// The span ends after the annotation; defaults are outside it.
    fn parse_param(
        &mut self,
        start: SourcePosition,
        kind: ParamKind,
        allow_annotations: bool,
    ) -> Result<Param, ParseError> {
        let (name, _) = self.cursor.expect_name()?;
        let annotation = if allow_annotations && self.cursor.eat(TokenKind::Colon) {
            Some(self.parse_star_named_expr()?)
        } else {
            None
        };
        let span = self.span_from(start);
        let default = if self.cursor.eat(TokenKind::Eq) {
            Some(self.parse_test()?)
        } else {
            None
        };
        Ok(Param {
            name,
            kind,
            annotation,
            default,
            span,
        })
    }
}
