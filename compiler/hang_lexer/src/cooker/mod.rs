//! Cooking layer: raw logos tokens to positioned `Token`s with layout.
//!
//! ```text
//! source -> RawToken (logos) -> LayoutCooker -> TokenList
//! ```
//!
//! The cooker attaches spans, reclassifies keywords, and inserts the layout
//! tokens an indentation-sensitive grammar needs:
//! - `Newline` at the end of a logical line; `Nl` for any other line break
//!   (inside brackets, blank lines, comment-only lines)
//! - `Indent`/`Dedent` at the first substantive token of a logical line
//! - a final `Newline`, closing `Dedent`s and `EndMarker` at end of input

use std::ops::Range;

use logos::Logos;

use hang_ir::{LineIndex, SourcePosition, Span, Token, TokenKind, TokenList};

use crate::keywords;
use crate::lex_error::LexError;
use crate::raw_token::RawToken;

pub(crate) struct LayoutCooker<'src> {
    source: &'src str,
    index: LineIndex<'src>,
    out: TokenList,
    /// Open indentation columns; the bottom entry is always 0.
    indents: Vec<u32>,
    /// Open brackets. Saturates at zero so stray closers don't underflow.
    depth: u32,
    /// Next substantive token starts a logical line.
    at_line_start: bool,
    /// Current logical line has a token other than a comment.
    line_has_content: bool,
}

impl<'src> LayoutCooker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        LayoutCooker {
            source,
            index: LineIndex::new(source),
            out: TokenList::with_capacity(source.len() / 4 + 1),
            indents: vec![0],
            depth: 0,
            at_line_start: true,
            line_has_content: false,
        }
    }

    pub(crate) fn cook(mut self) -> Result<TokenList, LexError> {
        let mut raw = RawToken::lexer(self.source);
        while let Some(result) = raw.next() {
            let range = raw.span();
            match result {
                Ok(token) => self.cook_one(token, range)?,
                Err(()) => return Err(self.classify_error(range)),
            }
        }
        self.finish();
        Ok(self.out)
    }

    fn cook_one(&mut self, raw: RawToken, range: Range<usize>) -> Result<(), LexError> {
        match raw {
            RawToken::LineContinuation => Ok(()),
            RawToken::Comment => {
                self.push(TokenKind::Comment, range);
                Ok(())
            }
            RawToken::Newline => {
                if self.depth == 0 && self.line_has_content {
                    self.push(TokenKind::Newline, range);
                    self.line_has_content = false;
                    self.at_line_start = true;
                } else {
                    self.push(TokenKind::Nl, range);
                }
                Ok(())
            }
            _ => {
                let kind = convert(raw, &self.source[range.clone()]);
                if self.at_line_start {
                    self.at_line_start = false;
                    self.adjust_indentation(range.start)?;
                }
                self.line_has_content = true;
                if kind.is_open_bracket() {
                    self.depth += 1;
                } else if kind.is_close_bracket() {
                    self.depth = self.depth.saturating_sub(1);
                }
                self.push(kind, range);
                Ok(())
            }
        }
    }

    /// Emit `Indent`/`Dedent` for a logical line whose first token starts
    /// at byte `offset`.
    fn adjust_indentation(&mut self, offset: usize) -> Result<(), LexError> {
        let start = self.index.position(offset);
        let current = self.indents.last().copied().unwrap_or(0);
        if start.column > current {
            self.indents.push(start.column);
            let line_start = self.source[..offset]
                .rfind(['\n', '\r'])
                .map_or(0, |i| i + 1);
            self.out.push(Token::new(
                TokenKind::Indent,
                &self.source[line_start..offset],
                Span::new(SourcePosition::new(start.line, 0), start),
            ));
            return Ok(());
        }
        while start.column < self.indents.last().copied().unwrap_or(0) {
            self.indents.pop();
            self.out
                .push(Token::new(TokenKind::Dedent, "", Span::new(start, start)));
        }
        if self.indents.last().copied().unwrap_or(0) != start.column {
            return Err(LexError::InconsistentDedent { position: start });
        }
        Ok(())
    }

    fn push(&mut self, kind: TokenKind, range: Range<usize>) {
        let span = self.index.span(range.clone());
        self.out
            .push(Token::new(kind, &self.source[range], span));
    }

    fn finish(&mut self) {
        let end = self.index.position(self.source.len());
        if self.line_has_content && self.depth == 0 {
            // Unterminated last line: a zero-text Newline one column wide.
            // Inside an open bracket the parser reports end of input instead.
            let span = Span::new(end, SourcePosition::new(end.line, end.column + 1));
            self.out.push(Token::new(TokenKind::Newline, "", span));
        }
        let eof = if end.column == 0 {
            end
        } else {
            SourcePosition::new(end.line + 1, 0)
        };
        for _ in 1..self.indents.len() {
            self.out
                .push(Token::new(TokenKind::Dedent, "", Span::new(eof, eof)));
        }
        self.indents.truncate(1);
        self.out
            .push(Token::new(TokenKind::EndMarker, "", Span::new(eof, eof)));
    }

    fn classify_error(&self, range: Range<usize>) -> LexError {
        let position = self.index.position(range.start);
        let slice = &self.source[range.start..];
        let unterminated = slice
            .trim_start_matches(|c: char| {
                matches!(c, 'r' | 'R' | 'b' | 'B' | 'u' | 'U' | 'f' | 'F')
            })
            .starts_with(['"', '\'']);
        if unterminated {
            LexError::UnterminatedString { position }
        } else {
            LexError::InvalidCharacter {
                position,
                found: slice.chars().next().unwrap_or('\0'),
            }
        }
    }
}

/// Map a raw token to its cooked kind.
fn convert(raw: RawToken, text: &str) -> TokenKind {
    match raw {
        RawToken::Name => keywords::lookup(text).unwrap_or(TokenKind::Name),
        RawToken::Number => TokenKind::Number,
        RawToken::String => TokenKind::String,
        RawToken::Comment => TokenKind::Comment,
        RawToken::Newline | RawToken::LineContinuation => TokenKind::Nl,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Semi => TokenKind::Semi,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Ellipsis => TokenKind::Ellipsis,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::At => TokenKind::At,
        RawToken::Eq => TokenKind::Eq,
        RawToken::ColonEq => TokenKind::ColonEq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::DoubleStar => TokenKind::DoubleStar,
        RawToken::Slash => TokenKind::Slash,
        RawToken::DoubleSlash => TokenKind::DoubleSlash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Amp => TokenKind::Amp,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Tilde => TokenKind::Tilde,
        RawToken::Shl => TokenKind::Shl,
        RawToken::Shr => TokenKind::Shr,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::PlusEq => TokenKind::PlusEq,
        RawToken::MinusEq => TokenKind::MinusEq,
        RawToken::StarEq => TokenKind::StarEq,
        RawToken::AtEq => TokenKind::AtEq,
        RawToken::SlashEq => TokenKind::SlashEq,
        RawToken::DoubleSlashEq => TokenKind::DoubleSlashEq,
        RawToken::PercentEq => TokenKind::PercentEq,
        RawToken::AmpEq => TokenKind::AmpEq,
        RawToken::PipeEq => TokenKind::PipeEq,
        RawToken::CaretEq => TokenKind::CaretEq,
        RawToken::ShlEq => TokenKind::ShlEq,
        RawToken::ShrEq => TokenKind::ShrEq,
        RawToken::DoubleStarEq => TokenKind::DoubleStarEq,
    }
}

#[cfg(test)]
mod tests;
