//! Raw tokens from logos, before layout tokens and positions are added.

use logos::{Lexer, Logos};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\x0C]+")]
pub(crate) enum RawToken {
    #[regex(r"#[^\r\n]*")]
    Comment,

    #[regex(r"\r\n|\n|\r")]
    Newline,

    #[regex(r"\\\r?\n")]
    LineContinuation,

    #[regex(r"[a-zA-Z_\x{80}-\x{10FFFF}][a-zA-Z0-9_\x{80}-\x{10FFFF}]*")]
    Name,

    #[regex(r"[0-9]", lex_number)]
    #[regex(r"\.[0-9]", lex_number)]
    Number,

    /// Opening quote with up to two prefix letters; the callback consumes
    /// the body.
    #[regex(r#"[rRbBuUfF]{0,2}["']"#, lex_string)]
    String,

    // Brackets
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Punctuation
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semi,
    #[token(".")]
    Dot,
    #[token("...")]
    Ellipsis,
    #[token("->")]
    Arrow,
    #[token("@")]
    At,
    #[token("=")]
    Eq,
    #[token(":=")]
    ColonEq,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("**")]
    DoubleStar,
    #[token("/")]
    Slash,
    #[token("//")]
    DoubleSlash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,

    // Augmented assignment
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("@=")]
    AtEq,
    #[token("/=")]
    SlashEq,
    #[token("//=")]
    DoubleSlashEq,
    #[token("%=")]
    PercentEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,
    #[token("<<=")]
    ShlEq,
    #[token(">>=")]
    ShrEq,
    #[token("**=")]
    DoubleStarEq,
}

/// Extend a number past its first digit.
///
/// Accepts every numeric form loosely (`0x1F`, `1_000`, `1.5e-3`, `2j`):
/// the checker never needs a number's value, only its extent.
fn lex_number(lex: &mut Lexer<'_, RawToken>) {
    let head = lex.slice().as_bytes();
    let rest = lex.remainder().as_bytes();
    let is_hex = head == b"0" && matches!(rest.first(), Some(b'x' | b'X'));

    let mut prev = head.last().copied().unwrap_or(b'0');
    let mut len = 0;
    while let Some(&b) = rest.get(len) {
        let continues = b.is_ascii_alphanumeric()
            || b == b'_'
            || b == b'.'
            || (matches!(b, b'+' | b'-') && !is_hex && matches!(prev, b'e' | b'E'));
        if !continues {
            break;
        }
        prev = b;
        len += 1;
    }
    lex.bump(len);
}

/// Consume a string body after its opening quote.
///
/// Returns `false` when the string is unterminated: end of input, or a line
/// break inside a single-quoted string.
fn lex_string(lex: &mut Lexer<'_, RawToken>) -> bool {
    let Some(&quote) = lex.slice().as_bytes().last() else {
        return false;
    };
    let rest = lex.remainder().as_bytes();
    let triple = rest.len() >= 2 && rest[0] == quote && rest[1] == quote;

    let mut i = if triple { 2 } else { 0 };
    while let Some(&b) = rest.get(i) {
        match b {
            b'\\' => {
                // An escaped `\r\n` is one line break.
                i += if rest.get(i + 1) == Some(&b'\r') && rest.get(i + 2) == Some(&b'\n') {
                    3
                } else {
                    2
                };
            }
            b'\n' | b'\r' if !triple => return false,
            b if b == quote => {
                if !triple {
                    lex.bump(i + 1);
                    return true;
                }
                if rest.get(i + 1) == Some(&quote) && rest.get(i + 2) == Some(&quote) {
                    lex.bump(i + 3);
                    return true;
                }
                i += 1;
            }
            _ => i += 1,
        }
    }
    false
}
