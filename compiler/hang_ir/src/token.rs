//! Tokens produced by the lexer and consumed by the parser and the checker.
//!
//! The token stream is the host's view of a file: every bracket, comment and
//! layout marker survives lexing, because closing-bracket rules work on the
//! stream directly rather than on the tree.

use super::Span;
use std::fmt;

/// A token with its text and span.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text of the token. Empty for `Indent`/`Dedent`/`EndMarker`
    /// and for a synthesized final `Newline`.
    pub text: Box<str>,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<Box<str>>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {:?}", self.kind, self.text, self.span)
    }
}

/// Bracket family. Pairing never crosses families.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BracketFamily {
    Round,
    Square,
    Curly,
}

impl BracketFamily {
    pub const ALL: [BracketFamily; 3] = [
        BracketFamily::Round,
        BracketFamily::Square,
        BracketFamily::Curly,
    ];

    /// Dense index for per-family tables.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            BracketFamily::Round => 0,
            BracketFamily::Square => 1,
            BracketFamily::Curly => 2,
        }
    }

    pub const fn open_char(self) -> char {
        match self {
            BracketFamily::Round => '(',
            BracketFamily::Square => '[',
            BracketFamily::Curly => '{',
        }
    }

    pub const fn close_char(self) -> char {
        match self {
            BracketFamily::Round => ')',
            BracketFamily::Square => ']',
            BracketFamily::Curly => '}',
        }
    }
}

/// Token kinds.
///
/// Kinds carry no payload; the token's text lives on [`Token`]. Keywords are
/// separate kinds so the parser can match on them directly.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Atoms
    Name,
    Number,
    String,

    // Layout and trivia
    Comment,
    /// End of a logical line.
    Newline,
    /// Line break that does not end a logical line.
    Nl,
    Indent,
    Dedent,
    EndMarker,

    // Keywords
    False,
    None,
    True,
    And,
    As,
    Assert,
    Async,
    Await,
    Break,
    Class,
    Continue,
    Def,
    Del,
    Elif,
    Else,
    Except,
    Finally,
    For,
    From,
    Global,
    If,
    Import,
    In,
    Is,
    Lambda,
    Nonlocal,
    Not,
    Or,
    Pass,
    Raise,
    Return,
    Try,
    While,
    With,
    Yield,

    // Brackets
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    // Punctuation
    Comma,
    Colon,
    Semi,
    Dot,
    Ellipsis,
    Arrow,
    At,
    Eq,
    ColonEq,

    // Operators
    Plus,
    Minus,
    Star,
    DoubleStar,
    Slash,
    DoubleSlash,
    Percent,
    Amp,
    Pipe,
    Caret,
    Tilde,
    Shl,
    Shr,
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    NotEq,

    // Augmented assignment
    PlusEq,
    MinusEq,
    StarEq,
    AtEq,
    SlashEq,
    DoubleSlashEq,
    PercentEq,
    AmpEq,
    PipeEq,
    CaretEq,
    ShlEq,
    ShrEq,
    DoubleStarEq,
}

impl TokenKind {
    /// `Indent`/`Dedent`: markers that never determine a line's indentation.
    #[inline]
    pub const fn is_layout_marker(self) -> bool {
        matches!(self, TokenKind::Indent | TokenKind::Dedent)
    }

    /// `Comment`/`Nl`: tokens the parser skips.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::Nl)
    }

    /// Family and direction of a bracket token; `None` for everything else.
    #[inline]
    pub const fn bracket(self) -> Option<(BracketFamily, bool)> {
        match self {
            TokenKind::LParen => Some((BracketFamily::Round, true)),
            TokenKind::RParen => Some((BracketFamily::Round, false)),
            TokenKind::LBracket => Some((BracketFamily::Square, true)),
            TokenKind::RBracket => Some((BracketFamily::Square, false)),
            TokenKind::LBrace => Some((BracketFamily::Curly, true)),
            TokenKind::RBrace => Some((BracketFamily::Curly, false)),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_open_bracket(self) -> bool {
        matches!(
            self,
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace
        )
    }

    #[inline]
    pub const fn is_close_bracket(self) -> bool {
        matches!(
            self,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace
        )
    }

    /// Whether this kind is an augmented assignment operator (`+=`, `<<=`, ...).
    pub const fn is_augmented_assign(self) -> bool {
        matches!(
            self,
            TokenKind::PlusEq
                | TokenKind::MinusEq
                | TokenKind::StarEq
                | TokenKind::AtEq
                | TokenKind::SlashEq
                | TokenKind::DoubleSlashEq
                | TokenKind::PercentEq
                | TokenKind::AmpEq
                | TokenKind::PipeEq
                | TokenKind::CaretEq
                | TokenKind::ShlEq
                | TokenKind::ShrEq
                | TokenKind::DoubleStarEq
        )
    }

    /// Human-readable name used in parse errors.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Name => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Newline | TokenKind::Nl => "newline",
            TokenKind::Indent => "indent",
            TokenKind::Dedent => "dedent",
            TokenKind::EndMarker => "end of file",
            TokenKind::False => "False",
            TokenKind::None => "None",
            TokenKind::True => "True",
            TokenKind::And => "and",
            TokenKind::As => "as",
            TokenKind::Assert => "assert",
            TokenKind::Async => "async",
            TokenKind::Await => "await",
            TokenKind::Break => "break",
            TokenKind::Class => "class",
            TokenKind::Continue => "continue",
            TokenKind::Def => "def",
            TokenKind::Del => "del",
            TokenKind::Elif => "elif",
            TokenKind::Else => "else",
            TokenKind::Except => "except",
            TokenKind::Finally => "finally",
            TokenKind::For => "for",
            TokenKind::From => "from",
            TokenKind::Global => "global",
            TokenKind::If => "if",
            TokenKind::Import => "import",
            TokenKind::In => "in",
            TokenKind::Is => "is",
            TokenKind::Lambda => "lambda",
            TokenKind::Nonlocal => "nonlocal",
            TokenKind::Not => "not",
            TokenKind::Or => "or",
            TokenKind::Pass => "pass",
            TokenKind::Raise => "raise",
            TokenKind::Return => "return",
            TokenKind::Try => "try",
            TokenKind::While => "while",
            TokenKind::With => "with",
            TokenKind::Yield => "yield",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Colon => "`:`",
            TokenKind::Semi => "`;`",
            TokenKind::Dot => "`.`",
            TokenKind::Ellipsis => "`...`",
            TokenKind::Arrow => "`->`",
            TokenKind::At => "`@`",
            TokenKind::Eq => "`=`",
            TokenKind::ColonEq => "`:=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::DoubleStar => "`**`",
            TokenKind::Slash => "`/`",
            TokenKind::DoubleSlash => "`//`",
            TokenKind::Percent => "`%`",
            TokenKind::Amp => "`&`",
            TokenKind::Pipe => "`|`",
            TokenKind::Caret => "`^`",
            TokenKind::Tilde => "`~`",
            TokenKind::Shl => "`<<`",
            TokenKind::Shr => "`>>`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::LtEq => "`<=`",
            TokenKind::GtEq => "`>=`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::PlusEq => "`+=`",
            TokenKind::MinusEq => "`-=`",
            TokenKind::StarEq => "`*=`",
            TokenKind::AtEq => "`@=`",
            TokenKind::SlashEq => "`/=`",
            TokenKind::DoubleSlashEq => "`//=`",
            TokenKind::PercentEq => "`%=`",
            TokenKind::AmpEq => "`&=`",
            TokenKind::PipeEq => "`|=`",
            TokenKind::CaretEq => "`^=`",
            TokenKind::ShlEq => "`<<=`",
            TokenKind::ShrEq => "`>>=`",
            TokenKind::DoubleStarEq => "`**=`",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Ordered token stream for one file.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Last token, normally `EndMarker`.
    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
