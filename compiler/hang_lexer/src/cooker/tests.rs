use super::*;
use pretty_assertions::assert_eq;

fn cook(source: &str) -> TokenList {
    match LayoutCooker::new(source).cook() {
        Ok(tokens) => tokens,
        Err(err) => panic!("lex failed: {err}"),
    }
}

fn kinds(source: &str) -> Vec<TokenKind> {
    cook(source).iter().map(|t| t.kind).collect()
}

fn pos(line: u32, column: u32) -> SourcePosition {
    SourcePosition::new(line, column)
}

#[test]
fn test_simple_statement() {
    use TokenKind::*;
    assert_eq!(
        kinds("x = 1\n"),
        vec![Name, Eq, Number, Newline, EndMarker]
    );
}

#[test]
fn test_missing_final_newline_is_synthesized() {
    let tokens = cook("x");
    let newline = tokens.get(1).map(|t| (t.kind, t.span, t.text.is_empty()));
    assert_eq!(
        newline,
        Some((TokenKind::Newline, Span::new(pos(1, 1), pos(1, 2)), true))
    );
    assert_eq!(
        tokens.last().map(|t| (t.kind, t.span.start)),
        Some((TokenKind::EndMarker, pos(2, 0)))
    );
}

#[test]
fn test_indent_and_dedent() {
    use TokenKind::*;
    let source = "def f():\n    return 1\nx\n";
    assert_eq!(
        kinds(source),
        vec![
            Def, Name, LParen, RParen, Colon, Newline, Indent, Return, Number, Newline, Dedent,
            Name, Newline, EndMarker,
        ]
    );

    let tokens = cook(source);
    let indent = tokens.iter().find(|t| t.kind == Indent);
    assert_eq!(
        indent.map(|t| (t.span, &*t.text)),
        Some((Span::new(pos(2, 0), pos(2, 4)), "    "))
    );
    let dedent = tokens.iter().find(|t| t.kind == Dedent);
    assert_eq!(dedent.map(|t| t.span), Some(Span::new(pos(3, 0), pos(3, 0))));
}

#[test]
fn test_dedents_closed_at_end_of_input() {
    use TokenKind::*;
    let tail: Vec<_> = kinds("if a:\n    if b:\n        c\n")
        .into_iter()
        .rev()
        .take(3)
        .collect();
    assert_eq!(tail, vec![EndMarker, Dedent, Dedent]);
}

#[test]
fn test_line_breaks_inside_brackets_are_nl() {
    use TokenKind::*;
    assert_eq!(
        kinds("f(\n    a,\n)\n"),
        vec![Name, LParen, Nl, Name, Comma, Nl, RParen, Newline, EndMarker]
    );
}

#[test]
fn test_blank_and_comment_lines_are_nl() {
    use TokenKind::*;
    assert_eq!(
        kinds("\n# note\nx\n"),
        vec![Nl, Comment, Nl, Name, Newline, EndMarker]
    );
}

#[test]
fn test_comment_line_does_not_trigger_indent() {
    use TokenKind::*;
    let got = kinds("if a:\n        # deep comment\n    b\n");
    assert_eq!(
        got,
        vec![
            If, Name, Colon, Newline, Comment, Nl, Indent, Name, Newline, Dedent, EndMarker,
        ]
    );
}

#[test]
fn test_continuation_produces_no_token() {
    use TokenKind::*;
    assert_eq!(
        kinds("x = 1 + \\\n    2\n"),
        vec![Name, Eq, Number, Plus, Number, Newline, EndMarker]
    );
}

#[test]
fn test_keywords_reclassified() {
    use TokenKind::*;
    assert_eq!(
        kinds("async def definitely(): pass\n"),
        vec![Async, Def, Name, LParen, RParen, Colon, Pass, Newline, EndMarker]
    );
}

#[test]
fn test_multiline_string_span() {
    let tokens = cook("s = \"\"\"\nhey\n\"\"\"\n");
    let string = tokens.iter().find(|t| t.kind == TokenKind::String);
    assert_eq!(
        string.map(|t| t.span),
        Some(Span::new(pos(1, 4), pos(3, 3)))
    );
}

#[test]
fn test_stray_closer_does_not_underflow_depth() {
    use TokenKind::*;
    // The parser rejects this; the lexer still produces a stream.
    assert_eq!(
        kinds(")\nx\n"),
        vec![RParen, Newline, Name, Newline, EndMarker]
    );
}

#[test]
fn test_inconsistent_dedent() {
    let err = LayoutCooker::new("if a:\n    b\n  c\n").cook();
    assert_eq!(
        err,
        Err(LexError::InconsistentDedent {
            position: pos(3, 2)
        })
    );
}

#[test]
fn test_unterminated_string_error() {
    let err = LayoutCooker::new("x = 'abc\n").cook();
    assert_eq!(
        err,
        Err(LexError::UnterminatedString {
            position: pos(1, 4)
        })
    );
}

#[test]
fn test_invalid_character_error() {
    let err = LayoutCooker::new("x = $\n").cook();
    assert_eq!(
        err,
        Err(LexError::InvalidCharacter {
            position: pos(1, 4),
            found: '$'
        })
    );
}
