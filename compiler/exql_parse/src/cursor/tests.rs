use super::*;
use exql_lexer::lex;
use pretty_assertions::assert_eq;

fn tokens(source: &str) -> Vec<Token> {
    match lex(source) {
        Ok(tokens) => tokens,
        Err(err) => panic!("lex failed: {err}"),
    }
}

#[test]
fn advance_stops_at_eof() {
    let toks = tokens("a");
    let mut cursor = Cursor::new("a", &toks);
    assert_eq!(cursor.advance().kind, TokenKind::Ident("a".into()));
    assert!(cursor.is_at_end());
    assert_eq!(cursor.advance().kind, TokenKind::Eof);
    assert!(cursor.is_at_end());
}

#[test]
fn peek_next_saturates_at_eof() {
    let toks = tokens("not in");
    let mut cursor = Cursor::new("not in", &toks);
    assert_eq!(cursor.peek_next_kind(), &TokenKind::In);
    cursor.advance();
    assert_eq!(cursor.peek_next_kind(), &TokenKind::Eof);
    cursor.advance();
    assert_eq!(cursor.peek_next_kind(), &TokenKind::Eof);
}

#[test]
fn check_ignores_payload() {
    let toks = tokens("name");
    let cursor = Cursor::new("name", &toks);
    assert!(cursor.check(&TokenKind::Ident(String::new())));
    assert!(!cursor.check(&TokenKind::Str(String::new())));
}

#[test]
fn expect_reports_found_token() {
    let toks = tokens("a b");
    let mut cursor = Cursor::new("a b", &toks);
    assert_eq!(cursor.expect_ident(), Ok("a".to_string()));
    assert_eq!(cursor.previous_span(), Span::new(0, 1));

    let err = cursor.expect(&TokenKind::RParen, "`)`").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedToken { expected: "`)`" });
    assert_eq!(err.token, "b");
    assert_eq!(err.offset, 2);
}

#[test]
fn unexpected_at_end_is_eof_error() {
    let toks = tokens("");
    let cursor = Cursor::new("", &toks);
    let err = cursor.unexpected("expression");
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEof { expected: "expression" });
    assert_eq!(err.token, "");
    assert_eq!(cursor.current_span(), Span::new(0, 0));
}
