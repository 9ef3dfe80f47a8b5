use super::*;
use pretty_assertions::assert_eq;

#[test]
fn string_display_picks_non_conflicting_quote() {
    assert_eq!(TokenKind::Str("plain".into()).to_string(), "'plain'");
    assert_eq!(TokenKind::Str("it's".into()).to_string(), "\"it's\"");
    assert_eq!(TokenKind::Str(String::new()).to_string(), "''");
}

#[test]
fn number_display_drops_integral_fraction() {
    assert_eq!(TokenKind::Number(42.0).to_string(), "42");
    assert_eq!(TokenKind::Number(2.5).to_string(), "2.5");
}

#[test]
fn token_display_matches_kind() {
    let token = Token::new(TokenKind::LtEq, Span::new(3, 5));
    assert_eq!(token.to_string(), "<=");
    assert!(!token.is_eof());
    assert!(Token::new(TokenKind::Eof, Span::DUMMY).is_eof());
}
