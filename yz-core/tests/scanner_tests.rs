//! 行扫描端到端测试

mod common;
use common::{kinds, kinds_from, significant, states, tok};
use pretty_assertions::assert_eq;
use yz_core::{scan_line, ClassificationTables, ScanState, TokenKind};

#[test]
fn test_keyword_precedence() {
    assert_eq!(kinds("if"), vec![tok(TokenKind::Keyword, "if")]);
}

#[test]
fn test_builtin_and_identifier() {
    assert_eq!(
        significant("println(value)"),
        vec![
            tok(TokenKind::Builtin, "println"),
            tok(TokenKind::Punctuation, "("),
            tok(TokenKind::Identifier, "value"),
            tok(TokenKind::Punctuation, ")"),
        ]
    );
}

#[test]
fn test_compound_operator_precedence() {
    assert_eq!(
        significant("a == b"),
        vec![
            tok(TokenKind::Identifier, "a"),
            tok(TokenKind::Operator, "=="),
            tok(TokenKind::Identifier, "b"),
        ]
    );
}

#[test]
fn test_compound_operators() {
    for op in ["+=", "!=", "<=", ">=", "&&", "||", "<<", ">>", "++", "--"] {
        let line = format!("x {} y", op);
        assert_eq!(significant(&line)[1], tok(TokenKind::Operator, op), "{}", op);
    }
}

#[test]
fn test_comment_before_operator() {
    assert_eq!(kinds("// a / b"), vec![tok(TokenKind::Comment, "// a / b")]);
    assert_eq!(
        significant("a /b"),
        vec![
            tok(TokenKind::Identifier, "a"),
            tok(TokenKind::Operator, "/"),
            tok(TokenKind::Identifier, "b"),
        ]
    );
}

#[test]
fn test_cross_line_raw_string() {
    let first = scan_line("`hello", ScanState::Base, ClassificationTables::yz());
    assert_eq!(first.next_state, ScanState::InRawString);

    let second = scan_line("world`", first.next_state, ClassificationTables::yz());
    assert_eq!(second.tokens[0].kind, TokenKind::String);
    assert_eq!(second.tokens[0].text, "world`");
    assert_eq!(second.next_state, ScanState::Base);
}

#[test]
fn test_cross_line_block_comment() {
    assert_eq!(
        states("x /* start\nmiddle\nend */ y"),
        vec![ScanState::InBlockComment, ScanState::InBlockComment, ScanState::Base]
    );
    assert_eq!(
        kinds_from("end */ y", ScanState::InBlockComment),
        vec![
            tok(TokenKind::Comment, "end */"),
            tok(TokenKind::Whitespace, " "),
            tok(TokenKind::Identifier, "y"),
        ]
    );
}

#[test]
fn test_unterminated_quotes_reset_at_line_end() {
    assert_eq!(states("s := \"open\nnext"), vec![ScanState::Base, ScanState::Base]);
    assert_eq!(states("c := 'x"), vec![ScanState::Base]);
    assert_eq!(kinds("\"abc"), vec![tok(TokenKind::String, "\"abc")]);
}

#[test]
fn test_escaped_quote_does_not_terminate() {
    assert_eq!(
        significant(r#""say \"hi\"" x"#),
        vec![
            tok(TokenKind::String, r#""say \"hi\"""#),
            tok(TokenKind::Identifier, "x"),
        ]
    );
    assert_eq!(kinds(r"'\''"), vec![tok(TokenKind::String, r"'\''")]);
}

#[test]
fn test_fallback_termination() {
    assert_eq!(kinds("@"), vec![tok(TokenKind::Error, "@")]);
}

#[test]
fn test_numeric_literal_variants() {
    for literal in ["0xFF", "0b101", "3.14e-2", "42", "0755", "1e9"] {
        assert_eq!(kinds(literal), vec![tok(TokenKind::Number, literal)], "{}", literal);
    }
}

#[test]
fn test_number_followed_by_punctuation() {
    assert_eq!(
        kinds("xs[10]"),
        vec![
            tok(TokenKind::Identifier, "xs"),
            tok(TokenKind::Punctuation, "["),
            tok(TokenKind::Number, "10"),
            tok(TokenKind::Punctuation, "]"),
        ]
    );
}

#[test]
fn test_non_ascii_is_error() {
    assert_eq!(
        kinds("é"),
        vec![tok(TokenKind::Error, "é")]
    );
}

#[test]
fn test_styles() {
    let scan = scan_line("func f() { return 1 } // x", ScanState::Base, ClassificationTables::yz());
    let styles: Vec<_> = scan.highlighted().filter_map(|t| t.kind.style()).collect();
    assert_eq!(
        styles,
        vec![
            "keyword", "variable", "punctuation", "punctuation", "punctuation", "keyword",
            "number", "punctuation", "comment",
        ]
    );
}
