//! Whitespace tokenizer tests: splitting, line breaks, carriage returns,
//! and the long-token truncation edge case.

use cooccur_pipeline::tokenize::{Token, Tokenizer, MAX_TOKEN_LEN};

fn collect(input: &[u8]) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(input);
    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token().expect("read ok") {
        tokens.push(token);
    }
    tokens
}

#[test]
fn splits_on_whitespace() {
    let tokens = collect(b"a b  c\td");
    assert_eq!(
        tokens,
        vec![
            Token::Word(b"a".to_vec()),
            Token::Word(b"b".to_vec()),
            Token::Word(b"c".to_vec()),
            Token::Word(b"d".to_vec()),
        ]
    );
}

#[test]
fn emits_line_breaks() {
    let tokens = collect(b"a b\nb a");
    assert_eq!(
        tokens,
        vec![
            Token::Word(b"a".to_vec()),
            Token::Word(b"b".to_vec()),
            Token::LineBreak,
            Token::Word(b"b".to_vec()),
            Token::Word(b"a".to_vec()),
        ]
    );
}

#[test]
fn collapses_consecutive_newlines_into_repeated_breaks() {
    let tokens = collect(b"a\n\nb");
    assert_eq!(
        tokens,
        vec![
            Token::Word(b"a".to_vec()),
            Token::LineBreak,
            Token::LineBreak,
            Token::Word(b"b".to_vec()),
        ]
    );
}

#[test]
fn discards_carriage_returns() {
    let tokens = collect(b"a\r\nb\r c\r\r");
    assert_eq!(
        tokens,
        vec![
            Token::Word(b"a".to_vec()),
            Token::LineBreak,
            Token::Word(b"b".to_vec()),
            Token::Word(b"c".to_vec()),
        ]
    );
}

#[test]
fn truncates_long_tokens_but_still_consumes_them() {
    let long = "x".repeat(1500);
    let input = format!("{long} next");
    let tokens = collect(input.as_bytes());
    assert_eq!(tokens.len(), 2);
    match &tokens[0] {
        Token::Word(w) => assert_eq!(w.len(), MAX_TOKEN_LEN),
        Token::LineBreak => panic!("expected word"),
    }
    assert_eq!(tokens[1], Token::Word(b"next".to_vec()));
}
