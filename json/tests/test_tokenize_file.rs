#[cfg(test)]
mod test_tokenize_file {
    use json::buffer::SourceBuffer;
    use json::number::parse_double;
    use json::token::TokenKind;
    use json::tokenizer::Tokenizer;
    use std::fs;

    #[test]
    fn tokens_borrow_from_the_mapped_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pairs.json");
        fs::write(
            &path,
            "{\"pairs\":[\n    {\"x0\":-12.5000000000000000, \"y0\":45.2500000000000000, \"x1\":100.0000000000000000, \"y1\":-0.1250000000000000}\n]}\n",
        )
        .unwrap();

        let buffer = SourceBuffer::load(&path).unwrap();
        let numbers: Vec<f64> = Tokenizer::new(&buffer)
            .filter(|t| t.kind.is_number())
            .map(|t| parse_double(t.text))
            .collect();
        assert_eq!(numbers, [-12.5, 45.25, 100.0, -0.125]);

        let last = Tokenizer::new(&buffer).last().unwrap();
        assert_eq!(last.kind, TokenKind::EndOfInput);
        assert_eq!(last.offset, buffer.len());
    }

    #[test]
    fn counts_by_kind() {
        let text = br#"{"a": [1, 2.5, "x"], "b": (3)}"#;
        let kinds: Vec<TokenKind> = Tokenizer::new(text).map(|t| t.kind).collect();
        let count = |k: TokenKind| kinds.iter().filter(|&&x| x == k).count();
        assert_eq!(count(TokenKind::Integer), 2);
        assert_eq!(count(TokenKind::Double), 1);
        assert_eq!(count(TokenKind::String), 3);
        assert_eq!(count(TokenKind::Comma), 3);
        assert_eq!(count(TokenKind::Colon), 2);
        assert_eq!(count(TokenKind::LeftParen), 1);
        assert_eq!(count(TokenKind::RightParen), 1);
        assert_eq!(count(TokenKind::EndOfInput), 1);
        assert_eq!(count(TokenKind::Undefined), 0);
    }
}
