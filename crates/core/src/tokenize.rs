use crate::token::Token;

/// Tokenize the raw content between `{{` and `}}` into a flat token stream,
/// per the state machine: `Outside` / `InBare` / `InQuoted`.
///
/// Quotes toggle the in-quotes state and are retained in the resulting
/// token's textual form. Parens are structural only outside quotes. Leading
/// and trailing whitespace around the whole expression is insignificant.
///
/// A quote encountered mid-`InBare` does not start a fresh token: it's
/// appended to the token already in progress and the state flips to
/// `InQuoted`. This means a bare word immediately followed by a quote (no
/// intervening whitespace) produces a single, oddly-shaped token rather than
/// two - matching the reference tokenizer rather than a "sensible" relex.
pub fn tokenize(input: &str) -> Vec<Token> {
    #[derive(PartialEq)]
    enum State {
        Outside,
        InBare,
        InQuoted,
    }

    let mut tokens = Vec::new();
    let mut state = State::Outside;
    let mut current = String::new();

    for ch in input.chars() {
        match state {
            State::Outside => match ch {
                '"' => {
                    current.push(ch);
                    state = State::InQuoted;
                }
                '(' => tokens.push(Token::LParen),
                ')' => tokens.push(Token::RParen),
                c if c.is_whitespace() => {}
                c => {
                    current.push(c);
                    state = State::InBare;
                }
            },
            State::InBare => match ch {
                c if c.is_whitespace() => {
                    tokens.push(Token::Bare(std::mem::take(&mut current)));
                    state = State::Outside;
                }
                '(' => {
                    tokens.push(Token::Bare(std::mem::take(&mut current)));
                    tokens.push(Token::LParen);
                    state = State::Outside;
                }
                ')' => {
                    tokens.push(Token::Bare(std::mem::take(&mut current)));
                    tokens.push(Token::RParen);
                    state = State::Outside;
                }
                '"' => {
                    current.push(ch);
                    state = State::InQuoted;
                }
                c => current.push(c),
            },
            State::InQuoted => {
                current.push(ch);
                if ch == '"' {
                    tokens.push(Token::Quoted(std::mem::take(&mut current)));
                    state = State::Outside;
                }
            }
        }
    }

    match state {
        State::InBare => tokens.push(Token::Bare(current)),
        State::InQuoted => tokens.push(Token::Quoted(current)),
        State::Outside => {}
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case::simple_path("user.name", &[Token::Bare("user.name".into())])]
    #[case::helper_call(
        "uppercase user.name",
        &[Token::Bare("uppercase".into()), Token::Bare("user.name".into())]
    )]
    #[case::quoted_literal(
        "\"mr. jack\"",
        &[Token::Quoted("\"mr. jack\"".into())]
    )]
    #[case::parens(
        "replace (dropFirst s 4) \"a\" \"b\"",
        &[
            Token::Bare("replace".into()),
            Token::LParen,
            Token::Bare("dropFirst".into()),
            Token::Bare("s".into()),
            Token::Bare("4".into()),
            Token::RParen,
            Token::Quoted("\"a\"".into()),
            Token::Quoted("\"b\"".into()),
        ]
    )]
    fn test_tokenize(#[case] input: &str, #[case] expected: &[Token]) {
        assert_eq!(tokenize(input), expected);
    }

    #[test]
    fn test_whitespace_and_newlines_preserved_inside_quotes() {
        let tokens = tokenize("\"line one\nline two\"");
        assert_eq!(tokens, vec![Token::Quoted("\"line one\nline two\"".into())]);
    }

    #[test]
    fn test_unescaped_quote_mid_bare_continues_same_token() {
        // A quote with no preceding whitespace doesn't close the bare token
        // and open a new quoted one - it's appended to the in-progress
        // token and flips the state. The emitted token is still classified
        // by whichever transition closes it (here, the closing quote), even
        // though its text doesn't start with `"`.
        let tokens = tokenize("\"My name is \"Mike\" smith\"");
        assert_eq!(
            tokens,
            vec![
                Token::Quoted("\"My name is \"".into()),
                Token::Quoted("Mike\" smith\"".into()),
            ]
        );
    }

    #[test]
    fn test_leading_trailing_whitespace_ignored() {
        assert_eq!(tokenize("  user.name  "), vec![Token::Bare("user.name".into())]);
    }

    proptest! {
        // A dotted path built from alphanumeric segments never contains
        // quotes or parens, so it must always come back as a single bare
        // token, regardless of how much padding whitespace surrounds it.
        #[test]
        fn test_alphanumeric_path_is_single_bare_token(
            segments in prop::collection::vec("[a-zA-Z][a-zA-Z0-9]{0,8}", 1..4),
            padding in " {0,3}",
        ) {
            let path = segments.join(".");
            let input = format!("{padding}{path}{padding}");
            let tokens = tokenize(&input);
            prop_assert_eq!(tokens, vec![Token::Bare(path)]);
        }
    }
}
