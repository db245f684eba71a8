use crate::{
    context::DataContext,
    date, number,
    error::EngineError,
    resolve::{resolve_numeric, resolve_value},
    token::Token,
};

/// Every helper name the dispatcher recognizes. Anything else is treated as
/// a value reference instead of a call.
pub const HELPER_NAMES: &[&str] = &[
    "lowercase",
    "uppercase",
    "replace",
    "dropFirst",
    "dropLast",
    "prefix",
    "suffix",
    "dateFormat",
    "date",
    "numberFormat",
];

pub fn is_helper(name: &str) -> bool {
    HELPER_NAMES.contains(&name)
}

/// Invoke a helper by name with its argument tokens (the helper name itself
/// is not included in `args`).
pub fn call(name: &str, args: &[Token], context: &DataContext) -> Result<String, EngineError> {
    match name {
        "lowercase" => case_helper(args, context, str::to_lowercase),
        "uppercase" => case_helper(args, context, str::to_uppercase),
        "replace" => replace(args, context),
        "dropFirst" => drop_edge(args, context, Edge::First),
        "dropLast" => drop_edge(args, context, Edge::Last),
        "prefix" => keep_edge(args, context, Edge::First),
        "suffix" => keep_edge(args, context, Edge::Last),
        "dateFormat" | "date" => date_format(args, context),
        "numberFormat" => number_format(args, context),
        other => unreachable!("dispatcher only routes known helper names, got {other}"),
    }
}

fn arity_error(
    where_: &'static str,
    expected: &'static str,
    actual: usize,
) -> EngineError {
    EngineError::InvalidArgumentNumber {
        where_,
        expected,
        actual,
    }
}

fn case_helper(
    args: &[Token],
    context: &DataContext,
    transform: impl Fn(&str) -> String,
) -> Result<String, EngineError> {
    let [s] = require_exact(args, "twoArgumentHelper", "2")?;
    Ok(transform(&resolve_value(s, context)?))
}

fn replace(args: &[Token], context: &DataContext) -> Result<String, EngineError> {
    let [s, old, new] = require_exact(args, "replaceHelper", "4")?;
    let old_interior = old.quoted_interior();
    let new_interior = new.quoted_interior();
    let (Some(old_interior), Some(new_interior)) = (old_interior, new_interior) else {
        return Err(EngineError::InvalidReplaceArguments(
            old.text(),
            new.text(),
        ));
    };
    let s = resolve_value(s, context)?;
    Ok(s.replace(old_interior, new_interior))
}

enum Edge {
    First,
    Last,
}

fn drop_edge(args: &[Token], context: &DataContext, edge: Edge) -> Result<String, EngineError> {
    let [s, n] = require_exact(args, "threeArgumentHelper", "3")?;
    let s = resolve_value(s, context)?;
    let n = parse_count(n, context)?;
    let chars: Vec<char> = s.chars().collect();
    let n = n.min(chars.len());
    let kept = match edge {
        Edge::First => &chars[n..],
        Edge::Last => &chars[..chars.len() - n],
    };
    Ok(kept.iter().collect())
}

fn keep_edge(args: &[Token], context: &DataContext, edge: Edge) -> Result<String, EngineError> {
    let [s, n] = require_exact(args, "threeArgumentHelper", "3")?;
    let s = resolve_value(s, context)?;
    let n = parse_count(n, context)?;
    let chars: Vec<char> = s.chars().collect();
    let n = n.min(chars.len());
    let kept = match edge {
        Edge::First => &chars[..n],
        Edge::Last => &chars[chars.len() - n..],
    };
    Ok(kept.iter().collect())
}

fn parse_count(token: &Token, context: &DataContext) -> Result<usize, EngineError> {
    let text = resolve_value(token, context)?;
    text.parse::<usize>()
        .map_err(|_| EngineError::ExpectedInteger("threeArgumentHelper"))
}

fn date_format(args: &[Token], context: &DataContext) -> Result<String, EngineError> {
    let [input, pattern] = require_exact(args, "formatDateHelper", "3")?;
    let Some(pattern_interior) = pattern.quoted_interior() else {
        return Err(EngineError::InvalidDate(pattern.text()));
    };
    let input_text = resolve_value(input, context)?;
    let dt = date::parse_input(&input_text)?;
    Ok(date::format(&dt, pattern_interior))
}

fn number_format(args: &[Token], context: &DataContext) -> Result<String, EngineError> {
    if args.is_empty() || args.len() > 2 {
        return Err(arity_error("formatNumberHelper", "2..3", args.len() + 1));
    }
    let value = resolve_numeric(&args[0], context)?;
    let style = match args.get(1) {
        Some(token) => number::Style::parse(&resolve_value(token, context)?),
        None => number::Style::Decimal,
    };
    Ok(number::format(value, style))
}

/// Require `args` to have exactly `N` elements, returning them as a fixed
/// array, or an arity error reporting the call's full length (helper name
/// included, hence `+ 1`).
fn require_exact<'a, const N: usize>(
    args: &'a [Token],
    where_: &'static str,
    expected: &'static str,
) -> Result<&'a [Token; N], EngineError> {
    args.try_into()
        .map_err(|_| arity_error(where_, expected, args.len() + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use rstest::rstest;

    fn context() -> DataContext {
        let mut data = IndexMap::new();
        data.insert("number".to_string(), 42.5.into());
        let mut context = DataContext::new();
        context.insert("data", data);
        context
    }

    #[test]
    fn test_lowercase_uppercase() {
        let ctx = DataContext::new();
        assert_eq!(
            call("uppercase", &[Token::quoted("mike")], &ctx).unwrap(),
            "MIKE"
        );
        assert_eq!(
            call("lowercase", &[Token::quoted("MIKE")], &ctx).unwrap(),
            "mike"
        );
    }

    #[test]
    fn test_replace_basic() {
        let ctx = DataContext::new();
        let args = [
            Token::quoted("jack reacher"),
            Token::quoted("jack"),
            Token::quoted("mike"),
        ];
        assert_eq!(call("replace", &args, &ctx).unwrap(), "mike reacher");
    }

    #[test]
    fn test_replace_requires_quoted_old_and_new() {
        let ctx = DataContext::new();
        let args = [
            Token::quoted("jack reacher"),
            Token::Bare("jack".into()),
            Token::quoted("mike"),
        ];
        let err = call("replace", &args, &ctx).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidReplaceArguments("jack".into(), "\"mike\"".into())
        );
    }

    #[rstest]
    #[case::drop_first("dropFirst", "mr. jack reacher", 4, "jack reacher")]
    #[case::drop_last("dropLast", "mr. jack reacher", 8, "mr. jack")]
    #[case::prefix("prefix", "mr. jack reacher", 3, "mr.")]
    #[case::suffix("suffix", "mr. jack reacher", 7, "reacher")]
    fn test_edge_helpers(
        #[case] name: &str,
        #[case] s: &str,
        #[case] n: usize,
        #[case] expected: &str,
    ) {
        let ctx = DataContext::new();
        let args = [Token::quoted(s), Token::Bare(n.to_string())];
        assert_eq!(call(name, &args, &ctx).unwrap(), expected);
    }

    #[test]
    fn test_drop_n_larger_than_length_returns_empty() {
        let ctx = DataContext::new();
        let args = [Token::quoted("hi"), Token::Bare("10".into())];
        assert_eq!(call("dropFirst", &args, &ctx).unwrap(), "");
    }

    #[test]
    fn test_date_format() {
        let ctx = DataContext::new();
        let args = [
            Token::quoted("2022-02-01 19:46:31+0000"),
            Token::quoted("EEEE, d"),
        ];
        assert_eq!(call("dateFormat", &args, &ctx).unwrap(), "Tuesday, 1");
    }

    #[test]
    fn test_number_format_currency_from_context() {
        let ctx = context();
        let args = [Token::Bare("data.number".into()), Token::quoted("currency")];
        assert_eq!(call("numberFormat", &args, &ctx).unwrap(), "$42.50");
    }

    #[test]
    fn test_number_format_default_style() {
        let ctx = DataContext::new();
        let args = [Token::quoted("0.92")];
        assert_eq!(call("numberFormat", &args, &ctx).unwrap(), "0.92");
    }

    #[test]
    fn test_number_format_arity() {
        let ctx = DataContext::new();
        let err = call("numberFormat", &[], &ctx).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidArgumentNumber {
                where_: "formatNumberHelper",
                expected: "2..3",
                actual: 1,
            }
        );
    }

    #[test]
    fn test_number_format_non_numeric_literal() {
        let ctx = DataContext::new();
        let err = call("numberFormat", &[Token::quoted("Twenty")], &ctx);
        weave_util::assert_err!(err, "For input string: \"Twenty\"");
    }

    #[test]
    fn test_drop_first_wrong_arity() {
        let ctx = DataContext::new();
        let err = call("dropFirst", &[Token::quoted("hi")], &ctx);
        weave_util::assert_err!(err, "threeArgumentHelper expected 3 arguments, got 2");
    }
}
