use crate::{
    context::{DataContext, TOP_LEVEL_KEYWORDS, round_half_up},
    error::EngineError,
    token::Token,
};

/// Resolve a single token to its string value.
///
/// - A quoted token resolves to its interior, unchanged.
/// - A bare token that parses directly as a number (e.g. the `4` in
///   `dropFirst s 4`) resolves to its own text - it isn't a path at all.
/// - Any other bare token is treated as a dotted path (`data.user.name`);
///   the first segment must be one of the known top-level keywords and
///   must be present in the context. Numbers found this way render via the
///   generic half-up rounding rule for doubles.
///
/// This is the rule used everywhere EXCEPT `numberFormat`'s first argument,
/// which needs the raw, unrounded numeric value - see [resolve_numeric].
pub fn resolve_value(token: &Token, context: &DataContext) -> Result<String, EngineError> {
    if let Some(interior) = token.quoted_interior() {
        return Ok(interior.to_string());
    }

    let path = token.text();
    if let Ok(n) = path.parse::<i64>() {
        return Ok(n.to_string());
    }
    if let Ok(f) = path.parse::<f64>() {
        return Ok(round_half_up(f).to_string());
    }
    resolve_path(&path, context)
}

fn resolve_path(path: &str, context: &DataContext) -> Result<String, EngineError> {
    let first_segment = path.split('.').next().unwrap_or(path);
    if !TOP_LEVEL_KEYWORDS.contains(&first_segment) {
        return Err(EngineError::UnexpectedValue(path.to_string()));
    }

    context
        .resolve(path)
        .and_then(|value| value.stringify())
        .ok_or_else(|| EngineError::UnexpectedValue(path.to_string()))
}

/// Resolve a token to its raw numeric value, without the half-up rounding
/// the generic resolver applies to doubles. Used for `numberFormat`'s value
/// argument: `numberFormat data.number "currency"` needs to see
/// `data.number`'s full fractional precision, not a pre-rounded integer
/// string.
///
/// Falls back to parsing the token's own text as a number when it isn't a
/// resolvable path (e.g. a literal like `numberFormat "0.92" "currency"`).
pub fn resolve_numeric(token: &Token, context: &DataContext) -> Result<f64, EngineError> {
    let text = if let Some(interior) = token.quoted_interior() {
        interior.to_string()
    } else {
        let path = token.text();
        let first_segment = path.split('.').next().unwrap_or(&path);
        if TOP_LEVEL_KEYWORDS.contains(&first_segment) {
            if let Some(value) = context.resolve(&path) {
                if let Some(raw) = value.as_f64() {
                    return Ok(raw);
                }
                if let Some(s) = value.stringify() {
                    return s
                        .parse::<f64>()
                        .map_err(|_| EngineError::InvalidNumber(s));
                }
            }
        }
        path
    };

    text.parse::<f64>()
        .map_err(|_| EngineError::InvalidNumber(text))
}
