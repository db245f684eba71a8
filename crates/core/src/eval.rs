use crate::{
    context::DataContext,
    error::EngineError,
    helpers,
    resolve::resolve_value,
    token::Token,
};

/// Evaluate a fully tokenized `{{ ... }}` expression to its string result.
/// Repeatedly reduces the innermost parenthesised group to a single quoted
/// token, then dispatches the flat remainder.
pub fn eval_expression(
    tokens: &[Token],
    context: &DataContext,
) -> Result<String, EngineError> {
    let reduced = reduce(tokens.to_vec(), context)?;
    dispatch(&reduced, context)
}

/// Repeatedly locate the innermost matched paren pair, evaluate its
/// contents, and splice the result back in as a single quoted token. Any
/// paren left without a partner is left in place, where it surfaces
/// downstream as an arity mismatch rather than a dedicated paren error.
fn reduce(mut tokens: Vec<Token>, context: &DataContext) -> Result<Vec<Token>, EngineError> {
    loop {
        let Some((open, close)) = find_matched_pair(&tokens) else {
            return Ok(tokens);
        };

        let inner = &tokens[open + 1..close];
        let value = dispatch(&reduce(inner.to_vec(), context)?, context)?;

        tokens.splice(open..=close, [Token::quoted(value)]);
    }
}

/// Scan left to right with a stack of open-paren positions. The first
/// `RParen` that finds a stack entry to pop closes a matched pair - one that
/// is innermost because nothing between its `LParen` and it can itself
/// contain an unpopped open. A stray `RParen` (empty stack) is skipped
/// rather than treated as a failure, so a leading unmatched close doesn't
/// block reduction of a complete pair later in the stream. Any `LParen`
/// never popped is a stray left for the caller to see.
fn find_matched_pair(tokens: &[Token]) -> Option<(usize, usize)> {
    let mut stack = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => stack.push(i),
            Token::RParen => {
                if let Some(open) = stack.pop() {
                    return Some((open, i));
                }
            }
            _ => {}
        }
    }
    None
}

/// Dispatch a flat, fully-reduced token stream: route to a known helper by
/// leading name, or resolve a lone token as a value.
fn dispatch(tokens: &[Token], context: &DataContext) -> Result<String, EngineError> {
    match tokens {
        [] => Ok(String::new()),
        [Token::Bare(name), rest @ ..] if helpers::is_helper(name) => {
            helpers::call(name, rest, context)
        }
        [token, ..] => resolve_value(token, context),
    }
}
