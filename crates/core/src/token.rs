use derive_more::Display;

/// A single lexical unit inside a `{{ ... }}` expression.
///
/// Quoted and bare tokens are kept distinct all the way through the
/// pipeline, because several helpers (`replace`, `dateFormat`) need to know
/// whether an argument was originally quoted in the source.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Token {
    #[display("(")]
    LParen,
    #[display(")")]
    RParen,
    /// Textual form includes the surrounding quotes, e.g. the token for
    /// `"foo"` is the four characters `"foo"`.
    #[display("{_0}")]
    Quoted(String),
    /// An unquoted identifier, dotted path, number, or helper name.
    #[display("{_0}")]
    Bare(String),
}

impl Token {
    pub fn quoted(interior: impl Into<String>) -> Self {
        Self::Quoted(format!("\"{}\"", interior.into()))
    }

    /// The token's textual form as it would have appeared in the source,
    /// quotes included for [Token::Quoted].
    pub fn text(&self) -> String {
        self.to_string()
    }

    /// The interior of a quoted token, with the surrounding quotes stripped.
    /// `None` for any other token kind.
    pub fn quoted_interior(&self) -> Option<&str> {
        match self {
            Self::Quoted(s) => s.strip_prefix('"')?.strip_suffix('"'),
            _ => None,
        }
    }

}
