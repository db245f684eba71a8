use crate::context::round_half_up;

/// Supported `numberFormat` styles. An unrecognized style string falls back
/// to `Decimal` (the default), rather than erroring.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Style {
    None,
    Decimal,
    Currency,
    Percent,
}

impl Style {
    pub fn parse(s: &str) -> Self {
        match s {
            "none" => Self::None,
            "currency" => Self::Currency,
            "percent" => Self::Percent,
            _ => Self::Decimal,
        }
    }
}

/// Format a raw numeric value under the `en-CA` locale, per [Style].
pub fn format(value: f64, style: Style) -> String {
    match style {
        Style::None => round_half_up(value).to_string(),
        Style::Decimal => format_decimal(value),
        Style::Currency => format!("${:.2}", value),
        Style::Percent => format!("{}%", round_half_up(value * 100.0)),
    }
}

/// Up to 3 fractional digits, trailing zeros trimmed.
fn format_decimal(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let mut s = format!("{rounded:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
