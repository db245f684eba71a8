use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Timelike};

use crate::error::EngineError;

/// Input formats tried, in order, when parsing a `dateFormat`/`date`
/// argument. The first successful parse wins.
const INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a date/time string, trying each of [INPUT_FORMATS] in turn. On
/// total failure, returns an [EngineError::InvalidDate] whose argument has
/// had every non-alphanumeric separator stripped, per the reference
/// behavior.
pub fn parse_input(input: &str) -> Result<DateTime<FixedOffset>, EngineError> {
    for format in INPUT_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(input, format) {
            return Ok(dt);
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            if let Some(local) = Local.from_local_datetime(&naive).single() {
                return Ok(local.fixed_offset());
            }
        }
    }
    Err(EngineError::InvalidDate(strip_separators(input)))
}

fn strip_separators(input: &str) -> String {
    input.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// `en-CA` weekday abbreviations, trailing period included.
const WEEKDAYS_SHORT: [&str; 7] =
    ["Mon.", "Tue.", "Wed.", "Thu.", "Fri.", "Sat.", "Sun."];
const WEEKDAYS_LONG: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];
/// Month abbreviations take a trailing period except `May`, which is already
/// three letters.
const MONTHS_SHORT: [&str; 12] = [
    "Jan.", "Feb.", "Mar.", "Apr.", "May", "Jun.", "Jul.", "Aug.", "Sep.", "Oct.",
    "Nov.", "Dec.",
];
const MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a parsed instant per a (small) subset of Unicode date pattern
/// tokens, rendered in the `en-CA` locale. Only the tokens the reference
/// helper is documented to support are implemented.
pub fn format(dt: &DateTime<FixedOffset>, pattern: &str) -> String {
    let mut out = String::new();
    let chars: Vec<char> = pattern.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_alphabetic() {
            let mut run_len = 1;
            while i + run_len < chars.len() && chars[i + run_len] == c {
                run_len += 1;
            }
            out.push_str(&render_token(dt, c, run_len));
            i += run_len;
        } else {
            out.push(c);
            i += 1;
        }
    }
    out
}

fn render_token(dt: &DateTime<FixedOffset>, c: char, count: usize) -> String {
    use chrono::Datelike;
    let weekday_idx = dt.weekday().num_days_from_monday() as usize;
    let month_idx = dt.month0() as usize;
    match c {
        'E' => {
            if count >= 4 {
                WEEKDAYS_LONG[weekday_idx].to_string()
            } else {
                WEEKDAYS_SHORT[weekday_idx].to_string()
            }
        }
        'M' => match count {
            1 => dt.month().to_string(),
            2 => format!("{:02}", dt.month()),
            3 => MONTHS_SHORT[month_idx].to_string(),
            _ => MONTHS_LONG[month_idx].to_string(),
        },
        'd' => {
            if count >= 2 {
                format!("{:02}", dt.day())
            } else {
                dt.day().to_string()
            }
        }
        'y' => {
            if count >= 4 {
                dt.year().to_string()
            } else {
                format!("{:02}", dt.year() % 100)
            }
        }
        'H' => {
            if count >= 2 {
                format!("{:02}", dt.hour())
            } else {
                dt.hour().to_string()
            }
        }
        'h' => {
            let hour12 = to_hour12(dt.hour());
            if count >= 2 {
                format!("{:02}", hour12)
            } else {
                hour12.to_string()
            }
        }
        'm' => {
            if count >= 2 {
                format!("{:02}", dt.minute())
            } else {
                dt.minute().to_string()
            }
        }
        's' => {
            if count >= 2 {
                format!("{:02}", dt.second())
            } else {
                dt.second().to_string()
            }
        }
        'a' => {
            if dt.hour() < 12 { "a.m." } else { "p.m." }.to_string()
        }
        _ => std::iter::repeat(c).take(count).collect(),
    }
}

fn to_hour12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}
