//! Date helper functions

use chrono::NaiveDate;

/// Moment.js tokens and their chrono equivalents, longest first
const TOKENS: [(&str, &str); 10] = [
    ("YYYY", "%Y"),
    ("MMMM", "%B"),
    ("dddd", "%A"),
    ("MMM", "%b"),
    ("ddd", "%a"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("M", "%-m"),
    ("D", "%-d"),
];

/// Format a date using a Moment.js-style format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "M/D/YYYY") // -> "1/3/2025"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    date.format(&moment_to_chrono_format(format)).to_string()
}

/// Format as "January 3, 2025"
pub fn full_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Convert a Moment.js format to a chrono format, one token at a time
fn moment_to_chrono_format(format: &str) -> String {
    let mut result = String::with_capacity(format.len() * 2);
    let mut rest = format;

    'outer: while !rest.is_empty() {
        for (from, to) in TOKENS {
            if let Some(after) = rest.strip_prefix(from) {
                result.push_str(to);
                rest = after;
                continue 'outer;
            }
        }

        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            if c == '%' {
                result.push_str("%%");
            } else {
                result.push(c);
            }
        }
        rest = chars.as_str();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan3() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&jan3(), "YYYY-MM-DD"), "2025-01-03");
        assert_eq!(format_date(&jan3(), "M/D/YYYY"), "1/3/2025");
        assert_eq!(format_date(&jan3(), "MMM D, YYYY"), "Jan 3, 2025");
        assert_eq!(format_date(&jan3(), "dddd"), "Friday");
    }

    #[test]
    fn test_full_date() {
        assert_eq!(full_date(&jan3()), "January 3, 2025");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("M/D/YY"), "%-m/%-d/%y");
        assert_eq!(moment_to_chrono_format("100%"), "100%%");
    }
}
