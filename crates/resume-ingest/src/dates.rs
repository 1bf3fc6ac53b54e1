//! Heterogeneous date text → canonical `YYYY-MM-DD`.
//!
//! Bundle files carry dates in whatever shape the exporting service used:
//! "Jan 2020", "2020", full dates in several conventions, or free text
//! like "N/A". Conversion applies an ordered set of rules; text matching
//! none of them becomes an empty date rather than an error.

use chrono::NaiveDate;

/// Convert date text to the canonical representation.
///
/// Rules, in order:
/// 1. month + year ("Jan 2020", "January 2020") → first of that month;
/// 2. year only ("2020") → January 1st of that year;
/// 3. a general parseable-date fallback over common full-date formats;
/// 4. anything else → empty string.
pub fn normalize_date(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if let Some(date) = month_year(trimmed) {
        return date;
    }
    if let Some(date) = year_only(trimmed) {
        return date;
    }
    parseable_fallback(trimmed).unwrap_or_default()
}

fn month_year(text: &str) -> Option<String> {
    let mut parts = text.split_whitespace();
    let month = parts.next()?;
    let year = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    let month = month_number(month)?;
    let year = parse_year(year)?;
    Some(format!("{year:04}-{month:02}-01"))
}

fn year_only(text: &str) -> Option<String> {
    let year = parse_year(text)?;
    Some(format!("{year:04}-01-01"))
}

fn parse_year(text: &str) -> Option<u32> {
    if text.len() == 4 && text.bytes().all(|byte| byte.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}

fn month_number(name: &str) -> Option<u32> {
    const SHORT: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];
    const FULL: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];
    let lower = name.trim_end_matches('.').to_lowercase();
    if lower == "sept" {
        return Some(9);
    }
    SHORT
        .iter()
        .position(|month| *month == lower)
        .or_else(|| FULL.iter().position(|month| *month == lower))
        .map(|index| index as u32 + 1)
}

fn parseable_fallback(text: &str) -> Option<String> {
    const FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%b %d, %Y", "%B %d, %Y"];
    FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(text, format)
            .ok()
            .map(|date| date.format("%Y-%m-%d").to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_year_forms() {
        assert_eq!(normalize_date("Jan 2020"), "2020-01-01");
        assert_eq!(normalize_date("January 2020"), "2020-01-01");
        assert_eq!(normalize_date("sep 1999"), "1999-09-01");
        assert_eq!(normalize_date("Sept 2021"), "2021-09-01");
        assert_eq!(normalize_date("Dec. 2005"), "2005-12-01");
    }

    #[test]
    fn year_only_form() {
        assert_eq!(normalize_date("2020"), "2020-01-01");
        assert_eq!(normalize_date(" 1987 "), "1987-01-01");
    }

    #[test]
    fn full_date_fallbacks() {
        assert_eq!(normalize_date("2020-05-17"), "2020-05-17");
        assert_eq!(normalize_date("2020/05/17"), "2020-05-17");
        assert_eq!(normalize_date("05/17/2020"), "2020-05-17");
        assert_eq!(normalize_date("May 17, 2020"), "2020-05-17");
    }

    #[test]
    fn unmatched_text_becomes_empty() {
        assert_eq!(normalize_date(""), "");
        assert_eq!(normalize_date("   "), "");
        assert_eq!(normalize_date("N/A"), "");
        assert_eq!(normalize_date("Present"), "");
        assert_eq!(normalize_date("20"), "");
        assert_eq!(normalize_date("Febtober 2020"), "");
    }
}
