//! Date token normalization.
//!
//! Formats are tried in a fixed order and the first that fits wins. Month-first
//! layouts come before day-first ones, so `03/04/2024` is always March 4th.
//!
//! The year-first layouts only apply to tokens handed in directly. The line
//! scanner's date pattern takes `23-07-04` out of `2023-07-04`, which then
//! reads as DD-MM-YY.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldOrder {
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
    MonthDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearWidth {
    Four,
    Two,
}

/// One accepted date layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    pub name: &'static str,
    order: FieldOrder,
    separator: char,
    year: Option<YearWidth>,
}

const fn format(
    name: &'static str,
    order: FieldOrder,
    separator: char,
    year: Option<YearWidth>,
) -> DateFormat {
    DateFormat {
        name,
        order,
        separator,
        year,
    }
}

/// Priority order of accepted layouts
pub static DATE_FORMATS: [DateFormat; 12] = [
    format("MM/DD/YYYY", FieldOrder::MonthDayYear, '/', Some(YearWidth::Four)),
    format("MM-DD-YYYY", FieldOrder::MonthDayYear, '-', Some(YearWidth::Four)),
    format("MM/DD/YY", FieldOrder::MonthDayYear, '/', Some(YearWidth::Two)),
    format("MM-DD-YY", FieldOrder::MonthDayYear, '-', Some(YearWidth::Two)),
    format("DD/MM/YYYY", FieldOrder::DayMonthYear, '/', Some(YearWidth::Four)),
    format("DD-MM-YYYY", FieldOrder::DayMonthYear, '-', Some(YearWidth::Four)),
    format("DD/MM/YY", FieldOrder::DayMonthYear, '/', Some(YearWidth::Two)),
    format("DD-MM-YY", FieldOrder::DayMonthYear, '-', Some(YearWidth::Two)),
    format("YYYY-MM-DD", FieldOrder::YearMonthDay, '-', Some(YearWidth::Four)),
    format("YYYY/MM/DD", FieldOrder::YearMonthDay, '/', Some(YearWidth::Four)),
    format("MM/DD", FieldOrder::MonthDay, '/', None),
    format("MM-DD", FieldOrder::MonthDay, '-', None),
];

impl DateFormat {
    pub fn has_year(&self) -> bool {
        self.year.is_some()
    }

    /// Parse `token` in this layout; `fallback_year` fills year-less layouts.
    pub fn parse(&self, token: &str, fallback_year: i32) -> Option<NaiveDate> {
        let parts: Vec<&str> = token.split(self.separator).collect();
        let expected = if self.year.is_some() { 3 } else { 2 };
        if parts.len() != expected
            || parts
                .iter()
                .any(|p| p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()))
        {
            return None;
        }

        let (year, month, day) = match self.order {
            FieldOrder::MonthDayYear => (parts[2], parts[0], parts[1]),
            FieldOrder::DayMonthYear => (parts[2], parts[1], parts[0]),
            FieldOrder::YearMonthDay => (parts[0], parts[1], parts[2]),
            FieldOrder::MonthDay => ("", parts[0], parts[1]),
        };

        let month = short_field(month)?;
        let day = short_field(day)?;
        let year = match self.year {
            Some(YearWidth::Four) if year.len() == 4 => year.parse().ok()?,
            Some(YearWidth::Two) if year.len() == 2 => pivot_two_digit_year(year.parse().ok()?),
            Some(_) => return None,
            None => fallback_year,
        };

        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// Month or day: one or two digits
fn short_field(s: &str) -> Option<u32> {
    if s.len() > 2 {
        return None;
    }
    s.parse().ok()
}

/// `00..=68` -> 2000s, `69..=99` -> 1900s
fn pivot_two_digit_year(yy: i32) -> i32 {
    if yy <= 68 { 2000 + yy } else { 1900 + yy }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateNormalizer {
    fallback_year: i32,
}

impl DateNormalizer {
    pub fn new(fallback_year: i32) -> Self {
        Self { fallback_year }
    }

    /// First layout that parses `token`, with the resulting date.
    pub fn parse_with_format(&self, token: &str) -> Option<(NaiveDate, &'static DateFormat)> {
        let token = token.trim();
        DATE_FORMATS
            .iter()
            .find_map(|f| f.parse(token, self.fallback_year).map(|d| (d, f)))
    }

    pub fn normalize(&self, token: &str) -> Option<NaiveDate> {
        self.parse_with_format(token).map(|(d, _)| d)
    }
}
