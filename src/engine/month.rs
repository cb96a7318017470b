//! Calendar month resolution for month-scoped queries

/// Calendar month selector, year-agnostic.
///
/// `index()` is zero-based to line up with `chrono::Datelike::month0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Zero-based month index (January = 0, December = 11)
    pub fn index(&self) -> u32 {
        match self {
            Month::January => 0,
            Month::February => 1,
            Month::March => 2,
            Month::April => 3,
            Month::May => 4,
            Month::June => 5,
            Month::July => 6,
            Month::August => 7,
            Month::September => 8,
            Month::October => 9,
            Month::November => 10,
            Month::December => 11,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
            Month::July => "july",
            Month::August => "august",
            Month::September => "september",
            Month::October => "october",
            Month::November => "november",
            Month::December => "december",
        }
    }

    /// Resolve a human-entered month name.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Anything that is not one of the twelve English month names resolves
    /// to `None`; callers reject that before touching the store.
    pub fn resolve(name: &str) -> Option<Month> {
        match name.trim().to_lowercase().as_str() {
            "january" => Some(Month::January),
            "february" => Some(Month::February),
            "march" => Some(Month::March),
            "april" => Some(Month::April),
            "may" => Some(Month::May),
            "june" => Some(Month::June),
            "july" => Some(Month::July),
            "august" => Some(Month::August),
            "september" => Some(Month::September),
            "october" => Some(Month::October),
            "november" => Some(Month::November),
            "december" => Some(Month::December),
            _ => None,
        }
    }

    pub fn all() -> [Month; 12] {
        [
            Month::January,
            Month::February,
            Month::March,
            Month::April,
            Month::May,
            Month::June,
            Month::July,
            Month::August,
            Month::September,
            Month::October,
            Month::November,
            Month::December,
        ]
    }
}
