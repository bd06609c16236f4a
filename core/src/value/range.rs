//! Parsing of DICOM dates and date ranges, as needed for range matching.
//!
//! A date is either `YYYYMMDD` or `YYYY.MM.DD`.
//! A range is two optional dates separated by a single hyphen,
//! where a missing start or end leaves that side open.
use chrono::NaiveDate;
use snafu::{ensure, Backtrace, OptionExt, Snafu};
use std::fmt;
use std::str::FromStr;

/// The part of a date or date range value in which a parse error occurred.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A plain date, with no range separator
    Date,
    /// The date before the range separator
    Start,
    /// The date after the range separator
    End,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Segment::Date => f.write_str("date"),
            Segment::Start => f.write_str("range start"),
            Segment::End => f.write_str("range end"),
        }
    }
}

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Invalid {} `{}`: expected 8 digits or YYYY.MM.DD, got {} characters", segment, value, len))]
    DigitCount {
        segment: Segment,
        value: String,
        len: usize,
        backtrace: Backtrace,
    },
    #[snafu(display("Invalid {} `{}`: `{}` is not a digit", segment, value, character))]
    NonDigit {
        segment: Segment,
        value: String,
        character: char,
        backtrace: Backtrace,
    },
    #[snafu(display("Invalid {} `{}`: date components must be separated by '.' at fixed positions", segment, value))]
    Separator {
        segment: Segment,
        value: String,
        backtrace: Backtrace,
    },
    #[snafu(display("Invalid {} `{}`: no such calendar date", segment, value))]
    CalendarDate {
        segment: Segment,
        value: String,
        backtrace: Backtrace,
    },
    #[snafu(display("Date range can contain at most one '-', {} were found", count))]
    SeparatorCount { count: usize, backtrace: Backtrace },
    #[snafu(display("Date range has neither start nor end"))]
    EmptyRange { backtrace: Backtrace },
    #[snafu(display("End {} is before start {}", end, start))]
    RangeInversion {
        start: Date,
        end: Date,
        backtrace: Backtrace,
    },
}

impl Error {
    /// The segment of the value which failed to parse,
    /// if the error concerns a single segment.
    pub fn segment(&self) -> Option<Segment> {
        match self {
            Error::DigitCount { segment, .. }
            | Error::NonDigit { segment, .. }
            | Error::Separator { segment, .. }
            | Error::CalendarDate { segment, .. } => Some(*segment),
            _ => None,
        }
    }
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// A calendar date.
///
/// Dates are ordered chronologically.
/// The year [`Date::INVALID_YEAR`] marks the end of a parsed plain date,
/// telling it apart from a range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    /// The year, from 0 to 9999
    pub year: i32,
    /// The month, from 1 to 12
    pub month: u32,
    /// The day of the month, from 1 to 31
    pub day: u32,
}

impl Date {
    /// The year of a date which is not part of a true range.
    pub const INVALID_YEAR: i32 = -1;

    /// The earliest representable date, the start of a range with no lower bound.
    pub const MIN: Date = Date {
        year: 0,
        month: 1,
        day: 1,
    };

    /// The latest representable date, the end of a range with no upper bound.
    pub const MAX: Date = Date {
        year: 9999,
        month: 12,
        day: 31,
    };

    /// Create a date, checking that it exists in the calendar.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Date> {
        NaiveDate::from_ymd_opt(year, month, day)?;
        Some(Date { year, month, day })
    }

    /// Whether this date carries the invalid year marker.
    pub fn is_invalid(&self) -> bool {
        self.year == Date::INVALID_YEAR
    }
}

/// Dates are displayed in ISO 8601 form, `YYYY-MM-DD`.
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parse a plain DICOM date, with no range separator.
impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_segment(s, Segment::Date)
    }
}

/// An inclusive range of dates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Create a range from its bounds, which must not be inverted.
    pub fn new(start: Date, end: Date) -> Result<DateRange> {
        ensure!(start <= end, RangeInversionSnafu { start, end });
        Ok(DateRange { start, end })
    }

    /// Create a range holding a single date.
    pub fn single(date: Date) -> DateRange {
        DateRange {
            start: date,
            end: date,
        }
    }

    /// The first date of the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// The last date of the range.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Whether the date falls within the range, bounds included.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parse a DICOM date or date range.
///
/// Returns the start and end of the range.
///
/// - `D1-D2` yields `(D1, D2)`;
/// - `-D` yields `(Date::MIN, D)`;
/// - `D-` yields `(D, Date::MAX)`;
/// - a plain date `D` yields `(D, E)`,
///   where `E` is `D` with its year set to [`Date::INVALID_YEAR`].
///
/// ```
/// # use dicomset_core::value::range::{parse_date, Date};
/// let (start, end) = parse_date("20170927-20170929")?;
/// assert_eq!(start.to_string(), "2017-09-27");
/// assert_eq!(end.to_string(), "2017-09-29");
///
/// let (start, end) = parse_date("2017.02.03")?;
/// assert_eq!(start.to_string(), "2017-02-03");
/// assert_eq!(end.year, Date::INVALID_YEAR);
/// # Ok::<(), dicomset_core::value::range::Error>(())
/// ```
pub fn parse_date(value: &str) -> Result<(Date, Date)> {
    let count = value.matches('-').count();
    ensure!(count <= 1, SeparatorCountSnafu { count });

    match value.split_once('-') {
        None => {
            let date = parse_segment(value, Segment::Date)?;
            let end = Date {
                year: Date::INVALID_YEAR,
                ..date
            };
            Ok((date, end))
        }
        Some(("", "")) => EmptyRangeSnafu.fail(),
        Some(("", end)) => Ok((Date::MIN, parse_segment(end, Segment::End)?)),
        Some((start, "")) => Ok((parse_segment(start, Segment::Start)?, Date::MAX)),
        Some((start, end)) => {
            let start = parse_segment(start, Segment::Start)?;
            let end = parse_segment(end, Segment::End)?;
            ensure!(start <= end, RangeInversionSnafu { start, end });
            Ok((start, end))
        }
    }
}

/// Parse a DICOM date or date range into a [`DateRange`].
///
/// A plain date becomes a range of that single date.
pub fn parse_date_range(value: &str) -> Result<DateRange> {
    let (start, end) = parse_date(value)?;
    if end.is_invalid() {
        Ok(DateRange::single(start))
    } else {
        Ok(DateRange { start, end })
    }
}

fn parse_segment(value: &str, segment: Segment) -> Result<Date> {
    let bytes = value.as_bytes();
    let digits: Vec<u8> = match bytes.len() {
        8 => bytes.to_vec(),
        10 => {
            ensure!(
                bytes[4] == b'.' && bytes[7] == b'.',
                SeparatorSnafu { segment, value }
            );
            bytes[0..4]
                .iter()
                .chain(&bytes[5..7])
                .chain(&bytes[8..10])
                .copied()
                .collect()
        }
        _ => {
            return DigitCountSnafu {
                segment,
                value,
                len: value.chars().count(),
            }
            .fail()
        }
    };

    if let Some(b) = digits.iter().find(|b| !b.is_ascii_digit()) {
        let character = if b.is_ascii() {
            char::from(*b)
        } else {
            char::REPLACEMENT_CHARACTER
        };
        return NonDigitSnafu {
            segment,
            value,
            character,
        }
        .fail();
    }

    let number = |range: std::ops::Range<usize>| {
        digits[range]
            .iter()
            .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'))
    };
    let year = number(0..4) as i32;
    let month = number(4..6);
    let day = number(6..8);
    Date::from_ymd(year, month, day).context(CalendarDateSnafu { segment, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ranges() {
        let cases = [
            ("20170927-20170929", "2017-09-27", "2017-09-29"),
            ("-20170929", "0000-01-01", "2017-09-29"),
            ("20170927-", "2017-09-27", "9999-12-31"),
            ("2017.09.27-20170929", "2017-09-27", "2017-09-29"),
        ];
        for (value, start, end) in cases {
            let (s, e) = parse_date(value).unwrap();
            assert_eq!(s.to_string(), start, "start of {}", value);
            assert_eq!(e.to_string(), end, "end of {}", value);
        }
    }

    #[test]
    fn parse_single_dates() {
        for (value, iso) in [("20170101", "2017-01-01"), ("2017.02.03", "2017-02-03")] {
            let (s, e) = parse_date(value).unwrap();
            assert_eq!(s.to_string(), iso);
            assert_eq!(e.year, Date::INVALID_YEAR);
            assert!(e.is_invalid());
        }
    }

    #[test]
    fn bad_dates_fail() {
        for value in ["2017.0101", "2017.01", "2017X01.02", "201X0405"] {
            let err = parse_date(value).unwrap_err();
            assert_eq!(err.segment(), Some(Segment::Date), "{}", value);
        }
        assert!(matches!(
            parse_date("2017.0101"),
            Err(Error::DigitCount { len: 9, .. })
        ));
        assert!(matches!(
            parse_date("2017X01.02"),
            Err(Error::Separator { .. })
        ));
        assert!(matches!(
            parse_date("201X0405"),
            Err(Error::NonDigit { character: 'X', .. })
        ));
    }

    #[test]
    fn range_errors_identify_segment() {
        let err = parse_date("2017012-20170101").unwrap_err();
        assert_eq!(err.segment(), Some(Segment::Start));
        let err = parse_date("20170101-2017010A").unwrap_err();
        assert_eq!(err.segment(), Some(Segment::End));
        let err = parse_date("20170101-20170231").unwrap_err();
        assert!(matches!(
            err,
            Error::CalendarDate {
                segment: Segment::End,
                ..
            }
        ));
        assert!(matches!(
            parse_date("20170101-20170102-"),
            Err(Error::SeparatorCount { count: 2, .. })
        ));
        assert!(matches!(parse_date("-"), Err(Error::EmptyRange { .. })));
        assert!(matches!(
            parse_date("20170102-20170101"),
            Err(Error::RangeInversion { .. })
        ));
    }

    #[test]
    fn range_containment() {
        let range = parse_date_range("20170927-20170929").unwrap();
        assert!(range.contains("20170927".parse().unwrap()));
        assert!(range.contains("20170929".parse().unwrap()));
        assert!(!range.contains("20170930".parse().unwrap()));

        let single = parse_date_range("20170101").unwrap();
        assert_eq!(single.start(), single.end());
        assert!(single.contains(Date::from_ymd(2017, 1, 1).unwrap()));
        assert!(!single.contains(Date::from_ymd(2017, 1, 2).unwrap()));

        let open = parse_date_range("-20000101").unwrap();
        assert!(open.contains(Date::from_ymd(1901, 6, 30).unwrap()));
    }
}
