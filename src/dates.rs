//! Military-style date formatting used throughout Page 11 entries.

use time::{Date, Month};

use crate::error::Error;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// `DD Mon YYYY`, e.g. `05 Jan 2025`.
pub fn format_military(date: Date) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        MONTHS[date.month() as usize - 1],
        date.year()
    )
}

/// `YYYYMMDD`, used for filename suffixes.
pub fn format_numeric(date: Date) -> String {
    format!(
        "{:04}{:02}{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

/// Parse the `YYYY-MM-DD` form taken on the command line.
pub fn parse_input(s: &str) -> Result<Date, Error> {
    let mut parts = s.splitn(3, '-');
    let (y, m, d) = match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d)) => (y, m, d),
        _ => return Err(Error::BadDate(s.to_string())),
    };
    let year: i32 = y.parse().map_err(|_| Error::BadDate(s.to_string()))?;
    let month: u8 = m.parse().map_err(|_| Error::BadDate(s.to_string()))?;
    let day: u8 = d.parse().map_err(|_| Error::BadDate(s.to_string()))?;
    let month = Month::try_from(month).map_err(|_| Error::BadDate(s.to_string()))?;
    Date::from_calendar_date(year, month, day).map_err(|_| Error::BadDate(s.to_string()))
}
