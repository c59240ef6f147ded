//! Card expiry checks.
//!
//! A card is good through the last day of its expiry month. The payment API
//! reports `exp_month` and `exp_year` as separate integers; [`ExpiryDate`]
//! takes them in that shape.
//!
//! # Example
//!
//! ```
//! use card_check::expiry::ExpiryDate;
//!
//! let expiry = ExpiryDate::new(5, 2030).unwrap();
//! assert!(!expiry.is_expired_at(2030, 5));
//! assert!(expiry.is_expired_at(2030, 6));
//! ```

use std::fmt;

use chrono::{Datelike, Utc};

/// A card's expiry month and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExpiryDate {
    // Field order gives chronological ordering.
    year: u16,
    month: u8,
}

/// Errors building an [`ExpiryDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryError {
    /// Month is out of range (must be 1-12).
    InvalidMonth(u32),
    /// Year does not fit a four-digit calendar year.
    InvalidYear(u32),
}

impl fmt::Display for ExpiryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "invalid month {}: must be 1-12", m),
            Self::InvalidYear(y) => write!(f, "invalid expiry year {}", y),
        }
    }
}

impl std::error::Error for ExpiryError {}

impl ExpiryDate {
    /// Creates an expiry date.
    ///
    /// Two-digit years (`0..=99`) are read as `20YY`.
    ///
    /// # Errors
    ///
    /// [`ExpiryError::InvalidMonth`] unless `month` is 1-12,
    /// [`ExpiryError::InvalidYear`] for years above 9999.
    pub fn new(month: u32, year: u32) -> Result<Self, ExpiryError> {
        if !(1..=12).contains(&month) {
            return Err(ExpiryError::InvalidMonth(month));
        }

        let year = match year {
            0..=99 => 2000 + year,
            100..=9999 => year,
            _ => return Err(ExpiryError::InvalidYear(year)),
        };

        Ok(Self {
            year: year as u16,
            month: month as u8,
        })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns true if the card has expired as of the given year and month.
    pub fn is_expired_at(&self, year: i32, month: u32) -> bool {
        (self.year as i32, self.month as u32) < (year, month)
    }

    /// Returns true if the card has expired as of the current UTC date.
    pub fn is_expired(&self) -> bool {
        let today = Utc::now().date_naive();
        self.is_expired_at(today.year(), today.month())
    }

    /// Whole months from the given year and month until expiry; 0 once expired.
    pub fn months_until_expiry_at(&self, year: i32, month: u32) -> u32 {
        let expiry = self.year as i64 * 12 + self.month as i64;
        let current = year as i64 * 12 + month as i64;
        (expiry - current).max(0) as u32
    }

    /// Whole months from today (UTC) until expiry.
    pub fn months_until_expiry(&self) -> u32 {
        let today = Utc::now().date_naive();
        self.months_until_expiry_at(today.year(), today.month())
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let expiry = ExpiryDate::new(12, 2030).unwrap();
        assert_eq!(expiry.month(), 12);
        assert_eq!(expiry.year(), 2030);
    }

    #[test]
    fn test_two_digit_year() {
        assert_eq!(ExpiryDate::new(1, 30).unwrap().year(), 2030);
        assert_eq!(ExpiryDate::new(1, 0).unwrap().year(), 2000);
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(ExpiryDate::new(0, 2030), Err(ExpiryError::InvalidMonth(0)));
        assert_eq!(ExpiryDate::new(13, 2030), Err(ExpiryError::InvalidMonth(13)));
    }

    #[test]
    fn test_invalid_year() {
        assert_eq!(
            ExpiryDate::new(1, 10_000),
            Err(ExpiryError::InvalidYear(10_000))
        );
    }

    #[test]
    fn test_expiry_month_is_still_valid() {
        let expiry = ExpiryDate::new(6, 2028).unwrap();
        assert!(!expiry.is_expired_at(2028, 6));
        assert!(!expiry.is_expired_at(2027, 12));
        assert!(expiry.is_expired_at(2028, 7));
        assert!(expiry.is_expired_at(2029, 1));
    }

    #[test]
    fn test_is_expired_against_today() {
        assert!(ExpiryDate::new(1, 2000).unwrap().is_expired());
        assert!(!ExpiryDate::new(12, 9999).unwrap().is_expired());
    }

    #[test]
    fn test_months_until_expiry() {
        let expiry = ExpiryDate::new(3, 2030).unwrap();
        assert_eq!(expiry.months_until_expiry_at(2029, 3), 12);
        assert_eq!(expiry.months_until_expiry_at(2030, 3), 0);
        assert_eq!(expiry.months_until_expiry_at(2031, 1), 0);
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = ExpiryDate::new(12, 2029).unwrap();
        let b = ExpiryDate::new(1, 2030).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_display() {
        assert_eq!(ExpiryDate::new(5, 2031).unwrap().to_string(), "05/31");
    }
}
