//! Age calculation from a birth date.

use chrono::{Datelike, NaiveDate};

const INPUT_FORMAT: &str = "%m/%d/%Y";
const INDIAN_FORMAT: &str = "%d-%m-%Y";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum AgeError {
    #[error("'{0}' is not a valid mm/dd/yyyy date")]
    InvalidDate(String),
    #[error("birth date cannot be in the future")]
    FutureBirthDate,
}

/// Parses a birth date given as `mm/dd/yyyy`.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, AgeError> {
    NaiveDate::parse_from_str(input.trim(), INPUT_FORMAT)
        .map_err(|_| AgeError::InvalidDate(input.to_string()))
}

/// Whole years of age on `today`. The year difference drops by one when
/// today's (month, day) has not yet reached the birthday's.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Result<i32, AgeError> {
    if birth > today {
        return Err(AgeError::FutureBirthDate);
    }
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    Ok(age)
}

/// The birth date rendered day-first, `dd-mm-yyyy`.
pub fn indian_format(birth: NaiveDate) -> String {
    birth.format(INDIAN_FORMAT).to_string()
}
