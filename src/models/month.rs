//! Calendar month lookups.
//!
//! Months are matched by their exact English name. [`chrono::Month`] supplies
//! the names and calendar indices. Its `FromStr` accepts abbreviations and
//! any case, so lookups go through [`month_from_name`] instead.

use chrono::Month;

/// The twelve months in calendar order.
pub const MONTHS: [Month; 12] = [
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
];

/// Finds the month whose full English name is exactly `name`.
///
/// # Example
///
/// ```
/// use chrono::Month;
/// use salary_input::models::month_from_name;
///
/// assert_eq!(month_from_name("April"), Some(Month::April));
/// assert_eq!(month_from_name("april"), None);
/// assert_eq!(month_from_name("Apr"), None);
/// ```
pub fn month_from_name(name: &str) -> Option<Month> {
    MONTHS.into_iter().find(|month| month.name() == name)
}

/// Finds the month with the 1-based calendar index `number`.
pub fn month_from_number(number: u64) -> Option<Month> {
    let index = usize::try_from(number).ok()?.checked_sub(1)?;
    MONTHS.get(index).copied()
}
