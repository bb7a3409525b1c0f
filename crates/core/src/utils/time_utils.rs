use chrono::{Local, NaiveDate};

/// Today's date in the server's local timezone.
///
/// Expense dates and fixed-account due days are calendar days as the user
/// enters them, so "today" follows local time rather than UTC.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
