use chrono::{Local, NaiveDate};

/// Day/month/year, zero padded, e.g. `07/03/2025`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub fn report_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date in the local timezone, formatted for the report header.
pub fn today() -> String {
    report_date(Local::now().date_naive())
}
