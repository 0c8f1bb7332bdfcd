use chrono::{DateTime, NaiveDate, TimeZone, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The `YYYY-MM-DD` shown in the transaction tables, in local time
pub fn format_date(time: &DateTime<Utc>) -> String {
    format_date_in(time, &chrono::Local)
}

pub fn format_date_in<Tz: TimeZone>(time: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    time.with_timezone(zone).format(DATE_FORMAT).to_string()
}

/// Parse the value of a date input, noon UTC so the day survives any local offset
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(12, 0, 0)?))
}

/// A positive amount typed into a form. Accepts a decimal comma.
pub fn parse_amount(value: &str) -> Option<f64> {
    let amount: f64 = value.trim().replace(',', ".").parse().ok()?;
    (amount.is_finite() && amount > 0.0).then_some(amount)
}

pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}
