//! Date and time formatting, pt-BR conventions.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// `2024-03-15` -> `15/03/2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `2024-03-15T14:02:26Z` -> `15/03/2024 14:02:26`
pub fn format_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.format("%d/%m/%Y %H:%M:%S").to_string()
}

/// Value of an `<input type="date">` (`YYYY-MM-DD`), empty or invalid
/// input meaning "no bound".
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// `NaiveDate` -> `YYYY-MM-DD` for seeding date inputs.
pub fn to_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn days_ago(days: i64) -> NaiveDate {
    today() - Duration::days(days)
}

pub fn start_of_year() -> NaiveDate {
    today().with_ordinal(1).unwrap_or_else(today)
}

pub fn end_of_year() -> NaiveDate {
    let year = today().year();
    NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or_else(today)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date), "15/03/2024");
    }

    #[test]
    fn test_format_datetime() {
        let dt: DateTime<Utc> = "2024-12-31T23:59:59Z".parse().unwrap();
        assert_eq!(format_datetime(&dt), "31/12/2024 23:59:59");
    }

    #[test]
    fn test_parse_input_date() {
        assert_eq!(
            parse_input_date("2024-03-15"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_input_date(" 2024-03-15 "), parse_input_date("2024-03-15"));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("15/03/2024"), None);
    }

    #[test]
    fn input_date_round_trips() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(parse_input_date(&to_input_date(date)), Some(date));
    }
}
