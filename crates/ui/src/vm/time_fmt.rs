use chrono::{DateTime, NaiveDate, Utc};

/// Timestamp formatting for table cells, e.g. `2024.05.02 09:30`.
#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y.%m.%d %H:%M").to_string()
}

/// Date formatting for table cells, e.g. `2024.05.02`.
#[must_use]
pub fn format_date(value: NaiveDate) -> String {
    value.format("%Y.%m.%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use workstage_core::time::fixed_now;

    #[test]
    fn datetime_uses_dot_separated_form() {
        assert_eq!(format_datetime(fixed_now()), "2023.11.14 22:13");
    }

    #[test]
    fn date_uses_dot_separated_form() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        assert_eq!(format_date(date), "2024.05.02");
    }
}
