use chrono::NaiveDate;

/// Today's date in the browser's local time zone
pub fn get_current_date() -> Option<NaiveDate> {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Header label used before the first snapshot arrives (e.g. "10/01/2025")
pub fn format_date_for_display(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_for_display() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        assert_eq!(format_date_for_display(date), "10/01/2025");
    }
}
