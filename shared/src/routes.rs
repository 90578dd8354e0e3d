use chrono::NaiveDate;

/// Placeholder for the day identifier in path templates
pub const DATE_PLACEHOLDER: &str = "{data}";
/// Placeholder for a category id in path templates
pub const ID_PLACEHOLDER: &str = "{id}";

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Fill a path template such as `/caixa/{data}/` with a day
pub fn day_path(template: &str, date: NaiveDate) -> String {
    template.replace(DATE_PLACEHOLDER, &date.format(ISO_DATE_FORMAT).to_string())
}

pub fn id_path(template: &str, id: i64) -> String {
    template.replace(ID_PLACEHOLDER, &id.to_string())
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).ok()
}

/// Day named by a browser path: the last non-empty segment, when it is an
/// ISO date. Works for both `/caixa/2025-01-10/` and `/2025-01-10/`.
pub fn parse_day_path(path: &str) -> Option<NaiveDate> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .last()
        .and_then(parse_iso_date)
}

/// Day a browser path stands for. Paths without a date, like the home
/// route `/`, stand for the day the page was opened on.
pub fn day_for_path(path: &str, opened_on: NaiveDate) -> NaiveDate {
    parse_day_path(path).unwrap_or(opened_on)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_path() {
        assert_eq!(day_path("/caixa/{data}/", date(2025, 1, 10)), "/caixa/2025-01-10/");
        assert_eq!(day_path("/{data}/", date(2025, 1, 10)), "/2025-01-10/");
        assert_eq!(day_path("/api/dados/{data}/", date(2024, 12, 31)), "/api/dados/2024-12-31/");
    }

    #[test]
    fn test_id_path() {
        assert_eq!(id_path("/categorias/{id}/editar/", 7), "/categorias/7/editar/");
    }

    #[test]
    fn test_parse_day_path() {
        assert_eq!(parse_day_path("/caixa/2025-01-10/"), Some(date(2025, 1, 10)));
        assert_eq!(parse_day_path("/2025-01-10/"), Some(date(2025, 1, 10)));
        assert_eq!(parse_day_path("/caixa/2025-01-10"), Some(date(2025, 1, 10)));
        assert_eq!(parse_day_path("/"), None);
        assert_eq!(parse_day_path("/caixa/"), None);
        assert_eq!(parse_day_path("/caixa/2025-02-30/"), None);
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2025-01-10"), Some(date(2025, 1, 10)));
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("10/01/2025"), None);
    }

    #[test]
    fn test_day_for_path_falls_back_to_opening_day() {
        let opened_on = date(2025, 1, 10);

        assert_eq!(day_for_path("/", opened_on), opened_on);
        assert_eq!(day_for_path("/caixa/", opened_on), opened_on);
        assert_eq!(day_for_path("/caixa/2025-01-11/", opened_on), date(2025, 1, 11));
    }
}
