use chrono::{DateTime, Datelike, Utc};

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Long pt-BR date, e.g. `5 de março de 2024`.
pub fn format_date(date: DateTime<Utc>) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{} de {} de {}", date.day(), month, date.year())
}

/// `YYYY-MM-DD`, the value an `<input type="date">` expects.
pub fn input_date(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_long_date() {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 18, 0, 0).unwrap();
        assert_eq!(format_date(date), "5 de março de 2024");

        let date = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(format_date(date), "31 de dezembro de 2023");
    }

    #[test]
    fn test_input_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 9, 23, 59, 0).unwrap();
        assert_eq!(input_date(date), "2024-01-09");
    }
}
