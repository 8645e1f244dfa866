//! CSV export of waitlist entries: one row per entry, email and signup date.

use crate::i18n::Language;
use crate::waitlist::WaitlistEntry;
use chrono::{DateTime, NaiveDate};

/// Render entries as CSV with a localized header row.
///
/// Rows keep the order of `entries` and are joined with `\n`, without a
/// trailing newline.
pub fn to_csv(entries: &[WaitlistEntry], language: Language) -> String {
    let strings = language.strings();

    let header = format!(
        "{},{}",
        escape_field(strings.csv_email_header),
        escape_field(strings.csv_date_header)
    );

    std::iter::once(header)
        .chain(entries.iter().map(|entry| {
            format!(
                "{},{}",
                escape_field(&entry.email),
                format_date(entry.created_at)
            )
        }))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a millisecond timestamp as `DD/MM/YYYY` (UTC)
pub fn format_date(created_at_ms: i64) -> String {
    DateTime::from_timestamp_millis(created_at_ms)
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

/// Download name for an export made on `today`
pub fn export_filename(today: NaiveDate) -> String {
    format!("waitlist-{}.csv", today.format("%Y-%m-%d"))
}

/// Quote a field if it contains a separator, quote or line break
fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waitlist::EntryId;

    fn entry(id: i64, email: &str, created_at: i64) -> WaitlistEntry {
        WaitlistEntry {
            id: EntryId::new(id),
            email: email.to_string(),
            created_at,
        }
    }

    // 2025-03-14T12:00:00Z
    const MARCH_14: i64 = 1_741_953_600_000;

    #[test]
    fn test_empty_export_is_header_only() {
        assert_eq!(to_csv(&[], Language::UZBEK), "Email,Sana");
        assert_eq!(to_csv(&[], Language::ENGLISH), "Email,Date");
    }

    #[test]
    fn test_rows_follow_entry_order() {
        let entries = vec![
            entry(2, "b@x.com", MARCH_14 + 86_400_000),
            entry(1, "a@x.com", MARCH_14),
        ];

        let csv = to_csv(&entries, Language::UZBEK);

        assert_eq!(csv, "Email,Sana\nb@x.com,15/03/2025\na@x.com,14/03/2025");
    }

    #[test]
    fn test_russian_header() {
        let csv = to_csv(&[entry(1, "a@x.com", MARCH_14)], Language::RUSSIAN);
        assert!(csv.starts_with("Email,Дата\n"));
    }

    #[test]
    fn test_fields_with_commas_and_quotes_are_quoted() {
        let csv = to_csv(&[entry(1, "a,\"b\"@x.com", MARCH_14)], Language::ENGLISH);
        let row = csv.lines().nth(1).expect("Should have a data row");
        assert_eq!(row, "\"a,\"\"b\"\"@x.com\",14/03/2025");
    }

    #[test]
    fn test_format_date_epoch() {
        assert_eq!(format_date(0), "01/01/1970");
    }

    #[test]
    fn test_format_date_out_of_range_is_empty() {
        assert_eq!(format_date(i64::MAX), "");
    }

    #[test]
    fn test_export_filename() {
        let day = NaiveDate::from_ymd_opt(2025, 1, 9).expect("Valid date");
        assert_eq!(export_filename(day), "waitlist-2025-01-09.csv");
    }
}
