//! Subscriber CSV export.
//!
//! The export is built from the list already fetched for the subscribers
//! page and embedded as a `data:` link, so downloading costs no extra
//! backend call.

use possystem_core::{Subscriber, format_iso_millis};

/// Header row of the export.
pub const CSV_HEADER: &str = "Email,Subscription Date";

/// File name offered to the browser.
pub const CSV_FILE_NAME: &str = "subscribers.csv";

/// Render subscribers as CSV.
///
/// One row per subscriber, rows joined with `\n` and no trailing newline.
/// Dates are ISO-8601 UTC with millisecond precision; a missing or
/// unparsable date leaves the field empty.
#[must_use]
pub fn subscribers_csv(subscribers: &[Subscriber]) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(subscribers.iter().map(|subscriber| {
            let date = subscriber
                .created()
                .map(|dt| format_iso_millis(&dt))
                .unwrap_or_default();
            format!("{},{}", csv_field(&subscriber.email), csv_field(&date))
        }))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap CSV text in a `data:` URI for a download link.
#[must_use]
pub fn csv_data_uri(csv: &str) -> String {
    format!("data:text/csv;charset=utf-8,{}", urlencoding::encode(csv))
}

/// Quote a field when it contains a separator, quote or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
