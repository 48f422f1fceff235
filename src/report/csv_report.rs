use crate::domain::model::CourseRecord;
use crate::report::contact_guess;
use crate::utils::error::{EtlError, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

pub const REPORT_FILENAME: &str = "courses_report.csv";
pub const CONTACTS_FILENAME: &str = "vendor_contacts.csv";

const HEADER: [&str; 13] = [
    "Course Name",
    "Vendor",
    "City",
    "Country",
    "Start",
    "End",
    "Price USD",
    "Price SAR (approx)",
    "Accredited",
    "Reputation",
    "Availability",
    "URL",
    "Contact",
];

fn opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

fn row(record: &CourseRecord) -> [String; 13] {
    [
        record.title.clone(),
        record.vendor.clone(),
        opt(&record.city),
        opt(&record.country),
        opt(&record.start),
        opt(&record.end),
        opt(&record.price_usd),
        opt(&record.price_sar),
        if record.accredited { "Yes" } else { "No" }.to_string(),
        opt(&record.reputation),
        opt(&record.status),
        record.link.clone(),
        contact_guess(&record.link),
    ]
}

fn write_document<I, R>(header: &[&str], rows: I) -> Result<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }

    let bytes = writer.into_inner().map_err(|e| EtlError::ProcessingError {
        message: format!("failed to flush CSV report: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("CSV report is not valid UTF-8: {}", e),
    })
}

/// Renders the selected records as a fully quoted CSV document.
pub fn render_csv(records: &[&CourseRecord]) -> Result<String> {
    write_document(&HEADER, records.iter().map(|r| row(r)))
}

/// Renders `(vendor, contact)` pairs as a two-column CSV document.
pub fn render_contacts_csv(contacts: &[(String, String)]) -> Result<String> {
    write_document(
        &["Vendor", "Contact"],
        contacts.iter().map(|(vendor, contact)| [vendor, contact]),
    )
}
