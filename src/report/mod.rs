// Report layer: exporters that read finished course records verbatim.

pub mod csv_report;

use crate::domain::model::CourseRecord;
use std::collections::HashSet;
use url::Url;

/// Picks the records whose ids appear in `ids`, keeping result order.
/// An empty selection picks everything.
pub fn select_rows<'a>(records: &'a [CourseRecord], ids: &[String]) -> Vec<&'a CourseRecord> {
    if ids.is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|r| ids.contains(&r.id)).collect()
}

/// Likely contact pages on the course site, derived from the link's origin.
pub fn contact_guess(link: &str) -> String {
    let Ok(url) = Url::parse(link) else {
        return String::new();
    };
    let origin = url.origin();
    if !origin.is_tuple() {
        return String::new();
    }
    let origin = origin.ascii_serialization();
    format!("{origin}/contact, {origin}/contact-us")
}

/// Distinct vendors in result order, each with the contact guess of its
/// first record.
pub fn vendor_contacts(records: &[CourseRecord]) -> Vec<(String, String)> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.vendor.as_str()))
        .map(|r| (r.vendor.clone(), contact_guess(&r.link)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CourseEngine;
    use crate::domain::model::RawItem;

    #[test]
    fn test_contact_guess() {
        assert_eq!(
            contact_guess("https://www.example.com/courses/welding?x=1"),
            "https://www.example.com/contact, https://www.example.com/contact-us"
        );
        assert_eq!(
            contact_guess("http://localhost:8080/a"),
            "http://localhost:8080/contact, http://localhost:8080/contact-us"
        );
        assert_eq!(contact_guess("not a link"), "");
        assert_eq!(contact_guess("mailto:a@b.com"), "");
    }

    #[test]
    fn test_select_rows() {
        let items = vec![
            RawItem::new("Course A", "", "https://a.com"),
            RawItem::new("Course B", "", "https://b.com"),
            RawItem::new("Course C", "", "https://c.com"),
        ];
        let records = CourseEngine::default().process(&items, "q");

        assert_eq!(select_rows(&records, &[]).len(), 3);

        let picked = select_rows(&records, &["3".to_string(), "1".to_string()]);
        let ids: Vec<&str> = picked.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        assert!(select_rows(&records, &["42".to_string()]).is_empty());
    }

    #[test]
    fn test_vendor_contacts_first_occurrence_wins() {
        let items = vec![
            RawItem::new("Welding course", "Vendor: Acme Institute | $500", "https://acme.com/a"),
            RawItem::new("Forklift training", "Vendor: Blue Safety | $300", "https://blue.sa/f"),
            RawItem::new("Rigging course", "Vendor: Acme Institute | $200", "https://other.com/r"),
        ];
        let records = CourseEngine::default().process(&items, "q");

        let contacts = vendor_contacts(&records);

        assert_eq!(contacts.len(), 2);
        let acme = contacts.iter().find(|(v, _)| v == "Acme Institute").unwrap();
        // the cheaper Acme record sorts first, so its link is the one kept
        assert_eq!(acme.1, "https://other.com/contact, https://other.com/contact-us");
        assert!(contacts.iter().any(|(v, _)| v == "Blue Safety"));
    }

    #[test]
    fn test_vendor_contacts_empty() {
        assert!(vendor_contacts(&[]).is_empty());
    }
}
