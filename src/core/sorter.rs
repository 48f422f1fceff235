use crate::domain::model::CourseRecord;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Primary collation key: diacritics stripped, lowercased.
fn fold(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Accent- and case-insensitive order. Ties fall back to accents
/// (unaccented first), then case (lowercase first).
pub fn collate(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(&fold(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Rank, then price with missing prices last, then title.
pub fn compare_courses(a: &CourseRecord, b: &CourseRecord) -> Ordering {
    let price = |r: &CourseRecord| r.price_usd.map_or(u64::MAX, u64::from);
    a.loc_rank
        .cmp(&b.loc_rank)
        .then_with(|| price(a).cmp(&price(b)))
        .then_with(|| collate(&a.title, &b.title))
}

/// Stable: records equal on every key keep their input order.
pub fn sort_courses(records: &mut [CourseRecord]) {
    records.sort_by(compare_courses);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assembler::assemble;
    use crate::core::engine::EngineSettings;
    use crate::domain::model::{LocRank, RawItem};

    fn record(id: &str, title: &str, rank: LocRank, price: Option<u32>) -> CourseRecord {
        let mut r = assemble(0, &RawItem::new(title, "", "https://example.com"), "q", &EngineSettings::default());
        r.id = id.to_string();
        r.loc_rank = rank;
        r.price_usd = price;
        r
    }

    fn ids(records: &[CourseRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_rank_then_price_with_nulls_last() {
        let mut records = vec![
            record("1", "A", LocRank::InCountry, None),
            record("2", "B", LocRank::FocusCity, Some(100)),
            record("3", "C", LocRank::Regional, Some(50)),
            record("4", "D", LocRank::FocusCity, Some(200)),
        ];
        sort_courses(&mut records);
        assert_eq!(ids(&records), vec!["2", "4", "1", "3"]);
    }

    #[test]
    fn test_missing_price_after_priced_in_same_tier() {
        let mut records = vec![
            record("1", "A", LocRank::Global, None),
            record("2", "B", LocRank::Global, Some(99999)),
        ];
        sort_courses(&mut records);
        assert_eq!(ids(&records), vec!["2", "1"]);
    }

    #[test]
    fn test_title_breaks_ties() {
        let mut records = vec![
            record("1", "welding basics", LocRank::Global, Some(10)),
            record("2", "Arc welding", LocRank::Global, Some(10)),
            record("3", "Welding Basics", LocRank::Global, Some(10)),
        ];
        sort_courses(&mut records);
        assert_eq!(ids(&records), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_sort_is_stable_for_full_ties() {
        let mut records = vec![
            record("1", "Same", LocRank::Regional, None),
            record("2", "Same", LocRank::Regional, None),
            record("3", "Same", LocRank::Regional, None),
        ];
        sort_courses(&mut records);
        assert_eq!(ids(&records), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_accented_titles_sort_with_their_base_letter() {
        let mut records = vec![
            record("1", "Zinc plating course", LocRank::Global, Some(10)),
            record("2", "Électricité course", LocRank::Global, Some(10)),
            record("3", "Ecology workshop", LocRank::Global, Some(10)),
        ];
        sort_courses(&mut records);
        assert_eq!(ids(&records), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_collate_accents() {
        assert_eq!(collate("Électricité", "Zinc"), Ordering::Less);
        assert_eq!(collate("resume", "résumé"), Ordering::Less);
        assert_eq!(collate("Résumé", "resume"), Ordering::Greater);
        // decomposed and precomposed forms share a primary key
        assert_eq!(collate("e\u{301}a", "éb"), Ordering::Less);
    }

    #[test]
    fn test_collate() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("apple", "Apple"), Ordering::Less);
        assert_eq!(collate("Same", "Same"), Ordering::Equal);
    }
}
