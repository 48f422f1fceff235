use crate::core::assembler::assemble;
use crate::core::filter::is_course_like;
use crate::core::sorter::sort_courses;
use crate::core::tables::RegionProfile;
use crate::domain::model::{CourseRecord, RawItem};

pub const DEFAULT_EXCHANGE_RATE: f64 = 3.75;

/// Constants the engine reads; fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    /// Local currency units per USD.
    pub exchange_rate: f64,
    pub region: RegionProfile,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            region: RegionProfile::default(),
        }
    }
}

/// Stateless extract → rank → filter → sort pass over one batch of search hits.
///
/// Holds no mutable state, so one engine can serve concurrent batches.
#[derive(Debug, Clone, Default)]
pub struct CourseEngine {
    settings: EngineSettings,
}

impl CourseEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Turns the raw hits for `query` into filtered, display-ordered records.
    /// Ids reflect each item's position in `items`, starting at 1.
    pub fn process(&self, items: &[RawItem], query: &str) -> Vec<CourseRecord> {
        let assembled: Vec<CourseRecord> = items
            .iter()
            .enumerate()
            .map(|(i, item)| assemble(i, item, query, &self.settings))
            .collect();

        let total = assembled.len();
        let mut courses: Vec<CourseRecord> = assembled.into_iter().filter(is_course_like).collect();
        sort_courses(&mut courses);

        tracing::debug!(
            total,
            kept = courses.len(),
            dropped = total - courses.len(),
            "course filter applied"
        );
        courses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::LocRank;

    fn items() -> Vec<RawItem> {
        vec![
            RawItem::new(
                "Welding Course Riyadh",
                "Riyadh, Saudi Arabia. Certified program, fee $900",
                "https://weld.example.com/riyadh",
            ),
            RawItem::new("Welding supplies", "Buy rods online", "https://shop.example.com"),
            RawItem::new(
                "Welding Training Dubai",
                "Hands-on workshop, $400",
                "https://skills.ae/welding",
            ),
            RawItem::new(
                "Yanbu welding course",
                "Yanbu, Saudi Arabia. $1200",
                "https://example.com/yanbu",
            ),
            RawItem::new("Online welding course", "Learn at home", "https://learn.example.com"),
        ]
    }

    #[test]
    fn test_process_filters_and_orders() {
        let engine = CourseEngine::default();
        let results = engine.process(&items(), "welding");

        let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "1", "3", "5"]);

        let ranks: Vec<LocRank> = results.iter().map(|r| r.loc_rank).collect();
        assert_eq!(
            ranks,
            vec![LocRank::FocusCity, LocRank::InCountry, LocRank::Regional, LocRank::Global]
        );
    }

    #[test]
    fn test_process_empty_batch() {
        assert!(CourseEngine::default().process(&[], "welding").is_empty());
    }

    #[test]
    fn test_process_is_deterministic() {
        let engine = CourseEngine::new(EngineSettings {
            exchange_rate: 3.75,
            ..EngineSettings::default()
        });
        let first = serde_json::to_string(&engine.process(&items(), "welding")).unwrap();
        let second = serde_json::to_string(&engine.process(&items(), "welding")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_process_survives_garbage() {
        let garbage = vec![
            RawItem::new("", "", ""),
            RawItem::new("course \u{0}\u{7f}", "$$$ 12345678 USD //5 ::", "::::"),
            RawItem::new("training ☃ ñ ß", "Vendor:\n by \n", "http://[::1]/"),
        ];
        let results = CourseEngine::default().process(&garbage, "");
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| !r.vendor.is_empty()));
    }
}
