//! Location relevance ranking.
//!
//! A priority cascade, not a score: the first rule that fires decides the
//! tier and ties inside a tier are left to the sorter.

use crate::core::extractors::parse_domain;
use crate::core::rules::{first_match, Rule};
use crate::core::tables::RegionProfile;
use crate::domain::model::{LocRank, Location};

/// Lowercased inputs the rank rules look at.
pub struct RankSignals {
    /// City and country joined by a space.
    pub place: String,
    pub host: String,
    pub tld: String,
    pub query: String,
    pub region: RegionProfile,
}

impl RankSignals {
    pub fn new(location: &Location, link: &str, query: &str, region: RegionProfile) -> Self {
        let domain = parse_domain(link);
        let place = format!(
            "{} {}",
            location.city.as_deref().unwrap_or(""),
            location.country.as_deref().unwrap_or("")
        );
        Self {
            place: place.to_lowercase(),
            host: domain.host,
            tld: domain.tld,
            query: query.to_lowercase(),
            region,
        }
    }
}

const RANK_RULES: &[Rule<RankSignals, LocRank>] = &[
    Rule {
        name: "focus-city",
        apply: mentions_focus_city,
    },
    Rule {
        name: "in-country",
        apply: in_home_country,
    },
    Rule {
        name: "regional-tld",
        apply: on_regional_tld,
    },
    Rule {
        name: "global",
        apply: global,
    },
];

fn mentions_focus_city(s: &RankSignals) -> Option<LocRank> {
    let city = s.region.focus_city;
    (s.query.contains(city) || s.place.contains(city)).then_some(LocRank::FocusCity)
}

fn in_home_country(s: &RankSignals) -> Option<LocRank> {
    let haystack = format!("{} {}", s.host, s.place);
    let signal = has_tld_label(&haystack, s.region.home_tld)
        || s.region.home_signals.iter().any(|name| haystack.contains(name));
    signal.then_some(LocRank::InCountry)
}

fn on_regional_tld(s: &RankSignals) -> Option<LocRank> {
    s.region.is_regional_tld(&s.tld).then_some(LocRank::Regional)
}

fn global(_: &RankSignals) -> Option<LocRank> {
    Some(LocRank::Global)
}

/// True when `.{tld}` appears followed by a non-word character or the end.
fn has_tld_label(text: &str, tld: &str) -> bool {
    if tld.is_empty() {
        return false;
    }
    let needle = format!(".{}", tld);
    text.match_indices(&needle).any(|(i, _)| {
        text[i + needle.len()..]
            .chars()
            .next()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_'))
    })
}

pub fn rank_location(location: &Location, link: &str, query: &str, region: RegionProfile) -> LocRank {
    let signals = RankSignals::new(location, link, query, region);
    first_match(RANK_RULES, &signals)
        .map(|(_, rank)| rank)
        .unwrap_or(LocRank::Global)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(city: Option<&str>, country: Option<&str>) -> Location {
        Location {
            city: city.map(str::to_string),
            country: country.map(str::to_string),
        }
    }

    fn rank(location: Location, link: &str, query: &str) -> LocRank {
        rank_location(&location, link, query, RegionProfile::default())
    }

    #[test]
    fn test_query_mentioning_focus_city_wins() {
        assert_eq!(
            rank(loc(None, None), "https://example.com", "welding yanbu"),
            LocRank::FocusCity
        );
        assert_eq!(
            rank(loc(None, None), "https://example.com", "Welding YANBU"),
            LocRank::FocusCity
        );
    }

    #[test]
    fn test_location_mentioning_focus_city() {
        assert_eq!(
            rank(loc(Some("Yanbu"), Some("Saudi Arabia")), "https://example.com", "welding"),
            LocRank::FocusCity
        );
    }

    #[test]
    fn test_in_country_signals() {
        assert_eq!(
            rank(loc(None, None), "https://www.tvtc.gov.sa/courses", "welding"),
            LocRank::InCountry
        );
        assert_eq!(
            rank(loc(Some("Riyadh"), None), "https://example.com", "welding"),
            LocRank::InCountry
        );
        assert_eq!(
            rank(loc(None, Some("Saudi Arabia")), "https://example.ae", "welding"),
            LocRank::InCountry
        );
        assert_eq!(
            rank(loc(None, None), "https://jeddah-training.com", "welding"),
            LocRank::InCountry
        );
    }

    #[test]
    fn test_regional_tld() {
        assert_eq!(
            rank(loc(None, None), "https://skills.ae/welding", "welding"),
            LocRank::Regional
        );
        assert_eq!(
            rank(loc(Some("Doha"), Some("Qatar")), "https://academy.qa", "welding"),
            LocRank::Regional
        );
    }

    #[test]
    fn test_global_fallback() {
        assert_eq!(
            rank(loc(None, None), "https://example.com/welding", "welding"),
            LocRank::Global
        );
        assert_eq!(rank(loc(None, None), "not a url", "welding"), LocRank::Global);
    }

    #[test]
    fn test_tld_label_needs_boundary() {
        assert!(has_tld_label("academy.sa", "sa"));
        assert!(has_tld_label("academy.sa.com", "sa"));
        assert!(!has_tld_label("academy.sales.com", "sa"));
        assert!(!has_tld_label("academy.com", ""));
    }
}
