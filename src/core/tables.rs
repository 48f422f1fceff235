//! Read-only lookup tables shared by the extractors and the ranker.

/// Month names indexed from January; matched on their first three letters.
pub const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Words that mark a search hit as a course offering.
pub const COURSE_KEYWORDS: [&str; 5] = ["course", "training", "workshop", "program", "instructor"];

/// Placeholder vendor when neither the text nor the link yields a name.
pub const UNKNOWN_VENDOR: &str = "Unknown Vendor";

/// Returns the 1-based month for a month name, looking only at its first three letters.
pub fn month_number(name: &str) -> Option<u32> {
    let prefix = name.get(..3)?.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|m| *m == prefix)
        .map(|i| i as u32 + 1)
}

/// The designated country and city the ranker measures relevance against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionProfile {
    /// Lowercase city name that earns the top rank.
    pub focus_city: &'static str,
    /// Country-code TLD of the designated country, without the dot.
    pub home_tld: &'static str,
    /// Lowercase names whose presence marks a result as in-country.
    pub home_signals: &'static [&'static str],
    /// Neighbouring country-code TLDs, excluding `home_tld`.
    pub regional_tlds: &'static [&'static str],
}

impl RegionProfile {
    pub const SAUDI_YANBU: RegionProfile = RegionProfile {
        focus_city: "yanbu",
        home_tld: "sa",
        home_signals: &["saudi", "riyadh", "jeddah", "yanbu"],
        regional_tlds: &["bh", "qa", "ae", "kw", "om"],
    };

    pub fn is_regional_tld(&self, tld: &str) -> bool {
        self.regional_tlds.contains(&tld)
    }
}

impl Default for RegionProfile {
    fn default() -> Self {
        Self::SAUDI_YANBU
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_number_uses_first_three_letters() {
        assert_eq!(month_number("Sep"), Some(9));
        assert_eq!(month_number("september"), Some(9));
        assert_eq!(month_number("JANUARY"), Some(1));
        assert_eq!(month_number("Dec"), Some(12));
        assert_eq!(month_number("Monday"), None);
        assert_eq!(month_number("ja"), None);
    }

    #[test]
    fn test_regional_tlds_exclude_home() {
        let region = RegionProfile::default();
        assert!(region.is_regional_tld("ae"));
        assert!(!region.is_regional_tld(region.home_tld));
        assert!(!region.is_regional_tld("com"));
    }
}
