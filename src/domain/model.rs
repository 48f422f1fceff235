use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Reads a string field that providers may send as `null`.
pub fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Whole ratings are written as integers (`5`, not `5.0`).
fn rating_as_number<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) if v.fract() == 0.0 => serializer.serialize_i64(*v as i64),
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_none(),
    }
}

/// One unprocessed search hit as returned by the search provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub snippet: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
}

impl RawItem {
    pub fn new(title: impl Into<String>, snippet: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            link: link.into(),
        }
    }

    /// Title and snippet joined the way every text extractor sees them.
    pub fn combined_text(&self) -> String {
        format!("{} — {}", self.title, self.snippet)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Open,
    Full,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Open => f.write_str("Open"),
            Status::Full => f.write_str("Full"),
        }
    }
}

/// Location relevance tier, lower is closer to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum LocRank {
    FocusCity = 0,
    InCountry = 1,
    Regional = 2,
    Global = 3,
}

impl From<LocRank> for u8 {
    fn from(rank: LocRank) -> Self {
        rank as u8
    }
}

impl TryFrom<u8> for LocRank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LocRank::FocusCity),
            1 => Ok(LocRank::InCountry),
            2 => Ok(LocRank::Regional),
            3 => Ok(LocRank::Global),
            other => Err(format!("locRank out of range: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub city: Option<String>,
    pub country: Option<String>,
}

/// A start/end pair; the extractor only ever produces both sides together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainParts {
    pub root: String,
    pub tld: String,
    pub host: String,
}

/// Normalized course offering built from one [`RawItem`].
///
/// Every field is always serialized, nulls included, so report exporters can
/// read any subset without presence checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    pub id: String,
    pub title: String,
    pub link: String,
    pub snippet: String,
    #[serde(rename = "priceUSD")]
    pub price_usd: Option<u32>,
    #[serde(rename = "priceSAR")]
    pub price_sar: Option<u64>,
    pub accredited: bool,
    #[serde(serialize_with = "rating_as_number")]
    pub reputation: Option<f64>,
    pub status: Option<Status>,
    pub seats_limited: bool,
    pub vendor: String,
    pub city: Option<String>,
    pub country: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub loc_rank: LocRank,
}

/// User-facing envelope around a sorted result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub ok: bool,
    pub reply: String,
    pub results: Vec<CourseRecord>,
}

impl SearchResponse {
    pub fn new(results: Vec<CourseRecord>) -> Self {
        Self {
            ok: true,
            reply: format!("Found {} result(s)", results.len()),
            results,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub response: SearchResponse,
    pub json_output: Option<String>,
    pub csv_output: Option<String>,
    pub contacts_output: Option<String>,
}
