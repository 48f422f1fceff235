//! Field extractors.
//!
//! Each function reads the combined title/snippet text (or the link) and
//! yields one field. None of them can fail: a missing or malformed signal
//! comes back as `None`/`false`.

use crate::core::rules::{first_match, Rule};
use crate::core::tables::{month_number, UNKNOWN_VENDOR};
use crate::domain::model::{DateRange, DomainParts, Location, RawItem, Status};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\$ ?([0-9]{2,5})\b|(?:^|\s)([0-9]{2,5}) ?USD\b").unwrap());

static ACCREDITED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)accredit(ed|ation)").unwrap());

static REPUTATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-5](?:\.[0-9])?)/5\b").unwrap());

static SEATS_LIMITED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)limited seats").unwrap());

static DATE_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b([0-9]{4}-[0-9]{2}-[0-9]{2}|[0-3]?[0-9]\s+[A-Za-z]{3,}\s+[0-9]{4}|[A-Za-z]{3,}\s+[0-3]?[0-9]\s+[0-9]{4})\b",
    )
    .unwrap()
});

static VENDOR_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Vendor:\s*([^\n\-|—–]{2,80})").unwrap());

static VENDOR_BY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bby\s+([A-Za-z0-9 &’'._-]{2,80})").unwrap());

static CITY_COUNTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z][a-zA-Z]+),\s*([A-Z][a-zA-Z ]+)\b").unwrap());

static GULF_COUNTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(Saudi Arabia|Bahrain|Qatar|United Arab Emirates|Kuwait|Oman)\b").unwrap()
});

/// Splits a link's host into root domain, TLD and full host.
///
/// `https://www.Training.Example.com/x` gives root `example.com`, tld `com`,
/// host `www.training.example.com`. Unparsable links give empty parts.
pub fn parse_domain(link: &str) -> DomainParts {
    let Ok(url) = Url::parse(link) else {
        return DomainParts::default();
    };
    let Some(host) = url.host_str() else {
        return DomainParts::default();
    };

    let host = host.to_lowercase();
    let bare = host.strip_prefix("www.").unwrap_or(&host);
    let labels: Vec<&str> = bare.split('.').collect();

    if labels.len() >= 2 {
        DomainParts {
            root: labels[labels.len() - 2..].join("."),
            tld: labels[labels.len() - 1].to_string(),
            host: host.clone(),
        }
    } else {
        DomainParts {
            root: host.clone(),
            tld: String::new(),
            host,
        }
    }
}

pub fn extract_price_usd(text: &str) -> Option<u32> {
    let caps = PRICE_RE.captures(text)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .and_then(|m| m.as_str().parse().ok())
}

pub fn extract_accredited(text: &str) -> bool {
    ACCREDITED_RE.is_match(text)
}

/// Reads an "N/5" rating. Values above 5 (such as `5.5/5`) are not ratings.
pub fn extract_reputation(text: &str) -> Option<f64> {
    let caps = REPUTATION_RE.captures(text)?;
    let value: f64 = caps[1].parse().ok()?;
    (value <= 5.0).then_some(value)
}

const STATUS_RULES: &[Rule<str, Status>] = &[
    Rule {
        name: "full",
        apply: mentions_full,
    },
    Rule {
        name: "open",
        apply: mentions_open,
    },
];

// "full" counts unless the next letter is a `y` ("fully").
fn mentions_full(text: &str) -> Option<Status> {
    let lower = text.to_ascii_lowercase();
    let bytes = lower.as_bytes();
    lower
        .match_indices("full")
        .any(|(i, _)| bytes.get(i + 4) != Some(&b'y'))
        .then_some(Status::Full)
}

fn mentions_open(text: &str) -> Option<Status> {
    text.to_ascii_lowercase()
        .contains("open")
        .then_some(Status::Open)
}

pub fn extract_status(text: &str) -> Option<Status> {
    first_match(STATUS_RULES, text).map(|(_, status)| status)
}

pub fn extract_seats_limited(text: &str) -> bool {
    SEATS_LIMITED_RE.is_match(text)
}

/// Parses `YYYY-MM-DD`, `D Mon YYYY` or `Mon D YYYY`. Dates that do not
/// exist on the calendar are rejected.
fn parse_date_token(token: &str) -> Option<NaiveDate> {
    let token = token.replace(',', "");
    let token = token.trim();

    if let Ok(date) = NaiveDate::parse_from_str(token, "%Y-%m-%d") {
        return Some(date);
    }

    let parts: Vec<&str> = token.split_whitespace().collect();
    let [first, second, year] = parts.as_slice() else {
        return None;
    };
    let (day, month) = if first.starts_with(|c: char| c.is_ascii_digit()) {
        (first, second)
    } else {
        (second, first)
    };

    NaiveDate::from_ymd_opt(year.parse().ok()?, month_number(month)?, day.parse().ok()?)
}

/// Takes the first two date-like tokens as start and end. Both must parse or
/// neither side is reported.
pub fn extract_dates(text: &str) -> Option<DateRange> {
    let mut tokens = DATE_TOKEN_RE.find_iter(text).map(|m| m.as_str());
    let start = parse_date_token(tokens.next()?)?;
    let end = parse_date_token(tokens.next()?)?;
    Some(DateRange { start, end })
}

const VENDOR_RULES: &[Rule<RawItem, String>] = &[
    Rule {
        name: "vendor-label",
        apply: vendor_from_label,
    },
    Rule {
        name: "by-line",
        apply: vendor_from_by_line,
    },
    Rule {
        name: "link-domain",
        apply: vendor_from_domain,
    },
];

fn non_empty_capture(re: &Regex, text: &str) -> Option<String> {
    let caps = re.captures(text)?;
    let value = caps[1].trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn vendor_from_label(item: &RawItem) -> Option<String> {
    non_empty_capture(&VENDOR_LABEL_RE, &item.combined_text())
}

fn vendor_from_by_line(item: &RawItem) -> Option<String> {
    non_empty_capture(&VENDOR_BY_RE, &format!("{} {}", item.title, item.snippet))
}

fn vendor_from_domain(item: &RawItem) -> Option<String> {
    let root = parse_domain(&item.link).root;
    let label = root.split('.').next().unwrap_or_default().replace(['-', '_'], " ");
    let name = capitalize_words(&label);
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Best-effort vendor name; never empty.
pub fn guess_vendor(item: &RawItem) -> String {
    match first_match(VENDOR_RULES, item) {
        Some((rule, vendor)) => {
            tracing::trace!(rule, vendor = %vendor, "vendor guessed");
            vendor
        }
        None => UNKNOWN_VENDOR.to_string(),
    }
}

pub fn extract_location(text: &str) -> Location {
    if let Some(caps) = CITY_COUNTRY_RE.captures(text) {
        return Location {
            city: Some(caps[1].to_string()),
            country: Some(caps[2].trim().to_string()),
        };
    }

    if let Some(caps) = GULF_COUNTRY_RE.captures(text) {
        return Location {
            city: None,
            country: Some(title_case(&caps[1])),
        };
    }

    Location::default()
}

/// Upper-cases the first ASCII letter of every word, leaving the rest alone.
fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_word = false;
    for c in s.chars() {
        if !prev_is_word && c.is_ascii_lowercase() {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = c.is_ascii_alphanumeric() || c == '_';
    }
    out
}

fn title_case(s: &str) -> String {
    capitalize_words(&s.split_whitespace().collect::<Vec<_>>().join(" "))
}
