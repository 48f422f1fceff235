use crate::core::engine::EngineSettings;
use crate::core::extractors::{
    extract_accredited, extract_dates, extract_location, extract_price_usd, extract_reputation,
    extract_seats_limited, extract_status, guess_vendor,
};
use crate::core::ranker::rank_location;
use crate::domain::model::{CourseRecord, RawItem};

/// Converts a USD amount at `rate`, rounding half away from zero.
pub fn convert_price(price_usd: u32, rate: f64) -> u64 {
    (f64::from(price_usd) * rate).round() as u64
}

/// Builds the record for the item at `position` (0-based) in the batch.
pub fn assemble(position: usize, item: &RawItem, query: &str, settings: &EngineSettings) -> CourseRecord {
    let text = item.combined_text();

    let price_usd = extract_price_usd(&text);
    let dates = extract_dates(&text);
    let location = extract_location(&text);
    let loc_rank = rank_location(&location, &item.link, query, settings.region);

    CourseRecord {
        id: (position + 1).to_string(),
        title: item.title.clone(),
        link: item.link.clone(),
        snippet: item.snippet.clone(),
        price_usd,
        price_sar: price_usd.map(|usd| convert_price(usd, settings.exchange_rate)),
        accredited: extract_accredited(&text),
        reputation: extract_reputation(&text),
        status: extract_status(&text),
        seats_limited: extract_seats_limited(&text),
        vendor: guess_vendor(item),
        city: location.city,
        country: location.country,
        start: dates.map(|d| d.start.format("%Y-%m-%d").to_string()),
        end: dates.map(|d| d.end.format("%Y-%m-%d").to_string()),
        loc_rank,
    }
}
