//! Free-text query interpretation.
//!
//! Turns a search string such as "3 bedroom apartment in Cyprus under $300k"
//! into [`SearchFilters`]. Matching is keyword and regex based over a
//! lower-cased copy of the input; nothing here can fail, a query with no
//! recognizable phrase yields empty filters.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use crate::models::{Country, InvestmentGoal, PropertyStatus, SearchFilters, SortMetric};

/// Country keywords in priority order. Plain substring match.
const COUNTRY_KEYWORDS: &[(&str, Country)] = &[
    ("georgia", Country::Georgia),
    ("cyprus", Country::Cyprus),
    ("greece", Country::Greece),
    ("lebanon", Country::Lebanon),
];

/// Status phrases in priority order.
const STATUS_PHRASES: &[(&[&str], PropertyStatus)] = &[
    (&["off plan", "off-plan"], PropertyStatus::OffPlan),
    (&["new build", "new-build", "newly built"], PropertyStatus::NewBuild),
    (&["resale", "existing"], PropertyStatus::Resale),
];

/// Property type vocabulary in priority order.
const PROPERTY_TYPES: &[&str] = &["apartment", "villa", "house", "condo", "penthouse"];

const GOLDEN_VISA_PHRASES: &[&str] = &["golden visa", "residency", "citizenship"];
const HIGH_ROI_PHRASES: &[&str] = &["roi", "return on investment", "highest return"];
const PASSIVE_INCOME_PHRASES: &[&str] = &["rental", "passive income", "rental yield"];

// Price patterns, tried in this order.
static PRICE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:between\s+)?\$?([0-9][0-9,]*)\s*(?:k|thousand)?\s*(?:to|and|-)\s*\$?([0-9][0-9,]*)",
    )
    .expect("Invalid regex")
});

// A range ending in a room word ("2-3 bedroom") is a room count, not a price
static ROOM_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:bedrooms?|beds?|br|bathrooms?|baths?)\b").expect("Invalid regex")
});

static PRICE_MAX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:under|below|less\s+than|maximum|max)\s*\$?([0-9][0-9,]*)").expect("Invalid regex")
});

static PRICE_MIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:above|over|more\s+than|minimum|min)\s*\$?([0-9][0-9,]*)").expect("Invalid regex")
});

static BEDROOMS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)(?:\s*-\s*([0-9]+))?\s*(?:bedrooms?|beds?|br)\b").expect("Invalid regex")
});

static BATHROOMS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)\s*(?:bathrooms?|baths?)\b").expect("Invalid regex")
});

/// Interpret a free-text property search into structured filters.
///
/// Extraction runs in a fixed order: country, price, bedrooms, bathrooms,
/// goal, status, property type. Country, price, status and property type
/// stop at the first rule that matches. The three goal checks are
/// independent, so when several goal phrases appear the last check to
/// match owns `goal` and `sort_by` (a golden visa flag set earlier stays
/// set).
pub fn interpret(query: &str) -> SearchFilters {
    let text = query.to_lowercase();
    let mut filters = SearchFilters::default();

    filters.country = extract_country(&text);
    extract_price(&text, &mut filters);
    extract_bedrooms(&text, &mut filters);
    filters.bathrooms = BATHROOMS_RE
        .captures(&text)
        .and_then(|caps| parse_count(&caps, 1));
    extract_goal(&text, &mut filters);
    filters.status = extract_status(&text);
    filters.property_type = PROPERTY_TYPES
        .iter()
        .find(|kind| text.contains(*kind))
        .map(|kind| kind.to_string());

    debug!("Interpreted {:?} as {:?}", query, filters);

    filters
}

fn extract_country(text: &str) -> Option<Country> {
    COUNTRY_KEYWORDS
        .iter()
        .find(|(keyword, _)| text.contains(keyword))
        .map(|(_, country)| *country)
}

fn extract_price(text: &str, filters: &mut SearchFilters) {
    // Thousands scaling looks at the whole query, not the matched number
    let thousands = text.contains('k') || text.contains("thousand");

    let range = PRICE_RANGE_RE.captures_iter(text).find(|caps| {
        let end = caps.get(0).map_or(0, |m| m.end());
        !ROOM_SUFFIX_RE.is_match(&text[end..])
    });

    if let Some(caps) = range {
        filters.min_price = parse_price(&caps, 1, thousands);
        filters.max_price = parse_price(&caps, 2, thousands);
    } else if let Some(caps) = PRICE_MAX_RE.captures(text) {
        filters.max_price = parse_price(&caps, 1, thousands);
    } else if let Some(caps) = PRICE_MIN_RE.captures(text) {
        filters.min_price = parse_price(&caps, 1, thousands);
    }
}

fn extract_bedrooms(text: &str, filters: &mut SearchFilters) {
    let Some(caps) = BEDROOMS_RE.captures(text) else {
        return;
    };

    if caps.get(2).is_some() {
        filters.min_bedrooms = parse_count(&caps, 1);
        filters.max_bedrooms = parse_count(&caps, 2);
    } else {
        filters.bedrooms = parse_count(&caps, 1);
    }
}

fn extract_goal(text: &str, filters: &mut SearchFilters) {
    let mentions = |phrases: &[&str]| phrases.iter().any(|p| text.contains(p));

    if mentions(GOLDEN_VISA_PHRASES) {
        filters.goal = Some(InvestmentGoal::GoldenVisa);
        filters.is_golden_visa_eligible = Some(true);
    }
    if mentions(HIGH_ROI_PHRASES) {
        filters.goal = Some(InvestmentGoal::HighRoi);
        filters.sort_by = Some(SortMetric::Roi);
    }
    if mentions(PASSIVE_INCOME_PHRASES) {
        filters.goal = Some(InvestmentGoal::PassiveIncome);
        filters.sort_by = Some(SortMetric::RentalYield);
    }
}

fn extract_status(text: &str) -> Option<PropertyStatus> {
    STATUS_PHRASES
        .iter()
        .find(|(phrases, _)| phrases.iter().any(|p| text.contains(p)))
        .map(|(_, status)| *status)
}

/// Parse a captured price, dropping thousands separators. Numbers too large
/// to represent are treated as absent.
fn parse_price(caps: &Captures<'_>, group: usize, thousands: bool) -> Option<u64> {
    let digits = caps.get(group)?.as_str().replace(',', "");
    let value: u64 = digits.parse().ok()?;
    if thousands {
        value.checked_mul(1000)
    } else {
        Some(value)
    }
}

fn parse_count(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_query() {
        let filters = interpret("3 bedroom apartment in Cyprus under $300k");
        assert_eq!(
            filters,
            SearchFilters {
                bedrooms: Some(3),
                property_type: Some("apartment".to_string()),
                country: Some(Country::Cyprus),
                max_price: Some(300_000),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_no_keywords_yields_empty_filters() {
        assert!(interpret("show me something nice").is_empty());
        assert!(interpret("?").is_empty());
    }

    #[test]
    fn test_country_first_match_wins() {
        let filters = interpret("Lebanon or Greece or Georgia");
        assert_eq!(filters.country, Some(Country::Georgia));
    }

    #[test]
    fn test_country_is_substring_match() {
        assert_eq!(interpret("greeceland").country, Some(Country::Greece));
    }

    #[test]
    fn test_price_range_between() {
        let filters = interpret("between 200k and 500k");
        assert_eq!(
            filters,
            SearchFilters {
                min_price: Some(200_000),
                max_price: Some(500_000),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_price_range_with_commas_and_dash() {
        let filters = interpret("villa $150,000 - $400,000");
        assert_eq!(filters.min_price, Some(150_000));
        assert_eq!(filters.max_price, Some(400_000));
    }

    #[test]
    fn test_price_range_without_leading_keyword() {
        for query in [
            "apartment 200k to 500k",
            "$200k to 500k",
            "200k - 500k",
            "price 200k and 500k",
        ] {
            let filters = interpret(query);
            assert_eq!(filters.min_price, Some(200_000), "{}", query);
            assert_eq!(filters.max_price, Some(500_000), "{}", query);
        }

        let filters = interpret("villa 300,000-500,000 in Cyprus");
        assert_eq!(filters.min_price, Some(300_000));
        assert_eq!(filters.max_price, Some(500_000));
        assert_eq!(filters.country, Some(Country::Cyprus));
    }

    #[test]
    fn test_room_range_is_not_a_price_range() {
        let filters = interpret("2-3 bedroom villa under 500k");
        assert_eq!(filters.min_bedrooms, Some(2));
        assert_eq!(filters.max_bedrooms, Some(3));
        assert_eq!(filters.min_price, None);
        assert_eq!(filters.max_price, Some(500_000));

        let filters = interpret("1 to 2 baths");
        assert_eq!(filters.min_price, None);
        assert_eq!(filters.max_price, None);
    }

    #[test]
    fn test_single_dollar_amount_is_not_a_range() {
        let filters = interpret("under $300k and 3 bedrooms");
        assert_eq!(filters.max_price, Some(300_000));
        assert_eq!(filters.min_price, None);
        assert_eq!(filters.bedrooms, Some(3));
    }

    #[test]
    fn test_price_max_with_commas() {
        let filters = interpret("under 450,000");
        assert_eq!(filters.max_price, Some(450_000));
        assert_eq!(filters.min_price, None);
    }

    #[test]
    fn test_price_min_thousand_word() {
        let filters = interpret("more than 250 thousand");
        assert_eq!(filters.min_price, Some(250_000));
        assert_eq!(filters.max_price, None);
    }

    #[test]
    fn test_price_maximum_keyword() {
        assert_eq!(interpret("maximum 900000").max_price, Some(900_000));
        assert_eq!(interpret("minimum 100000").min_price, Some(100_000));
    }

    #[test]
    fn test_max_pattern_wins_over_min() {
        let filters = interpret("above 100 under 900");
        assert_eq!(filters.max_price, Some(900));
        assert_eq!(filters.min_price, None);
    }

    #[test]
    fn test_thousands_scaling_uses_whole_query() {
        // The "k" in "park" is enough to scale the bare number
        let filters = interpret("near the park under 300");
        assert_eq!(filters.max_price, Some(300_000));
    }

    #[test]
    fn test_oversized_price_is_absent() {
        let filters = interpret("under 99999999999999999999999");
        assert_eq!(filters.max_price, None);
    }

    #[test]
    fn test_bedroom_range() {
        let filters = interpret("2-3 bedroom properties");
        assert_eq!(filters.min_bedrooms, Some(2));
        assert_eq!(filters.max_bedrooms, Some(3));
        assert_eq!(filters.bedrooms, None);
        assert_eq!(filters.min_price, None);
        assert_eq!(filters.max_price, None);
    }

    #[test]
    fn test_bedroom_abbreviations() {
        assert_eq!(interpret("4br villa").bedrooms, Some(4));
        assert_eq!(interpret("2 beds").bedrooms, Some(2));
        assert_eq!(interpret("5 bedrooms").bedrooms, Some(5));
    }

    #[test]
    fn test_bathrooms() {
        let filters = interpret("3 bed 2 bath house");
        assert_eq!(filters.bedrooms, Some(3));
        assert_eq!(filters.bathrooms, Some(2));
        assert_eq!(filters.property_type.as_deref(), Some("house"));
    }

    #[test]
    fn test_golden_visa_goal() {
        let filters = interpret("Golden Visa eligible properties");
        assert_eq!(
            filters,
            SearchFilters {
                goal: Some(InvestmentGoal::GoldenVisa),
                is_golden_visa_eligible: Some(true),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_high_roi_goal() {
        let filters = interpret("best ROI in Georgia");
        assert_eq!(filters.goal, Some(InvestmentGoal::HighRoi));
        assert_eq!(filters.sort_by, Some(SortMetric::Roi));
        assert_eq!(filters.country, Some(Country::Georgia));
    }

    #[test]
    fn test_later_goal_overwrites_earlier() {
        let filters = interpret("golden visa with good rental yield");
        assert_eq!(filters.goal, Some(InvestmentGoal::PassiveIncome));
        assert_eq!(filters.sort_by, Some(SortMetric::RentalYield));
        assert_eq!(filters.is_golden_visa_eligible, Some(true));
    }

    #[test]
    fn test_status_priority() {
        assert_eq!(interpret("off-plan or resale").status, Some(PropertyStatus::OffPlan));
        assert_eq!(interpret("existing or newly built").status, Some(PropertyStatus::NewBuild));
        assert_eq!(interpret("existing homes").status, Some(PropertyStatus::Resale));
    }

    #[test]
    fn test_penthouse_reads_as_house() {
        // "house" is earlier in the vocabulary and a substring of "penthouse"
        let filters = interpret("penthouse with sea view");
        assert_eq!(filters.property_type.as_deref(), Some("house"));
    }

    #[test]
    fn test_property_type_priority() {
        let filters = interpret("penthouse or villa");
        assert_eq!(filters.property_type.as_deref(), Some("villa"));
    }

    #[test]
    fn test_interpret_is_deterministic() {
        let query = "2-3 bedroom off plan villa in Greece between $200,000 and $350,000";
        assert_eq!(interpret(query), interpret(query));
    }
}
