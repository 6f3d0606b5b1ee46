//! Human-readable sentence describing a search and its result count.

use crate::models::{InvestmentGoal, SearchFilters};

pub const NO_RESULTS_MESSAGE: &str =
    "I couldn't find any properties matching your criteria. Try adjusting your requirements.";

/// Summarize a search for display next to its results.
///
/// `_query` is accepted for callers that want to echo the original text;
/// the sentence is built from `filters` alone.
pub fn summarize(_query: &str, filters: &SearchFilters, result_count: usize) -> String {
    if result_count == 0 {
        return NO_RESULTS_MESSAGE.to_string();
    }

    let noun = if result_count == 1 { "property" } else { "properties" };
    let mut summary = format!("I found {} {} matching your search", result_count, noun);

    let criteria = criteria_fragments(filters);
    if !criteria.is_empty() {
        summary.push_str(" with the following criteria: ");
        summary.push_str(&criteria.join(", "));
    }

    summary.push('.');
    summary
}

fn criteria_fragments(filters: &SearchFilters) -> Vec<String> {
    let mut parts = Vec::new();

    if let Some(bedrooms) = filters.bedrooms {
        let noun = if bedrooms > 1 { "bedrooms" } else { "bedroom" };
        parts.push(format!("{} {}", bedrooms, noun));
    } else if filters.min_bedrooms.is_some() || filters.max_bedrooms.is_some() {
        let mut range = Vec::new();
        if let Some(min) = filters.min_bedrooms {
            range.push(format!("{}+", min));
        }
        if let Some(max) = filters.max_bedrooms {
            range.push(format!("up to {}", max));
        }
        parts.push(format!("{} bedrooms", range.join(" ")));
    }

    if let Some(country) = filters.country {
        parts.push(format!("in {}", title_case(country.as_str())));
    }

    match (filters.min_price, filters.max_price) {
        (Some(min), Some(max)) => parts.push(format!(
            "between ${} and ${}",
            group_thousands(min),
            group_thousands(max)
        )),
        (None, Some(max)) => parts.push(format!("under ${}", group_thousands(max))),
        (Some(min), None) => parts.push(format!("above ${}", group_thousands(min))),
        (None, None) => {}
    }

    if filters.goal == Some(InvestmentGoal::GoldenVisa) {
        parts.push("eligible for Golden Visa programs".to_string());
    }

    if let Some(status) = filters.status {
        parts.push(format!("({})", humanize_enum(status.as_str())));
    }

    parts
}

/// `CYPRUS` -> `Cyprus`
pub fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// `OFF_PLAN` -> `off plan`
pub fn humanize_enum(value: &str) -> String {
    value.replace('_', " ").to_lowercase()
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
