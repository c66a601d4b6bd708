use crate::domain::model::{Course, SortKey, SortOrder};
use std::cmp::Ordering;

/// Courses matching `query`, sorted by `key` in `order`.
///
/// The query is matched case-insensitively against the title, the location
/// and the price as a browser prints it (`100`, `99.5`, `1e-7`, `1e+21`).
/// An empty query keeps every course. The sort is stable, so equal keys keep
/// catalog order.
pub fn filtered_courses(
    courses: &[Course],
    query: &str,
    key: SortKey,
    order: SortOrder,
) -> Vec<Course> {
    let query = query.to_lowercase();
    let mut matched: Vec<Course> = courses
        .iter()
        .filter(|course| matches_query(course, &query))
        .cloned()
        .collect();

    matched.sort_by(|a, b| {
        let result = compare_by(a, b, key);
        match order {
            SortOrder::Asc => result,
            SortOrder::Desc => result.reverse(),
        }
    });
    matched
}

fn matches_query(course: &Course, query: &str) -> bool {
    course.title.to_lowercase().contains(query)
        || course.location.to_lowercase().contains(query)
        || price_text(course.price).contains(query)
}

/// Shortest round-trip form, switching to exponent notation below 1e-6 and
/// from 1e21 up, with an explicit `+` on positive exponents. Not lowercased.
fn price_text(price: f64) -> String {
    if price.is_nan() {
        return "NaN".to_string();
    }
    if price.is_infinite() {
        return if price > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = price.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{:e}", price);
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        };
    }
    price.to_string()
}

fn compare_by(a: &Course, b: &Course, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => a.title.cmp(&b.title),
        SortKey::Location => a.location.cmp(&b.location),
        // NaN compares equal to everything
        SortKey::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
        SortKey::SpacesAvailable => a.spaces_available.cmp(&b.spaces_available),
    }
}
