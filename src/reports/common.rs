//! Formatting helpers shared by the report generators.

/// Format a rating with one decimal place, dropping a trailing `.0`.
#[must_use]
pub fn format_rating(rating: f64) -> String {
    let formatted = format!("{rating:.1}");
    formatted.strip_suffix(".0").map_or(formatted.clone(), ToString::to_string)
}

/// Format a percentage rounded to whole percent, as the dashboard shows it.
#[must_use]
pub fn format_pct(pct: f64) -> String {
    format!("{}%", pct.round() as i64)
}

/// The date portion of an ISO 8601 timestamp, without parsing it.
#[must_use]
pub fn date_of(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
