use super::ReportableReviews;
use crate::Result;
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(report: &ReportableReviews, writer: &mut W) -> Result<()> {
    let mut property_obj = serde_json::Map::new();
    let _ = property_obj.insert("id".to_string(), json!(report.property_id));
    if let Some(name) = &report.property_name {
        let _ = property_obj.insert("name".to_string(), json!(name));
    }

    let output = json!({
        "property": property_obj,
        "stats": {
            "approvedCount": report.stats.approved_count,
            "pendingCount": report.stats.pending_count,
            "approvalRatePct": report.stats.approval_rate_pct,
            "averageApprovedRating": report.stats.average_approved_rating,
            "meanApprovedRating": report.mean_approved_rating,
        },
        "reviews": report.reviews,
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
