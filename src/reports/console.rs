use super::{ReportableReviews, common};
use crate::Result;
use crate::model::ReviewStatus;
use core::fmt::Write;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

/// Fixed columns before the flexible review-content column.
const DATE_WIDTH: usize = 10;
const RATING_WIDTH: usize = 6;

pub fn generate<W: Write>(report: &ReportableReviews, use_colors: bool, writer: &mut W) -> Result<()> {
    // Header: property name plus the derived statistics.
    if use_colors {
        writeln!(writer, "{}", report.display_name().bold())?;
    } else {
        writeln!(writer, "{}", report.display_name())?;
    }

    if report.property_name.is_some() {
        writeln!(writer, "  Property      : {}", report.property_id)?;
    }

    writeln!(writer, "  Total reviews : {}", report.reviews.len())?;
    writeln!(writer, "  Approved      : {}", report.stats.approved_count)?;
    writeln!(writer, "  Pending       : {}", report.stats.pending_count)?;
    writeln!(writer, "  Approval rate : {}", common::format_pct(report.stats.approval_rate_pct))?;
    writeln!(
        writer,
        "  Avg rating    : {} ({} over approved only)",
        common::format_rating(report.stats.average_approved_rating),
        common::format_rating(report.mean_approved_rating),
    )?;
    writeln!(writer)?;

    if report.reviews.is_empty() {
        writeln!(writer, "No reviews match the current filter.")?;
        return Ok(());
    }

    // Column widths sized to the data; content takes whatever space is left.
    let status_width = report
        .reviews
        .iter()
        .map(|r| r.status.as_str().len())
        .max()
        .unwrap_or(0)
        .max("STATUS".len());
    let channel_width = report
        .reviews
        .iter()
        .map(|r| r.channel.display_name.len())
        .max()
        .unwrap_or(0)
        .max("CHANNEL".len());
    let author_width = report
        .reviews
        .iter()
        .map(|r| r.author_name.len())
        .max()
        .unwrap_or(0)
        .max("AUTHOR".len());

    let used = DATE_WIDTH + RATING_WIDTH + status_width + channel_width + author_width + 10;
    let content_width = get_terminal_width().saturating_sub(used).max(20);

    writeln!(
        writer,
        "{:<DATE_WIDTH$}  {:<RATING_WIDTH$}  {:<status_width$}  {:<channel_width$}  {:<author_width$}  REVIEW",
        "DATE", "RATING", "STATUS", "CHANNEL", "AUTHOR",
    )?;

    for review in &report.reviews {
        let status_str = format!("{:<status_width$}", review.status.as_str());
        let status_col = if use_colors {
            match review.status {
                ReviewStatus::Published => status_str.green().to_string(),
                ReviewStatus::Pending => status_str.yellow().to_string(),
                ReviewStatus::Rejected => status_str.red().to_string(),
                ReviewStatus::Other(_) => status_str,
            }
        } else {
            status_str
        };

        writeln!(
            writer,
            "{:<DATE_WIDTH$}  {:<RATING_WIDTH$}  {status_col}  {:<channel_width$}  {:<author_width$}  {}",
            common::date_of(&review.created_at),
            common::format_rating(review.rating),
            review.channel.display_name,
            review.author_name,
            truncate(&review.content, content_width),
        )?;
    }

    Ok(())
}

/// Get the terminal width, defaulting to 100 if not detectable.
fn get_terminal_width() -> usize {
    terminal_size().map_or(100, |(Width(w), _)| w as usize)
}

/// Truncate text to `width` characters, appending an ellipsis when cut.
fn truncate(text: &str, width: usize) -> String {
    let mut chars = text.chars();
    let prefix: String = chars.by_ref().take(width).collect();
    if chars.next().is_some() {
        format!("{}…", prefix.trim_end())
    } else {
        prefix
    }
}
