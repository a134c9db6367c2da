use super::{ReportableReviews, common};
use crate::Result;
use core::fmt::Write;
use std::borrow::Cow;

pub fn generate<W: Write>(report: &ReportableReviews, writer: &mut W) -> Result<()> {
    writeln!(writer, "id,createdAt,rating,status,channel,type,author,content")?;

    for review in &report.reviews {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            escape_csv(&review.id),
            escape_csv(&review.created_at),
            common::format_rating(review.rating),
            escape_csv(review.status.as_str()),
            escape_csv(&review.channel.display_name),
            escape_csv(review.review_type.as_deref().unwrap_or_default()),
            escape_csv(&review.author_name),
            escape_csv(&review.content),
        )?;
    }

    Ok(())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn escape_csv_no_special_chars() {
        let result = escape_csv("clean and tidy");
        assert_eq!(result, "clean and tidy");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn escape_csv_with_quotes() {
        let result = escape_csv("a \"quoted\" word");
        assert_eq!(result, "\"a \"\"quoted\"\" word\"");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn escape_csv_with_comma() {
        let result = escape_csv("small, but cozy");
        assert_eq!(result, "\"small, but cozy\"");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn escape_csv_with_newline() {
        let result = escape_csv("line one\nline two");
        assert_eq!(result, "\"line one\nline two\"");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn escape_csv_empty() {
        let result = escape_csv("");
        assert_eq!(result, "");
        assert!(matches!(result, Cow::Borrowed(_)));
    }
}
