use super::review_filter::{SortBy, SortOrder};
use crate::model::ReviewStatus;

/// A three-state update for one filter dimension.
///
/// `Keep` is "the patch says nothing about this field", `Clear` is "remove
/// the constraint", and `Set` overwrites. The distinction between `Keep` and
/// `Clear` is what lets a patch drop a constraint without having to restate
/// the rest of the filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Keep,
    Clear,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Keep
    }
}

impl<T: Clone> Patch<T> {
    /// Translate a UI selection into a patch: a concrete choice sets the
    /// constraint, the "all" sentinel (`None`) clears it.
    #[must_use]
    pub fn select(selection: Option<T>) -> Self {
        selection.map_or(Self::Clear, Self::Set)
    }

    /// Resolve this patch against the current value of the field.
    #[must_use]
    pub fn resolve(&self, current: Option<&T>) -> Option<T> {
        match self {
            Self::Keep => current.cloned(),
            Self::Clear => None,
            Self::Set(value) => Some(value.clone()),
        }
    }
}

/// A partial update to a [`super::ReviewFilter`].
///
/// The default patch keeps every field, so `filter.apply(&FilterPatch::default())`
/// is the identity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterPatch {
    pub channel_id: Patch<String>,
    pub rating_min: Patch<f64>,
    pub status: Patch<ReviewStatus>,
    pub start_date: Patch<String>,
    pub end_date: Patch<String>,
    pub review_type: Patch<String>,
    pub sort_by: Patch<SortBy>,
    pub sort_order: Patch<SortOrder>,
}
