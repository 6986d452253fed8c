//! Field-level merge rule for configuration layers.

/// Value of one field after layering `over` onto `base`.
///
/// A present override always wins, whatever its value.
pub(super) fn overlay<T: Clone>(base: &Option<T>, over: &Option<T>) -> Option<T> {
    over.as_ref().or(base.as_ref()).cloned()
}
