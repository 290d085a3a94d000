//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 posts)
/// - `plural_s(1)` -> `""` (1 post)
/// - `plural_s(5)` -> `"s"` (5 posts)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
