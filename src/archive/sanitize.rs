//! Absent-field removal before the serialization boundary.
//!
//! Optional typed fields on [`PostSummary`] are omitted by the serializer
//! when unset. The free-form `extra` map can still carry explicit `null`
//! values from frontmatter - the absent marker - which downstream
//! serialization must never see. Meaningful falsy values (`0`, `""`,
//! `false`, `[]`) are left untouched.

use crate::post::{JsonMap, PostSummary};

/// Remove entries whose value is the absent marker (`null`).
pub fn strip_nulls(map: &mut JsonMap) {
    map.retain(|_, value| !value.is_null());
}

/// Sanitize one post in place for the serialization boundary.
pub fn sanitize(post: &mut PostSummary) {
    strip_nulls(&mut post.extra);
}
