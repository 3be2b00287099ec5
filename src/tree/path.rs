//! Structural path addressing for locations within a JSON document.
//!
//! A path is a plain string built from field-name and array-index
//! accessors: the empty string addresses the root, `user.tags[0]`
//! addresses the first element of the `tags` array inside the `user`
//! object. Paths encode structural position, not node identity: two
//! structurally equal locations in the same document always yield the
//! same path, and a path stays valid across re-renders as long as the
//! document's shape is unchanged. Replacing or reshaping the document
//! invalidates previously recorded paths.

use serde_json::Value;

/// One accessor step from a parent container to a child value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// An object field, addressed by key.
    Field(&'a str),
    /// An array element, addressed by index.
    Index(usize),
}

/// Build the path of a child node from its parent's path.
///
/// Object fields append `.key` (bare `key` at the root); array indices
/// append `[i]` with no separator before the bracket. Keys are spliced in
/// verbatim: a key containing `.`, `[`, or `]` produces a path that
/// collides with a sibling or nested path. Callers that must be robust
/// against such keys need a structured path encoding instead; this module
/// deliberately trades that for flat strings.
pub fn child_path(parent: &str, segment: Segment<'_>) -> String {
    match segment {
        Segment::Field(key) if parent.is_empty() => key.to_string(),
        Segment::Field(key) => format!("{parent}.{key}"),
        Segment::Index(index) => format!("{parent}[{index}]"),
    }
}

/// Resolve a path against a document root.
///
/// Walks the document by successive field/index lookup, treating each
/// `[n]` accessor as a synthetic `.n` segment. Returns `None` the first
/// time a segment has no corresponding child — the signal of a stale
/// path, e.g. one recorded before the document was replaced. The empty
/// path resolves to the root itself.
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for part in split_accessors(path) {
        current = match current {
            Value::Object(map) => map.get(part)?,
            Value::Array(arr) => arr.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Split a path into its accessor parts, normalizing `[n]` to `n`.
///
/// Empty parts (the root path, or the gap before a leading `[`) are
/// skipped.
fn split_accessors(path: &str) -> impl Iterator<Item = &str> {
    path.split(['.', '['])
        .map(|part| part.strip_suffix(']').unwrap_or(part))
        .filter(|part| !part.is_empty())
}
