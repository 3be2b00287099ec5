//! Collapse-state tracking for container nodes.

use std::collections::HashSet;

use serde_json::Value;

use super::path::{Segment, child_path};

/// The set of container paths currently rendered in collapsed form.
///
/// Owned by a single tree view — independent views over the same document
/// each get their own set and collapse independently. Membership is only
/// meaningful for paths that resolve to a non-empty object or array:
/// empty containers render inline as `{}`/`[]` and are never added by the
/// bulk operations here.
///
/// The set is never persisted. It starts empty, is cleared entirely by
/// expand-all and by clearing the input, and is bulk-populated by
/// collapse-all.
#[derive(Debug, Clone, Default)]
pub struct CollapseSet {
    paths: HashSet<String>,
}

impl CollapseSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the container at `path` is collapsed.
    pub fn is_collapsed(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Mark the container at `path` collapsed. No-op if already collapsed.
    pub fn collapse(&mut self, path: impl Into<String>) {
        self.paths.insert(path.into());
    }

    /// Mark the container at `path` expanded. No-op if already expanded.
    pub fn expand(&mut self, path: &str) {
        self.paths.remove(path);
    }

    /// Collapse `path` if expanded, expand it if collapsed.
    pub fn toggle(&mut self, path: &str) {
        if !self.paths.remove(path) {
            self.paths.insert(path.to_string());
        }
    }

    /// Remove every path. Backs both expand-all and input clearing.
    pub fn clear(&mut self) {
        self.paths.clear();
    }

    /// Collapse every non-empty container in `root`, the root itself
    /// included (at the empty path) when it is a non-empty container.
    ///
    /// Replaces the current contents of the set. Walks the document
    /// directly — no render pass is involved. The result is a plain set,
    /// so traversal order only affects cost, never content.
    pub fn collapse_all(&mut self, root: &Value) {
        self.paths.clear();
        self.walk(root, String::new(), 0, 0);
        log::debug!("collapse_all: {} containers collapsed", self.paths.len());
    }

    /// Collapse every non-empty container at structural depth >= `depth`
    /// (the root container is depth 0).
    ///
    /// Existing entries are kept, so this layers on top of individually
    /// collapsed paths.
    pub fn collapse_deeper_than(&mut self, root: &Value, depth: usize) {
        self.walk(root, String::new(), 0, depth);
    }

    fn walk(&mut self, value: &Value, path: String, current: usize, min_depth: usize) {
        match value {
            Value::Object(map) if !map.is_empty() => {
                for (key, child) in map {
                    self.walk(
                        child,
                        child_path(&path, Segment::Field(key)),
                        current + 1,
                        min_depth,
                    );
                }
                if current >= min_depth {
                    self.paths.insert(path);
                }
            }
            Value::Array(arr) if !arr.is_empty() => {
                for (index, child) in arr.iter().enumerate() {
                    self.walk(
                        child,
                        child_path(&path, Segment::Index(index)),
                        current + 1,
                        min_depth,
                    );
                }
                if current >= min_depth {
                    self.paths.insert(path);
                }
            }
            // Primitives and empty containers are not collapsible.
            _ => {}
        }
    }

    /// Number of collapsed paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no path is collapsed.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over the collapsed paths in arbitrary order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}
