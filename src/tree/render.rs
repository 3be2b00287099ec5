//! Recursive serialization of a JSON value into a renderable tree.
//!
//! [`TreeRenderer`] walks a `serde_json::Value` together with a
//! [`CollapseSet`] and produces a [`RenderNode`] tree describing how to
//! display the value. Collapsed containers become single summarized
//! placeholders whose descendants are never visited, so re-rendering
//! after every toggle stays proportional to the number of visible nodes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::path::{Segment, child_path};
use super::state::CollapseSet;

// ---------------------------------------------------------------------------
// Render tree data model
// ---------------------------------------------------------------------------

/// Display class of a primitive value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    String,
    Number,
    Bool,
    Null,
}

/// Whether a container is an object or an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Object,
    Array,
}

impl ContainerKind {
    /// Opening and closing bracket glyphs for this container kind.
    pub fn brackets(self) -> (&'static str, &'static str) {
        match self {
            Self::Object => ("{", "}"),
            Self::Array => ("[", "]"),
        }
    }

    /// Unit noun used in count summaries (`keys` / `items`).
    pub fn unit(self) -> &'static str {
        match self {
            Self::Object => "keys",
            Self::Array => "items",
        }
    }
}

/// One entry of an expanded container.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// The object key; absent for array entries.
    pub key: Option<String>,
    /// The rendered child value.
    pub node: RenderNode,
    /// Whether this is the final entry. The final entry takes no trailing
    /// separator in the presentation.
    pub is_last: bool,
}

/// The renderable tree produced by [`TreeRenderer`].
///
/// Pure data: no markup, no styling, and no back-reference to the source
/// value. Kind tags, entry counts, and keys in document order are enough
/// for a presentation layer to map the tree to output without further
/// logic.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    /// A scalar leaf. For strings, `text` holds the raw, unquoted
    /// content — quoting and escaping policy belongs to the presentation
    /// layer, which can tell strings apart by the kind tag.
    Primitive { kind: PrimitiveKind, text: String },
    /// An object or array with no entries. Always rendered inline;
    /// empty containers are not collapsible.
    EmptyContainer { kind: ContainerKind },
    /// A collapsed container summarized as a single placeholder.
    /// `len` counts direct entries only; descendants are never visited.
    Collapsed {
        path: String,
        kind: ContainerKind,
        len: usize,
    },
    /// An expanded container with its entries in source order: object
    /// keys in document insertion order, array elements in index order.
    Expanded {
        path: String,
        kind: ContainerKind,
        entries: Vec<Entry>,
    },
}

impl RenderNode {
    /// The toggle path carried by this node, if it is a collapsible
    /// container.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Collapsed { path, .. } | Self::Expanded { path, .. } => Some(path),
            Self::Primitive { .. } | Self::EmptyContainer { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for [`TreeRenderer`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TreeRendererConfig {
    /// Containers nested deeper than this render as collapsed
    /// placeholders instead of recursing (default: 512).
    ///
    /// This bounds recursion depth on pathological documents.
    /// `serde_json` itself refuses input nested past 128 levels, so the
    /// default only matters for values built in code.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    512
}

impl Default for TreeRendererConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

// ---------------------------------------------------------------------------
// TreeRenderer
// ---------------------------------------------------------------------------

/// Turns a JSON value plus a collapse set into a [`RenderNode`] tree.
///
/// Rendering is a pure function of (value, state, config): the same
/// inputs always produce the same tree, and rendering never fails for any
/// well-formed `Value`. A front end can therefore re-render from the root
/// after every toggle and replace the whole displayed tree.
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    config: TreeRendererConfig,
}

impl TreeRenderer {
    /// Create a renderer with the given configuration.
    pub fn new(config: TreeRendererConfig) -> Self {
        Self { config }
    }

    /// Render a whole document. The root is addressed by the empty path.
    pub fn render(&self, value: &Value, state: &CollapseSet) -> RenderNode {
        self.render_value(value, state, "", 0)
    }

    /// Render the subtree rooted at `path`.
    ///
    /// `path` becomes the identity prefix for every container in the
    /// output; it is not resolved against `value` — pair this with
    /// [`super::path::resolve`] when re-rendering a known location.
    pub fn render_at(&self, value: &Value, state: &CollapseSet, path: &str) -> RenderNode {
        self.render_value(value, state, path, 0)
    }

    fn render_value(
        &self,
        value: &Value,
        state: &CollapseSet,
        path: &str,
        depth: usize,
    ) -> RenderNode {
        match value {
            Value::Object(map) => self.render_object(map, state, path, depth),
            Value::Array(arr) => self.render_array(arr, state, path, depth),
            Value::String(s) => RenderNode::Primitive {
                kind: PrimitiveKind::String,
                text: s.clone(),
            },
            Value::Number(n) => RenderNode::Primitive {
                kind: PrimitiveKind::Number,
                text: n.to_string(),
            },
            Value::Bool(b) => RenderNode::Primitive {
                kind: PrimitiveKind::Bool,
                text: b.to_string(),
            },
            Value::Null => RenderNode::Primitive {
                kind: PrimitiveKind::Null,
                text: "null".to_string(),
            },
        }
    }

    fn render_object(
        &self,
        map: &serde_json::Map<String, Value>,
        state: &CollapseSet,
        path: &str,
        depth: usize,
    ) -> RenderNode {
        let kind = ContainerKind::Object;
        if map.is_empty() {
            return RenderNode::EmptyContainer { kind };
        }
        if let Some(collapsed) = self.collapsed_placeholder(state, path, depth, kind, map.len()) {
            return collapsed;
        }

        let len = map.len();
        let entries = map
            .iter()
            .enumerate()
            .map(|(i, (key, child))| Entry {
                key: Some(key.clone()),
                node: self.render_value(
                    child,
                    state,
                    &child_path(path, Segment::Field(key)),
                    depth + 1,
                ),
                is_last: i + 1 == len,
            })
            .collect();

        RenderNode::Expanded {
            path: path.to_string(),
            kind,
            entries,
        }
    }

    fn render_array(
        &self,
        arr: &[Value],
        state: &CollapseSet,
        path: &str,
        depth: usize,
    ) -> RenderNode {
        let kind = ContainerKind::Array;
        if arr.is_empty() {
            return RenderNode::EmptyContainer { kind };
        }
        if let Some(collapsed) = self.collapsed_placeholder(state, path, depth, kind, arr.len()) {
            return collapsed;
        }

        let len = arr.len();
        let entries = arr
            .iter()
            .enumerate()
            .map(|(i, child)| Entry {
                key: None,
                node: self.render_value(
                    child,
                    state,
                    &child_path(path, Segment::Index(i)),
                    depth + 1,
                ),
                is_last: i + 1 == len,
            })
            .collect();

        RenderNode::Expanded {
            path: path.to_string(),
            kind,
            entries,
        }
    }

    /// The collapsed short-circuit: a collapsed (or depth-capped)
    /// container becomes a placeholder carrying only its direct entry
    /// count. Its children are never visited.
    fn collapsed_placeholder(
        &self,
        state: &CollapseSet,
        path: &str,
        depth: usize,
        kind: ContainerKind,
        len: usize,
    ) -> Option<RenderNode> {
        if state.is_collapsed(path) || depth >= self.config.max_depth {
            Some(RenderNode::Collapsed {
                path: path.to_string(),
                kind,
                len,
            })
        } else {
            None
        }
    }
}
