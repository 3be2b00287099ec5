//! json-fold — interactive JSON tree rendering with path-addressed
//! collapse state.
//!
//! A JSON document renders as an indented, syntax-highlighted tree in
//! which any object or array node can be independently collapsed or
//! expanded. Collapse state is addressed by a structural path string
//! (`details.skills[0]`) rather than by node identity, so state survives
//! re-renders of the same document.
//!
//! Features:
//! - Path-addressed collapse state ([`tree::CollapseSet`]) — one set per
//!   tree view, no process-wide state
//! - Deterministic re-render: the output tree is a pure function of
//!   (document, collapse set)
//! - Collapsed short-circuit: a collapsed subtree costs O(1) to render
//!   regardless of its size
//! - Styled-line presentation with theme colors, tree guide lines, and
//!   OSC 8 hyperlinks ([`style`], [`ansi`])
//! - Session layer mirroring an interactive front end: load, toggle,
//!   collapse-all, compress, clipboard copy ([`session`])

/// Application version (for front ends embedding the library).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod ansi;
pub mod cli;
pub mod session;
pub mod style;
pub mod tree;

pub use session::{FormatterSession, SessionError};
pub use tree::{CollapseSet, RenderNode, TreeRenderer, TreeRendererConfig};
