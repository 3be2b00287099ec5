//! The collapse-state engine and tree serializer.
//!
//! This is the core of the crate: everything else (styling, ANSI output,
//! the session layer) is glue around it. The pieces compose linearly:
//!
//! - [`path`] — deterministic structural path strings for locations in a
//!   JSON value, and resolution of a path back to its value.
//! - [`state`] — [`CollapseSet`], the set of container paths currently
//!   collapsed. One set per tree view.
//! - [`render`] — [`TreeRenderer`], which turns a value plus a collapse
//!   set into a [`RenderNode`] tree, honoring collapsed containers as
//!   single summarized placeholders.
//!
//! A front end parses JSON once, renders repeatedly, and translates each
//! toggle interaction into a path applied to the collapse set followed by
//! a full re-render. There is no incremental patching; correctness relies
//! on the render being a deterministic function of its inputs.

pub mod path;
pub mod render;
pub mod state;

pub use path::{Segment, child_path, resolve};
pub use render::{
    ContainerKind, Entry, PrimitiveKind, RenderNode, TreeRenderer, TreeRendererConfig,
};
pub use state::CollapseSet;
