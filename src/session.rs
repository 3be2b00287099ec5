//! Document session glue.
//!
//! [`FormatterSession`] pairs a parsed document with its collapse set and
//! exposes the operations a front end wires to user actions: load,
//! render, toggle, collapse-all, expand-all, clear, compress, pretty
//! copy, and example loading. The tree core below it stays oblivious to
//! input text, clipboards, and error presentation — parse failures stop
//! here and never reach the renderer.

use serde_json::Value;

use crate::tree::{CollapseSet, RenderNode, TreeRenderer, TreeRendererConfig};

/// Bundled example document for the example-loading action.
pub const EXAMPLE_JSON: &str = r#"{
  "name": "User profile",
  "details": {
    "personal": {
      "name": "Ada Lovelace",
      "age": 36,
      "address": {
        "city": "London",
        "street": "St James's Square",
        "coordinates": {
          "latitude": 51.5074,
          "longitude": -0.1278
        }
      }
    },
    "professional": {
      "company": "Analytical Engines Ltd",
      "position": "Engineer",
      "skills": ["Rust", "Python", "Mathematics"],
      "projects": [
        {
          "name": "Engine A",
          "status": "completed",
          "homepage": "https://example.com/engine-a",
          "team": ["Ada", "Charles"]
        },
        {
          "name": "Engine B",
          "status": "in-progress",
          "homepage": null,
          "team": []
        }
      ]
    }
  },
  "settings": {
    "notifications": true,
    "theme": "dark",
    "preferences": {
      "language": "en-GB",
      "timezone": "UTC"
    }
  }
}"#;

/// Errors surfaced at the session boundary.
///
/// The tree core never fails for a parsed document: stale paths resolve
/// to nothing and rendering is total, so everything that can go wrong
/// lives here.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The input text is not valid JSON. Carries the parser diagnostic
    /// for inline display.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// An operation that needs a document ran before one was loaded.
    #[error("no document loaded")]
    NoDocument,
    /// The system clipboard rejected the copy.
    #[cfg(feature = "clipboard")]
    #[error("clipboard error: {0}")]
    Clipboard(String),
}

/// One interactive tree view: a parsed document plus its collapse set.
///
/// Each view owns its own state — two sessions over the same document
/// collapse independently, and nothing is shared process-wide.
pub struct FormatterSession {
    document: Option<Value>,
    collapsed: CollapseSet,
    renderer: TreeRenderer,
}

impl FormatterSession {
    /// Create an empty session with default renderer settings.
    pub fn new() -> Self {
        Self::with_config(TreeRendererConfig::default())
    }

    /// Create an empty session with explicit renderer settings.
    pub fn with_config(config: TreeRendererConfig) -> Self {
        Self {
            document: None,
            collapsed: CollapseSet::new(),
            renderer: TreeRenderer::new(config),
        }
    }

    /// Parse `text` and make it the current document.
    ///
    /// Replacing the document drops the collapse set: paths encode
    /// structural position and do not survive a document swap.
    pub fn load(&mut self, text: &str) -> Result<(), SessionError> {
        let value: Value = serde_json::from_str(text)?;
        log::debug!("document loaded ({} bytes of input)", text.len());
        self.document = Some(value);
        self.collapsed.clear();
        Ok(())
    }

    /// Load the bundled example document.
    pub fn load_example(&mut self) {
        self.load(EXAMPLE_JSON)
            .expect("bundled example document is valid JSON");
    }

    /// The current document, if one is loaded.
    pub fn document(&self) -> Option<&Value> {
        self.document.as_ref()
    }

    /// The collapse set backing this session.
    pub fn collapse_set(&self) -> &CollapseSet {
        &self.collapsed
    }

    /// Mutable access to the collapse set, for callers that drive
    /// collapse state directly (e.g. CLI flags).
    pub fn collapse_set_mut(&mut self) -> &mut CollapseSet {
        &mut self.collapsed
    }

    /// Render the current document, or `None` when nothing is loaded.
    pub fn render(&self) -> Option<RenderNode> {
        self.document
            .as_ref()
            .map(|doc| self.renderer.render(doc, &self.collapsed))
    }

    /// Toggle the container at `path`. The caller re-renders afterwards;
    /// there is no incremental update.
    pub fn toggle(&mut self, path: &str) {
        self.collapsed.toggle(path);
    }

    /// Collapse every non-empty container of the current document.
    pub fn collapse_all(&mut self) {
        if let Some(doc) = &self.document {
            self.collapsed.collapse_all(doc);
        }
    }

    /// Collapse every non-empty container at structural depth >= `depth`.
    pub fn collapse_deeper_than(&mut self, depth: usize) {
        if let Some(doc) = &self.document {
            self.collapsed.collapse_deeper_than(doc, depth);
        }
    }

    /// Expand every container.
    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    /// Drop the document and all collapse state.
    pub fn clear(&mut self) {
        log::debug!("session cleared");
        self.document = None;
        self.collapsed.clear();
    }

    /// Parse `text` and re-serialize it with no extraneous whitespace.
    ///
    /// Operates on raw input rather than the loaded document, matching
    /// the compress action of an input box that may hold text newer than
    /// the last formatted document.
    pub fn compress(text: &str) -> Result<String, SessionError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(value.to_string())
    }

    /// Serialize the current document at two spaces per nesting level —
    /// the copy payload.
    pub fn pretty_text(&self) -> Result<String, SessionError> {
        let doc = self.document.as_ref().ok_or(SessionError::NoDocument)?;
        Ok(serde_json::to_string_pretty(doc)?)
    }

    /// Copy the pretty-printed document to the system clipboard.
    #[cfg(feature = "clipboard")]
    pub fn copy_to_clipboard(&self) -> Result<(), SessionError> {
        let text = self.pretty_text()?;
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| SessionError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| SessionError::Clipboard(e.to_string()))?;
        log::info!("copied pretty-printed document to clipboard");
        Ok(())
    }
}

impl Default for FormatterSession {
    fn default() -> Self {
        Self::new()
    }
}
