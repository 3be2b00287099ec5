//! Styled-line presentation of rendered trees.
//!
//! Maps [`RenderNode`] trees to terminal-agnostic styled lines:
//!
//! - **Syntax highlighting**: distinct colors for keys, strings, numbers,
//!   booleans, null
//! - **Tree guide lines**: vertical `│` characters at each indentation level
//! - **Collapse markers**: `▼`/`▶` indicators on container lines
//! - **Count annotations**: dim `// N keys` / `// N items` next to
//!   expanded containers, and `N keys`/`N items` summaries inside
//!   collapsed placeholders
//! - **URL detection**: string values containing URLs carry a hyperlink
//!   target for OSC 8 rendering
//!
//! String quoting and JSON escaping happen here — the render tree hands
//! over raw string content, and this layer owns the escaping policy. No
//! escape sequences are produced here either; see [`crate::ansi`] for the
//! terminal serialization of the styled lines.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::tree::{PrimitiveKind, RenderNode};


// ---------------------------------------------------------------------------
// Styled text primitives
// ---------------------------------------------------------------------------

/// A single line of styled output.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledLine {
    /// The styled segments making up this line.
    pub segments: Vec<StyledSegment>,
}

impl StyledLine {
    /// Creates a new styled line from segments.
    pub fn new(segments: Vec<StyledSegment>) -> Self {
        Self { segments }
    }

    /// Creates a plain unstyled line from text.
    pub fn plain(text: &str) -> Self {
        Self {
            segments: vec![StyledSegment {
                text: text.to_string(),
                ..Default::default()
            }],
        }
    }

    /// Concatenated text of all segments, styling stripped.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A run of uniformly styled text within a line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledSegment {
    /// The text content.
    pub text: String,
    /// Foreground color as [r, g, b].
    pub fg: Option<[u8; 3]>,
    /// Whether this segment is bold.
    pub bold: bool,
    /// Whether this segment is italic.
    pub italic: bool,
    /// Whether this segment is underlined.
    pub underline: bool,
    /// Hyperlink target, rendered as an OSC 8 link.
    pub link_url: Option<String>,
}

/// Color palette for tree output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Default foreground color [r, g, b].
    pub fg: [u8; 3],
    /// Default background color [r, g, b].
    pub bg: [u8; 3],
    /// The 16 ANSI colors [r, g, b] (indices 0–15).
    pub palette: [[u8; 3]; 16],
}

impl Default for ThemeColors {
    /// Catppuccin Mocha-inspired palette for vibrant, readable output.
    fn default() -> Self {
        Self {
            fg: [205, 214, 244],
            bg: [30, 30, 46],
            palette: [
                [69, 71, 90],    // 0  Black (Surface0)
                [243, 139, 168], // 1  Red
                [166, 227, 161], // 2  Green
                [249, 226, 175], // 3  Yellow (warm gold)
                [137, 180, 250], // 4  Blue
                [203, 166, 247], // 5  Magenta (mauve)
                [148, 226, 213], // 6  Cyan (teal)
                [186, 194, 222], // 7  White (Subtext0)
                [108, 112, 134], // 8  Bright black (Overlay0)
                [235, 160, 172], // 9  Bright red (maroon)
                [166, 227, 161], // 10 Bright green
                [249, 226, 175], // 11 Bright yellow
                [116, 199, 236], // 12 Bright blue (sapphire)
                [245, 194, 231], // 13 Bright magenta (pink)
                [137, 220, 235], // 14 Bright cyan (sky)
                [205, 214, 244], // 15 Bright white (Text)
            ],
        }
    }
}

impl ThemeColors {
    /// Cyan — object keys.
    pub fn key_color(&self) -> [u8; 3] {
        self.palette[6]
    }

    /// Green — string values.
    pub fn string_color(&self) -> [u8; 3] {
        self.palette[2]
    }

    /// Bright yellow — numbers.
    pub fn number_color(&self) -> [u8; 3] {
        self.palette[11]
    }

    /// Magenta — booleans.
    pub fn bool_color(&self) -> [u8; 3] {
        self.palette[5]
    }

    /// Dim grey — guides, counts, collapse markers, null.
    pub fn dim_color(&self) -> [u8; 3] {
        self.palette[8]
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for [`TreeStyler`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TreeStyleConfig {
    /// Show `// N keys` / `// N items` next to expanded containers
    /// (default: true).
    #[serde(default = "default_true")]
    pub show_counts: bool,
    /// Prefix container lines with `▼`/`▶` toggle markers (default: true).
    #[serde(default = "default_true")]
    pub collapse_markers: bool,
    /// Visually distinguish null values (default: true).
    #[serde(default = "default_true")]
    pub highlight_nulls: bool,
    /// Attach hyperlink targets to URL-bearing strings (default: true).
    #[serde(default = "default_true")]
    pub clickable_urls: bool,
    /// Elide string values longer than this (default: 200).
    #[serde(default = "default_max_string_length")]
    pub max_string_length: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_string_length() -> usize {
    200
}

impl Default for TreeStyleConfig {
    fn default() -> Self {
        Self {
            show_counts: true,
            collapse_markers: true,
            highlight_nulls: true,
            clickable_urls: true,
            max_string_length: default_max_string_length(),
        }
    }
}

// ---------------------------------------------------------------------------
// URL regex
// ---------------------------------------------------------------------------

fn re_url() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"https?://[^\s"]+"#).expect("regex pattern is valid and should always compile")
    })
}

// ---------------------------------------------------------------------------
// TreeStyler
// ---------------------------------------------------------------------------

/// Converts [`RenderNode`] trees into styled lines.
pub struct TreeStyler {
    config: TreeStyleConfig,
}

impl TreeStyler {
    /// Create a styler with the given configuration.
    pub fn new(config: TreeStyleConfig) -> Self {
        Self { config }
    }

    /// Style a rendered tree into display lines.
    pub fn style(&self, node: &RenderNode, theme: &ThemeColors) -> Vec<StyledLine> {
        let mut lines = Vec::new();
        self.style_node(node, theme, 0, lead_for(0, theme), &mut lines);
        lines
    }

    /// Emit `node` at `depth`. `lead` carries the segments that must open
    /// the node's first line: the guide prefix plus, for object entries,
    /// the key and separator. Containers merge their opening bracket onto
    /// that line.
    fn style_node(
        &self,
        node: &RenderNode,
        theme: &ThemeColors,
        depth: usize,
        mut lead: Vec<StyledSegment>,
        lines: &mut Vec<StyledLine>,
    ) {
        match node {
            RenderNode::Primitive { kind, text } => {
                lead.push(self.value_segment(*kind, text, theme));
                lines.push(StyledLine::new(lead));
            }
            RenderNode::EmptyContainer { kind } => {
                let (open, close) = kind.brackets();
                lead.push(plain_segment(&format!("{open}{close}")));
                lines.push(StyledLine::new(lead));
            }
            RenderNode::Collapsed { kind, len, .. } => {
                let (open, close) = kind.brackets();
                if self.config.collapse_markers {
                    lead.push(dim_segment("▶ ", theme));
                }
                lead.push(plain_segment(open));
                lead.push(StyledSegment {
                    text: format!(" {len} {} ", kind.unit()),
                    fg: Some(theme.dim_color()),
                    italic: true,
                    ..Default::default()
                });
                lead.push(plain_segment(close));
                lines.push(StyledLine::new(lead));
            }
            RenderNode::Expanded { kind, entries, .. } => {
                let (open, close) = kind.brackets();
                if self.config.collapse_markers {
                    lead.push(dim_segment("▼ ", theme));
                }
                lead.push(plain_segment(open));
                if self.config.show_counts {
                    lead.push(StyledSegment {
                        text: format!("  // {} {}", entries.len(), kind.unit()),
                        fg: Some(theme.dim_color()),
                        italic: true,
                        ..Default::default()
                    });
                }
                lines.push(StyledLine::new(lead));

                for entry in entries {
                    let mut entry_lead = lead_for(depth + 1, theme);
                    if let Some(key) = &entry.key {
                        entry_lead.push(key_segment(key, theme));
                        entry_lead.push(plain_segment(": "));
                    }
                    self.style_node(&entry.node, theme, depth + 1, entry_lead, lines);

                    // Trailing comma on the last line of every entry but
                    // the final one.
                    if !entry.is_last
                        && let Some(last_line) = lines.last_mut()
                    {
                        last_line.segments.push(plain_segment(","));
                    }
                }

                let mut closing = lead_for(depth, theme);
                closing.push(plain_segment(close));
                lines.push(StyledLine::new(closing));
            }
        }
    }

    /// Style a scalar value with its kind color.
    fn value_segment(&self, kind: PrimitiveKind, text: &str, theme: &ThemeColors) -> StyledSegment {
        match kind {
            PrimitiveKind::String => {
                let display = if text.chars().count() > self.config.max_string_length {
                    let truncated: String =
                        text.chars().take(self.config.max_string_length).collect();
                    quoted(&format!("{truncated}..."))
                } else {
                    quoted(text)
                };

                let link_url = if self.config.clickable_urls {
                    re_url().find(text).map(|m| m.as_str().to_string())
                } else {
                    None
                };
                let underline = link_url.is_some();

                StyledSegment {
                    text: display,
                    fg: Some(theme.string_color()),
                    underline,
                    link_url,
                    ..Default::default()
                }
            }
            PrimitiveKind::Number => StyledSegment {
                text: text.to_string(),
                fg: Some(theme.number_color()),
                ..Default::default()
            },
            PrimitiveKind::Bool => StyledSegment {
                text: text.to_string(),
                fg: Some(theme.bool_color()),
                ..Default::default()
            },
            PrimitiveKind::Null => {
                let fg = if self.config.highlight_nulls {
                    Some(theme.dim_color())
                } else {
                    None
                };
                StyledSegment {
                    text: text.to_string(),
                    fg,
                    italic: self.config.highlight_nulls,
                    ..Default::default()
                }
            }
        }
    }
}

impl Default for TreeStyler {
    fn default() -> Self {
        Self::new(TreeStyleConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

/// Tree guide prefix for a given depth: one `│  ` column per level.
fn guides(depth: usize) -> String {
    "│  ".repeat(depth)
}

/// Leading segments for a line at `depth`: the guide prefix in dim grey,
/// or nothing at the root.
fn lead_for(depth: usize, theme: &ThemeColors) -> Vec<StyledSegment> {
    if depth == 0 {
        Vec::new()
    } else {
        vec![StyledSegment {
            text: guides(depth),
            fg: Some(theme.dim_color()),
            ..Default::default()
        }]
    }
}

/// Create a plain (unstyled) segment.
fn plain_segment(text: &str) -> StyledSegment {
    StyledSegment {
        text: text.to_string(),
        ..Default::default()
    }
}

/// Create a dim-styled segment (same dim grey as guide characters).
fn dim_segment(text: &str, theme: &ThemeColors) -> StyledSegment {
    StyledSegment {
        text: text.to_string(),
        fg: Some(theme.dim_color()),
        ..Default::default()
    }
}

/// Create a styled segment for an object key.
fn key_segment(key: &str, theme: &ThemeColors) -> StyledSegment {
    StyledSegment {
        text: quoted(key),
        fg: Some(theme.key_color()),
        ..Default::default()
    }
}

/// Quote and JSON-escape string content for display.
fn quoted(content: &str) -> String {
    serde_json::to_string(content).expect("string serialization is infallible")
}
