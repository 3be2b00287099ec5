//! ANSI serialization of styled lines.
//!
//! Turns [`StyledLine`]s into terminal escape sequences: truecolor SGR
//! for foreground colors and text attributes, OSC 8 for hyperlinks. With
//! color disabled the writer degrades to plain text with no escapes at
//! all, which also makes output safe to pipe.

use crate::style::{StyledLine, StyledSegment};

/// Serializes styled lines to ANSI escape sequences.
#[derive(Debug, Clone)]
pub struct AnsiWriter {
    color: bool,
}

impl AnsiWriter {
    /// Create a writer. With `color: false` all styling is stripped.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Serialize one line (no trailing newline).
    pub fn line(&self, line: &StyledLine) -> String {
        if !self.color {
            return line.text();
        }
        let mut out = String::new();
        for segment in &line.segments {
            self.push_segment(segment, &mut out);
        }
        out
    }

    /// Serialize lines joined with newlines.
    pub fn render(&self, lines: &[StyledLine]) -> String {
        lines
            .iter()
            .map(|line| self.line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn push_segment(&self, segment: &StyledSegment, out: &mut String) {
        let mut codes: Vec<String> = Vec::new();
        if segment.bold {
            codes.push("1".to_string());
        }
        if segment.italic {
            codes.push("3".to_string());
        }
        if segment.underline {
            codes.push("4".to_string());
        }
        if let Some([r, g, b]) = segment.fg {
            codes.push(format!("38;2;{r};{g};{b}"));
        }

        if let Some(url) = &segment.link_url {
            out.push_str("\x1b]8;;");
            out.push_str(url);
            out.push_str("\x1b\\");
        }
        if !codes.is_empty() {
            out.push_str("\x1b[");
            out.push_str(&codes.join(";"));
            out.push('m');
        }
        out.push_str(&segment.text);
        if !codes.is_empty() {
            out.push_str("\x1b[0m");
        }
        if segment.link_url.is_some() {
            out.push_str("\x1b]8;;\x1b\\");
        }
    }
}

impl Default for AnsiWriter {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str) -> StyledSegment {
        StyledSegment {
            text: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_plain_segment_has_no_escapes() {
        let writer = AnsiWriter::new(true);
        let line = StyledLine::new(vec![seg("hello")]);
        assert_eq!(writer.line(&line), "hello");
    }

    #[test]
    fn test_colored_segment_wraps_in_sgr() {
        let writer = AnsiWriter::new(true);
        let line = StyledLine::new(vec![StyledSegment {
            fg: Some([1, 2, 3]),
            ..seg("x")
        }]);
        assert_eq!(writer.line(&line), "\x1b[38;2;1;2;3mx\x1b[0m");
    }

    #[test]
    fn test_attributes_precede_color() {
        let writer = AnsiWriter::new(true);
        let line = StyledLine::new(vec![StyledSegment {
            fg: Some([10, 20, 30]),
            bold: true,
            italic: true,
            underline: true,
            ..seg("x")
        }]);
        assert_eq!(writer.line(&line), "\x1b[1;3;4;38;2;10;20;30mx\x1b[0m");
    }

    #[test]
    fn test_hyperlink_wraps_in_osc8() {
        let writer = AnsiWriter::new(true);
        let line = StyledLine::new(vec![StyledSegment {
            link_url: Some("https://example.com".to_string()),
            ..seg("link")
        }]);
        assert_eq!(
            writer.line(&line),
            "\x1b]8;;https://example.com\x1b\\link\x1b]8;;\x1b\\"
        );
    }

    #[test]
    fn test_no_color_strips_everything() {
        let writer = AnsiWriter::new(false);
        let line = StyledLine::new(vec![StyledSegment {
            fg: Some([1, 2, 3]),
            bold: true,
            link_url: Some("https://example.com".to_string()),
            ..seg("plain")
        }]);
        assert_eq!(writer.line(&line), "plain");
    }

    #[test]
    fn test_render_joins_lines_with_newlines() {
        let writer = AnsiWriter::new(false);
        let lines = vec![StyledLine::plain("a"), StyledLine::plain("b")];
        assert_eq!(writer.render(&lines), "a\nb");
    }
}
