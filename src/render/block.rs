//! Box assembly: borders, header/footer framing, and section separators.

use crate::config::{DEFAULT_MAX_WIDTH, DEFAULT_MIN_WIDTH};
use crate::model::LogLine;
use crate::render::encode::encode_with;
use crate::render::pad::{char_len, pad_right, truncate};
use crate::render::wrap::wrap_line;

/// One render target: an ordered sequence of lines plus framing options.
///
/// A block is built fresh per log call, rendered once, and discarded. The
/// render is a pure function of the block's fields; nothing persists between
/// renders.
#[derive(Debug, Clone)]
pub struct Block {
    lines: Vec<LogLine>,
    header: String,
    footer: String,
    min_width: usize,
    max_width: usize,
    replacements: Vec<(char, char)>,
}

/// A display line after wrapping, encoding, and label truncation.
enum Row {
    Content(String),
    Rule,
    Labeled(String),
}

impl Block {
    /// Create a block over `lines` with default widths and no framing.
    pub fn new(lines: Vec<LogLine>) -> Self {
        Self {
            lines,
            header: String::new(),
            footer: String::new(),
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            replacements: Vec::new(),
        }
    }

    /// Set the header string, framed into the top border.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Set the footer string, framed into the bottom border.
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    /// Set the minimum content width. Clamped to the maximum width at render
    /// time.
    pub fn min_width(mut self, min_width: usize) -> Self {
        self.min_width = min_width;
        self
    }

    /// Set the maximum content width used for wrapping and truncation.
    pub fn max_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    /// Set exact character pre-substitutions applied before the encoder's
    /// category scan (project-specific glyph swaps).
    pub fn replacements(mut self, replacements: Vec<(char, char)>) -> Self {
        self.replacements = replacements;
        self
    }

    /// Render the block into bordered rows, one string per log write.
    ///
    /// Every returned row is exactly `w + 4` characters wide, where `w` is
    /// the computed content width: the maximum over the clamped minimum
    /// width, framed header/footer lengths, every wrapped content line, and
    /// every section label.
    pub fn render(&self) -> Vec<String> {
        let max_w = self.max_width.max(1);
        let label_max = max_w.saturating_sub(2);

        let mut rows = Vec::new();
        for line in &self.lines {
            match line {
                LogLine::Content(text) => {
                    for display in wrap_line(text, max_w) {
                        rows.push(Row::Content(encode_with(&display, &self.replacements)));
                    }
                }
                LogLine::SectionBreak(label) if label.is_empty() => rows.push(Row::Rule),
                LogLine::SectionBreak(label) => {
                    let label = truncate(&encode_with(label, &self.replacements), label_max);
                    rows.push(Row::Labeled(label));
                }
            }
        }

        let header = truncate(&self.header, label_max);
        let footer = truncate(&self.footer, label_max);

        let min_w = self.min_width.min(max_w);
        let mut w = min_w
            .max(2 + char_len(&header))
            .max(2 + char_len(&footer));
        for row in &rows {
            w = w.max(match row {
                Row::Content(line) => char_len(line),
                Row::Rule => 0,
                // A labeled separator needs len + 1 columns so its fill never
                // goes negative.
                Row::Labeled(label) => char_len(label) + 1,
            });
        }

        let mut out = Vec::with_capacity(rows.len() + 2);
        out.push(border(&header, w, '╔', '╗'));
        for row in rows {
            out.push(match row {
                Row::Content(line) => format!("║ {} ║", pad_right(&line, w, ' ')),
                Row::Rule => format!("╟{}╢", "─".repeat(w + 2)),
                Row::Labeled(label) => {
                    let frame = if label.is_empty() {
                        "──".to_string()
                    } else {
                        format!("┤{label}├")
                    };
                    let fill = (w.saturating_sub(char_len(&label))).saturating_sub(1);
                    format!("╟─{}{}╢", frame, "─".repeat(fill))
                }
            });
        }
        out.push(border(&footer, w, '╚', '╝'));
        out
    }
}

/// Build a top or bottom border row, framing `text` when it is non-empty.
fn border(text: &str, w: usize, left: char, right: char) -> String {
    let framed = if text.is_empty() {
        String::new()
    } else {
        format!("╡{text}╞")
    };
    format!("{left}═{}{right}", pad_right(&framed, w + 1, '═'))
}

/// Render sentinel-convention lines into bordered rows.
///
/// Each input line starting with the `BR` sentinel becomes a section
/// separator (see [`LogLine::from_sentinel`]); everything else is content.
/// This is the plain-strings entry point matching a line-oriented sink; the
/// returned rows are handed to the log writer one by one.
pub fn render<S: AsRef<str>>(
    lines: &[S],
    header: &str,
    footer: &str,
    min_width: usize,
    max_width: usize,
) -> Vec<String> {
    let lines = lines
        .iter()
        .map(|line| LogLine::from_sentinel(line.as_ref()))
        .collect();
    Block::new(lines)
        .header(header)
        .footer(footer)
        .min_width(min_width)
        .max_width(max_width)
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width_of(row: &str) -> usize {
        row.chars().count()
    }

    #[test]
    fn hello_world_with_header_is_three_rows() {
        let rows = render(&["hello world"], "GET /", "", 10, 20);
        // w = max(10, 2 + 5, 11) = 11
        assert_eq!(
            rows,
            vec!["╔═╡GET /╞═════╗", "║ hello world ║", "╚═════════════╝"]
        );
    }

    #[test]
    fn section_sentinel_renders_separator_only() {
        let rows = render(&["BR section label"], "", "", 10, 40);
        assert_eq!(rows.len(), 3);
        // w = len("section label") + 1, so the fill is empty here.
        assert_eq!(rows[1], "╟─┤section label├╢");
        // No content row anywhere.
        assert!(!rows.iter().any(|r| r.starts_with('║')));
    }

    #[test]
    fn blank_sentinel_renders_full_width_rule() {
        let rows = render(&["BR"], "", "", 10, 40);
        assert_eq!(rows[1], format!("╟{}╢", "─".repeat(12)));
    }

    #[test]
    fn every_row_is_w_plus_four_wide() {
        let rows = render(
            &["hello world", "BR params", "a much longer line of content here", "BR"],
            "GET /users",
            "12ms",
            48,
            196,
        );
        let w = 48; // widest input is the min_width here
        for row in &rows {
            assert_eq!(width_of(row), w + 4, "row has wrong width: {row:?}");
        }
    }

    #[test]
    fn width_grows_to_longest_content_line() {
        let long = "x".repeat(60);
        let rows = render(&[long.as_str()], "", "", 10, 196);
        for row in &rows {
            assert_eq!(width_of(row), 60 + 4);
        }
    }

    #[test]
    fn min_width_is_clamped_to_max_width() {
        let rows = render(&["hi"], "", "", 100, 20);
        // min_w clamps to 20, content is short, so w = 20.
        for row in &rows {
            assert_eq!(width_of(row), 24);
        }
    }

    #[test]
    fn header_longer_than_max_is_truncated_with_ellipsis() {
        let header = "h".repeat(50);
        let rows = render(&["x"], header.as_str(), "", 10, 20);
        let top = &rows[0];
        assert!(top.contains('…'), "expected truncated header: {top:?}");
        // Framed header fits: ╡ + 18 chars + ╞ inside the border.
        assert!(top.contains(&format!("╡{}…╞", "h".repeat(17))));
    }

    #[test]
    fn footer_is_framed_in_bottom_border() {
        let rows = render(&["x"], "", "took 3ms", 10, 40);
        let bottom = rows.last().unwrap();
        assert!(bottom.starts_with("╚═╡took 3ms╞"));
        assert!(bottom.ends_with('╝'));
    }

    #[test]
    fn empty_line_renders_blank_padded_row() {
        let rows = render(&[""], "", "", 10, 40);
        assert_eq!(rows[1], format!("║ {} ║", " ".repeat(10)));
    }

    #[test]
    fn control_characters_are_escaped_before_measuring() {
        let rows = render(&["a\tb"], "", "", 1, 40);
        assert_eq!(rows[1], "║ a\\u0009b ║");
    }

    #[test]
    fn wrapped_rows_carry_continuation_marker() {
        let line = "z".repeat(50);
        let rows = render(&[line.as_str()], "", "", 1, 20);
        assert_eq!(rows.len(), 5); // border + 3 content + border
        assert!(rows[2].starts_with("║ ↳   "));
        assert!(rows[3].starts_with("║ ↳   "));
    }

    #[test]
    fn long_section_label_participates_in_width() {
        let label = "s".repeat(30);
        let rows = render(&[format!("BR {label}")], "", "", 10, 196);
        // w must cover len(label) + 1 so the separator fill stays in range.
        for row in &rows {
            assert_eq!(width_of(row), 30 + 1 + 4);
        }
    }

    #[test]
    fn degenerate_max_width_does_not_panic() {
        for max_w in 0..4 {
            let rows = render(&["some text", "BR label"], "hd", "ft", 10, max_w);
            assert!(rows.len() >= 2);
        }
    }

    #[test]
    fn tagged_lines_render_without_sentinel_sniffing() {
        let rows = Block::new(vec![
            LogLine::content("BR is just text here"),
            LogLine::section("real break"),
        ])
        .min_width(10)
        .max_width(60)
        .render();
        // The content line keeps its literal BR text.
        assert!(rows[1].contains("BR is just text here"));
        assert!(rows[2].starts_with("╟─┤real break├"));
    }

    #[test]
    fn replacements_apply_before_encoding() {
        let rows = Block::new(vec![LogLine::content("a\tb")])
            .min_width(1)
            .max_width(40)
            .replacements(vec![('\t', '⇥')])
            .render();
        assert_eq!(rows[1], "║ a⇥b ║");
    }
}
