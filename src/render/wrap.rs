//! Greedy word-wrapping with continuation markers.
//!
//! A raw line may contain embedded newlines; each becomes a physical line
//! prefixed with the continuation marker. Each physical line is then greedily
//! word-wrapped to the maximum content width, breaking at a space when one is
//! in reach and cutting straight through words that are longer than a whole
//! line. Wrap-generated continuation lines carry the same marker; the marker
//! itself does not count against the wrap width, matching line-break-insertion
//! wrappers that reset the column counter at the break.

/// Visual indent prefixed to continued physical lines: a turn arrow and
/// three spaces.
pub const CONTINUATION_MARKER: &str = "↳   ";

/// Wrap one raw line into display lines, one entry per bordered row.
///
/// An empty input produces a single empty display line (rendered as a blank
/// padded row, not omitted).
pub fn wrap_line(line: &str, max_w: usize) -> Vec<String> {
    let marked = line.replace('\n', &format!("\n{CONTINUATION_MARKER}"));
    let mut out = Vec::new();
    for segment in marked.split('\n') {
        for (i, piece) in wrap_segment(segment, max_w).into_iter().enumerate() {
            if i == 0 {
                out.push(piece);
            } else {
                out.push(format!("{CONTINUATION_MARKER}{piece}"));
            }
        }
    }
    out
}

/// Greedy wrap of a single physical line to `max_w` character columns.
///
/// Breaks at the last space inside the window when there is one, consuming
/// the break space; otherwise cuts mid-word at exactly `max_w` characters.
fn wrap_segment(segment: &str, max_w: usize) -> Vec<String> {
    let max_w = max_w.max(1);
    let chars: Vec<char> = segment.chars().collect();
    let mut pieces = Vec::new();
    let mut start = 0;
    while chars.len() - start > max_w {
        let window_end = start + max_w;
        // A space exactly at the window edge still allows a full-width piece.
        let break_at = (start + 1..=window_end).rev().find(|&i| chars[i] == ' ');
        match break_at {
            Some(i) => {
                pieces.push(chars[start..i].iter().collect());
                start = i + 1;
            }
            None => {
                pieces.push(chars[start..window_end].iter().collect());
                start = window_end;
            }
        }
    }
    pieces.push(chars[start..].iter().collect());
    pieces
}
