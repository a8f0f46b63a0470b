//! Unified diff output for `fmt --check`

use owo_colors::OwoColorize;
use similar::{ChangeTag, TextDiff};
use std::io::{self, Write};

/// Lines of context around each hunk
pub const CONTEXT_LINES: usize = 3;

/// Write a unified diff of `old_content` against `new_content`
///
/// Returns `true` when the two differ. Nothing is written when they are equal.
pub fn write_unified<W: Write>(
    writer: &mut W,
    old_content: &str,
    new_content: &str,
    old_label: &str,
    new_label: &str,
    color: bool,
) -> io::Result<bool> {
    if old_content == new_content {
        return Ok(false);
    }

    let diff = TextDiff::from_lines(old_content, new_content);

    let paint = |text: String, tag: Option<ChangeTag>| -> String {
        if !color {
            return text;
        }
        match tag {
            Some(ChangeTag::Delete) => text.red().to_string(),
            Some(ChangeTag::Insert) => text.green().to_string(),
            Some(ChangeTag::Equal) => text,
            None => text.cyan().to_string(),
        }
    };

    writeln!(writer, "--- {old_label}")?;
    writeln!(writer, "+++ {new_label}")?;

    for group in diff.grouped_ops(CONTEXT_LINES) {
        // Hunk header
        if let Some(first) = group.first()
            && let Some(last) = group.last()
        {
            let old_start = first.old_range().start + 1;
            let old_len = last.old_range().end - first.old_range().start;
            let new_start = first.new_range().start + 1;
            let new_len = last.new_range().end - first.new_range().start;
            writeln!(
                writer,
                "{}",
                paint(format!("@@ -{old_start},{old_len} +{new_start},{new_len} @@"), None)
            )?;
        }

        for op in &group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => '-',
                    ChangeTag::Insert => '+',
                    ChangeTag::Equal => ' ',
                };
                let line = paint(format!("{sign}{}", change.value()), Some(change.tag()));
                write!(writer, "{line}")?;
                if !change.value().ends_with('\n') {
                    writeln!(writer)?;
                }
            }
        }
    }

    Ok(true)
}
