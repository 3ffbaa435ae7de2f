//! # Frontmatter Extraction
//!
//! The header block of a `SKILL.md` opens on the very first line with a
//! `---` delimiter and closes at the next line consisting solely of `---`.
//! Extraction does no YAML parsing; callers check keys by pattern.

/// Delimiter line that opens and closes the header block.
pub const DELIMITER: &str = "---";

/// Return the text between the opening and closing delimiter lines.
///
/// Returns `None` when the document does not start with a delimiter line or
/// the block is never closed. Never fails on malformed input.
pub fn extract_frontmatter(text: &str) -> Option<&str> {
    let mut lines = text.split_inclusive('\n');
    let first = lines.next()?;
    if !first.ends_with('\n') || trim_eol(first) != DELIMITER {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if trim_eol(line) == DELIMITER {
            return Some(trim_eol(&text[start..offset]));
        }
        offset += line.len();
    }
    None
}

fn trim_eol(s: &str) -> &str {
    s.trim_end_matches(['\n', '\r'])
}
