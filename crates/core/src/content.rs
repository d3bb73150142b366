//! Body-text formatting for the detail overlay.
//!
//! Content strings are plain text with light structure: a blank line
//! (double newline) separates paragraphs, a single newline is a line
//! break within a paragraph.

/// One formatted paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub lines: Vec<String>,
}

/// Escape `<` and `>` only. The data source is author-controlled, so the
/// scope is deliberately this narrow; widening it would rewrite text the
/// author meant to look like markup.
fn escape_markup(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

/// Split content into paragraphs, preserving order. Each block is
/// trimmed, empty blocks are dropped, and interior single newlines become
/// the lines of the paragraph.
pub fn format_content(text: &str) -> Vec<Paragraph> {
    escape_markup(text)
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| Paragraph {
            lines: block.split('\n').map(str::to_string).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_paragraphs_and_line_breaks() {
        let paragraphs = format_content("A\n\nB\nC");
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].lines, vec!["A"]);
        assert_eq!(paragraphs[1].lines, vec!["B", "C"]);
    }

    #[test]
    fn drops_empty_blocks_and_trims() {
        let paragraphs = format_content("  first  \n\n\n\n  second  ");
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].lines, vec!["first"]);
        assert_eq!(paragraphs[1].lines, vec!["second"]);
    }

    #[test]
    fn escapes_angle_brackets_only() {
        let paragraphs = format_content("<script>alert(\"hi\") & more</script>");
        assert_eq!(
            paragraphs[0].lines,
            vec!["&lt;script&gt;alert(\"hi\") & more&lt;/script&gt;"]
        );
    }

    #[test]
    fn empty_content_yields_no_paragraphs() {
        assert!(format_content("").is_empty());
        assert!(format_content("\n\n\n\n").is_empty());
    }

    #[test]
    fn preserves_paragraph_order() {
        let paragraphs = format_content("one\n\ntwo\n\nthree");
        let firsts: Vec<&str> = paragraphs
            .iter()
            .map(|p| p.lines[0].as_str())
            .collect();
        assert_eq!(firsts, vec!["one", "two", "three"]);
    }
}
