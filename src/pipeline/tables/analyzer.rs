use std::collections::HashMap;

/// Column delimiter recognized by the analyzer (GFM-style tables).
const DELIMITER: char = '|';

/// Classification of a raw fragment lifted out of the document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Table,
}

/// One contiguous block of lines recognized as a table: header line,
/// separator line, zero or more data rows, verbatim text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFragment {
    text: String,
}

impl TableFragment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

/// Line-scan analyzer over an extracted document body.
///
/// Pure over its input: scanning twice yields identical output, and the
/// borrowed text is never mutated.
pub struct MarkdownAnalyzer<'a> {
    text: &'a str,
}

impl<'a> MarkdownAnalyzer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Locate every well-formed table block, in source order.
    ///
    /// A table starts at a delimiter-bearing header line immediately
    /// followed by a matching separator line, and accumulates rows until
    /// the first blank, delimiter-free, or field-count-mismatched line.
    /// The terminating line is not consumed and may itself start the
    /// next table.
    pub fn identify_tables(&self) -> HashMap<FragmentKind, Vec<TableFragment>> {
        let lines: Vec<&str> = self.text.lines().collect();
        let mut fragments = Vec::new();

        let mut i = 0;
        while i + 1 < lines.len() {
            if !lines[i].contains(DELIMITER) {
                i += 1;
                continue;
            }

            let field_count = split_fields(lines[i]).len();
            if !is_separator_line(lines[i + 1], field_count) {
                // Header candidate without a matching separator stays
                // plain text; keep scanning from the next line.
                i += 1;
                continue;
            }

            let mut end = i + 2;
            while end < lines.len() {
                let line = lines[end];
                if line.trim().is_empty()
                    || !line.contains(DELIMITER)
                    || split_fields(line).len() != field_count
                {
                    break;
                }
                end += 1;
            }

            fragments.push(TableFragment::new(lines[i..end].join("\n")));
            i = end;
        }

        tracing::debug!(tables = fragments.len(), "document body scanned for tables");

        let mut identified = HashMap::new();
        identified.insert(FragmentKind::Table, fragments);
        identified
    }
}

/// Split a line into trimmed cells, discarding the empty leading/trailing
/// cell produced by a line that starts/ends with the delimiter.
pub(crate) fn split_fields(line: &str) -> Vec<&str> {
    let trimmed = line.trim();
    let trimmed = trimmed.strip_prefix(DELIMITER).unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(DELIMITER).unwrap_or(trimmed);
    trimmed.split(DELIMITER).map(str::trim).collect()
}

/// A separator line carries only delimiters, dashes, optional colons and
/// whitespace, with the same field count as its header and at least one
/// dash per field.
fn is_separator_line(line: &str, expected_fields: usize) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }
    if !trimmed
        .chars()
        .all(|c| c == DELIMITER || c == '-' || c == ':' || c.is_whitespace())
    {
        return false;
    }

    let fields = split_fields(trimmed);
    fields.len() == expected_fields && fields.iter().all(|f| f.contains('-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(text: &str) -> Vec<TableFragment> {
        MarkdownAnalyzer::new(text)
            .identify_tables()
            .remove(&FragmentKind::Table)
            .unwrap()
    }

    const PROJECT_TABLE: &str = "\
| Project Name | Status | Completion % |
| --- | --- | --- |
| User Dashboard | In Progress | 75% |
| API Integration | Completed | 100% |";

    // --- split_fields tests ---

    #[test]
    fn splits_and_trims_cells() {
        assert_eq!(split_fields("a | b | c"), vec!["a", "b", "c"]);
        assert_eq!(split_fields("| a | b |"), vec!["a", "b"]);
        assert_eq!(split_fields("Name|Score"), vec!["Name", "Score"]);
    }

    #[test]
    fn line_without_delimiter_is_one_field() {
        assert_eq!(split_fields("plain text"), vec!["plain text"]);
    }

    // --- is_separator_line tests ---

    #[test]
    fn recognizes_separator_variants() {
        assert!(is_separator_line("---|---", 2));
        assert!(is_separator_line("| --- | :--: | ---: |", 3));
        assert!(is_separator_line("-|-", 2));
    }

    #[test]
    fn rejects_bad_separators() {
        assert!(!is_separator_line("---", 2), "field count mismatch");
        assert!(!is_separator_line("abc|def", 2), "non-separator chars");
        assert!(!is_separator_line("|   |   |", 2), "no dashes");
        assert!(!is_separator_line("", 1));
    }

    // --- identify_tables tests ---

    #[test]
    fn prose_only_yields_no_tables() {
        let found = tables("The brain has 86 billion neurons.\nIt is complex.\n");
        assert!(found.is_empty());
    }

    #[test]
    fn single_table_extracted_verbatim() {
        let text = format!("Intro paragraph.\n\n{PROJECT_TABLE}\n\nClosing remark.\n");
        let found = tables(&text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].as_str(), PROJECT_TABLE);
    }

    #[test]
    fn multiple_tables_in_source_order() {
        let text = format!("{PROJECT_TABLE}\n\nSome prose in between.\n\nName|Score\n---|---\nAlice|75%\n");
        let found = tables(&text);
        assert_eq!(found.len(), 2);
        assert!(found[0].as_str().starts_with("| Project Name"));
        assert!(found[1].as_str().starts_with("Name|Score"));
    }

    #[test]
    fn identify_tables_is_idempotent() {
        let text = format!("{PROJECT_TABLE}\n\ntrailing text\n");
        let analyzer = MarkdownAnalyzer::new(&text);
        assert_eq!(analyzer.identify_tables(), analyzer.identify_tables());
    }

    #[test]
    fn mismatched_separator_is_not_a_table() {
        // Header has two fields, separator only one.
        let found = tables("A|B\n---\nsome text\n");
        assert!(found.is_empty());
    }

    #[test]
    fn header_and_separator_only_is_valid() {
        let found = tables("Name|Score\n---|---\n");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].as_str(), "Name|Score\n---|---");
    }

    #[test]
    fn ragged_line_terminates_without_being_consumed() {
        let found = tables("A|B\n-|-\n1|2\nX|Y|Z\n");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].as_str(), "A|B\n-|-\n1|2");
    }

    #[test]
    fn terminating_line_may_start_the_next_table() {
        // The three-field header ends the first table and opens a second.
        let found = tables("A|B\n-|-\n1|2\nX|Y|Z\n-|-|-\n3|4|5\n");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].as_str(), "A|B\n-|-\n1|2");
        assert_eq!(found[1].as_str(), "X|Y|Z\n-|-|-\n3|4|5");
    }

    #[test]
    fn blank_line_terminates_table() {
        let found = tables("A|B\n-|-\n1|2\n\n3|4\n");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].as_str(), "A|B\n-|-\n1|2");
    }
}
