use crate::extraction::PageContent;
use tracing::debug;

/// Reconstruct tables from pdftotext -layout output.
///
/// pdftotext -layout preserves column alignment using spaces, so a table
/// row is a line with two or more segments separated by runs of 2+ spaces.
/// Blank lines delimit blocks; a block containing at least one multi-column
/// row is a table.
///
/// Cells that wrap onto several lines show up as lines with a single
/// segment. Those are folded back into the previous row, newline-joined,
/// under whichever column their start position lines up with.
///
/// A single-segment line always continues the row above it, never the row
/// below. When pdftotext prints a merged status marker on the middle line
/// of a group, the names above the marker end up in the preceding row and
/// share its status instead.
pub fn find_tables(pages: &[PageContent]) -> Vec<ExtractedTable> {
    let mut tables = Vec::new();

    for page in pages {
        let mut builder = TableBuilder::default();

        for line in &page.lines {
            if line.trim().is_empty() {
                if let Some(table) = builder.finish(page.page_number) {
                    tables.push(table);
                }
                continue;
            }
            builder.push_line(line);
        }

        // Reached end of page while inside a block
        if let Some(table) = builder.finish(page.page_number) {
            tables.push(table);
        }
    }

    tables
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTable {
    pub page_number: usize,
    /// Cells may hold several newline-separated entries.
    pub rows: Vec<Vec<String>>,
}

impl ExtractedTable {
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }
}

/// Columns within this many characters of a cell start are treated as aligned.
const ALIGN_TOLERANCE: usize = 2;

#[derive(Default)]
struct TableBuilder {
    rows: Vec<Vec<String>>,
    /// Start column of each cell of the last multi-segment row.
    anchors: Vec<usize>,
}

impl TableBuilder {
    fn push_line(&mut self, line: &str) {
        let segments = split_columns(line);

        match segments.as_slice() {
            [] => {}
            [single] if !self.rows.is_empty() => {
                let col = self.anchor_for(single.column);
                let row = self.rows.len();
                if let Some(cell) = self.rows.last_mut().and_then(|r| r.get_mut(col)) {
                    debug!(
                        text = single.text,
                        column = col,
                        row,
                        "continuation line joined to previous row"
                    );
                    cell.push('\n');
                    cell.push_str(single.text);
                }
            }
            _ => {
                self.anchors = segments.iter().map(|s| s.column).collect();
                self.rows
                    .push(segments.iter().map(|s| s.text.to_string()).collect());
            }
        }
    }

    fn anchor_for(&self, column: usize) -> usize {
        self.anchors
            .iter()
            .rposition(|&a| a <= column + ALIGN_TOLERANCE)
            .unwrap_or(0)
    }

    fn finish(&mut self, page_number: usize) -> Option<ExtractedTable> {
        let rows = std::mem::take(&mut self.rows);
        self.anchors.clear();

        if rows.iter().any(|r| r.len() >= 2) {
            Some(ExtractedTable { page_number, rows })
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment<'a> {
    /// Character column where the segment starts.
    column: usize,
    text: &'a str,
}

/// Split a line by gaps of 2+ whitespace characters, keeping start columns.
fn split_columns(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start: Option<(usize, usize)> = None;
    let mut end = 0;
    let mut gap = 0;

    for (column, (i, c)) in line.char_indices().enumerate() {
        if c.is_whitespace() {
            gap += 1;
            if gap == 2 {
                if let Some((s, col)) = start.take() {
                    segments.push(Segment {
                        column: col,
                        text: &line[s..end],
                    });
                }
            }
        } else {
            if start.is_none() {
                start = Some((i, column));
            }
            end = i + c.len_utf8();
            gap = 0;
        }
    }

    if let Some((s, col)) = start {
        segments.push(Segment {
            column: col,
            text: &line[s..end],
        });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(lines: &[&str]) -> PageContent {
        PageContent {
            page_number: 1,
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_split_columns() {
        let segments = split_columns("  Praia de Iracema     I");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "Praia de Iracema");
        assert_eq!(segments[0].column, 2);
        assert_eq!(segments[1].text, "I");
        assert_eq!(segments[1].column, 23);
    }

    #[test]
    fn test_split_columns_single_spaces_stay_together() {
        let segments = split_columns("Barra do Ceará");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "Barra do Ceará");
    }

    #[test]
    fn test_split_columns_counts_chars_not_bytes() {
        let segments = split_columns("Ceará  P");
        assert_eq!(segments[1].column, 7);
    }

    #[test]
    fn test_find_tables_basic() {
        let pages = vec![page(&[
            "BOLETIM DAS PRAIAS DE FORTALEZA",
            "",
            "Nome                 Status",
            "Praia do Futuro      P",
            "Praia de Iracema     I",
            "",
            "Rodapé",
        ])];

        let tables = find_tables(&pages);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].column_count(), 2);
        assert_eq!(tables[0].rows.len(), 3);
        assert_eq!(tables[0].rows[1], vec!["Praia do Futuro", "P"]);
    }

    #[test]
    fn test_wrapped_name_joins_previous_cell() {
        let pages = vec![page(&[
            "Praia A              P",
            "Praia B",
        ])];

        let tables = find_tables(&pages);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows, vec![vec!["Praia A\nPraia B", "P"]]);
    }

    #[test]
    fn test_wrapped_status_joins_status_cell() {
        let pages = vec![page(&[
            "Praia A              P",
            "                     I",
        ])];

        let tables = find_tables(&pages);
        assert_eq!(tables[0].rows, vec![vec!["Praia A", "P\nI"]]);
    }

    #[test]
    fn test_continuation_before_marker_joins_row_above() {
        let pages = vec![page(&[
            "Praia de Iracema     I",
            "Praia do Futuro",
            "Sabiaguaba           P",
            "Titanzinho",
        ])];

        let tables = find_tables(&pages);
        assert_eq!(
            tables[0].rows,
            vec![
                vec!["Praia de Iracema\nPraia do Futuro", "I"],
                vec!["Sabiaguaba\nTitanzinho", "P"],
            ]
        );
    }

    #[test]
    fn test_text_only_block_is_not_a_table() {
        let pages = vec![page(&["Tipos de amostras: Água do mar.", "Outra linha"])];
        assert!(find_tables(&pages).is_empty());
    }

    #[test]
    fn test_tables_on_each_page() {
        let pages = vec![
            page(&["Praia do Futuro      P"]),
            PageContent {
                page_number: 2,
                lines: vec!["Pirambu      I".into()],
            },
        ];
        let tables = find_tables(&pages);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[1].page_number, 2);
    }
}
