//! Plain-text rendering of the worksheet.

use std::fmt::Write;

use sqft_core::{Worksheet, COLUMN_HEADINGS};

/// Width of each value column
const CELL: usize = 12;

/// Render the table with a header, one line per row and the grand total.
pub fn render_table(sheet: &Worksheet) -> String {
    let mut out = String::new();
    let table = sheet.table();

    // The delete column has no text counterpart
    let headings = &COLUMN_HEADINGS[..COLUMN_HEADINGS.len() - 1];

    let _ = write!(out, "{:>4} ", "#");
    for heading in headings {
        let _ = write!(out, "{:>w$}", heading, w = CELL);
    }
    out.push('\n');
    out.push_str(&"-".repeat(5 + CELL * headings.len()));
    out.push('\n');

    for row in table.rows() {
        let snap = row.snapshot();
        let marker = if table.armed_row() == Some(snap.id) { "*" } else { " " };
        let _ = writeln!(
            out,
            "{:>3}{} {:>w$}{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}",
            snap.id.0,
            marker,
            snap.height_in,
            snap.width_in,
            snap.height_feet,
            snap.width_feet,
            snap.height_rounded,
            snap.width_rounded,
            snap.square_feet,
            w = CELL,
        );
    }

    if table.is_empty() {
        out.push_str("  (no rows)\n");
    }

    out.push_str(&"-".repeat(5 + CELL * headings.len()));
    out.push('\n');
    let _ = writeln!(
        out,
        "{:>width$}{:>w$}",
        "Grand Total (sq ft):",
        sheet.grand_total_text(),
        width = 5 + CELL * (headings.len() - 1),
        w = CELL,
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqft_core::{Field, WorksheetSettings};

    #[test]
    fn test_render_fresh_worksheet() {
        let sheet = Worksheet::new("Test", WorksheetSettings::default());
        let text = render_table(&sheet);
        assert!(text.contains("Height (in)"));
        assert!(text.contains("Square ft"));
        assert!(!text.contains("Delete"));
        assert!(text.contains("  1*"));
        assert!(text.contains("0.00"));
    }

    #[test]
    fn test_render_values() {
        let mut sheet = Worksheet::new("Test", WorksheetSettings::default());
        let id = sheet.table().rows()[0].id();
        sheet.edit_row(id, Field::Height, "36");
        sheet.edit_row(id, Field::Width, "24");
        let text = render_table(&sheet);
        assert!(text.contains("3.000000"));
        assert!(text.contains("6.00"));
        assert!(text.contains("  2*"));
        assert!(text.contains("Grand Total (sq ft):"));
    }

    #[test]
    fn test_render_empty() {
        let mut sheet = Worksheet::new("Test", WorksheetSettings::default());
        let id = sheet.table().rows()[0].id();
        sheet.delete_row(id);
        let text = render_table(&sheet);
        assert!(text.contains("(no rows)"));
    }
}
