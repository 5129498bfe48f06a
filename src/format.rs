use unicode_width::UnicodeWidthStr;

use crate::db::Contact;

// Column widths in terminal cells, not characters. CJK text is double-width,
// so padding has to count cells or mixed-script columns drift.
pub const NAME_WIDTH: usize = 15;
pub const TITLE_WIDTH: usize = 50;
pub const EMAIL_WIDTH: usize = 45;

const HEADERS: [&str; 3] = ["姓名", "職稱", "Email"];

/// Terminal cell count of a string: East Asian Wide/Fullwidth characters
/// occupy two cells, everything else one.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Right-pad with ASCII spaces up to `width` cells. Fields already wider
/// than the column are left alone; the column overflows rather than
/// truncating.
fn pad_to_width(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(padding))
}

/// Render contacts as a fixed-column table: header row, dash separator,
/// one line per record.
pub fn render_table(contacts: &[Contact]) -> String {
    let mut lines = Vec::with_capacity(contacts.len() + 2);

    lines.push(format!(
        "{}{}{}",
        pad_to_width(HEADERS[0], NAME_WIDTH),
        pad_to_width(HEADERS[1], TITLE_WIDTH),
        pad_to_width(HEADERS[2], EMAIL_WIDTH),
    ));
    lines.push("-".repeat(NAME_WIDTH + TITLE_WIDTH + EMAIL_WIDTH));

    for c in contacts {
        lines.push(format!(
            "{}{}{}",
            pad_to_width(&c.name, NAME_WIDTH),
            pad_to_width(&c.title, TITLE_WIDTH),
            pad_to_width(&c.email, EMAIL_WIDTH),
        ));
    }

    lines.join("\n")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, title: &str, email: &str) -> Contact {
        Contact {
            name: name.to_string(),
            title: title.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn wide_chars_count_two_cells() {
        assert_eq!(display_width("王小明"), 6);
        assert_eq!(display_width("教授"), 4);
        assert_eq!(display_width("wang@example.edu"), 16);
        assert_eq!(display_width("副教授兼系主任"), 14);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn padding_fills_to_exact_cell_width() {
        // Width-6 CJK string padded to 15 cells gets exactly 9 spaces.
        let padded = pad_to_width("王小明", 15);
        assert_eq!(padded, format!("王小明{}", " ".repeat(9)));
        assert_eq!(display_width(&padded), 15);
    }

    #[test]
    fn overwide_field_is_not_truncated() {
        let long = "a".repeat(20);
        assert_eq!(pad_to_width(&long, 15), long);
    }

    #[test]
    fn table_layout() {
        let table = render_table(&[
            contact("王小明", "教授", "wang@example.edu"),
            contact("David Chen", "Assistant Professor", "david@example.edu"),
        ]);
        let lines: Vec<&str> = table.split('\n').collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("姓名"));
        assert_eq!(lines[1], "-".repeat(110));
        // Every in-width line occupies the full 110 cells.
        for line in [lines[0], lines[2], lines[3]] {
            assert_eq!(display_width(line), 110);
        }
    }

    #[test]
    fn mixed_width_columns_align() {
        let table = render_table(&[
            contact("王小明", "教授", "wang@example.edu"),
            contact("David Chen", "Assistant Professor", "david@example.edu"),
        ]);
        let rows: Vec<&str> = table.split('\n').skip(2).collect();

        // Title column starts at cell 15 in every row regardless of script.
        for row in rows {
            let mut cells = 0;
            let mut title_byte_start = None;
            for (i, ch) in row.char_indices() {
                if cells == NAME_WIDTH {
                    title_byte_start = Some(i);
                    break;
                }
                cells += unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            }
            let rest = &row[title_byte_start.unwrap()..];
            assert!(rest.starts_with("教授") || rest.starts_with("Assistant Professor"));
        }
    }

    #[test]
    fn ascii_rows_slice_back_at_fixed_offsets() {
        // For pure-ASCII fields cell offsets equal byte offsets, so the
        // padding math is directly invertible by slicing.
        let table = render_table(&[contact("Amy Wu", "Lecturer", "amy@example.edu")]);
        let row = table.split('\n').nth(2).unwrap();

        assert_eq!(row[..NAME_WIDTH].trim_end(), "Amy Wu");
        assert_eq!(row[NAME_WIDTH..NAME_WIDTH + TITLE_WIDTH].trim_end(), "Lecturer");
        assert_eq!(row[NAME_WIDTH + TITLE_WIDTH..].trim_end(), "amy@example.edu");
    }

    #[test]
    fn empty_record_set_renders_header_only() {
        let table = render_table(&[]);
        let lines: Vec<&str> = table.split('\n').collect();
        assert_eq!(lines.len(), 2);
    }
}
