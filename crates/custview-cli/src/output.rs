//! Formatted output helpers for CLI commands.

use custview_page::render::info_card::FieldRow;

/// Formats card rows as `label<TAB>value` lines.
///
/// Rows with no value are skipped so missing known columns do not show
/// up as blank lines.
#[must_use]
pub fn format_rows(rows: &[FieldRow]) -> String {
    rows.iter()
        .filter(|row| !row.value.is_empty())
        .map(|row| format!("{}\t{}\n", row.label, row.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str, value: &str) -> FieldRow {
        FieldRow {
            key: label.into(),
            label: label.into(),
            value: value.into(),
        }
    }

    #[test]
    fn format_rows_one_line_per_row() {
        let out = format_rows(&[row("氏名", "桃太郎さん"), row("年齢", "30")]);
        assert_eq!(out, "氏名\t桃太郎さん\n年齢\t30\n");
    }

    #[test]
    fn format_rows_skips_blank_values() {
        assert_eq!(format_rows(&[row("性別", "")]), "");
    }
}
