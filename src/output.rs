//! 端末向けの出力整形

use docscan_common::format::{display_text, write_text};
use docscan_common::{render, HistoryRow, RenderNode};
use serde_json::Value;

/// 抽出結果の表示
pub fn format_result(value: &Value) -> String {
    let mut out = String::from("Extracted Fields\n");
    write_text(&mut out, &render(value, None), 1);
    out
}

/// 履歴1行分のブロック
pub fn format_history_row(row: &HistoryRow<'_>) -> String {
    let mut out = format!("📄 {}  ({})\n", row.key, display_text(row.created_at));
    write_section(&mut out, "Table Data", &row.table_data);
    write_section(&mut out, "Structured JSON", &row.structured_json);
    out
}

fn write_section(out: &mut String, title: &str, node: &RenderNode) {
    out.push_str("  ");
    out.push_str(title);
    out.push_str(":\n");
    write_text(out, node, 2);
}

/// 履歴一覧（空なら件数行のみ）
pub fn format_history(rows: &[HistoryRow<'_>]) -> String {
    let mut out = format!("Document History: {}件\n", rows.len());
    for row in rows {
        out.push('\n');
        out.push_str(&format_history_row(row));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use docscan_common::{HistoryRecord, HistoryView};
    use serde_json::json;

    #[test]
    fn test_format_result() {
        let text = format_result(&json!({"invoice_number": "INV-1", "total": null}));
        assert_eq!(text, "Extracted Fields\n  invoice_number: INV-1\n  total: -\n");
    }

    #[test]
    fn test_format_history_rows() {
        let mut view = HistoryView::new();
        view.apply(Ok(vec![
            HistoryRecord {
                filename: "lease.pdf".into(),
                table_data: json!([["Rent", "1200"]]),
                structured_json: json!({"tenant": "A"}),
                created_at: "2025-01-06".into(),
            },
            HistoryRecord {
                filename: "scan.png".into(),
                table_data: json!([]),
                structured_json: json!({}),
                created_at: String::new(),
            },
        ]));

        let text = format_history(&view.rows());
        assert_eq!(
            text,
            "Document History: 2件\n\
             \n\
             📄 lease.pdf  (2025-01-06)\n\
             \x20\x20Table Data:\n\
             \x20\x20\x20\x20-\n\
             \x20\x20\x20\x20\x20\x20- Rent\n\
             \x20\x20\x20\x20\x20\x20- 1200\n\
             \x20\x20Structured JSON:\n\
             \x20\x20\x20\x20tenant: A\n\
             \n\
             📄 scan.png  (-)\n\
             \x20\x20Table Data:\n\
             \x20\x20\x20\x20[]\n\
             \x20\x20Structured JSON:\n\
             \x20\x20\x20\x20{}\n"
        );
    }

    #[test]
    fn test_format_empty_history() {
        assert_eq!(format_history(&[]), "Document History: 0件\n");
    }
}
