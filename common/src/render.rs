//! 構造化結果レンダラー
//!
//! スキーマ未知のJSON値を表示用ツリー（RenderNode）に分類する。
//!
//! 分類順:
//! 1. 配列 → List（各要素を再帰的に分類、インデックスは表示キーのみ）
//! 2. オブジェクト → Mapping（各フィールドを `render(値, キー)` で分類、挿入順を維持）
//! 3. それ以外（文字列・数値・真偽値・null） → Scalar
//!
//! 深さ制限は設けない。サービスからの値は serde_json のパース時点で
//! 再帰上限（128段）に収まっている。

use serde_json::Value;

/// 表示ノードの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Scalar,
    List,
    Mapping,
}

/// JSON値の表示用分類
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    Scalar {
        label: Option<String>,
        text: String,
    },
    List {
        label: Option<String>,
        items: Vec<RenderNode>,
    },
    Mapping {
        label: Option<String>,
        fields: Vec<RenderNode>,
    },
}

/// JSON値をRenderNodeツリーに変換
///
/// # Arguments
/// * `value` - 任意形状のJSON値
/// * `label` - 親Mappingでのフィールド名（ルート・配列要素は None）
///
/// # Examples
/// ```
/// use docscan_common::render::render;
/// use serde_json::json;
///
/// let node = render(&json!({"invoice_number": "INV-1"}), None);
/// assert_eq!(node.children().len(), 1);
/// assert_eq!(node.children()[0].text(), Some("INV-1"));
/// ```
pub fn render(value: &Value, label: Option<&str>) -> RenderNode {
    let label = label.map(str::to_string);
    match value {
        Value::Array(items) => RenderNode::List {
            label,
            items: items.iter().map(|item| render(item, None)).collect(),
        },
        Value::Object(map) => RenderNode::Mapping {
            label,
            fields: map
                .iter()
                .map(|(key, field)| render(field, Some(key)))
                .collect(),
        },
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => RenderNode::Scalar {
            label,
            text: scalar_text(value),
        },
    }
}

/// スカラー値のテキスト表現（nullは空文字）
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        // コンテナはrender側で分類済み
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

impl RenderNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            RenderNode::Scalar { .. } => NodeKind::Scalar,
            RenderNode::List { .. } => NodeKind::List,
            RenderNode::Mapping { .. } => NodeKind::Mapping,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            RenderNode::Scalar { label, .. }
            | RenderNode::List { label, .. }
            | RenderNode::Mapping { label, .. } => label.as_deref(),
        }
    }

    /// Scalarのテキスト（コンテナは None）
    pub fn text(&self) -> Option<&str> {
        match self {
            RenderNode::Scalar { text, .. } => Some(text),
            _ => None,
        }
    }

    /// 子ノード（Scalarは空）
    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Scalar { .. } => &[],
            RenderNode::List { items, .. } => items,
            RenderNode::Mapping { fields, .. } => fields,
        }
    }

    /// ラベルで子フィールドを探す
    pub fn field(&self, label: &str) -> Option<&RenderNode> {
        match self {
            RenderNode::Mapping { fields, .. } => {
                fields.iter().find(|f| f.label() == Some(label))
            }
            _ => None,
        }
    }

    /// 全Scalarのテキストを文書順（深さ優先）で列挙
    pub fn scalar_texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_scalars(&mut out);
        out
    }

    fn collect_scalars<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            RenderNode::Scalar { text, .. } => out.push(text),
            RenderNode::List { items: children, .. }
            | RenderNode::Mapping { fields: children, .. } => {
                for child in children {
                    child.collect_scalars(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// 元のJSONからスカラーを文書順に取り出す
    fn json_scalars(value: &Value) -> Vec<String> {
        match value {
            Value::Array(items) => items.iter().flat_map(json_scalars).collect(),
            Value::Object(map) => map.values().flat_map(json_scalars).collect(),
            other => vec![scalar_text(other)],
        }
    }

    #[test]
    fn test_render_empty_object() {
        let node = render(&json!({}), None);
        assert_eq!(node.kind(), NodeKind::Mapping);
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_render_empty_array() {
        let node = render(&json!([]), None);
        assert_eq!(node.kind(), NodeKind::List);
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_render_scalars() {
        assert_eq!(render(&json!("hello"), None).text(), Some("hello"));
        assert_eq!(render(&json!(42), None).text(), Some("42"));
        assert_eq!(render(&json!(3.5), None).text(), Some("3.5"));
        assert_eq!(render(&json!(true), None).text(), Some("true"));
        assert_eq!(render(&json!(false), None).text(), Some("false"));
    }

    #[test]
    fn test_render_null_is_empty_text() {
        let node = render(&Value::Null, Some("tenant"));
        assert_eq!(node.kind(), NodeKind::Scalar);
        assert_eq!(node.text(), Some(""));
        assert_eq!(node.label(), Some("tenant"));
    }

    #[test]
    fn test_render_nested_structure() {
        let node = render(&json!({"a": [1, {"b": 2}], "c": "x"}), None);

        let expected = RenderNode::Mapping {
            label: None,
            fields: vec![
                RenderNode::List {
                    label: Some("a".into()),
                    items: vec![
                        RenderNode::Scalar { label: None, text: "1".into() },
                        RenderNode::Mapping {
                            label: None,
                            fields: vec![RenderNode::Scalar {
                                label: Some("b".into()),
                                text: "2".into(),
                            }],
                        },
                    ],
                },
                RenderNode::Scalar {
                    label: Some("c".into()),
                    text: "x".into(),
                },
            ],
        };
        assert_eq!(node, expected);
    }

    #[test]
    fn test_render_preserves_insertion_order() {
        let value: Value =
            serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let node = render(&value, None);
        let labels: Vec<_> = node.children().iter().filter_map(|c| c.label()).collect();
        assert_eq!(labels, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_list_items_have_no_label() {
        let node = render(&json!(["x", "y"]), Some("tags"));
        assert_eq!(node.label(), Some("tags"));
        assert!(node.children().iter().all(|c| c.label().is_none()));
    }

    #[test]
    fn test_field_lookup() {
        let node = render(&json!({"name": "Widget", "qty": 3}), None);
        assert_eq!(node.field("qty").and_then(|n| n.text()), Some("3"));
        assert!(node.field("missing").is_none());
        assert!(render(&json!([1]), None).field("0").is_none());
    }

    #[test]
    fn test_scalar_leaves_match_source() {
        let samples = [
            json!(null),
            json!("only"),
            json!([]),
            json!({"raw_text": "Lease\nAgreement", "table": [["a", "b"], ["c", null]],
                   "structured_json": {"rent": 1200, "pets": false, "parties": ["A", "B"]}}),
            json!([[[[1]]], {"k": [{"k": [{}]}]}, -0.5, ""]),
        ];
        for value in &samples {
            let node = render(value, None);
            let expected = json_scalars(value);
            assert_eq!(node.scalar_texts(), expected, "value: {}", value);
        }
    }

    #[test]
    fn test_deep_nesting_terminates() {
        let mut value = json!("leaf");
        for i in 0..100 {
            value = if i % 2 == 0 { json!([value]) } else { json!({"n": value}) };
        }
        let node = render(&value, None);
        assert_eq!(node.scalar_texts(), vec!["leaf"]);
    }
}
