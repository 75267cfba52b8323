//! RenderNodeのテキスト整形（端末表示用）
//!
//! - `label: text` 形式の行
//! - 配列要素は `-` の箇条書き
//! - 1段ごとに2スペースのインデント
//! - 空文字・nullは `-`、空コンテナは `[]` / `{}`

use crate::render::RenderNode;

const INDENT: &str = "  ";

/// 空のスカラーに表示するプレースホルダ
pub const PLACEHOLDER: &str = "-";

/// ツリー全体をテキストに整形
pub fn to_text(node: &RenderNode) -> String {
    let mut out = String::new();
    write_text(&mut out, node, 0);
    out
}

/// 指定の深さからツリーを書き出す（末尾改行付き）
pub fn write_text(out: &mut String, node: &RenderNode, depth: usize) {
    write_node(out, node, depth, "");
}

/// スカラー表示用テキスト（空ならプレースホルダ）
pub fn display_text(text: &str) -> &str {
    if text.is_empty() {
        PLACEHOLDER
    } else {
        text
    }
}

fn write_node(out: &mut String, node: &RenderNode, depth: usize, bullet: &str) {
    let mut head = format!("{}{}", INDENT.repeat(depth), bullet);
    if let Some(label) = node.label() {
        head.push_str(label);
        head.push(':');
    }

    match node {
        RenderNode::Scalar { text, .. } => {
            if !head.trim().is_empty() && !head.ends_with(' ') {
                head.push(' ');
            }
            // 2行目以降は1段深く揃える
            let mut lines = display_text(text).lines();
            head.push_str(lines.next().unwrap_or(PLACEHOLDER));
            push_line(out, &head);
            let continuation = INDENT.repeat(depth + 1);
            for line in lines {
                push_line(out, &format!("{}{}", continuation, line));
            }
        }
        RenderNode::List { items: children, .. } | RenderNode::Mapping { fields: children, .. } => {
            let empty_marker = if matches!(node, RenderNode::List { .. }) { "[]" } else { "{}" };
            let has_head = !head.trim().is_empty();

            if children.is_empty() {
                if has_head && !head.ends_with(' ') {
                    head.push(' ');
                }
                head.push_str(empty_marker);
                push_line(out, &head);
                return;
            }

            // ルートのMappingは見出し行を出さずに直下へ展開
            let child_depth = if has_head {
                push_line(out, &head);
                depth + 1
            } else {
                depth
            };
            let child_bullet = if matches!(node, RenderNode::List { .. }) { "- " } else { "" };
            for child in children {
                write_node(out, child, child_depth, child_bullet);
            }
        }
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}
