//! RenderNodeツリーのegui表示

use docscan_common::format::display_text;
use docscan_common::{NodeKind, RenderNode};
use eframe::egui::{self, Color32, RichText};

/// ルートノードを表示（ルートのMappingは見出しなしで展開）
pub fn show_root(ui: &mut egui::Ui, node: &RenderNode, id: egui::Id) {
    match node {
        RenderNode::Scalar { .. } => show_node(ui, node, id),
        _ if node.children().is_empty() => {
            ui.label(empty_marker(node));
        }
        _ => show_children(ui, node, id),
    }
}

fn show_node(ui: &mut egui::Ui, node: &RenderNode, id: egui::Id) {
    match node {
        RenderNode::Scalar { label, text } => {
            ui.horizontal_wrapped(|ui| {
                if let Some(label) = label {
                    ui.label(RichText::new(format!("{label}:")).strong());
                }
                ui.label(display_text(text));
            });
        }
        _ => match node.label() {
            Some(label) if node.children().is_empty() => {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(format!("{label}:")).strong());
                    ui.label(RichText::new(empty_marker(node)).color(Color32::from_gray(150)));
                });
            }
            Some(label) => {
                let header = match node.kind() {
                    NodeKind::List => format!("{label} [{}]", node.children().len()),
                    _ => label.to_string(),
                };
                egui::CollapsingHeader::new(RichText::new(header).strong())
                    .id_source(id)
                    .default_open(true)
                    .show(ui, |ui| show_children(ui, node, id));
            }
            None if node.children().is_empty() => {
                ui.label(empty_marker(node));
            }
            None => {
                ui.group(|ui| show_children(ui, node, id));
            }
        },
    }
}

fn show_children(ui: &mut egui::Ui, node: &RenderNode, id: egui::Id) {
    for (index, child) in node.children().iter().enumerate() {
        let child_id = id.with(index);
        if node.kind() == NodeKind::List {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("{}.", index + 1)).color(Color32::from_gray(150)));
                ui.vertical(|ui| show_node(ui, child, child_id));
            });
        } else {
            show_node(ui, child, child_id);
        }
    }
}

fn empty_marker(node: &RenderNode) -> &'static str {
    match node.kind() {
        NodeKind::List => "[]",
        _ => "{}",
    }
}
