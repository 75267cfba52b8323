use anyhow::Result;
use eframe::egui::{self, Color32, RichText};
use eframe::egui::{FontData, FontDefinitions, FontFamily};

use docscan_common::format::display_text;
use docscan_common::types::SUPPORTED_EXTENSIONS;
use docscan_common::{render, Config, HistoryView, RenderNode, Resolution, UploadSession, UploadStatus};

use crate::io::{read_document, UiMessage, Worker};
use crate::model::{Notice, View};
use crate::tree::show_root;

pub struct DesktopApp {
    view: View,
    session: UploadSession,
    result_tree: Option<RenderNode>,
    uploading_name: Option<String>,
    history: HistoryView,
    history_loading: bool,
    history_filter: String,
    notice: Option<Notice>,
    worker: Worker,
}

impl DesktopApp {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            view: View::default(),
            session: UploadSession::new(),
            result_tree: None,
            uploading_name: None,
            history: HistoryView::new(),
            history_loading: false,
            history_filter: String::new(),
            notice: None,
            worker: Worker::new(config)?,
        })
    }

    fn choose_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Documents", SUPPORTED_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        else {
            return;
        };
        match read_document(&path) {
            Ok(file) => {
                self.session.select_file(file);
                self.result_tree = None;
            }
            Err(err) => self.notice = Some(Notice::error(format!("{err:#}"))),
        }
    }

    fn start_upload(&mut self, ctx: &egui::Context) {
        match self.session.begin_submit() {
            Ok(pending) => {
                self.uploading_name = Some(pending.file.file_name.clone());
                self.worker.upload(pending, ctx.clone());
            }
            Err(warning) => self.notice = Some(Notice::warning(warning.to_string())),
        }
    }

    fn open_history(&mut self, ctx: &egui::Context) {
        self.view = View::History;
        if !self.history_loading {
            self.history_loading = true;
            self.worker.fetch_history(ctx.clone());
        }
    }

    fn poll_messages(&mut self) {
        while let Some(msg) = self.worker.try_recv() {
            match msg {
                UiMessage::UploadDone(completed) => {
                    self.uploading_name = None;
                    match self.session.finish(completed) {
                        Resolution::Succeeded => {
                            self.result_tree = self.session.result().map(|value| render(value, None));
                        }
                        Resolution::Failed(message) => {
                            self.result_tree = None;
                            self.notice = Some(Notice::error(message));
                        }
                        Resolution::Discarded => {}
                    }
                }
                UiMessage::HistoryLoaded(fetched) => {
                    self.history_loading = false;
                    self.history.apply(fetched);
                }
            }
        }
    }

    fn render_upload(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.label("Upload a document to extract structured data using OCR and AI.");
        ui.label(RichText::new("Supported formats: PDF, PNG, JPG, JPEG.").color(Color32::from_gray(170)));
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Choose File").clicked() {
                self.choose_file();
            }
            if let Some(file) = self.session.selected_file() {
                ui.label("Selected:");
                ui.label(RichText::new(&file.file_name).strong());
            }
        });

        ui.horizontal(|ui| {
            let uploading = self.session.is_uploading();
            let label = if uploading { "Uploading..." } else { "Upload File" };
            if ui.add_enabled(self.session.can_submit(), egui::Button::new(label)).clicked() {
                self.start_upload(ctx);
            }
            if let Some(name) = &self.uploading_name {
                ui.spinner();
                ui.label(RichText::new(name).color(Color32::from_gray(170)));
            }
        });

        if self.session.status() == UploadStatus::Failed {
            if let Some(message) = self.session.error_message() {
                ui.colored_label(Color32::from_rgb(220, 90, 90), message);
            }
        }

        if let Some(tree) = &self.result_tree {
            ui.separator();
            ui.heading("Extracted Fields");
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    show_root(ui, tree, ui.make_persistent_id("upload_result"));
                });
        }
    }

    fn render_history(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("🏠 Home").clicked() {
                self.view = View::Upload;
            }
            ui.separator();
            ui.label("Filter");
            ui.text_edit_singleline(&mut self.history_filter);
            if self.history_loading {
                ui.spinner();
            }
        });
        ui.label(
            RichText::new("View and search metadata for the documents you have uploaded.")
                .color(Color32::from_gray(170)),
        );
        ui.separator();

        let rows = self.history.filtered_rows(&self.history_filter);
        ui.label(format!("{} documents", rows.len()));

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("history_grid")
                    .striped(true)
                    .num_columns(4)
                    .min_col_width(120.0)
                    .show(ui, |ui| {
                        for header in ["Filename", "Table Data", "Structured JSON", "Created At"] {
                            ui.label(RichText::new(header).strong());
                        }
                        ui.end_row();

                        for (index, row) in rows.iter().enumerate() {
                            let id = ui.make_persistent_id(("history_row", index, row.key));
                            ui.label(row.key);
                            ui.vertical(|ui| show_root(ui, &row.table_data, id.with("table")));
                            ui.vertical(|ui| show_root(ui, &row.structured_json, id.with("json")));
                            ui.label(display_text(row.created_at));
                            ui.end_row();
                        }
                    });
            });
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new(notice.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&notice.message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.notice = None;
        }
    }
}

pub fn configure_fonts(ctx: &egui::Context) {
    // 日本語ファイル名を表示できるフォントを先頭に差し込む
    let candidates = [
        r"C:\Windows\Fonts\meiryo.ttc",
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
    ];
    let Some(data) = candidates.iter().find_map(|path| std::fs::read(path).ok()) else {
        return;
    };

    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert("cjk".to_string(), FontData::from_owned(data));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts.families.entry(family).or_default().insert(0, "cjk".to_string());
    }
    ctx.set_fonts(fonts);
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.session.is_uploading() || self.history_loading {
            ctx.request_repaint();
        }
        self.poll_messages();

        let mut open_history = false;
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(match self.view {
                    View::Upload => "DocScan",
                    View::History => "Document History",
                });
                ui.separator();
                if ui.selectable_label(self.view == View::Upload, "Upload").clicked() {
                    self.view = View::Upload;
                }
                if ui.selectable_label(self.view == View::History, "History").clicked() {
                    open_history = true;
                }
                ui.separator();
                ui.label(RichText::new(self.worker.upload_url()).color(Color32::from_gray(140)));
            });
        });
        if open_history && self.view != View::History {
            self.open_history(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let enabled = self.notice.is_none();
            ui.add_enabled_ui(enabled, |ui| match self.view {
                View::Upload => self.render_upload(ui, ctx),
                View::History => self.render_history(ui),
            });
        });

        self.show_notice(ctx);
    }
}
