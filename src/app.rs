//! Main application state and UI coordination

use std::time::Duration;

use eframe::egui;

use crate::core::gateway;
use crate::core::schema::{ColorMode, ColorScheme, Layout};
use crate::core::store::PortfolioStore;
use crate::render::html;
use crate::ui::{
    collections::{EducationPanel, ExperiencePanel, ProjectsPanel},
    forms::{BasicsForm, ContactForm, ThemeForm},
    json_editor::JsonEditorPanel,
    preview::PreviewPanel,
};

/// View mode for the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    Editor,
    Preview,
    #[default]
    Split,
}

/// Active editor section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTab {
    #[default]
    Basics,
    Contact,
    Theme,
    Projects,
    Education,
    Experience,
    Json,
}

impl EditorTab {
    const ALL: [EditorTab; 7] = [
        EditorTab::Basics,
        EditorTab::Contact,
        EditorTab::Theme,
        EditorTab::Projects,
        EditorTab::Education,
        EditorTab::Experience,
        EditorTab::Json,
    ];

    fn label(self) -> &'static str {
        match self {
            EditorTab::Basics => "Basics",
            EditorTab::Contact => "Contact",
            EditorTab::Theme => "Theme",
            EditorTab::Projects => "Projects",
            EditorTab::Education => "Education",
            EditorTab::Experience => "Experience",
            EditorTab::Json => "JSON",
        }
    }
}

struct StatusLine {
    ok: bool,
    message: String,
}

/// Main application state
pub struct PortfolioApp {
    /// The single live document and its persisted slot
    store: PortfolioStore,
    view_mode: ViewMode,
    editor_tab: EditorTab,
    json_editor: JsonEditorPanel,
    /// Ephemeral preview light/dark toggle; never persisted
    preview_scheme: Option<ColorScheme>,
    confirm_reset: bool,
    status: Option<StatusLine>,
}

impl PortfolioApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let store = PortfolioStore::open();
        let json_editor = JsonEditorPanel::new(&store);

        Self {
            store,
            view_mode: ViewMode::Split,
            editor_tab: EditorTab::Basics,
            json_editor,
            preview_scheme: None,
            confirm_reset: false,
            status: None,
        }
    }

    fn report_ok(&mut self, message: impl Into<String>) {
        self.status = Some(StatusLine {
            ok: true,
            message: message.into(),
        });
    }

    fn report_err(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{message}");
        self.status = Some(StatusLine { ok: false, message });
    }

    /// Import a portfolio file, replacing the live document on success.
    fn import_portfolio(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Portfolio JSON", &["json"])
            .pick_file()
        else {
            return;
        };
        match gateway::read_portfolio_file(&path) {
            Ok(portfolio) => {
                self.store.replace(portfolio);
                self.json_editor.reload(&self.store);
                self.report_ok(format!("Imported {}", path.display()));
            }
            Err(e) => self.report_err(e.to_string()),
        }
    }

    /// Export the document as a JSON file.
    fn export_json(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("portfolio.json")
            .save_file()
        else {
            return;
        };
        match gateway::write_portfolio_file(&path, self.store.portfolio()) {
            Ok(()) => self.report_ok(format!("Exported {}", path.display())),
            Err(e) => self.report_err(e.to_string()),
        }
    }

    /// Export the standalone document for one layout variant.
    fn export_html(&mut self, layout: Layout) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("index.html")
            .save_file()
        else {
            return;
        };
        match std::fs::write(&path, html::standalone_document(layout)) {
            Ok(()) => {
                self.report_ok(format!("Exported {}", path.display()));
                if let Err(e) = open::that(&path) {
                    tracing::warn!("Failed to open {}: {e}", path.display());
                }
            }
            Err(e) => self.report_err(format!("Failed to write {}: {e}", path.display())),
        }
    }

    /// Export both artifacts into one folder: the data file next to the
    /// standalone document, using the document's own layout.
    fn export_both(&mut self) {
        let Some(dir) = rfd::FileDialog::new().pick_folder() else {
            return;
        };
        let json_path = dir.join("portfolio.json");
        if let Err(e) = gateway::write_portfolio_file(&json_path, self.store.portfolio()) {
            self.report_err(e.to_string());
            return;
        }
        let html_path = dir.join("index.html");
        let layout = self.store.portfolio().theme.layout;
        match std::fs::write(&html_path, html::standalone_document(layout)) {
            Ok(()) => {
                self.report_ok(format!("Exported portfolio to {}", dir.display()));
                if let Err(e) = open::that(&dir) {
                    tracing::warn!("Failed to open {}: {e}", dir.display());
                }
            }
            Err(e) => self.report_err(format!("Failed to write {}: {e}", html_path.display())),
        }
    }

    fn save_now(&mut self) {
        match self.store.flush() {
            Ok(()) => self.report_ok("Saved"),
            Err(e) => self.report_err(format!("Failed to save: {e:#}")),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Import JSON…").clicked() {
                        self.import_portfolio();
                        ui.close();
                    }
                    if ui.button("Export JSON…").clicked() {
                        self.export_json();
                        ui.close();
                    }
                    ui.menu_button("Export Standalone HTML", |ui| {
                        if ui.button("Minimalistic").clicked() {
                            self.export_html(Layout::Minimalistic);
                            ui.close();
                        }
                        if ui.button("Showcase").clicked() {
                            self.export_html(Layout::Showcase);
                            ui.close();
                        }
                    });
                    if ui.button("Export Both…").clicked() {
                        self.export_both();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Save").clicked() {
                        self.save_now();
                        ui.close();
                    }
                    if ui.button("Reset to Default…").clicked() {
                        self.confirm_reset = true;
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    if ui
                        .selectable_label(self.view_mode == ViewMode::Editor, "Editor Only")
                        .clicked()
                    {
                        self.view_mode = ViewMode::Editor;
                        ui.close();
                    }
                    if ui
                        .selectable_label(self.view_mode == ViewMode::Preview, "Preview Only")
                        .clicked()
                    {
                        self.view_mode = ViewMode::Preview;
                        ui.close();
                    }
                    if ui
                        .selectable_label(self.view_mode == ViewMode::Split, "Split View")
                        .clicked()
                    {
                        self.view_mode = ViewMode::Split;
                        ui.close();
                    }
                });
            });
        });
    }

    /// Render the destructive-reset confirmation modal
    fn render_reset_confirmation(&mut self, ctx: &egui::Context) {
        if !self.confirm_reset {
            return;
        }
        egui::Window::new("Reset portfolio?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label("This replaces the current document with the built-in default.");
                ui.label("The change is persisted and cannot be undone.");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Reset").clicked() {
                        self.store.reset_to_default();
                        self.json_editor.reload(&self.store);
                        self.preview_scheme = None;
                        self.confirm_reset = false;
                        self.report_ok("Portfolio reset to default");
                    }
                    if ui.button("Cancel").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match &self.status {
                    Some(status) if status.ok => {
                        ui.label(egui::RichText::new(&status.message).weak());
                    }
                    Some(status) => {
                        ui.label(
                            egui::RichText::new(&status.message)
                                .color(ui.visuals().error_fg_color),
                        );
                    }
                    None => {}
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if self.store.is_dirty() {
                        ui.label(egui::RichText::new("● unsaved").weak());
                    }
                });
            });
        });
    }

    fn render_editor(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for tab in EditorTab::ALL {
                if ui
                    .selectable_label(self.editor_tab == tab, tab.label())
                    .clicked()
                {
                    if tab == EditorTab::Json && self.editor_tab != EditorTab::Json {
                        self.json_editor.reload(&self.store);
                    }
                    self.editor_tab = tab;
                }
            }
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("editor_scroll")
            .show(ui, |ui| match self.editor_tab {
                EditorTab::Basics => BasicsForm::show(ui, &mut self.store),
                EditorTab::Contact => ContactForm::show(ui, &mut self.store),
                EditorTab::Theme => ThemeForm::show(ui, &mut self.store),
                EditorTab::Projects => ProjectsPanel::show(ui, &mut self.store),
                EditorTab::Education => EducationPanel::show(ui, &mut self.store),
                EditorTab::Experience => ExperiencePanel::show(ui, &mut self.store),
                EditorTab::Json => self.json_editor.show(ui, &mut self.store),
            });
    }

    fn render_preview(&mut self, ui: &mut egui::Ui) {
        let portfolio = self.store.portfolio().clone();
        PreviewPanel::show(ui, &portfolio, &mut self.preview_scheme);
    }

    /// Apply the document's editor-chrome theme preference.
    fn apply_chrome_theme(&self, ctx: &egui::Context) {
        match self.store.portfolio().theme.mode {
            ColorMode::Light => ctx.set_visuals(egui::Visuals::light()),
            ColorMode::Dark => ctx.set_visuals(egui::Visuals::dark()),
            ColorMode::System => {}
        }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Handle keyboard shortcuts
        ctx.input(|i| {
            if i.modifiers.ctrl && i.key_pressed(egui::Key::S) {
                self.save_now();
            }
        });

        self.apply_chrome_theme(ctx);
        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);
        self.render_reset_confirmation(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.view_mode {
            ViewMode::Editor => self.render_editor(ui),
            ViewMode::Preview => self.render_preview(ui),
            ViewMode::Split => {
                let available_width = ui.available_width();
                ui.horizontal(|ui| {
                    ui.set_min_width(available_width);

                    ui.vertical(|ui| {
                        ui.set_width(available_width / 2.0 - 4.0);
                        self.render_editor(ui);
                    });

                    ui.separator();

                    ui.vertical(|ui| {
                        ui.set_width(available_width / 2.0 - 4.0);
                        self.render_preview(ui);
                    });
                });
            }
        });

        // Debounced persistence: coalesce rapid edits into one write.
        self.store.maintain();
        if self.store.is_dirty() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.store.flush() {
            tracing::error!("Failed to persist portfolio on exit: {e:#}");
        }
    }
}
