//! Raw JSON editor panel
//!
//! Holds a free-form text draft of the document. The draft may be broken or
//! schema-invalid at any time; the store is only overwritten on an explicit,
//! successful Apply.

use eframe::egui;

use crate::core::gateway;
use crate::core::store::PortfolioStore;

enum Feedback {
    Ok(String),
    Err(String),
}

/// JSON editor state: a text draft plus the result of the last action.
pub struct JsonEditorPanel {
    text: String,
    feedback: Option<Feedback>,
}

impl JsonEditorPanel {
    pub fn new(store: &PortfolioStore) -> Self {
        Self {
            text: gateway::export_text(store.portfolio()),
            feedback: None,
        }
    }

    /// Re-sync the draft from the live document, discarding local edits.
    pub fn reload(&mut self, store: &PortfolioStore) {
        self.text = gateway::export_text(store.portfolio());
        self.feedback = None;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, store: &mut PortfolioStore) {
        ui.horizontal(|ui| {
            ui.heading("JSON");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Apply").clicked() {
                    self.apply(store);
                }
                if ui.button("Format").clicked() {
                    self.format();
                }
                if ui.button("Reload").clicked() {
                    self.reload(store);
                }
            });
        });
        ui.label(
            egui::RichText::new("Edit the document directly. Apply validates before replacing.")
                .weak()
                .small(),
        );

        match &self.feedback {
            Some(Feedback::Ok(message)) => {
                ui.label(egui::RichText::new(format!("✔ {message}")).color(egui::Color32::GREEN));
            }
            Some(Feedback::Err(message)) => {
                ui.label(
                    egui::RichText::new(message)
                        .monospace()
                        .small()
                        .color(ui.visuals().error_fg_color),
                );
            }
            None => {}
        }
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("json_editor_scroll")
            .show(ui, |ui| {
                let response = egui::TextEdit::multiline(&mut self.text)
                    .font(egui::TextStyle::Monospace)
                    .code_editor()
                    .desired_width(f32::INFINITY)
                    .desired_rows(30)
                    .show(ui);
                if response.response.changed() {
                    self.feedback = None;
                }
            });
    }

    /// Pretty-print the draft without touching the store.
    fn format(&mut self) {
        match serde_json::from_str::<serde_json::Value>(&self.text) {
            Ok(value) => {
                match serde_json::to_string_pretty(&value) {
                    Ok(pretty) => self.text = pretty,
                    Err(e) => {
                        self.feedback = Some(Feedback::Err(format!("Invalid JSON: {e}")));
                        return;
                    }
                }
                self.feedback = Some(Feedback::Ok("Formatted".to_string()));
            }
            Err(e) => {
                self.feedback = Some(Feedback::Err(format!("Invalid JSON: {e}")));
            }
        }
    }

    /// Validate the draft and replace the live document on success.
    fn apply(&mut self, store: &mut PortfolioStore) {
        match gateway::import_text(&self.text) {
            Ok(portfolio) => {
                store.replace(portfolio);
                self.feedback = Some(Feedback::Ok("Applied".to_string()));
            }
            Err(e) => {
                self.feedback = Some(Feedback::Err(e.to_string()));
            }
        }
    }
}
