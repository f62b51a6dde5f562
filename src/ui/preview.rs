//! Live portfolio preview panel
//!
//! Rendering is suppressed entirely while the document is invalid: the panel
//! validates the live document and either shows the layout or a notice
//! listing every violation.

use eframe::egui;

use crate::core::schema::{ColorScheme, Portfolio};
use crate::core::validate;
use crate::ui::layout::LayoutView;

/// Portfolio preview panel.
pub struct PreviewPanel;

impl PreviewPanel {
    /// Show the preview. `scheme_override` is the viewer's ephemeral
    /// light/dark toggle; it defaults from the document but never mutates it.
    pub fn show(
        ui: &mut egui::Ui,
        portfolio: &Portfolio,
        scheme_override: &mut Option<ColorScheme>,
    ) {
        let candidate = match serde_json::to_value(portfolio) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize portfolio for validation: {e}");
                return;
            }
        };

        if let Err(violations) = validate::validate(&candidate) {
            Self::show_unavailable(ui, &violations);
            return;
        }

        let scheme = scheme_override.unwrap_or(portfolio.theme.portfolio_theme);

        ui.horizontal(|ui| {
            let label = match scheme {
                ColorScheme::Dark => "🌙 Dark",
                ColorScheme::Light => "☀ Light",
            };
            let button = ui
                .button(label)
                .on_hover_text("Preview theme only; the document is unchanged");
            if button.clicked() {
                *scheme_override = Some(match scheme {
                    ColorScheme::Dark => ColorScheme::Light,
                    ColorScheme::Light => ColorScheme::Dark,
                });
            }
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("preview_scroll")
            .show(ui, |ui| {
                LayoutView::show(ui, portfolio, scheme);
            });
    }

    /// Static notice shown instead of the projection while invalid.
    fn show_unavailable(ui: &mut egui::Ui, violations: &[validate::Violation]) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(
                egui::RichText::new("⚠ Preview unavailable")
                    .strong()
                    .color(ui.visuals().error_fg_color),
            );
            ui.add_space(8.0);
        });
        egui::ScrollArea::vertical()
            .id_salt("violations_scroll")
            .show(ui, |ui| {
                for violation in violations {
                    ui.label(
                        egui::RichText::new(violation.to_string())
                            .monospace()
                            .color(ui.visuals().error_fg_color),
                    );
                }
            });
    }
}
