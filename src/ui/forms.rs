//! Form editors for the basics, contact, and theme sections
//!
//! Every widget change routes through a store patch operation; the forms
//! never mutate the document directly.

use eframe::egui;

use crate::core::schema::{
    ColorMode, ColorScheme, Density, Language, Layout, SocialLink, TextAlign,
    FONT_SCALE_MAX, FONT_SCALE_MIN, MAX_PRESENTATION_LEN,
};
use crate::core::store::{BasicsPatch, ContactPatch, PortfolioStore, ThemePatch};

pub struct BasicsForm;

impl BasicsForm {
    pub fn show(ui: &mut egui::Ui, store: &mut PortfolioStore) {
        ui.heading("Basics");
        ui.add_space(8.0);

        let mut career_name = store.portfolio().career_name.clone();
        ui.label("Career name");
        if ui.text_edit_singleline(&mut career_name).changed() {
            store.patch_basics(BasicsPatch {
                career_name: Some(career_name),
                ..Default::default()
            });
        }

        let mut title = store.portfolio().title.clone();
        ui.label("Headline");
        if ui.text_edit_singleline(&mut title).changed() {
            store.patch_basics(BasicsPatch {
                title: Some(title),
                ..Default::default()
            });
        }

        let mut presentation = store.portfolio().presentation.clone();
        ui.label(format!(
            "Presentation ({}/{MAX_PRESENTATION_LEN})",
            presentation.chars().count()
        ));
        let response = egui::TextEdit::multiline(&mut presentation)
            .desired_rows(6)
            .desired_width(f32::INFINITY)
            .show(ui);
        if response.response.changed() {
            store.patch_basics(BasicsPatch {
                presentation: Some(presentation),
                ..Default::default()
            });
        }

        ui.add_space(8.0);
        let mut language = store.portfolio().language;
        let before = language;
        egui::ComboBox::from_label("Portfolio language")
            .selected_text(match language {
                Language::En => "English",
                Language::Es => "Español",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut language, Language::En, "English");
                ui.selectable_value(&mut language, Language::Es, "Español");
            });
        if language != before {
            store.set_language(language);
        }
    }
}

pub struct ContactForm;

impl ContactForm {
    pub fn show(ui: &mut egui::Ui, store: &mut PortfolioStore) {
        ui.heading("Contact");
        ui.add_space(8.0);

        let mut email = store.portfolio().contact.email.clone();
        ui.label("Email");
        if ui.text_edit_singleline(&mut email).changed() {
            store.patch_contact(ContactPatch {
                email: Some(email),
                ..Default::default()
            });
        }

        let mut phone = store.portfolio().contact.phone.clone();
        ui.label("Phone (optional)");
        if ui.text_edit_singleline(&mut phone).changed() {
            store.patch_contact(ContactPatch {
                phone: Some(phone),
                ..Default::default()
            });
        }

        let mut location = store.portfolio().contact.location.clone();
        ui.label("Location (optional)");
        if ui.text_edit_singleline(&mut location).changed() {
            store.patch_contact(ContactPatch {
                location: Some(location),
                ..Default::default()
            });
        }

        ui.add_space(8.0);
        ui.label("Social links");
        Self::show_socials(ui, store);
    }

    fn show_socials(ui: &mut egui::Ui, store: &mut PortfolioStore) {
        let mut socials = store.portfolio().contact.socials.clone();
        let mut changed = false;
        let mut remove: Option<usize> = None;

        for (i, social) in socials.iter_mut().enumerate() {
            ui.horizontal(|ui| {
                changed |= ui
                    .add(
                        egui::TextEdit::singleline(&mut social.label)
                            .hint_text("Label")
                            .desired_width(100.0),
                    )
                    .changed();
                changed |= ui
                    .add(
                        egui::TextEdit::singleline(&mut social.url)
                            .hint_text("https://…")
                            .desired_width(220.0),
                    )
                    .changed();
                if ui.small_button("✖").clicked() {
                    remove = Some(i);
                }
            });
        }

        if let Some(i) = remove {
            socials.remove(i);
            changed = true;
        }
        if ui.button("➕ Add social link").clicked() {
            socials.push(SocialLink {
                label: String::new(),
                url: String::new(),
            });
            changed = true;
        }

        if changed {
            store.patch_contact(ContactPatch {
                socials: Some(socials),
                ..Default::default()
            });
        }
    }
}

pub struct ThemeForm;

impl ThemeForm {
    pub fn show(ui: &mut egui::Ui, store: &mut PortfolioStore) {
        ui.heading("Theme");
        ui.add_space(8.0);

        let theme = store.portfolio().theme.clone();

        let mut layout = theme.layout;
        egui::ComboBox::from_label("Layout")
            .selected_text(match layout {
                Layout::Minimalistic => "Minimalistic",
                Layout::Showcase => "Showcase",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut layout, Layout::Minimalistic, "Minimalistic");
                ui.selectable_value(&mut layout, Layout::Showcase, "Showcase");
            });
        if layout != theme.layout {
            store.patch_theme(ThemePatch {
                layout: Some(layout),
                ..Default::default()
            });
        }

        let mut mode = theme.mode;
        egui::ComboBox::from_label("Editor theme")
            .selected_text(match mode {
                ColorMode::Light => "Light",
                ColorMode::Dark => "Dark",
                ColorMode::System => "System",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut mode, ColorMode::Light, "Light");
                ui.selectable_value(&mut mode, ColorMode::Dark, "Dark");
                ui.selectable_value(&mut mode, ColorMode::System, "System");
            });
        if mode != theme.mode {
            store.patch_theme(ThemePatch {
                mode: Some(mode),
                ..Default::default()
            });
        }

        let mut portfolio_theme = theme.portfolio_theme;
        egui::ComboBox::from_label("Default portfolio theme")
            .selected_text(match portfolio_theme {
                ColorScheme::Light => "Light",
                ColorScheme::Dark => "Dark",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut portfolio_theme, ColorScheme::Light, "Light");
                ui.selectable_value(&mut portfolio_theme, ColorScheme::Dark, "Dark");
            });
        if portfolio_theme != theme.portfolio_theme {
            store.patch_theme(ThemePatch {
                portfolio_theme: Some(portfolio_theme),
                ..Default::default()
            });
        }

        ui.add_space(8.0);
        ui.label("Dark variant colors");
        Self::color_field(ui, store, "Primary", &theme.primary, |v| ThemePatch {
            primary: Some(v),
            ..Default::default()
        });
        Self::color_field(ui, store, "Accent", &theme.accent, |v| ThemePatch {
            accent: Some(v),
            ..Default::default()
        });
        Self::color_field(ui, store, "Background", &theme.background, |v| ThemePatch {
            background: Some(v),
            ..Default::default()
        });
        Self::color_field(ui, store, "Foreground", &theme.foreground, |v| ThemePatch {
            foreground: Some(v),
            ..Default::default()
        });

        ui.add_space(8.0);
        ui.label("Light variant colors");
        Self::color_field(ui, store, "Primary ", &theme.light_primary, |v| ThemePatch {
            light_primary: Some(v),
            ..Default::default()
        });
        Self::color_field(ui, store, "Accent ", &theme.light_accent, |v| ThemePatch {
            light_accent: Some(v),
            ..Default::default()
        });
        Self::color_field(ui, store, "Background ", &theme.light_background, |v| {
            ThemePatch {
                light_background: Some(v),
                ..Default::default()
            }
        });
        Self::color_field(ui, store, "Foreground ", &theme.light_foreground, |v| {
            ThemePatch {
                light_foreground: Some(v),
                ..Default::default()
            }
        });

        ui.add_space(8.0);
        let mut font_scale = theme.font_scale;
        let slider = ui.add(
            egui::Slider::new(&mut font_scale, FONT_SCALE_MIN..=FONT_SCALE_MAX)
                .text("Font scale"),
        );
        if slider.changed() {
            store.patch_theme(ThemePatch {
                font_scale: Some(font_scale),
                ..Default::default()
            });
        }

        let mut density = theme.density;
        egui::ComboBox::from_label("Density")
            .selected_text(match density {
                Density::Compact => "Compact",
                Density::Comfortable => "Comfortable",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut density, Density::Compact, "Compact");
                ui.selectable_value(&mut density, Density::Comfortable, "Comfortable");
            });
        if density != theme.density {
            store.patch_theme(ThemePatch {
                density: Some(density),
                ..Default::default()
            });
        }

        let mut text_align = theme.text_align;
        egui::ComboBox::from_label("Text alignment")
            .selected_text(match text_align {
                TextAlign::Left => "Left",
                TextAlign::Center => "Center",
            })
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut text_align, TextAlign::Left, "Left");
                ui.selectable_value(&mut text_align, TextAlign::Center, "Center");
            });
        if text_align != theme.text_align {
            store.patch_theme(ThemePatch {
                text_align: Some(text_align),
                ..Default::default()
            });
        }
    }

    fn color_field(
        ui: &mut egui::Ui,
        store: &mut PortfolioStore,
        label: &str,
        current: &str,
        patch: impl FnOnce(String) -> ThemePatch,
    ) {
        let mut value = current.to_string();
        ui.horizontal(|ui| {
            if let Some(color) = super::layout::parse_color(&value) {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, egui::CornerRadius::same(2), color);
            }
            let edit = ui.add(egui::TextEdit::singleline(&mut value).desired_width(80.0));
            ui.label(label);
            if edit.changed() {
                store.patch_theme(patch(value));
            }
        });
    }
}
