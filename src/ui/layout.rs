//! In-app renderings of the two layout variants
//!
//! Presentation only: these functions consume an already-valid document plus
//! the resolved palette and never touch the store.

use base64::Engine;
use eframe::egui;

use crate::core::schema::{ColorScheme, Language, Layout, Portfolio, Project, TextAlign};
use crate::render::projection::{
    featured_first, partition_featured, resolve_icon, strings, IconResolution, ResolvedPalette,
};

/// Renders whichever layout variant the document selects.
pub struct LayoutView;

impl LayoutView {
    pub fn show(ui: &mut egui::Ui, portfolio: &Portfolio, scheme: ColorScheme) {
        let palette = ResolvedPalette::resolve(&portfolio.theme, scheme);
        let colors = PaletteColors::from(&palette);

        let bg = colors.background;
        egui::Frame::new()
            .fill(bg)
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.visuals_mut().override_text_color = Some(colors.foreground);
                if portfolio.theme.density == crate::core::schema::Density::Compact {
                    ui.spacing_mut().item_spacing.y = 4.0;
                }
                match portfolio.theme.layout {
                    Layout::Minimalistic => minimalistic(ui, portfolio, &colors),
                    Layout::Showcase => showcase(ui, portfolio, &colors),
                }
            });
    }
}

/// Palette parsed into egui colors, with fixed fallbacks for unparsable
/// color strings (the schema deliberately does not validate them).
struct PaletteColors {
    primary: egui::Color32,
    accent: egui::Color32,
    background: egui::Color32,
    foreground: egui::Color32,
}

impl From<&ResolvedPalette> for PaletteColors {
    fn from(palette: &ResolvedPalette) -> Self {
        Self {
            primary: parse_color(&palette.primary).unwrap_or(egui::Color32::from_rgb(14, 165, 233)),
            accent: parse_color(&palette.accent).unwrap_or(egui::Color32::from_rgb(34, 197, 94)),
            background: parse_color(&palette.background)
                .unwrap_or(egui::Color32::from_rgb(11, 16, 32)),
            foreground: parse_color(&palette.foreground)
                .unwrap_or(egui::Color32::from_rgb(229, 231, 235)),
        }
    }
}

fn minimalistic(ui: &mut egui::Ui, portfolio: &Portfolio, colors: &PaletteColors) {
    let t = strings(portfolio.language);
    let scale = portfolio.theme.font_scale as f32;
    let centered = portfolio.theme.text_align == TextAlign::Center;

    aligned(ui, true, |ui| {
        ui.label(
            egui::RichText::new(portfolio.career_name.to_uppercase())
                .size(12.0 * scale)
                .weak(),
        );
        ui.label(
            egui::RichText::new(&portfolio.title)
                .size(28.0 * scale)
                .strong()
                .color(colors.primary),
        );
        contact_row(ui, portfolio, colors, scale);
    });
    ui.separator();

    section_heading(ui, t.about, colors, scale);
    aligned(ui, centered, |ui| {
        ui.label(egui::RichText::new(&portfolio.presentation).size(15.0 * scale));
    });
    ui.add_space(12.0);

    section_heading(ui, t.projects, colors, scale);
    if portfolio.projects.is_empty() {
        ui.label(egui::RichText::new(t.no_projects).weak());
    }
    for project in featured_first(&portfolio.projects) {
        project_card(ui, project, colors, scale);
    }

    entry_sections(ui, portfolio, colors, scale);
}

fn showcase(ui: &mut egui::Ui, portfolio: &Portfolio, colors: &PaletteColors) {
    let t = strings(portfolio.language);
    let scale = portfolio.theme.font_scale as f32;

    // Hero block.
    egui::Frame::new()
        .fill(colors.primary.gamma_multiply(0.15))
        .inner_margin(egui::Margin::same(24))
        .corner_radius(egui::CornerRadius::same(6))
        .show(ui, |ui| {
            aligned(ui, true, |ui| {
                badge(ui, &portfolio.career_name, colors.accent, scale);
                ui.label(
                    egui::RichText::new(&portfolio.title)
                        .size(34.0 * scale)
                        .strong()
                        .color(colors.primary),
                );
                contact_row(ui, portfolio, colors, scale);
            });
        });
    ui.add_space(16.0);

    section_heading(ui, t.about_me, colors, scale);
    ui.label(egui::RichText::new(&portfolio.presentation).size(15.0 * scale));
    ui.add_space(12.0);

    let (featured, regular) = partition_featured(&portfolio.projects);
    if !featured.is_empty() {
        section_heading(ui, &format!("⭐ {}", t.featured), colors, scale);
        for project in featured {
            project_card(ui, project, colors, scale);
        }
        ui.add_space(8.0);
    }
    if !regular.is_empty() {
        section_heading(ui, t.all_projects, colors, scale);
        for project in regular {
            project_card(ui, project, colors, scale);
        }
    }
    if portfolio.projects.is_empty() {
        ui.label(egui::RichText::new(t.no_projects).weak());
    }

    entry_sections(ui, portfolio, colors, scale);
}

fn entry_sections(ui: &mut egui::Ui, portfolio: &Portfolio, colors: &PaletteColors, scale: f32) {
    let t = strings(portfolio.language);

    if !portfolio.experience.is_empty() {
        ui.add_space(12.0);
        section_heading(ui, t.experience, colors, scale);
        for entry in &portfolio.experience {
            period_entry(
                ui,
                &entry.title,
                &entry.company,
                &entry.from,
                entry.to.as_deref(),
                entry.current,
                entry.description.as_deref(),
                portfolio.language,
                colors,
                scale,
            );
        }
    }

    if !portfolio.education.is_empty() {
        ui.add_space(12.0);
        section_heading(ui, t.education, colors, scale);
        for entry in &portfolio.education {
            period_entry(
                ui,
                &entry.title,
                &entry.institution,
                &entry.from,
                entry.to.as_deref(),
                entry.current,
                entry.description.as_deref(),
                portfolio.language,
                colors,
                scale,
            );
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn period_entry(
    ui: &mut egui::Ui,
    title: &str,
    organization: &str,
    from: &str,
    to: Option<&str>,
    current: bool,
    description: Option<&str>,
    language: Language,
    colors: &PaletteColors,
    scale: f32,
) {
    let t = strings(language);
    // `to` is ignored while the entry is marked current.
    let until = if current {
        t.present.to_string()
    } else {
        to.unwrap_or("").to_string()
    };

    ui.group(|ui| {
        ui.label(
            egui::RichText::new(title)
                .size(15.0 * scale)
                .strong()
                .color(colors.primary),
        );
        ui.label(egui::RichText::new(organization).size(13.0 * scale));
        let period = if until.is_empty() {
            from.to_string()
        } else {
            format!("{from} — {until}")
        };
        ui.label(egui::RichText::new(period).size(11.0 * scale).weak());
        if let Some(text) = description {
            if !text.is_empty() {
                ui.label(egui::RichText::new(text).size(12.0 * scale));
            }
        }
    });
}

fn project_card(ui: &mut egui::Ui, project: &Project, colors: &PaletteColors, scale: f32) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            project_icon(ui, project, colors);
            if project.featured {
                ui.label(egui::RichText::new("⭐").color(colors.accent));
            }
            ui.label(
                egui::RichText::new(&project.title)
                    .size(16.0 * scale)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                badge(ui, project.app_type.label(), colors.accent, scale);
            });
        });

        if let Some(ref description) = project.description {
            if !description.is_empty() {
                ui.label(egui::RichText::new(description).size(12.0 * scale).weak());
            }
        }

        if let Some(ref image) = project.image {
            if let Some(bytes) = data_url_bytes(image) {
                let uri = format!("bytes://project-image-{}", project.id);
                ui.add(egui::Image::from_bytes(uri, bytes).max_height(160.0));
            }
        }

        if !project.tech.is_empty() || !project.tags.is_empty() {
            ui.horizontal_wrapped(|ui| {
                for tech in &project.tech {
                    ui.label(
                        egui::RichText::new(tech)
                            .size(11.0 * scale)
                            .color(colors.accent),
                    );
                }
                for tag in project.tags.iter().take(3) {
                    ui.label(
                        egui::RichText::new(format!("#{tag}"))
                            .size(11.0 * scale)
                            .color(colors.primary),
                    );
                }
            });
        }

        ui.hyperlink_to(
            egui::RichText::new(&project.url).size(11.0 * scale).weak(),
            &project.url,
        );
    });
}

fn project_icon(ui: &mut egui::Ui, project: &Project, colors: &PaletteColors) {
    match resolve_icon(&project.icon) {
        IconResolution::Uploaded(data_url) => {
            if let Some(bytes) = data_url_bytes(data_url) {
                let uri = format!("bytes://project-icon-{}", project.id);
                ui.add(
                    egui::Image::from_bytes(uri, bytes)
                        .fit_to_exact_size(egui::vec2(24.0, 24.0)),
                );
            } else {
                ui.label(egui::RichText::new(FALLBACK_GLYPH).color(colors.primary));
            }
        }
        IconResolution::Builtin(name) => {
            ui.label(egui::RichText::new(builtin_glyph(name)).color(colors.primary));
        }
        IconResolution::Fallback => {
            ui.label(egui::RichText::new(FALLBACK_GLYPH).color(colors.primary));
        }
    }
}

fn contact_row(ui: &mut egui::Ui, portfolio: &Portfolio, colors: &PaletteColors, scale: f32) {
    let contact = &portfolio.contact;
    ui.horizontal_wrapped(|ui| {
        if !contact.email.is_empty() {
            ui.hyperlink_to(
                egui::RichText::new(format!("✉ {}", contact.email)).size(12.0 * scale),
                format!("mailto:{}", contact.email),
            );
        }
        if !contact.phone.is_empty() {
            ui.label(egui::RichText::new(format!("📞 {}", contact.phone)).size(12.0 * scale));
        }
        if !contact.location.is_empty() {
            ui.label(egui::RichText::new(format!("📍 {}", contact.location)).size(12.0 * scale));
        }
    });
    if !contact.socials.is_empty() {
        ui.horizontal_wrapped(|ui| {
            for social in &contact.socials {
                ui.hyperlink_to(
                    egui::RichText::new(&social.label)
                        .size(12.0 * scale)
                        .color(colors.accent),
                    &social.url,
                );
            }
        });
    }
}

fn section_heading(ui: &mut egui::Ui, text: &str, colors: &PaletteColors, scale: f32) {
    ui.label(
        egui::RichText::new(text)
            .size(20.0 * scale)
            .strong()
            .color(colors.primary),
    );
    ui.add_space(4.0);
}

fn badge(ui: &mut egui::Ui, text: &str, color: egui::Color32, scale: f32) {
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(11.0 * scale).color(color));
        });
}

fn aligned(ui: &mut egui::Ui, centered: bool, add_contents: impl FnOnce(&mut egui::Ui)) {
    if centered {
        ui.vertical_centered(add_contents);
    } else {
        ui.vertical(|ui| add_contents(ui));
    }
}

pub const FALLBACK_GLYPH: &str = "📄";

/// Fixed glyph per builtin icon name for the in-app projection. The
/// standalone export resolves the same names to lucide symbols instead.
pub fn builtin_glyph(name: &str) -> &'static str {
    match name {
        "Database" => "🗄",
        "BarChart3" | "PieChart" | "LineChart" => "📊",
        "TrendingUp" => "📈",
        "Table" | "Sheet" | "FileSpreadsheet" => "📋",
        "Calculator" => "🧮",
        "Binary" | "Code" | "Braces" | "FileCode" => "📄",
        "Terminal" => "💻",
        "GitBranch" | "GitGraph" | "Workflow" | "Network" => "🔀",
        "Brain" | "Cpu" => "🧠",
        "Activity" => "📉",
        "Zap" => "⚡",
        "Target" => "🎯",
        "Award" => "🏆",
        "Briefcase" => "💼",
        "Server" | "Cloud" => "🌐",
        "Layers" | "Box" | "Package" => "📦",
        _ => FALLBACK_GLYPH,
    }
}

/// Parse `#rgb` / `#rrggbb` color strings; anything else yields `None` and
/// the caller falls back to a default.
pub fn parse_color(value: &str) -> Option<egui::Color32> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let mut chars = hex.chars();
            let r = chars.next()?.to_digit(16)? as u8;
            let g = chars.next()?.to_digit(16)? as u8;
            let b = chars.next()?.to_digit(16)? as u8;
            Some(egui::Color32::from_rgb(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(egui::Color32::from_rgb(r, g, b))
        }
        _ => None,
    }
}

/// Decode the payload of a `data:` URL.
pub fn data_url_bytes(data_url: &str) -> Option<Vec<u8>> {
    let (_, payload) = data_url.split_once(',')?;
    base64::engine::general_purpose::STANDARD.decode(payload).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!(
            parse_color("#0ea5e9"),
            Some(egui::Color32::from_rgb(0x0e, 0xa5, 0xe9))
        );
        assert_eq!(
            parse_color("#fff"),
            Some(egui::Color32::from_rgb(255, 255, 255))
        );
        assert_eq!(parse_color("tomato"), None);
        assert_eq!(parse_color("#12345"), None);
    }

    #[test]
    fn decodes_data_url_payloads() {
        let bytes = data_url_bytes("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(bytes, b"hello");
        assert_eq!(data_url_bytes("no comma"), None);
    }

    #[test]
    fn every_builtin_icon_has_a_glyph() {
        for name in crate::render::projection::BUILTIN_ICONS {
            assert!(!builtin_glyph(name).is_empty());
        }
    }
}
