//! List editors for projects, education, and experience
//!
//! Entries are addressed by id; edits flow through the store's patch
//! operations and reordering replaces the sequence wholesale.

use base64::Engine;
use eframe::egui;
use uuid::Uuid;

use crate::core::schema::{AppType, Education, Experience, Project, ProjectIcon};
use crate::core::store::{EntryPatch, PortfolioStore, ProjectPatch};
use crate::render::projection::BUILTIN_ICONS;
use crate::ui::layout::builtin_glyph;

pub struct ProjectsPanel;

impl ProjectsPanel {
    pub fn show(ui: &mut egui::Ui, store: &mut PortfolioStore) {
        ui.horizontal(|ui| {
            ui.heading("Projects");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("➕ Add project").clicked() {
                    store.add_project(Project {
                        id: format!("project-{}", Uuid::new_v4()),
                        title: "New Project".to_string(),
                        description: None,
                        url: "https://example.com".to_string(),
                        app_type: AppType::Dashboard,
                        icon: ProjectIcon::fallback(),
                        image: None,
                        tags: Vec::new(),
                        tech: Vec::new(),
                        featured: false,
                    });
                }
            });
        });
        ui.add_space(4.0);

        let projects = store.portfolio().projects.clone();
        let mut delete: Option<String> = None;
        let mut swap: Option<(usize, usize)> = None;

        for (i, project) in projects.iter().enumerate() {
            let header = if project.featured {
                format!("⭐ {}", project.title)
            } else {
                project.title.clone()
            };
            egui::CollapsingHeader::new(header)
                .id_salt(&project.id)
                .show(ui, |ui| {
                    Self::project_editor(ui, store, project);
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        if ui.small_button("⬆").clicked() && i > 0 {
                            swap = Some((i, i - 1));
                        }
                        if ui.small_button("⬇").clicked() && i + 1 < projects.len() {
                            swap = Some((i, i + 1));
                        }
                        if ui.small_button("🗑 Delete").clicked() {
                            delete = Some(project.id.clone());
                        }
                    });
                });
        }

        if let Some((a, b)) = swap {
            let mut reordered = projects;
            reordered.swap(a, b);
            store.reorder_projects(reordered);
        } else if let Some(id) = delete {
            store.delete_project(&id);
        }
    }

    fn project_editor(ui: &mut egui::Ui, store: &mut PortfolioStore, project: &Project) {
        let id = project.id.as_str();

        let mut title = project.title.clone();
        ui.label("Title");
        if ui.text_edit_singleline(&mut title).changed() {
            store.update_project(
                id,
                ProjectPatch {
                    title: Some(title),
                    ..Default::default()
                },
            );
        }

        let mut description = project.description.clone().unwrap_or_default();
        ui.label("Description (optional, 280 max)");
        if ui.text_edit_multiline(&mut description).changed() {
            let value = if description.is_empty() {
                None
            } else {
                Some(description)
            };
            store.update_project(
                id,
                ProjectPatch {
                    description: Some(value),
                    ..Default::default()
                },
            );
        }

        let mut url = project.url.clone();
        ui.label("URL");
        if ui.text_edit_singleline(&mut url).changed() {
            store.update_project(
                id,
                ProjectPatch {
                    url: Some(url),
                    ..Default::default()
                },
            );
        }

        let mut app_type = project.app_type;
        egui::ComboBox::from_id_salt((id, "app_type"))
            .selected_text(app_type.label())
            .show_ui(ui, |ui| {
                for candidate in AppType::ALL {
                    ui.selectable_value(&mut app_type, candidate, candidate.label());
                }
            });
        if app_type != project.app_type {
            store.update_project(
                id,
                ProjectPatch {
                    app_type: Some(app_type),
                    ..Default::default()
                },
            );
        }

        Self::icon_picker(ui, store, project);
        Self::image_picker(ui, store, project);

        let mut tags = project.tags.join(", ");
        ui.label("Tags (comma separated)");
        if ui.text_edit_singleline(&mut tags).changed() {
            store.update_project(
                id,
                ProjectPatch {
                    tags: Some(split_list(&tags)),
                    ..Default::default()
                },
            );
        }

        let mut tech = project.tech.join(", ");
        ui.label("Tech stack (comma separated)");
        if ui.text_edit_singleline(&mut tech).changed() {
            store.update_project(
                id,
                ProjectPatch {
                    tech: Some(split_list(&tech)),
                    ..Default::default()
                },
            );
        }

        let mut featured = project.featured;
        if ui.checkbox(&mut featured, "Featured").changed() {
            store.update_project(
                id,
                ProjectPatch {
                    featured: Some(featured),
                    ..Default::default()
                },
            );
        }
    }

    fn icon_picker(ui: &mut egui::Ui, store: &mut PortfolioStore, project: &Project) {
        let id = project.id.as_str();
        ui.label("Icon");
        ui.horizontal(|ui| {
            let selected = match &project.icon {
                ProjectIcon::Builtin { name } => format!("{} {name}", builtin_glyph(name)),
                ProjectIcon::Upload { .. } => "🖼 Uploaded image".to_string(),
            };
            let mut choice: Option<&str> = None;
            egui::ComboBox::from_id_salt((id, "icon"))
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for name in BUILTIN_ICONS {
                        let label = format!("{} {name}", builtin_glyph(name));
                        if ui.selectable_label(false, label).clicked() {
                            choice = Some(name);
                        }
                    }
                });
            if let Some(name) = choice {
                store.update_project(
                    id,
                    ProjectPatch {
                        icon: Some(ProjectIcon::Builtin {
                            name: name.to_string(),
                        }),
                        ..Default::default()
                    },
                );
            }

            if ui.button("Upload…").clicked() {
                if let Some(data_url) = pick_image_data_url() {
                    store.update_project(
                        id,
                        ProjectPatch {
                            icon: Some(ProjectIcon::Upload { data_url }),
                            ..Default::default()
                        },
                    );
                }
            }
        });
    }

    fn image_picker(ui: &mut egui::Ui, store: &mut PortfolioStore, project: &Project) {
        ui.label("Screenshot");
        ui.horizontal(|ui| {
            if project.image.is_some() {
                ui.label("🖼 attached");
                if ui.small_button("✖ Remove").clicked() {
                    store.update_project(
                        &project.id,
                        ProjectPatch {
                            image: Some(None),
                            ..Default::default()
                        },
                    );
                }
            } else if ui.button("Upload…").clicked() {
                if let Some(data_url) = pick_image_data_url() {
                    store.update_project(
                        &project.id,
                        ProjectPatch {
                            image: Some(Some(data_url)),
                            ..Default::default()
                        },
                    );
                }
            }
        });
    }
}

pub struct EducationPanel;

impl EducationPanel {
    pub fn show(ui: &mut egui::Ui, store: &mut PortfolioStore) {
        ui.horizontal(|ui| {
            ui.heading("Education");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("➕ Add entry").clicked() {
                    store.add_education(Education {
                        id: format!("edu-{}", Uuid::new_v4()),
                        title: "New Degree".to_string(),
                        institution: "Institution".to_string(),
                        from: "2020".to_string(),
                        to: None,
                        current: false,
                        description: None,
                    });
                }
            });
        });
        ui.add_space(4.0);

        let entries = store.portfolio().education.clone();
        let mut delete: Option<String> = None;
        for entry in &entries {
            egui::CollapsingHeader::new(&entry.title)
                .id_salt(&entry.id)
                .show(ui, |ui| {
                    if let Some(patch) = entry_fields(
                        ui,
                        "Institution",
                        &entry.title,
                        &entry.institution,
                        &entry.from,
                        entry.to.as_deref(),
                        entry.current,
                        entry.description.as_deref(),
                    ) {
                        store.update_education(&entry.id, patch);
                    }
                    if ui.small_button("🗑 Delete").clicked() {
                        delete = Some(entry.id.clone());
                    }
                });
        }
        if let Some(id) = delete {
            store.delete_education(&id);
        }
    }
}

pub struct ExperiencePanel;

impl ExperiencePanel {
    pub fn show(ui: &mut egui::Ui, store: &mut PortfolioStore) {
        ui.horizontal(|ui| {
            ui.heading("Experience");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("➕ Add entry").clicked() {
                    store.add_experience(Experience {
                        id: format!("exp-{}", Uuid::new_v4()),
                        title: "New Role".to_string(),
                        company: "Company".to_string(),
                        from: "2020".to_string(),
                        to: None,
                        current: false,
                        description: None,
                    });
                }
            });
        });
        ui.add_space(4.0);

        let entries = store.portfolio().experience.clone();
        let mut delete: Option<String> = None;
        for entry in &entries {
            egui::CollapsingHeader::new(&entry.title)
                .id_salt(&entry.id)
                .show(ui, |ui| {
                    if let Some(patch) = entry_fields(
                        ui,
                        "Company",
                        &entry.title,
                        &entry.company,
                        &entry.from,
                        entry.to.as_deref(),
                        entry.current,
                        entry.description.as_deref(),
                    ) {
                        store.update_experience(&entry.id, patch);
                    }
                    if ui.small_button("🗑 Delete").clicked() {
                        delete = Some(entry.id.clone());
                    }
                });
        }
        if let Some(id) = delete {
            store.delete_experience(&id);
        }
    }
}

/// Shared field editor for the two period-entry collections. Returns the
/// patch to apply, if anything changed this frame.
#[allow(clippy::too_many_arguments)]
fn entry_fields(
    ui: &mut egui::Ui,
    org_label: &str,
    title: &str,
    organization: &str,
    from: &str,
    to: Option<&str>,
    current: bool,
    description: Option<&str>,
) -> Option<EntryPatch> {
    let mut patch = EntryPatch::default();
    let mut changed = false;

    let mut title = title.to_string();
    ui.label("Title");
    if ui.text_edit_singleline(&mut title).changed() {
        patch.title = Some(title);
        changed = true;
    }

    let mut organization = organization.to_string();
    ui.label(org_label);
    if ui.text_edit_singleline(&mut organization).changed() {
        patch.organization = Some(organization);
        changed = true;
    }

    let mut from = from.to_string();
    ui.label("From");
    if ui.text_edit_singleline(&mut from).changed() {
        patch.from = Some(from);
        changed = true;
    }

    let mut current = current;
    if ui.checkbox(&mut current, "Current").changed() {
        patch.current = Some(current);
        if current {
            // `to` has no meaning for an ongoing entry.
            patch.to = Some(None);
        }
        changed = true;
    }

    if !current {
        let mut to = to.unwrap_or("").to_string();
        ui.label("To");
        if ui.text_edit_singleline(&mut to).changed() {
            patch.to = Some(if to.is_empty() { None } else { Some(to) });
            changed = true;
        }
    }

    let mut description = description.unwrap_or("").to_string();
    ui.label("Description (optional, 280 max)");
    if ui.text_edit_multiline(&mut description).changed() {
        patch.description = Some(if description.is_empty() {
            None
        } else {
            Some(description)
        });
        changed = true;
    }

    changed.then_some(patch)
}

fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pick an image file and embed it as a data URL.
fn pick_image_data_url() -> Option<String> {
    let path = rfd::FileDialog::new()
        .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "svg"])
        .pick_file()?;
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Failed to read image {}: {e}", path.display());
            return None;
        }
    };
    let mime = match path.extension().and_then(|ext| ext.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    };
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Some(format!("data:{mime};base64,{encoded}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_lists_are_trimmed_and_filtered() {
        assert_eq!(split_list("BI, DAX, ,SQL "), vec!["BI", "DAX", "SQL"]);
        assert_eq!(split_list(""), Vec::<String>::new());
    }
}
