//! Persisted portfolio store
//!
//! Owns the single live [`Portfolio`] and is the only legal mutation surface.
//! Every mutation arms a short debounce window; [`PortfolioStore::maintain`]
//! is called once per UI frame and flushes the document to the persisted slot
//! when the window elapses, so bursts of keystrokes coalesce into one write.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::schema::{Contact, Education, Experience, Language, Portfolio, Project, Theme};
use super::validate;

/// Debounce window between the last mutation and the persistence write.
const DEBOUNCE: Duration = Duration::from_millis(500);

/// Envelope version, reserved for future migrations.
const STORAGE_VERSION: u32 = 0;

/// On-disk envelope: `{ "state": { "portfolio": … }, "version": 0 }`.
#[derive(Debug, Serialize, Deserialize)]
struct StorageEnvelope {
    state: StorageState,
    version: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct StorageState {
    portfolio: Portfolio,
}

/// Partial update for the top-level text fields.
#[derive(Debug, Clone, Default)]
pub struct BasicsPatch {
    pub career_name: Option<String>,
    pub title: Option<String>,
    pub presentation: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub socials: Option<Vec<super::schema::SocialLink>>,
}

/// Partial theme update. Only the fields the theme form edits are listed;
/// a `Some` replaces the corresponding field and everything else is kept.
#[derive(Debug, Clone, Default)]
pub struct ThemePatch {
    pub layout: Option<super::schema::Layout>,
    pub mode: Option<super::schema::ColorMode>,
    pub primary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub light_primary: Option<String>,
    pub light_accent: Option<String>,
    pub light_background: Option<String>,
    pub light_foreground: Option<String>,
    pub font_scale: Option<f64>,
    pub density: Option<super::schema::Density>,
    pub text_align: Option<super::schema::TextAlign>,
    pub portfolio_theme: Option<super::schema::ColorScheme>,
}

/// Partial project update addressed by id. Double-option fields distinguish
/// "leave unchanged" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub url: Option<String>,
    pub app_type: Option<super::schema::AppType>,
    pub icon: Option<super::schema::ProjectIcon>,
    pub image: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
    pub tech: Option<Vec<String>>,
    pub featured: Option<bool>,
}

/// Partial education/experience update; the two collections share a shape.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub organization: Option<String>,
    pub from: Option<String>,
    pub to: Option<Option<String>>,
    pub current: Option<bool>,
    pub description: Option<Option<String>>,
}

/// The single live portfolio plus its persisted slot.
pub struct PortfolioStore {
    portfolio: Portfolio,
    storage_path: Option<PathBuf>,
    dirty_since: Option<Instant>,
}

impl PortfolioStore {
    /// Open the store backed by the per-user storage slot.
    pub fn open() -> Self {
        Self::at_path(default_storage_path())
    }

    /// Open the store at an explicit slot path (`None` disables persistence).
    pub fn at_path(storage_path: Option<PathBuf>) -> Self {
        let portfolio = storage_path
            .as_deref()
            .and_then(|path| match load_slot(path) {
                Ok(portfolio) => portfolio,
                Err(e) => {
                    tracing::warn!("Falling back to default portfolio: {e:#}");
                    None
                }
            })
            .unwrap_or_default();

        Self {
            portfolio,
            storage_path,
            dirty_since: None,
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Install a full document atomically. The caller is responsible for
    /// having validated it.
    pub fn replace(&mut self, portfolio: Portfolio) {
        self.portfolio = portfolio;
        self.touch();
    }

    pub fn reset_to_default(&mut self) {
        self.replace(Portfolio::default());
        tracing::info!("Portfolio reset to the built-in default");
    }

    pub fn patch_basics(&mut self, patch: BasicsPatch) {
        let p = &mut self.portfolio;
        merge(&mut p.career_name, patch.career_name);
        merge(&mut p.title, patch.title);
        merge(&mut p.presentation, patch.presentation);
        self.touch();
    }

    pub fn patch_contact(&mut self, patch: ContactPatch) {
        let c: &mut Contact = &mut self.portfolio.contact;
        merge(&mut c.email, patch.email);
        merge(&mut c.phone, patch.phone);
        merge(&mut c.location, patch.location);
        merge(&mut c.website, patch.website);
        merge(&mut c.socials, patch.socials);
        self.touch();
    }

    pub fn patch_theme(&mut self, patch: ThemePatch) {
        let t: &mut Theme = &mut self.portfolio.theme;
        merge(&mut t.layout, patch.layout);
        merge(&mut t.mode, patch.mode);
        merge(&mut t.primary, patch.primary);
        merge(&mut t.accent, patch.accent);
        merge(&mut t.background, patch.background);
        merge(&mut t.foreground, patch.foreground);
        merge(&mut t.light_primary, patch.light_primary);
        merge(&mut t.light_accent, patch.light_accent);
        merge(&mut t.light_background, patch.light_background);
        merge(&mut t.light_foreground, patch.light_foreground);
        merge(&mut t.font_scale, patch.font_scale);
        merge(&mut t.density, patch.density);
        merge(&mut t.text_align, patch.text_align);
        merge(&mut t.portfolio_theme, patch.portfolio_theme);
        self.touch();
    }

    pub fn set_language(&mut self, language: Language) {
        self.portfolio.language = language;
        self.touch();
    }

    /// Append a project. Refuses a duplicate id so id-addressed updates stay
    /// unambiguous; returns whether the project was added.
    pub fn add_project(&mut self, project: Project) -> bool {
        if self.portfolio.projects.iter().any(|p| p.id == project.id) {
            tracing::warn!("Refusing to add project with duplicate id {:?}", project.id);
            return false;
        }
        self.portfolio.projects.push(project);
        self.touch();
        true
    }

    /// Shallow-merge a patch into the project with the given id. Unknown ids
    /// are a no-op.
    pub fn update_project(&mut self, id: &str, patch: ProjectPatch) {
        if let Some(p) = self.portfolio.projects.iter_mut().find(|p| p.id == id) {
            merge(&mut p.title, patch.title);
            merge(&mut p.description, patch.description);
            merge(&mut p.url, patch.url);
            merge(&mut p.app_type, patch.app_type);
            merge(&mut p.icon, patch.icon);
            merge(&mut p.image, patch.image);
            merge(&mut p.tags, patch.tags);
            merge(&mut p.tech, patch.tech);
            merge(&mut p.featured, patch.featured);
            self.touch();
        }
    }

    pub fn delete_project(&mut self, id: &str) {
        self.portfolio.projects.retain(|p| p.id != id);
        self.touch();
    }

    /// Replace the project sequence wholesale; the caller supplies the full
    /// new order.
    pub fn reorder_projects(&mut self, projects: Vec<Project>) {
        self.portfolio.projects = projects;
        self.touch();
    }

    pub fn add_education(&mut self, education: Education) -> bool {
        if self.portfolio.education.iter().any(|e| e.id == education.id) {
            tracing::warn!(
                "Refusing to add education entry with duplicate id {:?}",
                education.id
            );
            return false;
        }
        self.portfolio.education.push(education);
        self.touch();
        true
    }

    pub fn update_education(&mut self, id: &str, patch: EntryPatch) {
        if let Some(e) = self.portfolio.education.iter_mut().find(|e| e.id == id) {
            merge(&mut e.title, patch.title);
            merge(&mut e.institution, patch.organization);
            merge(&mut e.from, patch.from);
            merge(&mut e.to, patch.to);
            merge(&mut e.current, patch.current);
            merge(&mut e.description, patch.description);
            self.touch();
        }
    }

    pub fn delete_education(&mut self, id: &str) {
        self.portfolio.education.retain(|e| e.id != id);
        self.touch();
    }

    pub fn add_experience(&mut self, experience: Experience) -> bool {
        if self
            .portfolio
            .experience
            .iter()
            .any(|e| e.id == experience.id)
        {
            tracing::warn!(
                "Refusing to add experience entry with duplicate id {:?}",
                experience.id
            );
            return false;
        }
        self.portfolio.experience.push(experience);
        self.touch();
        true
    }

    pub fn update_experience(&mut self, id: &str, patch: EntryPatch) {
        if let Some(e) = self.portfolio.experience.iter_mut().find(|e| e.id == id) {
            merge(&mut e.title, patch.title);
            merge(&mut e.company, patch.organization);
            merge(&mut e.from, patch.from);
            merge(&mut e.to, patch.to);
            merge(&mut e.current, patch.current);
            merge(&mut e.description, patch.description);
            self.touch();
        }
    }

    pub fn delete_experience(&mut self, id: &str) {
        self.portfolio.experience.retain(|e| e.id != id);
        self.touch();
    }

    /// Whether a mutation is waiting on the debounce window.
    pub fn is_dirty(&self) -> bool {
        self.dirty_since.is_some()
    }

    /// Flush to the persisted slot if the debounce window has elapsed.
    /// Call once per frame.
    pub fn maintain(&mut self) {
        let due = self
            .dirty_since
            .is_some_and(|since| since.elapsed() >= DEBOUNCE);
        if due {
            if let Err(e) = self.flush() {
                tracing::error!("Failed to persist portfolio: {e:#}");
            }
        }
    }

    /// Write the current document to the persisted slot immediately.
    pub fn flush(&mut self) -> Result<()> {
        self.dirty_since = None;
        let Some(ref path) = self.storage_path else {
            return Ok(());
        };

        let envelope = StorageEnvelope {
            state: StorageState {
                portfolio: self.portfolio.clone(),
            },
            version: STORAGE_VERSION,
        };
        let content = serde_json::to_string_pretty(&envelope)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!("Persisted portfolio to {}", path.display());
        Ok(())
    }

    /// Arm (or re-arm) the debounce window.
    fn touch(&mut self) {
        self.dirty_since = Some(Instant::now());
    }
}

fn merge<T>(field: &mut T, update: Option<T>) {
    if let Some(value) = update {
        *field = value;
    }
}

fn default_storage_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "portfolio-studio", "Portfolio Studio")
        .map(|dirs| dirs.data_dir().join("portfolio-storage.json"))
}

/// Read and validate the persisted slot. `Ok(None)` means the slot does not
/// exist yet; validation runs through the schema validator, so missing
/// defaultable sub-fields are backfilled rather than discarding the document.
fn load_slot(path: &std::path::Path) -> Result<Option<Portfolio>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let envelope: Value = serde_json::from_str(&content)
        .with_context(|| format!("Persisted slot {} is not valid JSON", path.display()))?;
    let candidate = envelope
        .get("state")
        .and_then(|s| s.get("portfolio"))
        .context("Persisted slot has no state.portfolio entry")?;

    let portfolio = validate::validate(candidate).map_err(|violations| {
        let summary: Vec<String> = violations.iter().map(ToString::to_string).collect();
        anyhow::anyhow!("Persisted portfolio failed validation: {}", summary.join(", "))
    })?;
    Ok(Some(portfolio))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::{AppType, ProjectIcon};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn memory_store() -> PortfolioStore {
        PortfolioStore::at_path(None)
    }

    fn sample_project(id: &str, featured: bool) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: None,
            url: "https://example.com".to_string(),
            app_type: AppType::Dashboard,
            icon: ProjectIcon::fallback(),
            image: None,
            tags: Vec::new(),
            tech: Vec::new(),
            featured,
        }
    }

    #[test]
    fn update_project_touches_only_the_addressed_field() {
        let mut store = memory_store();
        let before = store.portfolio().clone();
        let id = before.projects[0].id.clone();

        store.update_project(
            &id,
            ProjectPatch {
                title: Some("X".to_string()),
                ..Default::default()
            },
        );

        let after = store.portfolio();
        assert_eq!(after.projects[0].title, "X");
        assert_eq!(after.projects[0].url, before.projects[0].url);
        assert_eq!(after.projects[0].icon, before.projects[0].icon);
        assert_eq!(after.projects[1], before.projects[1]);
        assert_eq!(after.contact, before.contact);
        assert_eq!(after.theme, before.theme);
    }

    #[test]
    fn update_project_with_unknown_id_is_a_noop() {
        let mut store = memory_store();
        let before = store.portfolio().projects.clone();
        store.update_project(
            "no-such-id",
            ProjectPatch {
                title: Some("X".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(store.portfolio().projects, before);
    }

    #[test]
    fn add_project_appends_and_refuses_duplicates() {
        let mut store = memory_store();
        let count = store.portfolio().projects.len();

        assert!(store.add_project(sample_project("new-one", false)));
        assert_eq!(store.portfolio().projects.len(), count + 1);
        assert_eq!(store.portfolio().projects.last().unwrap().id, "new-one");

        assert!(!store.add_project(sample_project("new-one", true)));
        assert_eq!(store.portfolio().projects.len(), count + 1);
    }

    #[test]
    fn delete_and_reorder_projects() {
        let mut store = memory_store();
        let mut projects = store.portfolio().projects.clone();
        projects.reverse();
        store.reorder_projects(projects.clone());
        assert_eq!(store.portfolio().projects, projects);

        let id = projects[0].id.clone();
        store.delete_project(&id);
        assert!(store.portfolio().projects.iter().all(|p| p.id != id));
    }

    #[test]
    fn patch_basics_preserves_unrelated_fields() {
        let mut store = memory_store();
        let before = store.portfolio().clone();
        store.patch_basics(BasicsPatch {
            title: Some("New title".to_string()),
            ..Default::default()
        });
        let after = store.portfolio();
        assert_eq!(after.title, "New title");
        assert_eq!(after.career_name, before.career_name);
        assert_eq!(after.presentation, before.presentation);
        assert_eq!(after.contact, before.contact);
    }

    #[test]
    fn patch_theme_merges_shallowly() {
        let mut store = memory_store();
        let before = store.portfolio().theme.clone();
        store.patch_theme(ThemePatch {
            font_scale: Some(1.1),
            ..Default::default()
        });
        let after = &store.portfolio().theme;
        assert_eq!(after.font_scale, 1.1);
        assert_eq!(after.primary, before.primary);
        assert_eq!(after.layout, before.layout);
    }

    #[test]
    fn education_entry_lifecycle() {
        let mut store = memory_store();
        let entry = Education {
            id: "edu-1".to_string(),
            title: "BSc Statistics".to_string(),
            institution: "UBA".to_string(),
            from: "2016".to_string(),
            to: Some("2020".to_string()),
            current: false,
            description: None,
        };
        assert!(store.add_education(entry.clone()));
        assert!(!store.add_education(entry));

        store.update_education(
            "edu-1",
            EntryPatch {
                current: Some(true),
                to: Some(None),
                ..Default::default()
            },
        );
        let e = &store.portfolio().education[0];
        assert!(e.current);
        assert_eq!(e.to, None);
        assert_eq!(e.institution, "UBA");

        store.delete_education("edu-1");
        assert!(store.portfolio().education.is_empty());
    }

    #[test]
    fn reset_restores_the_default_document() {
        let mut store = memory_store();
        store.patch_basics(BasicsPatch {
            career_name: Some("Someone else".to_string()),
            ..Default::default()
        });
        store.reset_to_default();
        assert_eq!(store.portfolio(), &Portfolio::default());
    }

    #[test]
    fn flush_writes_the_versioned_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slot.json");
        let mut store = PortfolioStore::at_path(Some(path.clone()));
        store.set_language(Language::Es);
        store.flush().unwrap();

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["version"], json!(0));
        assert_eq!(written["state"]["portfolio"]["language"], json!("es"));
        assert!(!store.is_dirty());
    }

    #[test]
    fn maintain_respects_the_debounce_window() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slot.json");
        let mut store = PortfolioStore::at_path(Some(path.clone()));
        store.set_language(Language::Es);

        store.maintain();
        assert!(!path.exists(), "write must wait out the debounce window");
        assert!(store.is_dirty());

        std::thread::sleep(DEBOUNCE + Duration::from_millis(50));
        store.maintain();
        assert!(path.exists());
        assert!(!store.is_dirty());
    }

    #[test]
    fn load_backfills_missing_subfields_without_discarding_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slot.json");

        let mut portfolio = serde_json::to_value(Portfolio::default()).unwrap();
        portfolio["careerName"] = json!("Persisted Analyst");
        portfolio["theme"].as_object_mut().unwrap().remove("portfolioTheme");
        let envelope = json!({ "state": { "portfolio": portfolio }, "version": 0 });
        std::fs::write(&path, serde_json::to_string_pretty(&envelope).unwrap()).unwrap();

        let store = PortfolioStore::at_path(Some(path));
        let loaded = store.portfolio();
        assert_eq!(loaded.theme.portfolio_theme, crate::core::schema::ColorScheme::Dark);
        assert_eq!(loaded.career_name, "Persisted Analyst");
        assert_eq!(loaded.projects, Portfolio::default().projects);
    }

    #[test]
    fn unparsable_slot_falls_back_to_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slot.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = PortfolioStore::at_path(Some(path));
        assert_eq!(store.portfolio(), &Portfolio::default());
    }

    #[test]
    fn invalid_slot_falls_back_to_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slot.json");
        let envelope = json!({ "state": { "portfolio": { "careerName": "" } }, "version": 0 });
        std::fs::write(&path, envelope.to_string()).unwrap();
        let store = PortfolioStore::at_path(Some(path));
        assert_eq!(store.portfolio(), &Portfolio::default());
    }
}
