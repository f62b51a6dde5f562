//! Portfolio document validation
//!
//! The validator is the single source of truth for "valid": it takes an
//! arbitrary JSON value and produces either a normalized [`Portfolio`] (with
//! documented defaults filled in) or the full list of violations. Validation
//! never short-circuits, so callers can report every problem at once.

use std::collections::HashSet;
use std::fmt;

use serde_json::{Map, Value};
use url::Url;

use super::schema::{
    AppType, ColorMode, ColorScheme, Contact, Density, Education, Experience, Language, Layout,
    Portfolio, Project, ProjectIcon, SocialLink, TextAlign, Theme, FONT_SCALE_MAX, FONT_SCALE_MIN,
    MAX_DESCRIPTION_LEN, MAX_EDUCATION, MAX_EXPERIENCE, MAX_PRESENTATION_LEN, MAX_PROJECTS,
};

/// A single field-level schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path to the offending field, e.g. `projects.0.url`.
    pub path: String,
    pub message: String,
}

impl Violation {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Validate an arbitrary JSON value as a portfolio document.
///
/// Pure and deterministic. On success the returned document has every
/// defaultable field filled, so re-validating its serialized form yields the
/// same value.
pub fn validate(candidate: &Value) -> Result<Portfolio, Vec<Violation>> {
    let mut errors = Vec::new();

    let obj = match candidate.as_object() {
        Some(obj) => obj,
        None => return Err(vec![Violation::new("", "Expected a JSON object")]),
    };

    let career_name =
        required_str(obj, "careerName", &mut errors).unwrap_or_default();
    if obj.contains_key("careerName") && career_name.is_empty() {
        errors.push(Violation::new("careerName", "Career name is required"));
    }

    let title = required_str(obj, "title", &mut errors).unwrap_or_default();
    if obj.contains_key("title") && title.is_empty() {
        errors.push(Violation::new("title", "Title is required"));
    }

    let presentation =
        required_str(obj, "presentation", &mut errors).unwrap_or_default();
    if presentation.chars().count() > MAX_PRESENTATION_LEN {
        errors.push(Violation::new(
            "presentation",
            "Presentation must be 1500 characters or less",
        ));
    }

    let contact = match obj.get("contact") {
        Some(value) => validate_contact(value, "contact", &mut errors),
        None => {
            errors.push(Violation::new("contact", "Required"));
            Contact::default()
        }
    };

    let theme = match obj.get("theme") {
        Some(value) => validate_theme(value, "theme", &mut errors),
        None => {
            errors.push(Violation::new("theme", "Required"));
            Theme::default()
        }
    };

    let projects = match obj.get("projects") {
        Some(Value::Array(items)) => {
            if items.len() > MAX_PROJECTS {
                errors.push(Violation::new("projects", "Maximum 24 projects allowed"));
            }
            let mut seen = HashSet::new();
            items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let path = format!("projects.{i}");
                    let project = validate_project(item, &path, &mut errors);
                    if !project.id.is_empty() && !seen.insert(project.id.clone()) {
                        errors.push(Violation::new(format!("{path}.id"), "Duplicate id"));
                    }
                    project
                })
                .collect()
        }
        Some(_) => {
            errors.push(Violation::new("projects", "Expected an array"));
            Vec::new()
        }
        None => {
            errors.push(Violation::new("projects", "Required"));
            Vec::new()
        }
    };

    let education = validate_entries(
        obj.get("education"),
        "education",
        MAX_EDUCATION,
        "Maximum 10 education entries allowed",
        "institution",
        "Institution is required",
        &mut errors,
    )
    .into_iter()
    .map(|e| Education {
        id: e.id,
        title: e.title,
        institution: e.organization,
        from: e.from,
        to: e.to,
        current: e.current,
        description: e.description,
    })
    .collect();

    let experience = validate_entries(
        obj.get("experience"),
        "experience",
        MAX_EXPERIENCE,
        "Maximum 20 experience entries allowed",
        "company",
        "Company is required",
        &mut errors,
    )
    .into_iter()
    .map(|e| Experience {
        id: e.id,
        title: e.title,
        company: e.organization,
        from: e.from,
        to: e.to,
        current: e.current,
        description: e.description,
    })
    .collect();

    let language: Language = enum_field(obj.get("language"), "language", "en, es", &mut errors);

    let portfolio = Portfolio {
        career_name,
        title,
        presentation,
        contact,
        theme,
        projects,
        education,
        experience,
        language,
    };

    if errors.is_empty() {
        Ok(portfolio)
    } else {
        Err(errors)
    }
}

fn validate_contact(value: &Value, path: &str, errors: &mut Vec<Violation>) -> Contact {
    let obj = match value.as_object() {
        Some(obj) => obj,
        None => {
            errors.push(Violation::new(path, "Expected an object"));
            return Contact::default();
        }
    };

    let email =
        required_str_at(obj, "email", path, errors).unwrap_or_default();
    if obj.contains_key("email") && !is_valid_email(&email) {
        errors.push(Violation::new(
            format!("{path}.email"),
            "Invalid email address",
        ));
    }

    let phone = optional_str(obj, "phone", path, errors);
    let location = optional_str(obj, "location", path, errors);

    let website = optional_str(obj, "website", path, errors);
    if !website.is_empty() && Url::parse(&website).is_err() {
        errors.push(Violation::new(
            format!("{path}.website"),
            "Invalid website URL",
        ));
    }

    let socials = match obj.get("socials") {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| validate_social(item, &format!("{path}.socials.{i}"), errors))
            .collect(),
        Some(_) => {
            errors.push(Violation::new(format!("{path}.socials"), "Expected an array"));
            Vec::new()
        }
        None => Vec::new(),
    };

    Contact {
        email,
        phone,
        location,
        website,
        socials,
    }
}

fn validate_social(value: &Value, path: &str, errors: &mut Vec<Violation>) -> SocialLink {
    let obj = match value.as_object() {
        Some(obj) => obj,
        None => {
            errors.push(Violation::new(path, "Expected an object"));
            return SocialLink {
                label: String::new(),
                url: String::new(),
            };
        }
    };

    let label = required_str_at(obj, "label", path, errors).unwrap_or_default();
    if obj.contains_key("label") && label.is_empty() {
        errors.push(Violation::new(
            format!("{path}.label"),
            "Social label is required",
        ));
    }

    let url = required_str_at(obj, "url", path, errors).unwrap_or_default();
    if obj.contains_key("url") && Url::parse(&url).is_err() {
        errors.push(Violation::new(
            format!("{path}.url"),
            "Invalid social media URL",
        ));
    }

    SocialLink { label, url }
}

fn validate_theme(value: &Value, path: &str, errors: &mut Vec<Violation>) -> Theme {
    let obj = match value.as_object() {
        Some(obj) => obj,
        None => {
            errors.push(Violation::new(path, "Expected an object"));
            return Theme::default();
        }
    };

    let defaults = Theme::default();
    let field = |key: &str| format!("{path}.{key}");

    let layout: Layout = enum_field(
        obj.get("layout"),
        &field("layout"),
        "minimalistic, showcase",
        errors,
    );
    let mode: ColorMode = enum_field(
        obj.get("mode"),
        &field("mode"),
        "light, dark, system",
        errors,
    );
    let density: Density = enum_field(
        obj.get("density"),
        &field("density"),
        "compact, comfortable",
        errors,
    );
    let text_align: TextAlign = enum_field(
        obj.get("textAlign"),
        &field("textAlign"),
        "left, center",
        errors,
    );
    let portfolio_theme: ColorScheme = enum_field(
        obj.get("portfolioTheme"),
        &field("portfolioTheme"),
        "light, dark",
        errors,
    );

    // Color strings are free-form by design, only their type is checked.
    let color = |key: &str, default: &str, errors: &mut Vec<Violation>| {
        string_or_default(obj, key, default, path, errors)
    };
    let primary = color("primary", &defaults.primary, errors);
    let accent = color("accent", &defaults.accent, errors);
    let background = color("background", &defaults.background, errors);
    let foreground = color("foreground", &defaults.foreground, errors);
    let light_primary = color("lightPrimary", &defaults.light_primary, errors);
    let light_accent = color("lightAccent", &defaults.light_accent, errors);
    let light_background = color("lightBackground", &defaults.light_background, errors);
    let light_foreground = color("lightForeground", &defaults.light_foreground, errors);

    let font_scale = match obj.get("fontScale") {
        Some(Value::Number(n)) => {
            let scale = n.as_f64().unwrap_or(1.0);
            if !(FONT_SCALE_MIN..=FONT_SCALE_MAX).contains(&scale) {
                errors.push(Violation::new(
                    field("fontScale"),
                    "Font scale must be between 0.85 and 1.25",
                ));
            }
            scale
        }
        Some(_) => {
            errors.push(Violation::new(field("fontScale"), "Expected a number"));
            defaults.font_scale
        }
        None => defaults.font_scale,
    };

    Theme {
        layout,
        mode,
        primary,
        accent,
        background,
        foreground,
        light_primary,
        light_accent,
        light_background,
        light_foreground,
        font_scale,
        density,
        text_align,
        portfolio_theme,
    }
}

fn validate_project(value: &Value, path: &str, errors: &mut Vec<Violation>) -> Project {
    let obj = match value.as_object() {
        Some(obj) => obj,
        None => {
            errors.push(Violation::new(path, "Expected an object"));
            return placeholder_project();
        }
    };

    let id = required_str_at(obj, "id", path, errors).unwrap_or_default();

    let title = required_str_at(obj, "title", path, errors).unwrap_or_default();
    if obj.contains_key("title") && title.chars().count() < 2 {
        errors.push(Violation::new(
            format!("{path}.title"),
            "Title must be at least 2 characters",
        ));
    }

    let description = optional_str_field(obj, "description", path, errors);
    if let Some(ref text) = description {
        if text.chars().count() > MAX_DESCRIPTION_LEN {
            errors.push(Violation::new(
                format!("{path}.description"),
                "Description must be 280 characters or less",
            ));
        }
    }

    let url = required_str_at(obj, "url", path, errors).unwrap_or_default();
    if obj.contains_key("url") && Url::parse(&url).is_err() {
        errors.push(Violation::new(
            format!("{path}.url"),
            "Invalid project URL",
        ));
    }

    let app_type: AppType = enum_field(
        obj.get("appType"),
        &format!("{path}.appType"),
        "Notebook, Dashboard, BI Report, SQL, ML Model, API, Other",
        errors,
    );

    let icon = match obj.get("icon") {
        Some(value) => validate_icon(value, &format!("{path}.icon"), errors),
        None => {
            errors.push(Violation::new(format!("{path}.icon"), "Required"));
            ProjectIcon::fallback()
        }
    };

    let image = optional_str_field(obj, "image", path, errors);
    let tags = string_array(obj, "tags", path, errors);
    let tech = string_array(obj, "tech", path, errors);

    let featured = match obj.get("featured") {
        Some(Value::Bool(b)) => *b,
        Some(_) => {
            errors.push(Violation::new(
                format!("{path}.featured"),
                "Expected a boolean",
            ));
            false
        }
        None => false,
    };

    Project {
        id,
        title,
        description,
        url,
        app_type,
        icon,
        image,
        tags,
        tech,
        featured,
    }
}

/// Normalize the legacy icon object into the sum type. The `kind` tag picks
/// the variant; a missing payload collapses to the builtin fallback icon.
fn validate_icon(value: &Value, path: &str, errors: &mut Vec<Violation>) -> ProjectIcon {
    let obj = match value.as_object() {
        Some(obj) => obj,
        None => {
            errors.push(Violation::new(path, "Expected an object"));
            return ProjectIcon::fallback();
        }
    };

    let kind = match obj.get("kind").and_then(Value::as_str) {
        Some(kind) => kind,
        None => {
            errors.push(Violation::new(format!("{path}.kind"), "Required"));
            return ProjectIcon::fallback();
        }
    };

    match kind {
        "builtin" => match obj.get("name").and_then(Value::as_str) {
            Some(name) if !name.is_empty() => ProjectIcon::Builtin {
                name: name.to_string(),
            },
            _ => ProjectIcon::fallback(),
        },
        "upload" => match obj.get("dataUrl").and_then(Value::as_str) {
            Some(data_url) if !data_url.is_empty() => ProjectIcon::Upload {
                data_url: data_url.to_string(),
            },
            _ => ProjectIcon::fallback(),
        },
        _ => {
            errors.push(Violation::new(
                format!("{path}.kind"),
                "Invalid value: expected one of builtin, upload",
            ));
            ProjectIcon::fallback()
        }
    }
}

/// Education and experience entries share a shape; only the organization
/// field name and message differ.
struct EntryFields {
    id: String,
    title: String,
    organization: String,
    from: String,
    to: Option<String>,
    current: bool,
    description: Option<String>,
}

#[allow(clippy::too_many_arguments)]
fn validate_entries(
    value: Option<&Value>,
    path: &str,
    max: usize,
    max_message: &str,
    org_key: &str,
    org_message: &str,
    errors: &mut Vec<Violation>,
) -> Vec<EntryFields> {
    let items = match value {
        Some(Value::Array(items)) => items,
        Some(_) => {
            errors.push(Violation::new(path, "Expected an array"));
            return Vec::new();
        }
        None => return Vec::new(),
    };

    if items.len() > max {
        errors.push(Violation::new(path, max_message));
    }

    let mut seen = HashSet::new();
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let entry_path = format!("{path}.{i}");
            let entry = validate_entry(item, &entry_path, org_key, org_message, errors);
            if !entry.id.is_empty() && !seen.insert(entry.id.clone()) {
                errors.push(Violation::new(format!("{entry_path}.id"), "Duplicate id"));
            }
            entry
        })
        .collect()
}

fn validate_entry(
    value: &Value,
    path: &str,
    org_key: &str,
    org_message: &str,
    errors: &mut Vec<Violation>,
) -> EntryFields {
    let obj = match value.as_object() {
        Some(obj) => obj,
        None => {
            errors.push(Violation::new(path, "Expected an object"));
            return EntryFields {
                id: String::new(),
                title: String::new(),
                organization: String::new(),
                from: String::new(),
                to: None,
                current: false,
                description: None,
            };
        }
    };

    let id = required_str_at(obj, "id", path, errors).unwrap_or_default();

    let title = required_str_at(obj, "title", path, errors).unwrap_or_default();
    if obj.contains_key("title") && title.chars().count() < 2 {
        errors.push(Violation::new(format!("{path}.title"), "Title is required"));
    }

    let organization = required_str_at(obj, org_key, path, errors).unwrap_or_default();
    if obj.contains_key(org_key) && organization.chars().count() < 2 {
        errors.push(Violation::new(format!("{path}.{org_key}"), org_message));
    }

    let from = required_str_at(obj, "from", path, errors).unwrap_or_default();
    if obj.contains_key("from") && from.is_empty() {
        errors.push(Violation::new(
            format!("{path}.from"),
            "Start date is required",
        ));
    }

    let to = optional_str_field(obj, "to", path, errors);

    let current = match obj.get("current") {
        Some(Value::Bool(b)) => *b,
        Some(_) => {
            errors.push(Violation::new(
                format!("{path}.current"),
                "Expected a boolean",
            ));
            false
        }
        None => false,
    };

    let description = optional_str_field(obj, "description", path, errors);
    if let Some(ref text) = description {
        if text.chars().count() > MAX_DESCRIPTION_LEN {
            errors.push(Violation::new(
                format!("{path}.description"),
                "Description must be 280 characters or less",
            ));
        }
    }

    EntryFields {
        id,
        title,
        organization,
        from,
        to,
        current,
        description,
    }
}

fn placeholder_project() -> Project {
    Project {
        id: String::new(),
        title: String::new(),
        description: None,
        url: String::new(),
        app_type: AppType::default(),
        icon: ProjectIcon::fallback(),
        image: None,
        tags: Vec::new(),
        tech: Vec::new(),
        featured: false,
    }
}

/// Required top-level string field: missing or mistyped pushes a violation
/// and yields `None` so callers skip their constraint checks.
fn required_str(
    obj: &Map<String, Value>,
    key: &str,
    errors: &mut Vec<Violation>,
) -> Option<String> {
    match obj.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(Violation::new(key, "Expected a string"));
            None
        }
        None => {
            errors.push(Violation::new(key, "Required"));
            None
        }
    }
}

fn required_str_at(
    obj: &Map<String, Value>,
    key: &str,
    path: &str,
    errors: &mut Vec<Violation>,
) -> Option<String> {
    match obj.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(Violation::new(format!("{path}.{key}"), "Expected a string"));
            None
        }
        None => {
            errors.push(Violation::new(format!("{path}.{key}"), "Required"));
            None
        }
    }
}

/// Optional string field with the empty string as the absent value.
fn optional_str(
    obj: &Map<String, Value>,
    key: &str,
    path: &str,
    errors: &mut Vec<Violation>,
) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(_) => {
            errors.push(Violation::new(format!("{path}.{key}"), "Expected a string"));
            String::new()
        }
    }
}

/// Optional string field that stays absent when omitted.
fn optional_str_field(
    obj: &Map<String, Value>,
    key: &str,
    path: &str,
    errors: &mut Vec<Violation>,
) -> Option<String> {
    match obj.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Null) | None => None,
        Some(_) => {
            errors.push(Violation::new(format!("{path}.{key}"), "Expected a string"));
            None
        }
    }
}

fn string_or_default(
    obj: &Map<String, Value>,
    key: &str,
    default: &str,
    path: &str,
    errors: &mut Vec<Violation>,
) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => default.to_string(),
        Some(_) => {
            errors.push(Violation::new(format!("{path}.{key}"), "Expected a string"));
            default.to_string()
        }
    }
}

fn string_array(
    obj: &Map<String, Value>,
    key: &str,
    path: &str,
    errors: &mut Vec<Violation>,
) -> Vec<String> {
    match obj.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| match item {
                Value::String(s) => Some(s.clone()),
                _ => {
                    errors.push(Violation::new(
                        format!("{path}.{key}.{i}"),
                        "Expected a string",
                    ));
                    None
                }
            })
            .collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(_) => {
            errors.push(Violation::new(format!("{path}.{key}"), "Expected an array"));
            Vec::new()
        }
    }
}

/// Enum field parsed through serde; absent falls back to the enum default.
fn enum_field<T>(
    value: Option<&Value>,
    path: &str,
    expected: &str,
    errors: &mut Vec<Violation>,
) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match value {
        None | Some(Value::Null) => T::default(),
        Some(v) => match serde_json::from_value(v.clone()) {
            Ok(parsed) => parsed,
            Err(_) => {
                errors.push(Violation::new(
                    path,
                    format!("Invalid value: expected one of {expected}"),
                ));
                T::default()
            }
        },
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn default_value() -> Value {
        serde_json::to_value(Portfolio::default()).unwrap()
    }

    #[test]
    fn default_document_validates_cleanly() {
        let validated = validate(&default_value()).unwrap();
        assert_eq!(validated, Portfolio::default());
    }

    #[test]
    fn validation_is_idempotent_after_normalization() {
        let mut value = default_value();
        // Strip defaultable fields, then normalize twice.
        let obj = value.as_object_mut().unwrap();
        obj.remove("language");
        obj.remove("education");
        let once = validate(&value).unwrap();
        let twice = validate(&serde_json::to_value(&once).unwrap()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn collects_every_violation_not_just_the_first() {
        let mut value = default_value();
        value["contact"]["email"] = json!("not-an-email");
        value["presentation"] = json!("x".repeat(2000));
        let errors = validate(&value).unwrap_err();
        assert_eq!(errors.len(), 2);
        let paths: Vec<&str> = errors.iter().map(|v| v.path.as_str()).collect();
        assert!(paths.contains(&"contact.email"));
        assert!(paths.contains(&"presentation"));
    }

    #[test]
    fn missing_required_keys_are_reported() {
        let errors = validate(&json!({})).unwrap_err();
        for path in ["careerName", "title", "presentation", "contact", "theme", "projects"] {
            assert!(
                errors.iter().any(|v| v.path == path && v.message == "Required"),
                "missing violation for {path}: {errors:?}"
            );
        }
    }

    #[test]
    fn non_object_candidate_is_rejected() {
        let errors = validate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Expected a JSON object");
    }

    #[test]
    fn defaults_are_filled_for_absent_fields() {
        let original = Portfolio::default();
        let mut value = default_value();
        let theme = value["theme"].as_object_mut().unwrap();
        theme.remove("portfolioTheme");
        theme.remove("textAlign");
        value.as_object_mut().unwrap().remove("language");
        value.as_object_mut().unwrap().remove("education");

        let validated = validate(&value).unwrap();
        assert_eq!(validated.theme.portfolio_theme, ColorScheme::Dark);
        assert_eq!(validated.theme.text_align, TextAlign::Left);
        assert_eq!(validated.language, Language::En);
        assert!(validated.education.is_empty());
        // Everything else is untouched.
        assert_eq!(validated.career_name, original.career_name);
        assert_eq!(validated.contact, original.contact);
        assert_eq!(validated.projects, original.projects);
        assert_eq!(validated.theme.primary, original.theme.primary);
    }

    #[test]
    fn project_cap_is_enforced() {
        let mut value = default_value();
        let template = value["projects"][0].clone();
        let projects: Vec<Value> = (0..25)
            .map(|i| {
                let mut p = template.clone();
                p["id"] = json!(format!("p-{i}"));
                p
            })
            .collect();
        value["projects"] = Value::Array(projects);
        let errors = validate(&value).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "projects");
        assert_eq!(errors[0].message, "Maximum 24 projects allowed");
    }

    #[test]
    fn education_and_experience_caps_are_enforced() {
        let entry = |i: usize| {
            json!({
                "id": format!("e-{i}"),
                "title": "Degree",
                "institution": "School",
                "company": "Firm",
                "from": "2020",
                "current": false
            })
        };
        let mut value = default_value();
        value["education"] = Value::Array((0..11).map(entry).collect());
        value["experience"] = Value::Array((0..21).map(entry).collect());
        let errors = validate(&value).unwrap_err();
        assert!(errors
            .iter()
            .any(|v| v.path == "education" && v.message == "Maximum 10 education entries allowed"));
        assert!(errors.iter().any(
            |v| v.path == "experience" && v.message == "Maximum 20 experience entries allowed"
        ));
    }

    #[test]
    fn duplicate_project_ids_are_a_violation() {
        let mut value = default_value();
        value["projects"][1]["id"] = value["projects"][0]["id"].clone();
        let errors = validate(&value).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "projects.1.id");
        assert_eq!(errors[0].message, "Duplicate id");
    }

    #[test]
    fn legacy_icon_with_both_fields_normalizes_by_kind() {
        let mut value = default_value();
        value["projects"][0]["icon"] = json!({
            "kind": "upload",
            "name": "BarChart3",
            "dataUrl": "data:image/png;base64,AAAA"
        });
        let validated = validate(&value).unwrap();
        assert_eq!(
            validated.projects[0].icon,
            ProjectIcon::Upload {
                data_url: "data:image/png;base64,AAAA".to_string()
            }
        );
    }

    #[test]
    fn icon_without_payload_falls_back_to_builtin_default() {
        let mut value = default_value();
        value["projects"][0]["icon"] = json!({ "kind": "upload" });
        value["projects"][1]["icon"] = json!({ "kind": "builtin" });
        let validated = validate(&value).unwrap();
        assert_eq!(validated.projects[0].icon, ProjectIcon::fallback());
        assert_eq!(validated.projects[1].icon, ProjectIcon::fallback());
    }

    #[test]
    fn invalid_icon_kind_is_a_violation() {
        let mut value = default_value();
        value["projects"][0]["icon"] = json!({ "kind": "emoji", "name": "Star" });
        let errors = validate(&value).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "projects.0.icon.kind");
    }

    #[test]
    fn font_scale_range_is_enforced() {
        let mut value = default_value();
        value["theme"]["fontScale"] = json!(2.0);
        let errors = validate(&value).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "theme.fontScale");
    }

    #[test]
    fn short_project_title_and_bad_url_are_both_reported() {
        let mut value = default_value();
        value["projects"][0]["title"] = json!("x");
        value["projects"][0]["url"] = json!("not a url");
        let errors = validate(&value).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|v| v.path == "projects.0.title"));
        assert!(errors.iter().any(|v| v.path == "projects.0.url"));
    }

    #[test]
    fn website_may_be_empty_but_not_malformed() {
        let mut value = default_value();
        value["contact"]["website"] = json!("");
        assert!(validate(&value).is_ok());

        value["contact"]["website"] = json!("www.example.com");
        let errors = validate(&value).unwrap_err();
        assert_eq!(errors[0].path, "contact.website");
        assert_eq!(errors[0].message, "Invalid website URL");
    }
}
