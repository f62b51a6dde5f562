//! Typed portfolio document model
//!
//! Field names and order mirror the external JSON document exactly, so
//! exported files diff cleanly and re-import byte-for-byte.

use serde::{Deserialize, Serialize};

/// Root aggregate: one portfolio per store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub career_name: String,
    pub title: String,
    pub presentation: String,
    pub contact: Contact,
    pub theme: Theme,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub language: Language,
}

/// Contact block. Optional fields use the empty string as "not set",
/// matching the external document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Visual theme. Color fields are free-form color strings; each color has a
/// dark-variant and a light-variant counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub layout: Layout,
    pub mode: ColorMode,
    pub primary: String,
    pub accent: String,
    pub background: String,
    pub foreground: String,
    pub light_primary: String,
    pub light_accent: String,
    pub light_background: String,
    pub light_foreground: String,
    pub font_scale: f64,
    pub density: Density,
    pub text_align: TextAlign,
    pub portfolio_theme: ColorScheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Minimalistic,
    Showcase,
}

/// Editor-chrome theme preference. Independent of [`ColorScheme`], which
/// only affects the rendered portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Compact,
    #[default]
    Comfortable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// Light/dark scheme for the rendered portfolio itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    pub app_type: AppType,
    pub icon: ProjectIcon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub tech: Vec<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AppType {
    Notebook,
    #[default]
    Dashboard,
    #[serde(rename = "BI Report")]
    BiReport,
    #[serde(rename = "SQL")]
    Sql,
    #[serde(rename = "ML Model")]
    MlModel,
    #[serde(rename = "API")]
    Api,
    Other,
}

impl AppType {
    pub const ALL: [AppType; 7] = [
        AppType::Notebook,
        AppType::Dashboard,
        AppType::BiReport,
        AppType::Sql,
        AppType::MlModel,
        AppType::Api,
        AppType::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AppType::Notebook => "Notebook",
            AppType::Dashboard => "Dashboard",
            AppType::BiReport => "BI Report",
            AppType::Sql => "SQL",
            AppType::MlModel => "ML Model",
            AppType::Api => "API",
            AppType::Other => "Other",
        }
    }
}

/// Project icon: either a symbolic name from the builtin set, or an uploaded
/// image embedded as a data URL. The tag keeps the external `kind` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ProjectIcon {
    Builtin {
        name: String,
    },
    Upload {
        #[serde(rename = "dataUrl")]
        data_url: String,
    },
}

impl ProjectIcon {
    /// Symbolic name rendered when an icon carries no usable payload.
    pub const FALLBACK_NAME: &'static str = "FileCode";

    pub fn fallback() -> Self {
        ProjectIcon::Builtin {
            name: Self::FALLBACK_NAME.to_string(),
        }
    }
}

impl Default for ProjectIcon {
    fn default() -> Self {
        Self::fallback()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub title: String,
    pub institution: String,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            layout: Layout::Minimalistic,
            mode: ColorMode::System,
            primary: "#0ea5e9".to_string(),
            accent: "#22c55e".to_string(),
            background: "#0b1020".to_string(),
            foreground: "#e5e7eb".to_string(),
            light_primary: "#0ea5e9".to_string(),
            light_accent: "#22c55e".to_string(),
            light_background: "#ffffff".to_string(),
            light_foreground: "#1f2937".to_string(),
            font_scale: 1.0,
            density: Density::Comfortable,
            text_align: TextAlign::Left,
            portfolio_theme: ColorScheme::Dark,
        }
    }
}

impl Default for Portfolio {
    /// The built-in sample document installed on first launch and by
    /// reset-to-default.
    fn default() -> Self {
        Self {
            career_name: "Data Analyst".to_string(),
            title: "Data-driven insights that move the needle".to_string(),
            presentation: "Hi, I'm Ezequiel. I specialize in SQL, Python, and dashboarding. \
                           I love transforming messy data into clear stories."
                .to_string(),
            contact: Contact {
                email: "ezequiel.ca@example.com".to_string(),
                phone: String::new(),
                location: "Buenos Aires, AR".to_string(),
                website: "https://google.com".to_string(),
                socials: vec![
                    SocialLink {
                        label: "LinkedIn".to_string(),
                        url: "https://www.linkedin.com/in/ezequiel-colunga-acha".to_string(),
                    },
                    SocialLink {
                        label: "GitHub".to_string(),
                        url: "https://github.com/EzequielColungaAcha".to_string(),
                    },
                    SocialLink {
                        label: "Kaggle".to_string(),
                        url: "https://www.kaggle.com/ezequielcolungaacha".to_string(),
                    },
                ],
            },
            theme: Theme::default(),
            projects: vec![
                Project {
                    id: "sales-insights".to_string(),
                    title: "Sales Insights Dashboard".to_string(),
                    description: Some(
                        "Power BI dashboard tracking weekly revenue, retention, and product mix."
                            .to_string(),
                    ),
                    url: "https://example.com/sales-dashboard".to_string(),
                    app_type: AppType::Dashboard,
                    icon: ProjectIcon::Builtin {
                        name: "BarChart3".to_string(),
                    },
                    image: None,
                    tags: vec!["BI".to_string(), "DAX".to_string()],
                    tech: vec!["Power BI".to_string(), "SQL".to_string(), "DAX".to_string()],
                    featured: true,
                },
                Project {
                    id: "churn-model".to_string(),
                    title: "Customer Churn Model".to_string(),
                    description: Some("XGBoost model and explainer notebook.".to_string()),
                    url: "https://example.com/churn-notebook".to_string(),
                    app_type: AppType::MlModel,
                    icon: ProjectIcon::Builtin {
                        name: "Brain".to_string(),
                    },
                    image: None,
                    tags: vec!["ML".to_string(), "Churn".to_string()],
                    tech: vec![
                        "Python".to_string(),
                        "XGBoost".to_string(),
                        "SHAP".to_string(),
                    ],
                    featured: false,
                },
            ],
            education: Vec::new(),
            experience: Vec::new(),
            language: Language::En,
        }
    }
}

/// Collection caps enforced by the validator.
pub const MAX_PROJECTS: usize = 24;
pub const MAX_EDUCATION: usize = 10;
pub const MAX_EXPERIENCE: usize = 20;

/// Length caps enforced by the validator.
pub const MAX_PRESENTATION_LEN: usize = 1500;
pub const MAX_DESCRIPTION_LEN: usize = 280;

/// Allowed range for `theme.fontScale`.
pub const FONT_SCALE_MIN: f64 = 0.85;
pub const FONT_SCALE_MAX: f64 = 1.25;
