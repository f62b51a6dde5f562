//! Pure render projection
//!
//! Everything here is a pure function of an already-validated document plus
//! the viewer's ephemeral light/dark toggle. Both layout variants and both
//! render targets (in-app and standalone export) share these rules.

use crate::core::schema::{ColorScheme, Language, Project, ProjectIcon, Theme};

/// The four themed colors after resolving the light/dark axis.
///
/// Which variant is used depends solely on the viewer toggle, never on the
/// editor-chrome theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPalette {
    pub primary: String,
    pub accent: String,
    pub background: String,
    pub foreground: String,
}

impl ResolvedPalette {
    pub fn resolve(theme: &Theme, scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self {
                primary: theme.primary.clone(),
                accent: theme.accent.clone(),
                background: theme.background.clone(),
                foreground: theme.foreground.clone(),
            },
            ColorScheme::Light => Self {
                primary: theme.light_primary.clone(),
                accent: theme.light_accent.clone(),
                background: theme.light_background.clone(),
                foreground: theme.light_foreground.clone(),
            },
        }
    }
}

/// Minimalistic ordering: featured first, insertion order preserved within
/// each group (stable, the featured flag is the only key).
pub fn featured_first(projects: &[Project]) -> Vec<&Project> {
    let mut ordered: Vec<&Project> = projects.iter().collect();
    ordered.sort_by_key(|p| !p.featured);
    ordered
}

/// Showcase grouping: (featured, regular), each in insertion order.
pub fn partition_featured(projects: &[Project]) -> (Vec<&Project>, Vec<&Project>) {
    projects.iter().partition(|p| p.featured)
}

/// Symbolic icon names the builtin set recognizes.
pub const BUILTIN_ICONS: [&str; 30] = [
    "Database",
    "BarChart3",
    "PieChart",
    "LineChart",
    "TrendingUp",
    "Table",
    "FileSpreadsheet",
    "Sheet",
    "Calculator",
    "Binary",
    "Code",
    "Terminal",
    "FileCode",
    "GitBranch",
    "Braces",
    "Brain",
    "Cpu",
    "Network",
    "Workflow",
    "GitGraph",
    "Activity",
    "Zap",
    "Target",
    "Award",
    "Briefcase",
    "Server",
    "Cloud",
    "Layers",
    "Box",
    "Package",
];

pub fn is_builtin_icon(name: &str) -> bool {
    BUILTIN_ICONS.contains(&name)
}

/// Outcome of the shared three-way icon policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconResolution<'a> {
    /// Uploaded image payload (a data URL).
    Uploaded(&'a str),
    /// Recognized symbolic name.
    Builtin(&'a str),
    /// Nothing usable; render the fixed fallback symbol.
    Fallback,
}

/// Resolve an icon: uploaded payload wins, then a recognized builtin name,
/// then the fallback. Identical across both variants and both render targets.
pub fn resolve_icon(icon: &ProjectIcon) -> IconResolution<'_> {
    match icon {
        ProjectIcon::Upload { data_url } if !data_url.is_empty() => {
            IconResolution::Uploaded(data_url)
        }
        ProjectIcon::Builtin { name } if is_builtin_icon(name) => IconResolution::Builtin(name),
        _ => IconResolution::Fallback,
    }
}

/// Convert a symbolic icon name to its kebab-case slug for the standalone
/// document ("BarChart3" -> "bar-chart3").
pub fn lucide_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                slug.push('-');
            }
            slug.push(c.to_ascii_lowercase());
        } else {
            slug.push(c);
        }
    }
    slug
}

/// Section labels for the rendered portfolio.
pub struct Strings {
    pub about: &'static str,
    pub about_me: &'static str,
    pub featured: &'static str,
    pub all_projects: &'static str,
    pub projects: &'static str,
    pub view_project: &'static str,
    pub education: &'static str,
    pub experience: &'static str,
    pub present: &'static str,
    pub contact: &'static str,
    pub skills: &'static str,
    pub no_projects: &'static str,
}

const EN: Strings = Strings {
    about: "About",
    about_me: "About Me",
    featured: "Featured",
    all_projects: "All Projects",
    projects: "Projects",
    view_project: "View Project",
    education: "Education",
    experience: "Experience",
    present: "Present",
    contact: "Contact",
    skills: "Skills & Technologies",
    no_projects: "No projects to display",
};

const ES: Strings = Strings {
    about: "Acerca de",
    about_me: "Sobre Mí",
    featured: "Destacado",
    all_projects: "Todos los Proyectos",
    projects: "Proyectos",
    view_project: "Ver Proyecto",
    education: "Educación",
    experience: "Experiencia",
    present: "Presente",
    contact: "Contacto",
    skills: "Habilidades y Tecnologías",
    no_projects: "No hay proyectos para mostrar",
};

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::{AppType, Portfolio};

    fn project(id: &str, featured: bool) -> Project {
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
    fn featured_sort_is_stable() {
        let projects = vec![
            project("A", false),
            project("B", true),
            project("C", false),
            project("D", true),
        ];
        let ordered: Vec<&str> = featured_first(&projects)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ordered, ["B", "D", "A", "C"]);
    }

    #[test]
    fn partition_preserves_insertion_order_per_group() {
        let projects = vec![
            project("A", false),
            project("B", true),
            project("C", false),
            project("D", true),
        ];
        let (featured, regular) = partition_featured(&projects);
        let featured: Vec<&str> = featured.iter().map(|p| p.id.as_str()).collect();
        let regular: Vec<&str> = regular.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(featured, ["B", "D"]);
        assert_eq!(regular, ["A", "C"]);
    }

    #[test]
    fn icon_resolution_is_three_way() {
        let uploaded = ProjectIcon::Upload {
            data_url: "data:image/png;base64,AAAA".to_string(),
        };
        assert_eq!(
            resolve_icon(&uploaded),
            IconResolution::Uploaded("data:image/png;base64,AAAA")
        );

        let builtin = ProjectIcon::Builtin {
            name: "BarChart3".to_string(),
        };
        assert_eq!(resolve_icon(&builtin), IconResolution::Builtin("BarChart3"));

        let unrecognized = ProjectIcon::Builtin {
            name: "NotAnIcon".to_string(),
        };
        assert_eq!(resolve_icon(&unrecognized), IconResolution::Fallback);

        let empty_upload = ProjectIcon::Upload {
            data_url: String::new(),
        };
        assert_eq!(resolve_icon(&empty_upload), IconResolution::Fallback);
    }

    #[test]
    fn palette_follows_the_viewer_toggle_only() {
        let theme = Portfolio::default().theme;
        let dark = ResolvedPalette::resolve(&theme, ColorScheme::Dark);
        assert_eq!(dark.background, theme.background);
        assert_eq!(dark.primary, theme.primary);

        let light = ResolvedPalette::resolve(&theme, ColorScheme::Light);
        assert_eq!(light.background, theme.light_background);
        assert_eq!(light.foreground, theme.light_foreground);
    }

    #[test]
    fn lucide_slugs_match_the_export_convention() {
        assert_eq!(lucide_slug("BarChart3"), "bar-chart3");
        assert_eq!(lucide_slug("FileCode"), "file-code");
        assert_eq!(lucide_slug("Zap"), "zap");
    }

    #[test]
    fn spanish_strings_are_available() {
        let t = strings(Language::Es);
        assert_eq!(t.projects, "Proyectos");
        assert_eq!(t.present, "Presente");
    }
}
