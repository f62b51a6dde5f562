//! Standalone document export
//!
//! Emits a self-contained HTML file that loads a sibling `portfolio.json`
//! and reproduces the render projection without the application. The layout
//! variant is fixed at export time; the embedded script re-expresses the
//! same ordering, icon, and color rules as the in-app projection.

use crate::core::schema::Layout;

/// Build the standalone document for one layout variant.
pub fn standalone_document(layout: Layout) -> String {
    let variant = match layout {
        Layout::Minimalistic => "minimalistic",
        Layout::Showcase => "showcase",
    };
    TEMPLATE.replace("__LAYOUT__", variant)
}

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Portfolio</title>
  <script src="https://cdn.tailwindcss.com"></script>
  <script src="https://unpkg.com/lucide@latest"></script>
  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }

    .card {
      border-radius: 0.5rem;
      border: 1px solid;
      transition: all 0.3s;
    }

    .card:hover {
      box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);
    }

    .badge {
      display: inline-flex;
      align-items: center;
      border-radius: 9999px;
      padding: 0.25rem 0.75rem;
      font-size: 0.75rem;
      font-weight: 600;
      border: 1px solid;
    }

    .line-clamp-2 {
      overflow: hidden;
      display: -webkit-box;
      -webkit-box-orient: vertical;
      -webkit-line-clamp: 2;
    }
  </style>
</head>
<body>
  <div id="portfolio-root"></div>

  <script>
    async function loadPortfolio() {
      try {
        const response = await fetch('portfolio.json');
        if (!response.ok) {
          throw new Error(`HTTP error! status: ${response.status}`);
        }
        const data = await response.json();
        renderPortfolio(data);
        lucide.createIcons();
      } catch (error) {
        console.error('Error loading portfolio:', error);
        document.getElementById('portfolio-root').innerHTML =
          '<div class="min-h-screen flex items-center justify-center p-6"><div class="text-center"><p class="text-red-500 text-xl mb-2">Error loading portfolio data</p><p class="text-gray-600">Make sure portfolio.json is in the same directory as this HTML file.</p><p class="text-sm text-gray-500 mt-4">Error details: ' + error.message + '</p></div></div>';
      }
    }

    function renderPortfolio(data) {
      const root = document.getElementById('portfolio-root');
      const layout = '__LAYOUT__';

      if (layout === 'minimalistic') {
        root.innerHTML = renderMinimalisticLayout(data);
      } else {
        root.innerHTML = renderShowcaseLayout(data);
      }

      lucide.createIcons();
    }

    function resolveColors(theme) {
      const dark = theme.portfolioTheme !== 'light';
      return {
        primary: dark ? theme.primary : theme.lightPrimary,
        accent: dark ? theme.accent : theme.lightAccent,
        background: dark ? theme.background : theme.lightBackground,
        foreground: dark ? theme.foreground : theme.lightForeground,
      };
    }

    function renderIcon(icon) {
      if (icon.kind === 'upload' && icon.dataUrl) {
        return `<img src="${icon.dataUrl}" alt="Project icon" class="h-8 w-8 object-contain">`;
      }

      if (icon.kind === 'builtin' && icon.name) {
        const iconName = icon.name.replace(/([A-Z])/g, '-$1').toLowerCase().replace(/^-/, '');
        return `<i data-lucide="${iconName}" class="h-8 w-8"></i>`;
      }

      return '<i data-lucide="file-code" class="h-8 w-8"></i>';
    }

    function renderContactRow(contact, colors) {
      return `
        <div class="flex flex-wrap items-center justify-center gap-4 text-sm opacity-80">
          ${contact.email ? `
            <a href="mailto:${contact.email}" class="flex items-center gap-2 hover:opacity-100 transition-opacity">
              <i data-lucide="mail" class="h-4 w-4"></i>
              ${contact.email}
            </a>
          ` : ''}
          ${contact.phone ? `
            <span class="flex items-center gap-2">
              <i data-lucide="phone" class="h-4 w-4"></i>
              ${contact.phone}
            </span>
          ` : ''}
          ${contact.location ? `
            <span class="flex items-center gap-2">
              <i data-lucide="map-pin" class="h-4 w-4"></i>
              ${contact.location}
            </span>
          ` : ''}
        </div>
        ${contact.socials && contact.socials.length ? `
          <div class="flex flex-wrap items-center justify-center gap-4 text-sm">
            ${contact.socials.map(social => `
              <a href="${social.url}" target="_blank" rel="noopener noreferrer" class="hover:underline" style="color: ${colors.accent};">
                ${social.label}
              </a>
            `).join('')}
          </div>
        ` : ''}
      `;
    }

    function renderProjectCard(project, colors) {
      return `
        <div class="card group cursor-pointer hover:scale-105"
             style="background-color: ${colors.foreground}0d; border-color: ${colors.foreground}33;"
             onclick="window.open('${project.url}', '_blank')">
          ${project.image ? `
            <div class="aspect-video overflow-hidden">
              <img src="${project.image}" alt="${project.title}" class="w-full h-full object-cover">
            </div>
          ` : ''}
          <div class="p-6 space-y-4">
            <div class="flex items-start justify-between gap-2">
              <div class="flex items-center gap-3" style="color: ${colors.primary};">
                ${renderIcon(project.icon)}
                ${project.featured ? `<i data-lucide="star" class="h-5 w-5 fill-current" style="color: ${colors.accent};"></i>` : ''}
              </div>
              <i data-lucide="external-link" class="h-4 w-4 opacity-0 group-hover:opacity-100 transition-opacity"></i>
            </div>

            <div>
              <h3 class="font-semibold text-lg mb-1">${project.title}</h3>
              ${project.description ? `<p class="text-sm opacity-70 line-clamp-2">${project.description}</p>` : ''}
            </div>

            <div>
              <span class="badge" style="border-color: ${colors.accent}; color: ${colors.accent};">
                ${project.appType}
              </span>
            </div>

            ${project.tags && project.tags.length ? `
              <div class="flex flex-wrap gap-2">
                ${project.tags.slice(0, 3).map(tag => `
                  <span class="text-xs px-2 py-1 rounded" style="background-color: ${colors.primary}33; color: ${colors.primary};">
                    ${tag}
                  </span>
                `).join('')}
              </div>
            ` : ''}
          </div>
        </div>
      `;
    }

    function renderMinimalisticLayout(data) {
      const { careerName, title, presentation, contact, theme, projects } = data;
      const colors = resolveColors(theme);

      const sortedProjects = [...projects].sort((a, b) => {
        if (a.featured && !b.featured) return -1;
        if (!a.featured && b.featured) return 1;
        return 0;
      });

      return `
        <div class="min-h-screen p-4 sm:p-6 lg:p-8" style="background-color: ${colors.background}; color: ${colors.foreground}; font-size: ${theme.fontScale}rem;">
          <div class="max-w-7xl mx-auto space-y-8 sm:space-y-12">

            <header class="text-center space-y-4 pb-8 border-b" style="border-color: ${colors.foreground}33;">
              <div>
                <p class="text-sm uppercase tracking-wider opacity-70">${careerName}</p>
                <h1 class="text-4xl md:text-5xl font-bold mt-2" style="color: ${colors.primary};">
                  ${title}
                </h1>
              </div>
              ${renderContactRow(contact, colors)}
            </header>

            <section class="max-w-3xl mx-auto">
              <h2 class="text-2xl font-semibold mb-4" style="color: ${colors.primary};">About</h2>
              <p class="text-lg leading-relaxed opacity-90 whitespace-pre-wrap">${presentation}</p>
            </section>

            <section>
              <h2 class="text-2xl font-semibold mb-6" style="color: ${colors.primary};">Projects</h2>
              <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                ${sortedProjects.map(project => renderProjectCard(project, colors)).join('')}
              </div>
            </section>

            <footer class="text-center pt-8 border-t opacity-60 text-sm" style="border-color: ${colors.foreground}33;">
              <p>Built with Portfolio Studio</p>
            </footer>
          </div>
        </div>
      `;
    }

    function renderShowcaseLayout(data) {
      const { careerName, title, presentation, contact, theme, projects } = data;
      const colors = resolveColors(theme);

      const featuredProjects = projects.filter(p => p.featured);
      const regularProjects = projects.filter(p => !p.featured);

      return `
        <div class="min-h-screen" style="background-color: ${colors.background}; color: ${colors.foreground}; font-size: ${theme.fontScale}rem;">

          <div class="relative py-12 sm:py-16 lg:py-20 px-4 sm:px-6 lg:px-8"
               style="background: linear-gradient(135deg, ${colors.background} 0%, ${colors.primary}26 100%);">
            <div class="max-w-7xl mx-auto">
              <div class="text-center space-y-6">
                <div>
                  <span class="badge mb-4 inline-block text-sm px-4 py-1"
                        style="background-color: ${colors.accent}33; color: ${colors.accent}; border-color: ${colors.accent};">
                    ${careerName}
                  </span>
                  <h1 class="text-5xl md:text-6xl lg:text-7xl font-bold leading-tight" style="color: ${colors.primary};">
                    ${title}
                  </h1>
                </div>
                ${renderContactRow(contact, colors)}
              </div>
            </div>
          </div>

          <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 sm:py-12 lg:py-16 space-y-12 sm:space-y-16">

            <section>
              <div class="p-8 rounded-lg" style="background-color: ${colors.primary}1a; border-left: 4px solid ${colors.primary};">
                <h2 class="text-2xl font-semibold mb-4" style="color: ${colors.primary};">About Me</h2>
                <p class="text-lg leading-relaxed opacity-90 whitespace-pre-wrap">${presentation}</p>
              </div>
            </section>

            ${featuredProjects.length ? `
              <section>
                <div class="flex items-center gap-3 mb-8">
                  <i data-lucide="star" class="h-6 w-6 fill-current" style="color: ${colors.accent};"></i>
                  <h2 class="text-3xl font-bold" style="color: ${colors.primary};">Featured Projects</h2>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                  ${featuredProjects.map(project => renderProjectCard(project, colors)).join('')}
                </div>
              </section>
            ` : ''}

            ${regularProjects.length ? `
              <section>
                <h2 class="text-3xl font-bold mb-8" style="color: ${colors.primary};">All Projects</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                  ${regularProjects.map(project => renderProjectCard(project, colors)).join('')}
                </div>
              </section>
            ` : ''}

            <footer class="text-center pt-12 border-t opacity-50" style="border-color: ${colors.foreground}33;">
              <p class="text-sm">Crafted with Portfolio Studio</p>
            </footer>
          </div>
        </div>
      `;
    }

    loadPortfolio();
  </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_variant_is_fixed_at_export_time() {
        let min = standalone_document(Layout::Minimalistic);
        assert!(min.contains("const layout = 'minimalistic';"));
        let show = standalone_document(Layout::Showcase);
        assert!(show.contains("const layout = 'showcase';"));
    }

    #[test]
    fn document_loads_the_sibling_data_file() {
        let doc = standalone_document(Layout::Minimalistic);
        assert!(doc.contains("fetch('portfolio.json')"));
        assert!(doc.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn fallback_icon_matches_the_shared_policy() {
        let doc = standalone_document(Layout::Showcase);
        assert!(doc.contains(r#"data-lucide="file-code""#));
    }
}
