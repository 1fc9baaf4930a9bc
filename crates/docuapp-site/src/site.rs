//! Unified page lookup and rendering.
//!
//! [`Site`] is the one object the server and CLI talk to: it resolves a
//! navigation path to a document, renders it, and optionally wraps it in the
//! layout shell. Every operation is a pure read over process-lifetime
//! constant data, so the type is trivially `Send + Sync` and rendering is
//! idempotent and re-entrant.

use docuapp_content::{ContentIndex, lookup};
use docuapp_renderer::render_html;

use crate::nav::{NAVIGATION, NavGroup};
use crate::page::{PageRenderResult, SiteOptions, page_html};

/// Site facade: navigation, page rendering, and layout.
pub struct Site {
    options: SiteOptions,
}

impl Site {
    /// Create a site with the given presentation options.
    #[must_use]
    pub fn new(options: SiteOptions) -> Self {
        Self { options }
    }

    /// Presentation options this site was built with.
    #[must_use]
    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    /// The sidebar navigation tree.
    #[must_use]
    pub fn navigation(&self) -> &'static [NavGroup] {
        NAVIGATION
    }

    /// Render the content for a navigation path.
    ///
    /// Total: unknown paths render the fallback document. The result carries
    /// the content fragment only; use [`Site::page_html`] for the full page.
    #[must_use]
    pub fn render(&self, path: &str) -> PageRenderResult {
        let doc = lookup(path);
        PageRenderResult {
            title: doc.title.clone(),
            path: path.to_owned(),
            html: render_html(doc),
        }
    }

    /// Render the full HTML page for a navigation path.
    #[must_use]
    pub fn page_html(&self, path: &str) -> String {
        page_html(&self.options, &self.render(path))
    }

    /// Render every indexed document as `(key, title, full page html)`.
    ///
    /// Used by the static build: each document is rendered at its canonical
    /// route (falling back to a key-derived path for unrouted documents) so
    /// sidebar highlighting matches the page.
    #[must_use]
    pub fn render_all(&self) -> Vec<(String, String, String)> {
        let index = ContentIndex::get();
        index
            .keys()
            .iter()
            .map(|key| {
                let path = index
                    .routes()
                    .iter()
                    .find(|(_, k)| k == key)
                    .map_or_else(|| format!("/{key}"), |(path, _)| (*path).to_owned());
                let result = self.render(&path);
                let html = page_html(&self.options, &result);
                ((*key).to_owned(), result.title, html)
            })
            .collect()
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::new(SiteOptions::default())
    }
}

#[cfg(test)]
mod tests {
    // Site is shared behind an Arc by the server.
    static_assertions::assert_impl_all!(super::Site: Send, Sync);

    use docuapp_content::Section;
    use docuapp_renderer::{Block, render};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_root_renders_introduction() {
        let site = Site::default();

        let result = site.render("/");

        assert_eq!(result.title, "Welcome to DocuApp");
        assert!(result.html.starts_with("<h1>Welcome to DocuApp</h1>"));
        assert!(
            result
                .html
                .contains("DocuApp is a comprehensive documentation platform")
        );
    }

    #[test]
    fn test_root_first_section_is_paragraph() {
        let doc = lookup("/");

        let blocks = render(doc);

        assert_eq!(blocks.len(), 1 + doc.sections.len());
        let Block::Paragraph { text } = &blocks[1] else {
            panic!("first section should render as a paragraph");
        };
        assert!(text.starts_with("DocuApp is a comprehensive documentation platform"));
    }

    #[test]
    fn test_installation_table_header_row() {
        let site = Site::default();

        let result = site.render("/installation");

        assert!(result.html.contains(
            "<thead><tr><th>Variable</th><th>Description</th><th>Default</th></tr></thead>"
        ));
    }

    #[test]
    fn test_database_page_has_core_tables_table() {
        let doc = lookup("/database");

        let has_core_tables = doc.sections.iter().any(|s| {
            matches!(
                s,
                Section::Table { headers, .. }
                    if headers == &["Table", "Description", "Key Fields"]
            )
        });

        assert!(has_core_tables);
    }

    #[test]
    fn test_unmapped_path_renders_like_root() {
        let site = Site::default();

        let fallback = site.render("/nonexistent");
        let root = site.render("/");

        assert_eq!(fallback.title, root.title);
        assert_eq!(fallback.html, root.html);
    }

    #[test]
    fn test_render_is_idempotent() {
        let site = Site::default();

        assert_eq!(site.render("/database"), site.render("/database"));
    }

    #[test]
    fn test_page_html_wraps_content_in_shell() {
        let site = Site::default();

        let html = site.page_html("/components");

        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains(r#"<a class="nav-link active" href="/components""#));
        assert!(html.contains("<h1>Components Library</h1>"));
    }

    #[test]
    fn test_render_all_covers_every_key() {
        let site = Site::default();

        let pages = site.render_all();

        assert_eq!(pages.len(), 12);
        assert!(pages.iter().all(|(_, _, html)| html.contains("<h1>")));
        assert!(
            pages
                .iter()
                .any(|(key, title, _)| key == "introduction" && title == "Welcome to DocuApp")
        );
    }
}
