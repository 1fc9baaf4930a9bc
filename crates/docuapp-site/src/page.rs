//! Full-page HTML layout.
//!
//! Wraps rendered content in the application shell: sidebar navigation,
//! header bar, and a content container. The shell is plain semantic HTML;
//! visual styling is left to the stylesheet shipped with the deployment.

use std::fmt::Write;

use docuapp_renderer::escape_html;

use crate::nav::NAVIGATION;

/// Result of rendering one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRenderResult {
    /// Page title (the document title).
    pub title: String,
    /// Requested navigation path.
    pub path: String,
    /// Rendered content fragment (blocks only, no shell).
    pub html: String,
}

/// Site-wide presentation settings for the layout shell.
#[derive(Clone, Debug)]
pub struct SiteOptions {
    /// Site title shown in the sidebar header and the page `<title>`.
    pub title: String,
    /// Tagline shown under the site title.
    pub tagline: String,
    /// Theme name stamped on the document element as `data-theme`.
    pub theme: String,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            title: "DocuApp".to_owned(),
            tagline: "Documentation Hub".to_owned(),
            theme: "light".to_owned(),
        }
    }
}

/// Assemble the full HTML page around a rendered content fragment.
///
/// `current_path` selects which sidebar link is marked active.
#[must_use]
pub(crate) fn page_html(options: &SiteOptions, result: &PageRenderResult) -> String {
    let mut out = String::with_capacity(result.html.len() + 4096);
    writeln!(
        out,
        r#"<!doctype html>
<html lang="en" data-theme="{theme}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{page} - {site}</title>
</head>
<body>
<div class="app">"#,
        theme = escape_html(&options.theme),
        page = escape_html(&result.title),
        site = escape_html(&options.title),
    )
    .unwrap();

    sidebar_html(options, &result.path, &mut out);

    writeln!(
        out,
        r#"<div class="main">
<header class="header">
<input class="search" type="search" placeholder="Search documentation...">
<a class="header-link" href="https://github.com">GitHub</a>
</header>
<main class="content">
{content}</main>
</div>
</div>
</body>
</html>"#,
        content = result.html,
    )
    .unwrap();
    out
}

/// Sidebar: site header plus the grouped navigation tree.
fn sidebar_html(options: &SiteOptions, current_path: &str, out: &mut String) {
    writeln!(
        out,
        r#"<aside class="sidebar">
<div class="sidebar-header">
<h2>{site}</h2>
<p>{tagline}</p>
</div>
<nav class="sidebar-nav">"#,
        site = escape_html(&options.title),
        tagline = escape_html(&options.tagline),
    )
    .unwrap();

    for group in NAVIGATION {
        writeln!(
            out,
            "<div class=\"nav-group\">\n<div class=\"nav-group-label\">{}</div>\n<ul>",
            escape_html(group.title)
        )
        .unwrap();
        for item in group.items {
            let class = if item.path == current_path {
                "nav-link active"
            } else {
                "nav-link"
            };
            writeln!(
                out,
                "<li><a class=\"{class}\" href=\"{}\" data-icon=\"{}\">{}</a></li>",
                escape_html(item.path),
                item.icon,
                escape_html(item.title),
            )
            .unwrap();
        }
        out.push_str("</ul>\n</div>\n");
    }

    out.push_str("</nav>\n</aside>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> PageRenderResult {
        PageRenderResult {
            title: "Quick Start Guide".to_owned(),
            path: "/quick-start".to_owned(),
            html: "<h1>Quick Start Guide</h1>\n".to_owned(),
        }
    }

    #[test]
    fn test_page_html_carries_theme_attribute() {
        let options = SiteOptions {
            theme: "dark".to_owned(),
            ..SiteOptions::default()
        };

        let html = page_html(&options, &sample_result());

        assert!(html.contains(r#"<html lang="en" data-theme="dark">"#));
    }

    #[test]
    fn test_page_html_titles() {
        let html = page_html(&SiteOptions::default(), &sample_result());

        assert!(html.contains("<title>Quick Start Guide - DocuApp</title>"));
        assert!(html.contains("<h2>DocuApp</h2>"));
        assert!(html.contains("<p>Documentation Hub</p>"));
    }

    #[test]
    fn test_active_link_matches_current_path() {
        let html = page_html(&SiteOptions::default(), &sample_result());

        assert!(html.contains(r#"<a class="nav-link active" href="/quick-start""#));
        assert!(html.contains(r#"<a class="nav-link" href="/installation""#));
    }

    #[test]
    fn test_content_fragment_is_embedded_unescaped() {
        let html = page_html(&SiteOptions::default(), &sample_result());

        assert!(html.contains("<h1>Quick Start Guide</h1>"));
    }
}
