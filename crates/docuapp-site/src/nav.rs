//! Fixed sidebar navigation tree.
//!
//! The tree is a process-lifetime constant: groups of links, each with a
//! stable icon identifier the frontend maps to an actual glyph. Paths here
//! are exactly the paths the content route table resolves.

use serde::Serialize;

/// One sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub title: &'static str,
    /// Navigation path, with leading slash.
    pub path: &'static str,
    /// Stable icon identifier (e.g. `"book-open"`).
    pub icon: &'static str,
}

/// A labelled group of sidebar links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Group label, shown above the links.
    pub title: &'static str,
    /// Links in display order.
    pub items: &'static [NavItem],
}

/// The complete sidebar tree, in display order.
pub const NAVIGATION: &[NavGroup] = &[
    NavGroup {
        title: "Getting Started",
        items: &[
            NavItem {
                title: "Introduction",
                path: "/",
                icon: "book-open",
            },
            NavItem {
                title: "Quick Start",
                path: "/quick-start",
                icon: "rocket",
            },
            NavItem {
                title: "Installation",
                path: "/installation",
                icon: "settings",
            },
        ],
    },
    NavGroup {
        title: "Development",
        items: &[
            NavItem {
                title: "API Reference",
                path: "/api",
                icon: "code",
            },
            NavItem {
                title: "Components",
                path: "/components",
                icon: "palette",
            },
            NavItem {
                title: "Database",
                path: "/database",
                icon: "database",
            },
            NavItem {
                title: "Authentication",
                path: "/auth",
                icon: "shield",
            },
        ],
    },
    NavGroup {
        title: "Advanced",
        items: &[
            NavItem {
                title: "Performance",
                path: "/performance",
                icon: "zap",
            },
            NavItem {
                title: "Deployment",
                path: "/deployment",
                icon: "globe",
            },
            NavItem {
                title: "Team Management",
                path: "/team",
                icon: "users",
            },
            NavItem {
                title: "Analytics",
                path: "/analytics",
                icon: "bar-chart",
            },
        ],
    },
    NavGroup {
        title: "Support",
        items: &[NavItem {
            title: "Community",
            path: "/community",
            icon: "message-square",
        }],
    },
];
