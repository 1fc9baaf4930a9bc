//! Fixed content index and route resolution.
//!
//! The index maps stable document keys to [`Document`]s and navigation paths
//! to keys. Both tables are built once, before the first render, and live for
//! the whole process. [`lookup`] is total: unknown paths resolve to the
//! fallback document, so page rendering can never fail on a bad path.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::model::Document;
use crate::pages;

/// Key of the document served when a path has no route entry.
pub const FALLBACK_KEY: &str = "introduction";

/// Route table: navigation path to document key.
///
/// Paths carry a leading slash, matching what the navigation emits.
const ROUTES: &[(&str, &str)] = &[
    ("/", "introduction"),
    ("/quick-start", "quick-start"),
    ("/installation", "installation"),
    ("/api", "api-reference"),
    ("/components", "components"),
    ("/database", "database"),
    ("/auth", "auth"),
    ("/performance", "performance"),
    ("/deployment", "deployment"),
    ("/team", "team"),
    ("/analytics", "analytics"),
    ("/community", "community"),
];

static INDEX: LazyLock<ContentIndex> = LazyLock::new(ContentIndex::new);

/// The complete, fixed set of documents keyed by stable identifier.
pub struct ContentIndex {
    documents: HashMap<&'static str, Document>,
    routes: HashMap<&'static str, &'static str>,
}

impl ContentIndex {
    fn new() -> Self {
        let documents = HashMap::from([
            ("introduction", pages::introduction()),
            ("quick-start", pages::quick_start()),
            ("installation", pages::installation()),
            ("api-reference", pages::api_reference()),
            ("components", pages::components()),
            ("database", pages::database()),
            ("auth", pages::stub("Authentication Guide")),
            ("performance", pages::stub("Performance Optimization")),
            ("deployment", pages::stub("Deployment Guide")),
            ("team", pages::stub("Team Management")),
            ("analytics", pages::stub("Analytics & Insights")),
            ("community", pages::stub("Community & Support")),
        ]);
        let routes = ROUTES.iter().copied().collect();
        Self { documents, routes }
    }

    /// Shared process-wide index.
    #[must_use]
    pub fn get() -> &'static Self {
        &INDEX
    }

    /// Resolve a navigation path to a document key.
    ///
    /// Unknown paths resolve to [`FALLBACK_KEY`].
    #[must_use]
    pub fn resolve(&self, path: &str) -> &'static str {
        self.routes.get(path).copied().unwrap_or(FALLBACK_KEY)
    }

    /// Look up the document for a navigation path. Total: never fails.
    #[must_use]
    pub fn lookup(&self, path: &str) -> &Document {
        let key = self.resolve(path);
        self.documents
            .get(key)
            .unwrap_or_else(|| &self.documents[FALLBACK_KEY])
    }

    /// Get a document by its key, if the key exists.
    #[must_use]
    pub fn document(&self, key: &str) -> Option<&Document> {
        self.documents.get(key)
    }

    /// All document keys, sorted for deterministic iteration.
    #[must_use]
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.documents.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// All route entries as (path, key) pairs, in route-table order.
    #[must_use]
    pub fn routes(&self) -> &'static [(&'static str, &'static str)] {
        ROUTES
    }
}

/// Look up the document for a navigation path in the process-wide index.
#[must_use]
pub fn lookup(path: &str) -> &'static Document {
    ContentIndex::get().lookup(path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_root_resolves_to_introduction() {
        let doc = lookup("/");

        assert_eq!(doc.title, "Welcome to DocuApp");
    }

    #[test]
    fn test_every_route_has_a_document() {
        let index = ContentIndex::get();

        for (path, key) in index.routes() {
            assert!(
                index.document(key).is_some(),
                "route {path} points at missing key {key}"
            );
        }
    }

    #[test]
    fn test_unmapped_path_falls_back_to_root_document() {
        assert_eq!(lookup("/nonexistent"), lookup("/"));
        assert_eq!(lookup(""), lookup("/"));
        assert_eq!(lookup("/database/extra"), lookup("/"));
    }

    #[test]
    fn test_placeholder_routes_are_not_fallbacks() {
        let doc = lookup("/auth");

        assert_eq!(doc.title, "Authentication Guide");
        assert_ne!(doc, lookup("/"));
    }

    #[test]
    fn test_lookup_is_stable_across_calls() {
        // Same path must yield the same document instance.
        assert!(std::ptr::eq(lookup("/database"), lookup("/database")));
    }

    #[test]
    fn test_keys_are_sorted_and_complete() {
        let keys = ContentIndex::get().keys();

        assert_eq!(keys.len(), 12);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        assert!(keys.contains(&FALLBACK_KEY));
    }
}
