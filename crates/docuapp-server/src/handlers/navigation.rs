//! Navigation API endpoint.
//!
//! Returns the sidebar navigation tree for the documentation site.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use docuapp_site::NavGroup;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/navigation.
#[derive(Serialize)]
pub(crate) struct NavigationResponse {
    /// Navigation groups in display order.
    groups: &'static [NavGroup],
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
) -> Json<NavigationResponse> {
    let groups = state.site.navigation();
    Json(NavigationResponse { groups })
}

#[cfg(test)]
mod tests {
    use docuapp_site::NAVIGATION;

    use super::*;

    #[test]
    fn test_navigation_response_serialization() {
        let response = NavigationResponse { groups: NAVIGATION };

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["groups"][0]["title"], "Getting Started");
        assert_eq!(json["groups"][0]["items"][0]["path"], "/");
    }
}
