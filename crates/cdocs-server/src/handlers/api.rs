//! Document listing API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use cdocs_site::DocDescriptor;

use crate::state::AppState;

/// Handle GET /api/docs.
///
/// Returns every document in navigation order.
pub(crate) async fn list_documents(State(state): State<Arc<AppState>>) -> Json<Vec<DocDescriptor>> {
    Json(state.site.documents())
}
