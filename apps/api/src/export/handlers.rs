use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::export::{plan_export, ExportFormat, ExportPlan};
use crate::state::AppState;

/// POST /api/v1/export/:format
/// Plans an export of the current snapshot. The document is never touched.
pub async fn handle_export(
    State(state): State<AppState>,
    Path(format): Path<String>,
) -> Result<Json<ExportPlan>, AppError> {
    let format: ExportFormat = format.parse()?;
    let snapshot = state.store.snapshot();

    let plan = plan_export(
        &snapshot.resume,
        format,
        &state.page_config,
        state.config.export_scale,
    )
    .map_err(|e| {
        warn!("Export at revision {} failed: {e}", snapshot.revision);
        e
    })?;

    debug!(
        "Planned {format} export '{}' ({} page(s)) at revision {}",
        plan.file_name, plan.page_count, snapshot.revision
    );
    Ok(Json(plan))
}
