use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::sample::sample_resume;
use crate::state::AppState;
use crate::templates::{
    find_template, has_renderer, render, render_with, RenderedResume, TemplateInfo, CATALOG,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateListing {
    #[serde(flatten)]
    pub info: &'static TemplateInfo,
    /// False for gallery entries that render as Classic.
    pub has_renderer: bool,
}

#[derive(Serialize)]
pub struct RenderResponse {
    pub revision: u64,
    #[serde(flatten)]
    pub rendered: RenderedResume,
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateListing>> {
    Json(
        CATALOG
            .iter()
            .map(|info| TemplateListing {
                info,
                has_renderer: has_renderer(info.id),
            })
            .collect(),
    )
}

/// GET /api/v1/templates/:id/preview
/// Renders the built-in sample resume with the given template.
pub async fn handle_preview(Path(id): Path<String>) -> Result<Json<RenderedResume>, AppError> {
    let info = find_template(&id)
        .ok_or_else(|| AppError::NotFound(format!("Template '{id}' not found")))?;
    Ok(Json(render_with(&sample_resume(), info.id)))
}

/// GET /api/v1/render
/// The current document under its selected template.
pub async fn handle_render(State(state): State<AppState>) -> Json<RenderResponse> {
    let snapshot = state.store.snapshot();
    Json(RenderResponse {
        revision: snapshot.revision,
        rendered: render(&snapshot.resume),
    })
}
