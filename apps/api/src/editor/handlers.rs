use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::editor::validation::Validate;
use crate::errors::AppError;
use crate::models::patch::PersonalInfoPatch;
use crate::models::resume::{CustomSection, CustomSectionItem};
use crate::models::{EntityId, Entry, Record, Resume, Section};
use crate::state::AppState;
use crate::store::{Committed, ResumeStore, Snapshot};

/// Body of every read: the document at one revision.
#[derive(Serialize)]
pub struct SnapshotResponse {
    pub revision: u64,
    pub resume: Arc<Resume>,
}

impl From<Snapshot> for SnapshotResponse {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            revision: snapshot.revision,
            resume: snapshot.resume,
        }
    }
}

/// Body of every mutation. `applied` is false when the target id was unknown
/// and the document was left untouched.
#[derive(Serialize)]
pub struct MutationResponse {
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub revision: u64,
    pub resume: Arc<Resume>,
}

impl MutationResponse {
    fn from_commit<T>(commit: Committed<T>, id: Option<EntityId>) -> Self {
        Self {
            applied: commit.outcome.is_applied(),
            id,
            revision: commit.snapshot.revision,
            resume: commit.snapshot.resume,
        }
    }
}

/// One element of a reorder body. Only the id is read; any other fields the
/// client sends along are ignored.
#[derive(Deserialize)]
pub struct OrderedId {
    pub id: EntityId,
}

fn order_of(body: Vec<OrderedId>) -> Vec<EntityId> {
    body.into_iter().map(|entry| entry.id).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Document
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<SnapshotResponse> {
    Json(state.store.snapshot().into())
}

#[derive(Deserialize)]
pub struct ChangesQuery {
    #[serde(default)]
    pub since: u64,
}

/// GET /api/v1/resume/changes?since=N
///
/// Answers as soon as the document is past revision `since`. Responds
/// `204 No Content` when nothing changed within the configured wait.
pub async fn handle_changes(
    State(state): State<AppState>,
    Query(params): Query<ChangesQuery>,
) -> Result<Response, AppError> {
    let mut rx = state.store.subscribe();
    let wait = Duration::from_secs(state.config.changes_timeout_secs);

    let newer = tokio::time::timeout(wait, rx.wait_for(|s| s.revision > params.since)).await;
    match newer {
        Ok(Ok(snapshot)) => {
            let body: SnapshotResponse = snapshot.clone().into();
            Ok(Json(body).into_response())
        }
        Ok(Err(_closed)) => Err(AppError::Internal(anyhow::anyhow!(
            "resume change channel closed"
        ))),
        Err(_elapsed) => {
            debug!("No change past revision {} within {:?}", params.since, wait);
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}

/// PATCH /api/v1/resume/personal
pub async fn handle_update_personal(
    State(state): State<AppState>,
    Json(patch): Json<PersonalInfoPatch>,
) -> Result<Json<MutationResponse>, AppError> {
    let mut candidate = state.store.snapshot().resume.personal.clone();
    candidate.apply(patch.clone());
    candidate.validate()?;

    let commit = state.store.update_personal_info(patch).await?;
    Ok(Json(MutationResponse::from_commit(commit, None)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSelection {
    pub template_id: String,
}

/// PUT /api/v1/resume/template
pub async fn handle_select_template(
    State(state): State<AppState>,
    Json(req): Json<TemplateSelection>,
) -> Result<Json<MutationResponse>, AppError> {
    let commit = state.store.set_selected_template(req.template_id).await?;
    Ok(Json(MutationResponse::from_commit(commit, None)))
}

// ────────────────────────────────────────────────────────────────────────────
// Collections (one set of handlers per section type)
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/{collection}
pub async fn handle_add<S: Section + Validate>(
    State(state): State<AppState>,
    Json(draft): Json<S::Draft>,
) -> Result<(StatusCode, Json<MutationResponse>), AppError> {
    S::from_draft(draft.clone()).validate()?;
    let commit = state.store.add::<S>(draft).await?;
    let id = commit.value.clone();
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::from_commit(commit, Some(id))),
    ))
}

/// PATCH /api/v1/resume/{collection}/:id
///
/// The patch is merged into a copy of the current entry and validated as a
/// whole, so e.g. moving only the start date past the end date is rejected.
pub async fn handle_update<S: Section + Validate>(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(patch): Json<S::Patch>,
) -> Result<Json<MutationResponse>, AppError> {
    if let Some(mut candidate) = state.store.find::<S>(&id) {
        candidate.fields.apply(patch.clone());
        candidate.fields.validate()?;
    }
    let commit = state.store.update::<S>(&id, patch).await?;
    Ok(Json(MutationResponse::from_commit(commit, Some(id))))
}

/// DELETE /api/v1/resume/{collection}/:id
pub async fn handle_remove<S: Section>(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> Result<Json<MutationResponse>, AppError> {
    let commit = state.store.remove::<S>(&id).await?;
    Ok(Json(MutationResponse::from_commit(commit, Some(id))))
}

/// PUT /api/v1/resume/{collection}
///
/// The body lists the collection's entries in their new order. Entries keep
/// their stored fields.
pub async fn handle_reorder<S: Section>(
    State(state): State<AppState>,
    Json(body): Json<Vec<OrderedId>>,
) -> Result<Json<MutationResponse>, AppError> {
    let commit = state.store.reorder::<S>(&order_of(body)).await?;
    Ok(Json(MutationResponse::from_commit(commit, None)))
}

/// Add/reorder on the collection path, update/remove on `/:id`.
pub fn collection_routes<S: Section + Validate>() -> Router<AppState> {
    let base = format!("/{}", S::KIND.path_segment());
    Router::new()
        .route(&base, post(handle_add::<S>).put(handle_reorder::<S>))
        .route(
            &format!("{base}/:id"),
            patch(handle_update::<S>).delete(handle_remove::<S>),
        )
}

// ────────────────────────────────────────────────────────────────────────────
// Custom section items
// ────────────────────────────────────────────────────────────────────────────

fn find_item(
    store: &ResumeStore,
    section_id: &EntityId,
    item_id: &EntityId,
) -> Option<Entry<CustomSectionItem>> {
    store
        .find::<CustomSection>(section_id)?
        .fields
        .items
        .into_iter()
        .find(|item| &item.id == item_id)
}

/// POST /api/v1/resume/custom-sections/:id/items
pub async fn handle_add_item(
    State(state): State<AppState>,
    Path(section_id): Path<EntityId>,
    Json(draft): Json<<CustomSectionItem as Record>::Draft>,
) -> Result<(StatusCode, Json<MutationResponse>), AppError> {
    CustomSectionItem::from_draft(draft.clone()).validate()?;
    let commit = state.store.add_item(&section_id, draft).await?;
    let id = commit.value.clone();
    let status = if id.is_some() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(MutationResponse::from_commit(commit, id))))
}

/// PUT /api/v1/resume/custom-sections/:id/items
pub async fn handle_reorder_items(
    State(state): State<AppState>,
    Path(section_id): Path<EntityId>,
    Json(body): Json<Vec<OrderedId>>,
) -> Result<Json<MutationResponse>, AppError> {
    let commit = state
        .store
        .reorder_items(&section_id, &order_of(body))
        .await?;
    Ok(Json(MutationResponse::from_commit(commit, None)))
}

/// PATCH /api/v1/resume/custom-sections/:id/items/:item_id
pub async fn handle_update_item(
    State(state): State<AppState>,
    Path((section_id, item_id)): Path<(EntityId, EntityId)>,
    Json(patch): Json<<CustomSectionItem as Record>::Patch>,
) -> Result<Json<MutationResponse>, AppError> {
    if let Some(mut candidate) = find_item(&state.store, &section_id, &item_id) {
        candidate.fields.apply(patch.clone());
        candidate.fields.validate()?;
    }
    let commit = state
        .store
        .update_item(&section_id, &item_id, patch)
        .await?;
    Ok(Json(MutationResponse::from_commit(commit, Some(item_id))))
}

/// DELETE /api/v1/resume/custom-sections/:id/items/:item_id
pub async fn handle_remove_item(
    State(state): State<AppState>,
    Path((section_id, item_id)): Path<(EntityId, EntityId)>,
) -> Result<Json<MutationResponse>, AppError> {
    let commit = state.store.remove_item(&section_id, &item_id).await?;
    Ok(Json(MutationResponse::from_commit(commit, Some(item_id))))
}

pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/custom-sections/:id/items",
            post(handle_add_item).put(handle_reorder_items),
        )
        .route(
            "/custom-sections/:id/items/:item_id",
            patch(handle_update_item).delete(handle_remove_item),
        )
}

/// Everything mounted under `/api/v1/resume`.
pub fn resume_routes() -> Router<AppState> {
    use crate::models::resume::{
        Course, Education, Experience, Extracurricular, Hobby, Internship, Language, Link,
        Project, Reference, Skill,
    };

    Router::new()
        .route("/", get(handle_get_resume))
        .route("/changes", get(handle_changes))
        .route("/personal", patch(handle_update_personal))
        .route("/template", axum::routing::put(handle_select_template))
        .merge(collection_routes::<Experience>())
        .merge(collection_routes::<Education>())
        .merge(collection_routes::<Skill>())
        .merge(collection_routes::<Project>())
        .merge(collection_routes::<Course>())
        .merge(collection_routes::<Language>())
        .merge(collection_routes::<Hobby>())
        .merge(collection_routes::<Reference>())
        .merge(collection_routes::<Internship>())
        .merge(collection_routes::<Extracurricular>())
        .merge(collection_routes::<Link>())
        .merge(collection_routes::<CustomSection>())
        .merge(item_routes())
}
