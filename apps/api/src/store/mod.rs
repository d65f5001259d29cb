//! Resume document store, the single owner of the resume document.
//!
//! Every mutation clones the current snapshot, applies a reducer from
//! [`collection`], writes the whole document to storage and only then
//! publishes the new snapshot to readers. Mutations are serialized through
//! one async mutex held across that whole sequence.

pub mod collection;
pub mod storage;

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, warn};

use crate::models::patch::PersonalInfoPatch;
use crate::models::resume::{CustomSection, CustomSectionItem};
use crate::models::{EntityId, Entry, Record, Resume, Section};

pub use collection::MutationOutcome;
pub use storage::{DocumentStorage, MemoryStorage, SqliteStorage, StorageError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid reorder: {0}")]
    InvalidReorder(String),
}

/// An immutable view of the document at one revision.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Starts at 0 for the loaded document and grows by one per applied mutation.
    pub revision: u64,
    pub resume: Arc<Resume>,
}

/// Result of one mutation: whether it found its target, what it produced and
/// the document as it stood right after it.
#[derive(Debug, Clone)]
pub struct Committed<T> {
    pub outcome: MutationOutcome,
    pub value: T,
    pub snapshot: Snapshot,
}

pub struct ResumeStore {
    storage: Arc<dyn DocumentStorage>,
    key: String,
    write_lock: Mutex<()>,
    changes: watch::Sender<Snapshot>,
}

impl ResumeStore {
    /// Loads the document stored under `key`, or the default document when the
    /// key is absent or its value cannot be deserialized.
    pub async fn load(
        storage: Arc<dyn DocumentStorage>,
        key: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let key = key.into();
        let resume = match storage.read(&key).await? {
            None => {
                info!("No stored resume under '{key}', starting from the default document");
                Resume::default()
            }
            Some(raw) => match serde_json::from_str::<Resume>(&raw) {
                Ok(resume) => {
                    info!("Loaded stored resume from '{key}'");
                    resume
                }
                Err(e) => {
                    warn!("Stored resume under '{key}' is unreadable ({e}), using the default document");
                    Resume::default()
                }
            },
        };

        let (changes, _) = watch::channel(Snapshot {
            revision: 0,
            resume: Arc::new(resume),
        });

        Ok(Self {
            storage,
            key,
            write_lock: Mutex::new(()),
            changes,
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        self.changes.borrow().clone()
    }

    /// Receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.changes.subscribe()
    }

    /// Looks up an entry in the current snapshot.
    pub fn find<S: Section>(&self, id: &EntityId) -> Option<Entry<S>> {
        let snapshot = self.snapshot();
        S::entries(&snapshot.resume)
            .iter()
            .find(|e| &e.id == id)
            .cloned()
    }

    // ── Section families ───────────────────────────────────────────────────

    pub async fn add<S: Section>(&self, draft: S::Draft) -> Result<Committed<EntityId>, StoreError> {
        self.commit("add", S::KIND.path_segment(), |resume| {
            let id = collection::append(S::entries_mut(resume), draft);
            Ok((MutationOutcome::Applied, id))
        })
        .await
    }

    pub async fn update<S: Section>(
        &self,
        id: &EntityId,
        patch: S::Patch,
    ) -> Result<Committed<()>, StoreError> {
        self.commit("update", S::KIND.path_segment(), |resume| {
            Ok((collection::patch(S::entries_mut(resume), id, patch), ()))
        })
        .await
    }

    pub async fn remove<S: Section>(&self, id: &EntityId) -> Result<Committed<()>, StoreError> {
        self.commit("remove", S::KIND.path_segment(), |resume| {
            Ok((collection::remove(S::entries_mut(resume), id), ()))
        })
        .await
    }

    /// Moves the section's entries into the order of `order`. Fields are never
    /// touched; a custom section keeps its items as stored.
    pub async fn reorder<S: Section>(&self, order: &[EntityId]) -> Result<Committed<()>, StoreError> {
        self.commit("reorder", S::KIND.path_segment(), |resume| {
            collection::reorder(S::entries_mut(resume), order)?;
            Ok((MutationOutcome::Applied, ()))
        })
        .await
    }

    // ── Custom section items ───────────────────────────────────────────────

    /// Adds an item to a custom section. `None` when the section does not exist.
    pub async fn add_item(
        &self,
        section_id: &EntityId,
        draft: <CustomSectionItem as Record>::Draft,
    ) -> Result<Committed<Option<EntityId>>, StoreError> {
        self.commit("add_item", "custom-sections", |resume| {
            Ok(match find_section(resume, section_id) {
                Some(section) => (
                    MutationOutcome::Applied,
                    Some(collection::append(&mut section.items, draft)),
                ),
                None => (MutationOutcome::NotFound, None),
            })
        })
        .await
    }

    pub async fn update_item(
        &self,
        section_id: &EntityId,
        item_id: &EntityId,
        patch: <CustomSectionItem as Record>::Patch,
    ) -> Result<Committed<()>, StoreError> {
        self.commit("update_item", "custom-sections", |resume| {
            let outcome = match find_section(resume, section_id) {
                Some(section) => collection::patch(&mut section.items, item_id, patch),
                None => MutationOutcome::NotFound,
            };
            Ok((outcome, ()))
        })
        .await
    }

    pub async fn remove_item(
        &self,
        section_id: &EntityId,
        item_id: &EntityId,
    ) -> Result<Committed<()>, StoreError> {
        self.commit("remove_item", "custom-sections", |resume| {
            let outcome = match find_section(resume, section_id) {
                Some(section) => collection::remove(&mut section.items, item_id),
                None => MutationOutcome::NotFound,
            };
            Ok((outcome, ()))
        })
        .await
    }

    pub async fn reorder_items(
        &self,
        section_id: &EntityId,
        order: &[EntityId],
    ) -> Result<Committed<()>, StoreError> {
        self.commit("reorder_items", "custom-sections", |resume| {
            let outcome = match find_section(resume, section_id) {
                Some(section) => {
                    collection::reorder(&mut section.items, order)?;
                    MutationOutcome::Applied
                }
                None => MutationOutcome::NotFound,
            };
            Ok((outcome, ()))
        })
        .await
    }

    // ── Singletons ─────────────────────────────────────────────────────────

    pub async fn update_personal_info(
        &self,
        patch: PersonalInfoPatch,
    ) -> Result<Committed<()>, StoreError> {
        self.commit("update", "personal", |resume| {
            resume.personal.apply(patch);
            Ok((MutationOutcome::Applied, ()))
        })
        .await
    }

    /// Replaces the template selector. Unknown ids are stored as given; the
    /// projection dispatcher falls back to the default renderer.
    pub async fn set_selected_template(
        &self,
        template_id: impl Into<String>,
    ) -> Result<Committed<()>, StoreError> {
        let template_id = template_id.into();
        self.commit("set", "selected_template", |resume| {
            resume.selected_template = template_id;
            Ok((MutationOutcome::Applied, ()))
        })
        .await
    }

    // ── Internals ──────────────────────────────────────────────────────────

    /// Applies `mutate` to a copy of the current document. Applied changes are
    /// persisted and then published; `NotFound` leaves everything untouched.
    /// The returned snapshot is the one current when the lock was released.
    async fn commit<T>(
        &self,
        op: &'static str,
        target: &'static str,
        mutate: impl FnOnce(&mut Resume) -> Result<(MutationOutcome, T), StoreError>,
    ) -> Result<Committed<T>, StoreError> {
        let _guard = self.write_lock.lock().await;

        let current = self.snapshot();
        let mut next = (*current.resume).clone();
        let (outcome, value) = mutate(&mut next)?;

        if outcome == MutationOutcome::NotFound {
            debug!("{op} on {target}: target not found, document unchanged");
            return Ok(Committed {
                outcome,
                value,
                snapshot: current,
            });
        }

        let serialized = serde_json::to_string(&next)?;
        self.storage.write(&self.key, &serialized).await?;

        let snapshot = Snapshot {
            revision: current.revision + 1,
            resume: Arc::new(next),
        };
        self.changes.send_replace(snapshot.clone());
        debug!("{op} on {target}: committed revision {}", snapshot.revision);

        Ok(Committed {
            outcome,
            value,
            snapshot,
        })
    }
}

fn find_section<'a>(
    resume: &'a mut Resume,
    section_id: &EntityId,
) -> Option<&'a mut CustomSection> {
    resume
        .custom_sections
        .iter_mut()
        .find(|s| &s.id == section_id)
        .map(|s| &mut s.fields)
}
