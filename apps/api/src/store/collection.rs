//! Operations over one ordered collection of entries.
//!
//! These are the reducers behind every `add`/`update`/`remove`/`reorder`
//! family in the store; they work the same for top-level sections and for
//! the items nested inside a custom section.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{EntityId, Entry, Record};
use crate::store::StoreError;

/// Whether a mutation found its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationOutcome {
    Applied,
    NotFound,
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }
}

/// Appends a new entry built from `draft` and returns its fresh id.
pub fn append<R: Record>(entries: &mut Vec<Entry<R>>, draft: R::Draft) -> EntityId {
    let id = EntityId::generate();
    entries.push(Entry::new(id.clone(), R::from_draft(draft)));
    id
}

/// Merges `patch` into the entry with `id`, keeping its position.
pub fn patch<R: Record>(entries: &mut [Entry<R>], id: &EntityId, patch: R::Patch) -> MutationOutcome {
    match entries.iter_mut().find(|e| &e.id == id) {
        Some(entry) => {
            entry.fields.apply(patch);
            MutationOutcome::Applied
        }
        None => MutationOutcome::NotFound,
    }
}

/// Drops the entry with `id`.
pub fn remove<R>(entries: &mut Vec<Entry<R>>, id: &EntityId) -> MutationOutcome {
    let before = entries.len();
    entries.retain(|e| &e.id != id);
    if entries.len() < before {
        MutationOutcome::Applied
    } else {
        MutationOutcome::NotFound
    }
}

/// Rearranges the stored entries into the order given by `order`, which must
/// name every current id exactly once. Only positions change; the stored
/// fields are kept as they are.
pub fn reorder<R>(entries: &mut Vec<Entry<R>>, order: &[EntityId]) -> Result<(), StoreError> {
    check_permutation(entries, order)?;
    let mut by_id: HashMap<EntityId, Entry<R>> =
        entries.drain(..).map(|e| (e.id.clone(), e)).collect();
    *entries = order.iter().filter_map(|id| by_id.remove(id)).collect();
    Ok(())
}

fn check_permutation<R>(current: &[Entry<R>], order: &[EntityId]) -> Result<(), StoreError> {
    if current.len() != order.len() {
        return Err(StoreError::InvalidReorder(format!(
            "expected {} entries, got {}",
            current.len(),
            order.len()
        )));
    }

    let known: HashSet<&EntityId> = current.iter().map(|e| &e.id).collect();
    let mut seen: HashSet<&EntityId> = HashSet::with_capacity(order.len());
    for id in order {
        if !known.contains(id) {
            return Err(StoreError::InvalidReorder(format!("unknown entry id '{id}'")));
        }
        if !seen.insert(id) {
            return Err(StoreError::InvalidReorder(format!(
                "entry id '{id}' appears more than once"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::patch::SkillPatch;
    use crate::models::resume::Skill;

    fn skills(names: &[&str]) -> Vec<Entry<Skill>> {
        let mut entries = Vec::new();
        for name in names {
            append(
                &mut entries,
                Skill {
                    name: name.to_string(),
                    level: 3,
                },
            );
        }
        entries
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let entries = skills(&["Rust", "Go", "SQL"]);
        let names: Vec<_> = entries.iter().map(|e| e.fields.name.as_str()).collect();
        assert_eq!(names, vec!["Rust", "Go", "SQL"]);
    }

    #[test]
    fn test_patch_unknown_id_is_not_found() {
        let mut entries = skills(&["Rust"]);
        let before = entries.clone();
        let outcome = patch(
            &mut entries,
            &EntityId::from("missing"),
            SkillPatch {
                level: Some(5),
                ..Default::default()
            },
        );
        assert_eq!(outcome, MutationOutcome::NotFound);
        assert_eq!(entries, before);
    }

    #[test]
    fn test_patch_keeps_position() {
        let mut entries = skills(&["Rust", "Go", "SQL"]);
        let id = entries[1].id.clone();
        let outcome = patch(
            &mut entries,
            &id,
            SkillPatch {
                name: Some("Golang".into()),
                ..Default::default()
            },
        );
        assert!(outcome.is_applied());
        assert_eq!(entries[1].id, id);
        assert_eq!(entries[1].fields.name, "Golang");
        assert_eq!(entries[1].fields.level, 3);
    }

    #[test]
    fn test_remove_drops_only_matching_entry() {
        let mut entries = skills(&["Rust", "Go"]);
        let id = entries[0].id.clone();
        assert!(remove(&mut entries, &id).is_applied());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].fields.name, "Go");
        assert_eq!(remove(&mut entries, &id), MutationOutcome::NotFound);
    }

    fn ids(entries: &[Entry<Skill>]) -> Vec<EntityId> {
        entries.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_reorder_accepts_permutation() {
        let mut entries = skills(&["React", "Go"]);
        let reversed: Vec<_> = entries.iter().rev().cloned().collect();
        reorder(&mut entries, &ids(&reversed)).unwrap();
        assert_eq!(entries, reversed);
    }

    #[test]
    fn test_reorder_keeps_stored_fields() {
        let mut entries = skills(&["React", "Go"]);
        let order = vec![entries[1].id.clone(), entries[0].id.clone()];
        reorder(&mut entries, &order).unwrap();
        assert_eq!(entries[0].fields.name, "Go");
        assert_eq!(entries[1].fields.name, "React");
        assert_eq!(entries[1].fields.level, 3);
    }

    #[test]
    fn test_reorder_rejects_missing_entry() {
        let mut entries = skills(&["React", "Go"]);
        let before = entries.clone();
        let err = reorder(&mut entries, &ids(&before[..1])).unwrap_err();
        assert!(matches!(err, StoreError::InvalidReorder(_)));
        assert_eq!(entries, before);
    }

    #[test]
    fn test_reorder_rejects_duplicates() {
        let mut entries = skills(&["React", "Go"]);
        let before = entries.clone();
        let dup = vec![entries[0].id.clone(), entries[0].id.clone()];
        assert!(matches!(
            reorder(&mut entries, &dup),
            Err(StoreError::InvalidReorder(_))
        ));
        assert_eq!(entries, before);
    }

    #[test]
    fn test_reorder_rejects_foreign_id() {
        let mut entries = skills(&["React"]);
        let foreign = skills(&["Elm"]);
        assert!(matches!(
            reorder(&mut entries, &ids(&foreign)),
            Err(StoreError::InvalidReorder(_))
        ));
    }
}
