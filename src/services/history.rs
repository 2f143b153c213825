//! History aggregation service
//!
//! Appends change entries to per-device history documents and builds the
//! display-ready view. On the read path every `projectId` reference is
//! resolved against the *current* project record: live projects are embedded
//! as `{name, path, timelapse}`, entries whose project has been deleted are
//! omitted from the view (the stored document is untouched).

use std::collections::HashMap;

use chrono::Utc;

use crate::{
    error::AppResult,
    models::history::{
        AppendHistory, History, HistoryEntry, ProjectRef, ResolvedHistory, ResolvedHistoryEntry,
    },
    models::project::Project,
    repository::Repository,
};

#[derive(Clone)]
pub struct HistoryService {
    repository: Repository,
}

impl HistoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Append entries to a device's history, creating the document on first
    /// use. Missing timestamps default to now. Returns the full document.
    pub async fn append(&self, data: &AppendHistory) -> AppResult<History> {
        let now = Utc::now();
        let new_entries: Vec<HistoryEntry> = data
            .history
            .iter()
            .map(|e| HistoryEntry {
                change: e.change,
                timestamp: e.timestamp.unwrap_or(now),
                description: e.description.clone(),
                user_id: e.user_id,
                project_id: e.project_id,
            })
            .collect();

        match self
            .repository
            .histories
            .get_by_equipment_id(data.equipment_id)
            .await?
        {
            Some(existing) => {
                let mut entries = existing.entries.0.clone();
                entries.extend(new_entries);
                let updated = self
                    .repository
                    .histories
                    .replace_entries(existing.id, &entries)
                    .await?;
                // The row was read just above; a concurrent delete loses
                updated.ok_or_else(|| {
                    crate::error::AppError::Internal(format!(
                        "History document {} vanished during append",
                        existing.id
                    ))
                })
            }
            None => {
                self.repository
                    .histories
                    .create(data.equipment_id, &new_entries)
                    .await
            }
        }
    }

    /// Resolved view of every history document
    pub async fn list_resolved(&self) -> AppResult<Vec<ResolvedHistory>> {
        let histories = self.repository.histories.list().await?;
        let projects = self.project_refs().await?;
        Ok(histories
            .into_iter()
            .map(|h| resolve_document(h, &projects))
            .collect())
    }

    /// Resolved view of one history document
    pub async fn get_resolved(&self, id: i32) -> AppResult<Option<ResolvedHistory>> {
        let history = self.repository.histories.get_by_id(id).await?;
        match history {
            Some(h) => {
                let projects = self.project_refs().await?;
                Ok(Some(resolve_document(h, &projects)))
            }
            None => Ok(None),
        }
    }

    /// Raw replacement of a document's entry list (admin maintenance path)
    pub async fn replace(&self, id: i32, entries: &[HistoryEntry]) -> AppResult<Option<History>> {
        self.repository.histories.replace_entries(id, entries).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<Option<History>> {
        self.repository.histories.delete(id).await
    }

    pub async fn delete_all(&self) -> AppResult<u64> {
        self.repository.histories.delete_all().await
    }

    /// Snapshot of all live projects keyed by id, as embedded references
    async fn project_refs(&self) -> AppResult<HashMap<i32, ProjectRef>> {
        let projects = self.repository.projects.list().await?;
        Ok(projects.iter().map(|p| (p.id, project_ref(p))).collect())
    }
}

fn project_ref(p: &Project) -> ProjectRef {
    ProjectRef {
        name: p.name.clone(),
        path: p.path(),
        timelapse: p.timelapse.as_ref().map(|t| t.0),
    }
}

/// Transform a stored document into its display view using the given
/// project lookup.
pub fn resolve_document(history: History, projects: &HashMap<i32, ProjectRef>) -> ResolvedHistory {
    let entries = resolve_entries(&history.entries.0, projects);
    ResolvedHistory {
        id: history.id,
        equipment_id: history.equipment_id,
        entries,
        crea_date: history.crea_date,
        modif_date: history.modif_date,
    }
}

/// Core resolution rule, applied per entry:
/// - no project reference: pass through
/// - referenced project alive: embed its current fields, drop the raw id
/// - referenced project gone: omit the entry from the view
pub fn resolve_entries(
    entries: &[HistoryEntry],
    projects: &HashMap<i32, ProjectRef>,
) -> Vec<ResolvedHistoryEntry> {
    entries
        .iter()
        .filter_map(|entry| match entry.project_id {
            None => Some(ResolvedHistoryEntry {
                change: entry.change,
                timestamp: entry.timestamp,
                description: entry.description.clone(),
                user_id: entry.user_id,
                project: None,
            }),
            Some(project_id) => projects.get(&project_id).map(|r| ResolvedHistoryEntry {
                change: entry.change,
                timestamp: entry.timestamp,
                description: entry.description.clone(),
                user_id: entry.user_id,
                project: Some(r.clone()),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::HistoryChange;

    fn entry(change: HistoryChange, project_id: Option<i32>) -> HistoryEntry {
        HistoryEntry {
            change,
            timestamp: Utc::now(),
            description: "test".to_string(),
            user_id: None,
            project_id,
        }
    }

    #[test]
    fn test_plain_entries_pass_through() {
        let entries = vec![
            entry(HistoryChange::Created, None),
            entry(HistoryChange::Updated, None),
        ];
        let resolved = resolve_entries(&entries, &HashMap::new());
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].change, HistoryChange::Created);
        assert_eq!(resolved[1].change, HistoryChange::Updated);
        assert!(resolved.iter().all(|e| e.project.is_none()));
    }

    #[test]
    fn test_live_project_is_embedded() {
        let mut projects = HashMap::new();
        projects.insert(
            7,
            ProjectRef {
                name: "Solar Car".to_string(),
                path: "/projects/solar_car".to_string(),
                timelapse: None,
            },
        );
        let entries = vec![entry(HistoryChange::UsedInProject, Some(7))];
        let resolved = resolve_entries(&entries, &projects);
        assert_eq!(resolved.len(), 1);
        let project = resolved[0].project.as_ref().unwrap();
        assert_eq!(project.name, "Solar Car");
        assert_eq!(project.path, "/projects/solar_car");
    }

    #[test]
    fn test_orphaned_entry_is_omitted() {
        let entries = vec![
            entry(HistoryChange::Created, None),
            entry(HistoryChange::UsedInProject, Some(42)),
            entry(HistoryChange::Updated, None),
        ];
        // Project 42 no longer exists
        let resolved = resolve_entries(&entries, &HashMap::new());
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].change, HistoryChange::Created);
        assert_eq!(resolved[1].change, HistoryChange::Updated);
    }

    #[test]
    fn test_order_is_preserved() {
        let mut projects = HashMap::new();
        projects.insert(
            1,
            ProjectRef {
                name: "P".to_string(),
                path: "/projects/p".to_string(),
                timelapse: None,
            },
        );
        let entries = vec![
            entry(HistoryChange::Created, None),
            entry(HistoryChange::UsedInProject, Some(1)),
            entry(HistoryChange::Updated, None),
        ];
        let resolved = resolve_entries(&entries, &projects);
        let changes: Vec<_> = resolved.iter().map(|e| e.change).collect();
        assert_eq!(
            changes,
            vec![
                HistoryChange::Created,
                HistoryChange::UsedInProject,
                HistoryChange::Updated
            ]
        );
    }
}
