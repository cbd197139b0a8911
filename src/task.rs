//! Task model and store for tdl.
//!
//! The store owns the ordered in-memory task list and mirrors it to
//! `tasks.json` on every mutation. The wire format uses camelCase keys and
//! epoch-millisecond timestamps so older `tasks.json` exports import cleanly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::{Error, Result};
use crate::storage::Storage;

/// A single to-do item with an optional one-shot reminder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique id, assigned at creation, never reused.
    pub id: String,
    pub text: String,
    pub done: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// Reminder deadline; `None` means no reminder.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub remind_at: Option<DateTime<Utc>>,
    /// True once a notification fired for the current `remind_at`.
    pub notified: bool,
}

impl Task {
    /// True when the reminder is due and has not fired yet.
    pub fn reminder_due(&self, now: DateTime<Utc>) -> bool {
        match self.remind_at {
            Some(at) => !self.notified && at <= now,
            None => false,
        }
    }
}

/// Imported task record with every field optional.
///
/// Missing fields are filled with defaults during [`TaskStore::replace_all`],
/// so partial or hand-edited export files still import.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedTask {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub remind_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notified: bool,
}

/// List filter applied when rendering tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.done,
            Filter::Completed => task.done,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }
}

impl std::str::FromStr for Filter {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            other => Err(Error::InvalidArgument(format!(
                "unknown filter '{other}' (expected all|active|completed)"
            ))),
        }
    }
}

fn new_task_id() -> String {
    Ulid::new().to_string()
}

/// The authoritative task collection.
///
/// Holds the ordered list in memory and persists the full list to durable
/// storage synchronously before any mutating call returns. Operations that
/// change nothing (empty text, unknown id) skip the write entirely.
#[derive(Debug)]
pub struct TaskStore {
    storage: Storage,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Load the store from durable storage; a missing file yields an empty list.
    pub fn load(storage: Storage) -> Result<Self> {
        let tasks = storage.read_tasks()?;
        Ok(Self { storage, tasks })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Lazy view of tasks matching the filter; restartable by calling again.
    pub fn filter(&self, filter: Filter) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |task| filter.matches(task))
    }

    /// Append a new task. Returns `None` without persisting when `text`
    /// trims empty.
    pub fn add(
        &mut self,
        text: &str,
        remind_at: Option<DateTime<Utc>>,
    ) -> Result<Option<&Task>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let task = Task {
            id: new_task_id(),
            text: text.to_string(),
            done: false,
            created_at: Utc::now(),
            remind_at,
            notified: false,
        };
        self.tasks.push(task);
        self.persist()?;
        Ok(self.tasks.last())
    }

    /// Flip the completion flag. Returns `None` without persisting when the
    /// id is unknown.
    pub fn toggle(&mut self, id: &str) -> Result<Option<&Task>> {
        let Some(idx) = self.index_of(id) else {
            return Ok(None);
        };
        self.tasks[idx].done = !self.tasks[idx].done;
        self.persist()?;
        Ok(Some(&self.tasks[idx]))
    }

    /// Update text and reminder time.
    ///
    /// `notified` is force-reset even when `remind_at` is unchanged, so an
    /// edited task always re-arms. Empty text or an unknown id is a silent
    /// no-op with no persistence write.
    pub fn edit(
        &mut self,
        id: &str,
        new_text: &str,
        new_remind_at: Option<DateTime<Utc>>,
    ) -> Result<Option<&Task>> {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Ok(None);
        }
        let Some(idx) = self.index_of(id) else {
            return Ok(None);
        };

        let task = &mut self.tasks[idx];
        task.text = new_text.to_string();
        task.remind_at = new_remind_at;
        task.notified = false;
        self.persist()?;
        Ok(Some(&self.tasks[idx]))
    }

    /// Remove a task. Returns `None` without persisting when the id is unknown.
    pub fn remove(&mut self, id: &str) -> Result<Option<Task>> {
        let Some(idx) = self.index_of(id) else {
            return Ok(None);
        };
        let removed = self.tasks.remove(idx);
        self.persist()?;
        Ok(Some(removed))
    }

    /// Empty the store. The caller is expected to confirm with the user first.
    pub fn clear(&mut self) -> Result<usize> {
        let removed = self.tasks.len();
        self.tasks.clear();
        self.persist()?;
        Ok(removed)
    }

    /// Normalize imported records and replace the store atomically.
    ///
    /// Records missing an id get a fresh one; duplicate ids also get a fresh
    /// one so the uniqueness invariant holds after import.
    pub fn replace_all(&mut self, imported: Vec<ImportedTask>) -> Result<usize> {
        let now = Utc::now();
        let mut seen = std::collections::HashSet::new();
        let mut tasks = Vec::with_capacity(imported.len());

        for record in imported {
            let id = match record.id {
                Some(id) if !id.trim().is_empty() && seen.insert(id.clone()) => id,
                _ => {
                    let fresh = new_task_id();
                    seen.insert(fresh.clone());
                    fresh
                }
            };
            tasks.push(Task {
                id,
                text: record.text,
                done: record.done,
                created_at: record.created_at.unwrap_or(now),
                remind_at: record.remind_at,
                notified: record.notified,
            });
        }

        self.tasks = tasks;
        self.persist()?;
        Ok(self.tasks.len())
    }

    /// Serialize the current list in the export format (pretty JSON array).
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.tasks)?)
    }

    /// Write the full list to durable storage.
    pub fn persist(&self) -> Result<()> {
        self.storage.write_tasks(&self.tasks)
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut [Task] {
        &mut self.tasks
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use tempfile::tempdir;

    fn new_store() -> (tempfile::TempDir, TaskStore) {
        let dir = tempdir().expect("tempdir");
        let storage = Storage::new(dir.path().to_path_buf());
        let store = TaskStore::load(storage).expect("load");
        (dir, store)
    }

    #[test]
    fn add_creates_task_with_defaults() {
        let (_dir, mut store) = new_store();
        let id = store
            .add("Buy milk", None)
            .expect("add")
            .expect("task")
            .id
            .clone();

        let task = store.get(&id).expect("task");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.done);
        assert!(!task.notified);
        assert!(task.remind_at.is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn add_empty_text_is_a_noop() {
        let (dir, mut store) = new_store();
        assert!(store.add("", None).expect("add").is_none());
        assert!(store.add("   ", None).expect("add").is_none());
        assert!(store.is_empty());
        // No persistence write happened either.
        assert!(!dir.path().join("tasks.json").exists());
    }

    #[test]
    fn add_trims_text() {
        let (_dir, mut store) = new_store();
        let task = store.add("  padded  ", None).expect("add").expect("task");
        assert_eq!(task.text, "padded");
    }

    #[test]
    fn toggle_flips_done_and_ignores_unknown_ids() {
        let (_dir, mut store) = new_store();
        let id = store.add("x", None).expect("add").expect("task").id.clone();

        assert!(store.toggle(&id).expect("toggle").expect("task").done);
        assert!(!store.toggle(&id).expect("toggle").expect("task").done);
        assert!(store.toggle("missing").expect("toggle").is_none());
    }

    #[test]
    fn edit_updates_text_and_resets_notified() {
        let (_dir, mut store) = new_store();
        let remind = Utc::now() + Duration::hours(1);
        let id = store
            .add("old", Some(remind))
            .expect("add")
            .expect("task")
            .id
            .clone();
        store.tasks_mut()[0].notified = true;

        // Same remind_at, notified still resets.
        let task = store
            .edit(&id, "new", Some(remind))
            .expect("edit")
            .expect("task");
        assert_eq!(task.text, "new");
        assert_eq!(task.remind_at, Some(remind));
        assert!(!task.notified);
    }

    #[test]
    fn edit_empty_text_is_a_noop() {
        let (_dir, mut store) = new_store();
        let id = store.add("keep", None).expect("add").expect("task").id.clone();
        assert!(store.edit(&id, "  ", None).expect("edit").is_none());
        assert_eq!(store.get(&id).expect("task").text, "keep");
    }

    #[test]
    fn edit_can_clear_reminder() {
        let (_dir, mut store) = new_store();
        let id = store
            .add("x", Some(Utc::now()))
            .expect("add")
            .expect("task")
            .id
            .clone();
        let task = store.edit(&id, "x", None).expect("edit").expect("task");
        assert!(task.remind_at.is_none());
        assert!(!task.notified);
    }

    #[test]
    fn remove_then_add_never_reuses_an_id() {
        let (_dir, mut store) = new_store();
        let first = store.add("one", None).expect("add").expect("task").id.clone();
        store.remove(&first).expect("remove").expect("removed");
        let second = store.add("two", None).expect("add").expect("task").id.clone();
        assert_ne!(first, second);
        assert!(store.remove("missing").expect("remove").is_none());
    }

    #[test]
    fn clear_empties_the_store() {
        let (_dir, mut store) = new_store();
        store.add("a", None).expect("add");
        store.add("b", None).expect("add");
        assert_eq!(store.clear().expect("clear"), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn filter_partitions_by_done() {
        let (_dir, mut store) = new_store();
        let id = store
            .add("Buy milk", None)
            .expect("add")
            .expect("task")
            .id
            .clone();
        store.toggle(&id).expect("toggle");

        assert_eq!(store.filter(Filter::Active).count(), 0);
        assert_eq!(store.filter(Filter::Completed).count(), 1);
        assert_eq!(store.filter(Filter::All).count(), 1);
        // Restartable: a second pass sees the same view.
        assert_eq!(store.filter(Filter::Completed).count(), 1);
    }

    #[test]
    fn replace_all_fills_missing_fields() {
        let (_dir, mut store) = new_store();
        let before = Utc::now();
        let imported: Vec<ImportedTask> =
            serde_json::from_str(r#"[{"text":"X"}]"#).expect("parse");
        assert_eq!(store.replace_all(imported).expect("replace"), 1);

        let task = &store.tasks()[0];
        assert!(!task.id.is_empty());
        assert_eq!(task.text, "X");
        assert!(!task.done);
        assert!(!task.notified);
        assert!(task.remind_at.is_none());
        assert!(task.created_at >= before - Duration::seconds(1));
    }

    #[test]
    fn replace_all_regenerates_duplicate_ids() {
        let (_dir, mut store) = new_store();
        let imported: Vec<ImportedTask> = serde_json::from_str(
            r#"[{"id":"dup","text":"a"},{"id":"dup","text":"b"}]"#,
        )
        .expect("parse");
        store.replace_all(imported).expect("replace");

        let ids: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids[0], "dup");
        assert_ne!(ids[1], "dup");
    }

    #[test]
    fn export_import_roundtrip_is_equivalent() {
        let (_dir, mut store) = new_store();
        let remind = Utc::now() + Duration::minutes(30);
        store.add("first", Some(remind)).expect("add");
        store.add("second", None).expect("add");
        let exported = store.export_json().expect("export");

        let (_dir2, mut other) = new_store();
        let imported: Vec<ImportedTask> =
            serde_json::from_str(&exported).expect("parse");
        other.replace_all(imported).expect("replace");

        assert_eq!(other.len(), 2);
        for (a, b) in store.tasks().iter().zip(other.tasks()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.text, b.text);
            assert_eq!(a.done, b.done);
            // Millisecond wire precision.
            assert_eq!(
                a.remind_at.map(|t| t.timestamp_millis()),
                b.remind_at.map(|t| t.timestamp_millis())
            );
        }
    }

    #[test]
    fn wire_format_uses_camel_case_and_millis() {
        let (_dir, mut store) = new_store();
        store.add("x", Some(Utc::now())).expect("add");
        let json = store.export_json().expect("export");
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"remindAt\""));
        assert!(json.contains("\"notified\""));
    }

    #[test]
    fn store_reloads_persisted_tasks() {
        let dir = tempdir().expect("tempdir");
        let storage = Storage::new(dir.path().to_path_buf());
        let mut store = TaskStore::load(storage.clone()).expect("load");
        store.add("persisted", None).expect("add");

        let reloaded = TaskStore::load(storage).expect("reload");
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.tasks()[0].text, "persisted");
    }
}
