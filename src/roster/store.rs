//! Teacher store - durable roster of reusable pay/identity profiles
//!
//! The whole roster lives in one JSON file holding an array of records.
//! Reads are fail-soft: a missing, unreadable, or corrupt file behaves as an
//! empty roster so a damaged cache never blocks document generation. Writes
//! persist the full collection synchronously and propagate failures.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

use crate::config;

/// Errors raised when persisting the roster. Read-side problems are never
/// surfaced; see [`TeacherStore::list`].
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to create roster directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write roster file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize roster: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A stored teacher profile
///
/// Field names on disk are camelCase to match the layout
/// `{ id, name, employeeId?, designation?, basicPay?, ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,

    pub name: String,

    #[serde(rename = "employeeId", skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,

    #[serde(rename = "basicPay", skip_serializing_if = "Option::is_none")]
    pub basic_pay: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hra: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowances: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deductions: Option<f64>,
}

/// A teacher profile before an identifier has been assigned
#[derive(Debug, Clone, Default)]
pub struct TeacherInput {
    pub name: String,
    pub employee_id: Option<String>,
    pub designation: Option<String>,
    pub basic_pay: Option<f64>,
    pub hra: Option<f64>,
    pub allowances: Option<f64>,
    pub deductions: Option<f64>,
}

impl TeacherInput {
    fn into_teacher(self, id: String) -> Teacher {
        Teacher {
            id,
            name: self.name,
            employee_id: self.employee_id,
            designation: self.designation,
            basic_pay: self.basic_pay,
            hra: self.hra,
            allowances: self.allowances,
            deductions: self.deductions,
        }
    }
}

/// The teacher store, bound to one roster file
#[derive(Debug)]
pub struct TeacherStore {
    path: PathBuf,
}

impl TeacherStore {
    /// Open the store at the platform default location
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::at(config::roster_path()?))
    }

    /// Open the store at an explicit path
    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored records in persisted order
    ///
    /// Returns an empty roster when the file is missing, unreadable, or not
    /// valid JSON. Corruption is deliberately not an error here.
    pub fn list(&self) -> Vec<Teacher> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Look up one record by identifier
    pub fn get(&self, id: &str) -> Option<Teacher> {
        self.list().into_iter().find(|t| t.id == id)
    }

    /// Save a profile, assigning a fresh identifier unless one is supplied
    ///
    /// A record that shares an identifier with a stored one replaces it in
    /// place, keeping its position; otherwise the record is appended. The
    /// full collection is written back synchronously. Returns the persisted
    /// record including its identifier.
    pub fn save(&self, input: TeacherInput, id: Option<&str>) -> Result<Teacher, RosterError> {
        let mut list = self.list();
        let id = match id {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => Uuid::new_v4().to_string(),
        };

        let record = input.into_teacher(id);
        match list.iter_mut().find(|t| t.id == record.id) {
            Some(existing) => *existing = record.clone(),
            None => list.push(record.clone()),
        }

        self.write(&list)?;
        Ok(record)
    }

    /// Remove a record by identifier; removing an absent id is a no-op
    pub fn delete(&self, id: &str) -> Result<(), RosterError> {
        let mut list = self.list();
        list.retain(|t| t.id != id);
        self.write(&list)
    }

    fn write(&self, list: &[Teacher]) -> Result<(), RosterError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| RosterError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(list)?;
        fs::write(&self.path, content).map_err(|source| RosterError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> TeacherStore {
        TeacherStore::at(dir.path().join("teachers-v1.json"))
    }

    fn input(name: &str) -> TeacherInput {
        TeacherInput {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_file_lists_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store(&dir).list().is_empty());
    }

    #[test]
    fn test_corrupt_file_lists_empty() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::write(store.path(), "not json at all {{{").unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_save_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let saved = store
            .save(
                TeacherInput {
                    name: "A. Rao".to_string(),
                    basic_pay: Some(30000.0),
                    hra: Some(5000.0),
                    allowances: Some(2000.0),
                    deductions: Some(1000.0),
                    ..Default::default()
                },
                None,
            )
            .unwrap();

        assert!(!saved.id.is_empty());
        let fetched = store.get(&saved.id).unwrap();
        assert_eq!(fetched, saved);

        let list = store.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "A. Rao");
    }

    #[test]
    fn test_save_with_existing_id_replaces_in_place() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let first = store.save(input("First"), None).unwrap();
        let second = store.save(input("Second"), None).unwrap();

        let mut updated = input("First, Updated");
        updated.designation = Some("Senior Teacher".to_string());
        store.save(updated, Some(&first.id)).unwrap();

        let list = store.list();
        assert_eq!(list.len(), 2);
        // Position preserved
        assert_eq!(list[0].id, first.id);
        assert_eq!(list[0].name, "First, Updated");
        assert_eq!(list[0].designation.as_deref(), Some("Senior Teacher"));
        assert_eq!(list[1].id, second.id);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        for name in ["C", "A", "B"] {
            store.save(input(name), None).unwrap();
        }

        let names: Vec<_> = store.list().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let saved = store.save(input("Gone Soon"), None).unwrap();
        store.delete(&saved.id).unwrap();
        assert!(store.get(&saved.id).is_none());

        // Deleting again is a no-op, not an error
        store.delete(&saved.id).unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_on_disk_layout_uses_camel_case_and_omits_absent_fields() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);

        let mut teacher = input("Layout Check");
        teacher.employee_id = Some("EMP-7".to_string());
        teacher.basic_pay = Some(1000.0);
        store.save(teacher, None).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("\"employeeId\""));
        assert!(content.contains("\"basicPay\""));
        assert!(!content.contains("\"designation\""));
        assert!(!content.contains("\"hra\""));
    }
}
