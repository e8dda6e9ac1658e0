//! # Shared Template Store
//!
//! SQLite persistence for shared template documents. Each record keeps the
//! whole [`TemplateDocument`] as a JSON text column, keyed by a server
//! generated UUID, together with creation and update timestamps.
//!
//! A new connection is opened for every operation, so the store itself is
//! only a path and can be cloned freely into request handlers.

use common::model::shared::SharedTemplate;
use common::model::template::TemplateDocument;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("shared template {0} does not exist")]
    NotFound(String),
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("stored template data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    /// Opens (creating if needed) the database at `path` and ensures the
    /// schema exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        store.connect()?.execute_batch(
            "CREATE TABLE IF NOT EXISTS shared_templates (
                id            TEXT PRIMARY KEY,
                template_data TEXT NOT NULL,
                created_at    TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
                updated_at    TEXT
            );",
        )?;
        Ok(store)
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        Ok(Connection::open(&self.path)?)
    }

    pub fn insert(&self, document: &TemplateDocument) -> Result<SharedTemplate, StoreError> {
        let id = Uuid::new_v4().to_string();
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO shared_templates (id, template_data) VALUES (?1, ?2)",
            params![id, serde_json::to_string(document)?],
        )?;
        fetch_with(&conn, &id)
    }

    pub fn fetch(&self, id: &str) -> Result<SharedTemplate, StoreError> {
        fetch_with(&self.connect()?, id)
    }

    /// Replaces the document stored under `id` and stamps `updated_at`.
    pub fn replace(&self, id: &str, document: &TemplateDocument) -> Result<SharedTemplate, StoreError> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE shared_templates
                SET template_data = ?1, updated_at = CURRENT_TIMESTAMP
              WHERE id = ?2",
            params![serde_json::to_string(document)?, id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id.to_string()));
        }
        fetch_with(&conn, id)
    }

    /// Removes the record. Deleting an id that does not exist is not an error.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.connect()?
            .execute("DELETE FROM shared_templates WHERE id = ?1", params![id])?;
        Ok(())
    }
}

fn fetch_with(conn: &Connection, id: &str) -> Result<SharedTemplate, StoreError> {
    let row = conn
        .query_row(
            "SELECT id, template_data, created_at, updated_at
               FROM shared_templates
              WHERE id = ?1",
            params![id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, Option<String>>(3)?,
                ))
            },
        )
        .optional()?;

    let (id, data, created_at, updated_at) = row.ok_or_else(|| StoreError::NotFound(id.to_string()))?;
    Ok(SharedTemplate {
        id,
        template_data: serde_json::from_str(&data)?,
        created_at,
        updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::iteration::DataIteration;
    use common::model::template::TemplateData;
    use tempfile::TempDir;

    fn store() -> (TempDir, TemplateStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TemplateStore::open(dir.path().join("studio.sqlite")).unwrap();
        (dir, store)
    }

    fn document(name: &str) -> TemplateDocument {
        let mut document = TemplateDocument {
            template: TemplateData::new(name),
            iterations: Vec::new(),
        };
        document.add_iteration();
        document
    }

    #[test]
    fn insert_then_fetch_returns_the_same_document() {
        let (_dir, store) = store();
        let doc = document("Menu");

        let created = store.insert(&doc).unwrap();
        assert!(Uuid::parse_str(&created.id).is_ok());
        assert!(created.created_at.is_some());
        assert_eq!(created.updated_at, None);

        let fetched = store.fetch(&created.id).unwrap();
        assert_eq!(fetched.template_data, doc);
    }

    #[test]
    fn replace_overwrites_and_stamps_update_time() {
        let (_dir, store) = store();
        let created = store.insert(&document("Menu")).unwrap();

        let mut changed = document("Menu v2");
        changed.iterations.push(DataIteration {
            id: "extra".to_string(),
            values: Default::default(),
            duration: 4000,
        });
        let updated = store.replace(&created.id, &changed).unwrap();

        assert_eq!(updated.template_data, changed);
        assert!(updated.updated_at.is_some());
        assert_eq!(store.fetch(&created.id).unwrap().template_data.iterations.len(), 2);
    }

    #[test]
    fn missing_records_are_reported() {
        let (_dir, store) = store();
        assert!(matches!(store.fetch("nope"), Err(StoreError::NotFound(_))));
        assert!(matches!(
            store.replace("nope", &document("x")),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn delete_is_idempotent() {
        let (_dir, store) = store();
        let created = store.insert(&document("Menu")).unwrap();

        store.delete(&created.id).unwrap();
        store.delete(&created.id).unwrap();
        assert!(matches!(store.fetch(&created.id), Err(StoreError::NotFound(_))));
    }
}
