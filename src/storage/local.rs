// Local project store - one JSON document holding every project by id

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use uuid::Uuid;

use crate::model::Project;
use crate::storage::{ProjectStore, StoreError};

/// File-backed store keeping an id -> project map in a single JSON file.
///
/// Reading a missing or malformed file yields an empty map rather than an
/// error, so a corrupted store degrades to "no projects" instead of blocking
/// the application.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform data directory (`<data_dir>/tickroll/projects.json`).
    pub fn default_location() -> Result<Self, StoreError> {
        let dir = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Self::new(dir.join("tickroll").join("projects.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> BTreeMap<String, Project> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => return BTreeMap::new(),
        };
        match serde_json::from_str(&text) {
            Ok(projects) => projects,
            Err(err) => {
                warn!("project store {} is malformed ({}), treating as empty", self.path.display(), err);
                BTreeMap::new()
            }
        }
    }

    fn write_all(&self, projects: &BTreeMap<String, Project>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string(projects)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl ProjectStore for JsonFileStore {
    fn list(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.read_all().into_values().collect())
    }

    fn load(&self, id: &str) -> Result<Project, StoreError> {
        self.read_all()
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn create(&mut self) -> Result<Project, StoreError> {
        let project = Project::new(Uuid::new_v4().simple().to_string());
        let mut projects = self.read_all();
        projects.insert(project.id.clone(), project.clone());
        self.write_all(&projects)?;
        info!("created project {}", project.id);
        Ok(project)
    }

    fn save(&mut self, project: &Project) -> Result<(), StoreError> {
        let mut projects = self.read_all();
        projects.insert(project.id.clone(), project.clone());
        self.write_all(&projects)
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let mut projects = self.read_all();
        projects.remove(id);
        self.write_all(&projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("projects.json"));
        (dir, store)
    }

    #[test]
    fn test_create_load_round_trip() {
        let (_dir, mut store) = temp_store();

        let project = store.create().unwrap();
        assert!(!project.id.is_empty());
        assert_eq!(project.bpm, 120.0);
        assert!(project.tracks.is_empty());

        let loaded = store.load(&project.id).unwrap();
        assert_eq!(loaded, project);
    }

    #[test]
    fn test_save_overwrites_by_id() {
        let (_dir, mut store) = temp_store();
        let project = store.create().unwrap();

        let renamed = project.with_name("Renamed");
        store.save(&renamed).unwrap();

        assert_eq!(store.load(&project.id).unwrap().name, "Renamed");
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_and_not_found() {
        let (_dir, mut store) = temp_store();
        let project = store.create().unwrap();

        store.delete(&project.id).unwrap();
        assert!(matches!(store.load(&project.id), Err(StoreError::NotFound(_))));
        // Deleting an unknown id is harmless
        store.delete("nope").unwrap();
    }

    #[test]
    fn test_missing_and_malformed_files_read_as_empty() {
        let (dir, mut store) = temp_store();
        assert!(store.list().unwrap().is_empty());

        fs::write(store.path(), "{not json").unwrap();
        assert!(store.list().unwrap().is_empty());

        // The store recovers: a create works on top of the corrupt file
        let project = store.create().unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
        assert_eq!(store.load(&project.id).unwrap().id, project.id);
        drop(dir);
    }

    #[test]
    fn test_projects_persist_across_store_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.json");

        let id = {
            let mut store = JsonFileStore::new(&path);
            store.create().unwrap().id
        };

        let store = JsonFileStore::new(&path);
        assert_eq!(store.load(&id).unwrap().id, id);
    }
}
