// Storage - the persistence collaborator boundary
// The engine never touches the medium directly; it talks to a ProjectStore

pub mod local;

pub use local::JsonFileStore;

use crate::model::Project;

/// Persistence errors. A failed save is surfaced, never fatal: the in-memory
/// project is not rolled back, only the "saved" acknowledgement is withheld.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no project with id {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no usable data directory on this system")]
    NoDataDir,
}

/// The persistence collaborator: a keyed collection of whole projects.
/// Storage medium and layout are the implementation's concern.
pub trait ProjectStore {
    fn list(&self) -> Result<Vec<Project>, StoreError>;
    fn load(&self, id: &str) -> Result<Project, StoreError>;

    /// Create, persist and return a fresh default project (empty tracks,
    /// bpm 120, 4/4) under a new opaque id.
    fn create(&mut self) -> Result<Project, StoreError>;

    fn save(&mut self, project: &Project) -> Result<(), StoreError>;
    fn delete(&mut self, id: &str) -> Result<(), StoreError>;
}
