//! JSON file model
//!
//! Loads a model's instances from a JSON array on disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{DomainObject, ObjectId};
use crate::domain::ports::{FetchError, ModelDescriptor, ObjectCache};

/// Model descriptor backed by a JSON file (`[{"id": .., "name": ..}, ..]`)
pub struct JsonFileModel {
    name: String,
    path: PathBuf,
    cache: RwLock<HashMap<ObjectId, DomainObject>>,
}

impl JsonFileModel {
    /// Model named after the file stem (`categories.json` -> `categories`)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| "objects".to_string());
        Self::named(name, path)
    }

    pub fn named(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ObjectCache for JsonFileModel {
    fn find_by_id(&self, id: &ObjectId) -> Option<DomainObject> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }
}

#[async_trait]
impl ModelDescriptor for JsonFileModel {
    fn model_name(&self) -> &str {
        &self.name
    }

    async fn find_all(&self) -> Result<Vec<DomainObject>, FetchError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| FetchError::Unavailable {
                model: self.name.clone(),
                message: format!("{}: {}", self.path.display(), e),
            })?;

        let objects: Vec<DomainObject> =
            serde_json::from_str(&content).map_err(|e| FetchError::InvalidPayload {
                model: self.name.clone(),
                message: e.to_string(),
            })?;

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        cache.clear();
        for object in &objects {
            cache.insert(object.id.clone(), object.clone());
        }

        Ok(objects)
    }
}
