//! In-memory model
//!
//! Serves a fixed collection and behaves like a client-side model store:
//! a bulk load fills the identity cache with every object it returns.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{DomainObject, ObjectId};
use crate::domain::ports::{FetchError, ModelDescriptor, ObjectCache};

/// Model descriptor over a fixed list of objects
pub struct InMemoryModel {
    name: String,
    objects: Vec<DomainObject>,
    cache: RwLock<HashMap<ObjectId, DomainObject>>,
    failure: Option<String>,
    fetches: AtomicUsize,
}

impl InMemoryModel {
    pub fn new(name: impl Into<String>, objects: Vec<DomainObject>) -> Self {
        Self {
            name: name.into(),
            objects,
            cache: RwLock::new(HashMap::new()),
            failure: None,
            fetches: AtomicUsize::new(0),
        }
    }

    /// A model whose bulk load always fails with `message`
    pub fn failing(name: impl Into<String>, message: impl Into<String>) -> Self {
        let mut model = Self::new(name, Vec::new());
        model.failure = Some(message.into());
        model
    }

    /// Seed the cache without a bulk load
    pub fn with_cached(self, objects: impl IntoIterator<Item = DomainObject>) -> Self {
        {
            let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
            for object in objects {
                cache.insert(object.id.clone(), object);
            }
        }
        self
    }

    /// Number of bulk loads served so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn cached_len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl ObjectCache for InMemoryModel {
    fn find_by_id(&self, id: &ObjectId) -> Option<DomainObject> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }
}

#[async_trait]
impl ModelDescriptor for InMemoryModel {
    fn model_name(&self) -> &str {
        &self.name
    }

    async fn find_all(&self) -> Result<Vec<DomainObject>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.failure {
            return Err(FetchError::Unavailable {
                model: self.name.clone(),
                message: message.clone(),
            });
        }

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        for object in &self.objects {
            cache.insert(object.id.clone(), object.clone());
        }

        Ok(self.objects.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn objects() -> Vec<DomainObject> {
        vec![DomainObject::new(1, "one"), DomainObject::new(2, "two")]
    }

    #[tokio::test]
    async fn find_all_fills_the_cache() {
        let model = InMemoryModel::new("Category", objects());
        assert!(model.find_by_id(&ObjectId::Int(1)).is_none());

        let loaded = model.find_all().await.unwrap();

        assert_eq!(loaded, objects());
        assert_eq!(model.cached_len(), 2);
        assert_eq!(model.find_by_id(&ObjectId::Int(2)), Some(DomainObject::new(2, "two")));
        assert_eq!(model.fetch_count(), 1);
    }

    #[tokio::test]
    async fn failing_model_reports_unavailable() {
        let model = InMemoryModel::failing("Category", "offline");

        let err = model.find_all().await.unwrap_err();

        assert_eq!(
            err,
            FetchError::Unavailable {
                model: "Category".to_string(),
                message: "offline".to_string(),
            }
        );
        assert_eq!(model.fetch_count(), 1);
    }

    #[test]
    fn seeded_cache_answers_without_loading() {
        let model = InMemoryModel::new("Category", Vec::new())
            .with_cached([DomainObject::new("testId", "testName")]);

        assert!(model.find_by_id(&ObjectId::from("testId")).is_some());
        assert_eq!(model.fetch_count(), 0);
    }
}
