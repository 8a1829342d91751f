//! Test doubles for the model and event ports.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use multiselect::{
    DomainObject, DropdownEvent, DropdownEventSink, FetchError, ModelDescriptor, ObjectCache,
    ObjectId,
};
use tokio::sync::oneshot;

type Settlement = Result<Vec<DomainObject>, FetchError>;

/// Settles the pending load of a `DeferredModel`.
pub struct Deferred {
    name: String,
    sender: oneshot::Sender<Settlement>,
}

impl Deferred {
    pub fn resolve(self, objects: Vec<DomainObject>) {
        let _ = self.sender.send(Ok(objects));
    }

    pub fn reject(self, message: &str) {
        let _ = self.sender.send(Err(FetchError::Unavailable {
            model: self.name,
            message: message.to_string(),
        }));
    }
}

/// Model whose `find_all` waits until its `Deferred` is settled.
///
/// Every cache lookup is recorded and answered with `cache_response`.
pub struct DeferredModel {
    name: String,
    pending: Mutex<Option<oneshot::Receiver<Settlement>>>,
    cache_response: Option<DomainObject>,
    find_all_calls: AtomicUsize,
    lookups: Mutex<Vec<ObjectId>>,
}

impl DeferredModel {
    pub fn new(name: &str) -> (Arc<Self>, Deferred) {
        Self::with_cache_response(name, Some(super::cached_object()))
    }

    pub fn with_cache_response(
        name: &str,
        cache_response: Option<DomainObject>,
    ) -> (Arc<Self>, Deferred) {
        let (sender, receiver) = oneshot::channel();
        let model = Arc::new(Self {
            name: name.to_string(),
            pending: Mutex::new(Some(receiver)),
            cache_response,
            find_all_calls: AtomicUsize::new(0),
            lookups: Mutex::new(Vec::new()),
        });
        let deferred = Deferred {
            name: name.to_string(),
            sender,
        };
        (model, deferred)
    }

    pub fn find_all_calls(&self) -> usize {
        self.find_all_calls.load(Ordering::SeqCst)
    }

    pub fn lookups(&self) -> Vec<ObjectId> {
        self.lookups.lock().unwrap().clone()
    }

    /// Wait until the spawned load has reached `find_all`.
    pub async fn wait_for_fetch(&self) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while self.find_all_calls() == 0 {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("find_all was never called");
    }
}

impl ObjectCache for DeferredModel {
    fn find_by_id(&self, id: &ObjectId) -> Option<DomainObject> {
        self.lookups.lock().unwrap().push(id.clone());
        self.cache_response.clone()
    }
}

#[async_trait]
impl ModelDescriptor for DeferredModel {
    fn model_name(&self) -> &str {
        &self.name
    }

    async fn find_all(&self) -> Result<Vec<DomainObject>, FetchError> {
        self.find_all_calls.fetch_add(1, Ordering::SeqCst);
        let receiver = self.pending.lock().unwrap().take();
        match receiver {
            Some(receiver) => receiver.await.unwrap_or_else(|_| {
                Err(FetchError::Unavailable {
                    model: self.name.clone(),
                    message: "deferred dropped".to_string(),
                })
            }),
            None => Err(FetchError::Unavailable {
                model: self.name.clone(),
                message: "deferred already consumed".to_string(),
            }),
        }
    }
}

/// Event sink that records all events
#[derive(Default)]
pub struct RecordingEventSink {
    events: Mutex<Vec<DropdownEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<DropdownEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl DropdownEventSink for RecordingEventSink {
    fn on_event(&self, event: DropdownEvent) {
        self.events.lock().unwrap().push(event);
    }
}
