//! Multi-select dropdown view-model
//!
//! Holds the authoritative selection `value` and the derived `options` /
//! `selected` lists. Derived state is rebuilt only by explicit calls:
//!
//! - `set_model_constructor` issues a bulk load and rebuilds when it settles
//! - `prepare_options` rebuilds from a collection the caller already has
//! - `refresh_selection` re-checks the last collection against `value`
//!
//! `selected_changed` writes `value` back from the rows the user checked.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::runtime::Handle;

use crate::config::{Config, FetchPolicy};
use crate::domain::entities::{
    unresolved_ids, DomainObject, ObjectId, OptionRecord, SelectionEntry,
};
use crate::domain::ports::{DropdownEvent, DropdownEventSink, ModelDescriptor, NoopEventSink};
use crate::domain::services::{prepare_options, resolve_selection};
use crate::error::{DropdownError, DropdownResult};

use super::loader::{spawn_fetch, FetchContext, FetchHandle};

/// Payload of a user selection change: the full new set of checked rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionChange {
    pub selected: Vec<OptionRecord>,
}

impl SelectionChange {
    pub fn new(selected: Vec<OptionRecord>) -> Self {
        Self { selected }
    }
}

/// Options and selection as published together by one rebuild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsSnapshot {
    pub options: Vec<OptionRecord>,
    pub selected: Vec<OptionRecord>,
}

#[derive(Default)]
struct DropdownState {
    descriptor: Option<Arc<dyn ModelDescriptor>>,
    generation: u64,
    value: Vec<SelectionEntry>,
    snapshot: OptionsSnapshot,
    fetched: Vec<DomainObject>,
}

/// State shared between the dropdown and its in-flight loads.
#[derive(Clone, Default)]
pub(super) struct SharedState(Arc<Mutex<DropdownState>>);

impl SharedState {
    fn lock(&self) -> MutexGuard<'_, DropdownState> {
        // State is only ever replaced wholesale, so a poisoned lock still
        // holds a consistent snapshot.
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Rebuild options and selection from `raw` in one critical section.
    ///
    /// With `required` set, nothing is published unless that generation is
    /// still current; the current generation is returned instead.
    pub(super) fn publish(
        &self,
        raw: Vec<DomainObject>,
        required: Option<u64>,
        events: &dyn DropdownEventSink,
    ) -> Result<(usize, usize), u64> {
        let (stale, counts) = {
            let mut state = self.lock();
            if let Some(generation) = required {
                if state.generation != generation {
                    return Err(state.generation);
                }
            }
            state.rebuild(raw)
        };

        report_stale(stale, events);
        Ok(counts)
    }

    /// Reconcile the last published collection against the current value.
    fn refresh(&self, events: &dyn DropdownEventSink) {
        let (stale, _) = {
            let mut state = self.lock();
            let raw = std::mem::take(&mut state.fetched);
            state.rebuild(raw)
        };

        report_stale(stale, events);
    }
}

impl DropdownState {
    fn rebuild(&mut self, raw: Vec<DomainObject>) -> (Vec<ObjectId>, (usize, usize)) {
        let reconciled = prepare_options(&raw, &self.value);
        self.snapshot = OptionsSnapshot {
            options: reconciled.options,
            selected: reconciled.selected,
        };
        self.fetched = raw;
        let counts = (self.snapshot.options.len(), self.snapshot.selected.len());
        (reconciled.stale, counts)
    }
}

fn report_stale(stale: Vec<ObjectId>, events: &dyn DropdownEventSink) {
    if events.wants_detailed_events() {
        for id in stale {
            events.on_event(DropdownEvent::StaleSelection { id });
        }
    }
}

/// View-model of a multi-select dropdown bound to one model type.
pub struct MultiselectDropdown {
    state: SharedState,
    policy: FetchPolicy,
    events: Arc<dyn DropdownEventSink>,
}

impl Default for MultiselectDropdown {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiselectDropdown {
    /// Create a dropdown with the default fetch policy and no event output
    pub fn new() -> Self {
        Self {
            state: SharedState::default(),
            policy: FetchPolicy::default(),
            events: Arc::new(NoopEventSink),
        }
    }

    /// Create a dropdown configured from `config`
    pub fn from_config(config: &Config, events: Arc<dyn DropdownEventSink>) -> Self {
        Self::new()
            .with_policy(config.fetch.policy)
            .with_event_sink(events)
    }

    pub fn with_policy(mut self, policy: FetchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_event_sink(mut self, events: Arc<dyn DropdownEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn policy(&self) -> FetchPolicy {
        self.policy
    }

    /// Bind the dropdown to a model type and start loading its instances.
    ///
    /// Returns as soon as the load is issued. Options and selection are
    /// rebuilt when it settles; until then they keep their previous
    /// contents. Outside a Tokio runtime nothing is bound and
    /// `DropdownError::NoRuntime` is returned.
    pub fn set_model_constructor(
        &self,
        descriptor: Arc<dyn ModelDescriptor>,
    ) -> DropdownResult<FetchHandle> {
        let runtime = Handle::try_current().map_err(|_| DropdownError::NoRuntime {
            model: descriptor.model_name().to_string(),
        })?;

        let generation = {
            let mut state = self.state.lock();
            state.generation += 1;
            state.descriptor = Some(Arc::clone(&descriptor));
            state.generation
        };

        Ok(spawn_fetch(
            &runtime,
            FetchContext {
                state: self.state.clone(),
                events: Arc::clone(&self.events),
                policy: self.policy,
                descriptor,
                generation,
            },
        ))
    }

    /// The model currently bound, if any
    pub fn model(&self) -> Option<Arc<dyn ModelDescriptor>> {
        self.state.lock().descriptor.clone()
    }

    /// Generation of the most recently issued load (0 before the first)
    pub fn generation(&self) -> u64 {
        self.state.lock().generation
    }

    /// Rebuild options and selection from an already loaded collection.
    pub fn prepare_options(&self, raw: Vec<DomainObject>) {
        // Unconditional: the caller hands over the collection directly.
        let _ = self.state.publish(raw, None, self.events.as_ref());
    }

    /// Re-run reconciliation against the last loaded collection.
    ///
    /// Use after `set_value` when the checked flags should follow the new
    /// value without loading again.
    pub fn refresh_selection(&self) {
        self.state.refresh(self.events.as_ref());
    }

    /// Replace the selection value. Options are not rebuilt.
    pub fn set_value(&self, value: Vec<SelectionEntry>) {
        self.state.lock().value = value;
    }

    /// Replace the selection value with fully resolved objects.
    pub fn set_value_objects(&self, objects: Vec<DomainObject>) {
        self.set_value(objects.into_iter().map(SelectionEntry::Resolved).collect());
    }

    pub fn value(&self) -> Vec<SelectionEntry> {
        self.state.lock().value.clone()
    }

    /// The value as plain objects, refusing if any entry is a cache miss.
    pub fn value_for_persistence(&self) -> DropdownResult<Vec<DomainObject>> {
        let state = self.state.lock();
        let missing = unresolved_ids(&state.value);
        if !missing.is_empty() {
            return Err(DropdownError::UnresolvedSelection { ids: missing });
        }

        Ok(state
            .value
            .iter()
            .filter_map(|e| e.as_object().cloned())
            .collect())
    }

    pub fn options(&self) -> Vec<OptionRecord> {
        self.state.lock().snapshot.options.clone()
    }

    pub fn selected(&self) -> Vec<OptionRecord> {
        self.state.lock().snapshot.selected.clone()
    }

    /// Options and selection read under a single lock
    pub fn snapshot(&self) -> OptionsSnapshot {
        self.state.lock().snapshot.clone()
    }

    /// Apply a user selection change.
    ///
    /// Each selected row is resolved through the bound model's cache and
    /// the results replace `value`, one entry per row in row order. Rows
    /// the cache cannot resolve become `SelectionEntry::CacheMiss`.
    pub fn selected_changed(&self, change: SelectionChange) -> DropdownResult<()> {
        let descriptor = self.model().ok_or(DropdownError::NoModel)?;

        let value = resolve_selection(&change.selected, descriptor.as_ref());
        let model = descriptor.model_name().to_string();
        let missing: Vec<_> = unresolved_ids(&value);
        let count = value.len();

        self.state.lock().value = value;

        for id in &missing {
            tracing::warn!(model = %model, id = %id, "selected object not in cache");
            if self.events.wants_detailed_events() {
                self.events.on_event(DropdownEvent::CacheMiss {
                    model: model.clone(),
                    id: id.clone(),
                });
            }
        }
        self.events.on_event(DropdownEvent::SelectionChanged {
            model,
            count,
            missing: missing.len(),
        });

        Ok(())
    }
}
