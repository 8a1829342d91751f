//! Option loading
//!
//! Issues the bulk load for a newly set model on the Tokio runtime and
//! publishes the result once it settles. Control returns to the caller as
//! soon as the load is issued.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::FetchPolicy;
use crate::domain::entities::DomainObject;
use crate::domain::ports::{DropdownEvent, DropdownEventSink, FetchError, ModelDescriptor};
use crate::error::{DropdownError, DropdownResult};

use super::dropdown::SharedState;

/// What happened to a settled load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Options and selection were rebuilt from this load.
    Applied {
        generation: u64,
        option_count: usize,
        selected_count: usize,
    },
    /// A newer load had been issued; this result was dropped.
    Superseded { generation: u64, current: u64 },
}

impl FetchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, FetchOutcome::Applied { .. })
    }
}

/// Pending load issued by `set_model_constructor`.
///
/// Dropping the handle does not cancel the load; the result is still
/// published when it settles.
#[derive(Debug)]
pub struct FetchHandle {
    model: String,
    generation: u64,
    task: JoinHandle<DropdownResult<FetchOutcome>>,
}

impl FetchHandle {
    /// Generation number assigned when the load was issued
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether the continuation has already run
    pub fn is_settled(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the load to settle and report what it did.
    ///
    /// A failed load comes back as `DropdownError::Fetch`; options and
    /// selection keep whatever they held before.
    pub async fn settled(self) -> DropdownResult<FetchOutcome> {
        match self.task.await {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(model = %self.model, "option loading task failed: {}", err);
                Err(DropdownError::FetchAborted { model: self.model })
            }
        }
    }
}

/// Everything the continuation needs, detached from the dropdown itself.
pub(super) struct FetchContext {
    pub state: SharedState,
    pub events: Arc<dyn DropdownEventSink>,
    pub policy: FetchPolicy,
    pub descriptor: Arc<dyn ModelDescriptor>,
    pub generation: u64,
}

/// Start the bulk load on `runtime`.
///
/// The descriptor is queried from a spawned task, so on a current-thread
/// runtime `find_all` runs at the caller's next await point.
pub(super) fn spawn_fetch(runtime: &Handle, ctx: FetchContext) -> FetchHandle {
    let model = ctx.descriptor.model_name().to_string();
    let generation = ctx.generation;

    ctx.events.on_event(DropdownEvent::FetchStarted {
        model: model.clone(),
        generation,
    });
    tracing::debug!(model = %model, generation, "loading options");

    let descriptor = Arc::clone(&ctx.descriptor);
    let task = runtime.spawn(async move {
        let result = descriptor.find_all().await;
        settle(ctx, result)
    });

    FetchHandle {
        model,
        generation,
        task,
    }
}

fn settle(
    ctx: FetchContext,
    result: Result<Vec<DomainObject>, FetchError>,
) -> DropdownResult<FetchOutcome> {
    let model = ctx.descriptor.model_name().to_string();
    let generation = ctx.generation;

    let raw = match result {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(model = %model, generation, "option loading failed: {}", err);
            ctx.events.on_event(DropdownEvent::FetchFailed {
                model,
                generation,
                error: err.to_string(),
            });
            return Err(err.into());
        }
    };

    let required = match ctx.policy {
        FetchPolicy::LatestRequest => Some(generation),
        FetchPolicy::LastResolution => None,
    };
    let (option_count, selected_count) =
        match ctx.state.publish(raw, required, ctx.events.as_ref()) {
            Ok(counts) => counts,
            Err(current) => {
                tracing::debug!(model = %model, generation, current, "dropping superseded options");
                ctx.events.on_event(DropdownEvent::FetchSuperseded {
                    model,
                    generation,
                    current,
                });
                return Ok(FetchOutcome::Superseded {
                    generation,
                    current,
                });
            }
        };

    tracing::debug!(
        model = %model,
        generation,
        option_count,
        selected_count,
        "options rebuilt"
    );
    ctx.events.on_event(DropdownEvent::FetchCompleted {
        model,
        generation,
        option_count,
        selected_count,
    });

    Ok(FetchOutcome::Applied {
        generation,
        option_count,
        selected_count,
    })
}
