//! # Task abstraction.
//!
//! This module defines the [`Task`] trait (async, cancelable) executed against
//! one cloned item during a fan-out. The common handle type is [`TaskRef`],
//! an `Arc<dyn Task>` suitable for sharing across concurrent runners.
//!
//! A task receives a [`CancellationToken`] and should periodically check it to
//! stop cooperatively during shutdown; the stage itself never pre-empts a
//! running task.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::TaskError;
use crate::item::ItemRef;
use crate::tasks::params::TaskParams;

/// Shared handle to a task (`Arc<dyn Task>`).
pub type TaskRef = std::sync::Arc<dyn Task>;

/// # Asynchronous, cancelable unit of work over one item.
///
/// ## Contract
/// - `Ok(item)` means the task succeeded; `Err(_)` means it failed and the
///   fan-out that dispatched it will drop the admitted item. The returned
///   item is a gating signal only; the stage forwards the *original*, never
///   a task's output.
/// - Tasks run for their side effects (writes through the shared
///   [`Registry`](crate::Registry), external systems) and must be safe to
///   invoke concurrently across distinct items.
/// - Cross-task shared state goes through the registry in
///   [`TaskParams`]; nothing else is synchronized on a task's behalf.
#[async_trait]
pub trait Task: Send + Sync + 'static {
    /// Returns a stable, human-readable task name.
    fn name(&self) -> &str;

    /// Processes one cloned item until completion or cancellation.
    ///
    /// Implementations should check `ctx.is_cancelled()` at their own safe
    /// points and may return [`TaskError::Canceled`] to record a cooperative
    /// exit, which still counts as a failed task for the fan-out decision.
    async fn process(
        &self,
        ctx: CancellationToken,
        item: ItemRef,
        params: &TaskParams,
    ) -> Result<ItemRef, TaskError>;
}
