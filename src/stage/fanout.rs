//! # FanOut: all-or-nothing parallel stage.
//!
//! [`FanOut`] passes an independent copy of each admitted item to a fixed set
//! of tasks, waits for every task to finish, and forwards the **original**
//! item downstream only if all of them succeeded.
//!
//! ## Architecture
//! ```text
//! admission (select!):                 one fan-out (serialized):
//!   cancellation ──► return             ┌─ clone #1 ─► announce ─► runner #1 ─┐
//!   input.recv()  ─┬► execute() ───────►├─ clone #2 ─► announce ─► runner #2 ─┼─► join N
//!   queue.ready() ─┘                    └─ clone #N ─► announce ─► runner #N ─┘     │
//!                                                                                  ▼
//!                                                  all Some ──► forward original to output
//!                                                  any None ──► announce + mark original, drop
//! ```
//!
//! ## Rules
//! - One fan-out in flight at a time: item K+1 is never admitted until item
//!   K's fan-out fully resolves (forward, drop, or abandoned).
//! - Exactly N clones per admitted item, each consumed by exactly one runner,
//!   each announced on `new_items` before its runner is dispatched and marked
//!   processed exactly once by that runner.
//! - The original is forwarded iff all N outcomes were successes, and it is
//!   the original that is forwarded, never a clone or a task's output. Tasks
//!   run for their side effects; this stage only gates continuation.
//! - No completion ordering among the N runners is assumed or preserved.
//!
//! ## Cancellation waypoints
//! Cancellation is advisory and checked at exactly three suspension points:
//! the admission `select!`, each clone announcement, and the final forward.
//! It never pre-empts dispatched runners. Abandoning a fan-out at the
//! announce waypoint therefore orphans the runners already dispatched: they
//! keep running, still announce and mark their clones, and post outcomes
//! nobody collects. The join itself is **not** a waypoint: once dispatch
//! completes, the executor always waits for exactly N signals.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::error::StageError;
use crate::item::ItemRef;
use crate::stage::params::StageParams;
use crate::stage::runner::run_task;
use crate::stage::stage::Stage;
use crate::tasks::TaskRef;

/// Stage that fans one item out to all of its tasks and joins the outcomes.
pub struct FanOut {
    id: String,
    tasks: Vec<TaskRef>,
}

impl std::fmt::Debug for FanOut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FanOut")
            .field("id", &self.id)
            .field("fan", &self.tasks.len())
            .finish()
    }
}

impl FanOut {
    /// Creates a fan-out stage over the given tasks.
    ///
    /// Returns [`StageError::NoTasks`] for an empty task set: a fan-out of
    /// zero tasks would forward everything unconditionally.
    pub fn new(id: impl Into<String>, tasks: Vec<TaskRef>) -> Result<Self, StageError> {
        if tasks.is_empty() {
            return Err(StageError::NoTasks);
        }
        Ok(Self {
            id: id.into(),
            tasks,
        })
    }

    /// Number of tasks each admitted item is fanned out to.
    pub fn fan(&self) -> usize {
        self.tasks.len()
    }

    /// Runs one admitted item through every task and decides forward-or-drop.
    async fn execute(&self, ctx: &CancellationToken, item: ItemRef, params: &StageParams) {
        let fan = self.tasks.len();
        // Capacity `fan` so runners never block handing off their outcome,
        // collected or not.
        let (done_tx, mut done_rx) = mpsc::channel::<Option<ItemRef>>(fan);

        for task in &self.tasks {
            let clone = item.clone_item();

            tokio::select! {
                _ = ctx.cancelled() => {
                    debug!(stage = %self.id, "fan-out abandoned at clone announcement");
                    return;
                }
                sent = params.new_items().send(Arc::clone(&clone)) => {
                    if sent.is_err() {
                        // The announcement side is gone; nothing left to
                        // coordinate against.
                        debug!(stage = %self.id, "new-item channel closed; abandoning fan-out");
                        return;
                    }
                }
            }

            tokio::spawn(run_task(
                ctx.clone(),
                Arc::clone(task),
                clone,
                params.task_params(),
                params.errors().clone(),
                params.position(),
                done_tx.clone(),
            ));
        }
        drop(done_tx);

        let mut failed = false;
        for _ in 0..fan {
            match done_rx.recv().await {
                Some(outcome) => failed |= outcome.is_none(),
                // A runner died without posting its signal; the fan-out
                // cannot be trusted as complete.
                None => {
                    failed = true;
                    break;
                }
            }
        }

        if failed {
            debug!(stage = %self.id, "dropping item after task failure");
            let _ = params.processed().send(Arc::clone(&item)).await;
            item.mark_processed();
            return;
        }

        tokio::select! {
            _ = ctx.cancelled() => {
                // Forward abandoned: the original's processed announcement is
                // never emitted on this path, unlike the failure path.
                debug!(stage = %self.id, "forward abandoned on cancellation");
            }
            sent = params.output().send(Arc::clone(&item)) => {
                if sent.is_ok() {
                    trace!(stage = %self.id, "item forwarded");
                    let _ = params.processed().send(Arc::clone(&item)).await;
                    item.mark_processed();
                }
            }
        }
    }
}

#[async_trait]
impl Stage for FanOut {
    fn id(&self) -> &str {
        &self.id
    }

    /// Repeatedly selects among cancellation, direct input, and the requeue
    /// queue until cancellation is observed or the input channel closes.
    ///
    /// Items from the requeue queue get the same fan-out treatment as direct
    /// input; whichever source is ready first wins. A readiness signal that
    /// races to an empty queue is tolerated and the loop simply continues.
    async fn run(&self, ctx: CancellationToken, mut params: StageParams) {
        let queue = Arc::clone(params.queue());

        loop {
            let admitted = tokio::select! {
                _ = ctx.cancelled() => return,
                item = params.input_mut().recv() => match item {
                    Some(item) => item,
                    // Upstream completed.
                    None => return,
                },
                _ = queue.ready() => match queue.try_pop() {
                    Some(item) => item,
                    // Lost the race to another consumer.
                    None => continue,
                },
            };

            self.execute(&ctx, admitted, &params).await;
        }
    }
}
