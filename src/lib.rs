//! # fanvisor
//!
//! **Fanvisor** is the fan-out/fan-in coordination core of a channel-based
//! data-processing pipeline.
//!
//! It provides one stage implementation, [`FanOut`], that passes an
//! independent copy of each incoming item to a fixed set of concurrently
//! running tasks, waits for all of them to finish, and forwards the
//! **original** item downstream only if every task succeeded. The crate is
//! designed as a building block: the surrounding pipeline owns the channels
//! and wires stages together; this crate owns the coordination.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!              ┌─────────────┐      ┌──────────────────┐
//!  upstream ──►│    Input    │─────►│                  │
//!              └─────────────┘      │  FanOut stage    │
//!              ┌─────────────┐      │  (admission      │
//!  producers ─►│ RequeueQueue│─────►│   select loop)   │
//!              └─────────────┘      └────────┬─────────┘
//!                                            ▼  one item at a time
//!                               ┌────────────────────────────┐
//!                               │ executor: N clones         │
//!                               │  clone ─► announce ─► task │──► new_items
//!                               │  runner per clone          │──► processed
//!                               │  join exactly N outcomes   │──► ErrorSink
//!                               └────────────┬───────────────┘
//!                                            ▼
//!                            all succeeded ──► Output (original item)
//!                            any failed    ──► dropped (sink explains why)
//! ```
//!
//! ### Lifecycle of one admitted item
//! ```text
//! select { cancellation | input | requeue } ──► execute(item)
//!
//! execute:
//!   ├─► for each task:
//!   │     ├─► clone = item.clone_item()
//!   │     ├─► announce clone on new_items   (cancellation waypoint)
//!   │     └─► spawn runner(task, clone)
//!   ├─► join: receive exactly N completion signals (not cancellable)
//!   ├─► any failure ─► announce + mark original, drop
//!   └─► all success ─► forward original     (cancellation waypoint)
//!                       └─► announce + mark original
//!
//! runner (always, success or failure):
//!   ├─► outcome = task.process(ctx, clone, task_params)
//!   ├─► on Err: append position-tagged error to ErrorSink
//!   ├─► announce clone on processed
//!   ├─► clone.mark_processed()
//!   └─► post outcome on the completion channel
//! ```
//!
//! ## Features
//! | Area        | Description                                                       | Key types / traits                     |
//! |-------------|-------------------------------------------------------------------|----------------------------------------|
//! | **Stage**   | Admission loop, fan-out execution, forward-or-drop decision.      | [`Stage`], [`FanOut`], [`StageParams`] |
//! | **Tasks**   | Define per-item work as traits or closures.                       | [`Task`], [`TaskFn`], [`TaskParams`]   |
//! | **Items**   | Opaque payload contract: deep clone, idempotent bookkeeping.      | [`Item`], [`ItemRef`]                  |
//! | **Shared**  | Cross-task state, error collection, out-of-band admission.        | [`Registry`], [`ErrorSink`], [`RequeueQueue`] |
//! | **Errors**  | Typed errors for stage machinery and task executions.             | [`StageError`], [`TaskError`]          |
//!
//! ## Failure policy
//! All-or-nothing: a single failing task drops the whole admitted item. The
//! failure is recorded in the [`ErrorSink`] tagged with the stage's pipeline
//! position; nothing is retried and nothing is fatal to the process.
//! Cancellation is cooperative and checked only at the stage's own suspension
//! points; dispatched tasks are never pre-empted.
//!
//! ## Example
//! ```rust
//! use std::any::Any;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use tokio::sync::mpsc;
//! use tokio_util::sync::CancellationToken;
//! use fanvisor::{
//!     ErrorSink, FanOut, Item, ItemRef, Registry, RequeueQueue, Stage, StageParams,
//!     TaskFn, TaskParams, TaskRef,
//! };
//!
//! struct Document {
//!     body: String,
//!     processed: AtomicBool,
//! }
//!
//! impl Item for Document {
//!     fn clone_item(&self) -> ItemRef {
//!         Arc::new(Document {
//!             body: self.body.clone(),
//!             processed: AtomicBool::new(false),
//!         })
//!     }
//!     fn mark_processed(&self) {
//!         self.processed.store(true, Ordering::SeqCst);
//!     }
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let (input_tx, input) = mpsc::channel(8);
//!     let (output, mut output_rx) = mpsc::channel(8);
//!     let (new_items, _new_rx) = mpsc::channel(8);
//!     let (processed, _processed_rx) = mpsc::channel(8);
//!
//!     let check_not_empty: TaskRef = TaskFn::arc(
//!         "check-not-empty",
//!         |_ctx: CancellationToken, item: ItemRef, _params: TaskParams| async move {
//!             // tasks gate continuation; the stage forwards the original
//!             Ok::<_, fanvisor::TaskError>(item)
//!         },
//!     );
//!
//!     let stage = FanOut::new("validate", vec![check_not_empty]).unwrap();
//!     let params = StageParams::new(
//!         0,
//!         input,
//!         output,
//!         new_items,
//!         processed,
//!         ErrorSink::new(),
//!         Registry::new(),
//!         Arc::new(RequeueQueue::new()),
//!     );
//!
//!     let doc: ItemRef = Arc::new(Document {
//!         body: "hello".into(),
//!         processed: AtomicBool::new(false),
//!     });
//!     let admitted = Arc::clone(&doc);
//!
//!     let ctx = CancellationToken::new();
//!     let run = tokio::spawn(async move { stage.run(ctx, params).await });
//!
//!     input_tx.send(doc).await.unwrap();
//!     drop(input_tx); // upstream completed
//!     run.await.unwrap();
//!
//!     let forwarded = output_rx.recv().await.expect("all tasks succeeded");
//!     assert!(Arc::ptr_eq(&forwarded, &admitted)); // identity, not a clone
//! }
//! ```

mod error;
mod item;
mod shared;
mod stage;
mod tasks;

// ---- Public re-exports ----

pub use error::{StageError, TaskError};
pub use item::{Item, ItemRef};
pub use shared::{ErrorSink, Registry, RequeueQueue};
pub use stage::{FanOut, Stage, StageParams};
pub use tasks::{Task, TaskFn, TaskParams, TaskRef};
