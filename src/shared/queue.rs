//! # Requeue queue: out-of-band admission source.
//!
//! [`RequeueQueue`] lets producers outside the stage (another stage, a task)
//! re-inject items for the same fan-out treatment as fresh input. The stage
//! waits on [`RequeueQueue::ready`] alongside its input channel and pops
//! non-blockingly when the signal fires.
//!
//! ## Rules
//! - Readiness is a hint, not a reservation: a signal may fire and the pop
//!   still come back empty (another consumer won the race). Consumers must
//!   tolerate the empty pop and simply continue.
//! - A successful pop re-arms the signal while items remain, so pushes that
//!   arrive while the consumer is busy are not lost.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use tokio::sync::Notify;

use crate::item::ItemRef;

/// Secondary admission source with readiness signaling.
///
/// Share it as `Arc<RequeueQueue>`: producers call
/// [`push`](RequeueQueue::push), the consuming stage awaits
/// [`ready`](RequeueQueue::ready) and then calls
/// [`try_pop`](RequeueQueue::try_pop).
#[derive(Default)]
pub struct RequeueQueue {
    entries: Mutex<VecDeque<ItemRef>>,
    ready: Notify,
}

impl RequeueQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues an item and signals readiness.
    pub fn push(&self, item: ItemRef) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(item);
        self.ready.notify_one();
    }

    /// Pops the oldest item without blocking; `None` if the queue is empty.
    pub fn try_pop(&self) -> Option<ItemRef> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let item = entries.pop_front();
        // Re-arm: `Notify` stores at most one permit, so pushes that landed
        // while the consumer was busy would otherwise go unsignaled.
        if !entries.is_empty() {
            self.ready.notify_one();
        }
        item
    }

    /// Completes when the queue signals readiness.
    ///
    /// Completion does not guarantee an item is still available; pair with
    /// [`try_pop`](RequeueQueue::try_pop).
    pub async fn ready(&self) {
        self.ready.notified().await;
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True if no items are queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
