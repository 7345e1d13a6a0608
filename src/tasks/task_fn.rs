//! # Function-backed task (`TaskFn`)
//!
//! [`TaskFn`] wraps a closure `F: Fn(CancellationToken, ItemRef, TaskParams) -> Fut`,
//! producing a fresh future per invocation. Each call owns its own state; if
//! tasks need state shared across items, put it behind an `Arc` inside the
//! closure or use the [`Registry`](crate::Registry).
//!
//! ## Example
//! ```rust
//! use tokio_util::sync::CancellationToken;
//! use fanvisor::{ItemRef, TaskError, TaskFn, TaskParams, TaskRef};
//!
//! let t: TaskRef = TaskFn::arc(
//!     "validate",
//!     |_ctx: CancellationToken, item: ItemRef, _params: TaskParams| async move {
//!         // inspect item.as_any() ...
//!         Ok::<_, TaskError>(item)
//!     },
//! );
//!
//! assert_eq!(t.name(), "validate");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::TaskError;
use crate::item::ItemRef;
use crate::tasks::params::TaskParams;
use crate::tasks::task::Task;

/// Function-backed task implementation.
///
/// Wraps a closure that *creates* a new future per invocation.
#[derive(Debug)]
pub struct TaskFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> TaskFn<F> {
    /// Creates a new function-backed task.
    ///
    /// Prefer [`TaskFn::arc`] when you immediately need a
    /// [`TaskRef`](crate::TaskRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the task and returns it as a shared handle (`Arc<Self>`).
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut> Task for TaskFn<F>
where
    F: Fn(CancellationToken, ItemRef, TaskParams) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ItemRef, TaskError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn process(
        &self,
        ctx: CancellationToken,
        item: ItemRef,
        params: &TaskParams,
    ) -> Result<ItemRef, TaskError> {
        (self.f)(ctx, item, params.clone()).await
    }
}
