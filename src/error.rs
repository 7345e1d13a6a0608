//! Error types used by the fanvisor stage and its tasks.
//!
//! This module defines two main error enums:
//!
//! - [`StageError`] — errors recorded by the stage machinery itself.
//! - [`TaskError`] — errors raised by individual task executions.
//!
//! Task failures never abort sibling tasks and are never re-raised: a runner
//! wraps them into a position-tagged [`StageError::Task`] and appends that to
//! the stage's [`ErrorSink`](crate::ErrorSink). The error text is diagnostic
//! only; control flow depends solely on success vs. failure.

use thiserror::Error;

/// # Errors produced by task execution.
///
/// Any variant counts as a failed task: the fan-out that dispatched it drops
/// the admitted item. [`TaskError::Canceled`] exists so sink consumers can
/// tell a cooperative-cancellation exit apart from a real fault.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TaskError {
    /// Task execution failed.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Task observed cancellation and gave up before finishing.
    #[error("context cancelled")]
    Canceled,
}

impl TaskError {
    /// Wraps an error message into [`TaskError::Fail`].
    pub fn fail(error: impl Into<String>) -> Self {
        TaskError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use fanvisor::TaskError;
    ///
    /// let err = TaskError::fail("boom");
    /// assert_eq!(err.as_label(), "task_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TaskError::Fail { .. } => "task_failed",
            TaskError::Canceled => "task_canceled",
        }
    }

    /// True if the task exited because it observed cancellation.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, TaskError::Canceled)
    }
}

/// # Errors produced by the stage.
///
/// [`StageError::Task`] is what lands in the [`ErrorSink`](crate::ErrorSink):
/// the failing task's error tagged with the stage's position in the pipeline.
/// [`StageError::NoTasks`] is a construction-time error and never appears in
/// the sink.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum StageError {
    /// A task failed while processing a clone of an admitted item.
    #[error("pipeline stage {position}: {source}")]
    Task {
        /// Position of the reporting stage in the pipeline.
        position: usize,
        /// The task-level failure.
        #[source]
        source: TaskError,
    },

    /// A fan-out stage was constructed with an empty task set.
    #[error("fan-out stage requires at least one task")]
    NoTasks,
}

impl StageError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use fanvisor::StageError;
    ///
    /// assert_eq!(StageError::NoTasks.as_label(), "stage_no_tasks");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            StageError::Task { .. } => "stage_task_failed",
            StageError::NoTasks => "stage_no_tasks",
        }
    }
}
