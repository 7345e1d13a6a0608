//! # Stage abstraction.
//!
//! A [`Stage`] is one link of a channel-based pipeline: it consumes items
//! from an input channel, does its work, and forwards items to an output
//! channel. The surrounding pipeline owns the channels and drives the stage
//! by calling [`Stage::run`]; the stage owns nothing beyond the capabilities
//! handed to it in [`StageParams`].

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::stage::params::StageParams;

/// # One link of a channel-based pipeline.
///
/// ## Contract
/// - [`run`](Stage::run) loops until cancellation is observed or the input
///   channel closes; there is no other stop signal.
/// - Cancellation is advisory and cooperative: it is checked at the stage's
///   own suspension points, never enforced pre-emptively.
/// - [`id`](Stage::id) is a stable identifier used by the surrounding
///   pipeline for diagnostics only.
#[async_trait]
pub trait Stage: Send + Sync {
    /// Returns the stage's stable identifier.
    fn id(&self) -> &str;

    /// Runs the stage until cancellation or upstream completion.
    async fn run(&self, ctx: CancellationToken, params: StageParams);
}
