//! Sequential step runner.
//!
//! A [`Flow`] is an ordered list of fallible async [`Step`]s sharing one
//! mutable context. Steps run strictly in declared order, each only after
//! the previous one returned. The first error aborts the flow and is handed
//! back unchanged; the remaining steps never run. There is no cancellation.
//!
//! ```text
//! ctx ──▶ step 1 ──ok──▶ step 2 ──ok──▶ step 3 ──ok──▶ Ok(ctx)
//!            │              │              │
//!           err            err            err
//!            └──────────────┴──────────────┴──────▶ Err(e)
//! ```

mod throttle;

pub use throttle::{PolitenessDelay, DEFAULT_POLITENESS_DELAY};

use std::time::Instant;

use async_trait::async_trait;
use log::{debug, warn};

use crate::errors::StatsError;

/// One unit of work in a flow.
#[async_trait]
pub trait Step<C: Send>: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn run(&self, ctx: &mut C) -> Result<(), StatsError>;
}

/// Ordered list of steps over a context of type `C`.
pub struct Flow<C> {
    label: &'static str,
    steps: Vec<Box<dyn Step<C>>>,
}

impl<C: Send> Flow<C> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            steps: Vec::new(),
        }
    }

    /// Append a step.
    pub fn then(mut self, step: impl Step<C> + 'static) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order, stopping at the first failure.
    pub async fn run(&self, mut ctx: C) -> Result<C, StatsError> {
        let started = Instant::now();

        for (index, step) in self.steps.iter().enumerate() {
            debug!(
                "Flow '{}': step {}/{} '{}'",
                self.label,
                index + 1,
                self.steps.len(),
                step.name()
            );
            if let Err(e) = step.run(&mut ctx).await {
                warn!(
                    "Flow '{}' aborted at step '{}' ({}): {}",
                    self.label,
                    step.name(),
                    e.kind(),
                    e
                );
                return Err(e);
            }
        }

        debug!("Flow '{}' finished in {:?}", self.label, started.elapsed());
        Ok(ctx)
    }
}
