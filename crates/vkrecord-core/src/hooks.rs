use std::fmt;

use tracing::warn;

use crate::error::{CoreError, HookFailures};
use crate::resource::Queue;

/// Deferred work run with the destination queue just before submission.
pub type PreExecuteHook = Box<dyn FnOnce(&Queue) -> Result<(), CoreError> + Send>;

/// Ordered list of pre-execute hooks.
#[derive(Default)]
pub struct PreExecuteHooks {
    hooks: Vec<PreExecuteHook>,
}

impl PreExecuteHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<F>(&mut self, hook: F)
    where
        F: FnOnce(&Queue) -> Result<(), CoreError> + Send + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run every hook in registration order, consuming the list.
    ///
    /// A failing hook does not stop the ones after it; all failures are
    /// returned together.
    pub fn run(self, queue: &Queue) -> Result<(), HookFailures> {
        let total = self.hooks.len();
        let mut failures = Vec::new();

        for (index, hook) in self.hooks.into_iter().enumerate() {
            if let Err(e) = hook(queue) {
                warn!(index, error = %e, "pre-execute hook failed");
                failures.push((index, e));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(HookFailures { total, failures })
        }
    }
}

impl fmt::Debug for PreExecuteHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreExecuteHooks")
            .field("len", &self.hooks.len())
            .finish()
    }
}
