use std::sync::Arc;

use ash::vk;
use ash::vk::Handle;
use parking_lot::{Mutex, MutexGuard};
use tracing::debug;

use crate::error::HookFailures;
use crate::handle::{ResourceId, ResourceType};
use crate::hooks::PreExecuteHooks;
use crate::ledger::ReferenceLedger;
use crate::resource::{Queue, Resource};

/// What a recording leaves attached to its command buffer.
#[derive(Debug, Default)]
pub struct RecordingState {
    /// Resources referenced by recorded commands
    pub references: ReferenceLedger,
    /// Work to run right before the buffer is submitted
    pub hooks: PreExecuteHooks,
}

/// A native command buffer plus the lock that serializes recording into it.
///
/// Two locks are involved. The recording lock is held by a recording session
/// for its whole lifetime and only serializes sessions. The attached state
/// (references and hooks of the last finished recording) sits behind its own
/// short-lived lock, so it can be inspected, run or released from any thread
/// while a session is open, including the session's own thread. An open
/// session builds its state privately and attaches it when it ends.
pub struct CommandBuffer {
    handle: vk::CommandBuffer,
    level: vk::CommandBufferLevel,
    recording: Mutex<()>,
    attached: Mutex<RecordingState>,
}

impl CommandBuffer {
    pub fn new(handle: vk::CommandBuffer, level: vk::CommandBufferLevel) -> Arc<Self> {
        Arc::new(Self {
            handle,
            level,
            recording: Mutex::new(()),
            attached: Mutex::new(RecordingState::default()),
        })
    }

    pub fn primary(handle: vk::CommandBuffer) -> Arc<Self> {
        Self::new(handle, vk::CommandBufferLevel::PRIMARY)
    }

    pub fn secondary(handle: vk::CommandBuffer) -> Arc<Self> {
        Self::new(handle, vk::CommandBufferLevel::SECONDARY)
    }

    pub fn handle(&self) -> vk::CommandBuffer {
        self.handle
    }

    pub fn level(&self) -> vk::CommandBufferLevel {
        self.level
    }

    /// Acquire the exclusive recording lock, blocking until it is free.
    pub fn lock_recording(&self) -> MutexGuard<'_, ()> {
        self.recording.lock()
    }

    /// Whether a recording session currently holds the lock.
    pub fn is_recording(&self) -> bool {
        self.recording.is_locked()
    }

    /// Replace the attached state with that of a just-ended recording.
    pub fn attach(&self, state: RecordingState) {
        let previous = std::mem::replace(&mut *self.attached.lock(), state);
        // Resource destructors run outside the lock.
        drop(previous);
    }

    /// Ids of every resource kept alive by the last finished recording.
    pub fn referenced(&self) -> Vec<ResourceId> {
        self.attached.lock().references.ids()
    }

    pub fn pending_hooks(&self) -> usize {
        self.attached.lock().hooks.len()
    }

    /// Run the pre-execute hooks of the last finished recording against `queue`.
    ///
    /// Called by the submission path. Hooks are taken out of the buffer, so
    /// each one runs exactly once even if the buffer is submitted again. The
    /// attached state is not locked while the hooks run.
    pub fn run_pre_execute_hooks(&self, queue: &Queue) -> Result<(), HookFailures> {
        let hooks = std::mem::take(&mut self.attached.lock().hooks);
        debug!(
            command_buffer = ?self.handle,
            hooks = hooks.len(),
            "running pre-execute hooks"
        );
        hooks.run(queue)
    }

    /// Drop all references and hooks attached by the last finished
    /// recording, once the GPU is known to be done with it. A session that is
    /// still open is unaffected.
    pub fn release(&self) {
        let previous = std::mem::take(&mut *self.attached.lock());
        drop(previous);
    }
}

impl Resource for CommandBuffer {
    fn id(&self) -> ResourceId {
        ResourceId::new(ResourceType::CommandBuffer, self.handle.as_raw())
    }
}

impl std::fmt::Debug for CommandBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandBuffer")
            .field("handle", &self.handle)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}
