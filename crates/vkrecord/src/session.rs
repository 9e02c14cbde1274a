use ash::prelude::VkResult;
use ash::vk;
use parking_lot::MutexGuard;
use tracing::{debug, error, trace};
use vkrecord_core::{CommandBuffer, PreExecuteHooks, RecordingState, ReferenceLedger};

use crate::compile::CommandList;
use crate::device::DeviceCommands;
use crate::error::RecordError;
use crate::recorder::Recorder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Recording,
    Invalidated,
    Finished,
}

/// Exclusive recording rights on one command buffer.
///
/// Holds the buffer's recording lock from [`Recorder::begin`] until the session
/// is finished or dropped. Ending the session ends the native command buffer,
/// attaches the references and hooks gathered while recording to the command
/// buffer for the submission path, and releases the lock.
pub struct RecordingSession<'a> {
    recorder: &'a Recorder,
    command_buffer: &'a CommandBuffer,
    state: RecordingState,
    status: Status,
    // Released after the state has been attached on end.
    _exclusive: MutexGuard<'a, ()>,
}

impl<'a> RecordingSession<'a> {
    pub(crate) fn new(
        recorder: &'a Recorder,
        command_buffer: &'a CommandBuffer,
        exclusive: MutexGuard<'a, ()>,
    ) -> Self {
        Self {
            recorder,
            command_buffer,
            state: RecordingState::default(),
            status: Status::Recording,
            _exclusive: exclusive,
        }
    }

    pub fn command_buffer(&self) -> &CommandBuffer {
        self.command_buffer
    }

    /// Resources kept alive by this recording so far.
    pub fn references(&self) -> &ReferenceLedger {
        &self.state.references
    }

    pub fn pending_hooks(&self) -> usize {
        self.state.hooks.len()
    }

    /// Whether an earlier compilation failed, leaving the buffer unusable.
    pub fn is_invalidated(&self) -> bool {
        self.status == Status::Invalidated
    }

    /// Record `commands` into the command buffer, in order.
    ///
    /// Stops at the first native call that fails. Calls issued before the
    /// failure stay recorded, so after an error the session refuses further
    /// compilation and the command buffer must be re-recorded from scratch.
    pub fn compile<L: CommandList>(&mut self, commands: L) -> Result<(), RecordError> {
        if self.status != Status::Recording {
            return Err(RecordError::Invalidated);
        }

        let result = commands.compile_into(self);
        if let Err(e) = &result {
            error!(command_buffer = ?self.raw(), error = %e, "compilation aborted");
            self.status = Status::Invalidated;
        }
        result
    }

    /// End the command buffer and release the recording lock.
    pub fn finish(mut self) -> Result<(), RecordError> {
        let result = self.end();
        self.status = Status::Finished;
        result
    }

    /// End the native buffer and attach the gathered state. The state is
    /// attached even when the end call fails: the partial recording may still
    /// reference everything in it.
    fn end(&mut self) -> Result<(), RecordError> {
        let result = self
            .recorder
            .device()
            .end_command_buffer(self.raw())
            .map_err(RecordError::native("vkEndCommandBuffer"));

        let state = std::mem::take(&mut self.state);
        debug!(
            command_buffer = ?self.raw(),
            references = state.references.len(),
            hooks = state.hooks.len(),
            "recording ended"
        );
        self.command_buffer.attach(state);
        result
    }

    // ── Engine access ───────────────────────────────────────

    pub(crate) fn raw(&self) -> vk::CommandBuffer {
        self.command_buffer.handle()
    }

    pub(crate) fn ledger(&mut self) -> &mut ReferenceLedger {
        &mut self.state.references
    }

    pub(crate) fn hooks(&mut self) -> &mut PreExecuteHooks {
        &mut self.state.hooks
    }

    /// Issue one native call against this session's command buffer.
    pub(crate) fn issue<F>(&self, call: &'static str, f: F) -> Result<(), RecordError>
    where
        F: FnOnce(&dyn DeviceCommands, vk::CommandBuffer) -> VkResult<()>,
    {
        if self.recorder.config().trace_commands {
            trace!(command_buffer = ?self.raw(), call, "native call");
        }
        f(self.recorder.device(), self.raw()).map_err(RecordError::native(call))
    }
}

impl Drop for RecordingSession<'_> {
    fn drop(&mut self) {
        if self.status == Status::Finished {
            return;
        }
        if let Err(e) = self.end() {
            error!(command_buffer = ?self.raw(), error = %e, "failed to end recording");
        }
    }
}
