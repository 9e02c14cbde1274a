//! The command vocabulary.
//!
//! One plain value type per native operation. Values are consumed by
//! compilation: encoding moves every resource reference a command holds into
//! the session's ledger.

mod draw;
mod pass;
mod query;
mod state;
mod sync;
mod transfer;

use std::sync::Arc;

use ash::vk;
use vkrecord_core::{Buffer, InputBuffer};

use crate::compile::{sealed, CommandList, Encode};
use crate::error::RecordError;
use crate::session::RecordingSession;

pub use draw::*;
pub use pass::*;
pub use query::*;
pub use state::*;
pub use sync::*;
pub use transfer::*;

/// Where a command reads buffer contents from.
///
/// A resident buffer is used as is. A staged buffer resolves to its backing
/// device buffer for the native call, and its host data is uploaded by a
/// pre-execute hook right before submission.
#[derive(Debug, Clone)]
pub enum BufferSource {
    Resident(Arc<Buffer>),
    Staged(Arc<InputBuffer>),
}

impl BufferSource {
    pub fn handle(&self) -> vk::Buffer {
        match self {
            BufferSource::Resident(buffer) => buffer.handle(),
            BufferSource::Staged(input) => input.handle(),
        }
    }

    /// Keep the buffer alive for the recording. Staged data is scheduled for
    /// upload once per recording, however many commands read it.
    pub(crate) fn retain(self, session: &mut RecordingSession<'_>) {
        match self {
            BufferSource::Resident(buffer) => {
                session.ledger().add(buffer);
            }
            BufferSource::Staged(input) => {
                if session.ledger().add(input.clone()) {
                    session.hooks().add(move |queue| input.flush(queue));
                }
            }
        }
    }
}

impl From<Arc<Buffer>> for BufferSource {
    fn from(buffer: Arc<Buffer>) -> Self {
        BufferSource::Resident(buffer)
    }
}

impl From<Arc<InputBuffer>> for BufferSource {
    fn from(input: Arc<InputBuffer>) -> Self {
        BufferSource::Staged(input)
    }
}

macro_rules! commands {
    ($($variant:ident),+ $(,)?) => {
        /// Any command value, for lists assembled at runtime.
        #[derive(Debug, Clone)]
        pub enum Command {
            $($variant($variant),)+
            RenderPass(RenderPassBlock<Vec<Command>>),
        }

        $(
            impl sealed::Sealed for $variant {}

            impl CommandList for $variant {
                fn compile_into(
                    self,
                    session: &mut RecordingSession<'_>,
                ) -> Result<(), RecordError> {
                    self.encode(session)
                }
            }

            impl From<$variant> for Command {
                fn from(command: $variant) -> Self {
                    Command::$variant(command)
                }
            }
        )+

        impl From<RenderPassBlock<Vec<Command>>> for Command {
            fn from(block: RenderPassBlock<Vec<Command>>) -> Self {
                Command::RenderPass(block)
            }
        }

        impl sealed::Sealed for Command {}

        impl CommandList for Command {
            fn compile_into(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
                self.encode(session)
            }
        }

        impl Encode for Command {
            fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
                match self {
                    $(Command::$variant(command) => command.encode(session),)+
                    Command::RenderPass(block) => block.encode(session),
                }
            }
        }
    };
}

commands! {
    BindPipeline,
    SetViewport,
    SetScissor,
    SetLineWidth,
    SetDepthBias,
    SetBlendConstants,
    SetDepthBounds,
    SetStencilCompareMask,
    SetStencilWriteMask,
    SetStencilReference,
    BindDescriptorSets,
    BindIndexBuffer,
    BindVertexBuffers,
    PushConstants,
    Draw,
    DrawIndexed,
    DrawIndirect,
    DrawIndexedIndirect,
    Dispatch,
    DispatchIndirect,
    CopyBuffer,
    CopyImage,
    BlitImage,
    CopyBufferToImage,
    CopyImageToBuffer,
    UpdateBuffer,
    FillBuffer,
    ClearColorImage,
    ClearDepthStencilImage,
    ClearAttachments,
    ResolveImage,
    SetEvent,
    ResetEvent,
    WaitEvents,
    PipelineBarrier,
    BeginQuery,
    EndQuery,
    ResetQueryPool,
    WriteTimestamp,
    CopyQueryPoolResults,
    NextSubpass,
    ExecuteCommands,
}
