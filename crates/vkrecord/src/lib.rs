//! Type-safe command recording on top of Vulkan command buffers.
//!
//! Commands are plain values. A [`Recorder`] opens a [`RecordingSession`] on a
//! command buffer (taking its recording lock), and [`RecordingSession::compile`]
//! turns a list of command values into native calls, in order, while keeping
//! every referenced resource alive through the command buffer's reference ledger.

pub mod command;
pub mod compile;
pub mod device;
pub mod error;
pub mod recorder;
pub mod session;

pub use ash::vk;
pub use vkrecord_core::{
    Buffer, CommandBuffer, CoreError, DescriptorSet, Event, Framebuffer, HookFailures, Image,
    InputBuffer, Pipeline, PipelineLayout, QueryPool, Queue, RecorderConfig, RecordingConfig,
    ReferenceLedger, RenderPass, Resource, ResourceId, ResourceType, StagingUpload, UsageMode,
};

pub use command::*;
pub use compile::{CommandList, Encode};
pub use device::DeviceCommands;
pub use error::RecordError;
pub use recorder::{Inheritance, Recorder};
pub use session::RecordingSession;
