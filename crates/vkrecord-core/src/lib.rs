pub mod command_buffer;
pub mod config;
pub mod error;
pub mod handle;
pub mod hooks;
pub mod ledger;
pub mod resource;

pub use command_buffer::{CommandBuffer, RecordingState};
pub use config::{RecorderConfig, RecordingConfig, UsageMode};
pub use error::{CoreError, HookFailures};
pub use handle::{ResourceId, ResourceType};
pub use hooks::{PreExecuteHook, PreExecuteHooks};
pub use ledger::ReferenceLedger;
pub use resource::{
    Buffer, DescriptorSet, Event, Framebuffer, Image, InputBuffer, Pipeline, PipelineLayout,
    QueryPool, Queue, RenderPass, Resource, StagingUpload,
};
