use std::sync::Arc;
use std::time::{Duration, Instant};

use ash::vk;
use parking_lot::MutexGuard;
use tracing::{debug, warn};
use vkrecord_core::{CommandBuffer, Framebuffer, RecorderConfig, RecordingConfig, RenderPass};

use crate::device::DeviceCommands;
use crate::error::RecordError;
use crate::session::RecordingSession;

/// What a secondary command buffer inherits from the primary that executes it.
#[derive(Debug, Clone, Default)]
pub struct Inheritance {
    pub render_pass: Option<Arc<RenderPass>>,
    pub subpass: u32,
    pub framebuffer: Option<Arc<Framebuffer>>,
    pub occlusion_query_enable: bool,
    pub query_flags: vk::QueryControlFlags,
    pub pipeline_statistics: vk::QueryPipelineStatisticFlags,
}

/// Opens recording sessions against a device's native call boundary.
pub struct Recorder {
    device: Arc<dyn DeviceCommands>,
    config: RecordingConfig,
}

impl Recorder {
    pub fn new(device: Arc<dyn DeviceCommands>) -> Self {
        Self::with_config(device, RecordingConfig::default())
    }

    pub fn with_config(device: Arc<dyn DeviceCommands>, config: RecordingConfig) -> Self {
        Self { device, config }
    }

    pub fn from_recorder_config(device: Arc<dyn DeviceCommands>, config: &RecorderConfig) -> Self {
        Self::with_config(device, config.recording.clone())
    }

    pub fn config(&self) -> &RecordingConfig {
        &self.config
    }

    pub(crate) fn device(&self) -> &dyn DeviceCommands {
        &*self.device
    }

    /// Begin recording a primary command buffer.
    ///
    /// Blocks while another session is recording into the same buffer.
    pub fn begin<'a>(
        &'a self,
        command_buffer: &'a CommandBuffer,
        usage: vk::CommandBufferUsageFlags,
    ) -> Result<RecordingSession<'a>, RecordError> {
        let exclusive = self.acquire(command_buffer);
        let begin_info = vk::CommandBufferBeginInfo::default().flags(usage);
        self.start(command_buffer, exclusive, &begin_info)
    }

    /// Begin recording with the configured default usage flags.
    pub fn begin_default<'a>(
        &'a self,
        command_buffer: &'a CommandBuffer,
    ) -> Result<RecordingSession<'a>, RecordError> {
        self.begin(command_buffer, self.config.default_usage.flags())
    }

    /// Begin recording a secondary command buffer.
    ///
    /// The inherited render pass and framebuffer are kept alive alongside
    /// everything the recorded commands reference.
    pub fn begin_secondary<'a>(
        &'a self,
        command_buffer: &'a CommandBuffer,
        usage: vk::CommandBufferUsageFlags,
        inheritance: Inheritance,
    ) -> Result<RecordingSession<'a>, RecordError> {
        let exclusive = self.acquire(command_buffer);

        let inheritance_info = vk::CommandBufferInheritanceInfo::default()
            .render_pass(
                inheritance
                    .render_pass
                    .as_ref()
                    .map_or(vk::RenderPass::null(), |rp| rp.handle()),
            )
            .subpass(inheritance.subpass)
            .framebuffer(
                inheritance
                    .framebuffer
                    .as_ref()
                    .map_or(vk::Framebuffer::null(), |fb| fb.handle()),
            )
            .occlusion_query_enable(inheritance.occlusion_query_enable)
            .query_flags(inheritance.query_flags)
            .pipeline_statistics(inheritance.pipeline_statistics);
        let begin_info = vk::CommandBufferBeginInfo::default()
            .flags(usage)
            .inheritance_info(&inheritance_info);

        let mut session = self.start(command_buffer, exclusive, &begin_info)?;
        if let Some(render_pass) = inheritance.render_pass {
            session.ledger().add(render_pass);
        }
        if let Some(framebuffer) = inheritance.framebuffer {
            session.ledger().add(framebuffer);
        }
        Ok(session)
    }

    fn acquire<'a>(&self, command_buffer: &'a CommandBuffer) -> MutexGuard<'a, ()> {
        let started = Instant::now();
        let exclusive = command_buffer.lock_recording();
        let waited = started.elapsed();
        if waited > Duration::from_millis(self.config.contention_warn_ms) {
            warn!(
                command_buffer = ?command_buffer.handle(),
                waited_ms = waited.as_millis() as u64,
                "waited for another recording session to finish"
            );
        }
        exclusive
    }

    fn start<'a>(
        &'a self,
        command_buffer: &'a CommandBuffer,
        exclusive: MutexGuard<'a, ()>,
        begin_info: &vk::CommandBufferBeginInfo<'_>,
    ) -> Result<RecordingSession<'a>, RecordError> {
        self.device
            .begin_command_buffer(command_buffer.handle(), begin_info)
            .map_err(RecordError::native("vkBeginCommandBuffer"))?;

        // A successful begin implicitly resets the buffer; whatever the
        // previous recording kept alive is no longer needed by it.
        command_buffer.release();

        debug!(
            command_buffer = ?command_buffer.handle(),
            usage = ?begin_info.flags,
            "recording started"
        );
        Ok(RecordingSession::new(self, command_buffer, exclusive))
    }
}
