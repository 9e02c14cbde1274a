//! Pipeline, dynamic state and binding commands.

use std::sync::Arc;

use ash::vk;
use vkrecord_core::{DescriptorSet, Pipeline, PipelineLayout};

use super::BufferSource;
use crate::compile::Encode;
use crate::error::RecordError;
use crate::session::RecordingSession;

#[derive(Debug, Clone)]
pub struct BindPipeline {
    pub bind_point: vk::PipelineBindPoint,
    pub pipeline: Arc<Pipeline>,
}

impl Encode for BindPipeline {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let pipeline = self.pipeline.handle();
        session.issue("vkCmdBindPipeline", |device, cb| {
            device.cmd_bind_pipeline(cb, self.bind_point, pipeline)
        })?;
        session.ledger().add(self.pipeline);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SetViewport {
    pub first_viewport: u32,
    pub viewports: Vec<vk::Viewport>,
}

impl Encode for SetViewport {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        session.issue("vkCmdSetViewport", |device, cb| {
            device.cmd_set_viewport(cb, self.first_viewport, &self.viewports)
        })
    }
}

#[derive(Debug, Clone)]
pub struct SetScissor {
    pub first_scissor: u32,
    pub scissors: Vec<vk::Rect2D>,
}

impl Encode for SetScissor {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        session.issue("vkCmdSetScissor", |device, cb| {
            device.cmd_set_scissor(cb, self.first_scissor, &self.scissors)
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SetLineWidth {
    pub line_width: f32,
}

impl Encode for SetLineWidth {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        session.issue("vkCmdSetLineWidth", |device, cb| {
            device.cmd_set_line_width(cb, self.line_width)
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SetDepthBias {
    pub constant_factor: f32,
    pub clamp: f32,
    pub slope_factor: f32,
}

impl Encode for SetDepthBias {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        session.issue("vkCmdSetDepthBias", |device, cb| {
            device.cmd_set_depth_bias(cb, self.constant_factor, self.clamp, self.slope_factor)
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SetBlendConstants {
    pub blend_constants: [f32; 4],
}

impl Encode for SetBlendConstants {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        session.issue("vkCmdSetBlendConstants", |device, cb| {
            device.cmd_set_blend_constants(cb, &self.blend_constants)
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SetDepthBounds {
    pub min_depth_bounds: f32,
    pub max_depth_bounds: f32,
}

impl Encode for SetDepthBounds {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        session.issue("vkCmdSetDepthBounds", |device, cb| {
            device.cmd_set_depth_bounds(cb, self.min_depth_bounds, self.max_depth_bounds)
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SetStencilCompareMask {
    pub face_mask: vk::StencilFaceFlags,
    pub compare_mask: u32,
}

impl Encode for SetStencilCompareMask {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        session.issue("vkCmdSetStencilCompareMask", |device, cb| {
            device.cmd_set_stencil_compare_mask(cb, self.face_mask, self.compare_mask)
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SetStencilWriteMask {
    pub face_mask: vk::StencilFaceFlags,
    pub write_mask: u32,
}

impl Encode for SetStencilWriteMask {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        session.issue("vkCmdSetStencilWriteMask", |device, cb| {
            device.cmd_set_stencil_write_mask(cb, self.face_mask, self.write_mask)
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SetStencilReference {
    pub face_mask: vk::StencilFaceFlags,
    pub reference: u32,
}

impl Encode for SetStencilReference {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        session.issue("vkCmdSetStencilReference", |device, cb| {
            device.cmd_set_stencil_reference(cb, self.face_mask, self.reference)
        })
    }
}

#[derive(Debug, Clone)]
pub struct BindDescriptorSets {
    pub bind_point: vk::PipelineBindPoint,
    pub layout: Arc<PipelineLayout>,
    pub first_set: u32,
    pub descriptor_sets: Vec<Arc<DescriptorSet>>,
    pub dynamic_offsets: Vec<u32>,
}

impl Encode for BindDescriptorSets {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let sets: Vec<vk::DescriptorSet> =
            self.descriptor_sets.iter().map(|set| set.handle()).collect();
        let layout = self.layout.handle();
        session.issue("vkCmdBindDescriptorSets", |device, cb| {
            device.cmd_bind_descriptor_sets(
                cb,
                self.bind_point,
                layout,
                self.first_set,
                &sets,
                &self.dynamic_offsets,
            )
        })?;
        session.ledger().add(self.layout);
        session.ledger().add_all(self.descriptor_sets);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct BindIndexBuffer {
    pub buffer: BufferSource,
    pub offset: vk::DeviceSize,
    pub index_type: vk::IndexType,
}

/// Bind an index buffer, either resident or staged.
pub fn bind_index_buffer(
    buffer: impl Into<BufferSource>,
    offset: vk::DeviceSize,
    index_type: vk::IndexType,
) -> BindIndexBuffer {
    BindIndexBuffer {
        buffer: buffer.into(),
        offset,
        index_type,
    }
}

impl Encode for BindIndexBuffer {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let buffer = self.buffer.handle();
        session.issue("vkCmdBindIndexBuffer", |device, cb| {
            device.cmd_bind_index_buffer(cb, buffer, self.offset, self.index_type)
        })?;
        self.buffer.retain(session);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct BindVertexBuffers {
    pub first_binding: u32,
    pub buffers: Vec<BufferSource>,
    pub offsets: Vec<vk::DeviceSize>,
}

/// Bind vertex buffers starting at `first_binding`. Resident and staged
/// buffers can be mixed.
pub fn bind_vertex_buffers<I, B>(
    first_binding: u32,
    buffers: I,
    offsets: Vec<vk::DeviceSize>,
) -> BindVertexBuffers
where
    I: IntoIterator<Item = B>,
    B: Into<BufferSource>,
{
    BindVertexBuffers {
        first_binding,
        buffers: buffers.into_iter().map(Into::into).collect(),
        offsets,
    }
}

impl Encode for BindVertexBuffers {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let buffers: Vec<vk::Buffer> = self.buffers.iter().map(BufferSource::handle).collect();
        session.issue("vkCmdBindVertexBuffers", |device, cb| {
            device.cmd_bind_vertex_buffers(cb, self.first_binding, &buffers, &self.offsets)
        })?;
        for buffer in self.buffers {
            buffer.retain(session);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PushConstants {
    pub layout: Arc<PipelineLayout>,
    pub stage_flags: vk::ShaderStageFlags,
    pub offset: u32,
    pub values: Vec<u8>,
}

/// Push constants from any plain-old-data slice.
pub fn push_constants<T: bytemuck::Pod>(
    layout: Arc<PipelineLayout>,
    stage_flags: vk::ShaderStageFlags,
    offset: u32,
    values: &[T],
) -> PushConstants {
    PushConstants {
        layout,
        stage_flags,
        offset,
        values: bytemuck::cast_slice(values).to_vec(),
    }
}

impl Encode for PushConstants {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let layout = self.layout.handle();
        session.issue("vkCmdPushConstants", |device, cb| {
            device.cmd_push_constants(cb, layout, self.stage_flags, self.offset, &self.values)
        })?;
        session.ledger().add(self.layout);
        Ok(())
    }
}
