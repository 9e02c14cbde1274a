//! Instrumented native call boundary for driving the recorder without a GPU.

#![allow(dead_code)]

use std::sync::Arc;

use ash::prelude::VkResult;
use ash::vk;
use ash::vk::Handle;
use parking_lot::Mutex;

use vkrecord::{DeviceCommands, Recorder};

/// One native call as observed by [`CallLog`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Begin {
        usage: vk::CommandBufferUsageFlags,
        inherits: bool,
    },
    End,
    BindPipeline(vk::Pipeline),
    BindDescriptorSets {
        layout: vk::PipelineLayout,
        sets: Vec<vk::DescriptorSet>,
    },
    BindIndexBuffer(vk::Buffer),
    BindVertexBuffers(Vec<vk::Buffer>),
    PushConstants(Vec<u8>),
    Draw(u32, u32, u32, u32),
    DrawIndexed(u32, u32, u32, i32, u32),
    DrawIndirect(vk::Buffer),
    Dispatch(u32, u32, u32),
    CopyBuffer {
        src: vk::Buffer,
        dst: vk::Buffer,
    },
    UpdateBuffer(Vec<u8>),
    PipelineBarrier {
        buffers: Vec<vk::Buffer>,
        images: Vec<vk::Image>,
    },
    WaitEvents(Vec<vk::Event>),
    BeginRenderPass {
        render_pass: vk::RenderPass,
        framebuffer: vk::Framebuffer,
        clear_values: u32,
    },
    NextSubpass,
    EndRenderPass,
    ExecuteCommands(Vec<vk::CommandBuffer>),
    SetViewport {
        first: u32,
        extents: Vec<(f32, f32)>,
    },
    SetScissor {
        first: u32,
        extents: Vec<(u32, u32)>,
    },
    SetLineWidth(f32),
    SetDepthBias(f32, f32, f32),
    SetBlendConstants([f32; 4]),
    SetDepthBounds(f32, f32),
    SetStencilCompareMask(vk::StencilFaceFlags, u32),
    SetStencilWriteMask(vk::StencilFaceFlags, u32),
    SetStencilReference(vk::StencilFaceFlags, u32),
    DrawIndexedIndirect {
        buffer: vk::Buffer,
        offset: vk::DeviceSize,
        draw_count: u32,
        stride: u32,
    },
    DispatchIndirect(vk::Buffer, vk::DeviceSize),
    CopyImage {
        src: vk::Image,
        src_layout: vk::ImageLayout,
        dst: vk::Image,
        dst_layout: vk::ImageLayout,
    },
    BlitImage {
        src: vk::Image,
        dst: vk::Image,
        regions: usize,
        filter: vk::Filter,
    },
    CopyBufferToImage {
        src: vk::Buffer,
        dst: vk::Image,
        dst_layout: vk::ImageLayout,
    },
    CopyImageToBuffer {
        src: vk::Image,
        src_layout: vk::ImageLayout,
        dst: vk::Buffer,
    },
    FillBuffer {
        dst: vk::Buffer,
        offset: vk::DeviceSize,
        size: vk::DeviceSize,
        data: u32,
    },
    ClearColorImage {
        image: vk::Image,
        layout: vk::ImageLayout,
        color: [u32; 4],
    },
    ClearDepthStencilImage {
        image: vk::Image,
        layout: vk::ImageLayout,
        depth: f32,
        stencil: u32,
    },
    ClearAttachments {
        attachments: Vec<(vk::ImageAspectFlags, u32)>,
        rects: usize,
    },
    ResolveImage {
        src: vk::Image,
        dst: vk::Image,
    },
    SetEvent(vk::Event, vk::PipelineStageFlags),
    ResetEvent(vk::Event, vk::PipelineStageFlags),
    BeginQuery(vk::QueryPool, u32),
    EndQuery(vk::QueryPool, u32),
    ResetQueryPool(vk::QueryPool, u32, u32),
    WriteTimestamp(vk::PipelineStageFlags, vk::QueryPool, u32),
    CopyQueryPoolResults {
        pool: vk::QueryPool,
        first: u32,
        count: u32,
        dst: vk::Buffer,
        offset: vk::DeviceSize,
        stride: vk::DeviceSize,
    },
}

/// Records every native call in issue order, per command buffer.
#[derive(Default)]
pub struct CallLog {
    calls: Mutex<Vec<(vk::CommandBuffer, Call)>>,
    fail_on: Mutex<Option<&'static str>>,
}

impl CallLog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make the named native call report `ERROR_OUT_OF_DEVICE_MEMORY`.
    pub fn fail_on(&self, name: &'static str) {
        *self.fail_on.lock() = Some(name);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().iter().map(|(_, c)| c.clone()).collect()
    }

    pub fn calls_for(&self, command_buffer: vk::CommandBuffer) -> Vec<Call> {
        self.calls
            .lock()
            .iter()
            .filter(|(cb, _)| *cb == command_buffer)
            .map(|(_, c)| c.clone())
            .collect()
    }

    /// Calls between Begin and End, for the common single-buffer case.
    pub fn recorded(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::Begin { .. } | Call::End))
            .collect()
    }

    fn push(&self, cb: vk::CommandBuffer, name: &'static str, call: Call) -> VkResult<()> {
        if *self.fail_on.lock() == Some(name) {
            return Err(vk::Result::ERROR_OUT_OF_DEVICE_MEMORY);
        }
        self.calls.lock().push((cb, call));
        Ok(())
    }
}

pub fn recorder(log: &Arc<CallLog>) -> Recorder {
    vkrecord_common::logging::try_init_logging();
    Recorder::new(log.clone())
}

pub fn raw<H: Handle>(raw: u64) -> H {
    H::from_raw(raw)
}

impl DeviceCommands for CallLog {
    fn begin_command_buffer(
        &self,
        cb: vk::CommandBuffer,
        begin_info: &vk::CommandBufferBeginInfo<'_>,
    ) -> VkResult<()> {
        let call = Call::Begin {
            usage: begin_info.flags,
            inherits: !begin_info.p_inheritance_info.is_null(),
        };
        self.push(cb, "vkBeginCommandBuffer", call)
    }

    fn end_command_buffer(&self, cb: vk::CommandBuffer) -> VkResult<()> {
        self.push(cb, "vkEndCommandBuffer", Call::End)
    }

    fn cmd_bind_pipeline(
        &self,
        cb: vk::CommandBuffer,
        _bind_point: vk::PipelineBindPoint,
        pipeline: vk::Pipeline,
    ) -> VkResult<()> {
        self.push(cb, "vkCmdBindPipeline", Call::BindPipeline(pipeline))
    }

    fn cmd_set_viewport(
        &self,
        cb: vk::CommandBuffer,
        first: u32,
        viewports: &[vk::Viewport],
    ) -> VkResult<()> {
        let call = Call::SetViewport {
            first,
            extents: viewports.iter().map(|v| (v.width, v.height)).collect(),
        };
        self.push(cb, "vkCmdSetViewport", call)
    }

    fn cmd_set_scissor(
        &self,
        cb: vk::CommandBuffer,
        first: u32,
        scissors: &[vk::Rect2D],
    ) -> VkResult<()> {
        let call = Call::SetScissor {
            first,
            extents: scissors
                .iter()
                .map(|r| (r.extent.width, r.extent.height))
                .collect(),
        };
        self.push(cb, "vkCmdSetScissor", call)
    }

    fn cmd_set_line_width(&self, cb: vk::CommandBuffer, width: f32) -> VkResult<()> {
        self.push(cb, "vkCmdSetLineWidth", Call::SetLineWidth(width))
    }

    fn cmd_set_depth_bias(
        &self,
        cb: vk::CommandBuffer,
        constant: f32,
        clamp: f32,
        slope: f32,
    ) -> VkResult<()> {
        let call = Call::SetDepthBias(constant, clamp, slope);
        self.push(cb, "vkCmdSetDepthBias", call)
    }

    fn cmd_set_blend_constants(&self, cb: vk::CommandBuffer, constants: &[f32; 4]) -> VkResult<()> {
        self.push(cb, "vkCmdSetBlendConstants", Call::SetBlendConstants(*constants))
    }

    fn cmd_set_depth_bounds(&self, cb: vk::CommandBuffer, min: f32, max: f32) -> VkResult<()> {
        self.push(cb, "vkCmdSetDepthBounds", Call::SetDepthBounds(min, max))
    }

    fn cmd_set_stencil_compare_mask(
        &self,
        cb: vk::CommandBuffer,
        face: vk::StencilFaceFlags,
        mask: u32,
    ) -> VkResult<()> {
        let call = Call::SetStencilCompareMask(face, mask);
        self.push(cb, "vkCmdSetStencilCompareMask", call)
    }

    fn cmd_set_stencil_write_mask(
        &self,
        cb: vk::CommandBuffer,
        face: vk::StencilFaceFlags,
        mask: u32,
    ) -> VkResult<()> {
        let call = Call::SetStencilWriteMask(face, mask);
        self.push(cb, "vkCmdSetStencilWriteMask", call)
    }

    fn cmd_set_stencil_reference(
        &self,
        cb: vk::CommandBuffer,
        face: vk::StencilFaceFlags,
        reference: u32,
    ) -> VkResult<()> {
        let call = Call::SetStencilReference(face, reference);
        self.push(cb, "vkCmdSetStencilReference", call)
    }

    fn cmd_bind_descriptor_sets(
        &self,
        cb: vk::CommandBuffer,
        _bind_point: vk::PipelineBindPoint,
        layout: vk::PipelineLayout,
        _first_set: u32,
        descriptor_sets: &[vk::DescriptorSet],
        _dynamic_offsets: &[u32],
    ) -> VkResult<()> {
        let call = Call::BindDescriptorSets {
            layout,
            sets: descriptor_sets.to_vec(),
        };
        self.push(cb, "vkCmdBindDescriptorSets", call)
    }

    fn cmd_bind_index_buffer(
        &self,
        cb: vk::CommandBuffer,
        buffer: vk::Buffer,
        _: vk::DeviceSize,
        _: vk::IndexType,
    ) -> VkResult<()> {
        self.push(cb, "vkCmdBindIndexBuffer", Call::BindIndexBuffer(buffer))
    }

    fn cmd_bind_vertex_buffers(
        &self,
        cb: vk::CommandBuffer,
        _: u32,
        buffers: &[vk::Buffer],
        _: &[vk::DeviceSize],
    ) -> VkResult<()> {
        self.push(cb, "vkCmdBindVertexBuffers", Call::BindVertexBuffers(buffers.to_vec()))
    }

    fn cmd_push_constants(
        &self,
        cb: vk::CommandBuffer,
        _: vk::PipelineLayout,
        _: vk::ShaderStageFlags,
        _: u32,
        values: &[u8],
    ) -> VkResult<()> {
        self.push(cb, "vkCmdPushConstants", Call::PushConstants(values.to_vec()))
    }

    fn cmd_draw(
        &self,
        cb: vk::CommandBuffer,
        vertex_count: u32,
        instance_count: u32,
        first_vertex: u32,
        first_instance: u32,
    ) -> VkResult<()> {
        let call = Call::Draw(vertex_count, instance_count, first_vertex, first_instance);
        self.push(cb, "vkCmdDraw", call)
    }

    fn cmd_draw_indexed(
        &self,
        cb: vk::CommandBuffer,
        index_count: u32,
        instance_count: u32,
        first_index: u32,
        vertex_offset: i32,
        first_instance: u32,
    ) -> VkResult<()> {
        let call = Call::DrawIndexed(
            index_count,
            instance_count,
            first_index,
            vertex_offset,
            first_instance,
        );
        self.push(cb, "vkCmdDrawIndexed", call)
    }

    fn cmd_draw_indirect(
        &self,
        cb: vk::CommandBuffer,
        buffer: vk::Buffer,
        _: vk::DeviceSize,
        _: u32,
        _: u32,
    ) -> VkResult<()> {
        self.push(cb, "vkCmdDrawIndirect", Call::DrawIndirect(buffer))
    }

    fn cmd_draw_indexed_indirect(
        &self,
        cb: vk::CommandBuffer,
        buffer: vk::Buffer,
        offset: vk::DeviceSize,
        draw_count: u32,
        stride: u32,
    ) -> VkResult<()> {
        let call = Call::DrawIndexedIndirect {
            buffer,
            offset,
            draw_count,
            stride,
        };
        self.push(cb, "vkCmdDrawIndexedIndirect", call)
    }

    fn cmd_dispatch(&self, cb: vk::CommandBuffer, x: u32, y: u32, z: u32) -> VkResult<()> {
        self.push(cb, "vkCmdDispatch", Call::Dispatch(x, y, z))
    }

    fn cmd_dispatch_indirect(
        &self,
        cb: vk::CommandBuffer,
        buffer: vk::Buffer,
        offset: vk::DeviceSize,
    ) -> VkResult<()> {
        let call = Call::DispatchIndirect(buffer, offset);
        self.push(cb, "vkCmdDispatchIndirect", call)
    }

    fn cmd_copy_buffer(
        &self,
        cb: vk::CommandBuffer,
        src: vk::Buffer,
        dst: vk::Buffer,
        _: &[vk::BufferCopy],
    ) -> VkResult<()> {
        self.push(cb, "vkCmdCopyBuffer", Call::CopyBuffer { src, dst })
    }

    fn cmd_copy_image(
        &self,
        cb: vk::CommandBuffer,
        src: vk::Image,
        src_layout: vk::ImageLayout,
        dst: vk::Image,
        dst_layout: vk::ImageLayout,
        _: &[vk::ImageCopy],
    ) -> VkResult<()> {
        let call = Call::CopyImage {
            src,
            src_layout,
            dst,
            dst_layout,
        };
        self.push(cb, "vkCmdCopyImage", call)
    }

    fn cmd_blit_image(
        &self,
        cb: vk::CommandBuffer,
        src: vk::Image,
        _: vk::ImageLayout,
        dst: vk::Image,
        _: vk::ImageLayout,
        regions: &[vk::ImageBlit],
        filter: vk::Filter,
    ) -> VkResult<()> {
        let call = Call::BlitImage {
            src,
            dst,
            regions: regions.len(),
            filter,
        };
        self.push(cb, "vkCmdBlitImage", call)
    }

    fn cmd_copy_buffer_to_image(
        &self,
        cb: vk::CommandBuffer,
        src: vk::Buffer,
        dst: vk::Image,
        dst_layout: vk::ImageLayout,
        _: &[vk::BufferImageCopy],
    ) -> VkResult<()> {
        let call = Call::CopyBufferToImage {
            src,
            dst,
            dst_layout,
        };
        self.push(cb, "vkCmdCopyBufferToImage", call)
    }

    fn cmd_copy_image_to_buffer(
        &self,
        cb: vk::CommandBuffer,
        src: vk::Image,
        src_layout: vk::ImageLayout,
        dst: vk::Buffer,
        _: &[vk::BufferImageCopy],
    ) -> VkResult<()> {
        let call = Call::CopyImageToBuffer {
            src,
            src_layout,
            dst,
        };
        self.push(cb, "vkCmdCopyImageToBuffer", call)
    }

    fn cmd_update_buffer(
        &self,
        cb: vk::CommandBuffer,
        _: vk::Buffer,
        _: vk::DeviceSize,
        data: &[u8],
    ) -> VkResult<()> {
        self.push(cb, "vkCmdUpdateBuffer", Call::UpdateBuffer(data.to_vec()))
    }

    fn cmd_fill_buffer(
        &self,
        cb: vk::CommandBuffer,
        dst: vk::Buffer,
        offset: vk::DeviceSize,
        size: vk::DeviceSize,
        data: u32,
    ) -> VkResult<()> {
        let call = Call::FillBuffer {
            dst,
            offset,
            size,
            data,
        };
        self.push(cb, "vkCmdFillBuffer", call)
    }

    fn cmd_clear_color_image(
        &self,
        cb: vk::CommandBuffer,
        image: vk::Image,
        layout: vk::ImageLayout,
        color: &vk::ClearColorValue,
        _: &[vk::ImageSubresourceRange],
    ) -> VkResult<()> {
        // Every member of the union is 16 bytes, so the raw bits are always initialized.
        let color = unsafe { color.uint32 };
        let call = Call::ClearColorImage {
            image,
            layout,
            color,
        };
        self.push(cb, "vkCmdClearColorImage", call)
    }

    fn cmd_clear_depth_stencil_image(
        &self,
        cb: vk::CommandBuffer,
        image: vk::Image,
        layout: vk::ImageLayout,
        value: &vk::ClearDepthStencilValue,
        _: &[vk::ImageSubresourceRange],
    ) -> VkResult<()> {
        let call = Call::ClearDepthStencilImage {
            image,
            layout,
            depth: value.depth,
            stencil: value.stencil,
        };
        self.push(cb, "vkCmdClearDepthStencilImage", call)
    }

    fn cmd_clear_attachments(
        &self,
        cb: vk::CommandBuffer,
        attachments: &[vk::ClearAttachment],
        rects: &[vk::ClearRect],
    ) -> VkResult<()> {
        let call = Call::ClearAttachments {
            attachments: attachments
                .iter()
                .map(|a| (a.aspect_mask, a.color_attachment))
                .collect(),
            rects: rects.len(),
        };
        self.push(cb, "vkCmdClearAttachments", call)
    }

    fn cmd_resolve_image(
        &self,
        cb: vk::CommandBuffer,
        src: vk::Image,
        _: vk::ImageLayout,
        dst: vk::Image,
        _: vk::ImageLayout,
        _: &[vk::ImageResolve],
    ) -> VkResult<()> {
        self.push(cb, "vkCmdResolveImage", Call::ResolveImage { src, dst })
    }

    fn cmd_set_event(
        &self,
        cb: vk::CommandBuffer,
        event: vk::Event,
        stage_mask: vk::PipelineStageFlags,
    ) -> VkResult<()> {
        self.push(cb, "vkCmdSetEvent", Call::SetEvent(event, stage_mask))
    }

    fn cmd_reset_event(
        &self,
        cb: vk::CommandBuffer,
        event: vk::Event,
        stage_mask: vk::PipelineStageFlags,
    ) -> VkResult<()> {
        self.push(cb, "vkCmdResetEvent", Call::ResetEvent(event, stage_mask))
    }

    fn cmd_wait_events(
        &self,
        cb: vk::CommandBuffer,
        events: &[vk::Event],
        _: vk::PipelineStageFlags,
        _: vk::PipelineStageFlags,
        _: &[vk::MemoryBarrier<'_>],
        _: &[vk::BufferMemoryBarrier<'_>],
        _: &[vk::ImageMemoryBarrier<'_>],
    ) -> VkResult<()> {
        self.push(cb, "vkCmdWaitEvents", Call::WaitEvents(events.to_vec()))
    }

    fn cmd_pipeline_barrier(
        &self,
        cb: vk::CommandBuffer,
        _: vk::PipelineStageFlags,
        _: vk::PipelineStageFlags,
        _: vk::DependencyFlags,
        _: &[vk::MemoryBarrier<'_>],
        buffer_memory_barriers: &[vk::BufferMemoryBarrier<'_>],
        image_memory_barriers: &[vk::ImageMemoryBarrier<'_>],
    ) -> VkResult<()> {
        let call = Call::PipelineBarrier {
            buffers: buffer_memory_barriers.iter().map(|b| b.buffer).collect(),
            images: image_memory_barriers.iter().map(|b| b.image).collect(),
        };
        self.push(cb, "vkCmdPipelineBarrier", call)
    }

    fn cmd_begin_query(
        &self,
        cb: vk::CommandBuffer,
        pool: vk::QueryPool,
        query: u32,
        _: vk::QueryControlFlags,
    ) -> VkResult<()> {
        self.push(cb, "vkCmdBeginQuery", Call::BeginQuery(pool, query))
    }

    fn cmd_end_query(
        &self,
        cb: vk::CommandBuffer,
        pool: vk::QueryPool,
        query: u32,
    ) -> VkResult<()> {
        self.push(cb, "vkCmdEndQuery", Call::EndQuery(pool, query))
    }

    fn cmd_reset_query_pool(
        &self,
        cb: vk::CommandBuffer,
        pool: vk::QueryPool,
        first: u32,
        count: u32,
    ) -> VkResult<()> {
        let call = Call::ResetQueryPool(pool, first, count);
        self.push(cb, "vkCmdResetQueryPool", call)
    }

    fn cmd_write_timestamp(
        &self,
        cb: vk::CommandBuffer,
        stage: vk::PipelineStageFlags,
        pool: vk::QueryPool,
        query: u32,
    ) -> VkResult<()> {
        let call = Call::WriteTimestamp(stage, pool, query);
        self.push(cb, "vkCmdWriteTimestamp", call)
    }

    fn cmd_copy_query_pool_results(
        &self,
        cb: vk::CommandBuffer,
        pool: vk::QueryPool,
        first: u32,
        count: u32,
        dst: vk::Buffer,
        offset: vk::DeviceSize,
        stride: vk::DeviceSize,
        _: vk::QueryResultFlags,
    ) -> VkResult<()> {
        let call = Call::CopyQueryPoolResults {
            pool,
            first,
            count,
            dst,
            offset,
            stride,
        };
        self.push(cb, "vkCmdCopyQueryPoolResults", call)
    }

    fn cmd_begin_render_pass(
        &self,
        cb: vk::CommandBuffer,
        begin_info: &vk::RenderPassBeginInfo<'_>,
        _: vk::SubpassContents,
    ) -> VkResult<()> {
        let call = Call::BeginRenderPass {
            render_pass: begin_info.render_pass,
            framebuffer: begin_info.framebuffer,
            clear_values: begin_info.clear_value_count,
        };
        self.push(cb, "vkCmdBeginRenderPass", call)
    }

    fn cmd_next_subpass(&self, cb: vk::CommandBuffer, _: vk::SubpassContents) -> VkResult<()> {
        self.push(cb, "vkCmdNextSubpass", Call::NextSubpass)
    }

    fn cmd_end_render_pass(&self, cb: vk::CommandBuffer) -> VkResult<()> {
        self.push(cb, "vkCmdEndRenderPass", Call::EndRenderPass)
    }

    fn cmd_execute_commands(
        &self,
        cb: vk::CommandBuffer,
        secondary_command_buffers: &[vk::CommandBuffer],
    ) -> VkResult<()> {
        let call = Call::ExecuteCommands(secondary_command_buffers.to_vec());
        self.push(cb, "vkCmdExecuteCommands", call)
    }
}
