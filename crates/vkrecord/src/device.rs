//! The native call boundary.
//!
//! Every native entry point the compiler issues goes through [`DeviceCommands`],
//! one method per `vkCmd*` function plus begin/end of the command buffer. The
//! implementation for [`ash::Device`] forwards straight to the driver; other
//! implementations (call recorders, remoting layers) can stand in for it.

use ash::prelude::VkResult;
use ash::vk;

pub trait DeviceCommands: Send + Sync {
    fn begin_command_buffer(
        &self,
        command_buffer: vk::CommandBuffer,
        begin_info: &vk::CommandBufferBeginInfo<'_>,
    ) -> VkResult<()>;

    fn end_command_buffer(&self, command_buffer: vk::CommandBuffer) -> VkResult<()>;

    // ── State ───────────────────────────────────────────────

    fn cmd_bind_pipeline(
        &self,
        command_buffer: vk::CommandBuffer,
        bind_point: vk::PipelineBindPoint,
        pipeline: vk::Pipeline,
    ) -> VkResult<()>;

    fn cmd_set_viewport(
        &self,
        command_buffer: vk::CommandBuffer,
        first_viewport: u32,
        viewports: &[vk::Viewport],
    ) -> VkResult<()>;

    fn cmd_set_scissor(
        &self,
        command_buffer: vk::CommandBuffer,
        first_scissor: u32,
        scissors: &[vk::Rect2D],
    ) -> VkResult<()>;

    fn cmd_set_line_width(&self, command_buffer: vk::CommandBuffer, line_width: f32)
        -> VkResult<()>;

    fn cmd_set_depth_bias(
        &self,
        command_buffer: vk::CommandBuffer,
        constant_factor: f32,
        clamp: f32,
        slope_factor: f32,
    ) -> VkResult<()>;

    fn cmd_set_blend_constants(
        &self,
        command_buffer: vk::CommandBuffer,
        blend_constants: &[f32; 4],
    ) -> VkResult<()>;

    fn cmd_set_depth_bounds(
        &self,
        command_buffer: vk::CommandBuffer,
        min_depth_bounds: f32,
        max_depth_bounds: f32,
    ) -> VkResult<()>;

    fn cmd_set_stencil_compare_mask(
        &self,
        command_buffer: vk::CommandBuffer,
        face_mask: vk::StencilFaceFlags,
        compare_mask: u32,
    ) -> VkResult<()>;

    fn cmd_set_stencil_write_mask(
        &self,
        command_buffer: vk::CommandBuffer,
        face_mask: vk::StencilFaceFlags,
        write_mask: u32,
    ) -> VkResult<()>;

    fn cmd_set_stencil_reference(
        &self,
        command_buffer: vk::CommandBuffer,
        face_mask: vk::StencilFaceFlags,
        reference: u32,
    ) -> VkResult<()>;

    fn cmd_bind_descriptor_sets(
        &self,
        command_buffer: vk::CommandBuffer,
        bind_point: vk::PipelineBindPoint,
        layout: vk::PipelineLayout,
        first_set: u32,
        descriptor_sets: &[vk::DescriptorSet],
        dynamic_offsets: &[u32],
    ) -> VkResult<()>;

    fn cmd_bind_index_buffer(
        &self,
        command_buffer: vk::CommandBuffer,
        buffer: vk::Buffer,
        offset: vk::DeviceSize,
        index_type: vk::IndexType,
    ) -> VkResult<()>;

    fn cmd_bind_vertex_buffers(
        &self,
        command_buffer: vk::CommandBuffer,
        first_binding: u32,
        buffers: &[vk::Buffer],
        offsets: &[vk::DeviceSize],
    ) -> VkResult<()>;

    fn cmd_push_constants(
        &self,
        command_buffer: vk::CommandBuffer,
        layout: vk::PipelineLayout,
        stage_flags: vk::ShaderStageFlags,
        offset: u32,
        values: &[u8],
    ) -> VkResult<()>;

    // ── Draw / dispatch ─────────────────────────────────────

    fn cmd_draw(
        &self,
        command_buffer: vk::CommandBuffer,
        vertex_count: u32,
        instance_count: u32,
        first_vertex: u32,
        first_instance: u32,
    ) -> VkResult<()>;

    fn cmd_draw_indexed(
        &self,
        command_buffer: vk::CommandBuffer,
        index_count: u32,
        instance_count: u32,
        first_index: u32,
        vertex_offset: i32,
        first_instance: u32,
    ) -> VkResult<()>;

    fn cmd_draw_indirect(
        &self,
        command_buffer: vk::CommandBuffer,
        buffer: vk::Buffer,
        offset: vk::DeviceSize,
        draw_count: u32,
        stride: u32,
    ) -> VkResult<()>;

    fn cmd_draw_indexed_indirect(
        &self,
        command_buffer: vk::CommandBuffer,
        buffer: vk::Buffer,
        offset: vk::DeviceSize,
        draw_count: u32,
        stride: u32,
    ) -> VkResult<()>;

    fn cmd_dispatch(
        &self,
        command_buffer: vk::CommandBuffer,
        group_count_x: u32,
        group_count_y: u32,
        group_count_z: u32,
    ) -> VkResult<()>;

    fn cmd_dispatch_indirect(
        &self,
        command_buffer: vk::CommandBuffer,
        buffer: vk::Buffer,
        offset: vk::DeviceSize,
    ) -> VkResult<()>;

    // ── Transfer ────────────────────────────────────────────

    fn cmd_copy_buffer(
        &self,
        command_buffer: vk::CommandBuffer,
        src: vk::Buffer,
        dst: vk::Buffer,
        regions: &[vk::BufferCopy],
    ) -> VkResult<()>;

    fn cmd_copy_image(
        &self,
        command_buffer: vk::CommandBuffer,
        src: vk::Image,
        src_layout: vk::ImageLayout,
        dst: vk::Image,
        dst_layout: vk::ImageLayout,
        regions: &[vk::ImageCopy],
    ) -> VkResult<()>;

    #[allow(clippy::too_many_arguments)]
    fn cmd_blit_image(
        &self,
        command_buffer: vk::CommandBuffer,
        src: vk::Image,
        src_layout: vk::ImageLayout,
        dst: vk::Image,
        dst_layout: vk::ImageLayout,
        regions: &[vk::ImageBlit],
        filter: vk::Filter,
    ) -> VkResult<()>;

    fn cmd_copy_buffer_to_image(
        &self,
        command_buffer: vk::CommandBuffer,
        src: vk::Buffer,
        dst: vk::Image,
        dst_layout: vk::ImageLayout,
        regions: &[vk::BufferImageCopy],
    ) -> VkResult<()>;

    fn cmd_copy_image_to_buffer(
        &self,
        command_buffer: vk::CommandBuffer,
        src: vk::Image,
        src_layout: vk::ImageLayout,
        dst: vk::Buffer,
        regions: &[vk::BufferImageCopy],
    ) -> VkResult<()>;

    fn cmd_update_buffer(
        &self,
        command_buffer: vk::CommandBuffer,
        dst: vk::Buffer,
        dst_offset: vk::DeviceSize,
        data: &[u8],
    ) -> VkResult<()>;

    fn cmd_fill_buffer(
        &self,
        command_buffer: vk::CommandBuffer,
        dst: vk::Buffer,
        dst_offset: vk::DeviceSize,
        size: vk::DeviceSize,
        data: u32,
    ) -> VkResult<()>;

    fn cmd_clear_color_image(
        &self,
        command_buffer: vk::CommandBuffer,
        image: vk::Image,
        layout: vk::ImageLayout,
        color: &vk::ClearColorValue,
        ranges: &[vk::ImageSubresourceRange],
    ) -> VkResult<()>;

    fn cmd_clear_depth_stencil_image(
        &self,
        command_buffer: vk::CommandBuffer,
        image: vk::Image,
        layout: vk::ImageLayout,
        depth_stencil: &vk::ClearDepthStencilValue,
        ranges: &[vk::ImageSubresourceRange],
    ) -> VkResult<()>;

    fn cmd_clear_attachments(
        &self,
        command_buffer: vk::CommandBuffer,
        attachments: &[vk::ClearAttachment],
        rects: &[vk::ClearRect],
    ) -> VkResult<()>;

    fn cmd_resolve_image(
        &self,
        command_buffer: vk::CommandBuffer,
        src: vk::Image,
        src_layout: vk::ImageLayout,
        dst: vk::Image,
        dst_layout: vk::ImageLayout,
        regions: &[vk::ImageResolve],
    ) -> VkResult<()>;

    // ── Synchronization ─────────────────────────────────────

    fn cmd_set_event(
        &self,
        command_buffer: vk::CommandBuffer,
        event: vk::Event,
        stage_mask: vk::PipelineStageFlags,
    ) -> VkResult<()>;

    fn cmd_reset_event(
        &self,
        command_buffer: vk::CommandBuffer,
        event: vk::Event,
        stage_mask: vk::PipelineStageFlags,
    ) -> VkResult<()>;

    #[allow(clippy::too_many_arguments)]
    fn cmd_wait_events(
        &self,
        command_buffer: vk::CommandBuffer,
        events: &[vk::Event],
        src_stage_mask: vk::PipelineStageFlags,
        dst_stage_mask: vk::PipelineStageFlags,
        memory_barriers: &[vk::MemoryBarrier<'_>],
        buffer_memory_barriers: &[vk::BufferMemoryBarrier<'_>],
        image_memory_barriers: &[vk::ImageMemoryBarrier<'_>],
    ) -> VkResult<()>;

    #[allow(clippy::too_many_arguments)]
    fn cmd_pipeline_barrier(
        &self,
        command_buffer: vk::CommandBuffer,
        src_stage_mask: vk::PipelineStageFlags,
        dst_stage_mask: vk::PipelineStageFlags,
        dependency_flags: vk::DependencyFlags,
        memory_barriers: &[vk::MemoryBarrier<'_>],
        buffer_memory_barriers: &[vk::BufferMemoryBarrier<'_>],
        image_memory_barriers: &[vk::ImageMemoryBarrier<'_>],
    ) -> VkResult<()>;

    // ── Queries ─────────────────────────────────────────────

    fn cmd_begin_query(
        &self,
        command_buffer: vk::CommandBuffer,
        query_pool: vk::QueryPool,
        query: u32,
        flags: vk::QueryControlFlags,
    ) -> VkResult<()>;

    fn cmd_end_query(
        &self,
        command_buffer: vk::CommandBuffer,
        query_pool: vk::QueryPool,
        query: u32,
    ) -> VkResult<()>;

    fn cmd_reset_query_pool(
        &self,
        command_buffer: vk::CommandBuffer,
        query_pool: vk::QueryPool,
        first_query: u32,
        query_count: u32,
    ) -> VkResult<()>;

    fn cmd_write_timestamp(
        &self,
        command_buffer: vk::CommandBuffer,
        pipeline_stage: vk::PipelineStageFlags,
        query_pool: vk::QueryPool,
        query: u32,
    ) -> VkResult<()>;

    #[allow(clippy::too_many_arguments)]
    fn cmd_copy_query_pool_results(
        &self,
        command_buffer: vk::CommandBuffer,
        query_pool: vk::QueryPool,
        first_query: u32,
        query_count: u32,
        dst: vk::Buffer,
        dst_offset: vk::DeviceSize,
        stride: vk::DeviceSize,
        flags: vk::QueryResultFlags,
    ) -> VkResult<()>;

    // ── Render passes ───────────────────────────────────────

    fn cmd_begin_render_pass(
        &self,
        command_buffer: vk::CommandBuffer,
        begin_info: &vk::RenderPassBeginInfo<'_>,
        contents: vk::SubpassContents,
    ) -> VkResult<()>;

    fn cmd_next_subpass(
        &self,
        command_buffer: vk::CommandBuffer,
        contents: vk::SubpassContents,
    ) -> VkResult<()>;

    fn cmd_end_render_pass(&self, command_buffer: vk::CommandBuffer) -> VkResult<()>;

    fn cmd_execute_commands(
        &self,
        command_buffer: vk::CommandBuffer,
        secondary_command_buffers: &[vk::CommandBuffer],
    ) -> VkResult<()>;
}

// SAFETY (all methods below): handles reaching this impl come from resources
// that the recording session keeps alive in its reference ledger, and the
// command buffer is exclusively locked by that session while it records.
impl DeviceCommands for ash::Device {
    fn begin_command_buffer(
        &self,
        command_buffer: vk::CommandBuffer,
        begin_info: &vk::CommandBufferBeginInfo<'_>,
    ) -> VkResult<()> {
        unsafe { ash::Device::begin_command_buffer(self, command_buffer, begin_info) }
    }

    fn end_command_buffer(&self, command_buffer: vk::CommandBuffer) -> VkResult<()> {
        unsafe { ash::Device::end_command_buffer(self, command_buffer) }
    }

    fn cmd_bind_pipeline(
        &self,
        command_buffer: vk::CommandBuffer,
        bind_point: vk::PipelineBindPoint,
        pipeline: vk::Pipeline,
    ) -> VkResult<()> {
        unsafe { ash::Device::cmd_bind_pipeline(self, command_buffer, bind_point, pipeline) };
        Ok(())
    }

    fn cmd_set_viewport(
        &self,
        command_buffer: vk::CommandBuffer,
        first_viewport: u32,
        viewports: &[vk::Viewport],
    ) -> VkResult<()> {
        unsafe { ash::Device::cmd_set_viewport(self, command_buffer, first_viewport, viewports) };
        Ok(())
    }

    fn cmd_set_scissor(
        &self,
        command_buffer: vk::CommandBuffer,
        first_scissor: u32,
        scissors: &[vk::Rect2D],
    ) -> VkResult<()> {
        unsafe { ash::Device::cmd_set_scissor(self, command_buffer, first_scissor, scissors) };
        Ok(())
    }

    fn cmd_set_line_width(
        &self,
        command_buffer: vk::CommandBuffer,
        line_width: f32,
    ) -> VkResult<()> {
        unsafe { ash::Device::cmd_set_line_width(self, command_buffer, line_width) };
        Ok(())
    }

    fn cmd_set_depth_bias(
        &self,
        command_buffer: vk::CommandBuffer,
        constant_factor: f32,
        clamp: f32,
        slope_factor: f32,
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_set_depth_bias(
                self,
                command_buffer,
                constant_factor,
                clamp,
                slope_factor,
            )
        };
        Ok(())
    }

    fn cmd_set_blend_constants(
        &self,
        command_buffer: vk::CommandBuffer,
        blend_constants: &[f32; 4],
    ) -> VkResult<()> {
        unsafe { ash::Device::cmd_set_blend_constants(self, command_buffer, blend_constants) };
        Ok(())
    }

    fn cmd_set_depth_bounds(
        &self,
        command_buffer: vk::CommandBuffer,
        min_depth_bounds: f32,
        max_depth_bounds: f32,
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_set_depth_bounds(
                self,
                command_buffer,
                min_depth_bounds,
                max_depth_bounds,
            )
        };
        Ok(())
    }

    fn cmd_set_stencil_compare_mask(
        &self,
        command_buffer: vk::CommandBuffer,
        face_mask: vk::StencilFaceFlags,
        compare_mask: u32,
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_set_stencil_compare_mask(self, command_buffer, face_mask, compare_mask)
        };
        Ok(())
    }

    fn cmd_set_stencil_write_mask(
        &self,
        command_buffer: vk::CommandBuffer,
        face_mask: vk::StencilFaceFlags,
        write_mask: u32,
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_set_stencil_write_mask(self, command_buffer, face_mask, write_mask)
        };
        Ok(())
    }

    fn cmd_set_stencil_reference(
        &self,
        command_buffer: vk::CommandBuffer,
        face_mask: vk::StencilFaceFlags,
        reference: u32,
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_set_stencil_reference(self, command_buffer, face_mask, reference)
        };
        Ok(())
    }

    fn cmd_bind_descriptor_sets(
        &self,
        command_buffer: vk::CommandBuffer,
        bind_point: vk::PipelineBindPoint,
        layout: vk::PipelineLayout,
        first_set: u32,
        descriptor_sets: &[vk::DescriptorSet],
        dynamic_offsets: &[u32],
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_bind_descriptor_sets(
                self,
                command_buffer,
                bind_point,
                layout,
                first_set,
                descriptor_sets,
                dynamic_offsets,
            )
        };
        Ok(())
    }

    fn cmd_bind_index_buffer(
        &self,
        command_buffer: vk::CommandBuffer,
        buffer: vk::Buffer,
        offset: vk::DeviceSize,
        index_type: vk::IndexType,
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_bind_index_buffer(self, command_buffer, buffer, offset, index_type)
        };
        Ok(())
    }

    fn cmd_bind_vertex_buffers(
        &self,
        command_buffer: vk::CommandBuffer,
        first_binding: u32,
        buffers: &[vk::Buffer],
        offsets: &[vk::DeviceSize],
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_bind_vertex_buffers(
                self,
                command_buffer,
                first_binding,
                buffers,
                offsets,
            )
        };
        Ok(())
    }

    fn cmd_push_constants(
        &self,
        command_buffer: vk::CommandBuffer,
        layout: vk::PipelineLayout,
        stage_flags: vk::ShaderStageFlags,
        offset: u32,
        values: &[u8],
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_push_constants(
                self,
                command_buffer,
                layout,
                stage_flags,
                offset,
                values,
            )
        };
        Ok(())
    }

    fn cmd_draw(
        &self,
        command_buffer: vk::CommandBuffer,
        vertex_count: u32,
        instance_count: u32,
        first_vertex: u32,
        first_instance: u32,
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_draw(
                self,
                command_buffer,
                vertex_count,
                instance_count,
                first_vertex,
                first_instance,
            )
        };
        Ok(())
    }

    fn cmd_draw_indexed(
        &self,
        command_buffer: vk::CommandBuffer,
        index_count: u32,
        instance_count: u32,
        first_index: u32,
        vertex_offset: i32,
        first_instance: u32,
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_draw_indexed(
                self,
                command_buffer,
                index_count,
                instance_count,
                first_index,
                vertex_offset,
                first_instance,
            )
        };
        Ok(())
    }

    fn cmd_draw_indirect(
        &self,
        command_buffer: vk::CommandBuffer,
        buffer: vk::Buffer,
        offset: vk::DeviceSize,
        draw_count: u32,
        stride: u32,
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_draw_indirect(self, command_buffer, buffer, offset, draw_count, stride)
        };
        Ok(())
    }

    fn cmd_draw_indexed_indirect(
        &self,
        command_buffer: vk::CommandBuffer,
        buffer: vk::Buffer,
        offset: vk::DeviceSize,
        draw_count: u32,
        stride: u32,
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_draw_indexed_indirect(
                self,
                command_buffer,
                buffer,
                offset,
                draw_count,
                stride,
            )
        };
        Ok(())
    }

    fn cmd_dispatch(
        &self,
        command_buffer: vk::CommandBuffer,
        group_count_x: u32,
        group_count_y: u32,
        group_count_z: u32,
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_dispatch(
                self,
                command_buffer,
                group_count_x,
                group_count_y,
                group_count_z,
            )
        };
        Ok(())
    }

    fn cmd_dispatch_indirect(
        &self,
        command_buffer: vk::CommandBuffer,
        buffer: vk::Buffer,
        offset: vk::DeviceSize,
    ) -> VkResult<()> {
        unsafe { ash::Device::cmd_dispatch_indirect(self, command_buffer, buffer, offset) };
        Ok(())
    }

    fn cmd_copy_buffer(
        &self,
        command_buffer: vk::CommandBuffer,
        src: vk::Buffer,
        dst: vk::Buffer,
        regions: &[vk::BufferCopy],
    ) -> VkResult<()> {
        unsafe { ash::Device::cmd_copy_buffer(self, command_buffer, src, dst, regions) };
        Ok(())
    }

    fn cmd_copy_image(
        &self,
        command_buffer: vk::CommandBuffer,
        src: vk::Image,
        src_layout: vk::ImageLayout,
        dst: vk::Image,
        dst_layout: vk::ImageLayout,
        regions: &[vk::ImageCopy],
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_copy_image(
                self,
                command_buffer,
                src,
                src_layout,
                dst,
                dst_layout,
                regions,
            )
        };
        Ok(())
    }

    fn cmd_blit_image(
        &self,
        command_buffer: vk::CommandBuffer,
        src: vk::Image,
        src_layout: vk::ImageLayout,
        dst: vk::Image,
        dst_layout: vk::ImageLayout,
        regions: &[vk::ImageBlit],
        filter: vk::Filter,
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_blit_image(
                self,
                command_buffer,
                src,
                src_layout,
                dst,
                dst_layout,
                regions,
                filter,
            )
        };
        Ok(())
    }

    fn cmd_copy_buffer_to_image(
        &self,
        command_buffer: vk::CommandBuffer,
        src: vk::Buffer,
        dst: vk::Image,
        dst_layout: vk::ImageLayout,
        regions: &[vk::BufferImageCopy],
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_copy_buffer_to_image(
                self,
                command_buffer,
                src,
                dst,
                dst_layout,
                regions,
            )
        };
        Ok(())
    }

    fn cmd_copy_image_to_buffer(
        &self,
        command_buffer: vk::CommandBuffer,
        src: vk::Image,
        src_layout: vk::ImageLayout,
        dst: vk::Buffer,
        regions: &[vk::BufferImageCopy],
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_copy_image_to_buffer(
                self,
                command_buffer,
                src,
                src_layout,
                dst,
                regions,
            )
        };
        Ok(())
    }

    fn cmd_update_buffer(
        &self,
        command_buffer: vk::CommandBuffer,
        dst: vk::Buffer,
        dst_offset: vk::DeviceSize,
        data: &[u8],
    ) -> VkResult<()> {
        unsafe { ash::Device::cmd_update_buffer(self, command_buffer, dst, dst_offset, data) };
        Ok(())
    }

    fn cmd_fill_buffer(
        &self,
        command_buffer: vk::CommandBuffer,
        dst: vk::Buffer,
        dst_offset: vk::DeviceSize,
        size: vk::DeviceSize,
        data: u32,
    ) -> VkResult<()> {
        unsafe { ash::Device::cmd_fill_buffer(self, command_buffer, dst, dst_offset, size, data) };
        Ok(())
    }

    fn cmd_clear_color_image(
        &self,
        command_buffer: vk::CommandBuffer,
        image: vk::Image,
        layout: vk::ImageLayout,
        color: &vk::ClearColorValue,
        ranges: &[vk::ImageSubresourceRange],
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_clear_color_image(self, command_buffer, image, layout, color, ranges)
        };
        Ok(())
    }

    fn cmd_clear_depth_stencil_image(
        &self,
        command_buffer: vk::CommandBuffer,
        image: vk::Image,
        layout: vk::ImageLayout,
        depth_stencil: &vk::ClearDepthStencilValue,
        ranges: &[vk::ImageSubresourceRange],
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_clear_depth_stencil_image(
                self,
                command_buffer,
                image,
                layout,
                depth_stencil,
                ranges,
            )
        };
        Ok(())
    }

    fn cmd_clear_attachments(
        &self,
        command_buffer: vk::CommandBuffer,
        attachments: &[vk::ClearAttachment],
        rects: &[vk::ClearRect],
    ) -> VkResult<()> {
        unsafe { ash::Device::cmd_clear_attachments(self, command_buffer, attachments, rects) };
        Ok(())
    }

    fn cmd_resolve_image(
        &self,
        command_buffer: vk::CommandBuffer,
        src: vk::Image,
        src_layout: vk::ImageLayout,
        dst: vk::Image,
        dst_layout: vk::ImageLayout,
        regions: &[vk::ImageResolve],
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_resolve_image(
                self,
                command_buffer,
                src,
                src_layout,
                dst,
                dst_layout,
                regions,
            )
        };
        Ok(())
    }

    fn cmd_set_event(
        &self,
        command_buffer: vk::CommandBuffer,
        event: vk::Event,
        stage_mask: vk::PipelineStageFlags,
    ) -> VkResult<()> {
        unsafe { ash::Device::cmd_set_event(self, command_buffer, event, stage_mask) };
        Ok(())
    }

    fn cmd_reset_event(
        &self,
        command_buffer: vk::CommandBuffer,
        event: vk::Event,
        stage_mask: vk::PipelineStageFlags,
    ) -> VkResult<()> {
        unsafe { ash::Device::cmd_reset_event(self, command_buffer, event, stage_mask) };
        Ok(())
    }

    fn cmd_wait_events(
        &self,
        command_buffer: vk::CommandBuffer,
        events: &[vk::Event],
        src_stage_mask: vk::PipelineStageFlags,
        dst_stage_mask: vk::PipelineStageFlags,
        memory_barriers: &[vk::MemoryBarrier<'_>],
        buffer_memory_barriers: &[vk::BufferMemoryBarrier<'_>],
        image_memory_barriers: &[vk::ImageMemoryBarrier<'_>],
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_wait_events(
                self,
                command_buffer,
                events,
                src_stage_mask,
                dst_stage_mask,
                memory_barriers,
                buffer_memory_barriers,
                image_memory_barriers,
            )
        };
        Ok(())
    }

    fn cmd_pipeline_barrier(
        &self,
        command_buffer: vk::CommandBuffer,
        src_stage_mask: vk::PipelineStageFlags,
        dst_stage_mask: vk::PipelineStageFlags,
        dependency_flags: vk::DependencyFlags,
        memory_barriers: &[vk::MemoryBarrier<'_>],
        buffer_memory_barriers: &[vk::BufferMemoryBarrier<'_>],
        image_memory_barriers: &[vk::ImageMemoryBarrier<'_>],
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_pipeline_barrier(
                self,
                command_buffer,
                src_stage_mask,
                dst_stage_mask,
                dependency_flags,
                memory_barriers,
                buffer_memory_barriers,
                image_memory_barriers,
            )
        };
        Ok(())
    }

    fn cmd_begin_query(
        &self,
        command_buffer: vk::CommandBuffer,
        query_pool: vk::QueryPool,
        query: u32,
        flags: vk::QueryControlFlags,
    ) -> VkResult<()> {
        unsafe { ash::Device::cmd_begin_query(self, command_buffer, query_pool, query, flags) };
        Ok(())
    }

    fn cmd_end_query(
        &self,
        command_buffer: vk::CommandBuffer,
        query_pool: vk::QueryPool,
        query: u32,
    ) -> VkResult<()> {
        unsafe { ash::Device::cmd_end_query(self, command_buffer, query_pool, query) };
        Ok(())
    }

    fn cmd_reset_query_pool(
        &self,
        command_buffer: vk::CommandBuffer,
        query_pool: vk::QueryPool,
        first_query: u32,
        query_count: u32,
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_reset_query_pool(
                self,
                command_buffer,
                query_pool,
                first_query,
                query_count,
            )
        };
        Ok(())
    }

    fn cmd_write_timestamp(
        &self,
        command_buffer: vk::CommandBuffer,
        pipeline_stage: vk::PipelineStageFlags,
        query_pool: vk::QueryPool,
        query: u32,
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_write_timestamp(
                self,
                command_buffer,
                pipeline_stage,
                query_pool,
                query,
            )
        };
        Ok(())
    }

    fn cmd_copy_query_pool_results(
        &self,
        command_buffer: vk::CommandBuffer,
        query_pool: vk::QueryPool,
        first_query: u32,
        query_count: u32,
        dst: vk::Buffer,
        dst_offset: vk::DeviceSize,
        stride: vk::DeviceSize,
        flags: vk::QueryResultFlags,
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_copy_query_pool_results(
                self,
                command_buffer,
                query_pool,
                first_query,
                query_count,
                dst,
                dst_offset,
                stride,
                flags,
            )
        };
        Ok(())
    }

    fn cmd_begin_render_pass(
        &self,
        command_buffer: vk::CommandBuffer,
        begin_info: &vk::RenderPassBeginInfo<'_>,
        contents: vk::SubpassContents,
    ) -> VkResult<()> {
        unsafe { ash::Device::cmd_begin_render_pass(self, command_buffer, begin_info, contents) };
        Ok(())
    }

    fn cmd_next_subpass(
        &self,
        command_buffer: vk::CommandBuffer,
        contents: vk::SubpassContents,
    ) -> VkResult<()> {
        unsafe { ash::Device::cmd_next_subpass(self, command_buffer, contents) };
        Ok(())
    }

    fn cmd_end_render_pass(&self, command_buffer: vk::CommandBuffer) -> VkResult<()> {
        unsafe { ash::Device::cmd_end_render_pass(self, command_buffer) };
        Ok(())
    }

    fn cmd_execute_commands(
        &self,
        command_buffer: vk::CommandBuffer,
        secondary_command_buffers: &[vk::CommandBuffer],
    ) -> VkResult<()> {
        unsafe {
            ash::Device::cmd_execute_commands(self, command_buffer, secondary_command_buffers)
        };
        Ok(())
    }
}
