//! Copy, blit, resolve, update and clear commands.

use std::sync::Arc;

use ash::vk;
use vkrecord_core::{Buffer, Image};

use super::BufferSource;
use crate::compile::Encode;
use crate::error::RecordError;
use crate::session::RecordingSession;

/// Color clear value, in the numeric format of the cleared attachment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClearColor {
    Float32([f32; 4]),
    Int32([i32; 4]),
    Uint32([u32; 4]),
}

impl ClearColor {
    pub fn to_vk(self) -> vk::ClearColorValue {
        match self {
            ClearColor::Float32(float32) => vk::ClearColorValue { float32 },
            ClearColor::Int32(int32) => vk::ClearColorValue { int32 },
            ClearColor::Uint32(uint32) => vk::ClearColorValue { uint32 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClearValue {
    Color(ClearColor),
    DepthStencil { depth: f32, stencil: u32 },
}

impl ClearValue {
    pub fn to_vk(self) -> vk::ClearValue {
        match self {
            ClearValue::Color(color) => vk::ClearValue {
                color: color.to_vk(),
            },
            ClearValue::DepthStencil { depth, stencil } => vk::ClearValue {
                depth_stencil: vk::ClearDepthStencilValue { depth, stencil },
            },
        }
    }
}

pub fn clear_color(color: ClearColor) -> ClearValue {
    ClearValue::Color(color)
}

pub fn clear_depth_stencil(depth: f32, stencil: u32) -> ClearValue {
    ClearValue::DepthStencil { depth, stencil }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearAttachment {
    pub aspect_mask: vk::ImageAspectFlags,
    pub color_attachment: u32,
    pub clear_value: ClearValue,
}

impl ClearAttachment {
    pub fn to_vk(self) -> vk::ClearAttachment {
        vk::ClearAttachment {
            aspect_mask: self.aspect_mask,
            color_attachment: self.color_attachment,
            clear_value: self.clear_value.to_vk(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CopyBuffer {
    pub src: BufferSource,
    pub dst: Arc<Buffer>,
    pub regions: Vec<vk::BufferCopy>,
}

pub fn copy_buffer(
    src: impl Into<BufferSource>,
    dst: Arc<Buffer>,
    regions: Vec<vk::BufferCopy>,
) -> CopyBuffer {
    CopyBuffer {
        src: src.into(),
        dst,
        regions,
    }
}

impl Encode for CopyBuffer {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let src = self.src.handle();
        let dst = self.dst.handle();
        session.issue("vkCmdCopyBuffer", |device, cb| {
            device.cmd_copy_buffer(cb, src, dst, &self.regions)
        })?;
        self.src.retain(session);
        session.ledger().add(self.dst);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CopyImage {
    pub src: Arc<Image>,
    pub src_layout: vk::ImageLayout,
    pub dst: Arc<Image>,
    pub dst_layout: vk::ImageLayout,
    pub regions: Vec<vk::ImageCopy>,
}

impl Encode for CopyImage {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let (src, dst) = (self.src.handle(), self.dst.handle());
        session.issue("vkCmdCopyImage", |device, cb| {
            device.cmd_copy_image(
                cb,
                src,
                self.src_layout,
                dst,
                self.dst_layout,
                &self.regions,
            )
        })?;
        session.ledger().add(self.src);
        session.ledger().add(self.dst);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct BlitImage {
    pub src: Arc<Image>,
    pub src_layout: vk::ImageLayout,
    pub dst: Arc<Image>,
    pub dst_layout: vk::ImageLayout,
    pub regions: Vec<vk::ImageBlit>,
    pub filter: vk::Filter,
}

impl Encode for BlitImage {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let (src, dst) = (self.src.handle(), self.dst.handle());
        session.issue("vkCmdBlitImage", |device, cb| {
            device.cmd_blit_image(
                cb,
                src,
                self.src_layout,
                dst,
                self.dst_layout,
                &self.regions,
                self.filter,
            )
        })?;
        session.ledger().add(self.src);
        session.ledger().add(self.dst);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CopyBufferToImage {
    pub src: BufferSource,
    pub dst: Arc<Image>,
    pub dst_layout: vk::ImageLayout,
    pub regions: Vec<vk::BufferImageCopy>,
}

pub fn copy_buffer_to_image(
    src: impl Into<BufferSource>,
    dst: Arc<Image>,
    dst_layout: vk::ImageLayout,
    regions: Vec<vk::BufferImageCopy>,
) -> CopyBufferToImage {
    CopyBufferToImage {
        src: src.into(),
        dst,
        dst_layout,
        regions,
    }
}

impl Encode for CopyBufferToImage {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let (src, dst) = (self.src.handle(), self.dst.handle());
        session.issue("vkCmdCopyBufferToImage", |device, cb| {
            device.cmd_copy_buffer_to_image(cb, src, dst, self.dst_layout, &self.regions)
        })?;
        self.src.retain(session);
        session.ledger().add(self.dst);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CopyImageToBuffer {
    pub src: Arc<Image>,
    pub src_layout: vk::ImageLayout,
    pub dst: Arc<Buffer>,
    pub regions: Vec<vk::BufferImageCopy>,
}

impl Encode for CopyImageToBuffer {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let (src, dst) = (self.src.handle(), self.dst.handle());
        session.issue("vkCmdCopyImageToBuffer", |device, cb| {
            device.cmd_copy_image_to_buffer(cb, src, self.src_layout, dst, &self.regions)
        })?;
        session.ledger().add(self.src);
        session.ledger().add(self.dst);
        Ok(())
    }
}

/// Inline update of a buffer region with data embedded in the command buffer.
#[derive(Debug, Clone)]
pub struct UpdateBuffer {
    pub dst: Arc<Buffer>,
    pub dst_offset: vk::DeviceSize,
    pub data: Vec<u8>,
}

pub fn update_buffer<T: bytemuck::Pod>(
    dst: Arc<Buffer>,
    dst_offset: vk::DeviceSize,
    data: &[T],
) -> UpdateBuffer {
    UpdateBuffer {
        dst,
        dst_offset,
        data: bytemuck::cast_slice(data).to_vec(),
    }
}

impl Encode for UpdateBuffer {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let dst = self.dst.handle();
        session.issue("vkCmdUpdateBuffer", |device, cb| {
            device.cmd_update_buffer(cb, dst, self.dst_offset, &self.data)
        })?;
        session.ledger().add(self.dst);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct FillBuffer {
    pub dst: Arc<Buffer>,
    pub dst_offset: vk::DeviceSize,
    pub size: vk::DeviceSize,
    pub data: u32,
}

impl Encode for FillBuffer {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let dst = self.dst.handle();
        session.issue("vkCmdFillBuffer", |device, cb| {
            device.cmd_fill_buffer(cb, dst, self.dst_offset, self.size, self.data)
        })?;
        session.ledger().add(self.dst);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ClearColorImage {
    pub image: Arc<Image>,
    pub layout: vk::ImageLayout,
    pub color: ClearColor,
    pub ranges: Vec<vk::ImageSubresourceRange>,
}

impl Encode for ClearColorImage {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let image = self.image.handle();
        let color = self.color.to_vk();
        session.issue("vkCmdClearColorImage", |device, cb| {
            device.cmd_clear_color_image(cb, image, self.layout, &color, &self.ranges)
        })?;
        session.ledger().add(self.image);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ClearDepthStencilImage {
    pub image: Arc<Image>,
    pub layout: vk::ImageLayout,
    pub depth_stencil: vk::ClearDepthStencilValue,
    pub ranges: Vec<vk::ImageSubresourceRange>,
}

impl Encode for ClearDepthStencilImage {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let image = self.image.handle();
        session.issue("vkCmdClearDepthStencilImage", |device, cb| {
            device.cmd_clear_depth_stencil_image(
                cb,
                image,
                self.layout,
                &self.depth_stencil,
                &self.ranges,
            )
        })?;
        session.ledger().add(self.image);
        Ok(())
    }
}

/// Clear regions of the current subpass's attachments.
#[derive(Debug, Clone)]
pub struct ClearAttachments {
    pub attachments: Vec<ClearAttachment>,
    pub rects: Vec<vk::ClearRect>,
}

impl Encode for ClearAttachments {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let attachments: Vec<vk::ClearAttachment> =
            self.attachments.iter().map(|a| a.to_vk()).collect();
        session.issue("vkCmdClearAttachments", |device, cb| {
            device.cmd_clear_attachments(cb, &attachments, &self.rects)
        })
    }
}

#[derive(Debug, Clone)]
pub struct ResolveImage {
    pub src: Arc<Image>,
    pub src_layout: vk::ImageLayout,
    pub dst: Arc<Image>,
    pub dst_layout: vk::ImageLayout,
    pub regions: Vec<vk::ImageResolve>,
}

impl Encode for ResolveImage {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let (src, dst) = (self.src.handle(), self.dst.handle());
        session.issue("vkCmdResolveImage", |device, cb| {
            device.cmd_resolve_image(
                cb,
                src,
                self.src_layout,
                dst,
                self.dst_layout,
                &self.regions,
            )
        })?;
        session.ledger().add(self.src);
        session.ledger().add(self.dst);
        Ok(())
    }
}
