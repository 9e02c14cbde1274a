use ash::vk;

use super::BufferSource;
use crate::compile::Encode;
use crate::error::RecordError;
use crate::session::RecordingSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    pub vertex_count: u32,
    pub instance_count: u32,
    pub first_vertex: u32,
    pub first_instance: u32,
}

impl Encode for Draw {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        session.issue("vkCmdDraw", |device, cb| {
            device.cmd_draw(
                cb,
                self.vertex_count,
                self.instance_count,
                self.first_vertex,
                self.first_instance,
            )
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawIndexed {
    pub index_count: u32,
    pub instance_count: u32,
    pub first_index: u32,
    pub vertex_offset: i32,
    pub first_instance: u32,
}

impl Encode for DrawIndexed {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        session.issue("vkCmdDrawIndexed", |device, cb| {
            device.cmd_draw_indexed(
                cb,
                self.index_count,
                self.instance_count,
                self.first_index,
                self.vertex_offset,
                self.first_instance,
            )
        })
    }
}

#[derive(Debug, Clone)]
pub struct DrawIndirect {
    pub buffer: BufferSource,
    pub offset: vk::DeviceSize,
    pub draw_count: u32,
    pub stride: u32,
}

pub fn draw_indirect(
    buffer: impl Into<BufferSource>,
    offset: vk::DeviceSize,
    draw_count: u32,
    stride: u32,
) -> DrawIndirect {
    DrawIndirect {
        buffer: buffer.into(),
        offset,
        draw_count,
        stride,
    }
}

impl Encode for DrawIndirect {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let buffer = self.buffer.handle();
        session.issue("vkCmdDrawIndirect", |device, cb| {
            device.cmd_draw_indirect(cb, buffer, self.offset, self.draw_count, self.stride)
        })?;
        self.buffer.retain(session);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DrawIndexedIndirect {
    pub buffer: BufferSource,
    pub offset: vk::DeviceSize,
    pub draw_count: u32,
    pub stride: u32,
}

pub fn draw_indexed_indirect(
    buffer: impl Into<BufferSource>,
    offset: vk::DeviceSize,
    draw_count: u32,
    stride: u32,
) -> DrawIndexedIndirect {
    DrawIndexedIndirect {
        buffer: buffer.into(),
        offset,
        draw_count,
        stride,
    }
}

impl Encode for DrawIndexedIndirect {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let buffer = self.buffer.handle();
        session.issue("vkCmdDrawIndexedIndirect", |device, cb| {
            device.cmd_draw_indexed_indirect(cb, buffer, self.offset, self.draw_count, self.stride)
        })?;
        self.buffer.retain(session);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Encode for Dispatch {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        session.issue("vkCmdDispatch", |device, cb| {
            device.cmd_dispatch(cb, self.x, self.y, self.z)
        })
    }
}

#[derive(Debug, Clone)]
pub struct DispatchIndirect {
    pub buffer: BufferSource,
    pub offset: vk::DeviceSize,
}

pub fn dispatch_indirect(
    buffer: impl Into<BufferSource>,
    offset: vk::DeviceSize,
) -> DispatchIndirect {
    DispatchIndirect {
        buffer: buffer.into(),
        offset,
    }
}

impl Encode for DispatchIndirect {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let buffer = self.buffer.handle();
        session.issue("vkCmdDispatchIndirect", |device, cb| {
            device.cmd_dispatch_indirect(cb, buffer, self.offset)
        })?;
        self.buffer.retain(session);
        Ok(())
    }
}
