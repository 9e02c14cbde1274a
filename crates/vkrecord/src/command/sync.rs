//! Events and barriers.

use std::sync::Arc;

use ash::vk;
use vkrecord_core::{Buffer, Event, Image, InputBuffer};

use crate::compile::Encode;
use crate::error::RecordError;
use crate::session::RecordingSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryBarrier {
    pub src_access_mask: vk::AccessFlags,
    pub dst_access_mask: vk::AccessFlags,
}

impl MemoryBarrier {
    fn to_vk(self) -> vk::MemoryBarrier<'static> {
        vk::MemoryBarrier::default()
            .src_access_mask(self.src_access_mask)
            .dst_access_mask(self.dst_access_mask)
    }
}

#[derive(Debug, Clone)]
pub struct BufferMemoryBarrier {
    pub src_access_mask: vk::AccessFlags,
    pub dst_access_mask: vk::AccessFlags,
    pub src_queue_family_index: u32,
    pub dst_queue_family_index: u32,
    pub buffer: Arc<Buffer>,
    pub offset: vk::DeviceSize,
    pub size: vk::DeviceSize,
}

impl BufferMemoryBarrier {
    fn to_vk(&self) -> vk::BufferMemoryBarrier<'static> {
        vk::BufferMemoryBarrier::default()
            .src_access_mask(self.src_access_mask)
            .dst_access_mask(self.dst_access_mask)
            .src_queue_family_index(self.src_queue_family_index)
            .dst_queue_family_index(self.dst_queue_family_index)
            .buffer(self.buffer.handle())
            .offset(self.offset)
            .size(self.size)
    }
}

/// Barrier over a whole buffer.
pub fn buffer_memory_barrier(
    src_access_mask: vk::AccessFlags,
    dst_access_mask: vk::AccessFlags,
    src_queue_family_index: u32,
    dst_queue_family_index: u32,
    buffer: Arc<Buffer>,
) -> BufferMemoryBarrier {
    BufferMemoryBarrier {
        src_access_mask,
        dst_access_mask,
        src_queue_family_index,
        dst_queue_family_index,
        buffer,
        offset: 0,
        size: vk::WHOLE_SIZE,
    }
}

/// Barrier over the whole device buffer backing a staging buffer.
pub fn data_buffer_memory_barrier(
    src_access_mask: vk::AccessFlags,
    dst_access_mask: vk::AccessFlags,
    src_queue_family_index: u32,
    dst_queue_family_index: u32,
    buffer: &InputBuffer,
) -> BufferMemoryBarrier {
    buffer_memory_barrier(
        src_access_mask,
        dst_access_mask,
        src_queue_family_index,
        dst_queue_family_index,
        buffer.buffer().clone(),
    )
}

#[derive(Debug, Clone)]
pub struct ImageMemoryBarrier {
    pub src_access_mask: vk::AccessFlags,
    pub dst_access_mask: vk::AccessFlags,
    pub old_layout: vk::ImageLayout,
    pub new_layout: vk::ImageLayout,
    pub src_queue_family_index: u32,
    pub dst_queue_family_index: u32,
    pub image: Arc<Image>,
    pub subresource_range: vk::ImageSubresourceRange,
}

impl ImageMemoryBarrier {
    fn to_vk(&self) -> vk::ImageMemoryBarrier<'static> {
        vk::ImageMemoryBarrier::default()
            .src_access_mask(self.src_access_mask)
            .dst_access_mask(self.dst_access_mask)
            .old_layout(self.old_layout)
            .new_layout(self.new_layout)
            .src_queue_family_index(self.src_queue_family_index)
            .dst_queue_family_index(self.dst_queue_family_index)
            .image(self.image.handle())
            .subresource_range(self.subresource_range)
    }
}

/// Native barrier arrays built from a command's barrier lists.
struct Barriers {
    memory: Vec<vk::MemoryBarrier<'static>>,
    buffer: Vec<vk::BufferMemoryBarrier<'static>>,
    image: Vec<vk::ImageMemoryBarrier<'static>>,
}

impl Barriers {
    fn new(
        memory: &[MemoryBarrier],
        buffer: &[BufferMemoryBarrier],
        image: &[ImageMemoryBarrier],
    ) -> Self {
        Self {
            memory: memory.iter().map(|b| b.to_vk()).collect(),
            buffer: buffer.iter().map(BufferMemoryBarrier::to_vk).collect(),
            image: image.iter().map(ImageMemoryBarrier::to_vk).collect(),
        }
    }
}

fn retain_barriers(
    session: &mut RecordingSession<'_>,
    buffer_barriers: Vec<BufferMemoryBarrier>,
    image_barriers: Vec<ImageMemoryBarrier>,
) {
    session
        .ledger()
        .add_all(buffer_barriers.into_iter().map(|b| b.buffer));
    session
        .ledger()
        .add_all(image_barriers.into_iter().map(|b| b.image));
}

#[derive(Debug, Clone)]
pub struct SetEvent {
    pub event: Arc<Event>,
    pub stage_mask: vk::PipelineStageFlags,
}

impl Encode for SetEvent {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let event = self.event.handle();
        session.issue("vkCmdSetEvent", |device, cb| {
            device.cmd_set_event(cb, event, self.stage_mask)
        })?;
        session.ledger().add(self.event);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ResetEvent {
    pub event: Arc<Event>,
    pub stage_mask: vk::PipelineStageFlags,
}

impl Encode for ResetEvent {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let event = self.event.handle();
        session.issue("vkCmdResetEvent", |device, cb| {
            device.cmd_reset_event(cb, event, self.stage_mask)
        })?;
        session.ledger().add(self.event);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct WaitEvents {
    pub events: Vec<Arc<Event>>,
    pub src_stage_mask: vk::PipelineStageFlags,
    pub dst_stage_mask: vk::PipelineStageFlags,
    pub memory_barriers: Vec<MemoryBarrier>,
    pub buffer_memory_barriers: Vec<BufferMemoryBarrier>,
    pub image_memory_barriers: Vec<ImageMemoryBarrier>,
}

impl Encode for WaitEvents {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let events: Vec<vk::Event> = self.events.iter().map(|e| e.handle()).collect();
        let barriers = Barriers::new(
            &self.memory_barriers,
            &self.buffer_memory_barriers,
            &self.image_memory_barriers,
        );
        session.issue("vkCmdWaitEvents", |device, cb| {
            device.cmd_wait_events(
                cb,
                &events,
                self.src_stage_mask,
                self.dst_stage_mask,
                &barriers.memory,
                &barriers.buffer,
                &barriers.image,
            )
        })?;
        session.ledger().add_all(self.events);
        retain_barriers(
            session,
            self.buffer_memory_barriers,
            self.image_memory_barriers,
        );
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PipelineBarrier {
    pub src_stage_mask: vk::PipelineStageFlags,
    pub dst_stage_mask: vk::PipelineStageFlags,
    pub dependency_flags: vk::DependencyFlags,
    pub memory_barriers: Vec<MemoryBarrier>,
    pub buffer_memory_barriers: Vec<BufferMemoryBarrier>,
    pub image_memory_barriers: Vec<ImageMemoryBarrier>,
}

impl PipelineBarrier {
    /// An execution-only barrier; barrier lists can be filled in afterwards.
    pub fn new(
        src_stage_mask: vk::PipelineStageFlags,
        dst_stage_mask: vk::PipelineStageFlags,
        dependency_flags: vk::DependencyFlags,
    ) -> Self {
        Self {
            src_stage_mask,
            dst_stage_mask,
            dependency_flags,
            memory_barriers: Vec::new(),
            buffer_memory_barriers: Vec::new(),
            image_memory_barriers: Vec::new(),
        }
    }
}

impl Encode for PipelineBarrier {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        let barriers = Barriers::new(
            &self.memory_barriers,
            &self.buffer_memory_barriers,
            &self.image_memory_barriers,
        );
        session.issue("vkCmdPipelineBarrier", |device, cb| {
            device.cmd_pipeline_barrier(
                cb,
                self.src_stage_mask,
                self.dst_stage_mask,
                self.dependency_flags,
                &barriers.memory,
                &barriers.buffer,
                &barriers.image,
            )
        })?;
        retain_barriers(
            session,
            self.buffer_memory_barriers,
            self.image_memory_barriers,
        );
        Ok(())
    }
}
